//! HTTP request handlers.

use super::types::{HealthResponse, SignupInfo, SignupRequest, SignupResponse, SignupsResponse};
use super::AppState;
use crate::error::{ApiError, FieldError};
use crate::registry::validate_email;
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::{info, warn};

/// Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let registry = state.registry.read().await;

    Json(HealthResponse {
        status: "ok".to_string(),
        waitlist_count: registry.signup_count(),
    })
}

/// Add an email to the waitlist.
///
/// Validates the payload shape, then inserts through the registry, which
/// enforces email uniqueness under the single write-lock acquisition.
pub async fn create_signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<SignupResponse>), ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        ApiError::InvalidEmail(vec![FieldError::email(rejection.body_text())])
    })?;

    if let Err(message) = validate_email(&request.email) {
        warn!(email = %request.email, %message, "Signup rejected: malformed email");
        return Err(ApiError::InvalidEmail(vec![FieldError::email(message)]));
    }

    let mut registry = state.registry.write().await;
    let record = match registry.create_signup(&request.email) {
        Ok(record) => record,
        Err(duplicate) => {
            warn!(email = %duplicate.0, "Signup rejected: already on the waitlist");
            return Err(duplicate.into());
        }
    };
    drop(registry);

    info!(email = %record.email, id = %record.id, "Joined the waitlist");

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "Successfully joined the waitlist".to_string(),
            signup: SignupInfo::from(&record),
        }),
    ))
}

/// List every signup, most recent first.
pub async fn list_signups(State(state): State<AppState>) -> Json<SignupsResponse> {
    let registry = state.registry.read().await;
    let signups: Vec<SignupInfo> = registry.signups().into_iter().map(SignupInfo::from).collect();

    let total = signups.len();
    Json(SignupsResponse { signups, total })
}
