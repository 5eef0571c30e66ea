//! API request and response types.

use crate::registry::SignupRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request to join the waitlist.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    /// Email address to record
    pub email: String,
}

/// Response after a successful signup.
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub signup: SignupInfo,
}

/// Caller-facing projection of a stored record.
///
/// Exactly these three fields cross the wire, however the stored record
/// grows later.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupInfo {
    pub id: Uuid,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&SignupRecord> for SignupInfo {
    fn from(record: &SignupRecord) -> Self {
        Self {
            id: record.id,
            email: record.email.clone(),
            created_at: record.created_at,
        }
    }
}

/// Full waitlist listing.
#[derive(Debug, Serialize)]
pub struct SignupsResponse {
    pub signups: Vec<SignupInfo>,
    pub total: usize,
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub waitlist_count: usize,
}
