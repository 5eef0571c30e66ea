//! Waitlist signup registry.

mod memory;

pub use memory::Registry;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// A single waitlist signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRecord {
    /// Generated identifier, never reused
    pub id: Uuid,

    /// Email exactly as submitted; no normalization
    pub email: String,

    /// When the signup was recorded; used only for ordering
    pub created_at: DateTime<Utc>,
}

impl SignupRecord {
    /// Create a record with a fresh id and the current timestamp.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            email: email.into(),
            created_at: Utc::now(),
        }
    }
}

/// Account record reserved for a future auth feature. Nothing routes to
/// these yet; only the registry-level operations exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: Uuid,
    pub username: String,
    pub password: String,
}

/// Insert refused because the email is already on the waitlist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("email already on the waitlist: {0}")]
pub struct DuplicateEmail(pub String);

/// Check the structural shape of an email address: exactly one `@`,
/// non-empty whitespace-free text on both sides, and a dot inside the
/// domain with at least one character on each side. Not RFC validation.
pub fn validate_email(email: &str) -> Result<(), String> {
    let Some((local, domain)) = email.split_once('@') else {
        return Err("must contain '@'".into());
    };

    if local.is_empty() {
        return Err("missing text before '@'".into());
    }

    if domain.contains('@') {
        return Err("must contain exactly one '@'".into());
    }

    if email.chars().any(char::is_whitespace) {
        return Err("must not contain whitespace".into());
    }

    let has_inner_dot = domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len());

    if !has_inner_dot {
        return Err("domain must contain a '.'".into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_plain_addresses() {
        assert_eq!(validate_email("artist@studio.com"), Ok(()));
        assert_eq!(validate_email("a@b.co"), Ok(()));
        assert_eq!(validate_email("first.last@sub.domain.io"), Ok(()));
    }

    #[test]
    fn test_validate_email_rejects_missing_at() {
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at.example.com").is_err());
    }

    #[test]
    fn test_validate_email_rejects_empty_local_part() {
        assert!(validate_email("@studio.com").is_err());
    }

    #[test]
    fn test_validate_email_rejects_multiple_ats() {
        assert!(validate_email("artist@@studio.com").is_err());
        assert!(validate_email("artist@studio@com.com").is_err());
    }

    #[test]
    fn test_validate_email_rejects_whitespace() {
        assert!(validate_email("art ist@studio.com").is_err());
        assert!(validate_email("artist@stu dio.com").is_err());
        assert!(validate_email(" artist@studio.com").is_err());
    }

    #[test]
    fn test_validate_email_requires_dot_inside_domain() {
        assert!(validate_email("artist@studio").is_err());
        assert!(validate_email("artist@.com").is_err());
        assert!(validate_email("artist@studio.").is_err());
        // a trailing dot is fine as long as an inner one exists
        assert_eq!(validate_email("artist@studio.com."), Ok(()));
    }

    #[test]
    fn test_record_ids_are_unique() {
        let a = SignupRecord::new("a@example.com");
        let b = SignupRecord::new("a@example.com");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_record_serializes_camel_case() {
        let record = SignupRecord::new("artist@studio.com");
        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("created_at").is_none());
    }
}
