//! In-memory registry implementation.

use super::{DuplicateEmail, SignupRecord, UserRecord};
use std::collections::HashMap;
use uuid::Uuid;

/// In-memory waitlist registry.
///
/// Records are keyed by their generated id. Email uniqueness is enforced
/// here rather than by callers: [`Registry::insert`] checks and stores under
/// a single `&mut self` borrow, so a caller holding the write lock gets
/// compare-and-insert semantics. State lives for the process lifetime only.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    /// Signup records indexed by generated id
    signups: HashMap<Uuid, SignupRecord>,

    /// Reserved account records, unused by any endpoint
    users: HashMap<Uuid, UserRecord>,
}

impl Registry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record, refusing an email that is already present.
    ///
    /// Duplicate detection is a linear scan over stored records; there is no
    /// secondary index at this scale.
    pub fn insert(&mut self, record: SignupRecord) -> Result<(), DuplicateEmail> {
        if self.signup_by_email(&record.email).is_some() {
            return Err(DuplicateEmail(record.email));
        }
        self.signups.insert(record.id, record);
        Ok(())
    }

    /// Create and store a signup for `email`, returning the new record.
    ///
    /// Generates the id and timestamp; performs no shape validation on the
    /// email, which is the endpoint's responsibility.
    pub fn create_signup(&mut self, email: &str) -> Result<SignupRecord, DuplicateEmail> {
        let record = SignupRecord::new(email);
        self.insert(record.clone())?;
        Ok(record)
    }

    /// Look up a signup by exact, case-sensitive email match.
    pub fn signup_by_email(&self, email: &str) -> Option<&SignupRecord> {
        self.signups.values().find(|r| r.email == email)
    }

    /// All signups, most recent first. Records sharing a timestamp keep an
    /// unspecified relative order.
    pub fn signups(&self) -> Vec<&SignupRecord> {
        let mut records: Vec<&SignupRecord> = self.signups.values().collect();
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records
    }

    /// Number of stored signups.
    pub fn signup_count(&self) -> usize {
        self.signups.len()
    }

    /// Create a reserved account record.
    pub fn create_user(
        &mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> UserRecord {
        let user = UserRecord {
            id: Uuid::new_v4(),
            username: username.into(),
            password: password.into(),
        };
        self.users.insert(user.id, user.clone());
        user
    }

    /// Look up a reserved account by id.
    pub fn user(&self, id: Uuid) -> Option<&UserRecord> {
        self.users.get(&id)
    }

    /// Look up a reserved account by username.
    pub fn user_by_username(&self, username: &str) -> Option<&UserRecord> {
        self.users.values().find(|u| u.username == username)
    }
}
