//! User domain model.
//!
//! # Responsibility
//! - Define the guest account record referenced by reservations.
//! - Keep the email well-formedness check next to the field it guards.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a user.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type UserId = i64;

// Deliberately loose `local@domain` shape: exactly one `@`, no
// whitespace, both segments non-empty.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("valid email regex"));

/// Guest account referenced by reservations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned id; `0` for records not yet persisted.
    pub id: UserId,
    /// Contact address; must satisfy [`User::email_is_valid`] before any
    /// store mutation.
    pub email: String,
}

impl User {
    /// Creates a user record with an explicit id.
    ///
    /// Callers building records for `UserService::add` may pass any id;
    /// the service replaces it with the next id from the store sequence.
    pub fn new(id: UserId, email: impl Into<String>) -> Self {
        Self {
            id,
            email: email.into(),
        }
    }

    /// Returns whether the email has a basic `local@domain` shape.
    pub fn email_is_valid(&self) -> bool {
        EMAIL_RE.is_match(&self.email)
    }
}
