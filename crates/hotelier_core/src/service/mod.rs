//! Entity services and their shared error vocabulary.
//!
//! # Responsibility
//! - Wrap the storage context with validate-then-mutate semantics.
//! - Keep the two domain error kinds in one place.
//!
//! # Invariants
//! - Services hold no entity state; the storage context is the sole
//!   owner of all records.
//! - Every mutating operation is all-or-nothing: validation and lookups
//!   happen fully before the first store write.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod reservation_service;
pub mod room_service;
pub mod user_service;

/// Entity type named by a domain error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Room,
    Reservation,
    Hotel,
}

impl EntityKind {
    fn label(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Room => "room",
            Self::Reservation => "reservation",
            Self::Hotel => "hotel",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Domain error returned by the entity services.
///
/// Precondition violations (for example a `None` user handed to
/// `ReservationService::reservations_of_user`) are programmer errors and
/// panic instead of returning a variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The entity failed its structural predicate; the store was not
    /// touched.
    Validation(EntityKind),
    /// The targeted id (or a referenced sub-entity) is absent from the
    /// store; the store was not touched.
    NotFound(EntityKind, i64),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(kind) => {
                write!(f, "given {} didn't pass validation", kind.label())
            }
            Self::NotFound(kind, id) => {
                write!(f, "{} with id {id} not found", kind.label())
            }
        }
    }
}

impl Error for ServiceError {}
