//! Reservation domain model.
//!
//! # Responsibility
//! - Define the booking record tying a user to a room over a time range.
//!
//! # Invariants
//! - `start_date` must be strictly before `end_date` for a reservation to
//!   pass validation.
//! - `user` and `room` are non-owning by-value references; deleting the
//!   referenced entity leaves the reservation in place.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::room::Room;
use crate::model::user::User;

/// Store-assigned identifier for a reservation.
pub type ReservationId = i64;

/// Booking of one room by one user over a half-open time range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    /// Store-assigned id; `0` for records not yet persisted.
    pub id: ReservationId,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Booking guest, kept by value. `None` never passes validation.
    pub user: Option<User>,
    /// Booked room, kept by value. `None` never passes validation.
    pub room: Option<Room>,
}

impl Reservation {
    /// Creates a reservation record for the given user and room.
    ///
    /// The id is replaced by `ReservationService::add` with the next value
    /// from the store's reservation sequence.
    pub fn new(
        id: ReservationId,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
        user: User,
        room: Room,
    ) -> Self {
        Self {
            id,
            start_date,
            end_date,
            user: Some(user),
            room: Some(room),
        }
    }
}
