//! Room domain model.
//!
//! # Responsibility
//! - Define the bookable room record and its structural invariants.
//!
//! # Invariants
//! - `hotel` is a non-owning by-value reference; the room service checks
//!   at add time that an equal hotel exists in the store.
//! - `number_of_room` and `amount_of_people` must be positive.

use serde::{Deserialize, Serialize};

use crate::model::hotel::Hotel;

/// Store-assigned identifier for a room.
pub type RoomId = i64;

/// Bookable room belonging to a hotel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    /// Store-assigned id; `0` for records not yet persisted.
    pub id: RoomId,
    /// Owning property, kept by value. `None` never passes validation.
    pub hotel: Option<Hotel>,
    /// Room number within the hotel; must be positive.
    pub number_of_room: i32,
    /// Guest capacity; must be positive.
    pub amount_of_people: i32,
}

impl Room {
    /// Creates a room record attached to the given hotel.
    ///
    /// The id is replaced by `RoomService::add` with the next value from
    /// the store's room sequence.
    pub fn new(id: RoomId, hotel: Hotel, number_of_room: i32, amount_of_people: i32) -> Self {
        Self {
            id,
            hotel: Some(hotel),
            number_of_room,
            amount_of_people,
        }
    }
}
