//! Hotel domain model.
//!
//! Hotels are read-only reference data: rooms point at them, but no
//! service mutates them. They are seeded directly through the storage
//! context.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Store-assigned identifier for a hotel.
pub type HotelId = i64;

/// Property that rooms belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hotel {
    pub id: HotelId,
    pub name: String,
    /// Reception opening time of day.
    pub open_time: NaiveTime,
    /// Reception closing time of day.
    pub close_time: NaiveTime,
}

impl Hotel {
    pub fn new(
        id: HotelId,
        name: impl Into<String>,
        open_time: NaiveTime,
        close_time: NaiveTime,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            open_time,
            close_time,
        }
    }
}
