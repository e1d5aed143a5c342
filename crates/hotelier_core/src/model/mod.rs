//! Domain model for hotel-reservation management.
//!
//! # Responsibility
//! - Define the canonical User, Hotel, Room and Reservation records.
//! - Keep field-level invariants next to the data they constrain.
//!
//! # Invariants
//! - Every entity is identified by a store-assigned `i64` id.
//! - Reservations and rooms reference other entities by value, not by
//!   owning pointer; deleting the referenced entity does not cascade.

pub mod hotel;
pub mod reservation;
pub mod room;
pub mod user;
