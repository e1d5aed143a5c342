//! Core domain logic for Hotelier, a hotel-reservation management
//! backend.
//!
//! This crate is the single source of truth for business invariants:
//! entity validation, booking rules and the storage-context contract.
//! Network and UI surfaces live outside it.

pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::{CoreConfig, CoreConfigBuilder, ReferencePolicy};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::hotel::{Hotel, HotelId};
pub use model::reservation::{Reservation, ReservationId};
pub use model::room::{Room, RoomId};
pub use model::user::{User, UserId};
pub use service::reservation_service::{reservation_validation, ReservationService};
pub use service::room_service::{room_validation, RoomService};
pub use service::user_service::{user_validation, UserService};
pub use service::{EntityKind, ServiceError};
pub use store::memory::MemoryDatabaseContext;
pub use store::DatabaseContext;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
