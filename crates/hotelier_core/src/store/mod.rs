//! Storage context contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Define the injected storage abstraction every service mutates
//!   through.
//! - Keep id assignment (one monotonic sequence per entity type) inside
//!   the storage boundary.
//!
//! # Invariants
//! - Entities passed to `add_*` already carry their assigned id.
//! - `update_*` is a full replace by id, never a merge.
//! - Snapshots returned by `users()`/`rooms()`/`reservations()`/`hotels()`
//!   iterate in id order, which equals insertion order because ids are
//!   monotonic.

pub mod memory;

use std::collections::BTreeMap;

use crate::model::hotel::{Hotel, HotelId};
use crate::model::reservation::{Reservation, ReservationId};
use crate::model::room::{Room, RoomId};
use crate::model::user::{User, UserId};

/// Injected storage abstraction holding all entity records.
///
/// The context is the sole owner of entity state; services hold no state
/// of their own and operate only through this trait. One instance is
/// constructed per process and passed by shared reference to each
/// service.
///
/// # Contract
/// - Lookups accept any id, including zero and negative values, and
///   return `None` when no record matches.
/// - `next_*_id` sequences are monotonic and independent per entity
///   type.
pub trait DatabaseContext {
    fn get_user(&self, id: UserId) -> Option<User>;
    fn users(&self) -> BTreeMap<UserId, User>;
    fn add_user(&self, user: User);
    fn update_user(&self, user: User);
    fn delete_user(&self, user: &User);
    fn next_user_id(&self) -> UserId;

    fn get_room(&self, id: RoomId) -> Option<Room>;
    fn rooms(&self) -> BTreeMap<RoomId, Room>;
    fn add_room(&self, room: Room);
    fn update_room(&self, room: Room);
    fn delete_room(&self, room: &Room);
    fn next_room_id(&self) -> RoomId;

    fn get_reservation(&self, id: ReservationId) -> Option<Reservation>;
    fn reservations(&self) -> BTreeMap<ReservationId, Reservation>;
    fn add_reservation(&self, reservation: Reservation);
    fn update_reservation(&self, reservation: Reservation);
    fn delete_reservation(&self, reservation: &Reservation);
    fn next_reservation_id(&self) -> ReservationId;

    fn get_hotel(&self, id: HotelId) -> Option<Hotel>;
    fn hotels(&self) -> BTreeMap<HotelId, Hotel>;
    fn add_hotel(&self, hotel: Hotel);
    fn update_hotel(&self, hotel: Hotel);
    fn delete_hotel(&self, hotel: &Hotel);
    fn next_hotel_id(&self) -> HotelId;
}
