//! In-memory storage context.
//!
//! # Responsibility
//! - Hold the four entity maps plus their id counters in one cohesive
//!   struct.
//! - Serve direct map reads/writes with no suspension points.
//!
//! # Invariants
//! - Single logical caller at a time: interior mutability is a `RefCell`,
//!   so the type is not `Sync`. An embedding that needs cross-thread
//!   access must add its own synchronization around the context.
//! - Id counters only move forward; ids are never reused within one
//!   context lifetime, even after deletes.

use std::cell::RefCell;
use std::collections::BTreeMap;

use log::debug;

use crate::model::hotel::{Hotel, HotelId};
use crate::model::reservation::{Reservation, ReservationId};
use crate::model::room::{Room, RoomId};
use crate::model::user::{User, UserId};
use crate::store::DatabaseContext;

#[derive(Debug, Default)]
struct Tables {
    users: BTreeMap<UserId, User>,
    rooms: BTreeMap<RoomId, Room>,
    reservations: BTreeMap<ReservationId, Reservation>,
    hotels: BTreeMap<HotelId, Hotel>,
    last_user_id: UserId,
    last_room_id: RoomId,
    last_reservation_id: ReservationId,
    last_hotel_id: HotelId,
}

/// Process-local storage context backed by `BTreeMap`s.
///
/// Constructed once per process and shared by reference between the user,
/// room and reservation services. Dropping the context drops all entity
/// state; there is no teardown beyond that.
#[derive(Debug, Default)]
pub struct MemoryDatabaseContext {
    inner: RefCell<Tables>,
}

impl MemoryDatabaseContext {
    /// Creates an empty context with all id sequences at zero.
    pub fn new() -> Self {
        debug!("event=context_init module=store status=ok backend=memory");
        Self::default()
    }
}

impl DatabaseContext for MemoryDatabaseContext {
    fn get_user(&self, id: UserId) -> Option<User> {
        self.inner.borrow().users.get(&id).cloned()
    }

    fn users(&self) -> BTreeMap<UserId, User> {
        self.inner.borrow().users.clone()
    }

    fn add_user(&self, user: User) {
        self.inner.borrow_mut().users.insert(user.id, user);
    }

    fn update_user(&self, user: User) {
        self.inner.borrow_mut().users.insert(user.id, user);
    }

    fn delete_user(&self, user: &User) {
        self.inner.borrow_mut().users.remove(&user.id);
    }

    fn next_user_id(&self) -> UserId {
        let mut tables = self.inner.borrow_mut();
        tables.last_user_id += 1;
        tables.last_user_id
    }

    fn get_room(&self, id: RoomId) -> Option<Room> {
        self.inner.borrow().rooms.get(&id).cloned()
    }

    fn rooms(&self) -> BTreeMap<RoomId, Room> {
        self.inner.borrow().rooms.clone()
    }

    fn add_room(&self, room: Room) {
        self.inner.borrow_mut().rooms.insert(room.id, room);
    }

    fn update_room(&self, room: Room) {
        self.inner.borrow_mut().rooms.insert(room.id, room);
    }

    fn delete_room(&self, room: &Room) {
        self.inner.borrow_mut().rooms.remove(&room.id);
    }

    fn next_room_id(&self) -> RoomId {
        let mut tables = self.inner.borrow_mut();
        tables.last_room_id += 1;
        tables.last_room_id
    }

    fn get_reservation(&self, id: ReservationId) -> Option<Reservation> {
        self.inner.borrow().reservations.get(&id).cloned()
    }

    fn reservations(&self) -> BTreeMap<ReservationId, Reservation> {
        self.inner.borrow().reservations.clone()
    }

    fn add_reservation(&self, reservation: Reservation) {
        self.inner
            .borrow_mut()
            .reservations
            .insert(reservation.id, reservation);
    }

    fn update_reservation(&self, reservation: Reservation) {
        self.inner
            .borrow_mut()
            .reservations
            .insert(reservation.id, reservation);
    }

    fn delete_reservation(&self, reservation: &Reservation) {
        self.inner.borrow_mut().reservations.remove(&reservation.id);
    }

    fn next_reservation_id(&self) -> ReservationId {
        let mut tables = self.inner.borrow_mut();
        tables.last_reservation_id += 1;
        tables.last_reservation_id
    }

    fn get_hotel(&self, id: HotelId) -> Option<Hotel> {
        self.inner.borrow().hotels.get(&id).cloned()
    }

    fn hotels(&self) -> BTreeMap<HotelId, Hotel> {
        self.inner.borrow().hotels.clone()
    }

    fn add_hotel(&self, hotel: Hotel) {
        self.inner.borrow_mut().hotels.insert(hotel.id, hotel);
    }

    fn update_hotel(&self, hotel: Hotel) {
        self.inner.borrow_mut().hotels.insert(hotel.id, hotel);
    }

    fn delete_hotel(&self, hotel: &Hotel) {
        self.inner.borrow_mut().hotels.remove(&hotel.id);
    }

    fn next_hotel_id(&self) -> HotelId {
        let mut tables = self.inner.borrow_mut();
        tables.last_hotel_id += 1;
        tables.last_hotel_id
    }
}
