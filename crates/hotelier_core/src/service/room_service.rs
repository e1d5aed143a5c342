//! Room use-case service.
//!
//! # Responsibility
//! - Provide room CRUD with structural validation and the hotel
//!   existence check on add.
//!
//! # Invariants
//! - A room is persisted only after passing [`room_validation`].
//! - `add` requires the room's hotel to already exist among stored
//!   hotels by value equality.

use std::collections::BTreeMap;

use log::{info, warn};

use crate::model::room::{Room, RoomId};
use crate::service::{EntityKind, ServiceError};
use crate::store::DatabaseContext;

/// Structural predicate over a possibly-absent room.
///
/// True only when the room is present, its hotel reference is set, and
/// both `number_of_room` and `amount_of_people` are positive.
pub fn room_validation(room: Option<&Room>) -> bool {
    room.map_or(false, |room| {
        room.number_of_room > 0 && room.amount_of_people > 0 && room.hotel.is_some()
    })
}

/// Room service facade over an injected storage context.
pub struct RoomService<'ctx, C: DatabaseContext> {
    ctx: &'ctx C,
}

impl<'ctx, C: DatabaseContext> RoomService<'ctx, C> {
    pub fn new(ctx: &'ctx C) -> Self {
        Self { ctx }
    }

    /// Validates the room, checks that its hotel is stored, assigns the
    /// next room id and persists it. Returns the assigned id.
    ///
    /// # Errors
    /// - `Validation` when the room is absent or fails the structural
    ///   predicate.
    /// - `NotFound` when no stored hotel equals the room's hotel.
    pub fn add(&self, room: Option<Room>) -> Result<RoomId, ServiceError> {
        let mut room = match room {
            Some(room) if room_validation(Some(&room)) => room,
            _ => {
                warn!("event=room_add module=room_service status=error error_code=validation_failed");
                return Err(ServiceError::Validation(EntityKind::Room));
            }
        };

        match room.hotel.as_ref() {
            Some(hotel) if self.ctx.hotels().values().any(|stored| stored == hotel) => {}
            Some(hotel) => {
                warn!(
                    "event=room_add module=room_service status=error \
                     error_code=hotel_not_found hotel_id={}",
                    hotel.id
                );
                return Err(ServiceError::NotFound(EntityKind::Hotel, hotel.id));
            }
            // room_validation rejects rooms without a hotel reference
            None => return Err(ServiceError::Validation(EntityKind::Room)),
        }

        room.id = self.ctx.next_room_id();
        let id = room.id;
        self.ctx.add_room(room);
        info!("event=room_add module=room_service status=ok id={id}");
        Ok(id)
    }

    /// Returns the room with the given id.
    ///
    /// # Errors
    /// - `NotFound` for any absent id, zero and negative ids included.
    pub fn get(&self, id: RoomId) -> Result<Room, ServiceError> {
        self.ctx
            .get_room(id)
            .ok_or(ServiceError::NotFound(EntityKind::Room, id))
    }

    /// Returns the full id-to-room snapshot.
    pub fn get_all(&self) -> BTreeMap<RoomId, Room> {
        self.ctx.rooms()
    }

    /// Validates the room and replaces the stored record with the same
    /// id in full.
    ///
    /// # Errors
    /// - `Validation` when the room is absent or fails the structural
    ///   predicate.
    /// - `NotFound` when no stored room carries the incoming id.
    pub fn update(&self, room: Option<Room>) -> Result<(), ServiceError> {
        let room = match room {
            Some(room) if room_validation(Some(&room)) => room,
            _ => {
                warn!(
                    "event=room_update module=room_service status=error \
                     error_code=validation_failed"
                );
                return Err(ServiceError::Validation(EntityKind::Room));
            }
        };

        if self.ctx.get_room(room.id).is_none() {
            return Err(ServiceError::NotFound(EntityKind::Room, room.id));
        }

        let id = room.id;
        self.ctx.update_room(room);
        info!("event=room_update module=room_service status=ok id={id}");
        Ok(())
    }

    /// Removes the room with the given id.
    ///
    /// # Errors
    /// - `NotFound` when the id is absent from the store.
    pub fn delete(&self, id: RoomId) -> Result<(), ServiceError> {
        match self.ctx.get_room(id) {
            Some(room) => {
                self.ctx.delete_room(&room);
                info!("event=room_delete module=room_service status=ok id={id}");
                Ok(())
            }
            None => Err(ServiceError::NotFound(EntityKind::Room, id)),
        }
    }

    /// Unsupported operation: free-room search is not implemented. The
    /// method is kept so the service surface stays stable for callers.
    ///
    /// Always returns an empty map and never errors.
    pub fn free_rooms(&self) -> BTreeMap<RoomId, Room> {
        BTreeMap::new()
    }
}
