//! Reservation use-case service.
//!
//! # Responsibility
//! - Validate temporal ranges and entity references before any store
//!   mutation.
//! - Provide reservation CRUD plus the per-user reservation view.
//!
//! # Invariants
//! - A reservation is persisted only after passing
//!   [`reservation_validation`].
//! - Under `ReferencePolicy::Lenient` (the default) user/room references
//!   are not resolved against the store; under `Strict` both must exist
//!   by value equality.
//! - The store is left untouched whenever an error is returned.

use std::collections::BTreeMap;

use log::{info, warn};

use crate::config::ReferencePolicy;
use crate::model::reservation::{Reservation, ReservationId};
use crate::model::user::User;
use crate::service::{EntityKind, ServiceError};
use crate::store::DatabaseContext;

/// Structural predicate over a possibly-absent reservation.
///
/// True only when the reservation is present, `start_date` is strictly
/// before `end_date`, and both the user and room references are set. Pure
/// function over the record's fields; store membership of the references
/// is enforced separately at add/update time.
pub fn reservation_validation(reservation: Option<&Reservation>) -> bool {
    reservation.map_or(false, |reservation| {
        reservation.start_date < reservation.end_date
            && reservation.user.is_some()
            && reservation.room.is_some()
    })
}

/// Reservation service facade over an injected storage context.
pub struct ReservationService<'ctx, C: DatabaseContext> {
    ctx: &'ctx C,
    policy: ReferencePolicy,
}

impl<'ctx, C: DatabaseContext> ReservationService<'ctx, C> {
    /// Creates a service with the default lenient reference policy.
    pub fn new(ctx: &'ctx C) -> Self {
        Self::with_policy(ctx, ReferencePolicy::Lenient)
    }

    /// Creates a service with an explicit reference policy.
    pub fn with_policy(ctx: &'ctx C, policy: ReferencePolicy) -> Self {
        Self { ctx, policy }
    }

    /// Validates the reservation, assigns the next reservation id and
    /// persists it. Returns the assigned id.
    ///
    /// # Errors
    /// - `Validation` when the reservation is absent or fails the
    ///   structural predicate.
    /// - `NotFound` under `ReferencePolicy::Strict` when the referenced
    ///   user or room is not in the store.
    pub fn add(&self, reservation: Option<Reservation>) -> Result<ReservationId, ServiceError> {
        let mut reservation = match reservation {
            Some(reservation) if reservation_validation(Some(&reservation)) => reservation,
            _ => {
                warn!(
                    "event=reservation_add module=reservation_service status=error \
                     error_code=validation_failed"
                );
                return Err(ServiceError::Validation(EntityKind::Reservation));
            }
        };

        if self.policy == ReferencePolicy::Strict {
            self.ensure_references_exist(&reservation)?;
        }

        reservation.id = self.ctx.next_reservation_id();
        let id = reservation.id;
        self.ctx.add_reservation(reservation);
        info!("event=reservation_add module=reservation_service status=ok id={id}");
        Ok(id)
    }

    /// Returns the reservation with the given id.
    ///
    /// # Errors
    /// - `NotFound` for any absent id, zero and negative ids included.
    pub fn get(&self, id: ReservationId) -> Result<Reservation, ServiceError> {
        self.ctx
            .get_reservation(id)
            .ok_or(ServiceError::NotFound(EntityKind::Reservation, id))
    }

    /// Returns the full id-to-reservation snapshot, unfiltered.
    pub fn get_all(&self) -> BTreeMap<ReservationId, Reservation> {
        self.ctx.reservations()
    }

    /// Validates the reservation and replaces the stored record with the
    /// same id in full.
    ///
    /// # Errors
    /// - `Validation` when the reservation is absent or fails the
    ///   structural predicate.
    /// - `NotFound` when no stored reservation carries the incoming id
    ///   (the record is not inserted), or under `Strict` when a
    ///   reference is unknown.
    pub fn update(&self, reservation: Option<Reservation>) -> Result<(), ServiceError> {
        let reservation = match reservation {
            Some(reservation) if reservation_validation(Some(&reservation)) => reservation,
            _ => {
                warn!(
                    "event=reservation_update module=reservation_service status=error \
                     error_code=validation_failed"
                );
                return Err(ServiceError::Validation(EntityKind::Reservation));
            }
        };

        if self.policy == ReferencePolicy::Strict {
            self.ensure_references_exist(&reservation)?;
        }

        if self.ctx.get_reservation(reservation.id).is_none() {
            return Err(ServiceError::NotFound(
                EntityKind::Reservation,
                reservation.id,
            ));
        }

        let id = reservation.id;
        self.ctx.update_reservation(reservation);
        info!("event=reservation_update module=reservation_service status=ok id={id}");
        Ok(())
    }

    /// Removes the reservation with the given id.
    ///
    /// # Errors
    /// - `NotFound` when the id is absent from the store.
    pub fn delete(&self, id: ReservationId) -> Result<(), ServiceError> {
        match self.ctx.get_reservation(id) {
            Some(reservation) => {
                self.ctx.delete_reservation(&reservation);
                info!("event=reservation_delete module=reservation_service status=ok id={id}");
                Ok(())
            }
            None => Err(ServiceError::NotFound(EntityKind::Reservation, id)),
        }
    }

    /// Returns the sub-map of stored reservations booked by the given
    /// user, compared by value equality, with their original ids as keys
    /// and in store order.
    ///
    /// # Panics
    /// Panics when `user` is `None`: a missing caller-side user is a
    /// precondition violation, not a domain error.
    pub fn reservations_of_user(
        &self,
        user: Option<&User>,
    ) -> BTreeMap<ReservationId, Reservation> {
        let user = user.expect("reservations_of_user requires a user");
        self.ctx
            .reservations()
            .into_iter()
            .filter(|(_, reservation)| reservation.user.as_ref() == Some(user))
            .collect()
    }

    fn ensure_references_exist(&self, reservation: &Reservation) -> Result<(), ServiceError> {
        if let Some(user) = reservation.user.as_ref() {
            if !self.ctx.users().values().any(|stored| stored == user) {
                warn!(
                    "event=reservation_reference_check module=reservation_service \
                     status=error error_code=user_not_found user_id={}",
                    user.id
                );
                return Err(ServiceError::NotFound(EntityKind::User, user.id));
            }
        }
        if let Some(room) = reservation.room.as_ref() {
            if !self.ctx.rooms().values().any(|stored| stored == room) {
                warn!(
                    "event=reservation_reference_check module=reservation_service \
                     status=error error_code=room_not_found room_id={}",
                    room.id
                );
                return Err(ServiceError::NotFound(EntityKind::Room, room.id));
            }
        }
        Ok(())
    }
}
