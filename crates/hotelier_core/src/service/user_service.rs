//! User use-case service.
//!
//! Thin validate-then-mutate wrapper over the storage context; the only
//! domain rule is the email shape check on the user model.

use std::collections::BTreeMap;

use log::{info, warn};

use crate::model::user::{User, UserId};
use crate::service::{EntityKind, ServiceError};
use crate::store::DatabaseContext;

/// Structural predicate over a possibly-absent user.
pub fn user_validation(user: Option<&User>) -> bool {
    user.map_or(false, User::email_is_valid)
}

/// User service facade over an injected storage context.
pub struct UserService<'ctx, C: DatabaseContext> {
    ctx: &'ctx C,
}

impl<'ctx, C: DatabaseContext> UserService<'ctx, C> {
    pub fn new(ctx: &'ctx C) -> Self {
        Self { ctx }
    }

    /// Validates the user, assigns the next user id and persists it.
    /// Returns the assigned id.
    ///
    /// # Errors
    /// - `Validation` when the user is absent or its email is malformed.
    pub fn add(&self, user: Option<User>) -> Result<UserId, ServiceError> {
        let mut user = match user {
            Some(user) if user_validation(Some(&user)) => user,
            _ => {
                warn!("event=user_add module=user_service status=error error_code=validation_failed");
                return Err(ServiceError::Validation(EntityKind::User));
            }
        };

        user.id = self.ctx.next_user_id();
        let id = user.id;
        self.ctx.add_user(user);
        info!("event=user_add module=user_service status=ok id={id}");
        Ok(id)
    }

    /// Returns the user with the given id.
    ///
    /// # Errors
    /// - `NotFound` for any absent id, zero and negative ids included.
    pub fn get(&self, id: UserId) -> Result<User, ServiceError> {
        self.ctx
            .get_user(id)
            .ok_or(ServiceError::NotFound(EntityKind::User, id))
    }

    /// Returns the full id-to-user snapshot.
    pub fn get_all(&self) -> BTreeMap<UserId, User> {
        self.ctx.users()
    }

    /// Validates the user and replaces the stored record with the same
    /// id in full.
    ///
    /// # Errors
    /// - `Validation` when the user is absent or its email is malformed.
    /// - `NotFound` when no stored user carries the incoming id.
    pub fn update(&self, user: Option<User>) -> Result<(), ServiceError> {
        let user = match user {
            Some(user) if user_validation(Some(&user)) => user,
            _ => {
                warn!(
                    "event=user_update module=user_service status=error \
                     error_code=validation_failed"
                );
                return Err(ServiceError::Validation(EntityKind::User));
            }
        };

        if self.ctx.get_user(user.id).is_none() {
            return Err(ServiceError::NotFound(EntityKind::User, user.id));
        }

        let id = user.id;
        self.ctx.update_user(user);
        info!("event=user_update module=user_service status=ok id={id}");
        Ok(())
    }

    /// Removes the user with the given id.
    ///
    /// Reservations referencing the user are left untouched; references
    /// are by value and do not cascade.
    ///
    /// # Errors
    /// - `NotFound` when the id is absent from the store.
    pub fn delete(&self, id: UserId) -> Result<(), ServiceError> {
        match self.ctx.get_user(id) {
            Some(user) => {
                self.ctx.delete_user(&user);
                info!("event=user_delete module=user_service status=ok id={id}");
                Ok(())
            }
            None => Err(ServiceError::NotFound(EntityKind::User, id)),
        }
    }
}
