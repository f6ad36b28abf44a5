//! User record service.
//!
//! Implements the [`UserCommand`] and [`UserQuery`] driving ports on top of an
//! injected [`UserRepository`]. Mutations look the record up first and report
//! a not-found error when it is absent; lookups return `None` instead.
//!
//! `update` reads then writes in two separate store calls. Two concurrent
//! updates of the same record can therefore overwrite each other's fields.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::ports::{UserCommand, UserPersistenceError, UserQuery, UserRepository};
use crate::domain::{Error, NewUser, User, UserId, UserPatch};

/// Message used when a mutation targets an absent record.
pub fn user_not_found_message(id: UserId) -> String {
    format!("Usuario con ID {id} no encontrado")
}

/// Record service implementing the user driving ports.
#[derive(Clone)]
pub struct UserService<R> {
    repository: Arc<R>,
}

impl<R> UserService<R> {
    /// Create a new service over the given store handle.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

impl<R> UserService<R>
where
    R: UserRepository,
{
    fn map_persistence_error(error: UserPersistenceError) -> Error {
        let detail = error.message();
        match error {
            UserPersistenceError::Connection { .. } => {
                Error::service_unavailable(format!("user repository unavailable: {detail}"))
            }
            UserPersistenceError::Query { .. } => {
                Error::internal(format!("user repository error: {detail}"))
            }
        }
    }

    async fn require_existing(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Error::not_found(user_not_found_message(id)))
    }
}

#[async_trait]
impl<R> UserCommand for UserService<R>
where
    R: UserRepository,
{
    async fn create(&self, new_user: NewUser) -> Result<User, Error> {
        let created = self
            .repository
            .insert(&new_user)
            .await
            .map_err(Self::map_persistence_error)?;
        debug!(user_id = %created.id(), "user created");
        Ok(created)
    }

    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, Error> {
        let existing = self.require_existing(id).await?;
        if patch.is_empty() {
            return Ok(existing);
        }

        let merged = patch.apply_to(existing);
        let updated = self
            .repository
            .update(&merged)
            .await
            .map_err(Self::map_persistence_error)?
            .ok_or_else(|| Error::not_found(user_not_found_message(id)))?;
        debug!(user_id = %id, "user updated");
        Ok(updated)
    }

    async fn delete(&self, id: UserId) -> Result<(), Error> {
        self.require_existing(id).await?;
        let removed = self
            .repository
            .delete(id)
            .await
            .map_err(Self::map_persistence_error)?;
        if !removed {
            return Err(Error::not_found(user_not_found_message(id)));
        }
        debug!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[async_trait]
impl<R> UserQuery for UserService<R>
where
    R: UserRepository,
{
    async fn find_all(&self) -> Result<Vec<User>, Error> {
        self.repository
            .list()
            .await
            .map_err(Self::map_persistence_error)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_persistence_error)
    }

    async fn find_by_name(&self, nombre: &str) -> Result<Option<User>, Error> {
        self.repository
            .find_first_by_nombre(nombre)
            .await
            .map_err(Self::map_persistence_error)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
