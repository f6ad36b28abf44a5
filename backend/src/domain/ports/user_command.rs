//! Driving port for user record mutations.

use async_trait::async_trait;

use crate::domain::{Error, NewUser, User, UserId, UserPatch};

/// Use-case port for creating, updating, and deleting user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCommand: Send + Sync {
    /// Persist a validated record and return it with its assigned id.
    async fn create(&self, new_user: NewUser) -> Result<User, Error>;

    /// Merge `patch` onto the record identified by `id`.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when the record is
    /// absent.
    async fn update(&self, id: UserId, patch: UserPatch) -> Result<User, Error>;

    /// Remove the record identified by `id`.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when the record is
    /// absent.
    async fn delete(&self, id: UserId) -> Result<(), Error>;
}
