//! Driven port for the record store holding user rows.
use async_trait::async_trait;

use crate::domain::{NewUser, User, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection => "user repository connection failed",
        /// Query or mutation failed during execution.
        Query => "user repository query failed",
    }
}

/// Record store for user rows.
///
/// Every call reaches the backing store; adapters keep no cache. Each call is
/// atomic on its own, but no transaction spans calls.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new row; the store assigns the identifier.
    async fn insert(&self, new_user: &NewUser) -> Result<User, UserPersistenceError>;

    /// Every row, in store order.
    async fn list(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Fetch a row by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch the first row whose `nombre` matches exactly, lowest id first.
    async fn find_first_by_nombre(
        &self,
        nombre: &str,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Overwrite the row identified by `user.id()`.
    ///
    /// Returns `None` when no such row exists any more.
    async fn update(&self, user: &User) -> Result<Option<User>, UserPersistenceError>;

    /// Remove a row permanently. Returns whether a row was removed.
    async fn delete(&self, id: UserId) -> Result<bool, UserPersistenceError>;
}
