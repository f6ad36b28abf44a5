//! Driving port for user record lookups.
//!
//! Lookups never treat a missing record as an error; callers receive `None`.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Use-case port for reading user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserQuery: Send + Sync {
    /// Every record currently stored.
    async fn find_all(&self) -> Result<Vec<User>, Error>;

    /// The record with the given id, if any.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, Error>;

    /// The first record whose `nombre` matches exactly, if any.
    async fn find_by_name(&self, nombre: &str) -> Result<Option<User>, Error>;
}
