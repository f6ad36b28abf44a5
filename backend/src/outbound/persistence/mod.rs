//! Record store adapters for the user repository port.
//!
//! - [`DieselUserRepository`] talks to PostgreSQL through `diesel-async` and a
//!   bb8 pool.
//! - [`InMemoryUserRepository`] keeps rows in process memory and backs the
//!   service when no database is configured.
//!
//! Diesel row structs (`models.rs`) and the table definition (`schema.rs`)
//! never leave this module.
//!
//! # Example
//!
//! ```ignore
//! use usuarios::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let config = PoolConfig::new("postgres://localhost/usuarios");
//! let pool = DbPool::new(config).await?;
//! let repo = DieselUserRepository::new(pool);
//! ```

mod diesel_user_repository;
mod in_memory_user_repository;
mod models;
mod pool;
mod schema;

pub use diesel_user_repository::DieselUserRepository;
pub use in_memory_user_repository::InMemoryUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
