//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driving ports ([`UserCommand`], [`UserQuery`]) are what inbound adapters
//! call. The driven port ([`UserRepository`]) is what outbound adapters
//! implement.

mod macros;
pub(crate) use macros::define_port_error;

mod user_command;
mod user_query;
mod user_repository;

#[cfg(test)]
pub use user_command::MockUserCommand;
pub use user_command::UserCommand;
#[cfg(test)]
pub use user_query::MockUserQuery;
pub use user_query::UserQuery;
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserPersistenceError, UserRepository};
