//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **persistence**: the `usuarios` table via Diesel, plus an in-memory
//!   store used by tests and when no database is configured.
//!
//! Adapters translate between domain types and storage representations and
//! contain no business logic.

pub mod persistence;
