//! Diesel table definitions for the PostgreSQL schema.
//!
//! Must match `migrations/*/up.sql`. The service never applies that SQL
//! itself; provision the table out of band.

diesel::table! {
    /// User records. `id` is a `SERIAL` key assigned on insert.
    usuarios (id) {
        id -> Int4,
        user -> Varchar,
        nombre -> Varchar,
        edad -> Int4,
    }
}
