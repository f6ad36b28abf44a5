//! Internal Diesel row structs for the `usuarios` table.
//!
//! These types never leave the persistence layer.

use diesel::prelude::*;

use crate::domain::{User, UserId};

use super::schema::usuarios;

/// Row struct for reading from the usuarios table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = usuarios)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: i32,
    pub user: String,
    pub nombre: String,
    pub edad: i32,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User::new(UserId::new(row.id), row.user, row.nombre, row.edad)
    }
}

/// Insertable struct for new rows; `id` comes from the sequence.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = usuarios)]
pub(crate) struct NewUserRow<'a> {
    pub user: &'a str,
    pub nombre: &'a str,
    pub edad: i32,
}

/// Changeset overwriting every mutable column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = usuarios)]
pub(crate) struct UserChangeset<'a> {
    pub user: &'a str,
    pub nombre: &'a str,
    pub edad: i32,
}
