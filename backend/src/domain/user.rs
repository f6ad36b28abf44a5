//! User record model.
//!
//! A [`User`] is a single row of the `usuarios` table. New rows enter the
//! system as a [`NewUser`], which can only be produced by
//! [`crate::domain::validate_new_user`]. Existing rows change through a
//! [`UserPatch`], which carries no validation at all.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors returned when parsing a [`UserId`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIdError {
    Empty,
    NotAnInteger,
}

impl fmt::Display for UserIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "user id must not be empty"),
            Self::NotAnInteger => write!(f, "user id must be an integer"),
        }
    }
}

impl std::error::Error for UserIdError {}

/// Store-assigned surrogate key of a user record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    /// Wrap a raw key read from the store.
    #[must_use]
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value as stored.
    #[must_use]
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(UserIdError::Empty);
        }
        s.parse::<i32>()
            .map(Self)
            .map_err(|_| UserIdError::NotAnInteger)
    }
}

/// A persisted user record.
///
/// Serialises as `{"id": 1, "user": "u1", "nombre": "Ana", "edad": 25}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    id: UserId,
    user: String,
    nombre: String,
    edad: i32,
}

impl User {
    /// Assemble a record from stored column values.
    pub fn new(id: UserId, user: impl Into<String>, nombre: impl Into<String>, edad: i32) -> Self {
        Self {
            id,
            user: user.into(),
            nombre: nombre.into(),
            edad,
        }
    }

    /// Store-assigned identifier.
    #[must_use]
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Caller-chosen user handle.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Display name.
    #[must_use]
    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    /// Age.
    #[must_use]
    pub fn edad(&self) -> i32 {
        self.edad
    }
}

/// Validated creation payload awaiting an identifier from the store.
///
/// ## Invariants
/// - `user` and `nombre` are non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    user: String,
    nombre: String,
    edad: i32,
}

impl NewUser {
    pub(crate) fn new_unchecked(user: String, nombre: String, edad: i32) -> Self {
        Self { user, nombre, edad }
    }

    /// Caller-chosen user handle.
    #[must_use]
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Display name.
    #[must_use]
    pub fn nombre(&self) -> &str {
        &self.nombre
    }

    /// Age.
    #[must_use]
    pub fn edad(&self) -> i32 {
        self.edad
    }

    /// Attach the identifier assigned by the store.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User {
            id,
            user: self.user,
            nombre: self.nombre,
            edad: self.edad,
        }
    }
}

/// Partial update: each field is either supplied or left untouched.
///
/// No constraints apply; an empty `nombre` is merged as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub user: Option<String>,
    pub nombre: Option<String>,
    pub edad: Option<i32>,
}

impl UserPatch {
    /// Whether the patch supplies no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.nombre.is_none() && self.edad.is_none()
    }

    /// Merge supplied fields onto `existing`, keeping its identifier.
    ///
    /// # Examples
    /// ```
    /// use usuarios::domain::{User, UserId, UserPatch};
    ///
    /// let existing = User::new(UserId::new(1), "u1", "Ana", 25);
    /// let patch = UserPatch { edad: Some(26), ..UserPatch::default() };
    /// let merged = patch.apply_to(existing);
    /// assert_eq!(merged.edad(), 26);
    /// assert_eq!(merged.nombre(), "Ana");
    /// ```
    #[must_use]
    pub fn apply_to(self, existing: User) -> User {
        let User {
            id,
            user,
            nombre,
            edad,
        } = existing;
        User {
            id,
            user: self.user.unwrap_or(user),
            nombre: self.nombre.unwrap_or(nombre),
            edad: self.edad.unwrap_or(edad),
        }
    }
}
