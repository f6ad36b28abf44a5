//! Creation payload validation.
//!
//! [`validate_new_user`] is a pure function: it inspects a [`NewUserDraft`]
//! and either yields a [`NewUser`] or every [`UserViolation`] it found. Only
//! the creation path calls it; partial updates are merged unchecked.

use std::fmt;

use serde_json::Value;

use super::NewUser;

/// Field of the creation payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserField {
    User,
    Nombre,
    Edad,
}

impl UserField {
    /// Wire name of the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Nombre => "nombre",
            Self::Edad => "edad",
        }
    }
}

/// Constraint a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViolationKind {
    Missing,
    NotAString,
    Empty,
    NotAnInteger,
}

impl ViolationKind {
    /// Stable machine-readable code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::NotAString => "not_a_string",
            Self::Empty => "empty",
            Self::NotAnInteger => "not_an_integer",
        }
    }
}

/// A single field-level validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserViolation {
    pub field: UserField,
    pub kind: ViolationKind,
}

impl UserViolation {
    const fn new(field: UserField, kind: ViolationKind) -> Self {
        Self { field, kind }
    }
}

impl fmt::Display for UserViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = self.field.as_str();
        match self.kind {
            ViolationKind::Missing => write!(f, "{field} is required"),
            ViolationKind::NotAString => write!(f, "{field} must be a string"),
            ViolationKind::Empty => write!(f, "{field} should not be empty"),
            ViolationKind::NotAnInteger => write!(f, "{field} must be an integer number"),
        }
    }
}

/// Unvalidated creation payload: each field is present-or-absent raw JSON.
///
/// A JSON `null` is indistinguishable from an absent field.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewUserDraft {
    pub user: Option<Value>,
    pub nombre: Option<Value>,
    pub edad: Option<Value>,
}

/// Validate a creation payload.
///
/// `user` and `nombre` must be non-empty strings; `edad` must be an integer
/// that fits in 32 bits. All violations are reported, in field order.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use usuarios::domain::{NewUserDraft, UserField, ViolationKind, validate_new_user};
///
/// let draft = NewUserDraft {
///     user: Some(json!("u1")),
///     nombre: Some(json!("")),
///     edad: Some(json!(25)),
/// };
/// let violations = validate_new_user(draft).expect_err("empty nombre");
/// assert_eq!(violations[0].field, UserField::Nombre);
/// assert_eq!(violations[0].kind, ViolationKind::Empty);
/// ```
pub fn validate_new_user(draft: NewUserDraft) -> Result<NewUser, Vec<UserViolation>> {
    let NewUserDraft { user, nombre, edad } = draft;
    let user = non_empty_string(UserField::User, user);
    let nombre = non_empty_string(UserField::Nombre, nombre);
    let edad = integer(UserField::Edad, edad);

    match (user, nombre, edad) {
        (Ok(user), Ok(nombre), Ok(edad)) => Ok(NewUser::new_unchecked(user, nombre, edad)),
        (user, nombre, edad) => Err([user.err(), nombre.err(), edad.err()]
            .into_iter()
            .flatten()
            .collect()),
    }
}

fn non_empty_string(field: UserField, value: Option<Value>) -> Result<String, UserViolation> {
    match value {
        None => Err(UserViolation::new(field, ViolationKind::Missing)),
        Some(Value::String(text)) if text.is_empty() => {
            Err(UserViolation::new(field, ViolationKind::Empty))
        }
        Some(Value::String(text)) => Ok(text),
        Some(_) => Err(UserViolation::new(field, ViolationKind::NotAString)),
    }
}

fn integer(field: UserField, value: Option<Value>) -> Result<i32, UserViolation> {
    match value {
        None => Err(UserViolation::new(field, ViolationKind::Missing)),
        Some(Value::Number(number)) => number
            .as_i64()
            .and_then(|wide| i32::try_from(wide).ok())
            .ok_or(UserViolation::new(field, ViolationKind::NotAnInteger)),
        Some(_) => Err(UserViolation::new(field, ViolationKind::NotAnInteger)),
    }
}
