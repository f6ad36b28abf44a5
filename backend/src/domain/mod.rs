//! Domain primitives, ports, and the user record service.
//!
//! Purpose: define the user record and its validation contract independently
//! of HTTP and SQL. Inbound adapters depend on the driving ports in
//! [`ports`]; outbound adapters implement [`ports::UserRepository`].
//!
//! Public surface:
//! - `User`, `UserId`, `NewUser`, `UserPatch` — the record and its inputs.
//! - `validate_new_user` — pure creation payload validation.
//! - `UserService` — implements `UserCommand` and `UserQuery`.
//! - `Error`, `ErrorCode` — transport-agnostic error payload.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user;
pub mod user_service;
pub mod user_validation;

pub use self::error::{Error, ErrorCode, ErrorValidationError, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::user::{NewUser, User, UserId, UserIdError, UserPatch};
pub use self::user_service::{UserService, user_not_found_message};
pub use self::user_validation::{
    NewUserDraft, UserField, UserViolation, ViolationKind, validate_new_user,
};
