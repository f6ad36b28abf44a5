//! Shared validation helpers for inbound HTTP adapters.
//!
//! Translate domain validation outcomes and malformed path segments into
//! `invalid_request` errors with structured `details`.

use serde_json::json;

use crate::domain::{Error, UserId, UserViolation};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidId,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidId => "invalid_id",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

/// Build the 400 returned when a creation payload fails validation.
///
/// Every violation is listed in `details.violations`, in field order.
pub(crate) fn violations_error(violations: &[UserViolation]) -> Error {
    let entries: Vec<_> = violations
        .iter()
        .map(|violation| {
            json!({
                "field": violation.field.as_str(),
                "code": violation.kind.as_str(),
                "message": violation.to_string(),
            })
        })
        .collect();
    let message = violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ");

    Error::invalid_request(message).with_details(json!({ "violations": entries }))
}

pub(crate) fn invalid_id_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be an integer")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidId.as_str(),
    }))
}

pub(crate) fn parse_user_id(value: &str, field: FieldName) -> Result<UserId, Error> {
    value
        .parse::<UserId>()
        .map_err(|_| invalid_id_error(field, value))
}
