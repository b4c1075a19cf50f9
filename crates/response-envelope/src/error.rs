//! Error types for the response-envelope crate.
//!
//! [`DomainError`] is a data carrier: callers raise it for a known failure
//! condition and hand it to [`crate::ResponseEnvelope::from_domain_error`].
//! [`EnvelopeValidationError`] reports wire payloads whose fields contradict
//! their status.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::status::StatusKind;

/// A known failure condition identified by a caller-assigned code.
///
/// Both fields are fixed at construction. No range or emptiness checks are
/// applied; the caller's domain decides what a code means.
///
/// # Examples
/// ```
/// use response_envelope::DomainError;
///
/// let err = DomainError::new(404, "book not found");
/// assert_eq!(err.code(), 404);
/// assert_eq!(err.to_string(), "book not found");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct DomainError {
    code: i32,
    message: String,
}

impl DomainError {
    /// Create a new error from a code and a human-readable message.
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Caller-assigned error code.
    #[must_use]
    pub const fn code(&self) -> i32 {
        self.code
    }

    /// Human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    pub(crate) fn into_parts(self) -> (i32, String) {
        (self.code, self.message)
    }
}

/// A deserialised envelope whose fields do not match its status.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeValidationError {
    /// A `SUCCESS` or `FAIL` envelope without a `data` field.
    #[error("{status} envelope is missing its data field")]
    MissingData {
        /// Status declared by the payload.
        status: StatusKind,
    },

    /// An `ERROR` envelope that also carries `data`.
    #[error("ERROR envelope must not carry a data field")]
    UnexpectedData,

    /// An `ERROR` envelope without a `code` field.
    #[error("ERROR envelope is missing its code field")]
    MissingCode,

    /// An `ERROR` envelope without a `message` field.
    #[error("ERROR envelope is missing its message field")]
    MissingMessage,

    /// A `SUCCESS` or `FAIL` envelope that carries `code` or `message`.
    #[error("{status} envelope must not carry code or message fields")]
    UnexpectedErrorFields {
        /// Status declared by the payload.
        status: StatusKind,
    },
}
