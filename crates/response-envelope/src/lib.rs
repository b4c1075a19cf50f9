//! Uniform API response envelopes.
//!
//! Every API operation answers with the same wrapper: a status, the moment
//! the envelope was built, and either a payload (`SUCCESS` and `FAIL`) or an
//! error code and message (`ERROR`). The crate keeps the wrapper
//! transport agnostic; HTTP adapters only have to serialise it.
//!
//! # Overview
//!
//! - [`ResponseEnvelope`] is built through named constructors only, so a
//!   `SUCCESS` envelope can never carry an error code.
//! - [`Page`] is the payload shape for paginated successes.
//! - [`DomainError`] carries a caller-assigned code and message and maps onto
//!   an `ERROR` envelope.
//! - [`EnvelopeFactory`] builds envelopes against an injected clock.
//!
//! # Example
//!
//! ```
//! use response_envelope::{ResponseEnvelope, StatusKind};
//! use serde_json::json;
//!
//! let envelope = ResponseEnvelope::success(json!({ "firstName": "jane" }));
//! assert_eq!(envelope.status(), StatusKind::Success);
//!
//! let wire = serde_json::to_value(&envelope).expect("envelope serialises");
//! assert_eq!(wire["data"]["firstName"], "jane");
//! assert!(wire.get("code").is_none());
//! ```

pub mod cli;
mod envelope;
mod error;
mod page;
mod status;

pub use envelope::{EnvelopeFactory, ResponseEnvelope};
pub use error::{DomainError, EnvelopeValidationError};
pub use page::Page;
pub use status::StatusKind;
