//! The response envelope and its construction paths.
//!
//! Envelopes are built only through the named constructors below. Each one
//! fixes the status and the matching field set, so an envelope can never mix
//! a payload with an error code. Built envelopes are immutable.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;
use mockable::{Clock, DefaultClock};
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use tracing::trace;

use crate::error::{DomainError, EnvelopeValidationError};
use crate::page::Page;
use crate::status::StatusKind;

#[derive(Debug, Clone, PartialEq)]
enum Outcome<T> {
    Success(T),
    Fail(T),
    Error { code: i32, message: String },
}

impl<T> Outcome<T> {
    const fn status(&self) -> StatusKind {
        match self {
            Self::Success(_) => StatusKind::Success,
            Self::Fail(_) => StatusKind::Fail,
            Self::Error { .. } => StatusKind::Error,
        }
    }
}

/// Uniform wrapper returned by every API operation.
///
/// `T` is the payload type of `SUCCESS` and `FAIL` envelopes. It defaults to
/// [`serde_json::Value`] for callers that assemble payloads dynamically.
///
/// ## Invariants
/// - `SUCCESS` and `FAIL` envelopes carry `data` and never `code`/`message`.
/// - `ERROR` envelopes carry `code` and `message` and never `data`.
/// - `time` is the UTC wall clock read once when the envelope was built.
///
/// # Examples
/// ```
/// use response_envelope::{ResponseEnvelope, StatusKind};
///
/// let envelope: ResponseEnvelope = ResponseEnvelope::error(100, "quota exhausted");
/// assert_eq!(envelope.status(), StatusKind::Error);
/// assert_eq!(envelope.code(), Some(100));
/// assert!(envelope.data().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope<T = Value> {
    time: NaiveDateTime,
    outcome: Outcome<T>,
}

impl<T> ResponseEnvelope<T> {
    fn build(clock: &dyn Clock, outcome: Outcome<T>) -> Self {
        match &outcome {
            Outcome::Error { code, .. } => {
                trace!(status = %StatusKind::Error, code = *code, "response envelope built");
            }
            other => trace!(status = %other.status(), "response envelope built"),
        }
        Self {
            time: clock.utc().naive_utc(),
            outcome,
        }
    }

    /// Build a `SUCCESS` envelope around `data`.
    ///
    /// The payload is emitted even when it serialises to `null`.
    pub fn success(data: T) -> Self {
        Self::build(&DefaultClock, Outcome::Success(data))
    }

    /// Build a `FAIL` envelope, typically around one or more validation
    /// messages.
    ///
    /// # Examples
    /// ```
    /// use response_envelope::{ResponseEnvelope, StatusKind};
    ///
    /// let envelope = ResponseEnvelope::fail(vec!["username is required"]);
    /// assert_eq!(envelope.status(), StatusKind::Fail);
    /// assert_eq!(envelope.data().map(Vec::len), Some(1));
    /// ```
    pub fn fail(data: T) -> Self {
        Self::build(&DefaultClock, Outcome::Fail(data))
    }

    /// Build an `ERROR` envelope from a code and message.
    pub fn error(code: i32, message: impl Into<String>) -> Self {
        Self::build(
            &DefaultClock,
            Outcome::Error {
                code,
                message: message.into(),
            },
        )
    }

    /// Build an `ERROR` envelope carrying the code and message of `error`.
    pub fn from_domain_error(error: DomainError) -> Self {
        let (code, message) = error.into_parts();
        Self::error(code, message)
    }

    /// Outcome status, fixed at construction.
    #[must_use]
    pub const fn status(&self) -> StatusKind {
        self.outcome.status()
    }

    /// UTC time at which the envelope was built.
    #[must_use]
    pub const fn time(&self) -> NaiveDateTime {
        self.time
    }

    /// Payload of a `SUCCESS` or `FAIL` envelope; `None` for `ERROR`.
    #[must_use]
    pub const fn data(&self) -> Option<&T> {
        match &self.outcome {
            Outcome::Success(data) | Outcome::Fail(data) => Some(data),
            Outcome::Error { .. } => None,
        }
    }

    /// Error code of an `ERROR` envelope; `None` otherwise.
    #[must_use]
    pub const fn code(&self) -> Option<i32> {
        match &self.outcome {
            Outcome::Error { code, .. } => Some(*code),
            Outcome::Success(_) | Outcome::Fail(_) => None,
        }
    }

    /// Error message of an `ERROR` envelope; `None` otherwise.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Error { message, .. } => Some(message.as_str()),
            Outcome::Success(_) | Outcome::Fail(_) => None,
        }
    }

    /// Consume the envelope and return its payload, if any.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self.outcome {
            Outcome::Success(data) | Outcome::Fail(data) => Some(data),
            Outcome::Error { .. } => None,
        }
    }

    /// Convert the payload with `f`, keeping status, time and error fields.
    ///
    /// `f` runs only for `SUCCESS` and `FAIL` envelopes.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `f`.
    ///
    /// # Examples
    /// ```
    /// use response_envelope::ResponseEnvelope;
    ///
    /// let envelope = ResponseEnvelope::success(vec![1, 2, 3]);
    /// let json = envelope.try_map_data(serde_json::to_value).expect("payload converts");
    /// assert_eq!(json.data(), Some(&serde_json::json!([1, 2, 3])));
    /// ```
    pub fn try_map_data<U, E, F>(self, f: F) -> Result<ResponseEnvelope<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        let outcome = match self.outcome {
            Outcome::Success(data) => Outcome::Success(f(data)?),
            Outcome::Fail(data) => Outcome::Fail(f(data)?),
            Outcome::Error { code, message } => Outcome::Error { code, message },
        };
        Ok(ResponseEnvelope {
            time: self.time,
            outcome,
        })
    }
}

impl<E> ResponseEnvelope<Page<E>> {
    /// Build a paginated `SUCCESS` envelope.
    ///
    /// `content` should already be the requested slice; it is stored as-is
    /// alongside `page`, `limit` and `total`.
    ///
    /// # Examples
    /// ```
    /// use response_envelope::ResponseEnvelope;
    ///
    /// let envelope = ResponseEnvelope::success_page(1, 100, 1453, ["Refactoring"]);
    /// let page = envelope.data().expect("paginated envelopes carry data");
    /// assert_eq!(page.total(), 1453);
    /// ```
    pub fn success_page(
        page: i32,
        limit: i32,
        total: i32,
        content: impl IntoIterator<Item = E>,
    ) -> Self {
        Self::success(Page::new(page, limit, total, content))
    }
}

impl<T> From<DomainError> for ResponseEnvelope<T> {
    fn from(error: DomainError) -> Self {
        Self::from_domain_error(error)
    }
}

/// Builds envelopes against an injected clock.
///
/// [`ResponseEnvelope`]'s own constructors read the system clock; services
/// that need deterministic timestamps hold a factory instead.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use mockable::DefaultClock;
/// use response_envelope::{EnvelopeFactory, StatusKind};
///
/// let factory = EnvelopeFactory::new(Arc::new(DefaultClock));
/// let envelope = factory.success("ok");
/// assert_eq!(envelope.status(), StatusKind::Success);
/// ```
#[derive(Clone)]
pub struct EnvelopeFactory {
    clock: Arc<dyn Clock>,
}

impl EnvelopeFactory {
    /// Create a factory reading time from `clock`.
    #[must_use]
    pub const fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// See [`ResponseEnvelope::success`].
    pub fn success<T>(&self, data: T) -> ResponseEnvelope<T> {
        ResponseEnvelope::build(self.clock.as_ref(), Outcome::Success(data))
    }

    /// See [`ResponseEnvelope::success_page`].
    pub fn success_page<E>(
        &self,
        page: i32,
        limit: i32,
        total: i32,
        content: impl IntoIterator<Item = E>,
    ) -> ResponseEnvelope<Page<E>> {
        self.success(Page::new(page, limit, total, content))
    }

    /// See [`ResponseEnvelope::fail`].
    pub fn fail<T>(&self, data: T) -> ResponseEnvelope<T> {
        ResponseEnvelope::build(self.clock.as_ref(), Outcome::Fail(data))
    }

    /// See [`ResponseEnvelope::error`].
    pub fn error<T>(&self, code: i32, message: impl Into<String>) -> ResponseEnvelope<T> {
        ResponseEnvelope::build(
            self.clock.as_ref(),
            Outcome::Error {
                code,
                message: message.into(),
            },
        )
    }

    /// See [`ResponseEnvelope::from_domain_error`].
    pub fn from_domain_error<T>(&self, error: DomainError) -> ResponseEnvelope<T> {
        let (code, message) = error.into_parts();
        self.error(code, message)
    }
}

impl Default for EnvelopeFactory {
    fn default() -> Self {
        Self::new(Arc::new(DefaultClock))
    }
}

impl fmt::Debug for EnvelopeFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvelopeFactory").finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct EnvelopeWire<'a, T> {
    status: StatusKind,
    time: &'a NaiveDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
}

impl<T: Serialize> Serialize for ResponseEnvelope<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        EnvelopeWire {
            status: self.status(),
            time: &self.time,
            data: self.data(),
            code: self.code(),
            message: self.message(),
        }
        .serialize(serializer)
    }
}

/// Wraps a present field in `Some`, so `"data": null` stays distinct from a
/// missing key.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// Wire fields before the status check.
///
/// `data` is buffered as a [`Value`] so its presence can be judged against
/// the status before the payload type is involved. `code` and `message`
/// keep an explicit `null` as `Some(None)`.
#[derive(Deserialize)]
struct EnvelopeDto {
    status: StatusKind,
    time: NaiveDateTime,
    #[serde(default, deserialize_with = "present")]
    data: Option<Value>,
    #[serde(default, deserialize_with = "present")]
    code: Option<Option<i32>>,
    #[serde(default, deserialize_with = "present")]
    message: Option<Option<String>>,
}

impl TryFrom<EnvelopeDto> for ResponseEnvelope<Value> {
    type Error = EnvelopeValidationError;

    fn try_from(value: EnvelopeDto) -> Result<Self, Self::Error> {
        let EnvelopeDto {
            status,
            time,
            data,
            code,
            message,
        } = value;

        let outcome = match status {
            StatusKind::Success | StatusKind::Fail => {
                if code.is_some() || message.is_some() {
                    return Err(EnvelopeValidationError::UnexpectedErrorFields { status });
                }
                let payload = data.ok_or(EnvelopeValidationError::MissingData { status })?;
                if status == StatusKind::Success {
                    Outcome::Success(payload)
                } else {
                    Outcome::Fail(payload)
                }
            }
            StatusKind::Error => {
                if data.is_some() {
                    return Err(EnvelopeValidationError::UnexpectedData);
                }
                Outcome::Error {
                    code: code.flatten().ok_or(EnvelopeValidationError::MissingCode)?,
                    message: message
                        .flatten()
                        .ok_or(EnvelopeValidationError::MissingMessage)?,
                }
            }
        };

        Ok(Self { time, outcome })
    }
}

impl<'de, T> Deserialize<'de> for ResponseEnvelope<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let dto = EnvelopeDto::deserialize(deserializer)?;
        let envelope = ResponseEnvelope::<Value>::try_from(dto).map_err(de::Error::custom)?;
        envelope
            .try_map_data(T::deserialize)
            .map_err(de::Error::custom)
    }
}
