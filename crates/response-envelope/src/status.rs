//! Outcome status carried by every envelope.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Outcome of the operation an envelope answers for.
///
/// The serialised spelling (`SUCCESS`, `FAIL`, `ERROR`) is part of the wire
/// contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusKind {
    /// The operation completed and `data` holds its result.
    Success,
    /// The request was rejected, typically by validation; `data` explains why.
    Fail,
    /// The operation hit a known error condition described by `code` and
    /// `message`.
    Error,
}

impl StatusKind {
    /// Wire spelling of the status.
    ///
    /// # Examples
    /// ```
    /// use response_envelope::StatusKind;
    ///
    /// assert_eq!(StatusKind::Fail.as_str(), "FAIL");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "SUCCESS",
            Self::Fail => "FAIL",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    //! Wire spelling checks for the status enum.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::success(StatusKind::Success, "SUCCESS")]
    #[case::fail(StatusKind::Fail, "FAIL")]
    #[case::error(StatusKind::Error, "ERROR")]
    fn serialises_with_upper_case_spelling(#[case] status: StatusKind, #[case] expected: &str) {
        let value = serde_json::to_value(status).expect("status serialises");
        assert_eq!(value, serde_json::Value::String(expected.to_owned()));
        assert_eq!(status.to_string(), expected);
        assert_eq!(status.as_str(), expected);
    }

    #[rstest]
    #[case::lower_case("\"success\"")]
    #[case::title_case("\"Fail\"")]
    #[case::unknown("\"WARNING\"")]
    fn rejects_other_spellings(#[case] json: &str) {
        let result = serde_json::from_str::<StatusKind>(json);
        assert!(result.is_err(), "{json} should not parse");
    }

    #[rstest]
    fn parses_wire_spelling() {
        let status: StatusKind = serde_json::from_str("\"ERROR\"").expect("status parses");
        assert_eq!(status, StatusKind::Error);
    }
}
