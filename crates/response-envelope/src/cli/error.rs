//! Error types for the envelope-render CLI.

use thiserror::Error;

/// Errors surfaced while building or rendering an envelope from the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A flag expected JSON but received something else.
    #[error("invalid JSON for {flag}: {message}")]
    InvalidJson {
        /// Flag that carried the malformed value.
        flag: &'static str,
        /// Parser error message.
        message: String,
    },
    /// `--content` parsed but is not a JSON array.
    #[error("--content must be a JSON array")]
    ContentNotArray,
    /// The envelope could not be serialised.
    #[error("failed to render envelope: {message}")]
    Render {
        /// Serialiser error message.
        message: String,
    },
    /// Settings could not be loaded from the environment or config files.
    #[error("failed to load settings: {message}")]
    Config {
        /// Loader error message.
        message: String,
    },
}
