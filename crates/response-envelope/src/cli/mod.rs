//! CLI support for rendering envelopes as JSON.
//!
//! The `envelope-render` binary parses a [`Cli`], loads [`RenderSettings`]
//! and delegates to [`run`], which calls [`build_envelope`] then [`render`].
//! Each step can be exercised in tests without spawning a process.

mod error;
mod settings;

use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::{EnvelopeFactory, ResponseEnvelope};

pub use error::CliError;
pub use settings::RenderSettings;

/// `envelope-render` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "envelope-render",
    about = "Build a response envelope and print its JSON wire form",
    version
)]
pub struct Cli {
    /// Pretty-print the rendered JSON. Overrides `ENVELOPE_PRETTY`.
    #[arg(long, global = true)]
    pub pretty: bool,
    /// Envelope to build.
    #[command(subcommand)]
    pub command: Command,
}

/// Envelope kinds the CLI can build.
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Build a SUCCESS envelope.
    Success {
        /// Payload as JSON.
        #[arg(long, value_name = "json", allow_hyphen_values = true)]
        data: String,
    },
    /// Build a paginated SUCCESS envelope.
    Page {
        /// Current page index.
        #[arg(long, allow_negative_numbers = true)]
        page: i32,
        /// Items per page.
        #[arg(long, allow_negative_numbers = true)]
        limit: i32,
        /// Total item count across all pages.
        #[arg(long, allow_negative_numbers = true)]
        total: i32,
        /// Items on this page as a JSON array.
        #[arg(long, value_name = "json", allow_hyphen_values = true)]
        content: String,
    },
    /// Build a FAIL envelope.
    Fail {
        /// Payload as JSON, typically a message or an array of messages.
        #[arg(long, value_name = "json", allow_hyphen_values = true)]
        data: String,
    },
    /// Build an ERROR envelope.
    Error {
        /// Error code.
        #[arg(long, allow_negative_numbers = true)]
        code: i32,
        /// Error message.
        #[arg(long, allow_hyphen_values = true)]
        message: String,
    },
}

/// Build the envelope described by `cli` and render it.
///
/// # Errors
///
/// Returns [`CliError`] when a JSON argument is malformed or the envelope
/// cannot be serialised.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use response_envelope::EnvelopeFactory;
/// use response_envelope::cli::{Cli, RenderSettings, run};
///
/// let cli = Cli::parse_from(["envelope-render", "error", "--code", "100", "--message", "boom"]);
/// let settings = RenderSettings { pretty: false, log_filter: None };
/// let output = run(&cli, &settings, &EnvelopeFactory::default()).expect("renders");
///
/// assert!(output.contains(r#""code":100"#));
/// ```
pub fn run(
    cli: &Cli,
    settings: &RenderSettings,
    factory: &EnvelopeFactory,
) -> Result<String, CliError> {
    let envelope = build_envelope(&cli.command, factory)?;
    render(&envelope, cli.pretty || settings.pretty)
}

/// Build the envelope described by `command`.
///
/// Paginated payloads are converted to their JSON form, so every command
/// yields a [`ResponseEnvelope<Value>`].
///
/// # Errors
///
/// Returns [`CliError::InvalidJson`] or [`CliError::ContentNotArray`] for
/// malformed JSON arguments, and [`CliError::Render`] if a page cannot be
/// converted to JSON.
pub fn build_envelope(
    command: &Command,
    factory: &EnvelopeFactory,
) -> Result<ResponseEnvelope, CliError> {
    match command {
        Command::Success { data } => Ok(factory.success(parse_json("--data", data)?)),
        Command::Page {
            page,
            limit,
            total,
            content,
        } => {
            let items = parse_content(content)?;
            factory
                .success_page(*page, *limit, *total, items)
                .try_map_data(serde_json::to_value)
                .map_err(|err| CliError::Render {
                    message: err.to_string(),
                })
        }
        Command::Fail { data } => Ok(factory.fail(parse_json("--data", data)?)),
        Command::Error { code, message } => Ok(factory.error(*code, message.as_str())),
    }
}

/// Serialise an envelope to its JSON wire form.
///
/// # Errors
///
/// Returns [`CliError::Render`] when the envelope cannot be serialised.
pub fn render(envelope: &ResponseEnvelope, pretty: bool) -> Result<String, CliError> {
    let rendered = if pretty {
        serde_json::to_string_pretty(envelope)
    } else {
        serde_json::to_string(envelope)
    };
    rendered.map_err(|err| CliError::Render {
        message: err.to_string(),
    })
}

fn parse_json(flag: &'static str, raw: &str) -> Result<Value, CliError> {
    serde_json::from_str(raw).map_err(|err| CliError::InvalidJson {
        flag,
        message: err.to_string(),
    })
}

fn parse_content(raw: &str) -> Result<Vec<Value>, CliError> {
    match parse_json("--content", raw)? {
        Value::Array(items) => Ok(items),
        _ => Err(CliError::ContentNotArray),
    }
}
