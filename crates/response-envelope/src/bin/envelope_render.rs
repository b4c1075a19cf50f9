//! Render a response envelope from the command line.
//!
//! This binary delegates to `response_envelope::cli` for building and
//! rendering, keeping the behaviour testable without spawning a process.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use response_envelope::EnvelopeFactory;
use response_envelope::cli::{Cli, CliError, RenderSettings, run};
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    let cli = Cli::parse();
    match render(&cli) {
        Ok(output) => {
            if let Err(err) = writeln!(io::stdout().lock(), "{output}") {
                drop(err);
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn render(cli: &Cli) -> Result<String, CliError> {
    let settings = RenderSettings::load_ambient()?;
    init_tracing(&settings);
    debug!(pretty = cli.pretty || settings.pretty, "rendering envelope");
    run(cli, &settings, &EnvelopeFactory::default())
}

fn init_tracing(settings: &RenderSettings) {
    let filter = settings
        .log_filter()
        .map_or_else(EnvFilter::from_default_env, EnvFilter::new);
    if let Err(e) = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}
