//! Render settings loaded via OrthoConfig.

use std::ffi::OsString;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use super::error::CliError;

/// Configuration values controlling how envelopes are rendered.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "ENVELOPE")]
pub struct RenderSettings {
    /// Pretty-print rendered JSON.
    #[ortho_config(default = false)]
    pub pretty: bool,
    /// Tracing filter directive, e.g. `response_envelope=trace`.
    pub log_filter: Option<String>,
}

impl RenderSettings {
    /// Load settings from the environment and configuration files.
    ///
    /// Command-line flags are handled by [`super::Cli`], so the loader only
    /// sees the program name.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] when a configured value cannot be parsed.
    pub fn load_ambient() -> Result<Self, CliError> {
        Self::load_from_iter([OsString::from("envelope-render")]).map_err(|err| {
            CliError::Config {
                message: err.to_string(),
            }
        })
    }

    /// Tracing filter directive, if one was configured.
    #[must_use]
    pub fn log_filter(&self) -> Option<&str> {
        self.log_filter.as_deref()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for render settings loading.

    use super::*;

    use env_lock::lock_env;
    use rstest::rstest;

    #[rstest]
    fn default_values_are_used_when_missing() {
        let _guard = lock_env([
            ("ENVELOPE_PRETTY", None::<String>),
            ("ENVELOPE_LOG_FILTER", None::<String>),
        ]);

        let settings = RenderSettings::load_ambient().expect("config should load");
        assert!(!settings.pretty);
        assert!(settings.log_filter().is_none());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("ENVELOPE_PRETTY", Some("true".to_owned())),
            (
                "ENVELOPE_LOG_FILTER",
                Some("response_envelope=trace".to_owned()),
            ),
        ]);

        let settings = RenderSettings::load_ambient().expect("config should load");
        assert!(settings.pretty);
        assert_eq!(settings.log_filter(), Some("response_envelope=trace"));
    }
}
