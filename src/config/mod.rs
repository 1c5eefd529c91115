//! Load and validate the optional checker configuration.
use std::path::PathBuf;

use serde::Deserialize;
use tracing::{error, info};

use crate::lib::errors::ConfigError;

pub mod targets;
pub mod telemetry;

pub use targets::{parse_check_section, CheckSection, RawCheckSection};

pub const CONFIG_ENV_KEY: &str = "HTML_CHECK_CONFIG";

/// Top-level configuration container.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub check: CheckSection,
    pub source_path: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawCheckConfig {
    check: Option<RawCheckSection>,
}

impl CheckConfig {
    /// Load configuration from a specific path.
    pub fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        info!(
            target: "html_check::config",
            path = %path.display(),
            "Starting configuration load"
        );

        let builder = ::config::Config::builder().add_source(::config::File::from(path.clone()));
        let document = builder.build().map_err(|err| {
            let error = ConfigError::from_read_error(path.clone(), err);
            error!(
                target: "html_check::config",
                path = %path.display(),
                reason = %error,
                "Failed to read configuration file"
            );
            error
        })?;

        let raw: RawCheckConfig = document.try_deserialize().map_err(|err| {
            let error = ConfigError::from_parse_error(path.clone(), err);
            error!(
                target: "html_check::config",
                path = %path.display(),
                reason = %error,
                "Failed to parse configuration file"
            );
            error
        })?;

        let check = parse_check_section(raw.check, &path).map_err(|err| {
            error!(
                target: "html_check::config",
                path = %path.display(),
                reason = %err,
                "Failed to validate configuration file"
            );
            err
        })?;

        let config = Self {
            check,
            source_path: path,
        };
        telemetry::log_loaded(&config);
        Ok(config)
    }
}
