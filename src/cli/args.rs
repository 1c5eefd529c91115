//! CLI argument definitions and `CheckProfile` construction.
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use super::{resolve_config_path, CheckProfile};
use crate::config::{telemetry, CheckConfig};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "html-check",
    version,
    about = "Check that the site's HTML pages carry a doctype and the basic document tags",
    long_about = "Check that the site's HTML pages carry a doctype and the basic document tags.\n\nThis is substring search, not HTML validation. Pages are looked up in the directory above the one holding this program unless --base-dir or a config file says otherwise.",
    after_help = "Exit status is 0 when every page is present and passes, 1 otherwise."
)]
pub struct CheckArgs {
    /// Directory holding the pages (overrides config and the program location).
    #[arg(long = "base-dir", value_name = "DIR")]
    pub base_dir: Option<PathBuf>,
    /// Path to a TOML config file (overrides HTML_CHECK_CONFIG).
    #[arg(long = "config", value_name = "PATH")]
    pub config_override: Option<PathBuf>,
}

impl CheckArgs {
    /// Build a `CheckProfile` from CLI args, the environment and the optional config file.
    pub fn build(self) -> Result<CheckProfile> {
        let (config_path, source) = resolve_config_path(self.config_override)?;
        telemetry::log_source(config_path.as_deref(), source.is_env());

        let config = config_path.map(CheckConfig::load_from_path).transpose()?;

        Ok(CheckProfile::new(self.base_dir, config))
    }
}
