//! `CheckProfile` and config path resolution.
use std::{env, path::PathBuf};

use anyhow::{Context, Result};

use crate::{
    checker::TARGET_FILES,
    config::{CheckConfig, CONFIG_ENV_KEY},
    lib::{errors::CheckError, paths::program_base_dir},
};

/// Where the config path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Cli,
    Env,
    None,
}

impl ConfigSource {
    pub const fn is_env(&self) -> bool {
        matches!(self, ConfigSource::Env)
    }
}

/// Resolved run settings.
#[derive(Debug, Clone)]
pub struct CheckProfile {
    pub base_dir_override: Option<PathBuf>,
    pub config: Option<CheckConfig>,
    pub targets: Vec<String>,
}

impl CheckProfile {
    pub fn new(base_dir_override: Option<PathBuf>, config: Option<CheckConfig>) -> Self {
        let targets = match &config {
            Some(config) => config.check.files.clone(),
            None => TARGET_FILES.iter().map(|name| name.to_string()).collect(),
        };
        Self {
            base_dir_override,
            config,
            targets,
        }
    }

    /// Resolve the base directory: `--base-dir` → `check.base_dir` → program location.
    pub fn base_dir(&self) -> Result<PathBuf, CheckError> {
        if let Some(dir) = &self.base_dir_override {
            return Ok(dir.clone());
        }
        if let Some(dir) = self
            .config
            .as_ref()
            .and_then(|config| config.check.base_dir.clone())
        {
            return Ok(dir);
        }
        program_base_dir()
    }
}

impl Default for CheckProfile {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Resolve config path in the order: CLI override → env var → none.
pub fn resolve_config_path(
    override_path: Option<PathBuf>,
) -> Result<(Option<PathBuf>, ConfigSource)> {
    let (path, source) = match override_path {
        Some(path) => (path, ConfigSource::Cli),
        None => match env::var(CONFIG_ENV_KEY) {
            Ok(value) if !value.trim().is_empty() => (PathBuf::from(value), ConfigSource::Env),
            _ => return Ok((None, ConfigSource::None)),
        },
    };

    if path.is_absolute() {
        return Ok((Some(path), source));
    }

    let cwd = env::current_dir().context("failed to obtain current directory")?;
    Ok((Some(cwd.join(path)), source))
}
