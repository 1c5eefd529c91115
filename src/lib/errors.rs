use std::{io, path::PathBuf, string::FromUtf8Error};

use ::config::ConfigError as ConfigLoaderError;
use thiserror::Error;

/// Errors that can occur while loading or validating the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to build (read) the configuration file.
    #[error("Failed to read configuration file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Failed to deserialize TOML into a struct.
    #[error("Failed to parse configuration file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ConfigLoaderError,
    },
    /// Field failed validation.
    #[error("Configuration file {path} has invalid `{field}`: {message}")]
    InvalidField {
        path: PathBuf,
        field: &'static str,
        message: String,
    },
}

impl ConfigError {
    /// Helper to wrap `config::ConfigError` as a read failure.
    pub fn from_read_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::FileRead { path, source }
    }

    /// Helper to wrap `config::ConfigError` as a parse failure.
    pub fn from_parse_error(path: PathBuf, source: ConfigLoaderError) -> Self {
        Self::Parse { path, source }
    }

    pub fn invalid(path: PathBuf, field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            path,
            field,
            message: message.into(),
        }
    }
}

/// Failures that abort a whole run.
///
/// A missing target file or a failed presence check is a per-file outcome,
/// not an error; only the variants below stop the batch.
#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Failed to resolve the program location: {source}")]
    ProgramLocation {
        #[source]
        source: io::Error,
    },
    #[error("Program location {path} has no parent directory to anchor target files")]
    NoBaseDir { path: PathBuf },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path} is not valid UTF-8: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
    #[error("Failed to write report: {source}")]
    Report {
        #[source]
        source: io::Error,
    },
}

impl From<io::Error> for CheckError {
    fn from(source: io::Error) -> Self {
        CheckError::Report { source }
    }
}
