use std::path::{Component, Path, PathBuf};

use serde::Deserialize;

use crate::{checker::TARGET_FILES, lib::errors::ConfigError, lib::paths::resolve_against};

/// Where to look and which pages to check.
#[derive(Debug, Clone)]
pub struct CheckSection {
    pub base_dir: Option<PathBuf>,
    pub files: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RawCheckSection {
    pub base_dir: Option<String>,
    pub files: Option<Vec<String>>,
}

pub fn parse_check_section(
    raw: Option<RawCheckSection>,
    path: &Path,
) -> Result<CheckSection, ConfigError> {
    let raw = raw.unwrap_or_default();

    let base_dir = match raw.base_dir {
        Some(value) if value.trim().is_empty() => {
            return Err(ConfigError::invalid(
                path.to_path_buf(),
                "check.base_dir",
                "Specify a non-empty directory",
            ));
        }
        Some(value) => {
            let anchor = path.parent().unwrap_or_else(|| Path::new(""));
            Some(resolve_against(anchor, Path::new(&value)))
        }
        None => None,
    };

    let files = match raw.files {
        Some(files) => {
            validate_files(&files, path)?;
            files
        }
        None => TARGET_FILES.iter().map(|name| name.to_string()).collect(),
    };

    Ok(CheckSection { base_dir, files })
}

fn validate_files(files: &[String], path: &Path) -> Result<(), ConfigError> {
    if files.is_empty() {
        return Err(ConfigError::invalid(
            path.to_path_buf(),
            "check.files",
            "List at least one file",
        ));
    }

    for file in files {
        if file.trim().is_empty() {
            return Err(ConfigError::invalid(
                path.to_path_buf(),
                "check.files",
                "File names must not be empty",
            ));
        }
        let candidate = Path::new(file);
        let mut components = candidate.components();
        if candidate.is_absolute()
            || components
                .clone()
                .any(|component| !matches!(component, Component::Normal(_) | Component::CurDir))
        {
            return Err(ConfigError::invalid(
                path.to_path_buf(),
                "check.files",
                format!("`{file}` must be relative to the base directory"),
            ));
        }
        if !components.any(|component| matches!(component, Component::Normal(_))) {
            return Err(ConfigError::invalid(
                path.to_path_buf(),
                "check.files",
                format!("`{file}` does not name a file"),
            ));
        }
    }

    Ok(())
}
