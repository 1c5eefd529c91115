//! Base directory resolution for target file lookups.

use std::{
    env,
    path::{Path, PathBuf},
};

use crate::lib::errors::CheckError;

/// Directory one level above the one holding the running executable.
///
/// Anchors target lookups regardless of the caller's working directory.
pub fn program_base_dir() -> Result<PathBuf, CheckError> {
    let program = env::current_exe()
        .and_then(|path| path.canonicalize())
        .map_err(|source| CheckError::ProgramLocation { source })?;
    base_dir_for(&program)
}

/// Returns the grandparent of `program` (the parent of its containing directory).
pub fn base_dir_for(program: &Path) -> Result<PathBuf, CheckError> {
    program
        .parent()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .ok_or_else(|| CheckError::NoBaseDir {
            path: program.to_path_buf(),
        })
}

/// Resolve `path` against `anchor` unless it is already absolute.
pub fn resolve_against(anchor: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        anchor.join(path)
    }
}
