//! Sequential run over the target files.
use std::{
    fs,
    io::{self, Write},
    path::Path,
};

use tracing::{debug, warn};

use super::{check, render, CheckResult, RunSummary};
use crate::{
    cli::CheckProfile,
    lib::{errors::CheckError, telemetry::RunSpan},
};

/// Check a single file on disk.
///
/// Read and UTF-8 decode failures are returned as errors rather than folded
/// into the result, so the caller aborts the batch.
pub fn check_file(path: &Path) -> Result<CheckResult, CheckError> {
    let exists = path.try_exists().map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if !exists {
        return Ok(CheckResult::Missing);
    }

    let bytes = fs::read(path).map_err(|source| CheckError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| CheckError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(CheckResult::from_issues(check(&text)))
}

/// Check each target under `base_dir` in order, writing the report to `out`.
pub fn run_with<S: AsRef<str>>(
    base_dir: &Path,
    targets: &[S],
    out: &mut impl Write,
) -> Result<RunSummary, CheckError> {
    let run_span = RunSpan::start(base_dir, targets.len());
    let mut summary = RunSummary::default();

    for target in targets {
        let filename = target.as_ref();
        let path = base_dir.join(filename);
        let result = run_span.span().in_scope(|| check_file(&path)).map_err(|err| {
            warn!(
                target: "html_check::checker",
                path = %path.display(),
                reason = %err,
                "Aborting run"
            );
            err
        })?;

        debug!(
            target: "html_check::checker",
            file = filename,
            outcome = ?result,
            "Checked target file"
        );
        render(out, filename, &result)?;
        summary.record(&result);
    }

    out.flush()?;
    run_span.finish(summary.ok, summary.missing, summary.with_issues);
    Ok(summary)
}

/// Run the checks described by `profile` and report on stdout.
pub fn run(profile: &CheckProfile) -> Result<RunSummary, CheckError> {
    let base_dir = profile.base_dir()?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with(&base_dir, profile.targets.as_slice(), &mut out)
}
