//! Per-file outcomes and their stdout rendering.
use std::{io, io::Write, process::ExitCode};

/// Outcome of checking one target file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    /// File not found at the resolved path.
    Missing,
    /// File found but failing one or more checks.
    Issues(Vec<String>),
    Ok,
}

impl CheckResult {
    pub fn from_issues(issues: Vec<String>) -> Self {
        if issues.is_empty() {
            CheckResult::Ok
        } else {
            CheckResult::Issues(issues)
        }
    }

    pub fn is_failure(&self) -> bool {
        !matches!(self, CheckResult::Ok)
    }
}

/// Write the report lines for one file.
pub fn render(out: &mut impl Write, filename: &str, result: &CheckResult) -> io::Result<()> {
    match result {
        CheckResult::Missing => writeln!(out, "[MISSING] {filename} not found"),
        CheckResult::Issues(issues) => {
            writeln!(out, "[ISSUES] {filename}:")?;
            for issue in issues {
                writeln!(out, "  - {issue}")?;
            }
            Ok(())
        }
        CheckResult::Ok => writeln!(out, "[OK] {filename} looks good (basic checks)"),
    }
}

/// Counts accumulated over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub checked: usize,
    pub missing: usize,
    pub with_issues: usize,
    pub ok: usize,
}

impl RunSummary {
    pub fn record(&mut self, result: &CheckResult) {
        self.checked += 1;
        match result {
            CheckResult::Missing => self.missing += 1,
            CheckResult::Issues(_) => self.with_issues += 1,
            CheckResult::Ok => self.ok += 1,
        }
    }

    pub fn has_failures(&self) -> bool {
        self.missing > 0 || self.with_issues > 0
    }

    pub fn exit_code(&self) -> ExitCode {
        if self.has_failures() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        }
    }
}
