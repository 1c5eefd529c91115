//! Entry point for html-check.
use std::process::ExitCode;

use anyhow::Error;
use clap::Parser;
use html_check::{checker, cli::CheckArgs, lib::telemetry};

/// Message and exit code for a run that could not produce a full report.
#[derive(Debug)]
struct RunFailure {
    message: String,
    exit_code: ExitCode,
}

impl RunFailure {
    fn from_error(err: impl Into<Error>) -> Self {
        let err = err.into();
        Self {
            message: format!("{err:#}"),
            exit_code: ExitCode::FAILURE,
        }
    }

    fn report(self) -> ExitCode {
        eprintln!("error: {}", self.message);
        self.exit_code
    }
}

fn main() -> ExitCode {
    match bootstrap() {
        Ok(code) => code,
        Err(failure) => failure.report(),
    }
}

fn bootstrap() -> Result<ExitCode, RunFailure> {
    telemetry::init_tracing().map_err(RunFailure::from_error)?;
    let profile = CheckArgs::parse().build().map_err(RunFailure::from_error)?;
    let summary = checker::run(&profile).map_err(RunFailure::from_error)?;
    Ok(summary.exit_code())
}
