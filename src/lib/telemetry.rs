//! Telemetry initialization and run span helpers.

use std::time::Instant;

use anyhow::Result;
use tracing::{info, info_span, Span};
use tracing_subscriber::{fmt, EnvFilter};
use uuid::Uuid;

/// Initialize `tracing`; logs go to stderr so stdout stays the report channel.
pub fn init_tracing() -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to initialize tracing: {err}"))
}

/// Span helper to record start and finish of one checker run.
pub struct RunSpan {
    span: Span,
    started_at: Instant,
    run_id: Uuid,
}

impl RunSpan {
    pub fn start(base_dir: &std::path::Path, targets: usize) -> Self {
        let run_id = Uuid::new_v4();
        let span = info_span!(
            target: "html_check::checker",
            "html_check_run",
            %run_id,
            base_dir = %base_dir.display(),
            targets
        );
        Self {
            span,
            started_at: Instant::now(),
            run_id,
        }
    }

    pub fn span(&self) -> &Span {
        &self.span
    }

    /// Close the span while recording per-outcome counts.
    pub fn finish(self, ok: usize, missing: usize, with_issues: usize) {
        let elapsed_ms = self.started_at.elapsed().as_millis();
        let _entered = self.span.enter();
        info!(
            target: "html_check::checker",
            run_id = %self.run_id,
            ok,
            missing,
            with_issues,
            elapsed_ms,
            "Completed HTML checks"
        );
    }
}
