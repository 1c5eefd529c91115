//! Presence checks over the site's HTML pages.
mod report;
mod rules;
mod runner;

pub use report::{render, CheckResult, RunSummary};
pub use rules::{
    check, has_doctype, DOCTYPE_MARKER, DOCTYPE_MARKER_LOWER, REQUIRED_TAGS, TARGET_FILES,
};
pub use runner::{check_file, run, run_with};
