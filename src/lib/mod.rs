//! Shared library modules providing error types, path resolution, and telemetry initialization.

pub mod errors;
pub mod paths;
pub mod telemetry;
