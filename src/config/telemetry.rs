use tracing::{debug, info};

use super::{CheckConfig, CONFIG_ENV_KEY};

pub fn log_source(path: Option<&std::path::Path>, from_env: bool) {
    match path {
        Some(path) if from_env => info!(
            target: "html_check::config",
            path = %path.display(),
            "Loading configuration using HTML_CHECK_CONFIG environment variable"
        ),
        Some(path) => debug!(
            target: "html_check::config",
            path = %path.display(),
            "Loading configuration from --config"
        ),
        None => debug!(
            target: "html_check::config",
            env = CONFIG_ENV_KEY,
            "No configuration given; using built-in targets"
        ),
    }
}

pub fn log_loaded(config: &CheckConfig) {
    info!(
        target: "html_check::config",
        path = %config.source_path.display(),
        base_dir = ?config.check.base_dir,
        files = ?config.check.files,
        "Configuration file loaded successfully"
    );
}
