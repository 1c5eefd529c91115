use std::{
    fs, io,
    path::{Path, PathBuf},
    process::{Command, Output},
    thread,
    time::Duration,
};

use anyhow::{Context, Result};

pub const BINARY_PATH: &str = env!("CARGO_BIN_EXE_html-check");
pub const CONFIG_ENV: &str = "HTML_CHECK_CONFIG";

pub const SKELETON: &str = "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"utf-8\">\n  <title>Page</title>\n</head>\n<body>\n  <main></main>\n</body>\n</html>\n";

pub fn write_page(dir: &Path, name: &str, content: impl AsRef<[u8]>) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))
}

pub fn write_all_pages(dir: &Path) -> Result<()> {
    for name in ["index.html", "signin.html", "signup.html"] {
        write_page(dir, name, SKELETON)?;
    }
    Ok(())
}

/// Copy the binary to `<site>/scripts/html-check` so the site becomes its base directory.
pub fn install_binary(site: &Path) -> Result<PathBuf> {
    let scripts = site.join("scripts");
    fs::create_dir_all(&scripts)
        .with_context(|| format!("failed to create {}", scripts.display()))?;
    let installed = scripts.join("html-check");
    fs::copy(BINARY_PATH, &installed)
        .with_context(|| format!("failed to copy binary to {}", installed.display()))?;
    Ok(installed)
}

/// Run `binary` from `cwd` with a clean config/log environment.
pub fn run_binary(binary: &Path, cwd: &Path, args: &[&str]) -> Result<Output> {
    let mut attempts = 0;
    loop {
        let result = Command::new(binary)
            .args(args)
            .current_dir(cwd)
            .env_remove(CONFIG_ENV)
            .env_remove("RUST_LOG")
            .output();
        match result {
            // A freshly copied executable can briefly report ETXTBSY while
            // another test thread forks.
            Err(err) if is_text_busy(&err) && attempts < 10 => {
                attempts += 1;
                thread::sleep(Duration::from_millis(50));
            }
            other => return other.with_context(|| format!("failed to run {}", binary.display())),
        }
    }
}

/// Linux `ETXTBSY`: the executable is still open for writing somewhere.
const ETXTBSY: i32 = 26;

fn is_text_busy(err: &io::Error) -> bool {
    err.raw_os_error() == Some(ETXTBSY)
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
