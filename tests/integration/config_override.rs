use std::{fs, process::Command};

use anyhow::Result;
use tempfile::tempdir;

use crate::common::{
    install_binary, run_binary, stderr, stdout, write_page, BINARY_PATH, CONFIG_ENV, SKELETON,
};

#[test]
fn config_file_selects_targets_and_base_dir() -> Result<()> {
    let site = tempdir()?;
    let root = tempdir()?;
    write_page(root.path(), "public/about.html", SKELETON)?;
    write_page(root.path(), "public/contact.html", "<html></html>")?;
    let config = root.path().join("check.toml");
    fs::write(
        &config,
        "[check]\nbase_dir = \"public\"\nfiles = [\"about.html\", \"contact.html\"]\n",
    )?;
    let binary = install_binary(site.path())?;

    let config_arg = config.to_string_lossy().into_owned();
    let output = run_binary(&binary, site.path(), &["--config", &config_arg])?;

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        stdout(&output),
        "[OK] about.html looks good (basic checks)\n\
         [ISSUES] contact.html:\n\
         \x20 - Missing <!DOCTYPE html>\n\
         \x20 - Missing <head tag\n\
         \x20 - Missing </head> tag\n\
         \x20 - Missing <body tag\n\
         \x20 - Missing </body> tag\n\
         \x20 - Missing <title tag\n"
    );
    Ok(())
}

#[test]
fn config_path_is_read_from_environment() -> Result<()> {
    let root = tempdir()?;
    write_page(root.path(), "pages/index.html", SKELETON)?;
    let config = root.path().join("check.toml");
    fs::write(&config, "[check]\nfiles = [\"pages/index.html\"]\n")?;

    let base_dir = root.path().to_string_lossy().into_owned();
    let output = Command::new(BINARY_PATH)
        .args(["--base-dir", base_dir.as_str()])
        .env(CONFIG_ENV, &config)
        .env_remove("RUST_LOG")
        .output()?;

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr(&output));
    assert_eq!(
        stdout(&output),
        "[OK] pages/index.html looks good (basic checks)\n"
    );
    Ok(())
}

#[test]
fn invalid_config_exits_before_checking() -> Result<()> {
    let site = tempdir()?;
    write_page(site.path(), "index.html", SKELETON)?;
    let config = site.path().join("check.toml");
    fs::write(&config, "[check]\nfiles = []\n")?;
    let binary = install_binary(site.path())?;

    let config_arg = config.to_string_lossy().into_owned();
    let output = run_binary(&binary, site.path(), &["--config", &config_arg])?;

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(
        stderr(&output).contains("check.files"),
        "stderr: {}",
        stderr(&output)
    );
    Ok(())
}
