//! Installer and updater
//!
//! Downloads the brlfetch payload, places it at `~/.local/bin/brlfetch` with
//! mode 0755, and checks that the install directory is on `PATH`.

use anyhow::{bail, Context, Result};
use colored::*;
use directories::BaseDirs;
use reqwest::blocking::Client;
use std::ffi::OsStr;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::config::Config;
use crate::probe::metrics;

const BINARY_NAME: &str = "brlfetch";
const FETCH_TIMEOUT_SECONDS: u64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Install,
    Update,
}

fn print_step(step: u32, msg: &str) {
    println!("{} {}", format!("[{step}]").bright_blue(), msg);
}

fn print_success(msg: &str) {
    println!("{}", format!("✔ {msg}").bright_green());
}

fn print_warning(msg: &str) {
    println!("{}", format!("⚠ {msg}").bright_yellow());
}

fn print_error(msg: &str) {
    println!("{}", format!("✖ {msg}").bright_red());
}

/// Run the full install/update flow
pub fn run(config: &Config, mode: Mode) -> Result<()> {
    let title = match mode {
        Mode::Install => "brlfetch Installer".to_string(),
        Mode::Update => "brlfetch Installer (Update Mode)".to_string(),
    };
    println!("\n{}\n", title.bright_cyan().bold());

    print_step(1, "Checking extended metrics support...");
    if metrics::detect(config.probes.extended_metrics).is_available() {
        print_success("extended metrics available");
    } else {
        print_warning("extended metrics unavailable (memory/disk info will show 'unknown')");
    }

    let verb = match mode {
        Mode::Install => "Installing",
        Mode::Update => "Updating",
    };
    print_step(2, &format!("{verb} brlfetch..."));

    let dir = install_dir(config)?;
    let payload = fetch_payload(
        &config.install.payload_url,
        Duration::from_secs(FETCH_TIMEOUT_SECONDS),
    )
    .inspect_err(|err| print_error(&format!("Failed to fetch payload from URL: {err:#}")))?;

    let target = write_payload(&dir, &payload)
        .inspect_err(|err| print_error(&format!("Failed to write payload: {err:#}")))?;
    print_success(&format!("Installed/Updated to: {}", target.display()));

    print_step(3, "Checking PATH...");
    let path_var = std::env::var_os("PATH").unwrap_or_default();
    if dir_on_path(&path_var, &dir) {
        print_success(&format!("{} is in PATH", dir.display()));
    } else {
        print_warning(&format!("{} is NOT in PATH", dir.display()));
        println!("Add this to your shell config:\nexport PATH=\"$HOME/.local/bin:$PATH\"");
    }

    print_success("Done! You can run brlfetch now.\n");
    Ok(())
}

/// Configured install directory, or `~/.local/bin`
pub fn install_dir(config: &Config) -> Result<PathBuf> {
    if let Some(dir) = &config.install.install_dir {
        return Ok(dir.clone());
    }

    let base = BaseDirs::new().context("Could not determine home directory")?;
    Ok(base.home_dir().join(".local").join("bin"))
}

fn fetch_payload(url: &str, timeout: Duration) -> Result<Vec<u8>> {
    let client = Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build HTTP client")?;

    debug!(url, "fetching payload");
    let bytes = client
        .get(url)
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.bytes())
        .with_context(|| format!("GET {url}"))?;

    if bytes.is_empty() {
        bail!("{url} returned an empty payload");
    }
    Ok(bytes.to_vec())
}

/// Write `payload` to `dir/brlfetch` through a temp file in the same directory
pub fn write_payload(dir: &Path, payload: &[u8]) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create install directory: {}", dir.display()))?;

    let mut staged = tempfile::Builder::new()
        .prefix(".brlfetch-")
        .tempfile_in(dir)
        .with_context(|| format!("Failed to stage payload in {}", dir.display()))?;
    staged
        .write_all(payload)
        .context("Failed to write staged payload")?;
    staged.flush().context("Failed to flush staged payload")?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(staged.path(), fs::Permissions::from_mode(0o755))
            .context("Failed to mark payload executable")?;
    }

    let target = dir.join(BINARY_NAME);
    staged
        .persist(&target)
        .with_context(|| format!("Failed to move payload into {}", target.display()))?;
    Ok(target)
}

/// Whether `dir` is one of the entries of a PATH-style variable
pub fn dir_on_path(path_var: &OsStr, dir: &Path) -> bool {
    let wanted = normalize_path_for_compare(dir);
    std::env::split_paths(path_var).any(|entry| normalize_path_for_compare(&entry) == wanted)
}

fn normalize_path_for_compare(path: &Path) -> String {
    path.to_string_lossy()
        .trim()
        .trim_end_matches(['\\', '/'])
        .to_string()
}
