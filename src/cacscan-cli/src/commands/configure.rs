//! Configuration command handlers
//!
//! Handles the `configure` subcommand for setting up cacscan CLI defaults.

use crate::config::Config;
use anyhow::Result;
use std::path::PathBuf;

/// Handle the configure command
///
/// # Arguments
/// * `log` - Optional scan log path to set as default
/// * `show` - If true, show current configuration
pub fn handle(log: Option<PathBuf>, show: bool) -> Result<()> {
    let mut config = Config::load()?;

    if show {
        show_config(&config);
        return Ok(());
    }

    if let Some(path) = log {
        set_scan_log(&mut config, path)?;
    } else {
        show_usage();
    }

    Ok(())
}

/// Display current configuration
fn show_config(config: &Config) {
    match &config.scan_log {
        Some(path) => println!("Scan log: {}", path.display()),
        None => println!("Scan log: {} (default)", config.scan_log().display()),
    }

    if let Ok(path) = Config::config_path() {
        println!("Config file: {}", path.display());
    }
}

/// Set the scan log path in configuration
fn set_scan_log(config: &mut Config, path: PathBuf) -> Result<()> {
    println!("Scan log configured: {}", path.display());
    config.set_scan_log(path);
    config.save()?;

    if let Ok(path) = Config::config_path() {
        println!("Config saved to: {}", path.display());
    }

    Ok(())
}

/// Show usage help for the configure command
fn show_usage() {
    println!("Usage: cacscan configure --log PATH");
    println!("   or: cacscan configure --show");
    println!();
    println!("Note: every accepted scan is appended to the scan log.");
    println!("      Exporting a session empties it.");
}
