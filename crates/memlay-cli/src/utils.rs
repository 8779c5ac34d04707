//! Utility functions shared across the CLI.

use anyhow::{Context, Result};
use colored::Colorize;
use memlay_utils::Config;
use std::path::Path;

/// Loads the configuration to use for a session.
///
/// An explicit path must exist; otherwise memlay.toml is searched upwards
/// from the current directory and the defaults apply when none is found.
///
/// # Errors
/// Returns an error if the explicit file, or a discovered one, cannot be loaded.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::load(path).with_context(|| "Could not load the requested configuration");
    }
    match Config::locate()? {
        Some(path) => {
            tracing::debug!(path = %path.display(), "using discovered configuration");
            Config::load(&path)
        }
        None => Ok(Config::default()),
    }
}

/// Prints a status message with colored output.
pub fn print_status(status: &str, message: &str) {
    println!("{} {message}", status.green().bold());
}

/// Prints an error message to stderr.
pub fn print_error(message: impl std::fmt::Display) {
    eprintln!("{} {message}", "error:".red().bold());
}
