//! Implementation of the `memlay init` command.

use crate::utils::print_status;
use anyhow::{Context, Result};
use memlay_utils::{CONFIG_FILE, Config};

/// Writes a memlay.toml with the C scalar prelude into the current directory.
///
/// # Errors
/// Returns an error if a memlay.toml already exists or cannot be written.
pub fn execute() -> Result<()> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let config_path = current_dir.join(CONFIG_FILE);

    if config_path.exists() {
        anyhow::bail!("{CONFIG_FILE} already exists in {}", current_dir.display());
    }

    Config::with_c_prelude().save(&config_path)?;
    print_status("Created", &config_path.display().to_string());
    Ok(())
}
