//! Implementation of the `memlay run` command.

use crate::script::run_script;
use crate::shell::Shell;
use crate::utils::{load_config, print_error, print_status};
use anyhow::{Context, Result};
use memlay_core::TypeRegistry;
use std::fs;
use std::path::Path;

/// Executes every command in `script`, printing output as it goes.
///
/// # Errors
/// Returns an error if the script cannot be read or any of its lines failed.
pub fn execute(script: &Path, config_path: Option<&Path>) -> Result<()> {
    let source = fs::read_to_string(script)
        .with_context(|| format!("Failed to read {}", script.display()))?;

    let config = load_config(config_path)?;
    let mut registry = TypeRegistry::new();
    config.apply_prelude(&mut registry)?;
    let mut shell = Shell::with_registry(registry);

    print_status("Running", &script.display().to_string());
    let report = run_script(&mut shell, &source);

    for output in &report.outputs {
        println!("{output}");
    }
    for (line, err) in &report.errors {
        print_error(format!("{}:{line}: {err}", script.display()));
    }

    if !report.is_success() {
        anyhow::bail!("{} command(s) failed", report.errors.len());
    }
    Ok(())
}
