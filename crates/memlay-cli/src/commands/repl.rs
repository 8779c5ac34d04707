//! Implementation of the `memlay repl` command.

use crate::shell::{Outcome, Shell};
use crate::utils::{load_config, print_error};
use anyhow::{Context, Result};
use colored::Colorize;
use memlay_core::TypeRegistry;
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Runs the interactive prompt until EXIT or end of input.
///
/// Command errors are printed and the session continues.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or the terminal fails.
pub fn execute(config_path: Option<&Path>) -> Result<()> {
    let config = load_config(config_path)?;
    let mut registry = TypeRegistry::new();
    config.apply_prelude(&mut registry)?;
    let mut shell = Shell::with_registry(registry);

    println!(
        "{} (type {} to leave)",
        "memlay type layout shell".bold(),
        "EXIT".cyan()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut line = String::new();

    loop {
        print!("{}", config.shell.prompt);
        stdout.flush().context("Failed to flush stdout")?;

        line.clear();
        if stdin.lock().read_line(&mut line).context("Failed to read input")? == 0 {
            println!();
            break;
        }

        match shell.execute(&line) {
            Ok(Outcome::Output(text)) => println!("{text}"),
            Ok(Outcome::Empty) => {}
            Ok(Outcome::Exit) => break,
            Err(err) => print_error(err),
        }
    }

    Ok(())
}
