//! Command-line interface for memlay.

mod commands;
mod logging;
mod script;
mod shell;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use memlay_core::Bounds;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "memlay")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive type layout shell (default)
    #[command(visible_alias = "r")]
    Repl {
        /// Configuration file to use instead of the nearest memlay.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Execute the shell commands in a script file
    Run {
        /// Script to execute, one command per line
        script: PathBuf,

        /// Configuration file to use instead of the nearest memlay.toml
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Write a memlay.toml with common C scalar types
    Init,

    /// Compute the address of a multi-dimensional array element
    #[command(visible_alias = "a")]
    Address {
        /// Inclusive bounds of one dimension, as <lower>:<upper> (repeat per dimension)
        #[arg(
            short,
            long = "bounds",
            required = true,
            value_parser = commands::address::parse_bounds,
            allow_hyphen_values = true
        )]
        bounds: Vec<Bounds>,

        /// Size of one element in bytes
        #[arg(short, long)]
        element_size: i64,

        /// Address of the first element
        #[arg(long, default_value_t = 0)]
        base: i64,

        /// Element index, comma separated; defaults to the middle element
        #[arg(short, long, value_delimiter = ',', allow_hyphen_values = true)]
        index: Vec<i64>,
    },
}

fn main() -> Result<()> {
    logging::init_tracing();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Repl { config: None }) {
        Commands::Repl { config } => commands::repl::execute(config.as_deref()),
        Commands::Run { script, config } => commands::run::execute(&script, config.as_deref()),
        Commands::Init => commands::init::execute(),
        Commands::Address {
            bounds,
            element_size,
            base,
            index,
        } => commands::address::execute(bounds, element_size, base, &index),
    }
}
