//! Shared utilities for memlay front ends.

pub mod config;

pub use config::{AtomicEntry, CONFIG_FILE, Config, Shell};
