//! Command implementations for the memlay CLI.

pub mod address;
pub mod init;
pub mod repl;
pub mod run;
