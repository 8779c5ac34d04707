//! memlay CLI library for testing and reusability.

pub mod logging;
pub mod script;
pub mod shell;
pub mod utils;

pub use memlay_utils::Config;
pub use script::{ScriptReport, run_script};
pub use shell::{Outcome, Shell, ShellError};
