//! Line-oriented command shell over a [`TypeRegistry`].
//!
//! The shell only tokenizes and dispatches; every size and padding figure
//! comes from memlay-core.

use memlay_core::{LayoutStrategy, TypeRegistry};
use miette::Diagnostic;
use thiserror::Error;

/// Errors produced while executing one shell line.
#[derive(Error, Debug, Diagnostic)]
pub enum ShellError {
    #[error("usage: {0}")]
    #[diagnostic(code(memlay::shell::usage))]
    Usage(&'static str),

    #[error("unknown command '{0}'")]
    #[diagnostic(
        code(memlay::shell::unknown_command),
        help("try ATOMIC, STRUCT, UNION, DESCRIBE, LAYOUT, LIST or EXIT")
    )]
    UnknownCommand(String),

    #[error("'{0}' is not an integer")]
    #[diagnostic(code(memlay::shell::number))]
    InvalidNumber(String),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Registry(#[from] memlay_core::Error),
}

/// What the caller should do after a line ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to show the user
    Output(String),
    /// Nothing to show (blank line)
    Empty,
    /// Leave the shell
    Exit,
}

const ATOMIC_USAGE: &str = "ATOMIC <name> <size> <align>";
const STRUCT_USAGE: &str = "STRUCT <name> <type> ...";
const UNION_USAGE: &str = "UNION <name> <type> ...";
const DESCRIBE_USAGE: &str = "DESCRIBE <name>";
const LAYOUT_USAGE: &str = "LAYOUT <name> [default|packed|optimal]";

/// Command interpreter owning the registry it mutates.
#[derive(Debug, Default)]
pub struct Shell {
    registry: TypeRegistry,
}

impl Shell {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a shell over an existing registry (e.g. with a prelude applied).
    #[must_use]
    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    /// Executes one line of input.
    ///
    /// # Errors
    /// Returns an error for malformed commands and for anything the registry rejects.
    /// The registry is unchanged whenever an error is returned.
    pub fn execute(&mut self, line: &str) -> Result<Outcome, ShellError> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((command, args)) = tokens.split_first() else {
            return Ok(Outcome::Empty);
        };

        tracing::trace!(command, args = args.len(), "executing shell command");

        let output = match command.to_ascii_uppercase().as_str() {
            "EXIT" | "QUIT" => return Ok(Outcome::Exit),
            "ATOMIC" => {
                let [name, size, align] = args else {
                    return Err(ShellError::Usage(ATOMIC_USAGE));
                };
                self.registry
                    .register_atomic(name, parse_int(size)?, parse_int(align)?)?;
                format!("Defined ATOMIC {name}")
            }
            "STRUCT" => {
                let Some((name, members)) = split_aggregate(args) else {
                    return Err(ShellError::Usage(STRUCT_USAGE));
                };
                self.registry.register_struct(name, members)?;
                format!("Defined STRUCT {name}")
            }
            "UNION" => {
                let Some((name, members)) = split_aggregate(args) else {
                    return Err(ShellError::Usage(UNION_USAGE));
                };
                self.registry.register_union(name, members)?;
                format!("Defined UNION {name}")
            }
            "DESCRIBE" => {
                let [name] = args else {
                    return Err(ShellError::Usage(DESCRIBE_USAGE));
                };
                self.registry.describe(name)?.to_string()
            }
            "LAYOUT" => {
                let (name, strategy) = match args {
                    [name] => (name, LayoutStrategy::Default),
                    [name, strategy] => (name, strategy.parse()?),
                    _ => return Err(ShellError::Usage(LAYOUT_USAGE)),
                };
                format!("{name}: {}", self.registry.layout(name, strategy)?)
            }
            "LIST" => self
                .registry
                .iter()
                .map(|def| format!("{} ({})", def.name(), def.kind().name()))
                .collect::<Vec<_>>()
                .join("\n"),
            _ => return Err(ShellError::UnknownCommand((*command).to_string())),
        };

        Ok(Outcome::Output(output))
    }
}

/// Splits `<name> <member> ...`, requiring at least one member.
fn split_aggregate<'a>(args: &'a [&'a str]) -> Option<(&'a str, &'a [&'a str])> {
    match args {
        [name, members @ ..] if !members.is_empty() => Some((*name, members)),
        _ => None,
    }
}

fn parse_int(token: &str) -> Result<i64, ShellError> {
    token
        .parse()
        .map_err(|_| ShellError::InvalidNumber(token.to_string()))
}
