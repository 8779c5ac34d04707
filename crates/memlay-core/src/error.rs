//! Error types and result aliases for the layout engine.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for memlay.
#[derive(Error, Debug, Diagnostic, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid parameter: {0}")]
    #[diagnostic(code(memlay::invalid_parameter))]
    InvalidParameter(String),

    #[error("Unknown type '{0}'")]
    #[diagnostic(code(memlay::unknown_type), help("register the type before referring to it"))]
    UnknownType(String),

    #[error("Type '{0}' is already defined")]
    #[diagnostic(code(memlay::duplicate_type))]
    DuplicateType(String),

    #[error("Size of type '{0}' does not fit in 64 bits")]
    #[diagnostic(code(memlay::layout_overflow))]
    LayoutOverflow(String),

    #[error("The registry cannot hold more types")]
    #[diagnostic(code(memlay::registry_full))]
    RegistryFull,

    #[error("Type '{0}' is not a struct")]
    #[diagnostic(code(memlay::not_a_struct))]
    NotAStruct(String),

    #[error("Index {index} out of bounds [{lower}, {upper}] in dimension {dimension}")]
    #[diagnostic(code(memlay::index_out_of_bounds))]
    IndexOutOfBounds {
        dimension: usize,
        index: i64,
        lower: i64,
        upper: i64,
    },
}

impl Error {
    /// Returns the type name a type-level error refers to.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::UnknownType(name)
            | Self::DuplicateType(name)
            | Self::NotAStruct(name)
            | Self::LayoutOverflow(name) => Some(name),
            _ => None,
        }
    }
}

/// Result type alias using the memlay Error type.
pub type Result<T> = std::result::Result<T, Error>;
