//! Type layout engine for memlay.
//!
//! This crate computes size, alignment and padding of user-defined atomic,
//! struct and union types under several layout strategies. It owns no I/O:
//! hosts register types through [`TypeRegistry`] and render the returned
//! [`Description`] values however they like.

pub mod error;
pub mod indexing;
pub mod layout;

pub use error::{Error, Result};
pub use indexing::{ArrayShape, Bounds, StorageOrder};
pub use layout::{
    Description, FieldPlacement, Layout, LayoutStrategy, StrategyReport, TypeDef, TypeId,
    TypeKind, TypeRegistry,
};
