/// Type layout model for memlay
///
/// This module provides:
/// - Atomic, struct and union type definitions
/// - Layout strategies (Default, Packed, Optimal)
/// - Per-member placement and padding computation
/// - Type registration, lookup and description
mod compute;
mod describe;
mod registry;
mod strategy;
mod type_def;
mod type_id;
mod type_kind;

pub use compute::{FieldPlacement, Layout};
pub use describe::{Description, StrategyReport};
pub use registry::TypeRegistry;
pub use strategy::LayoutStrategy;
pub use type_def::TypeDef;
pub use type_id::TypeId;
pub use type_kind::TypeKind;

/// Bytes needed to move `offset` up to the next multiple of `alignment`.
///
/// `alignment` must be positive; any positive value is accepted, not only powers of two.
pub(crate) const fn padding_for(offset: u64, alignment: u64) -> u64 {
    (alignment - (offset % alignment)) % alignment
}
