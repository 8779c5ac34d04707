use super::TypeId;

/// The kind/variant of a type
///
/// Atomic sizes and alignments are caller-supplied; aggregates only list the
/// registered types they contain and derive everything else from them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeKind {
    /// Indivisible type with a fixed size and alignment
    Atomic { size: u64, alignment: u64 },

    /// Members placed one after another, in declaration order
    Struct { members: Vec<TypeId> },

    /// Members sharing the same storage
    Union { members: Vec<TypeId> },
}

impl TypeKind {
    /// Returns true if this type contains other types
    pub const fn is_aggregate(&self) -> bool {
        matches!(self, Self::Struct { .. } | Self::Union { .. })
    }

    /// Member handles in declaration order (empty for atomics)
    pub fn members(&self) -> &[TypeId] {
        match self {
            Self::Atomic { .. } => &[],
            Self::Struct { members } | Self::Union { members } => members,
        }
    }

    /// Lower-case kind name used in descriptions
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Atomic { .. } => "atomic",
            Self::Struct { .. } => "struct",
            Self::Union { .. } => "union",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Atomic { size, alignment } => write!(f, "atomic({size}, {alignment})"),
            Self::Struct { members } => write!(f, "struct[{}]", members.len()),
            Self::Union { members } => write!(f, "union[{}]", members.len()),
        }
    }
}
