use serde::{Deserialize, Serialize};

/// Handle to a type registered in a [`TypeRegistry`](super::TypeRegistry)
///
/// A TypeId is the index of the type in the registry's arena. Aggregates store
/// their members as TypeIds, so a member is shared rather than copied, and
/// since a type may only name earlier registrations, every member id is
/// smaller than the id of the aggregate that holds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeId(u32);

impl TypeId {
    /// Creates a new TypeId from an arena index
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Creates a TypeId for an arena index, or `None` if it does not fit in a `u32`
    pub fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    /// Returns the arena index
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TypeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}
