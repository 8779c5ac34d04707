use super::compute::{self, Layout};
use super::{LayoutStrategy, TypeId, TypeKind, TypeRegistry, padding_for};
use crate::{Error, Result};

/// A registered, immutable type definition
///
/// Besides the structure (TypeKind), a definition carries the figures every
/// enclosing type needs from it. They are fixed when the type is created:
/// members are finalized before the aggregate exists, and nothing in the
/// registry is ever redefined, so the cached values cannot drift.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDef {
    id: TypeId,
    name: String,
    kind: TypeKind,
    size: u64,
    packed_size: u64,
    alignment: u64,
}

impl TypeDef {
    /// Creates an atomic type; size and alignment are taken as given
    pub(crate) fn atomic(id: TypeId, name: String, size: u64, alignment: u64) -> Self {
        Self {
            id,
            name,
            kind: TypeKind::Atomic { size, alignment },
            size,
            packed_size: size,
            alignment,
        }
    }

    /// Creates a struct from already-resolved member definitions
    ///
    /// Fails with `LayoutOverflow` when the Default or Packed size does not fit in a `u64`.
    pub(crate) fn structure(id: TypeId, name: String, members: &[&TypeDef]) -> Result<Self> {
        let alignment = max_alignment(members);
        let size = compute::layout(&name, members, alignment, LayoutStrategy::Default)?.size;
        let packed_size =
            compute::layout(&name, members, alignment, LayoutStrategy::Packed)?.size;
        Ok(Self {
            id,
            name,
            kind: TypeKind::Struct {
                members: members.iter().map(|m| m.id).collect(),
            },
            size,
            packed_size,
            alignment,
        })
    }

    /// Creates a union from already-resolved member definitions
    ///
    /// Fails with `LayoutOverflow` when rounding the largest member up to the alignment overflows.
    pub(crate) fn union(id: TypeId, name: String, members: &[&TypeDef]) -> Result<Self> {
        let alignment = max_alignment(members);
        let size = match members.iter().map(|m| m.size).max() {
            Some(largest) => largest
                .checked_add(padding_for(largest, alignment))
                .ok_or_else(|| Error::LayoutOverflow(name.clone()))?,
            None => 0,
        };
        Ok(Self {
            id,
            name,
            kind: TypeKind::Union {
                members: members.iter().map(|m| m.id).collect(),
            },
            size,
            packed_size: size,
            alignment,
        })
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Canonical size: the natural (Default) layout for structs
    ///
    /// This is the size an enclosing type sees under Default and Optimal.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Size as seen by an enclosing struct laid out with [`LayoutStrategy::Packed`]
    ///
    /// Structs report their own packed size; atomics and unions report `size()`.
    pub fn packed_size(&self) -> u64 {
        self.packed_size
    }

    /// Largest member alignment for aggregates, 1 when there are no members
    pub fn alignment(&self) -> u64 {
        self.alignment
    }

    pub fn is_struct(&self) -> bool {
        matches!(self.kind, TypeKind::Struct { .. })
    }

    /// Computes the layout of a struct under `strategy`
    ///
    /// # Errors
    /// `NotAStruct` for atomics and unions, which have no member placement.
    /// `LayoutOverflow` if the layout does not fit in a `u64`; this can only
    /// happen for Optimal, since Default and Packed were checked at registration.
    pub fn calculate_layout(
        &self,
        registry: &TypeRegistry,
        strategy: LayoutStrategy,
    ) -> Result<Layout> {
        let TypeKind::Struct { members } = &self.kind else {
            return Err(Error::NotAStruct(self.name.clone()));
        };
        let members: Vec<&TypeDef> = members.iter().map(|&id| registry.get_def(id)).collect();
        compute::layout(&self.name, &members, self.alignment, strategy)
    }
}

impl std::fmt::Display for TypeDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

fn max_alignment(members: &[&TypeDef]) -> u64 {
    members.iter().map(|m| m.alignment).max().unwrap_or(1)
}
