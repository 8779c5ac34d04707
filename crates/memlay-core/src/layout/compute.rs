use super::{LayoutStrategy, TypeDef, TypeId, padding_for};
use crate::{Error, Result};
use serde::Serialize;
use std::cmp::Reverse;

/// Where one member landed in a struct layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldPlacement {
    pub member: TypeId,
    pub name: String,
    /// Padding inserted right before this member
    pub padding: u64,
    pub offset: u64,
    pub size: u64,
}

/// Result of laying out a struct under one strategy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub strategy: LayoutStrategy,
    /// Total size including trailing padding
    pub size: u64,
    /// Every padding byte, interior and trailing
    pub waste: u64,
    /// Alignment the total size was rounded to
    pub alignment: u64,
    /// Members in placement order (reordered under Optimal)
    pub placements: Vec<FieldPlacement>,
    pub trailing_padding: u64,
}

impl Layout {
    /// `(size, waste)` pair
    pub fn totals(&self) -> (u64, u64) {
        (self.size, self.waste)
    }
}

impl std::fmt::Display for Layout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Layout ({}):", self.strategy)?;
        for placement in &self.placements {
            if placement.padding > 0 {
                writeln!(f, "  padding {}", placement.padding)?;
            }
            writeln!(
                f,
                "  offset {}: {} (size {})",
                placement.offset, placement.name, placement.size
            )?;
        }
        if self.trailing_padding > 0 {
            writeln!(f, "  trailing padding {}", self.trailing_padding)?;
        }
        write!(f, "  total size {}, waste {}", self.size, self.waste)
    }
}

/// Lays out `members` (declaration order) of struct `name` whose natural alignment is `alignment`.
///
/// Fails with `LayoutOverflow` when an offset no longer fits in a `u64`.
pub(crate) fn layout(
    name: &str,
    members: &[&TypeDef],
    alignment: u64,
    strategy: LayoutStrategy,
) -> Result<Layout> {
    let overflow = || Error::LayoutOverflow(name.to_string());

    let mut ordered = members.to_vec();
    if !strategy.preserves_order() {
        // sort_by_key is stable: equal alignments keep declaration order
        ordered.sort_by_key(|m| Reverse(m.alignment()));
    }

    let mut offset: u64 = 0;
    let mut waste: u64 = 0;
    let mut placements = Vec::with_capacity(ordered.len());

    for member in ordered {
        let padding = padding_for(offset, strategy.required_alignment(member.alignment()));
        offset = offset.checked_add(padding).ok_or_else(overflow)?;
        waste += padding;

        let size = if strategy.is_packed() {
            member.packed_size()
        } else {
            member.size()
        };
        placements.push(FieldPlacement {
            member: member.id(),
            name: member.name().to_string(),
            padding,
            offset,
            size,
        });
        offset = offset.checked_add(size).ok_or_else(overflow)?;
    }

    let alignment = strategy.required_alignment(alignment);
    let trailing_padding = padding_for(offset, alignment);
    let size = offset.checked_add(trailing_padding).ok_or_else(overflow)?;
    // waste never exceeds size, so it cannot overflow once size fits
    waste += trailing_padding;

    tracing::trace!(%strategy, size, waste, "computed struct layout");

    Ok(Layout {
        strategy,
        size,
        waste,
        alignment,
        placements,
        trailing_padding,
    })
}
