use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Field placement strategy used when laying out a struct
///
/// - Default: declaration order, natural alignment of every member
/// - Packed: declaration order, alignment forced to 1 at every nesting level
/// - Optimal: members stably sorted by descending alignment, then laid out as Default
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutStrategy {
    /// Field order preserved, each member at its natural alignment
    Default,

    /// No padding anywhere
    ///
    /// Nested structs are measured by their own packed layout, so the
    /// zero-alignment rule reaches the whole nesting chain.
    Packed,

    /// Members reordered by descending alignment
    ///
    /// Ties keep declaration order.
    Optimal,
}

impl LayoutStrategy {
    /// Every strategy, in the order descriptions report them
    pub const ALL: [Self; 3] = [Self::Default, Self::Packed, Self::Optimal];

    /// Returns true if members keep their declaration order
    pub const fn preserves_order(&self) -> bool {
        !matches!(self, Self::Optimal)
    }

    /// Returns true if alignment requirements are ignored
    pub const fn is_packed(&self) -> bool {
        matches!(self, Self::Packed)
    }

    /// Alignment a member or struct must honour under this strategy
    pub const fn required_alignment(&self, natural: u64) -> u64 {
        if self.is_packed() { 1 } else { natural }
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Packed => "packed",
            Self::Optimal => "optimal",
        }
    }
}

impl std::fmt::Display for LayoutStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LayoutStrategy {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "default" => Ok(Self::Default),
            "packed" => Ok(Self::Packed),
            "optimal" => Ok(Self::Optimal),
            other => Err(crate::Error::InvalidParameter(format!(
                "unknown layout strategy '{other}' (expected default, packed or optimal)"
            ))),
        }
    }
}
