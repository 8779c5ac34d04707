use super::LayoutStrategy;
use serde::Serialize;

/// Size and padding of a struct under one strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StrategyReport {
    pub strategy: LayoutStrategy,
    pub size: u64,
    pub waste: u64,
}

/// Read-only summary of a registered type, produced by `TypeRegistry::describe`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Description {
    Atomic {
        name: String,
        size: u64,
        alignment: u64,
    },
    Struct {
        name: String,
        alignment: u64,
        /// One report per strategy, in [`LayoutStrategy::ALL`] order
        strategies: Vec<StrategyReport>,
    },
    Union {
        name: String,
        size: u64,
        alignment: u64,
        members: usize,
    },
}

impl Description {
    pub fn name(&self) -> &str {
        match self {
            Self::Atomic { name, .. } | Self::Struct { name, .. } | Self::Union { name, .. } => {
                name
            }
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Atomic { .. } => "atomic",
            Self::Struct { .. } => "struct",
            Self::Union { .. } => "union",
        }
    }

    /// Report for one strategy (structs only)
    pub fn strategy(&self, strategy: LayoutStrategy) -> Option<&StrategyReport> {
        match self {
            Self::Struct { strategies, .. } => strategies.iter().find(|r| r.strategy == strategy),
            _ => None,
        }
    }
}

impl std::fmt::Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Type: {} ({})", self.name(), self.kind())?;
        match self {
            Self::Atomic {
                size, alignment, ..
            } => {
                write!(f, "\n  size: {size}\n  alignment: {alignment}")
            }
            Self::Union {
                size, alignment, ..
            } => {
                write!(f, "\n  size: {size}\n  alignment: {alignment}")?;
                write!(f, "\n  note: union members overlap in storage")
            }
            Self::Struct {
                alignment,
                strategies,
                ..
            } => {
                write!(f, "\n  alignment: {alignment}")?;
                for report in strategies {
                    let label = format!("[{}]", report.strategy);
                    write!(
                        f,
                        "\n  {label:<9} size: {}, waste: {}",
                        report.size, report.waste
                    )?;
                }
                Ok(())
            }
        }
    }
}
