//! Element addressing for multi-dimensional arrays.
//!
//! An array is described by inclusive bounds per dimension and an element
//! size. The address of an element depends on whether the last index varies
//! fastest (row-major) or the first one does (column-major).

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Inclusive index range of one dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub lower: i64,
    pub upper: i64,
}

impl Bounds {
    #[must_use]
    pub const fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    /// Number of valid indices, `upper - lower + 1`
    ///
    /// `None` when the bounds are reversed or the count does not fit in an `i64`.
    #[must_use]
    pub const fn extent(&self) -> Option<i64> {
        if self.upper < self.lower {
            return None;
        }
        match self.upper.checked_sub(self.lower) {
            Some(span) => span.checked_add(1),
            None => None,
        }
    }

    #[must_use]
    pub const fn contains(&self, index: i64) -> bool {
        index >= self.lower && index <= self.upper
    }

    /// Middle index, rounding toward negative infinity
    #[must_use]
    pub const fn midpoint(&self) -> i64 {
        // The mean of two i64 values always fits back into an i64
        (self.lower as i128 + self.upper as i128).div_euclid(2) as i64
    }
}

/// Order in which elements are laid out in memory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageOrder {
    /// Last index varies fastest
    RowMajor,
    /// First index varies fastest
    ColumnMajor,
}

impl std::fmt::Display for StorageOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RowMajor => write!(f, "row-major"),
            Self::ColumnMajor => write!(f, "column-major"),
        }
    }
}

/// Shape of a multi-dimensional array
///
/// The whole array is known to fit in `i64` bytes, so offsets inside it never overflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrayShape {
    bounds: Vec<Bounds>,
    extents: Vec<i64>,
    element_size: i64,
    total_size: i64,
}

impl ArrayShape {
    /// Creates a shape from per-dimension bounds and an element size.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if there are no dimensions, a dimension is
    /// empty (`upper < lower`), `element_size` is not positive, or the
    /// array's size in bytes does not fit in an `i64`.
    pub fn new(bounds: Vec<Bounds>, element_size: i64) -> Result<Self> {
        if bounds.is_empty() {
            return Err(Error::InvalidParameter(
                "an array needs at least one dimension".to_string(),
            ));
        }
        if element_size <= 0 {
            return Err(Error::InvalidParameter(format!(
                "element size must be positive, got {element_size}"
            )));
        }

        let mut extents = Vec::with_capacity(bounds.len());
        for (dimension, b) in bounds.iter().enumerate() {
            if b.upper < b.lower {
                return Err(Error::InvalidParameter(format!(
                    "dimension {dimension} has upper bound {} below lower bound {}",
                    b.upper, b.lower
                )));
            }
            extents.push(b.extent().ok_or_else(too_large)?);
        }

        let total_size = extents
            .iter()
            .try_fold(element_size, |total, &extent| total.checked_mul(extent))
            .ok_or_else(too_large)?;

        Ok(Self {
            bounds,
            extents,
            element_size,
            total_size,
        })
    }

    #[must_use]
    pub fn bounds(&self) -> &[Bounds] {
        &self.bounds
    }

    #[must_use]
    pub const fn element_size(&self) -> i64 {
        self.element_size
    }

    /// Element count of each dimension
    #[must_use]
    pub fn extents(&self) -> &[i64] {
        &self.extents
    }

    /// Index of the middle element of every dimension
    #[must_use]
    pub fn midpoint(&self) -> Vec<i64> {
        self.bounds.iter().map(Bounds::midpoint).collect()
    }

    /// Total size in bytes of the whole array
    #[must_use]
    pub const fn total_size(&self) -> i64 {
        self.total_size
    }

    /// Byte address of the element at `index` for an array starting at `base`.
    ///
    /// # Errors
    /// Returns `InvalidParameter` if `index` does not have one entry per
    /// dimension or the address does not fit in an `i64`, and
    /// `IndexOutOfBounds` if an entry lies outside its bounds.
    pub fn address(&self, base: i64, index: &[i64], order: StorageOrder) -> Result<i64> {
        if index.len() != self.bounds.len() {
            return Err(Error::InvalidParameter(format!(
                "expected {} indices, got {}",
                self.bounds.len(),
                index.len()
            )));
        }

        let mut relative = Vec::with_capacity(index.len());
        for (dimension, ((&i, b), &extent)) in index
            .iter()
            .zip(&self.bounds)
            .zip(&self.extents)
            .enumerate()
        {
            if !b.contains(i) {
                return Err(Error::IndexOutOfBounds {
                    dimension,
                    index: i,
                    lower: b.lower,
                    upper: b.upper,
                });
            }
            // i lies within [lower, upper] and the extent fits, so this cannot overflow
            relative.push((i - b.lower, extent));
        }

        // Horner's scheme over dimensions, slowest-varying first
        let fold = |offset: i64, &(i, extent): &(i64, i64)| {
            offset.checked_mul(extent).and_then(|o| o.checked_add(i))
        };
        let offset = match order {
            StorageOrder::RowMajor => relative.iter().try_fold(0, fold),
            StorageOrder::ColumnMajor => relative.iter().rev().try_fold(0, fold),
        };

        offset
            .and_then(|o| o.checked_mul(self.element_size))
            .and_then(|o| base.checked_add(o))
            .ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "address of element {index:?} overflows from base {base}"
                ))
            })
    }
}

fn too_large() -> Error {
    Error::InvalidParameter("array size in bytes does not fit in 64 bits".to_string())
}
