//! Implementation of the `memlay address` command.

use crate::utils::print_status;
use anyhow::{Context, Result};
use memlay_core::{ArrayShape, Bounds, StorageOrder};

/// Parses an inclusive `lower:upper` bound pair.
///
/// # Errors
/// Returns a message suitable for clap when the text is malformed.
pub fn parse_bounds(text: &str) -> Result<Bounds, String> {
    let (lower, upper) = text
        .split_once(':')
        .ok_or_else(|| format!("expected <lower>:<upper>, got '{text}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<i64>()
            .map_err(|_| format!("'{part}' is not an integer"))
    };
    Ok(Bounds::new(parse(lower)?, parse(upper)?))
}

/// Prints the row-major and column-major address of one array element.
///
/// When `index` is empty the middle element of every dimension is used.
///
/// # Errors
/// Returns an error if the shape or the index is invalid.
pub fn execute(bounds: Vec<Bounds>, element_size: i64, base: i64, index: &[i64]) -> Result<()> {
    let shape = ArrayShape::new(bounds, element_size).context("Invalid array shape")?;
    let index = if index.is_empty() {
        shape.midpoint()
    } else {
        index.to_vec()
    };

    let rendered = index
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join("][");
    print_status("Element", &format!("M[{rendered}]"));
    println!(
        "  extents: {}",
        shape
            .extents()
            .iter()
            .map(i64::to_string)
            .collect::<Vec<_>>()
            .join(" x ")
    );

    for order in [StorageOrder::RowMajor, StorageOrder::ColumnMajor] {
        let address = shape.address(base, &index, order)?;
        println!("  {order}: {address}");
    }
    Ok(())
}
