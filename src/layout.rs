//! Chart geometry: canonical display order for the WCS chip grid
//!
//! The published WCS chart shows a 10x1 achromatic pole column (rows A-J
//! at column 0) beside an 8x40 chromatic core (rows B-I, columns 1-40).
//! Chip numbers index the survey files in an unrelated order, so per-chip
//! value arrays have to be reordered before display. Everything in this
//! module is pure and testable without touching the renderer.

use crate::models::ChipId;
use crate::registry::ChipRegistry;
use thiserror::Error;

/// Row letters of the pole column, in chart row order.
pub const POLE_ROWS: [char; 10] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];

/// Row letters of the chromatic core, top to bottom.
pub const CORE_ROWS: [char; 8] = ['B', 'C', 'D', 'E', 'F', 'G', 'H', 'I'];

/// Columns per core row.
pub const CORE_COLUMNS: u32 = 40;

/// Total chips on the chart: 10 pole chips plus 8 rows x 40 columns.
pub const CHART_CHIPS: usize = POLE_ROWS.len() + CORE_ROWS.len() * CORE_COLUMNS as usize;

/// Error type for chart layout failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A chart position has no entry in the chip registry
    #[error("chip '{0}' missing from registry")]
    MissingChip(String),
    /// The value array does not cover every registered chip
    #[error("expected at least {expected} values, found {found}")]
    TooFewValues { expected: usize, found: usize },
}

/// The canonical 330-entry display order, as chip numbers.
///
/// Pole chips `A0..J0` first, in row order, then rows B-I by columns
/// 1 through 40 ascending.
pub fn chart_order(registry: &ChipRegistry) -> Result<Vec<ChipId>, LayoutError> {
    let mut order = Vec::with_capacity(CHART_CHIPS);
    for row in POLE_ROWS {
        order.push(lookup(registry, row, 0)?);
    }
    for row in CORE_ROWS {
        for column in 1..=CORE_COLUMNS {
            order.push(lookup(registry, row, column)?);
        }
    }
    Ok(order)
}

fn lookup(registry: &ChipRegistry, row: char, column: u32) -> Result<ChipId, LayoutError> {
    let label = format!("{}{}", row, column);
    // Chip numbers are 1-based; a registered 0 is as unusable as a miss
    match registry.chip_number(&label) {
        Some(chip) if chip >= 1 => Ok(chip),
        _ => Err(LayoutError::MissingChip(label)),
    }
}

/// Per-chip values rearranged into chart order.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout<V> {
    /// The 10 pole values, rows A-J in order
    pub pole: Vec<V>,
    /// The 8x40 core values, row-major from row B
    pub core: Vec<V>,
}

impl<V> ChartLayout<V> {
    /// Core panel value at (row, column); row 0 is B, column 0 is chart
    /// column 1.
    pub fn core_at(&self, row: usize, column: usize) -> &V {
        &self.core[row * CORE_COLUMNS as usize + column]
    }

    /// Tick labels for the core panel rows, top to bottom.
    pub fn core_row_labels() -> Vec<String> {
        CORE_ROWS.iter().map(char::to_string).collect()
    }

    /// Tick labels for the pole panel, top to bottom (J down to A).
    pub fn pole_row_labels() -> Vec<String> {
        POLE_ROWS.iter().rev().map(char::to_string).collect()
    }

    /// Tick labels for the core panel columns, left to right.
    pub fn column_labels() -> Vec<String> {
        (1..=CORE_COLUMNS).map(|c| c.to_string()).collect()
    }
}

/// Reorder a flat per-chip value array into chart order.
///
/// `values[chip - 1]` holds the value for chip number `chip`, so the array
/// must be at least as long as the largest chip number in the registry.
///
/// # Examples
///
/// ```
/// use wcsgrid::layout;
/// use wcsgrid::registry::ChipRegistry;
/// use std::io::Cursor;
///
/// let registry = ChipRegistry::parse(Cursor::new(
///     "1 A 0 A0\n2 B 0 B0\n3 C 0 C0\n4 D 0 D0\n5 E 0 E0\n\
///      6 F 0 F0\n7 G 0 G0\n8 H 0 H0\n9 I 0 I0\n10 J 0 J0\n",
/// )).unwrap();
///
/// // Pole-only registry fails on the first missing core chip
/// let err = layout::chart_order(&registry).unwrap_err();
/// assert_eq!(err.to_string(), "chip 'B1' missing from registry");
/// ```
pub fn reorder<V: Clone>(
    values: &[V],
    registry: &ChipRegistry,
) -> Result<ChartLayout<V>, LayoutError> {
    let expected = registry.max_chip() as usize;
    if values.len() < expected {
        return Err(LayoutError::TooFewValues { expected, found: values.len() });
    }

    let order = chart_order(registry)?;
    let mut reordered: Vec<V> = order
        .iter()
        .map(|&chip| values[chip as usize - 1].clone())
        .collect();
    let core = reordered.split_off(POLE_ROWS.len());

    Ok(ChartLayout { pole: reordered, core })
}
