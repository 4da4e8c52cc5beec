//! Mapping from dialog units to grid cells.
//!
//! Dialog resources position controls in dialog units. The target grid has
//! a hard limit on how many rows and columns it can reasonably display, so
//! every coordinate is divided by a fixed ratio and rounded up:
//!
//! ```text
//! column      = ceil(x / Gx)
//! row         = ceil(y / Gy)
//! column-span = ceil(w / Gx)
//! row-span    = ceil(h / (Gy * K))
//! ```
//!
//! Every result is clamped at zero, so controls placed left of or above the
//! dialog origin land in the first column or row.
//!
//! `K` compresses heights only. Its default was picked empirically to keep
//! the grid within what GTK designers will open; it is not derived from the
//! resource format, so it is exposed as [`GridRatios::row_compression`].

use serde::Deserialize;
use thiserror::Error;

use crate::geometry::{GridCell, SourceRect};

/// Errors raised when building a [`GridMapper`] from invalid ratios.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridError {
    #[error("grid ratio `{name}` must be a positive finite number, got {value}")]
    InvalidRatio { name: &'static str, value: f64 },
}

/// The tunable divisors used by [`GridMapper`].
///
/// All fields fall back to their defaults when missing from a configuration
/// source.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct GridRatios {
    /// Dialog units per grid column (`Gx`).
    pub column_ratio: f64,
    /// Dialog units per grid row (`Gy`).
    pub row_ratio: f64,
    /// Extra divisor applied to heights only (`K`).
    pub row_compression: f64,
}

impl GridRatios {
    pub const DEFAULT_COLUMN_RATIO: f64 = 8.0;
    pub const DEFAULT_ROW_RATIO: f64 = 4.0;
    pub const DEFAULT_ROW_COMPRESSION: f64 = 80.0;
}

impl Default for GridRatios {
    fn default() -> Self {
        Self {
            column_ratio: Self::DEFAULT_COLUMN_RATIO,
            row_ratio: Self::DEFAULT_ROW_RATIO,
            row_compression: Self::DEFAULT_ROW_COMPRESSION,
        }
    }
}

/// Converts [`SourceRect`]s into [`GridCell`]s.
///
/// The mapping is a pure function of the ratios and the input rectangle:
/// it is monotonic in `x` and `y`, and spans are always at least one.
///
/// # Examples
///
/// ```
/// # use rcgtk_core::{geometry::SourceRect, grid::GridMapper};
/// let mapper = GridMapper::default();
/// let cell = mapper.map(SourceRect::new(8, 12, 120, 10));
///
/// assert_eq!(cell.column(), 1);
/// assert_eq!(cell.row(), 3);
/// assert_eq!(cell.column_span(), 15);
/// assert_eq!(cell.row_span(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridMapper {
    ratios: GridRatios,
}

impl GridMapper {
    /// Creates a mapper after checking that every ratio is positive and finite.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidRatio`] naming the first offending ratio.
    pub fn new(ratios: GridRatios) -> Result<Self, GridError> {
        check_ratio("column_ratio", ratios.column_ratio)?;
        check_ratio("row_ratio", ratios.row_ratio)?;
        check_ratio("row_compression", ratios.row_compression)?;
        Ok(Self { ratios })
    }

    /// Returns the ratios this mapper divides by.
    pub fn ratios(&self) -> GridRatios {
        self.ratios
    }

    /// Maps a rectangle in dialog units onto the grid.
    pub fn map(&self, rect: SourceRect) -> GridCell {
        let GridRatios {
            column_ratio,
            row_ratio,
            row_compression,
        } = self.ratios;

        GridCell::new(
            ceil_div(rect.x(), column_ratio),
            ceil_div(rect.y(), row_ratio),
            ceil_div(rect.width(), column_ratio),
            ceil_div(rect.height(), row_ratio * row_compression),
        )
    }
}

fn check_ratio(name: &'static str, value: f64) -> Result<(), GridError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GridError::InvalidRatio { name, value })
    }
}

fn ceil_div(value: i32, divisor: f64) -> u32 {
    (f64::from(value) / divisor).ceil().max(0.0) as u32
}
