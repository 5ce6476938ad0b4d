//! Error types for grid construction and addressing.

use crate::bounds::BoundedSpace2D;
use crate::vector::Vector2D;
use std::error::Error;
use std::fmt;

/// Errors arising from bounded-space checks, id encoding, and grid
/// construction.
///
/// Nothing in the grid core clamps or wraps out-of-range input: every
/// failure surfaces here and is returned to the caller.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate (or the coordinate an id decodes to) lies outside
    /// the bounded space it was checked against.
    OutOfBounds {
        /// The offending coordinate.
        coord: Vector2D,
        /// The space it was checked against.
        bounds: BoundedSpace2D,
    },
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// A grid dimension is too large for its dense ids to fit in `u32`.
    DimensionTooLarge {
        /// Which quantity overflowed.
        name: &'static str,
        /// The requested value.
        value: i64,
        /// The largest accepted value.
        max: i64,
    },
    /// Malformed construction input not covered by a more specific variant.
    InvalidInput {
        /// What went wrong.
        reason: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { coord, bounds } => {
                write!(f, "coordinate {coord} out of bounds: {bounds}")
            }
            Self::EmptySpace => write!(f, "grid must have at least one tile"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::InvalidInput { reason } => write!(f, "invalid input: {reason}"),
        }
    }
}

impl Error for GridError {}
