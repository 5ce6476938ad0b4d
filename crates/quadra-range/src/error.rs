//! Error types for range search configuration and execution.

use quadra_core::GridError;
use std::error::Error;
use std::fmt;

/// Errors detected by [`RangeConfig::validate`](crate::RangeConfig::validate).
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// `max_cost` is NaN or negative.
    InvalidMaxCost {
        /// The invalid value.
        value: f64,
    },
    /// `diagonal_cost` is NaN, infinite, or negative.
    InvalidDiagonalCost {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidMaxCost { value } => {
                write!(f, "max_cost must be non-negative, got {value}")
            }
            Self::InvalidDiagonalCost { value } => {
                write!(f, "diagonal_cost must be finite and non-negative, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

/// Errors returned by [`range_search`](crate::range_search).
#[derive(Clone, Debug, PartialEq)]
pub enum RangeError {
    /// The search configuration is invalid.
    Config(ConfigError),
    /// The origin (or another coordinate) is outside the grid.
    Grid(GridError),
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for RangeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Grid(e) => Some(e),
        }
    }
}

impl From<ConfigError> for RangeError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<GridError> for RangeError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadra_core::{BoundedSpace2D, Vector2D};

    #[test]
    fn display_messages() {
        assert_eq!(
            ConfigError::InvalidMaxCost { value: -1.0 }.to_string(),
            "max_cost must be non-negative, got -1"
        );
        let grid = RangeError::from(GridError::OutOfBounds {
            coord: Vector2D::new(5, 0),
            bounds: BoundedSpace2D::from_origin(Vector2D::new(3, 3)),
        });
        assert_eq!(
            grid.to_string(),
            "grid: coordinate (5, 0) out of bounds: [0, 3) x [0, 3)"
        );
    }

    #[test]
    fn source_chains_to_inner_error() {
        let err = RangeError::from(ConfigError::InvalidDiagonalCost { value: f64::NAN });
        let source = err.source().map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("diagonal_cost must be finite and non-negative, got NaN")
        );
        assert!(RangeError::Grid(GridError::EmptySpace).source().is_some());
    }
}
