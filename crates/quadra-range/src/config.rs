//! Per-query range search configuration.

use crate::error::ConfigError;
use std::fmt;

// ── DiagonalCost ───────────────────────────────────────────────────

/// Cost of a single diagonal step, relative to a cardinal step of 1.
///
/// The presets correspond to the usual tabletop distance metrics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum DiagonalCost {
    /// Diagonals cost the same as cardinals (1): Chebyshev distance.
    Chebyshev,
    /// True Euclidean length of a diagonal (√2).
    Euclidean,
    /// Alternating 1-2-1 diagonals, averaged (1.5).
    #[default]
    Pathfinder,
    /// Diagonals cost two cardinal steps (2): Manhattan distance.
    Manhattan,
    /// Any other non-negative cost.
    Custom(f64),
}

impl DiagonalCost {
    /// The four named presets, cheapest first.
    pub const ALL: [DiagonalCost; 4] = [
        Self::Chebyshev,
        Self::Euclidean,
        Self::Pathfinder,
        Self::Manhattan,
    ];

    /// The step cost.
    pub fn value(self) -> f64 {
        match self {
            Self::Chebyshev => 1.0,
            Self::Euclidean => std::f64::consts::SQRT_2,
            Self::Pathfinder => 1.5,
            Self::Manhattan => 2.0,
            Self::Custom(cost) => cost,
        }
    }

    /// Lowercase label.
    pub fn name(self) -> &'static str {
        match self {
            Self::Chebyshev => "chebyshev",
            Self::Euclidean => "euclidean",
            Self::Pathfinder => "pathfinder",
            Self::Manhattan => "manhattan",
            Self::Custom(_) => "custom",
        }
    }
}

impl fmt::Display for DiagonalCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.value())
    }
}

// ── RangeConfig ────────────────────────────────────────────────────

/// Budget and step costs for one [`range_search`](crate::range_search).
///
/// Cardinal steps always cost 1; entering a difficult tile doubles the
/// step cost. A tile is reachable when the floor of its accumulated cost
/// does not exceed `max_cost`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeConfig {
    /// Inclusive movement budget. Default: 6.
    pub max_cost: f64,
    /// Cost of a diagonal step. Default: 1.5.
    pub diagonal_cost: f64,
}

impl Default for RangeConfig {
    fn default() -> Self {
        Self {
            max_cost: 6.0,
            diagonal_cost: DiagonalCost::default().value(),
        }
    }
}

impl RangeConfig {
    /// Create a config with the given budget and diagonal cost.
    pub fn new(max_cost: f64, diagonal_cost: f64) -> Self {
        Self {
            max_cost,
            diagonal_cost,
        }
    }

    /// Replace the movement budget.
    pub fn with_max_cost(mut self, max_cost: f64) -> Self {
        self.max_cost = max_cost;
        self
    }

    /// Replace the diagonal step cost.
    pub fn with_diagonal_cost(mut self, diagonal_cost: f64) -> Self {
        self.diagonal_cost = diagonal_cost;
        self
    }

    /// Replace the diagonal step cost with a preset.
    pub fn with_diagonal(self, diagonal: DiagonalCost) -> Self {
        self.with_diagonal_cost(diagonal.value())
    }

    /// Check that the search is well defined.
    ///
    /// An infinite `max_cost` is accepted: the search then covers every
    /// tile connected to the origin.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_cost.is_nan() || self.max_cost < 0.0 {
            return Err(ConfigError::InvalidMaxCost {
                value: self.max_cost,
            });
        }
        if !self.diagonal_cost.is_finite() || self.diagonal_cost < 0.0 {
            return Err(ConfigError::InvalidDiagonalCost {
                value: self.diagonal_cost,
            });
        }
        Ok(())
    }
}
