//! Cost-bounded frontier search over a [`DualGrid`].

use crate::config::RangeConfig;
use crate::error::RangeError;
use quadra_core::{Codec, Direction};
use quadra_grid::{DualGrid, Edge, Tile, TileMap};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::{debug, trace};

/// A tile waiting to be expanded.
///
/// Ordered so that [`BinaryHeap`] pops the cheapest entry first, and among
/// equal costs the one pushed earliest.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    cost: f64,
    seq: u64,
    tile: Tile,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Whether a diagonal step from `tile` towards `direction` cuts past a wall.
///
/// Any walled edge leaving the shared corner blocks the step, as long as
/// its anchor lies in tile space.
fn corner_blocked<W>(grid: &DualGrid, tile: Tile, direction: Direction, is_walled: &W) -> bool
where
    W: Fn(Edge) -> bool,
{
    let Some(diagonal) = direction.as_diagonal() else {
        return false;
    };
    let corner = tile.corner(diagonal);
    corner
        .protrusions()
        .any(|(_, edge)| grid.tile_space().includes(edge.position()) && is_walled(edge))
}

/// Compute every tile reachable from `origin` within the configured budget.
///
/// Uniform-cost (Dijkstra) expansion from `origin` over the 8-connected
/// tile graph:
///
/// - cardinal steps cost 1 and are blocked by a walled border
/// - diagonal steps cost `config.diagonal_cost` and are blocked when any
///   edge meeting at the shared corner is walled
/// - entering a tile for which `is_difficult` holds doubles the step cost
/// - a tile is rejected when `floor(cost) > config.max_cost`
///
/// Returns the minimal accumulated cost of each reachable tile, not
/// including `origin` itself. Entries are in discovery order.
///
/// # Errors
///
/// [`RangeError::Config`] if `config` fails [`RangeConfig::validate`];
/// [`RangeError::Grid`] if `origin` is outside the grid.
///
/// # Examples
///
/// ```
/// use quadra_core::Vector2D;
/// use quadra_grid::{DualGrid, Tile};
/// use quadra_range::{range_search, RangeConfig};
///
/// let grid = DualGrid::new(Vector2D::new(19, 19)).unwrap();
/// let config = RangeConfig::new(1.0, 1.0);
/// let reachable = range_search(&grid, Tile::new(9, 9), &config, |_| false, |_| false).unwrap();
/// assert_eq!(reachable.len(), 8);
/// assert_eq!(reachable.get(&Tile::new(10, 10)).unwrap(), Some(&1.0));
/// ```
pub fn range_search<W, D>(
    grid: &DualGrid,
    origin: Tile,
    config: &RangeConfig,
    is_walled: W,
    is_difficult: D,
) -> Result<TileMap<f64>, RangeError>
where
    W: Fn(Edge) -> bool,
    D: Fn(Tile) -> bool,
{
    config.validate()?;
    grid.tile_codec().to_id(&origin)?;
    debug!(
        %origin,
        max_cost = config.max_cost,
        diagonal_cost = config.diagonal_cost,
        "range search started"
    );

    let mut best = grid.tile_map::<f64>();
    let mut frontier = BinaryHeap::new();
    let mut seq = 0u64;
    let mut expanded = 0usize;
    let mut stale = 0usize;

    best.insert(&origin, 0.0)?;
    frontier.push(Frontier {
        cost: 0.0,
        seq,
        tile: origin,
    });

    while let Some(Frontier { cost, tile, .. }) = frontier.pop() {
        // Lazy deletion: a cheaper entry for this tile was already expanded.
        if best.get(&tile)?.is_some_and(|&c| cost > c) {
            stale += 1;
            continue;
        }
        expanded += 1;

        for (direction, next) in grid.tile_neighbours(tile) {
            if let Some(cardinal) = direction.as_cardinal() {
                if is_walled(tile.border(cardinal)) {
                    trace!(%tile, %direction, "blocked by wall");
                    continue;
                }
            } else if corner_blocked(grid, tile, direction, &is_walled) {
                trace!(%tile, %direction, "blocked at corner");
                continue;
            }

            let mut step = if direction.is_diagonal() {
                config.diagonal_cost
            } else {
                1.0
            };
            if is_difficult(next) {
                step *= 2.0;
            }
            let tentative = cost + step;
            if tentative.floor() > config.max_cost {
                trace!(%next, cost = tentative, "over budget");
                continue;
            }

            if best.get(&next)?.map_or(true, |&c| tentative < c) {
                best.insert(&next, tentative)?;
                seq += 1;
                frontier.push(Frontier {
                    cost: tentative,
                    seq,
                    tile: next,
                });
            }
        }
    }

    best.remove(&origin)?;
    debug!(
        %origin,
        reachable = best.len(),
        expanded,
        stale,
        "range search finished"
    );
    Ok(best)
}
