//! Test fixtures and distance oracles for Quadra development.
//!
//! Provides the standard movement scenario (a 19×19 grid with the
//! origin in the middle), builders for wall and difficult-tile sets, and
//! closed-form distances to check range search results against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use quadra_core::{Cardinal, Vector2D};
use quadra_grid::{DualGrid, EdgeSet, Tile, TileSet};

/// Side length of the movement scenario grid.
pub const MOVEMENT_SIZE: i32 = 19;

/// The 19×19 movement scenario grid.
pub fn movement_grid() -> DualGrid {
    DualGrid::new(Vector2D::new(MOVEMENT_SIZE, MOVEMENT_SIZE))
        .expect("19x19 grid is valid")
}

/// The centre tile of [`movement_grid`].
pub fn movement_origin() -> Tile {
    Tile::new(MOVEMENT_SIZE / 2, MOVEMENT_SIZE / 2)
}

/// A wall set from `(tile, side)` pairs.
///
/// # Panics
///
/// Panics if a border lies outside the grid.
pub fn walls(grid: &DualGrid, borders: &[(Tile, Cardinal)]) -> EdgeSet {
    let mut set = grid.edge_set();
    for &(tile, side) in borders {
        set.insert(&tile.border(side))
            .unwrap_or_else(|e| panic!("wall {tile} {side:?}: {e}"));
    }
    set
}

/// Every border of `tile`, walled off.
pub fn boxed_in(grid: &DualGrid, tile: Tile) -> EdgeSet {
    let borders: Vec<_> = Cardinal::ALL.iter().map(|&d| (tile, d)).collect();
    walls(grid, &borders)
}

/// A difficult-tile set.
///
/// # Panics
///
/// Panics if a tile lies outside the grid.
pub fn difficult(grid: &DualGrid, tiles: &[Tile]) -> TileSet {
    let mut set = grid.tile_set();
    for tile in tiles {
        set.insert(tile)
            .unwrap_or_else(|e| panic!("difficult {tile}: {e}"));
    }
    set
}

/// King-move distance: the range-search cost when diagonals cost 1.
pub fn chebyshev(a: Tile, b: Tile) -> i32 {
    (a.q - b.q).abs().max((a.r - b.r).abs())
}

/// Rook-move distance: the range-search cost when diagonals cost 2.
pub fn manhattan(a: Tile, b: Tile) -> i32 {
    (a.q - b.q).abs() + (a.r - b.r).abs()
}

/// Minimal open-grid cost with an arbitrary diagonal cost `d`.
///
/// Diagonals are used only when they are cheaper than two cardinal steps.
pub fn octile(a: Tile, b: Tile, d: f64) -> f64 {
    let dq = (a.q - b.q).abs();
    let dr = (a.r - b.r).abs();
    let (lo, hi) = (dq.min(dr) as f64, dq.max(dr) as f64);
    lo * d.min(2.0) + (hi - lo)
}
