//! Benchmark profiles for the Quadra dual-grid library.
//!
//! - [`reference_grid`]: 100x100 tiles
//! - [`stress_grid`]: 316x316 tiles (~100K)
//! - [`scattered_terrain`]: deterministic walls and difficult tiles via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use quadra_core::{Cardinal, Codec, EdgeId, GridError, TileId, Vector2D};
use quadra_grid::{DualGrid, Tile};
use quadra_range::TerrainMap;

/// Build the reference benchmark grid: 100x100 tiles.
pub fn reference_grid() -> Result<DualGrid, GridError> {
    DualGrid::new(Vector2D::new(100, 100))
}

/// Build the stress benchmark grid: 316x316 tiles.
pub fn stress_grid() -> Result<DualGrid, GridError> {
    DualGrid::new(Vector2D::new(316, 316))
}

/// Centre tile of `grid`.
pub fn centre(grid: &DualGrid) -> Tile {
    let max = grid.tile_space().max();
    Tile::new(max.q / 2, max.r / 2)
}

/// Spread `n` distinct ids over `0..count` deterministically.
fn spread(count: usize, n: usize, seed: u64) -> Vec<u32> {
    let n = n.min(count);
    let mut picked = Vec::with_capacity(n);
    let mut taken = vec![false; count];

    for i in 0..n as u64 {
        let mut pos = (seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(i.wrapping_mul(1442695040888963407))
            % count as u64) as usize;

        // Linear probe to avoid collisions
        while taken[pos] {
            pos = (pos + 1) % count;
        }
        taken[pos] = true;
        picked.push(pos as u32);
    }

    picked
}

/// Terrain with `walls` walled tile borders and `difficult` difficult
/// tiles, placed deterministically from `seed`.
///
/// Walls are chosen among the east and south borders of grid tiles, so
/// every wall separates two tiles or closes off the grid edge.
pub fn scattered_terrain(
    grid: &DualGrid,
    walls: usize,
    difficult: usize,
    seed: u64,
) -> Result<TerrainMap, GridError> {
    let mut terrain = TerrainMap::new(grid);
    let tiles = grid.tile_codec();
    let borders = grid.tile_count() * 2;

    for raw in spread(borders, walls, seed) {
        let tile = tiles.from_id(TileId(raw / 2))?;
        let side = if raw % 2 == 0 {
            Cardinal::East
        } else {
            Cardinal::South
        };
        terrain.toggle_wall(tile.border(side))?;
    }
    for raw in spread(grid.tile_count(), difficult, seed ^ 0x9E37_79B9_7F4A_7C15) {
        terrain.toggle_difficult(tiles.from_id(TileId(raw))?)?;
    }

    Ok(terrain)
}

/// Every valid edge id of `grid`.
pub fn all_edge_ids(grid: &DualGrid) -> impl Iterator<Item = EdgeId> {
    (0..grid.edge_count() as u32).map(EdgeId)
}
