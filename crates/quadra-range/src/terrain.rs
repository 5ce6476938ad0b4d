//! Wall and difficult-terrain sources for range search.

use crate::config::RangeConfig;
use crate::error::RangeError;
use crate::search::range_search;
use quadra_core::GridError;
use quadra_grid::{DualGrid, Edge, EdgeSet, Tile, TileMap, TileSet};

/// Answers the two per-query questions [`range_search`] asks.
pub trait Terrain {
    /// Whether `edge` blocks movement across it.
    fn is_walled(&self, edge: Edge) -> bool;

    /// Whether entering `tile` costs double.
    fn is_difficult(&self, tile: Tile) -> bool;
}

/// Terrain with no walls and no difficult tiles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OpenTerrain;

impl Terrain for OpenTerrain {
    fn is_walled(&self, _edge: Edge) -> bool {
        false
    }

    fn is_difficult(&self, _tile: Tile) -> bool {
        false
    }
}

/// User-editable terrain: a set of walled edges and a set of difficult
/// tiles, both bound to one grid's codecs.
///
/// # Examples
///
/// ```
/// use quadra_core::{Cardinal, Vector2D};
/// use quadra_grid::{DualGrid, Tile};
/// use quadra_range::{Terrain, TerrainMap};
///
/// let grid = DualGrid::new(Vector2D::new(5, 5)).unwrap();
/// let mut terrain = TerrainMap::new(&grid);
/// let wall = Tile::new(1, 1).border(Cardinal::East);
///
/// assert!(terrain.toggle_wall(wall).unwrap());
/// assert!(terrain.is_walled(Tile::new(2, 1).border(Cardinal::West)));
/// assert!(!terrain.toggle_wall(wall).unwrap());
/// assert!(!terrain.is_walled(wall));
/// ```
#[derive(Clone, Debug)]
pub struct TerrainMap {
    walls: EdgeSet,
    difficult: TileSet,
}

impl TerrainMap {
    /// Empty terrain for `grid`.
    pub fn new(grid: &DualGrid) -> Self {
        Self {
            walls: grid.edge_set(),
            difficult: grid.tile_set(),
        }
    }

    /// Terrain from existing sets.
    pub fn from_parts(walls: EdgeSet, difficult: TileSet) -> Self {
        Self { walls, difficult }
    }

    /// The walled edges.
    pub fn walls(&self) -> &EdgeSet {
        &self.walls
    }

    /// The difficult tiles.
    pub fn difficult(&self) -> &TileSet {
        &self.difficult
    }

    /// Add or remove a wall. Returns whether `edge` is now walled.
    pub fn toggle_wall(&mut self, edge: Edge) -> Result<bool, GridError> {
        self.walls.toggle(&edge)
    }

    /// Add or remove a difficult tile. Returns whether `tile` is now
    /// difficult.
    pub fn toggle_difficult(&mut self, tile: Tile) -> Result<bool, GridError> {
        self.difficult.toggle(&tile)
    }

    /// Remove every wall and difficult tile.
    pub fn clear(&mut self) {
        self.walls.clear();
        self.difficult.clear();
    }
}

impl Terrain for TerrainMap {
    fn is_walled(&self, edge: Edge) -> bool {
        // Edges outside node space can never have been inserted.
        self.walls.contains(&edge).unwrap_or(false)
    }

    fn is_difficult(&self, tile: Tile) -> bool {
        self.difficult.contains(&tile).unwrap_or(false)
    }
}

impl<T: Terrain + ?Sized> Terrain for &T {
    fn is_walled(&self, edge: Edge) -> bool {
        (**self).is_walled(edge)
    }

    fn is_difficult(&self, tile: Tile) -> bool {
        (**self).is_difficult(tile)
    }
}

/// [`range_search`] with walls and difficult tiles taken from `terrain`.
pub fn search_terrain<T>(
    grid: &DualGrid,
    origin: Tile,
    config: &RangeConfig,
    terrain: &T,
) -> Result<TileMap<f64>, RangeError>
where
    T: Terrain + ?Sized,
{
    range_search(
        grid,
        origin,
        config,
        |edge| terrain.is_walled(edge),
        |tile| terrain.is_difficult(tile),
    )
}
