//! The [`DualGrid`] entry point and container aliases bound to its codecs.

use crate::codec::{EdgeCodec, NodeCodec, TileCodec};
use crate::tile::Tile;
use quadra_core::{BoundedSpace2D, Direction, GridError, IdentityMap, IdentitySet, Vector2D};
use smallvec::SmallVec;
use tracing::debug;

/// Tile-keyed map.
pub type TileMap<V> = IdentityMap<TileCodec, V>;
/// Tile set.
pub type TileSet = IdentitySet<TileCodec>;
/// Node-keyed map.
pub type NodeMap<V> = IdentityMap<NodeCodec, V>;
/// Node set.
pub type NodeSet = IdentitySet<NodeCodec>;
/// Edge-keyed map.
pub type EdgeMap<V> = IdentityMap<EdgeCodec, V>;
/// Edge set.
pub type EdgeSet = IdentitySet<EdgeCodec>;

/// A `W x H` square grid together with its lattice of corners and edges.
///
/// Tile space is `[0, W) x [0, H)`. Node space shares the origin and is one
/// unit larger on both axes, `[0, W + 1) x [0, H + 1)`, because a row of
/// `W` tiles has `W + 1` corners. Edges are anchored in node space.
///
/// Constructed once and immutable afterwards; it is `Send + Sync` and can
/// be shared freely between readers.
///
/// # Examples
///
/// ```
/// use quadra_core::Vector2D;
/// use quadra_grid::{DualGrid, Tile};
///
/// let grid = DualGrid::new(Vector2D::new(25, 25)).unwrap();
/// assert_eq!(grid.tile_space().max(), Vector2D::new(25, 25));
/// assert_eq!(grid.node_space().max(), Vector2D::new(26, 26));
///
/// let mut difficult = grid.tile_set();
/// difficult.insert(&Tile::new(3, 4)).unwrap();
/// assert!(difficult.contains(&Tile::new(3, 4)).unwrap());
/// assert!(difficult.insert(&Tile::new(25, 0)).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DualGrid {
    tile_space: BoundedSpace2D,
    node_space: BoundedSpace2D,
    tiles: TileCodec,
    nodes: NodeCodec,
    edges: EdgeCodec,
}

impl DualGrid {
    /// Create a grid of `size.q` columns by `size.r` rows.
    ///
    /// Returns `Err(GridError::EmptySpace)` if either dimension is zero,
    /// `Err(GridError::InvalidInput)` if either is negative, or
    /// `Err(GridError::DimensionTooLarge)` if the edge ids would not fit
    /// in `u32`.
    pub fn new(size: Vector2D) -> Result<Self, GridError> {
        if size.q < 0 || size.r < 0 {
            return Err(GridError::InvalidInput {
                reason: format!("grid size {size} has a negative dimension"),
            });
        }
        if size.q == 0 || size.r == 0 {
            return Err(GridError::EmptySpace);
        }
        let node_size = Vector2D::new(
            size.q.checked_add(1).ok_or(GridError::DimensionTooLarge {
                name: "cols",
                value: i64::from(size.q),
                max: i64::from(i32::MAX - 1),
            })?,
            size.r.checked_add(1).ok_or(GridError::DimensionTooLarge {
                name: "rows",
                value: i64::from(size.r),
                max: i64::from(i32::MAX - 1),
            })?,
        );

        let tile_space = BoundedSpace2D::from_origin(size);
        let node_space = BoundedSpace2D::from_origin(node_size);
        let grid = Self {
            tile_space,
            node_space,
            tiles: TileCodec::new(tile_space)?,
            nodes: NodeCodec::new(node_space)?,
            edges: EdgeCodec::new(node_space)?,
        };
        debug!(
            cols = size.q,
            rows = size.r,
            tiles = grid.tile_count(),
            nodes = grid.node_count(),
            edges = grid.edge_count(),
            "constructed dual grid"
        );
        Ok(grid)
    }

    /// Create a grid from unsigned dimensions.
    pub fn with_dimensions(cols: u32, rows: u32) -> Result<Self, GridError> {
        let q = i32::try_from(cols).map_err(|_| GridError::DimensionTooLarge {
            name: "cols",
            value: i64::from(cols),
            max: i64::from(i32::MAX - 1),
        })?;
        let r = i32::try_from(rows).map_err(|_| GridError::DimensionTooLarge {
            name: "rows",
            value: i64::from(rows),
            max: i64::from(i32::MAX - 1),
        })?;
        Self::new(Vector2D::new(q, r))
    }

    /// Bounds of tile space.
    pub fn tile_space(&self) -> BoundedSpace2D {
        self.tile_space
    }

    /// Bounds of node space (and of edge anchors).
    pub fn node_space(&self) -> BoundedSpace2D {
        self.node_space
    }

    /// Tile codec over tile space.
    pub fn tile_codec(&self) -> &TileCodec {
        &self.tiles
    }

    /// Node codec over node space.
    pub fn node_codec(&self) -> &NodeCodec {
        &self.nodes
    }

    /// Edge codec over node space.
    pub fn edge_codec(&self) -> &EdgeCodec {
        &self.edges
    }

    /// Number of tiles (`W * H`).
    pub fn tile_count(&self) -> usize {
        self.tiles.count()
    }

    /// Number of node ids (`(W + 1) * (H + 1)`).
    pub fn node_count(&self) -> usize {
        self.nodes.count()
    }

    /// Number of edge ids (`2 * (W + 1) * (H + 1)`).
    ///
    /// This includes anchors on the far boundary whose segment points out
    /// of the grid; they are addressable but border no tile on one side.
    pub fn edge_count(&self) -> usize {
        self.edges.count()
    }

    /// Whether `tile` lies in tile space.
    pub fn contains_tile(&self, tile: Tile) -> bool {
        self.tile_space.includes(tile.position())
    }

    /// Every tile, row by row.
    pub fn tiles(&self) -> impl Iterator<Item = Tile> + Clone {
        self.tile_space.iter().map(Tile::from)
    }

    /// In-bounds neighbours of `tile`, in [`Direction::ALL`] order.
    pub fn tile_neighbours(&self, tile: Tile) -> SmallVec<[(Direction, Tile); 8]> {
        Direction::ALL
            .into_iter()
            .map(|d| (d, tile.neighbor(d)))
            .filter(|(_, t)| self.contains_tile(*t))
            .collect()
    }

    /// An empty tile-keyed map.
    pub fn tile_map<V>(&self) -> TileMap<V> {
        IdentityMap::new(self.tiles)
    }

    /// An empty tile set.
    pub fn tile_set(&self) -> TileSet {
        IdentitySet::new(self.tiles)
    }

    /// An empty node-keyed map.
    pub fn node_map<V>(&self) -> NodeMap<V> {
        IdentityMap::new(self.nodes)
    }

    /// An empty node set.
    pub fn node_set(&self) -> NodeSet {
        IdentitySet::new(self.nodes)
    }

    /// An empty edge-keyed map.
    pub fn edge_map<V>(&self) -> EdgeMap<V> {
        IdentityMap::new(self.edges)
    }

    /// An empty edge set.
    pub fn edge_set(&self) -> EdgeSet {
        IdentitySet::new(self.edges)
    }
}
