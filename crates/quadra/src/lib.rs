//! Quadra: square dual grids with dense-id addressing and movement ranges.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Quadra sub-crates. For most users, adding `quadra` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use quadra::prelude::*;
//!
//! // The 19×19 movement board with the character in the middle.
//! let grid = DualGrid::new(Vector2D::new(19, 19)).unwrap();
//! let origin = Tile::new(9, 9);
//!
//! // Wall off the character's north side and make the east tile rough.
//! let mut terrain = TerrainMap::new(&grid);
//! terrain.toggle_wall(origin.border(Cardinal::North)).unwrap();
//! terrain.toggle_difficult(Tile::new(10, 9)).unwrap();
//!
//! let config = RangeConfig::default()
//!     .with_max_cost(1.0)
//!     .with_diagonal(DiagonalCost::Chebyshev);
//! let range = search_terrain(&grid, origin, &config, &terrain).unwrap();
//!
//! assert_eq!(range.get(&Tile::new(9, 8)).unwrap(), None);
//! assert_eq!(range.get(&Tile::new(10, 9)).unwrap(), None);
//! assert_eq!(range.get(&Tile::new(9, 10)).unwrap(), Some(&1.0));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `quadra-core` | Vectors, directions, bounded spaces, ids, identity containers |
//! | [`grid`] | `quadra-grid` | Tiles, nodes, edges, codecs, `DualGrid` |
//! | [`range`] | `quadra-range` | Movement range search, terrain, configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinates, directions, bounded spaces and containers (`quadra-core`).
///
/// Contains [`types::Vector2D`], [`types::Direction`],
/// [`types::BoundedSpace2D`], the id newtypes, the [`types::Codec`] trait
/// and the [`types::IdentityMap`] / [`types::IdentitySet`] containers.
pub use quadra_core as types;

/// Dual-grid entities and codecs (`quadra-grid`).
///
/// [`grid::DualGrid`] is the entry point; it owns the
/// [`grid::TileCodec`], [`grid::NodeCodec`] and [`grid::EdgeCodec`].
pub use quadra_grid as grid;

/// Movement range search (`quadra-range`).
///
/// [`range::range_search`] with closure predicates, or
/// [`range::search_terrain`] with a [`range::Terrain`].
pub use quadra_range as range;

/// Common imports for typical Quadra usage.
///
/// ```rust
/// use quadra::prelude::*;
/// ```
///
/// This imports the most frequently used types: coordinates and directions,
/// grid entities, the containers, and the range search entry points.
pub mod prelude {
    // Core types
    pub use quadra_core::{
        BoundedSpace2D, Cardinal, Codec, Diagonal, Direction, EdgeId, IdentityMap, IdentitySet,
        NodeId, TileId, Vector2D,
    };

    // Errors
    pub use quadra_core::GridError;
    pub use quadra_range::{ConfigError, RangeError};

    // Grid
    pub use quadra_grid::{
        DualGrid, Edge, EdgeOrientation, EdgeSet, Node, Tile, TileMap, TileSet,
    };

    // Range search
    pub use quadra_range::{
        range_search, search_terrain, DiagonalCost, OpenTerrain, RangeConfig, Terrain,
        TerrainMap,
    };
}
