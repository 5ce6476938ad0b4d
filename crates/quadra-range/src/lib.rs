//! Cost-bounded movement range search on a Quadra dual grid.
//!
//! [`range_search`] runs a uniform-cost expansion from an origin tile and
//! returns every tile reachable within a movement budget, together with
//! its minimal cost. Walls (blocking [`Edge`](quadra_grid::Edge)s) and
//! difficult tiles are supplied as predicates, or through a [`Terrain`]
//! such as [`TerrainMap`].
//!
//! # Costs
//!
//! | Step | Cost |
//! |------|------|
//! | cardinal | 1 |
//! | diagonal | [`RangeConfig::diagonal_cost`] (see [`DiagonalCost`]) |
//! | into a difficult tile | double the above |
//!
//! A tile is in range when the floor of its accumulated cost is at most
//! [`RangeConfig::max_cost`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod search;
pub mod terrain;

pub use config::{DiagonalCost, RangeConfig};
pub use error::{ConfigError, RangeError};
pub use search::range_search;
pub use terrain::{search_terrain, OpenTerrain, Terrain, TerrainMap};
