//! Dual-grid entities and dense-id codecs for square tile maps.
//!
//! A `W x H` grid has three kinds of entity, each in its own coordinate
//! space:
//!
//! - [`Tile`]: a cell, in tile space `[0, W) x [0, H)`
//! - [`Node`]: a corner, in node space `[0, W + 1) x [0, H + 1)`
//! - [`Edge`]: a unit boundary segment, anchored at a node with a
//!   canonical [`EdgeOrientation`]
//!
//! Adjacency between them is pure offset arithmetic ([`Tile::border`],
//! [`Tile::corner`], [`Node::touch`], [`Node::protrude`]).
//!
//! # Codecs
//!
//! [`TileCodec`], [`NodeCodec`] and [`EdgeCodec`] map entities to dense
//! `u32` ids so that [`quadra_core::IdentityMap`] and
//! [`quadra_core::IdentitySet`] can key them by value. [`DualGrid`] owns
//! one of each and hands out empty containers bound to them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod dual;
pub mod edge;
pub mod node;
pub mod tile;

#[cfg(test)]
pub(crate) mod compliance;

pub use codec::{EdgeCodec, NodeCodec, TileCodec};
pub use dual::{DualGrid, EdgeMap, EdgeSet, NodeMap, NodeSet, TileMap, TileSet};
pub use edge::{Edge, EdgeOrientation};
pub use node::Node;
pub use tile::Tile;
