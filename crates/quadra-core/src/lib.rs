//! Core types for the Quadra dual-grid library.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate algebra every other crate builds on: [`Vector2D`], the
//! compass [`Direction`]s, half-open [`BoundedSpace2D`] regions with their
//! row-major addressing, typed entity ids, the [`Codec`] trait, and the
//! id-keyed [`IdentityMap`] / [`IdentitySet`] containers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod direction;
pub mod error;
pub mod id;
pub mod identity;
pub mod traits;
pub mod vector;

pub use bounds::BoundedSpace2D;
pub use direction::{
    all_directions, cardinal_directions, diagonal_directions, Cardinal, Diagonal, Direction,
};
pub use error::GridError;
pub use id::{EdgeId, NodeId, TileId};
pub use identity::{IdentityMap, IdentitySet};
pub use traits::Codec;
pub use vector::Vector2D;
