//! The [`Codec`] abstraction connecting entities to dense ids.

use crate::error::GridError;
use std::fmt::Debug;
use std::hash::Hash;

/// A bijection between entities and dense integer ids.
///
/// Implementations close over the bounded space they address and must
/// reject any entity (or any id whose decoded entity) outside it with
/// [`GridError::OutOfBounds`]. Within the space, `from_id(to_id(x)) == x`
/// and `to_id(from_id(id)) == id`.
///
/// The identity containers in [`crate::identity`] are built on this
/// trait: two entities are the same key iff they encode to the same id.
/// They rely on every id returned by `to_id` decoding successfully.
/// Debug builds assert this when iterating; release builds skip ids
/// that fail to decode.
pub trait Codec {
    /// The entity type being encoded.
    type Item;
    /// The dense id type. Usually a `u32` newtype.
    type Id: Copy + Eq + Hash + Debug;

    /// Encode an entity.
    fn to_id(&self, item: &Self::Item) -> Result<Self::Id, GridError>;

    /// Decode an id.
    fn from_id(&self, id: Self::Id) -> Result<Self::Item, GridError>;
}

impl<C: Codec + ?Sized> Codec for &C {
    type Item = C::Item;
    type Id = C::Id;

    fn to_id(&self, item: &Self::Item) -> Result<Self::Id, GridError> {
        (**self).to_id(item)
    }

    fn from_id(&self, id: Self::Id) -> Result<Self::Item, GridError> {
        (**self).from_id(id)
    }
}
