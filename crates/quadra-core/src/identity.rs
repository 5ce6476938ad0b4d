//! Value-keyed containers backed by dense ids.
//!
//! [`IdentityMap`] and [`IdentitySet`] store entities by the id their
//! [`Codec`] assigns, not by the entity value itself. Two entity values
//! that encode to the same id are the same key. Every keyed operation
//! encodes through the codec and therefore fails with the codec's
//! [`GridError`] for entities outside its bounds.
//!
//! The backing stores are insertion-ordered (`indexmap`), so iteration
//! order is deterministic: first insertion first, and removing an entry
//! does not reorder the rest. Iteration decodes ids lazily.

use crate::error::GridError;
use crate::traits::Codec;
use indexmap::{IndexMap, IndexSet};

/// Decode an id that was produced by `codec`.
///
/// Stored ids always come from [`Codec::to_id`], so a decode failure means
/// the codec is not a bijection. Debug builds catch that here.
fn decode_stored<C: Codec>(codec: &C, id: C::Id) -> Option<C::Item> {
    let item = codec.from_id(id);
    debug_assert!(item.is_ok(), "codec failed to decode stored id {id:?}");
    item.ok()
}

/// A map from entities to values, keyed by codec id.
#[derive(Clone, Debug)]
pub struct IdentityMap<C: Codec, V> {
    codec: C,
    data: IndexMap<C::Id, V>,
}

impl<C: Codec, V> IdentityMap<C, V> {
    /// An empty map addressing entities through `codec`.
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            data: IndexMap::new(),
        }
    }

    /// A map seeded with `entries`. Later duplicates overwrite earlier ones.
    ///
    /// Fails on the first entry whose key the codec rejects.
    pub fn from_entries<I>(codec: C, entries: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (C::Item, V)>,
    {
        let mut map = Self::new(codec);
        for (key, value) in entries {
            map.insert(&key, value)?;
        }
        Ok(map)
    }

    /// The codec keys are interned through.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Insert or overwrite the value for `key`, returning the previous one.
    ///
    /// Overwriting keeps the entry's original iteration position.
    pub fn insert(&mut self, key: &C::Item, value: V) -> Result<Option<V>, GridError> {
        let id = self.codec.to_id(key)?;
        Ok(self.data.insert(id, value))
    }

    /// The value stored for `key`, if any.
    pub fn get(&self, key: &C::Item) -> Result<Option<&V>, GridError> {
        let id = self.codec.to_id(key)?;
        Ok(self.data.get(&id))
    }

    /// Mutable access to the value stored for `key`, if any.
    pub fn get_mut(&mut self, key: &C::Item) -> Result<Option<&mut V>, GridError> {
        let id = self.codec.to_id(key)?;
        Ok(self.data.get_mut(&id))
    }

    /// Whether `key` has an entry.
    pub fn contains_key(&self, key: &C::Item) -> Result<bool, GridError> {
        let id = self.codec.to_id(key)?;
        Ok(self.data.contains_key(&id))
    }

    /// Remove the entry for `key`, returning its value.
    pub fn remove(&mut self, key: &C::Item) -> Result<Option<V>, GridError> {
        let id = self.codec.to_id(key)?;
        Ok(self.data.shift_remove(&id))
    }

    /// The value stored under a raw id, without decoding.
    pub fn get_by_id(&self, id: C::Id) -> Option<&V> {
        self.data.get(&id)
    }

    /// Raw ids in iteration order.
    pub fn ids(&self) -> impl Iterator<Item = C::Id> + '_ {
        self.data.keys().copied()
    }

    /// Keys in iteration order, decoded from their ids.
    pub fn keys(&self) -> impl Iterator<Item = C::Item> + '_ {
        self.data
            .keys()
            .filter_map(move |&id| decode_stored(&self.codec, id))
    }

    /// Values in iteration order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.data.values()
    }

    /// `(key, value)` pairs in iteration order.
    pub fn iter(&self) -> impl Iterator<Item = (C::Item, &V)> + '_ {
        self.data
            .iter()
            .filter_map(move |(&id, v)| decode_stored(&self.codec, id).map(|k| (k, v)))
    }
}

/// A set of entities, keyed by codec id.
#[derive(Clone, Debug)]
pub struct IdentitySet<C: Codec> {
    codec: C,
    data: IndexSet<C::Id>,
}

impl<C: Codec> IdentitySet<C> {
    /// An empty set addressing entities through `codec`.
    pub fn new(codec: C) -> Self {
        Self {
            codec,
            data: IndexSet::new(),
        }
    }

    /// A set seeded with `items`.
    ///
    /// Fails on the first item the codec rejects.
    pub fn from_items<I>(codec: C, items: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = C::Item>,
    {
        let mut set = Self::new(codec);
        for item in items {
            set.insert(&item)?;
        }
        Ok(set)
    }

    /// The codec items are interned through.
    pub fn codec(&self) -> &C {
        &self.codec
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Add `item`. Returns `true` if it was not already present.
    pub fn insert(&mut self, item: &C::Item) -> Result<bool, GridError> {
        let id = self.codec.to_id(item)?;
        Ok(self.data.insert(id))
    }

    /// Whether `item` is present.
    pub fn contains(&self, item: &C::Item) -> Result<bool, GridError> {
        let id = self.codec.to_id(item)?;
        Ok(self.data.contains(&id))
    }

    /// Remove `item`. Returns `true` if it was present.
    pub fn remove(&mut self, item: &C::Item) -> Result<bool, GridError> {
        let id = self.codec.to_id(item)?;
        Ok(self.data.shift_remove(&id))
    }

    /// Add `item` if absent, remove it if present.
    ///
    /// Returns `true` if the item is in the set afterwards.
    pub fn toggle(&mut self, item: &C::Item) -> Result<bool, GridError> {
        let id = self.codec.to_id(item)?;
        if self.data.shift_remove(&id) {
            Ok(false)
        } else {
            self.data.insert(id);
            Ok(true)
        }
    }

    /// Whether a raw id is present.
    pub fn contains_id(&self, id: C::Id) -> bool {
        self.data.contains(&id)
    }

    /// Raw ids in iteration order.
    pub fn ids(&self) -> impl Iterator<Item = C::Id> + '_ {
        self.data.iter().copied()
    }

    /// Items in iteration order, decoded from their ids.
    pub fn iter(&self) -> impl Iterator<Item = C::Item> + '_ {
        self.data
            .iter()
            .filter_map(move |&id| decode_stored(&self.codec, id))
    }
}
