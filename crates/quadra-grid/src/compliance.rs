//! Codec contract test helpers.
//!
//! These functions verify that a [`Codec`] implementation is a bijection
//! over its dense id range and rejects everything past it. Reused by the
//! tile, node and edge codec test modules.

use indexmap::IndexSet;
use quadra_core::Codec;
use std::fmt::Debug;
use std::hash::Hash;

/// Assert that every id in `0..count` decodes and re-encodes to itself.
pub fn assert_ids_round_trip<C>(codec: &C, count: usize, make_id: impl Fn(u32) -> C::Id)
where
    C: Codec,
    C::Item: Debug,
{
    for raw in 0..count as u32 {
        let id = make_id(raw);
        let item = codec
            .from_id(id)
            .unwrap_or_else(|e| panic!("from_id({id:?}) failed: {e}"));
        let back = codec
            .to_id(&item)
            .unwrap_or_else(|e| panic!("to_id({item:?}) failed: {e}"));
        assert_eq!(back, id, "{item:?} re-encoded to {back:?}, expected {id:?}");
    }
}

/// Assert that no two ids in `0..count` decode to the same entity.
pub fn assert_items_unique<C>(codec: &C, count: usize, make_id: impl Fn(u32) -> C::Id)
where
    C: Codec,
    C::Item: Debug + Eq + Hash,
{
    let unique: IndexSet<C::Item> = (0..count as u32)
        .filter_map(|raw| codec.from_id(make_id(raw)).ok())
        .collect();
    assert_eq!(unique.len(), count, "decoded entities have duplicates");
}

/// Assert that the first id past the range is rejected.
pub fn assert_past_end_rejected<C>(codec: &C, count: usize, make_id: impl Fn(u32) -> C::Id)
where
    C: Codec,
    C::Item: Debug,
{
    let id = make_id(count as u32);
    assert!(
        codec.from_id(id).is_err(),
        "from_id({id:?}) past the end decoded to {:?}",
        codec.from_id(id)
    );
}

/// Run all codec compliance checks.
pub fn run_full_compliance<C>(codec: &C, count: usize, make_id: impl Fn(u32) -> C::Id)
where
    C: Codec,
    C::Item: Debug + Eq + Hash,
{
    assert_ids_round_trip(codec, count, &make_id);
    assert_items_unique(codec, count, &make_id);
    assert_past_end_rejected(codec, count, &make_id);
}
