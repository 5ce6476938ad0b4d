//! Dense-id codecs for tiles, nodes and edges.
//!
//! Tile and node ids are row-major ranks within their bounded space.
//! Edge ids reuse the node-space rank: north-oriented edges occupy
//! `[0, n)` and west-oriented edges `[n, 2n)`, where `n` is the size of
//! node space. Every codec bounds-checks both directions, so an id past
//! the end of its range fails instead of aliasing an unrelated entity.

use crate::edge::{Edge, EdgeOrientation};
use crate::node::Node;
use crate::tile::Tile;
use quadra_core::{BoundedSpace2D, Codec, EdgeId, GridError, NodeId, TileId, Vector2D};

/// Reject spaces whose ids would not fit, returning the id count.
fn check_capacity(
    bounds: BoundedSpace2D,
    ids_per_cell: usize,
    name: &'static str,
) -> Result<usize, GridError> {
    if bounds.is_empty() {
        return Err(GridError::EmptySpace);
    }
    let count = bounds.size() as u128 * ids_per_cell as u128;
    if count > u32::MAX as u128 {
        return Err(GridError::DimensionTooLarge {
            name,
            value: i64::try_from(count).unwrap_or(i64::MAX),
            max: i64::from(u32::MAX),
        });
    }
    Ok(count as usize)
}

/// Row-major rank of `v`, after bounds-checking it.
fn encode_rank(bounds: &BoundedSpace2D, v: Vector2D) -> Result<u32, GridError> {
    let rank = bounds.rank(v).ok_or(GridError::OutOfBounds {
        coord: v,
        bounds: *bounds,
    })?;
    u32::try_from(rank).map_err(|_| GridError::DimensionTooLarge {
        name: "rank",
        value: i64::try_from(rank).unwrap_or(i64::MAX),
        max: i64::from(u32::MAX),
    })
}

/// Inverse of [`encode_rank`]. Fails if the decoded coordinate falls
/// outside `bounds` (i.e. `rank >= bounds.size()`).
fn decode_rank(bounds: &BoundedSpace2D, rank: u32) -> Result<Vector2D, GridError> {
    let cols = bounds.cols();
    let min = bounds.min();
    let v = Vector2D::new(
        min.q.saturating_add_unsigned(rank % cols),
        min.r.saturating_add_unsigned(rank / cols),
    );
    bounds.check(v)?;
    Ok(v)
}

/// Encodes [`Tile`]s as [`TileId`]s within tile space.
///
/// # Examples
///
/// ```
/// use quadra_core::{BoundedSpace2D, Codec, TileId, Vector2D};
/// use quadra_grid::{Tile, TileCodec};
///
/// let codec = TileCodec::new(BoundedSpace2D::from_origin(Vector2D::new(3, 3))).unwrap();
/// assert_eq!(codec.to_id(&Tile::new(1, 1)).unwrap(), TileId(4));
/// assert_eq!(codec.from_id(TileId(4)).unwrap(), Tile::new(1, 1));
/// assert!(codec.from_id(TileId(9)).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileCodec {
    bounds: BoundedSpace2D,
    count: usize,
}

impl TileCodec {
    /// Create a codec over `bounds`.
    ///
    /// Returns `Err(GridError::EmptySpace)` for an empty space, or
    /// `Err(GridError::DimensionTooLarge)` if its ranks exceed `u32`.
    pub fn new(bounds: BoundedSpace2D) -> Result<Self, GridError> {
        let count = check_capacity(bounds, 1, "tile count")?;
        Ok(Self { bounds, count })
    }

    /// The space this codec addresses.
    pub fn bounds(&self) -> BoundedSpace2D {
        self.bounds
    }

    /// Number of valid ids: `0..count()`.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Codec for TileCodec {
    type Item = Tile;
    type Id = TileId;

    fn to_id(&self, tile: &Tile) -> Result<TileId, GridError> {
        encode_rank(&self.bounds, tile.position()).map(TileId)
    }

    fn from_id(&self, id: TileId) -> Result<Tile, GridError> {
        decode_rank(&self.bounds, id.0).map(Tile::from)
    }
}

/// Encodes [`Node`]s as [`NodeId`]s within node space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeCodec {
    bounds: BoundedSpace2D,
    count: usize,
}

impl NodeCodec {
    /// Create a codec over `bounds`.
    pub fn new(bounds: BoundedSpace2D) -> Result<Self, GridError> {
        let count = check_capacity(bounds, 1, "node count")?;
        Ok(Self { bounds, count })
    }

    /// The space this codec addresses.
    pub fn bounds(&self) -> BoundedSpace2D {
        self.bounds
    }

    /// Number of valid ids: `0..count()`.
    pub fn count(&self) -> usize {
        self.count
    }
}

impl Codec for NodeCodec {
    type Item = Node;
    type Id = NodeId;

    fn to_id(&self, node: &Node) -> Result<NodeId, GridError> {
        encode_rank(&self.bounds, node.position()).map(NodeId)
    }

    fn from_id(&self, id: NodeId) -> Result<Node, GridError> {
        decode_rank(&self.bounds, id.0).map(Node::from)
    }
}

/// Encodes [`Edge`]s as [`EdgeId`]s. Bounds-checks the anchor in node space.
///
/// # Examples
///
/// ```
/// use quadra_core::{BoundedSpace2D, Codec, EdgeId, Vector2D};
/// use quadra_grid::{Edge, EdgeCodec, EdgeOrientation};
///
/// let codec = EdgeCodec::new(BoundedSpace2D::from_origin(Vector2D::new(3, 3))).unwrap();
/// let north = Edge::new(1, 1, EdgeOrientation::North);
/// let west = Edge::new(1, 1, EdgeOrientation::West);
/// assert_eq!(codec.to_id(&north).unwrap(), EdgeId(4));
/// assert_eq!(codec.to_id(&west).unwrap(), EdgeId(13));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeCodec {
    bounds: BoundedSpace2D,
    nodes: u32,
}

impl EdgeCodec {
    /// Create a codec over node-space `bounds`.
    pub fn new(bounds: BoundedSpace2D) -> Result<Self, GridError> {
        check_capacity(bounds, 2, "edge count")?;
        Ok(Self {
            bounds,
            nodes: bounds.size() as u32,
        })
    }

    /// The node space edge anchors are checked against.
    pub fn bounds(&self) -> BoundedSpace2D {
        self.bounds
    }

    /// Number of valid ids: `0..count()`.
    pub fn count(&self) -> usize {
        self.nodes as usize * 2
    }
}

impl Codec for EdgeCodec {
    type Item = Edge;
    type Id = EdgeId;

    fn to_id(&self, edge: &Edge) -> Result<EdgeId, GridError> {
        let rank = encode_rank(&self.bounds, edge.position())?;
        let offset = match edge.orientation {
            EdgeOrientation::North => 0,
            EdgeOrientation::West => self.nodes,
        };
        Ok(EdgeId(rank + offset))
    }

    fn from_id(&self, id: EdgeId) -> Result<Edge, GridError> {
        let (orientation, rank) = if id.0 < self.nodes {
            (EdgeOrientation::North, id.0)
        } else {
            (EdgeOrientation::West, id.0 - self.nodes)
        };
        let v = decode_rank(&self.bounds, rank)?;
        Ok(Edge::at(v, orientation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use proptest::prelude::*;

    fn space(q: i32, r: i32) -> BoundedSpace2D {
        BoundedSpace2D::from_origin(Vector2D::new(q, r))
    }

    // ── Concrete ids ────────────────────────────────────────────

    #[test]
    fn tile_codec_to_id() {
        let codec = TileCodec::new(space(3, 3)).unwrap();
        assert_eq!(codec.to_id(&Tile::new(1, 1)).unwrap(), TileId(4));
    }

    #[test]
    fn tile_codec_from_id() {
        let codec = TileCodec::new(space(3, 3)).unwrap();
        assert_eq!(codec.from_id(TileId(4)).unwrap(), Tile::new(1, 1));
    }

    #[test]
    fn node_codec_round_trip_concrete() {
        let codec = NodeCodec::new(space(3, 3)).unwrap();
        assert_eq!(codec.to_id(&Node::new(1, 1)).unwrap(), NodeId(4));
        assert_eq!(codec.from_id(NodeId(4)).unwrap(), Node::new(1, 1));
    }

    #[test]
    fn edge_codec_offsets_west_edges() {
        let codec = EdgeCodec::new(space(3, 3)).unwrap();
        let north = Edge::new(1, 1, EdgeOrientation::North);
        let west = Edge::new(1, 1, EdgeOrientation::West);
        assert_eq!(codec.to_id(&north).unwrap(), EdgeId(4));
        assert_eq!(codec.to_id(&west).unwrap(), EdgeId(13));
        assert_eq!(codec.from_id(EdgeId(4)).unwrap(), north);
        assert_eq!(codec.from_id(EdgeId(13)).unwrap(), west);
    }

    #[test]
    fn rows_and_cols_are_not_transposed() {
        let codec = TileCodec::new(space(4, 2)).unwrap();
        assert_eq!(codec.to_id(&Tile::new(3, 0)).unwrap(), TileId(3));
        assert_eq!(codec.to_id(&Tile::new(0, 1)).unwrap(), TileId(4));
        assert_eq!(codec.count(), 8);
    }

    #[test]
    fn offset_space_ranks_relative_to_min() {
        let bounds = BoundedSpace2D::new(Vector2D::new(-2, 10), Vector2D::new(1, 12));
        let codec = TileCodec::new(bounds).unwrap();
        assert_eq!(codec.to_id(&Tile::new(-2, 10)).unwrap(), TileId(0));
        assert_eq!(codec.to_id(&Tile::new(0, 11)).unwrap(), TileId(5));
        assert_eq!(codec.from_id(TileId(5)).unwrap(), Tile::new(0, 11));
    }

    // ── Bounds failures ─────────────────────────────────────────

    #[test]
    fn to_id_rejects_out_of_bounds() {
        let tiles = TileCodec::new(space(3, 3)).unwrap();
        for t in [Tile::new(-1, 0), Tile::new(3, 0), Tile::new(0, 3)] {
            assert!(matches!(
                tiles.to_id(&t),
                Err(GridError::OutOfBounds { .. })
            ));
        }
        let edges = EdgeCodec::new(space(4, 4)).unwrap();
        assert!(edges
            .to_id(&Edge::new(4, 0, EdgeOrientation::West))
            .is_err());
    }

    #[test]
    fn from_id_rejects_ids_past_the_end() {
        let tiles = TileCodec::new(space(3, 3)).unwrap();
        assert_eq!(
            tiles.from_id(TileId(9)),
            Err(GridError::OutOfBounds {
                coord: Vector2D::new(0, 3),
                bounds: space(3, 3),
            })
        );
        assert!(tiles.from_id(TileId(u32::MAX)).is_err());
        let nodes = NodeCodec::new(space(3, 3)).unwrap();
        assert!(nodes.from_id(NodeId(9)).is_err());
    }

    #[test]
    fn edge_ids_past_the_west_range_do_not_alias() {
        let edges = EdgeCodec::new(space(3, 3)).unwrap();
        assert!(edges.from_id(EdgeId(17)).is_ok());
        assert!(edges.from_id(EdgeId(18)).is_err());
        assert!(edges.from_id(EdgeId(18 + 4)).is_err());
        assert!(edges.from_id(EdgeId(u32::MAX)).is_err());
    }

    #[test]
    fn construction_rejects_empty_space() {
        assert_eq!(TileCodec::new(space(0, 3)), Err(GridError::EmptySpace));
        assert_eq!(NodeCodec::new(space(3, 0)), Err(GridError::EmptySpace));
        assert_eq!(EdgeCodec::new(space(0, 0)), Err(GridError::EmptySpace));
    }

    #[test]
    fn construction_rejects_oversize_edge_space() {
        let huge = space(65_536, 65_536);
        assert!(NodeCodec::new(space(65_535, 65_535)).is_ok());
        assert!(matches!(
            EdgeCodec::new(huge),
            Err(GridError::DimensionTooLarge {
                name: "edge count",
                ..
            })
        ));
    }

    #[test]
    fn full_width_space_encodes_without_overflow() {
        let bounds = BoundedSpace2D::new(Vector2D::new(i32::MIN, 0), Vector2D::new(i32::MAX, 1));
        let codec = TileCodec::new(bounds).unwrap();
        assert_eq!(codec.count(), u32::MAX as usize);

        let last = Tile::new(i32::MAX - 1, 0);
        let id = codec.to_id(&last).unwrap();
        assert_eq!(id, TileId(u32::MAX - 1));
        assert_eq!(codec.from_id(id).unwrap(), last);
        assert_eq!(codec.to_id(&Tile::new(i32::MIN, 0)).unwrap(), TileId(0));
        assert!(codec.to_id(&Tile::new(i32::MAX, 0)).is_err());
    }

    #[test]
    fn tall_space_encodes_without_overflow() {
        let bounds = BoundedSpace2D::new(Vector2D::new(0, i32::MIN), Vector2D::new(1, i32::MAX));
        let codec = NodeCodec::new(bounds).unwrap();
        let last = Node::new(0, i32::MAX - 1);
        let id = codec.to_id(&last).unwrap();
        assert_eq!(id, NodeId(u32::MAX - 1));
        assert_eq!(codec.from_id(id).unwrap(), last);
    }

    // ── Compliance suites ───────────────────────────────────────

    #[test]
    fn compliance_tile_codec() {
        let codec = TileCodec::new(space(7, 5)).unwrap();
        compliance::run_full_compliance(&codec, codec.count(), TileId);
    }

    #[test]
    fn compliance_node_codec() {
        let codec = NodeCodec::new(space(8, 6)).unwrap();
        compliance::run_full_compliance(&codec, codec.count(), NodeId);
    }

    #[test]
    fn compliance_edge_codec() {
        let codec = EdgeCodec::new(space(8, 6)).unwrap();
        compliance::run_full_compliance(&codec, codec.count(), EdgeId);
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn tile_codec_is_bijective(
            min_q in -50i32..50, min_r in -50i32..50,
            w in 1i32..30, h in 1i32..30,
            dq in 0i32..30, dr in 0i32..30,
        ) {
            let bounds = BoundedSpace2D::new(
                Vector2D::new(min_q, min_r),
                Vector2D::new(min_q + w, min_r + h),
            );
            let codec = TileCodec::new(bounds).unwrap();
            let tile = Tile::new(min_q + dq % w, min_r + dr % h);
            let id = codec.to_id(&tile).unwrap();
            prop_assert!((id.0 as usize) < codec.count());
            prop_assert_eq!(codec.from_id(id).unwrap(), tile);
        }

        #[test]
        fn edge_codec_is_bijective(
            w in 1i32..30, h in 1i32..30,
            raw in 0u32..2000,
        ) {
            let codec = EdgeCodec::new(space(w, h)).unwrap();
            let id = EdgeId(raw % codec.count() as u32);
            let edge = codec.from_id(id).unwrap();
            prop_assert_eq!(codec.to_id(&edge).unwrap(), id);
        }
    }
}
