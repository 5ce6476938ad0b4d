//! Grid corners.

use crate::edge::{Edge, EdgeOrientation};
use crate::tile::Tile;
use quadra_core::{Cardinal, Diagonal, Direction, Vector2D};
use std::fmt;

/// Tile offset of each touching tile, indexed by [`Diagonal::index`].
const TOUCH_OFFSETS: [Vector2D; 4] = [
    Vector2D::new(0, -1),  // NorthEast
    Vector2D::new(0, 0),   // SouthEast
    Vector2D::new(-1, 0),  // SouthWest
    Vector2D::new(-1, -1), // NorthWest
];

/// Anchor offset of each protruding edge, indexed by [`Cardinal::index`].
const PROTRUDE_OFFSETS: [Vector2D; 4] = [
    Vector2D::new(0, -1), // North
    Vector2D::new(0, 0),  // East
    Vector2D::new(0, 0),  // South
    Vector2D::new(-1, 0), // West
];

/// Orientation of each protruding edge, indexed by [`Cardinal::index`].
///
/// Vertical segments are west-oriented, horizontal ones north-oriented.
const PROTRUDE_ORIENTATIONS: [EdgeOrientation; 4] = [
    EdgeOrientation::West,
    EdgeOrientation::North,
    EdgeOrientation::West,
    EdgeOrientation::North,
];

/// A corner point shared by up to four tiles, addressed in node space.
///
/// Node `(q, r)` is the north-west corner of tile `(q, r)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    /// Column.
    pub q: i32,
    /// Row.
    pub r: i32,
}

impl Node {
    /// Create a node from its coordinates.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The node's coordinate.
    pub const fn position(self) -> Vector2D {
        Vector2D::new(self.q, self.r)
    }

    /// The adjacent node in direction `d`.
    pub fn neighbor(self, d: Direction) -> Node {
        Node::from(self.position() + d.delta())
    }

    /// The tile lying in direction `d` from this corner.
    ///
    /// Inverse of [`Tile::corner`]: `t.corner(d).touch(d.mirror()) == t`.
    pub fn touch(self, d: Diagonal) -> Tile {
        Tile::from(self.position() + TOUCH_OFFSETS[d.index()])
    }

    /// The unit edge leaving this node in direction `d`, in canonical form.
    pub fn protrude(self, d: Cardinal) -> Edge {
        Edge::at(
            self.position() + PROTRUDE_OFFSETS[d.index()],
            PROTRUDE_ORIENTATIONS[d.index()],
        )
    }

    /// All four touching tiles, clockwise from north-east.
    pub fn touches(self) -> impl Iterator<Item = (Diagonal, Tile)> + Clone {
        Diagonal::ALL.into_iter().map(move |d| (d, self.touch(d)))
    }

    /// All four protruding edges, clockwise from north.
    pub fn protrusions(self) -> impl Iterator<Item = (Cardinal, Edge)> + Clone {
        Cardinal::ALL.into_iter().map(move |d| (d, self.protrude(d)))
    }
}

impl From<Vector2D> for Node {
    fn from(v: Vector2D) -> Self {
        Self { q: v.q, r: v.r }
    }
}

impl From<Node> for Vector2D {
    fn from(n: Node) -> Self {
        n.position()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node({}, {})", self.q, self.r)
    }
}
