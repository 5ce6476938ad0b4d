//! Unit boundary segments between adjacent nodes.

use crate::node::Node;
use crate::tile::Tile;
use quadra_core::{Cardinal, Vector2D};
use std::fmt;

/// Which of the two canonical orientations an [`Edge`] has.
///
/// Every unit segment of the lattice is named from the tile below or to
/// the right of it, so only the north and west sides are needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeOrientation {
    /// Horizontal segment from node `(q, r)` to node `(q + 1, r)`;
    /// the north border of tile `(q, r)`.
    North,
    /// Vertical segment from node `(q, r)` to node `(q, r + 1)`;
    /// the west border of tile `(q, r)`.
    West,
}

impl EdgeOrientation {
    /// The tile side this orientation names.
    pub const fn cardinal(self) -> Cardinal {
        match self {
            Self::North => Cardinal::North,
            Self::West => Cardinal::West,
        }
    }
}

/// A unit boundary segment, anchored at a node-space coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    /// Anchor column (node space).
    pub q: i32,
    /// Anchor row (node space).
    pub r: i32,
    /// Canonical orientation.
    pub orientation: EdgeOrientation,
}

impl Edge {
    /// Create an edge from its anchor coordinates and orientation.
    pub const fn new(q: i32, r: i32, orientation: EdgeOrientation) -> Self {
        Self { q, r, orientation }
    }

    /// Create an edge anchored at `v`.
    pub const fn at(v: Vector2D, orientation: EdgeOrientation) -> Self {
        Self::new(v.q, v.r, orientation)
    }

    /// The anchor coordinate.
    pub const fn position(self) -> Vector2D {
        Vector2D::new(self.q, self.r)
    }

    /// The node the edge is anchored at (its north or west end).
    pub const fn anchor(self) -> Node {
        Node::new(self.q, self.r)
    }

    /// Both end nodes, anchor first.
    pub const fn endpoints(self) -> [Node; 2] {
        match self.orientation {
            EdgeOrientation::North => [self.anchor(), Node::new(self.q + 1, self.r)],
            EdgeOrientation::West => [self.anchor(), Node::new(self.q, self.r + 1)],
        }
    }

    /// The two tiles the edge separates: the north/west one first.
    ///
    /// On the outer boundary of a grid one of them lies outside tile space.
    pub const fn tiles(self) -> [Tile; 2] {
        match self.orientation {
            EdgeOrientation::North => [Tile::new(self.q, self.r - 1), Tile::new(self.q, self.r)],
            EdgeOrientation::West => [Tile::new(self.q - 1, self.r), Tile::new(self.q, self.r)],
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = match self.orientation {
            EdgeOrientation::North => 'N',
            EdgeOrientation::West => 'W',
        };
        write!(f, "edge({}, {}, {o})", self.q, self.r)
    }
}
