//! Grid cells.

use crate::edge::{Edge, EdgeOrientation};
use crate::node::Node;
use quadra_core::{Cardinal, Diagonal, Direction, Vector2D};
use std::fmt;

/// Node offset of each border's canonical edge, indexed by [`Cardinal::index`].
const BORDER_OFFSETS: [Vector2D; 4] = [
    Vector2D::new(0, 0), // North
    Vector2D::new(1, 0), // East
    Vector2D::new(0, 1), // South
    Vector2D::new(0, 0), // West
];

/// Canonical orientation of each border, indexed by [`Cardinal::index`].
const BORDER_ORIENTATIONS: [EdgeOrientation; 4] = [
    EdgeOrientation::North,
    EdgeOrientation::West,
    EdgeOrientation::North,
    EdgeOrientation::West,
];

/// Node offset of each corner, indexed by [`Diagonal::index`].
const CORNER_OFFSETS: [Vector2D; 4] = [
    Vector2D::new(1, 0), // NorthEast
    Vector2D::new(1, 1), // SouthEast
    Vector2D::new(0, 1), // SouthWest
    Vector2D::new(0, 0), // NorthWest
];

/// One cell of the grid, addressed in tile space.
///
/// Tile `(q, r)` spans nodes `(q, r)` to `(q + 1, r + 1)`.
///
/// # Examples
///
/// ```
/// use quadra_core::{Cardinal, Diagonal};
/// use quadra_grid::{Edge, EdgeOrientation, Node, Tile};
///
/// let t = Tile::new(2, 5);
/// assert_eq!(t.corner(Diagonal::SouthEast), Node::new(3, 6));
/// // A tile's east border is its east neighbour's west border.
/// assert_eq!(t.border(Cardinal::East), Edge::new(3, 5, EdgeOrientation::West));
/// assert_eq!(Tile::new(3, 5).border(Cardinal::West), t.border(Cardinal::East));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    /// Column.
    pub q: i32,
    /// Row.
    pub r: i32,
}

impl Tile {
    /// Create a tile from its coordinates.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }

    /// The tile's coordinate.
    pub const fn position(self) -> Vector2D {
        Vector2D::new(self.q, self.r)
    }

    /// The adjacent tile in direction `d`.
    pub fn neighbor(self, d: Direction) -> Tile {
        Tile::from(self.position() + d.delta())
    }

    /// The boundary segment on side `d`, in canonical form.
    ///
    /// North and south borders are north-oriented edges, east and west
    /// borders are west-oriented edges, so the border shared by two
    /// adjacent tiles has exactly one representation.
    pub fn border(self, d: Cardinal) -> Edge {
        Edge::at(
            self.position() + BORDER_OFFSETS[d.index()],
            BORDER_ORIENTATIONS[d.index()],
        )
    }

    /// The corner node in direction `d`.
    pub fn corner(self, d: Diagonal) -> Node {
        Node::from(self.position() + CORNER_OFFSETS[d.index()])
    }

    /// All four borders, clockwise from north.
    pub fn borders(self) -> impl Iterator<Item = (Cardinal, Edge)> + Clone {
        Cardinal::ALL.into_iter().map(move |d| (d, self.border(d)))
    }

    /// All four corners, clockwise from north-east.
    pub fn corners(self) -> impl Iterator<Item = (Diagonal, Node)> + Clone {
        Diagonal::ALL.into_iter().map(move |d| (d, self.corner(d)))
    }
}

impl From<Vector2D> for Tile {
    fn from(v: Vector2D) -> Self {
        Self { q: v.q, r: v.r }
    }
}

impl From<Tile> for Vector2D {
    fn from(t: Tile) -> Self {
        t.position()
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tile({}, {})", self.q, self.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quadra_core::all_directions;

    #[test]
    fn from_vector() {
        assert_eq!(Tile::from(Vector2D::ORIGIN), Tile::new(0, 0));
    }

    #[test]
    fn neighbor_applies_delta() {
        let tile = Tile::new(0, 0);
        for d in all_directions() {
            assert_eq!(tile.neighbor(d).position(), d.delta());
        }
    }

    #[test]
    fn neighbor_at_coordinate_extremes_does_not_panic() {
        let tile = Tile::new(i32::MAX, 0);
        let east = tile.neighbor(Direction::East);
        assert_eq!(east, Tile::new(i32::MIN, 0));
        assert_eq!(east.neighbor(Direction::West), tile);
    }

    #[test]
    fn border_canonical_forms() {
        let tile = Tile::new(0, 0);
        assert_eq!(
            tile.border(Cardinal::North),
            Edge::new(0, 0, EdgeOrientation::North)
        );
        assert_eq!(
            tile.border(Cardinal::West),
            Edge::new(0, 0, EdgeOrientation::West)
        );
        assert_eq!(
            tile.border(Cardinal::East),
            Edge::new(1, 0, EdgeOrientation::West)
        );
        assert_eq!(
            tile.border(Cardinal::South),
            Edge::new(0, 1, EdgeOrientation::North)
        );
    }

    #[test]
    fn shared_borders_have_one_representation() {
        let tile = Tile::new(4, 7);
        for d in Cardinal::ALL {
            let other = tile.neighbor(d.direction());
            assert_eq!(tile.border(d), other.border(d.mirror()), "border {d:?}");
        }
    }

    #[test]
    fn corner_offsets() {
        let tile = Tile::new(0, 0);
        assert_eq!(tile.corner(Diagonal::NorthWest), Node::new(0, 0));
        assert_eq!(tile.corner(Diagonal::NorthEast), Node::new(1, 0));
        assert_eq!(tile.corner(Diagonal::SouthEast), Node::new(1, 1));
        assert_eq!(tile.corner(Diagonal::SouthWest), Node::new(0, 1));
    }

    #[test]
    fn diagonal_neighbours_share_a_corner() {
        let tile = Tile::new(3, 3);
        for d in Diagonal::ALL {
            let other = tile.neighbor(d.direction());
            assert_eq!(tile.corner(d), other.corner(d.mirror()));
        }
    }

    #[test]
    fn borders_and_corners_enumerate_four_each() {
        let tile = Tile::new(1, 1);
        let borders: Vec<_> = tile.borders().collect();
        assert_eq!(borders.len(), 4);
        assert_eq!(borders[0], (Cardinal::North, tile.border(Cardinal::North)));
        let corners: Vec<_> = tile.corners().map(|(_, n)| n).collect();
        assert_eq!(
            corners,
            vec![Node::new(2, 1), Node::new(2, 2), Node::new(1, 2), Node::new(1, 1)]
        );
    }
}
