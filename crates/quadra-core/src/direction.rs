//! Compass directions and their coordinate deltas.
//!
//! [`Direction`] covers all eight neighbours of a square cell. The two
//! classes are also available as their own types, [`Cardinal`] and
//! [`Diagonal`], so that operations which only make sense for one class
//! (a tile's *border* is cardinal, its *corner* is diagonal) can say so in
//! their signatures.

use crate::vector::Vector2D;
use std::fmt;

/// Coordinate offset for each [`Direction`], indexed by discriminant.
const DELTAS: [Vector2D; 8] = [
    Vector2D::new(0, -1),  // North
    Vector2D::new(1, 0),   // East
    Vector2D::new(0, 1),   // South
    Vector2D::new(-1, 0),  // West
    Vector2D::new(1, -1),  // NorthEast
    Vector2D::new(1, 1),   // SouthEast
    Vector2D::new(-1, 1),  // SouthWest
    Vector2D::new(-1, -1), // NorthWest
];

/// Opposite of each [`Direction`], indexed by discriminant.
const MIRRORS: [Direction; 8] = [
    Direction::South,
    Direction::West,
    Direction::North,
    Direction::East,
    Direction::SouthWest,
    Direction::NorthWest,
    Direction::NorthEast,
    Direction::SouthEast,
];

/// One of the eight compass directions on a square grid.
///
/// Discriminants 0–3 are the cardinal directions in clockwise order, 4–7
/// the diagonals in clockwise order starting from north-east.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// `(0, -1)`.
    North = 0,
    /// `(1, 0)`.
    East = 1,
    /// `(0, 1)`.
    South = 2,
    /// `(-1, 0)`.
    West = 3,
    /// `(1, -1)`.
    NorthEast = 4,
    /// `(1, 1)`.
    SouthEast = 5,
    /// `(-1, 1)`.
    SouthWest = 6,
    /// `(-1, -1)`.
    NorthWest = 7,
}

impl Direction {
    /// The cardinal directions in discriminant order.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The diagonal directions in discriminant order.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// All eight directions, clockwise from north.
    ///
    /// Each cardinal direction is immediately followed by the diagonal
    /// 45° further clockwise. Neighbour enumeration everywhere in the
    /// workspace uses this order.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Numeric discriminant (0–7).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Inverse of [`index`](Self::index). Returns `None` for values above 7.
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::North),
            1 => Some(Self::East),
            2 => Some(Self::South),
            3 => Some(Self::West),
            4 => Some(Self::NorthEast),
            5 => Some(Self::SouthEast),
            6 => Some(Self::SouthWest),
            7 => Some(Self::NorthWest),
            _ => None,
        }
    }

    /// The unit offset this direction moves a coordinate by.
    pub const fn delta(self) -> Vector2D {
        DELTAS[self as usize]
    }

    /// `true` for North, East, South and West.
    pub const fn is_cardinal(self) -> bool {
        (self as u8) < 4
    }

    /// `true` for the four diagonal directions.
    pub const fn is_diagonal(self) -> bool {
        !self.is_cardinal()
    }

    /// The opposite direction: a two-step rotation within the same class.
    ///
    /// `v + d.delta() + d.mirror().delta() == v` for every direction `d`.
    pub const fn mirror(self) -> Self {
        MIRRORS[self as usize]
    }

    /// Narrow to a [`Cardinal`], if this is one.
    pub const fn as_cardinal(self) -> Option<Cardinal> {
        match self {
            Self::North => Some(Cardinal::North),
            Self::East => Some(Cardinal::East),
            Self::South => Some(Cardinal::South),
            Self::West => Some(Cardinal::West),
            _ => None,
        }
    }

    /// Narrow to a [`Diagonal`], if this is one.
    pub const fn as_diagonal(self) -> Option<Diagonal> {
        match self {
            Self::NorthEast => Some(Diagonal::NorthEast),
            Self::SouthEast => Some(Diagonal::SouthEast),
            Self::SouthWest => Some(Diagonal::SouthWest),
            Self::NorthWest => Some(Diagonal::NorthWest),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::North => "north",
            Self::East => "east",
            Self::South => "south",
            Self::West => "west",
            Self::NorthEast => "north-east",
            Self::SouthEast => "south-east",
            Self::SouthWest => "south-west",
            Self::NorthWest => "north-west",
        };
        f.write_str(name)
    }
}

/// A cardinal direction. Used where only orthogonal steps are meaningful,
/// e.g. selecting one of a tile's four borders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Cardinal {
    /// `(0, -1)`.
    North = 0,
    /// `(1, 0)`.
    East = 1,
    /// `(0, 1)`.
    South = 2,
    /// `(-1, 0)`.
    West = 3,
}

impl Cardinal {
    /// All cardinal directions, clockwise from north.
    pub const ALL: [Cardinal; 4] = [
        Cardinal::North,
        Cardinal::East,
        Cardinal::South,
        Cardinal::West,
    ];

    /// Position within [`Cardinal::ALL`] (0–3). Used to index offset tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Widen to a [`Direction`].
    pub const fn direction(self) -> Direction {
        match self {
            Self::North => Direction::North,
            Self::East => Direction::East,
            Self::South => Direction::South,
            Self::West => Direction::West,
        }
    }

    /// The unit offset this direction moves a coordinate by.
    pub const fn delta(self) -> Vector2D {
        self.direction().delta()
    }

    /// The opposite cardinal direction.
    pub const fn mirror(self) -> Self {
        Self::ALL[(self as usize + 2) % 4]
    }
}

impl From<Cardinal> for Direction {
    fn from(c: Cardinal) -> Self {
        c.direction()
    }
}

/// A diagonal direction. Used where only corner-wise steps are meaningful,
/// e.g. selecting one of a tile's four corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Diagonal {
    /// `(1, -1)`.
    NorthEast = 0,
    /// `(1, 1)`.
    SouthEast = 1,
    /// `(-1, 1)`.
    SouthWest = 2,
    /// `(-1, -1)`.
    NorthWest = 3,
}

impl Diagonal {
    /// All diagonal directions, clockwise from north-east.
    pub const ALL: [Diagonal; 4] = [
        Diagonal::NorthEast,
        Diagonal::SouthEast,
        Diagonal::SouthWest,
        Diagonal::NorthWest,
    ];

    /// Position within [`Diagonal::ALL`] (0–3). Used to index offset tables.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Widen to a [`Direction`].
    pub const fn direction(self) -> Direction {
        match self {
            Self::NorthEast => Direction::NorthEast,
            Self::SouthEast => Direction::SouthEast,
            Self::SouthWest => Direction::SouthWest,
            Self::NorthWest => Direction::NorthWest,
        }
    }

    /// The unit offset this direction moves a coordinate by.
    pub const fn delta(self) -> Vector2D {
        self.direction().delta()
    }

    /// The opposite diagonal direction.
    pub const fn mirror(self) -> Self {
        Self::ALL[(self as usize + 2) % 4]
    }
}

impl From<Diagonal> for Direction {
    fn from(d: Diagonal) -> Self {
        d.direction()
    }
}

/// The four cardinal directions, clockwise from north.
///
/// Each call returns a fresh iterator; clone it to walk the sequence twice.
pub fn cardinal_directions() -> std::array::IntoIter<Cardinal, 4> {
    Cardinal::ALL.into_iter()
}

/// The four diagonal directions, clockwise from north-east.
pub fn diagonal_directions() -> std::array::IntoIter<Diagonal, 4> {
    Diagonal::ALL.into_iter()
}

/// All eight directions in [`Direction::ALL`] order.
pub fn all_directions() -> std::array::IntoIter<Direction, 8> {
    Direction::ALL.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn cardinal_directions_in_index_order() {
        let got: Vec<u8> = cardinal_directions().map(|c| c.direction().index()).collect();
        assert_eq!(got, vec![0, 1, 2, 3]);
    }

    #[test]
    fn diagonal_directions_in_index_order() {
        let got: Vec<u8> = diagonal_directions().map(|d| d.direction().index()).collect();
        assert_eq!(got, vec![4, 5, 6, 7]);
    }

    #[test]
    fn all_directions_interleave_classes() {
        let got: Vec<u8> = all_directions().map(Direction::index).collect();
        assert_eq!(got, vec![0, 4, 1, 5, 2, 6, 3, 7]);
    }

    #[test]
    fn direction_iterators_are_restartable() {
        let iter = all_directions();
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
        assert_eq!(all_directions().count(), 8);
    }

    #[test]
    fn classification_partitions_directions() {
        for d in Direction::CARDINAL {
            assert!(d.is_cardinal());
            assert!(!d.is_diagonal());
            assert!(d.as_cardinal().is_some());
            assert!(d.as_diagonal().is_none());
        }
        for d in Direction::DIAGONAL {
            assert!(!d.is_cardinal());
            assert!(d.is_diagonal());
            assert!(d.as_cardinal().is_none());
            assert!(d.as_diagonal().is_some());
        }
    }

    #[test]
    fn mirror_cancels_delta() {
        for d in all_directions() {
            let m = d.mirror();
            assert_eq!(d.is_cardinal(), m.is_cardinal(), "{d} mirrored across classes");
            assert_eq!(Vector2D::ORIGIN + d.delta() + m.delta(), Vector2D::ORIGIN);
        }
    }

    #[test]
    fn mirror_pairs_opposites() {
        use Direction::*;
        let pairs = [
            (North, South),
            (East, West),
            (NorthEast, SouthWest),
            (SouthEast, NorthWest),
        ];
        for (a, b) in pairs {
            assert_eq!(a.mirror(), b);
            assert_eq!(b.mirror(), a);
        }
    }

    #[test]
    fn typed_mirrors_agree_with_direction_mirror() {
        for c in cardinal_directions() {
            assert_eq!(c.mirror().direction(), c.direction().mirror());
        }
        for d in diagonal_directions() {
            assert_eq!(d.mirror().direction(), d.direction().mirror());
        }
    }

    #[test]
    fn narrowing_round_trips() {
        for c in cardinal_directions() {
            assert_eq!(Direction::from(c).as_cardinal(), Some(c));
        }
        for d in diagonal_directions() {
            assert_eq!(Direction::from(d).as_diagonal(), Some(d));
        }
    }

    #[test]
    fn from_index_rejects_out_of_range() {
        for d in all_directions() {
            assert_eq!(Direction::from_index(d.index()), Some(d));
        }
        assert_eq!(Direction::from_index(8), None);
    }

    #[test]
    fn diagonal_delta_is_sum_of_flanking_cardinals() {
        assert_eq!(
            Direction::NorthEast.delta(),
            Direction::North.delta() + Direction::East.delta()
        );
        assert_eq!(
            Direction::SouthWest.delta(),
            Direction::South.delta() + Direction::West.delta()
        );
    }

    proptest! {
        #[test]
        fn mirror_is_an_involution(q in -1000i32..1000, r in -1000i32..1000, i in 0u8..8) {
            let d = Direction::from_index(i).unwrap();
            let v = Vector2D::new(q, r);
            prop_assert_eq!(d.mirror().mirror(), d);
            prop_assert_eq!(v + d.delta() + d.mirror().delta(), v);
        }
    }
}
