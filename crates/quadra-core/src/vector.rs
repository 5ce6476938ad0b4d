//! The [`Vector2D`] coordinate primitive.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

/// An integer coordinate pair `(q, r)`.
///
/// `q` grows eastward (columns) and `r` grows southward (rows). Every grid
/// entity (tiles, nodes, edges) is positioned by a `Vector2D`, and all
/// adjacency is expressed as vector addition.
///
/// Addition and subtraction wrap at the `i32` boundary instead of
/// panicking. Coordinates inside a [`BoundedSpace2D`] and their immediate
/// neighbours never reach it, since grid construction rejects spaces that
/// would.
///
/// [`BoundedSpace2D`]: crate::BoundedSpace2D
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vector2D {
    /// Column coordinate.
    pub q: i32,
    /// Row coordinate.
    pub r: i32,
}

impl Vector2D {
    /// The coordinate `(0, 0)`.
    pub const ORIGIN: Self = Self { q: 0, r: 0 };

    /// Create a vector from its components.
    pub const fn new(q: i32, r: i32) -> Self {
        Self { q, r }
    }
}

impl Add for Vector2D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            q: self.q.wrapping_add(rhs.q),
            r: self.r.wrapping_add(rhs.r),
        }
    }
}

impl AddAssign for Vector2D {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sub for Vector2D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self {
            q: self.q.wrapping_sub(rhs.q),
            r: self.r.wrapping_sub(rhs.r),
        }
    }
}

impl From<(i32, i32)> for Vector2D {
    fn from((q, r): (i32, i32)) -> Self {
        Self { q, r }
    }
}

impl From<Vector2D> for (i32, i32) {
    fn from(v: Vector2D) -> Self {
        (v.q, v.r)
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.q, self.r)
    }
}
