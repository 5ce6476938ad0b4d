//! Half-open rectangular coordinate regions.

use crate::error::GridError;
use crate::vector::Vector2D;
use std::fmt;

/// An axis-aligned half-open rectangle `[min.q, max.q) x [min.r, max.r)`.
///
/// Bounded spaces serve two purposes: validity checks (is this coordinate
/// part of the grid?) and dense addressing. Coordinates inside the space
/// are ranked row-major relative to `min`, so the ranks of a space with
/// `cols * rows` cells are exactly `0..size()`.
///
/// Immutable after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BoundedSpace2D {
    min: Vector2D,
    max: Vector2D,
}

impl BoundedSpace2D {
    /// Build a space from two arbitrary opposite corners.
    ///
    /// The corners are normalized so that `min <= max` on both axes. The
    /// larger corner is exclusive.
    pub fn new(a: Vector2D, b: Vector2D) -> Self {
        Self {
            min: Vector2D::new(a.q.min(b.q), a.r.min(b.r)),
            max: Vector2D::new(a.q.max(b.q), a.r.max(b.r)),
        }
    }

    /// A space anchored at the origin: `[0, size.q) x [0, size.r)`.
    pub fn from_origin(size: Vector2D) -> Self {
        Self::new(Vector2D::ORIGIN, size)
    }

    /// Inclusive lower corner.
    pub fn min(&self) -> Vector2D {
        self.min
    }

    /// Exclusive upper corner.
    pub fn max(&self) -> Vector2D {
        self.max
    }

    /// Width (number of distinct `q` values).
    pub fn cols(&self) -> u32 {
        (i64::from(self.max.q) - i64::from(self.min.q)) as u32
    }

    /// Height (number of distinct `r` values).
    pub fn rows(&self) -> u32 {
        (i64::from(self.max.r) - i64::from(self.min.r)) as u32
    }

    /// Number of coordinates in the space.
    pub fn size(&self) -> usize {
        self.cols() as usize * self.rows() as usize
    }

    /// `true` if the space contains no coordinates.
    pub fn is_empty(&self) -> bool {
        self.cols() == 0 || self.rows() == 0
    }

    /// Membership test. Both upper bounds are exclusive.
    pub fn includes(&self, v: Vector2D) -> bool {
        v.q >= self.min.q && v.q < self.max.q && v.r >= self.min.r && v.r < self.max.r
    }

    /// Translate a global coordinate into space-local coordinates
    /// (relative to `min`).
    ///
    /// Wraps for spaces wider than `i32::MAX`; use [`rank`](Self::rank)
    /// for dense addressing.
    pub fn to_local(&self, v: Vector2D) -> Vector2D {
        v - self.min
    }

    /// Translate a space-local coordinate back to global coordinates.
    pub fn to_global(&self, v: Vector2D) -> Vector2D {
        v + self.min
    }

    /// Fail with [`GridError::OutOfBounds`] unless `v` is in the space.
    pub fn check(&self, v: Vector2D) -> Result<(), GridError> {
        if self.includes(v) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                coord: v,
                bounds: *self,
            })
        }
    }

    /// Row-major rank of `v`, or `None` if it lies outside the space.
    pub fn rank(&self, v: Vector2D) -> Option<usize> {
        if !self.includes(v) {
            return None;
        }
        // Offsets are taken in i64: a space can span more than i32::MAX.
        let dq = (i64::from(v.q) - i64::from(self.min.q)) as usize;
        let dr = (i64::from(v.r) - i64::from(self.min.r)) as usize;
        Some(dr * self.cols() as usize + dq)
    }

    /// Every coordinate in the space, row by row.
    ///
    /// The iterator holds a copy of the bounds, not a borrow.
    pub fn iter(&self) -> impl Iterator<Item = Vector2D> + Clone {
        let (min, max) = (self.min, self.max);
        (min.r..max.r).flat_map(move |r| (min.q..max.q).map(move |q| Vector2D::new(q, r)))
    }
}

impl fmt::Display for BoundedSpace2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}) x [{}, {})",
            self.min.q, self.max.q, self.min.r, self.max.r
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn v(q: i32, r: i32) -> Vector2D {
        Vector2D::new(q, r)
    }

    #[test]
    fn new_normalizes_corners() {
        let b = BoundedSpace2D::new(v(0, 4), v(3, 0));
        assert_eq!(b.min(), v(0, 0));
        assert_eq!(b.max(), v(3, 4));
    }

    #[test]
    fn cols_rows_size() {
        let b = BoundedSpace2D::from_origin(v(3, 4));
        assert_eq!(b.cols(), 3);
        assert_eq!(b.rows(), 4);
        assert_eq!(b.size(), 12);
        assert!(!b.is_empty());
    }

    #[test]
    fn includes_is_half_open() {
        let size = v(3, 4);
        let b = BoundedSpace2D::from_origin(size);
        assert!(!b.includes(v(-1, -1)));
        assert!(b.includes(v(0, 0)));
        assert!(b.includes(v(2, 3)));
        assert!(!b.includes(size));
        assert!(!b.includes(v(3, 0)));
        assert!(!b.includes(v(0, 4)));
    }

    #[test]
    fn zero_width_space_is_empty() {
        let b = BoundedSpace2D::from_origin(v(0, 5));
        assert!(b.is_empty());
        assert_eq!(b.size(), 0);
        assert!(!b.includes(v(0, 0)));
        assert_eq!(b.iter().count(), 0);
    }

    #[test]
    fn local_global_translation() {
        let b = BoundedSpace2D::new(v(-2, 5), v(4, 9));
        assert_eq!(b.to_local(v(-2, 5)), v(0, 0));
        assert_eq!(b.to_local(v(1, 7)), v(3, 2));
        assert_eq!(b.to_global(v(3, 2)), v(1, 7));
    }

    #[test]
    fn check_reports_out_of_bounds() {
        let b = BoundedSpace2D::from_origin(v(3, 3));
        assert!(b.check(v(2, 2)).is_ok());
        assert_eq!(
            b.check(v(3, 0)),
            Err(GridError::OutOfBounds {
                coord: v(3, 0),
                bounds: b,
            })
        );
    }

    #[test]
    fn iter_is_row_major_and_matches_rank() {
        let b = BoundedSpace2D::new(v(1, 1), v(4, 3));
        let coords: Vec<_> = b.iter().collect();
        assert_eq!(coords.len(), b.size());
        assert_eq!(coords[0], v(1, 1));
        assert_eq!(coords[1], v(2, 1));
        assert_eq!(coords[3], v(1, 2));
        for (i, c) in coords.iter().enumerate() {
            assert_eq!(b.rank(*c), Some(i));
        }
        assert_eq!(b.rank(v(0, 0)), None);
    }

    #[test]
    fn display_format() {
        let b = BoundedSpace2D::new(v(-1, 0), v(2, 5));
        assert_eq!(b.to_string(), "[-1, 2) x [0, 5)");
    }

    #[test]
    fn rank_spans_the_full_i32_range() {
        let b = BoundedSpace2D::new(v(i32::MIN, 0), v(i32::MAX, 2));
        assert_eq!(b.cols(), u32::MAX);
        assert_eq!(b.rank(v(i32::MIN, 0)), Some(0));
        assert_eq!(b.rank(v(i32::MAX - 1, 0)), Some(u32::MAX as usize - 1));
        assert_eq!(b.rank(v(i32::MIN, 1)), Some(u32::MAX as usize));
        assert_eq!(b.rank(v(i32::MAX, 0)), None);
    }

    proptest! {
        #[test]
        fn includes_matches_local_range(
            min_q in -20i32..20, min_r in -20i32..20,
            w in 0i32..15, h in 0i32..15,
            q in -40i32..40, r in -40i32..40,
        ) {
            let b = BoundedSpace2D::new(v(min_q, min_r), v(min_q + w, min_r + h));
            let local = b.to_local(v(q, r));
            let expected = local.q >= 0 && local.q < w && local.r >= 0 && local.r < h;
            prop_assert_eq!(b.includes(v(q, r)), expected);
            prop_assert_eq!(b.rank(v(q, r)).is_some(), expected);
            prop_assert_eq!(b.to_global(local), v(q, r));
        }
    }
}
