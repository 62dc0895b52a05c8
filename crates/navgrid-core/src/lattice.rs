//! The scaled coordinate [`Lattice`].
//!
//! Cells live on an integer lattice with spacing equal to the configured
//! cell size: a cell is identified by its top-left anchor, and valid anchors
//! satisfy `0 <= x < width`, `0 <= y < height` with both coordinates exact
//! multiples of the cell size. The cell size does not have to divide the
//! dimensions evenly; anchors inside the bounds are ordinary cells and the
//! out-of-grid remainder is simply unreachable.

use crate::error::{GridError, Result};
use crate::geom::Point;

/// Neighbor offsets in cell units, axis moves before diagonals.
///
/// The enumeration order is S, N, E, W, SE, NE, SW, NW (y grows down) and
/// is part of the public contract: breadth-first searches break ties between
/// equal-length paths according to it.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// A validated rectangular coordinate space.
///
/// Construction fails fast on non-positive dimensions or cell size; every
/// `Lattice` value in existence can therefore back a search.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Lattice {
    width: i32,
    height: i32,
    cell_size: i32,
}

impl Lattice {
    /// Create a new lattice.
    ///
    /// Fails with [`GridError::InvalidDimensions`] or
    /// [`GridError::InvalidCellSize`] when any field is not positive.
    pub fn new(width: i32, height: i32, cell_size: i32) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        if cell_size <= 0 {
            return Err(GridError::InvalidCellSize(cell_size));
        }
        Ok(Self {
            width,
            height,
            cell_size,
        })
    }

    /// Width of the coordinate space.
    #[inline]
    pub fn width(self) -> i32 {
        self.width
    }

    /// Height of the coordinate space.
    #[inline]
    pub fn height(self) -> i32 {
        self.height
    }

    /// Spacing between cell anchors.
    #[inline]
    pub fn cell_size(self) -> i32 {
        self.cell_size
    }

    /// Number of cell columns (anchors with `x < width`).
    #[inline]
    pub fn columns(self) -> i32 {
        (self.width + self.cell_size - 1) / self.cell_size
    }

    /// Number of cell rows (anchors with `y < height`).
    #[inline]
    pub fn rows(self) -> i32 {
        (self.height + self.cell_size - 1) / self.cell_size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(self) -> usize {
        (self.columns() as usize) * (self.rows() as usize)
    }

    /// Always false; a lattice cannot be constructed empty.
    #[inline]
    pub fn is_empty(self) -> bool {
        false
    }

    /// Whether `p` lies inside the bounds: `0 <= x < width`, `0 <= y < height`.
    #[inline]
    pub fn contains(self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Whether both coordinates of `p` are exact multiples of the cell size.
    #[inline]
    pub fn is_aligned(self, p: Point) -> bool {
        p.x % self.cell_size == 0 && p.y % self.cell_size == 0
    }

    /// Whether `p` is a valid cell anchor: in bounds and aligned.
    #[inline]
    pub fn is_cell(self, p: Point) -> bool {
        self.contains(p) && self.is_aligned(p)
    }

    /// Anchor of the cell containing an arbitrary in-bounds point.
    ///
    /// Returns `None` when `p` is outside the bounds. This is how raw input
    /// positions (e.g. a pointer location) map onto the lattice.
    #[inline]
    pub fn snap(self, p: Point) -> Option<Point> {
        if !self.contains(p) {
            return None;
        }
        Some(Point::new(
            (p.x / self.cell_size) * self.cell_size,
            (p.y / self.cell_size) * self.cell_size,
        ))
    }

    /// Convert a cell anchor to a flat row-major index.
    ///
    /// Returns `None` for points that are out of bounds or misaligned.
    #[inline]
    pub fn idx(self, p: Point) -> Option<usize> {
        if !self.is_cell(p) {
            return None;
        }
        let col = (p.x / self.cell_size) as usize;
        let row = (p.y / self.cell_size) as usize;
        Some(row * self.columns() as usize + col)
    }

    /// Convert a flat index back to a cell anchor.
    #[inline]
    pub fn point(self, idx: usize) -> Point {
        let cols = self.columns() as usize;
        let x = (idx % cols) as i32 * self.cell_size;
        let y = (idx / cols) as i32 * self.cell_size;
        Point::new(x, y)
    }

    /// Append the in-bounds 8-directional neighbors of `p` to `buf`.
    ///
    /// Candidates are the eight anchors offset by `(±cell_size, 0)`,
    /// `(0, ±cell_size)` and the four diagonal combinations, enumerated in
    /// the fixed order S, N, E, W, SE, NE, SW, NW. Only bounds filtering
    /// happens here; obstacle filtering belongs to the search layer. The
    /// caller clears `buf` before calling.
    pub fn neighbors(self, p: Point, buf: &mut Vec<Point>) {
        for (dx, dy) in NEIGHBOR_OFFSETS {
            let n = p.shift(dx * self.cell_size, dy * self.cell_size);
            if self.contains(n) {
                buf.push(n);
            }
        }
    }

    /// Append the in-bounds cardinal neighbors of `p` to `buf`.
    ///
    /// The first four candidates of [`neighbors`](Self::neighbors): S, N, E,
    /// W. Used for diagonal-free movement.
    pub fn cardinal_neighbors(self, p: Point, buf: &mut Vec<Point>) {
        for (dx, dy) in &NEIGHBOR_OFFSETS[..4] {
            let n = p.shift(dx * self.cell_size, dy * self.cell_size);
            if self.contains(n) {
                buf.push(n);
            }
        }
    }

    /// Row-major iterator over every cell anchor.
    #[inline]
    pub fn iter(self) -> LatticeIter {
        LatticeIter {
            lattice: self,
            cur: Point::ZERO,
        }
    }
}

impl IntoIterator for Lattice {
    type Item = Point;
    type IntoIter = LatticeIter;
    #[inline]
    fn into_iter(self) -> LatticeIter {
        self.iter()
    }
}

/// Row-major iterator over the cell anchors of a [`Lattice`].
#[derive(Clone, Debug)]
pub struct LatticeIter {
    lattice: Lattice,
    cur: Point,
}

impl Iterator for LatticeIter {
    type Item = Point;

    #[inline]
    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.lattice.height {
            return None;
        }
        let p = self.cur;
        self.cur.x += self.lattice.cell_size;
        if self.cur.x >= self.lattice.width {
            self.cur.x = 0;
            self.cur.y += self.lattice.cell_size;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cur.y >= self.lattice.height {
            return (0, Some(0));
        }
        let cols = self.lattice.columns() as usize;
        let cs = self.lattice.cell_size;
        let remaining_in_row = ((self.lattice.width - self.cur.x + cs - 1) / cs) as usize;
        let remaining_rows = ((self.lattice.height - self.cur.y + cs - 1) / cs) as usize - 1;
        let total = remaining_in_row + remaining_rows * cols;
        (total, Some(total))
    }
}

impl ExactSizeIterator for LatticeIter {}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Lattice;
    use serde::de::Error as _;

    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename = "Lattice")]
    struct Repr {
        width: i32,
        height: i32,
        cell_size: i32,
    }

    impl serde::Serialize for Lattice {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            Repr {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            }
            .serialize(serializer)
        }
    }

    // Deserialization goes through the validating constructor so a stored
    // lattice can never violate the construction invariants.
    impl<'de> serde::Deserialize<'de> for Lattice {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let r = Repr::deserialize(deserializer)?;
            Lattice::new(r.width, r.height, r.cell_size).map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            Lattice::new(0, 100, 50),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 100
            })
        );
        assert_eq!(
            Lattice::new(100, -1, 50),
            Err(GridError::InvalidDimensions {
                width: 100,
                height: -1
            })
        );
        assert_eq!(Lattice::new(100, 100, 0), Err(GridError::InvalidCellSize(0)));
    }

    #[test]
    fn columns_rows_round_up_on_ragged_dimensions() {
        // 120 wide at cell size 50: anchors 0, 50, 100 are all < 120.
        let lat = Lattice::new(120, 100, 50).unwrap();
        assert_eq!(lat.columns(), 3);
        assert_eq!(lat.rows(), 2);
        assert_eq!(lat.len(), 6);
        assert!(lat.is_cell(Point::new(100, 50)));
        assert!(!lat.contains(Point::new(150, 0)));
    }

    #[test]
    fn cell_size_larger_than_dimension() {
        let lat = Lattice::new(30, 30, 50).unwrap();
        assert_eq!(lat.columns(), 1);
        assert_eq!(lat.rows(), 1);
        assert!(lat.is_cell(Point::ZERO));
    }

    #[test]
    fn idx_point_round_trip() {
        let lat = Lattice::new(1000, 400, 50).unwrap();
        for i in 0..lat.len() {
            let p = lat.point(i);
            assert_eq!(lat.idx(p), Some(i));
        }
    }

    #[test]
    fn idx_rejects_misaligned_and_out_of_bounds() {
        let lat = Lattice::new(200, 100, 50).unwrap();
        assert_eq!(lat.idx(Point::new(25, 0)), None);
        assert_eq!(lat.idx(Point::new(0, 30)), None);
        assert_eq!(lat.idx(Point::new(200, 0)), None);
        assert_eq!(lat.idx(Point::new(-50, 0)), None);
        assert_eq!(lat.idx(Point::new(150, 50)), Some(7));
    }

    #[test]
    fn snap_maps_to_containing_cell() {
        let lat = Lattice::new(200, 100, 50).unwrap();
        assert_eq!(lat.snap(Point::new(74, 99)), Some(Point::new(50, 50)));
        assert_eq!(lat.snap(Point::new(0, 0)), Some(Point::ZERO));
        assert_eq!(lat.snap(Point::new(200, 50)), None);
        assert_eq!(lat.snap(Point::new(-1, 10)), None);
    }

    #[test]
    fn neighbors_enumerate_in_fixed_order() {
        let lat = Lattice::new(200, 150, 50).unwrap();
        let mut buf = Vec::new();
        lat.neighbors(Point::new(50, 50), &mut buf);
        assert_eq!(
            buf,
            vec![
                Point::new(50, 100),  // S
                Point::new(50, 0),    // N
                Point::new(100, 50),  // E
                Point::new(0, 50),    // W
                Point::new(100, 100), // SE
                Point::new(100, 0),   // NE
                Point::new(0, 100),   // SW
                Point::new(0, 0),     // NW
            ]
        );
    }

    #[test]
    fn neighbors_filter_out_of_bounds_at_corner() {
        let lat = Lattice::new(200, 100, 50).unwrap();
        let mut buf = Vec::new();
        lat.neighbors(Point::ZERO, &mut buf);
        // Only S, E, SE survive at the top-left corner, in that order.
        assert_eq!(
            buf,
            vec![Point::new(0, 50), Point::new(50, 0), Point::new(50, 50)]
        );
    }

    #[test]
    fn cardinal_neighbors_skip_diagonals() {
        let lat = Lattice::new(200, 150, 50).unwrap();
        let mut buf = Vec::new();
        lat.cardinal_neighbors(Point::new(50, 50), &mut buf);
        assert_eq!(
            buf,
            vec![
                Point::new(50, 100),
                Point::new(50, 0),
                Point::new(100, 50),
                Point::new(0, 50),
            ]
        );
    }

    #[test]
    fn iter_visits_every_cell_once() {
        let lat = Lattice::new(120, 100, 50).unwrap();
        let pts: Vec<_> = lat.iter().collect();
        assert_eq!(pts.len(), lat.len());
        assert_eq!(pts[0], Point::ZERO);
        assert_eq!(pts[2], Point::new(100, 0));
        assert_eq!(pts[5], Point::new(100, 50));
        for p in &pts {
            assert!(lat.is_cell(*p));
        }
    }

    #[test]
    fn iter_size_hint_is_exact() {
        let lat = Lattice::new(1000, 400, 50).unwrap();
        let mut it = lat.iter();
        assert_eq!(it.size_hint(), (160, Some(160)));
        it.next();
        assert_eq!(it.size_hint(), (159, Some(159)));
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn lattice_round_trip() {
        let lat = Lattice::new(1000, 400, 50).unwrap();
        let json = serde_json::to_string(&lat).unwrap();
        let back: Lattice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, lat);
    }

    #[test]
    fn lattice_deserialize_validates() {
        let err = serde_json::from_str::<Lattice>(r#"{"width":0,"height":400,"cell_size":50}"#)
            .unwrap_err();
        assert!(err.to_string().contains("dimensions must be positive"));
    }
}
