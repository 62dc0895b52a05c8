//! The obstacle-bearing [`Grid`].

use rustc_hash::FxHashSet;

use crate::error::{GridError, Result};
use crate::geom::Point;
use crate::lattice::Lattice;

/// A lattice plus a set of blocked cell anchors.
///
/// The grid is owned by the caller and passed into every search; it holds no
/// search state. It must not change during a search, but may be edited
/// freely between searches (the usual flow of an interactive editor that
/// re-plans after every obstacle change).
///
/// Invariant: every stored obstacle is a valid cell anchor of the lattice.
/// Both construction and mutation enforce it.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    lattice: Lattice,
    obstacles: FxHashSet<Point>,
}

impl Grid {
    /// Create an obstacle-free grid over `lattice`.
    pub fn new(lattice: Lattice) -> Self {
        Self {
            lattice,
            obstacles: FxHashSet::default(),
        }
    }

    /// Create a grid with the given obstacle set.
    ///
    /// Fails with [`GridError::ObstacleOutOfBounds`] or
    /// [`GridError::MisalignedObstacle`] on the first coordinate that is not
    /// a valid cell anchor.
    pub fn with_obstacles(
        lattice: Lattice,
        obstacles: impl IntoIterator<Item = Point>,
    ) -> Result<Self> {
        let mut grid = Self::new(lattice);
        for p in obstacles {
            grid.add_obstacle(p)?;
        }
        Ok(grid)
    }

    /// The underlying coordinate space.
    #[inline]
    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    /// Number of blocked cells.
    #[inline]
    pub fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    /// Iterator over the blocked cell anchors, in no particular order.
    pub fn obstacles(&self) -> impl Iterator<Item = Point> + '_ {
        self.obstacles.iter().copied()
    }

    /// Whether `p` lies inside the grid bounds.
    #[inline]
    pub fn is_within_bounds(&self, p: Point) -> bool {
        self.lattice.contains(p)
    }

    /// Whether `p` is a blocked cell. O(1) average.
    #[inline]
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.obstacles.contains(&p)
    }

    /// Whether `p` is a valid, unblocked cell anchor.
    #[inline]
    pub fn is_free(&self, p: Point) -> bool {
        self.lattice.is_cell(p) && !self.is_obstacle(p)
    }

    /// Block the cell anchored at `p`.
    ///
    /// Validates the coordinate so the obstacle invariant holds. Inserting
    /// an already blocked cell is a no-op.
    pub fn add_obstacle(&mut self, p: Point) -> Result<()> {
        if !self.lattice.contains(p) {
            return Err(GridError::ObstacleOutOfBounds(p));
        }
        if !self.lattice.is_aligned(p) {
            return Err(GridError::MisalignedObstacle(p, self.lattice.cell_size()));
        }
        self.obstacles.insert(p);
        Ok(())
    }

    /// Unblock the cell anchored at `p`. Returns whether it was blocked.
    pub fn remove_obstacle(&mut self, p: Point) -> bool {
        self.obstacles.remove(&p)
    }

    /// Remove every obstacle.
    pub fn clear_obstacles(&mut self) {
        self.obstacles.clear();
    }

    /// Append the in-bounds 8-directional neighbors of `p` to `buf`.
    ///
    /// Delegates to [`Lattice::neighbors`]; obstacle filtering is left to
    /// the search layer so the two concerns stay separable.
    #[inline]
    pub fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.lattice.neighbors(p, buf);
    }

    /// Append the in-bounds cardinal neighbors of `p` to `buf`.
    #[inline]
    pub fn cardinal_neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.lattice.cardinal_neighbors(p, buf);
    }
}

#[cfg(feature = "serde")]
mod serde_impls {
    use super::Grid;
    use crate::geom::Point;
    use crate::lattice::Lattice;
    use serde::de::Error as _;

    #[derive(serde::Serialize, serde::Deserialize)]
    #[serde(rename = "Grid")]
    struct Repr {
        lattice: Lattice,
        obstacles: Vec<Point>,
    }

    impl serde::Serialize for Grid {
        fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            // Sorted so serialized output is byte-stable across runs.
            let mut obstacles: Vec<Point> = self.obstacles().collect();
            obstacles.sort();
            Repr {
                lattice: self.lattice,
                obstacles,
            }
            .serialize(serializer)
        }
    }

    impl<'de> serde::Deserialize<'de> for Grid {
        fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let r = Repr::deserialize(deserializer)?;
            Grid::with_obstacles(r.lattice, r.obstacles).map_err(D::Error::custom)
        }
    }
}
