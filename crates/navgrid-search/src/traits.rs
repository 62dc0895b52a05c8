use navgrid_core::{Grid, Lattice, Point};

/// Search interface over a grid — geometry, adjacency, and blocking.
pub trait PathGrid {
    /// The coordinate space searches run in.
    fn lattice(&self) -> Lattice;

    /// Append candidate-valid (in-bounds, not obstacle-filtered) neighbors
    /// of `p` into `buf`. The caller clears `buf` before calling. The
    /// enumeration order must be fixed; it decides ties between
    /// equal-length paths.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);

    /// Whether `p` is blocked.
    fn is_obstacle(&self, p: Point) -> bool;
}

impl PathGrid for Grid {
    fn lattice(&self) -> Lattice {
        Grid::lattice(self)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        Grid::neighbors(self, p, buf);
    }

    fn is_obstacle(&self, p: Point) -> bool {
        Grid::is_obstacle(self, p)
    }
}

/// A 4-directional view of a grid: same bounds and obstacles, no diagonal
/// moves.
pub struct CardinalGrid<'a>(pub &'a Grid);

impl PathGrid for CardinalGrid<'_> {
    fn lattice(&self) -> Lattice {
        self.0.lattice()
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        self.0.cardinal_neighbors(p, buf);
    }

    fn is_obstacle(&self, p: Point) -> bool {
        self.0.is_obstacle(p)
    }
}
