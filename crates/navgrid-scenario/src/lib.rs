//! Randomized scenario generation for navgrid.
//!
//! Caller-side utilities for stress testing and benchmarking: rejection
//! sampling of obstacle sets and endpoint pairs over a lattice. Everything
//! here is a pure function of the supplied [`rand::Rng`], keeping the search
//! engine itself deterministic and independently testable. Seed the RNG for
//! reproducible scenarios.

use navgrid_core::{Grid, Lattice, Point};
use rand::{Rng, RngExt};
use rustc_hash::FxHashSet;

/// A uniformly random cell anchor of the lattice.
pub fn random_cell<R: Rng>(rng: &mut R, lattice: Lattice) -> Point {
    let col = rng.random_range(0..lattice.columns());
    let row = rng.random_range(0..lattice.rows());
    Point::new(col * lattice.cell_size(), row * lattice.cell_size())
}

/// Sample a set of distinct obstacle anchors.
///
/// `count` is capped at a quarter of the lattice's cells so generated
/// scenarios stay traversable. Rejection sampling; below the cap the
/// expected number of retries per obstacle stays small.
pub fn random_obstacles<R: Rng>(rng: &mut R, lattice: Lattice, count: usize) -> FxHashSet<Point> {
    let target = count.min(lattice.len() / 4);
    let mut obstacles = FxHashSet::default();
    while obstacles.len() < target {
        obstacles.insert(random_cell(rng, lattice));
    }
    obstacles
}

/// Sample (source, destination) pairs on the free cells of `grid`.
///
/// Endpoints avoid obstacles and every previously chosen endpoint, matching
/// the editor convention that a marker never shares a cell with anything
/// else. When the grid runs out of free cells the function returns the
/// pairs generated so far rather than sampling forever.
pub fn random_pairs<R: Rng>(rng: &mut R, grid: &Grid, count: usize) -> Vec<(Point, Point)> {
    let free = grid.lattice().len() - grid.obstacle_count();
    let mut used: FxHashSet<Point> = FxHashSet::default();
    let mut pairs = Vec::with_capacity(count);

    while pairs.len() < count && used.len() + 2 <= free {
        let source = random_free_cell(rng, grid, &used);
        used.insert(source);
        let destination = random_free_cell(rng, grid, &used);
        used.insert(destination);
        pairs.push((source, destination));
    }
    pairs
}

fn random_free_cell<R: Rng>(rng: &mut R, grid: &Grid, used: &FxHashSet<Point>) -> Point {
    loop {
        let p = random_cell(rng, grid.lattice());
        if !grid.is_obstacle(p) && !used.contains(&p) {
            return p;
        }
    }
}
