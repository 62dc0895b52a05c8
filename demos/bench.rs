//! Performance harness: search cost under growing distance, agent count,
//! and grid resolution.
//!
//! Run: cargo run --bin bench

use std::time::Instant;

use navgrid_core::{Grid, Lattice, Point};
use navgrid_scenario::random_pairs;
use navgrid_search::{CardinalGrid, Navigator, manhattan};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> navgrid_core::Result<()> {
    single_search_cost()?;
    batch_growth()?;
    resolution_scaling()?;
    cardinal_distance_scaling()?;
    Ok(())
}

fn banner(title: &str) {
    println!();
    println!("{}", "=".repeat(60));
    println!("{title}");
    println!("{}", "=".repeat(60));
}

/// Cost of a single search as the target moves away, obstacle-free.
fn single_search_cost() -> navgrid_core::Result<()> {
    banner("TEST 1: SINGLE SEARCH COST VS DISTANCE");

    let lattice = Lattice::new(1000, 400, 50)?;
    let grid = Grid::new(lattice);
    let mut nav = Navigator::new(lattice);

    for distance in [100, 200, 400, 600, 800] {
        let from = Point::new(0, 0);
        let to = Point::new(distance.min(lattice.width() - lattice.cell_size()), 0);

        let start = Instant::now();
        let result = nav.find_path(&grid, from, to);
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;

        println!(
            "Distance: {distance} | Time: {elapsed:.3}ms | Visited: {} | Path length: {}",
            result.visited,
            result.path.as_ref().map_or(0, Vec::len),
        );
    }
    Ok(())
}

/// Total cost growth as more agents request paths in one batch.
fn batch_growth() -> navgrid_core::Result<()> {
    banner("TEST 2: GROWTH WITH MULTIPLE AGENTS");

    let lattice = Lattice::new(1000, 400, 50)?;
    let grid = Grid::new(lattice);
    let mut nav = Navigator::new(lattice);

    // Fixed seeded pairs so runs are comparable.
    let mut rng = StdRng::seed_from_u64(42);
    let pairs = random_pairs(&mut rng, &grid, 20);

    for agents in [1usize, 2, 5, 10, 15, 20] {
        let start = Instant::now();
        let results = nav.find_paths(&grid, &pairs[..agents]);
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;

        let visited: usize = results.iter().map(|r| r.visited).sum();
        println!(
            "Agents: {agents} | Total time: {elapsed:.3}ms | Avg time: {:.3}ms | Total visited: {visited}",
            elapsed / agents as f64,
        );
    }
    Ok(())
}

/// Cost growth as the cell size shrinks over a fixed area.
fn resolution_scaling() -> navgrid_core::Result<()> {
    banner("TEST 3: GROWTH WITH GRID RESOLUTION");

    let mut nav = Navigator::new(Lattice::new(1000, 400, 100)?);

    for cell_size in [100, 50, 25, 20, 10] {
        let lattice = Lattice::new(1000, 400, cell_size)?;
        let grid = Grid::new(lattice);
        let from = Point::new(0, 0);
        let to = Point::new(
            (lattice.columns() - 1) * cell_size,
            (lattice.rows() - 1) * cell_size,
        );

        let start = Instant::now();
        let result = nav.find_path(&grid, from, to);
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;

        println!(
            "Cell size: {cell_size} | Cells: {} | Time: {elapsed:.3}ms | Visited: {} | Path length: {}",
            lattice.len(),
            result.visited,
            result.path.as_ref().map_or(0, Vec::len),
        );
    }
    Ok(())
}

/// Frontier growth with distance under cardinal-only movement, where BFS
/// exploration is widest.
fn cardinal_distance_scaling() -> navgrid_core::Result<()> {
    banner("TEST 4: SEARCH GROWTH WITH DISTANCE (CARDINAL ONLY)");

    let lattice = Lattice::new(2000, 2000, 50)?;
    let grid = Grid::new(lattice);
    let mut nav = Navigator::new(lattice);
    let edge = lattice.width() - lattice.cell_size();

    for distance in [200, 400, 800, 1200, 1600, 2000] {
        let from = Point::new(0, 0);
        let to = Point::new(distance.min(edge), distance.min(edge));

        let start = Instant::now();
        let result = nav.find_path(&CardinalGrid(&grid), from, to);
        let elapsed = start.elapsed().as_secs_f64() * 1000.0;

        println!(
            "Target: {distance} | Manhattan: {} | Time: {elapsed:.3}ms | Visited: {} | Path length: {}",
            manhattan(from, to),
            result.visited,
            result.path.as_ref().map_or(0, Vec::len),
        );
    }
    Ok(())
}
