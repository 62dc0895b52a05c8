//! Walkthrough demo: a hand-built grid and a seeded random scenario.
//!
//! Run: cargo run --bin demo

use navgrid_core::{Grid, Lattice, Point};
use navgrid_scenario::{random_obstacles, random_pairs};
use navgrid_search::Navigator;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> navgrid_core::Result<()> {
    // A 4x3 grid with an obstacle column that leaves one gap: the path has
    // to detour through it.
    let lattice = Lattice::new(200, 150, 50)?;
    let grid = Grid::with_obstacles(lattice, [Point::new(50, 0), Point::new(50, 50)])?;
    let mut nav = Navigator::new(lattice);

    let from = Point::new(0, 0);
    let to = Point::new(150, 50);
    let result = nav.find_path(&grid, from, to);
    println!("Fixed scenario: {from} -> {to}");
    match &result.path {
        Some(path) => {
            let steps: Vec<String> = path.iter().map(|p| p.to_string()).collect();
            println!("  path ({} edges): {}", path.len() - 1, steps.join(" "));
        }
        None => println!("  unreachable"),
    }
    println!("  visited {} cells", result.visited);

    // A reproducible random scenario on the original demo's grid size.
    let lattice = Lattice::new(1000, 400, 50)?;
    let mut rng = StdRng::seed_from_u64(42);
    let grid = Grid::with_obstacles(lattice, random_obstacles(&mut rng, lattice, 40))?;
    let pairs = random_pairs(&mut rng, &grid, 5);

    println!();
    println!(
        "Random scenario: {} obstacles, {} pairs",
        grid.obstacle_count(),
        pairs.len()
    );
    let results = nav.find_paths(&grid, &pairs);
    for (result, (from, to)) in results.iter().zip(&pairs) {
        match result.edges() {
            Some(edges) => println!(
                "  {from} -> {to}: {edges} edges, visited {}",
                result.visited
            ),
            None => println!("  {from} -> {to}: unreachable, visited {}", result.visited),
        }
    }

    Ok(())
}
