use navgrid_core::Point;

use crate::navigator::{Navigator, SearchResult};
use crate::traits::PathGrid;

impl Navigator {
    /// Run one independent search per (source, destination) pair.
    ///
    /// Results come back in input order, one per pair. Every search starts
    /// from a fresh logical visited set, so the outcome for a pair never
    /// depends on which other pairs were searched, or in which order.
    /// Pairing policy is the caller's: exactly the pairs given are
    /// processed, nothing is inferred.
    pub fn find_paths<P: PathGrid>(
        &mut self,
        grid: &P,
        pairs: &[(Point, Point)],
    ) -> Vec<SearchResult> {
        pairs
            .iter()
            .map(|&(from, to)| self.find_path(grid, from, to))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use navgrid_core::{Grid, Lattice, Point};

    use crate::navigator::Navigator;

    fn grid() -> Grid {
        let lat = Lattice::new(400, 200, 50).unwrap();
        Grid::with_obstacles(lat, [Point::new(100, 0), Point::new(100, 50)]).unwrap()
    }

    #[test]
    fn batch_matches_individual_searches_in_either_order() {
        let g = grid();
        let pairs = [
            (Point::new(0, 0), Point::new(350, 150)),
            (Point::new(50, 150), Point::new(300, 0)),
            (Point::new(0, 50), Point::new(100, 50)), // destination on obstacle
        ];

        let mut nav = Navigator::new(g.lattice());
        let batch = nav.find_paths(&g, &pairs);
        assert_eq!(batch.len(), pairs.len());

        let mut fresh = Navigator::new(g.lattice());
        for (i, &(from, to)) in pairs.iter().enumerate() {
            assert_eq!(batch[i], fresh.find_path(&g, from, to));
        }

        // Reversed batch order changes nothing about individual outcomes.
        let reversed: Vec<_> = pairs.iter().rev().copied().collect();
        let mut rev_nav = Navigator::new(g.lattice());
        let rev_batch = rev_nav.find_paths(&g, &reversed);
        for i in 0..pairs.len() {
            assert_eq!(rev_batch[pairs.len() - 1 - i], batch[i]);
        }
    }

    #[test]
    fn empty_batch_yields_empty_results() {
        let g = grid();
        let mut nav = Navigator::new(g.lattice());
        assert!(nav.find_paths(&g, &[]).is_empty());
    }

    #[test]
    fn duplicate_pairs_get_identical_results() {
        let g = grid();
        let pair = (Point::new(0, 0), Point::new(350, 150));
        let mut nav = Navigator::new(g.lattice());
        let batch = nav.find_paths(&g, &[pair, pair, pair]);
        assert_eq!(batch[0], batch[1]);
        assert_eq!(batch[1], batch[2]);
    }
}
