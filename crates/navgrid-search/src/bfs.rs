use navgrid_core::Point;

use crate::navigator::{Navigator, SearchResult};
use crate::traits::PathGrid;

impl Navigator {
    /// Compute the shortest path from `from` to `to` over `grid`.
    ///
    /// Breadth-first search over the grid's adjacency, skipping obstacles.
    /// When a path exists the result is edge-count-minimal (diagonal and
    /// axis moves both count as one edge) and deterministic: ties between
    /// equal-length paths are broken by the grid's fixed neighbor
    /// enumeration order. The source is the first element of a returned
    /// path, the destination the last; `from == to` yields the
    /// single-element path.
    ///
    /// Degenerate endpoints (out of bounds, misaligned, or on an obstacle)
    /// produce an immediate "no path" with a visited count of zero instead
    /// of an error; the engine cannot correct stale caller coordinates.
    ///
    /// `visited` in the result counts the cells dequeued from the frontier,
    /// including the destination when it is found. An exhausted frontier
    /// without reaching the destination reports every cell reachable from
    /// the source.
    pub fn find_path<P: PathGrid>(&mut self, grid: &P, from: Point, to: Point) -> SearchResult {
        self.find_path_bounded(grid, from, to, usize::MAX)
    }

    /// [`find_path`](Self::find_path) with a visited-count ceiling.
    ///
    /// The search gives up once `max_visited` cells have been dequeued
    /// without reaching the destination, reporting "no path" with
    /// `visited == max_visited`. A destination dequeued exactly on the
    /// budget still counts as found.
    pub fn find_path_bounded<P: PathGrid>(
        &mut self,
        grid: &P,
        from: Point,
        to: Point,
        max_visited: usize,
    ) -> SearchResult {
        if grid.lattice() != self.lattice {
            self.set_lattice(grid.lattice());
        }

        let (Some(start), Some(goal)) = (self.idx(from), self.idx(to)) else {
            log::warn!("search endpoint is not a valid cell: {from} -> {to}");
            return SearchResult::no_path(0);
        };
        if grid.is_obstacle(from) || grid.is_obstacle(to) {
            log::warn!("search endpoint sits on an obstacle: {from} -> {to}");
            return SearchResult::no_path(0);
        }
        if start == goal {
            return SearchResult {
                path: Some(vec![from]),
                visited: 1,
            };
        }

        // Bump generation to lazily invalidate all per-cell state.
        self.generation = self.generation.wrapping_add(1);
        let cur_gen = self.generation;

        self.nodes[start].generation = cur_gen;
        self.nodes[start].parent = usize::MAX;
        self.queue.clear();
        self.queue.push_back(start);

        let mut visited = 0usize;
        let mut found = false;
        let mut nbuf = std::mem::take(&mut self.nbuf);

        while let Some(ci) = self.queue.pop_front() {
            visited += 1;
            if ci == goal {
                found = true;
                break;
            }
            if visited >= max_visited {
                break;
            }

            let cp = self.point(ci);
            nbuf.clear();
            grid.neighbors(cp, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = self.idx(np) else {
                    continue;
                };
                if self.nodes[ni].generation == cur_gen {
                    continue;
                }
                if grid.is_obstacle(np) {
                    continue;
                }
                // Discovery stamp at enqueue keeps each cell in the
                // frontier at most once.
                self.nodes[ni].generation = cur_gen;
                self.nodes[ni].parent = ci;
                self.queue.push_back(ni);
            }
        }

        self.nbuf = nbuf;

        if !found {
            return SearchResult::no_path(visited);
        }

        // Reconstruct by walking predecessor indices back to the source.
        let mut path = Vec::new();
        let mut ci = goal;
        while ci != usize::MAX {
            path.push(self.point(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();

        SearchResult {
            path: Some(path),
            visited,
        }
    }
}
