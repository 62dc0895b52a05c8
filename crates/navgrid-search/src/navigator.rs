use std::collections::VecDeque;

use navgrid_core::{Lattice, Point};

/// Outcome of one path search.
///
/// `path` is `Some` ordered sequence of cell anchors from source to
/// destination inclusive, or `None` when the destination is unreachable (or
/// an endpoint was invalid). `visited` counts the cells dequeued from the
/// search frontier; it exists for performance observation and has no bearing
/// on path correctness.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub path: Option<Vec<Point>>,
    pub visited: usize,
}

impl SearchResult {
    /// Whether a path was found.
    #[inline]
    pub fn is_reachable(&self) -> bool {
        self.path.is_some()
    }

    /// Number of edges in the path, if one was found.
    #[inline]
    pub fn edges(&self) -> Option<usize> {
        self.path.as_ref().map(|p| p.len() - 1)
    }

    pub(crate) fn no_path(visited: usize) -> Self {
        Self {
            path: None,
            visited,
        }
    }
}

// Per-cell search bookkeeping. A slot is only meaningful when its
// generation matches the navigator's current one, so searches reset by
// bumping a counter instead of clearing the whole array.
#[derive(Clone)]
pub(crate) struct Node {
    pub(crate) generation: u32,
    pub(crate) parent: usize,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            generation: 0,
            parent: usize::MAX,
        }
    }
}

/// Central coordinator for path searches on a lattice.
///
/// `Navigator` owns all internal caches (discovery stamps, predecessor
/// indices, the frontier queue, a neighbor scratch buffer) so that repeated
/// queries incur no allocations after the first use. It holds no state
/// *across* searches in the semantic sense: every search starts from a
/// logically fresh visited set, so batch results never depend on search
/// order. Independent searches can be parallelized by giving each worker
/// its own `Navigator`.
pub struct Navigator {
    pub(crate) lattice: Lattice,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) queue: VecDeque<usize>,
    pub(crate) nbuf: Vec<Point>,
}

impl Navigator {
    /// Create a new `Navigator` sized to the given lattice.
    pub fn new(lattice: Lattice) -> Self {
        Self {
            lattice,
            nodes: vec![Node::default(); lattice.len()],
            generation: 0,
            queue: VecDeque::new(),
            nbuf: Vec::with_capacity(8),
        }
    }

    /// Replace the underlying lattice, reallocating caches as needed.
    ///
    /// If the new cell count fits within existing capacity, the caches are
    /// kept and only the generation counter is bumped so stale entries are
    /// ignored. Otherwise caches are reallocated. [`find_path`] calls this
    /// automatically when handed a grid with a different lattice.
    ///
    /// [`find_path`]: Self::find_path
    pub fn set_lattice(&mut self, lattice: Lattice) {
        let new_len = lattice.len();
        self.lattice = lattice;

        if new_len <= self.nodes.len() {
            self.generation = self.generation.wrapping_add(1);
            return;
        }

        self.nodes.clear();
        self.nodes.resize(new_len, Node::default());
        self.generation = 0;
    }

    /// The lattice searches currently run in.
    #[inline]
    pub fn lattice(&self) -> Lattice {
        self.lattice
    }

    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.lattice.idx(p)
    }

    #[inline]
    pub(crate) fn point(&self, idx: usize) -> Point {
        self.lattice.point(idx)
    }
}
