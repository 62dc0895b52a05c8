//! **navgrid-core** — Grid model for lattice-based navigation (core types).
//!
//! This crate provides the data layer of the *navgrid* ecosystem: the
//! [`Point`] geometry primitive, the scaled coordinate [`Lattice`], and the
//! obstacle-bearing [`Grid`]. Everything here is pure data plus predicates;
//! search state lives in the `navgrid-search` crate.

pub mod error;
pub mod geom;
pub mod grid;
pub mod lattice;

pub use error::{GridError, Result};
pub use geom::Point;
pub use grid::Grid;
pub use lattice::{Lattice, LatticeIter};
