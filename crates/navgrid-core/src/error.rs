//! Error types for navgrid.

use thiserror::Error;

use crate::geom::Point;

/// Errors raised when constructing or editing a grid.
///
/// These are precondition violations: a search never fails, but a grid that
/// could not support one refuses to be built.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("cell size must be positive, got {0}")]
    InvalidCellSize(i32),

    #[error("obstacle {0} lies outside the grid bounds")]
    ObstacleOutOfBounds(Point),

    #[error("obstacle {0} is not aligned to the {1}-unit cell lattice")]
    MisalignedObstacle(Point, i32),
}

pub type Result<T> = std::result::Result<T, GridError>;
