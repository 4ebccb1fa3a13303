//! # grid_astar
//!
//! A step-by-step [A*](https://en.wikipedia.org/wiki/A*_search_algorithm) search on a square,
//! 4-connected, uniform-cost grid, meant to be watched while it runs. Every expansion calls back
//! into the caller, which can render the [Grid] (cells carry an explicit [CellState] for the
//! frontier, the expanded set and the final path) or stop the search.
//!
//! The heuristic is the Euclidean distance between cell coordinates and ties in the open set are
//! broken in insertion order, so the exploration pattern is fully deterministic.
//!
//! ```
//! use std::ops::ControlFlow;
//! use grid_astar::{Grid, Outcome, PathSearch};
//! use grid_util::Point;
//!
//! let mut grid = Grid::new(5).unwrap();
//! grid.set_barrier(1, 1).unwrap();
//! grid.compute_neighbors();
//! let report = PathSearch::new()
//!     .run(&mut grid, Point::new(0, 0), Point::new(4, 4), |_| ControlFlow::Continue(()))
//!     .unwrap();
//! assert!(matches!(report.outcome, Outcome::Found(ref path) if path.len() == 9));
//! ```
pub mod board;
pub mod cell;
pub mod error;
pub mod grid;
pub mod search;

pub use board::{Board, EditMode};
pub use cell::{Cell, CellState};
pub use error::{GridError, Result};
pub use grid::Grid;
pub use search::{euclidean, Outcome, PathSearch, SearchReport};

/// Cost of a single move between two orthogonally adjacent cells.
pub const STEP_COST: u32 = 1;
/// Number of rows (and columns) of the board used by the interactive demonstrator.
pub const DEFAULT_GRID_SIZE: usize = 50;
/// Inline capacity of a cell's neighbour list, a cell has at most 4 orthogonal neighbours.
pub const N_SMALLVEC_SIZE: usize = 4;
