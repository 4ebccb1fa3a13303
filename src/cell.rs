use grid_util::Point;
use smallvec::SmallVec;

use crate::N_SMALLVEC_SIZE;

/// What a cell currently represents. Only [CellState::Barrier] affects the search; the other
/// states exist so that a renderer can show the progress of a search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Default,
    Start,
    End,
    Barrier,
    /// Queued in the open set (the frontier).
    Open,
    /// Popped from the open set and expanded.
    Closed,
    /// Part of the reconstructed path.
    Path,
}

impl CellState {
    /// Character used by the text rendering of a grid.
    pub fn symbol(self) -> char {
        match self {
            CellState::Default => '.',
            CellState::Start => 'S',
            CellState::End => 'E',
            CellState::Barrier => '#',
            CellState::Open => 'o',
            CellState::Closed => 'x',
            CellState::Path => '*',
        }
    }

    /// States written by a search run, as opposed to states placed by the user.
    pub fn is_trace(self) -> bool {
        matches!(self, CellState::Open | CellState::Closed | CellState::Path)
    }
}

/// A single cell of a [Grid](crate::Grid). The position is stored as a [Point] with `x` as the
/// row and `y` as the column.
#[derive(Clone, Debug)]
pub struct Cell {
    pos: Point,
    pub state: CellState,
    pub(crate) neighbours: SmallVec<[Point; N_SMALLVEC_SIZE]>,
}

impl Cell {
    pub(crate) fn new(row: i32, col: i32) -> Cell {
        Cell {
            pos: Point::new(row, col),
            state: CellState::Default,
            neighbours: SmallVec::new(),
        }
    }
    pub fn pos(&self) -> Point {
        self.pos
    }
    pub fn row(&self) -> i32 {
        self.pos.x
    }
    pub fn col(&self) -> i32 {
        self.pos.y
    }
    pub fn is_passable(&self) -> bool {
        self.state != CellState::Barrier
    }
    /// Passable orthogonal neighbours as of the last [compute_neighbors](crate::Grid::compute_neighbors).
    pub fn neighbours(&self) -> &[Point] {
        &self.neighbours
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_is_passable_without_neighbours() {
        let cell = Cell::new(2, 3);
        assert_eq!(cell.row(), 2);
        assert_eq!(cell.col(), 3);
        assert!(cell.is_passable());
        assert!(cell.neighbours().is_empty());
    }

    #[test]
    fn only_barrier_blocks() {
        let mut cell = Cell::new(0, 0);
        for state in [
            CellState::Start,
            CellState::End,
            CellState::Open,
            CellState::Closed,
            CellState::Path,
        ] {
            cell.state = state;
            assert!(cell.is_passable());
        }
        cell.state = CellState::Barrier;
        assert!(!cell.is_passable());
    }
}
