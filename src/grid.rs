use crate::cell::{Cell, CellState};
use crate::error::{GridError, Result};
use core::fmt;
use grid_util::{Grid as _, Point, SimpleGrid};
use itertools::iproduct;
use log::debug;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Row and column offsets of the von Neumann neighbourhood. Diagonal moves are not supported.
const NEUMANN_OFFSETS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

/// A square lattice of [Cell]s kept in a [SimpleGrid], with `x` as the row and `y` as the column.
///
/// Neighbour lists are derived data: barrier edits only flag them as dirty and
/// [compute_neighbors](Grid::compute_neighbors) has to be called before the next search. Next to
/// the neighbour lists the grid keeps connected components in a [UnionFind] structure, rebuilt at
/// the same time.
#[derive(Clone, Debug)]
pub struct Grid {
    size: usize,
    cells: SimpleGrid<Cell>,
    pub components: UnionFind<usize>,
    neighbours_dirty: bool,
}

impl Grid {
    /// Allocates a `size` x `size` grid of passable cells. No neighbours are computed yet.
    ///
    /// Fails with [GridError::InvalidSize] for an empty grid or one whose coordinates do not fit
    /// in an [i32].
    pub fn new(size: usize) -> Result<Grid> {
        if size == 0 || size > i32::MAX as usize || size.checked_mul(size).is_none() {
            return Err(GridError::InvalidSize(size));
        }
        let mut cells = SimpleGrid::new(size, size, Cell::new(0, 0));
        for (row, col) in iproduct!(0..size as i32, 0..size as i32) {
            if let Some(cell) = cells.get_point_mut(Point::new(row, col)) {
                *cell = Cell::new(row, col);
            }
        }
        Ok(Grid {
            size,
            cells,
            components: UnionFind::new(size * size),
            neighbours_dirty: true,
        })
    }
    pub fn size(&self) -> usize {
        self.size
    }
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && col >= 0 && self.cells.index_in_bounds(row, col)
    }
    pub fn point_in_bounds(&self, point: &Point) -> bool {
        self.in_bounds(point.x, point.y)
    }
    fn points(&self) -> impl Iterator<Item = Point> {
        let n = self.size as i32;
        iproduct!(0..n, 0..n).map(|(row, col)| Point::new(row, col))
    }
    fn out_of_bounds(&self, row: i32, col: i32) -> GridError {
        GridError::OutOfBounds {
            row,
            col,
            size: self.size,
        }
    }

    pub fn cell_at(&self, row: i32, col: i32) -> Result<&Cell> {
        self.cell(&Point::new(row, col))
            .ok_or_else(|| self.out_of_bounds(row, col))
    }
    /// Like [cell_at](Grid::cell_at) but for a [Point], returning [None] outside the grid.
    pub fn cell(&self, point: &Point) -> Option<&Cell> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        self.cells.get_point(*point)
    }
    fn cell_mut(&mut self, point: &Point) -> Option<&mut Cell> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        self.cells.get_point_mut(*point)
    }
    /// All cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.points().filter_map(move |p| self.cells.get_point(p))
    }
    pub fn state(&self, row: i32, col: i32) -> Result<CellState> {
        self.cell_at(row, col).map(|cell| cell.state)
    }

    /// Overwrites the state of a cell. Flags the neighbour lists as dirty if this changes whether
    /// the cell is passable.
    pub fn set_state(&mut self, row: i32, col: i32, state: CellState) -> Result<()> {
        let err = self.out_of_bounds(row, col);
        let cell = self.cell_mut(&Point::new(row, col)).ok_or(err)?;
        let passability_changed = (cell.state == CellState::Barrier) != (state == CellState::Barrier);
        cell.state = state;
        if passability_changed {
            self.neighbours_dirty = true;
        }
        Ok(())
    }
    pub fn set_barrier(&mut self, row: i32, col: i32) -> Result<()> {
        self.set_state(row, col, CellState::Barrier)
    }
    /// Makes a barrier cell passable again. Cells that are not barriers are left untouched.
    pub fn clear_barrier(&mut self, row: i32, col: i32) -> Result<()> {
        if self.state(row, col)? == CellState::Barrier {
            self.set_state(row, col, CellState::Default)?;
        }
        Ok(())
    }

    /// Writes a search trace state, never overwriting the start, end or a barrier.
    pub(crate) fn mark(&mut self, point: &Point, state: CellState) {
        if let Some(cell) = self.cell_mut(point) {
            if !matches!(
                cell.state,
                CellState::Start | CellState::End | CellState::Barrier
            ) {
                cell.state = state;
            }
        }
    }
    /// Resets every open, closed and path cell back to [CellState::Default].
    pub fn clear_trace(&mut self) {
        for p in self.points().collect::<Vec<_>>() {
            if let Some(cell) = self.cells.get_point_mut(p) {
                if cell.state.is_trace() {
                    cell.state = CellState::Default;
                }
            }
        }
    }

    /// True if a barrier was placed or removed since the last
    /// [compute_neighbors](Grid::compute_neighbors).
    pub fn neighbours_dirty(&self) -> bool {
        self.neighbours_dirty
    }

    fn neighbourhood(&self, point: Point) -> SmallVec<[Point; crate::N_SMALLVEC_SIZE]> {
        NEUMANN_OFFSETS
            .iter()
            .map(|(dr, dc)| Point::new(point.x + dr, point.y + dc))
            .filter(|p| *p != point)
            .filter(|p| self.cell(p).is_some_and(Cell::is_passable))
            .collect()
    }

    /// Recomputes the passable 4-connected neighbours of every cell and regenerates the connected
    /// components. Idempotent.
    pub fn compute_neighbors(&mut self) {
        debug!("Computing neighbours of {}x{} grid", self.size, self.size);
        for p in self.points().collect::<Vec<_>>() {
            let neighbours = self.neighbourhood(p);
            if let Some(cell) = self.cells.get_point_mut(p) {
                cell.neighbours = neighbours;
            }
        }
        self.generate_components();
        self.neighbours_dirty = false;
    }

    /// Generates a new [UnionFind] structure and links up passable neighbours to the same
    /// components.
    fn generate_components(&mut self) {
        let mut components = UnionFind::new(self.size * self.size);
        for cell in self.cells().filter(|c| c.is_passable()) {
            let parent_ix = self.cells.get_ix_point(&cell.pos());
            for n in cell.neighbours() {
                components.union(parent_ix, self.cells.get_ix_point(n));
            }
        }
        self.components = components;
    }

    /// Checks if start and goal are on the same connected component. Only meaningful while the
    /// neighbours are up to date.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.cell(start), self.cell(goal)) {
            (Some(s), Some(g)) if s.is_passable() && g.is_passable() => self
                .components
                .equiv(self.cells.get_ix_point(start), self.cells.get_ix_point(goal)),
            _ => false,
        }
    }
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        !self.reachable(start, goal)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let n = self.size as i32;
        for row in 0..n {
            let line = (0..n)
                .filter_map(|col| self.cell(&Point::new(row, col)))
                .map(|c| c.state.symbol())
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
