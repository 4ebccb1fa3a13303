//! Editing model of the interactive demonstrator: the user switches between placing the start,
//! the end and barriers, erases cells, and triggers a search. Input devices and rendering are
//! left to the caller, which maps clicks and keys onto [Board] calls.
use crate::cell::CellState;
use crate::error::{GridError, Result};
use crate::grid::Grid;
use crate::search::{PathSearch, SearchReport};
use grid_util::Point;
use log::debug;
use std::ops::ControlFlow;
use std::str::FromStr;

/// What painting a cell does.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EditMode {
    #[default]
    Start,
    End,
    Barrier,
}

/// A [Grid] together with the user's start and end choice.
///
/// There is at most one start and one end, and they are never the same cell.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    start: Option<Point>,
    end: Option<Point>,
    pub mode: EditMode,
}

impl Board {
    pub fn new(size: usize) -> Result<Board> {
        Ok(Board {
            grid: Grid::new(size)?,
            start: None,
            end: None,
            mode: EditMode::default(),
        })
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn start(&self) -> Option<Point> {
        self.start
    }
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Applies the current [EditMode] to a cell. A start (or end) is only placed if there is none
    /// yet and the cell is not already the end (or start). Barriers never replace the start or end.
    pub fn paint(&mut self, row: i32, col: i32) -> Result<()> {
        self.grid.cell_at(row, col)?;
        let p = Point::new(row, col);
        match self.mode {
            EditMode::Start => {
                if self.start.is_none() && self.end != Some(p) {
                    self.grid.set_state(row, col, CellState::Start)?;
                    self.start = Some(p);
                }
            }
            EditMode::End => {
                if self.end.is_none() && self.start != Some(p) {
                    self.grid.set_state(row, col, CellState::End)?;
                    self.end = Some(p);
                }
            }
            EditMode::Barrier => {
                if self.start != Some(p) && self.end != Some(p) {
                    self.grid.set_barrier(row, col)?;
                }
            }
        }
        Ok(())
    }

    /// Resets a cell to [CellState::Default], forgetting the start or end if it was one.
    pub fn erase(&mut self, row: i32, col: i32) -> Result<()> {
        self.grid.set_state(row, col, CellState::Default)?;
        let p = Some(Point::new(row, col));
        if self.start == p {
            self.start = None;
        } else if self.end == p {
            self.end = None;
        }
        Ok(())
    }

    /// Clears the trace of a previous run, recomputes all neighbour lists and runs a
    /// [PathSearch] between the placed start and end.
    pub fn search<F>(&mut self, on_step: F) -> Result<SearchReport>
    where
        F: FnMut(&Grid) -> ControlFlow<()>,
    {
        let (start, end) = match (self.start, self.end) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                return Err(GridError::InvalidQuery(
                    "both a start and an end have to be placed".to_owned(),
                ))
            }
        };
        self.grid.clear_trace();
        self.grid.compute_neighbors();
        PathSearch::new().run(&mut self.grid, start, end, on_step)
    }
}

/// Parses a square map with one line per row: `.` empty, `#` barrier, `S` start, `E` end.
/// Blank lines and surrounding whitespace are ignored.
impl FromStr for Board {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Board> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect::<Vec<_>>();
        let size = lines.len();
        let mut board = Board::new(size)?;
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != size {
                return Err(GridError::RaggedMap {
                    line: row + 1,
                    found,
                    expected: size,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let invalid = GridError::InvalidMap {
                    line: row + 1,
                    column: col + 1,
                    found: ch,
                };
                board.mode = match ch {
                    '.' => continue,
                    '#' => EditMode::Barrier,
                    'S' if board.start.is_none() => EditMode::Start,
                    'E' if board.end.is_none() => EditMode::End,
                    _ => return Err(invalid),
                };
                board.paint(row as i32, col as i32)?;
            }
        }
        board.mode = EditMode::default();
        debug!("Parsed {}x{} board", size, size);
        Ok(board)
    }
}
