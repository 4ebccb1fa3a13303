//! The A* search itself. A search run owns all of its state (scores, predecessors, open set) and
//! only touches the [Grid] to read neighbour lists and to write trace states for rendering.
mod open_set;

use crate::cell::CellState;
use crate::error::{GridError, Result};
use crate::grid::Grid;
use crate::STEP_COST;
use fxhash::FxBuildHasher;
use grid_util::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, info, trace, warn};
use open_set::OpenSet;
use smallvec::SmallVec;
use std::ops::ControlFlow;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Straight-line distance between two cells. Never larger than the Manhattan distance, so it is
/// admissible on a 4-connected grid, just less informed.
pub fn euclidean(p1: &Point, p2: &Point) -> f64 {
    let dx = (p1.x - p2.x) as f64;
    let dy = (p1.y - p2.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

/// Result of a search that ran to completion.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Cells from start to end, both included.
    Found(Vec<Point>),
    NotFound,
}

impl Outcome {
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Outcome::Found(path) => Some(path),
            Outcome::NotFound => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SearchReport {
    pub outcome: Outcome,
    /// Cells in the order they were popped from the open set.
    pub expanded: Vec<Point>,
    /// Number of times the step callback was invoked.
    pub steps: usize,
}

/// Best known way to reach a cell. `parent` indexes the node table, [usize::MAX] for the start.
struct Node {
    pos: Point,
    parent: usize,
    g: u32,
    f: f64,
}

/// A* with unit step costs, the [euclidean] heuristic and FIFO tie-breaking.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathSearch;

impl PathSearch {
    pub fn new() -> PathSearch {
        PathSearch
    }

    /// Searches a path from `start` to `end`, calling `on_step` after every expansion and once
    /// per cell walked during path reconstruction. Returning [ControlFlow::Break] from `on_step`
    /// aborts the search with [GridError::Cancelled].
    ///
    /// Cells are marked [CellState::Open] when queued, [CellState::Closed] once expanded and
    /// [CellState::Path] when they end up on the path; start and end keep their state.
    pub fn run<F>(
        &self,
        grid: &mut Grid,
        start: Point,
        end: Point,
        mut on_step: F,
    ) -> Result<SearchReport>
    where
        F: FnMut(&Grid) -> ControlFlow<()>,
    {
        if let Err(e) = validate_query(grid, &start, &end) {
            warn!("Rejected search from {} to {}: {}", start, end, e);
            return Err(e);
        }
        debug!("Searching path from {} to {}", start, end);

        let mut nodes: FxIndexMap<Point, Node> = FxIndexMap::default();
        let mut open = OpenSet::new();
        let mut expanded = Vec::new();
        let mut steps = 0;

        let f_start = euclidean(&start, &end);
        nodes.insert(
            start,
            Node {
                pos: start,
                parent: usize::MAX,
                g: 0,
                f: f_start,
            },
        );
        open.push(f_start, 0);

        while let Some(index) = open.pop() {
            let current = nodes[index].pos;
            let g = nodes[index].g;
            expanded.push(current);
            trace!("Expanding {} (g = {}, {} queued)", current, g, open.len());

            if current == end {
                let path =
                    reconstruct_path(grid, &nodes, index, &start, &mut steps, &mut on_step)?;
                info!(
                    "Found path of {} cells from {} to {} after expanding {} cells",
                    path.len(),
                    start,
                    end,
                    expanded.len()
                );
                return Ok(SearchReport {
                    outcome: Outcome::Found(path),
                    expanded,
                    steps,
                });
            }

            let neighbours: SmallVec<[Point; crate::N_SMALLVEC_SIZE]> =
                SmallVec::from_slice(grid.cell_at(current.x, current.y)?.neighbours());
            for neighbour in neighbours {
                let tentative_g = g + STEP_COST;
                let f = tentative_g as f64 + euclidean(&neighbour, &end);
                let n = match nodes.entry(neighbour) {
                    Vacant(e) => {
                        let n = e.index();
                        e.insert(Node {
                            pos: neighbour,
                            parent: index,
                            g: tentative_g,
                            f,
                        });
                        n
                    }
                    Occupied(mut e) => {
                        if tentative_g < e.get().g {
                            let node = e.get_mut();
                            node.parent = index;
                            node.g = tentative_g;
                            node.f = f;
                            e.index()
                        } else {
                            continue;
                        }
                    }
                };
                // An already queued node keeps its old entry and priority.
                if !open.contains(n) {
                    open.push(nodes[n].f, n);
                    grid.mark(&neighbour, CellState::Open);
                }
            }

            steps += 1;
            if on_step(grid).is_break() {
                warn!("Search from {} to {} cancelled after {} steps", start, end, steps);
                return Err(GridError::Cancelled);
            }
            if current != start {
                grid.mark(&current, CellState::Closed);
            }
        }
        info!(
            "No path from {} to {}, expanded {} cells",
            start,
            end,
            expanded.len()
        );
        Ok(SearchReport {
            outcome: Outcome::NotFound,
            expanded,
            steps,
        })
    }
}

fn validate_query(grid: &Grid, start: &Point, end: &Point) -> Result<()> {
    let invalid = |msg: String| Err(GridError::InvalidQuery(msg));
    for (name, p) in [("start", start), ("end", end)] {
        match grid.cell(p) {
            None => return invalid(format!("{} {} is outside the grid", name, p)),
            Some(cell) if !cell.is_passable() => {
                return invalid(format!("{} {} is a barrier", name, p))
            }
            Some(_) => {}
        }
    }
    if start == end {
        return invalid(format!("start and end are the same cell {}", start));
    }
    if grid.neighbours_dirty() {
        return invalid("neighbour lists are stale, call compute_neighbors first".to_owned());
    }
    Ok(())
}

/// Walks the predecessors from the end node back to the start, marking the cells in between as
/// path and stepping once per visited predecessor. Returns the path ordered from start to end.
fn reconstruct_path<F>(
    grid: &mut Grid,
    nodes: &FxIndexMap<Point, Node>,
    end_index: usize,
    start: &Point,
    steps: &mut usize,
    on_step: &mut F,
) -> Result<Vec<Point>>
where
    F: FnMut(&Grid) -> ControlFlow<()>,
{
    let mut path = vec![nodes[end_index].pos];
    let mut index = nodes[end_index].parent;
    while index != usize::MAX {
        let node = &nodes[index];
        if node.pos != *start {
            grid.mark(&node.pos, CellState::Path);
        }
        path.push(node.pos);
        *steps += 1;
        if on_step(grid).is_break() {
            warn!("Path reconstruction cancelled after {} steps", steps);
            return Err(GridError::Cancelled);
        }
        index = node.parent;
    }
    path.reverse();
    Ok(path)
}
