//! A rectangular room of free and blocked cells, read from text.

use crate::search::{Action, Environment, Path, Percept, Position};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

const UP: [i64; 2] = [-1, 0];
const DOWN: [i64; 2] = [1, 0];
const LEFT: [i64; 2] = [0, -1];
const RIGHT: [i64; 2] = [0, 1];
const UP_LEFT: [i64; 2] = [-1, -1];
const UP_RIGHT: [i64; 2] = [-1, 1];
const DOWN_LEFT: [i64; 2] = [1, -1];
const DOWN_RIGHT: [i64; 2] = [1, 1];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Free,
    Blocked,
}

/// Which moves are allowed from a cell.
#[derive(
    clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize,
)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Connectivity {
    /// Up, down, left and right
    #[default]
    Four,
    /// The four straight moves plus the four diagonals
    Eight,
}

impl Connectivity {
    fn moves(&self) -> &'static [[i64; 2]] {
        match self {
            Connectivity::Four => &[UP, DOWN, LEFT, RIGHT],
            Connectivity::Eight => &[
                UP, DOWN, LEFT, RIGHT, UP_LEFT, UP_RIGHT, DOWN_LEFT, DOWN_RIGHT,
            ],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("Failed to read grid {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Grid has no cells")]
    EmptyGrid,
    #[error("Row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("Unknown symbol '{symbol}' at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize, symbol: char },
    #[error("Grid has no start cell 'S'")]
    MissingStart,
    #[error("Grid has no target cell 'T'")]
    MissingTarget,
    #[error("Grid has more than one start cell")]
    DuplicateStart,
    #[error("Grid has more than one target cell")]
    DuplicateTarget,
}

/// A grid environment. Positions are `(row, column)` with row 0 at the top.
///
/// The text format has one line per row and one symbol per cell, whitespace
/// between cells is optional:
///
/// - `.` a free cell
/// - `#` a blocked cell
/// - `S` the start
/// - `T` the target
/// - `*` a cell that is both the start and the target
///
/// The room records every position it is signalled to visit, in order, and
/// the last solution presented to it.
#[derive(Debug, Clone)]
pub struct GridRoom {
    cells: Vec<Vec<Cell>>,
    start: Position,
    target: Position,
    connectivity: Connectivity,
    current_position: Position,
    visited_positions: Vec<Position>,
    presented_solution: Option<Path>,
}

impl GridRoom {
    pub fn from_text(text: &str) -> Result<Self, GridError> {
        let mut cells: Vec<Vec<Cell>> = Vec::new();
        let mut start = None;
        let mut target = None;

        let rows = text
            .lines()
            .map(|line| line.split_whitespace().collect::<String>())
            .filter(|line| !line.is_empty());
        for (row, line) in rows.enumerate() {
            let mut cell_row = Vec::with_capacity(line.len());
            for (col, symbol) in line.chars().enumerate() {
                let position = Position::from((row as i64, col as i64));
                let cell = match symbol {
                    '.' => Cell::Free,
                    '#' => Cell::Blocked,
                    'S' => {
                        set_once(&mut start, position, GridError::DuplicateStart)?;
                        Cell::Free
                    }
                    'T' => {
                        set_once(&mut target, position, GridError::DuplicateTarget)?;
                        Cell::Free
                    }
                    '*' => {
                        set_once(&mut start, position.clone(), GridError::DuplicateStart)?;
                        set_once(&mut target, position, GridError::DuplicateTarget)?;
                        Cell::Free
                    }
                    _ => return Err(GridError::UnknownCell { row, col, symbol }),
                };
                cell_row.push(cell);
            }
            if let Some(first) = cells.first() {
                let expected = first.len();
                if cell_row.len() != expected {
                    return Err(GridError::RaggedRow {
                        row,
                        expected,
                        found: cell_row.len(),
                    });
                }
            }
            cells.push(cell_row);
        }

        if cells.is_empty() {
            return Err(GridError::EmptyGrid);
        }
        let start = start.ok_or(GridError::MissingStart)?;
        let target = target.ok_or(GridError::MissingTarget)?;
        debug!(rows = cells.len(), cols = cells[0].len(), start = %start, target = %target);

        Ok(Self {
            cells,
            current_position: start.clone(),
            start,
            target,
            connectivity: Connectivity::default(),
            visited_positions: Vec::new(),
            presented_solution: None,
        })
    }

    pub fn from_path(path: &std::path::Path) -> Result<Self, GridError> {
        let text = std::fs::read_to_string(path).map_err(|source| GridError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_text(&text)
    }

    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cells[0].len()
    }

    pub fn start(&self) -> &Position {
        &self.start
    }

    pub fn target(&self) -> &Position {
        &self.target
    }

    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Every position the room has been signalled to visit, in order.
    pub fn visited_positions(&self) -> &[Position] {
        &self.visited_positions
    }

    pub fn presented_solution(&self) -> Option<&Path> {
        self.presented_solution.as_ref()
    }

    pub fn cell(&self, position: &Position) -> Option<Cell> {
        if position.dimensions() != 2 || position[0] < 0 || position[1] < 0 {
            return None;
        }
        self.cells
            .get(position[0] as usize)
            .and_then(|row| row.get(position[1] as usize))
            .copied()
    }

    pub fn is_free(&self, position: &Position) -> bool {
        self.cell(position) == Some(Cell::Free)
    }

    fn neighbours(&self, position: &Position) -> Vec<Position> {
        self.connectivity
            .moves()
            .iter()
            .map(|offset| position.offset_by(offset))
            .filter(|neighbour| self.is_free(neighbour))
            .collect()
    }

    fn percept(&self) -> Percept {
        Percept::new(
            self.current_position.clone(),
            self.target.clone(),
            self.neighbours(&self.current_position),
        )
    }
}

fn set_once(
    slot: &mut Option<Position>,
    position: Position,
    duplicate: GridError,
) -> Result<(), GridError> {
    if slot.is_some() {
        return Err(duplicate);
    }
    *slot = Some(position);
    Ok(())
}

impl Environment for GridRoom {
    fn initial_percepts(&mut self) -> Percept {
        self.current_position = self.start.clone();
        self.percept()
    }

    fn signal(&mut self, action: Action) -> Percept {
        assert!(
            self.is_free(&action.visit_position),
            "Cannot visit {}, it is blocked or outside the room",
            action.visit_position
        );
        self.current_position = action.visit_position;
        self.visited_positions.push(self.current_position.clone());
        self.percept()
    }

    fn present_solution(&mut self, solution: &Path) {
        info!(solution = %solution, length = solution.num_edges(), cost = solution.cost());
        self.presented_solution = Some(solution.clone());
    }
}
