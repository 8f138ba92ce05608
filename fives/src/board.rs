mod axis;
mod error;
mod window;

pub use axis::*;
pub use error::*;
pub use window::*;

use serde::{Deserialize, Serialize};

use crate::GameConfig;

/// The occupancy of one field on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    Empty,
    Occupied,
}

/// A square grid of dots.
///
/// Occupancy is monotone: the only mutation is [`Self::place()`], which turns
/// an empty cell into an occupied one. [`Self::reset()`] starts over from the
/// seeded cross.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Row-major, indexed by `y * size + x`.
    cells: Vec<Cell>,
    config: GameConfig,
}

impl Board {
    /// Creates a board with the seeded cross in the middle.
    pub fn new(config: GameConfig) -> Result<Self, crate::ConfigError> {
        config.validate()?;
        let mut board = Self::blank(config);
        board.seed();
        Ok(board)
    }

    /// Creates a board of the given size without any dots on it.
    ///
    /// Resetting this board fills in the seed with the default line length.
    pub fn empty(size: usize) -> Result<Self, crate::ConfigError> {
        let config = GameConfig {
            size,
            ..GameConfig::default()
        };
        config.validate()?;
        Ok(Self::blank(config))
    }

    fn blank(config: GameConfig) -> Self {
        Self {
            cells: vec![Cell::Empty; config.size * config.size],
            config,
        }
    }

    pub fn size(&self) -> usize {
        self.config.size
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    /// The coordinate of the central row and column.
    pub fn center(&self) -> i32 {
        (self.config.size / 2) as i32
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        let size = self.config.size as i32;
        (0..size).contains(&x) && (0..size).contains(&y)
    }

    /// Returns `None` for coordinates outside of the board.
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Is this an in-bounds cell without a dot?
    pub fn is_empty(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == Some(Cell::Empty)
    }

    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.cell(x, y) == Some(Cell::Occupied)
    }

    /// Puts a dot on an empty cell.
    ///
    /// This does not check whether the placement scores. See
    /// [`GameSession::submit_move()`](crate::GameSession::submit_move) for that.
    pub fn place(&mut self, x: i32, y: i32) -> Result<(), PlacementError> {
        let idx = self
            .index(x, y)
            .ok_or(PlacementError::OutOfBounds { x, y })?;
        if self.cells[idx] == Cell::Occupied {
            return Err(PlacementError::CellOccupied { x, y });
        }
        self.cells[idx] = Cell::Occupied;
        Ok(())
    }

    /// Clears the board and puts the seeded cross back on it.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.seed();
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == Cell::Occupied).count()
    }

    /// All occupied cells, in row-major order.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.coordinates().filter(|&(x, y)| self.is_occupied(x, y))
    }

    /// All empty cells, in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.coordinates().filter(|&(x, y)| self.is_empty(x, y))
    }

    fn coordinates(&self) -> impl Iterator<Item = (i32, i32)> {
        let size = self.config.size as i32;
        (0..size).flat_map(move |y| (0..size).map(move |x| (x, y)))
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.in_bounds(x, y)
            .then(|| y as usize * self.config.size + x as usize)
    }

    // Two horizontal and two vertical runs of `line_length` dots through the center.
    // Anything that would fall off a small board is skipped.
    fn seed(&mut self) {
        let line_length = self.config.line_length as i32;
        let left = (line_length - 1) / 2;
        let right = line_length - 1 - left;
        let center = self.center();
        for offset in 0..=1 {
            for along in center - left..=center + right {
                self.occupy(along, center + offset);
                self.occupy(center + offset, along);
            }
        }
    }

    fn occupy(&mut self, x: i32, y: i32) {
        if let Some(idx) = self.index(x, y) {
            self.cells[idx] = Cell::Occupied;
        }
    }
}
