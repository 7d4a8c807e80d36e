#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod text;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Ix,
    pub cols: Ix,
    /// Chance that any given cell starts lit.
    pub start_probability: f64,
}

impl GameConfig {
    pub const DEFAULT_ROWS: Ix = 5;
    pub const DEFAULT_COLS: Ix = 5;
    pub const DEFAULT_START_PROBABILITY: f64 = 0.20;

    pub const fn new_unchecked(rows: Ix, cols: Ix, start_probability: f64) -> Self {
        Self {
            rows,
            cols,
            start_probability,
        }
    }

    pub fn new(rows: Ix, cols: Ix, start_probability: f64) -> Result<Self> {
        let config = Self::new_unchecked(rows, cols, start_probability);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidDimension);
        }
        // NaN fails the range check as well
        if !(0.0..=1.0).contains(&self.start_probability) {
            return Err(GameError::InvalidProbability);
        }
        Ok(())
    }

    pub const fn size(&self) -> Ix2 {
        (self.rows, self.cols)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            Self::DEFAULT_ROWS,
            Self::DEFAULT_COLS,
            Self::DEFAULT_START_PROBABILITY,
        )
    }
}

/// Grid of lights, `true` meaning lit.
///
/// A board never changes shape, and toggling produces a new board instead of touching the
/// existing one, so a value handed to a renderer stays consistent for as long as it is held.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<bool>", into = "Array2<bool>")]
pub struct Board {
    cells: Array2<bool>,
}

impl Board {
    /// Board with every light off.
    pub fn unlit(rows: Ix, cols: Ix) -> Result<Self> {
        check_dimensions(rows, cols)?;
        Ok(Self {
            cells: Array2::from_elem((rows, cols), false),
        })
    }

    /// Builds a board from row-major cell states.
    pub fn from_cells(rows: Ix, cols: Ix, cells: impl IntoIterator<Item = bool>) -> Result<Self> {
        check_dimensions(rows, cols)?;
        let cells: Vec<bool> = cells.into_iter().collect();
        let cells = Array2::from_shape_vec((rows, cols), cells)
            .map_err(|_| GameError::InvalidBoardShape)?;
        Ok(Self { cells })
    }

    pub fn from_rows(rows: &[&[bool]]) -> Result<Self> {
        let cols = rows.first().map_or(0, |row| row.len());
        if rows.iter().any(|row| row.len() != cols) {
            return Err(GameError::InvalidBoardShape);
        }
        Self::from_cells(rows.len(), cols, rows.iter().flat_map(|row| row.iter().copied()))
    }

    /// Lights each cell independently with the configured start probability.
    pub fn random<R: Rng>(config: &GameConfig, rng: &mut R) -> Result<Self> {
        config.validate()?;
        let chance = config.start_probability;
        let cells = Array2::from_shape_simple_fn(config.size(), || rng.random::<f64>() < chance);
        let board = Self { cells };
        log::debug!(
            "generated {}x{} board with {} lit cells",
            config.rows,
            config.cols,
            board.lit_count()
        );
        Ok(board)
    }

    pub fn rows(&self) -> Ix {
        self.cells.nrows()
    }

    pub fn cols(&self) -> Ix {
        self.cells.ncols()
    }

    pub fn dimensions(&self) -> Ix2 {
        self.cells.dim()
    }

    /// Whether the cell is lit, positions off the grid read as unlit.
    pub fn get_cell(&self, row: Ix, col: Ix) -> bool {
        self.cells.get((row, col)).copied().unwrap_or(false)
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    pub fn as_array(&self) -> &Array2<bool> {
        &self.cells
    }

    /// The in-grid cells a toggle at `center` would flip.
    pub fn neighborhood(&self, center: Pos) -> NeighborIter {
        self.cells.iter_neighborhood(center)
    }

    /// Returns a copy of this board with the cell at `center` and its orthogonal neighbors
    /// flipped. Positions off the grid are ignored, including the center itself.
    pub fn toggle_around(&self, center: Pos) -> Board {
        let mut cells = self.cells.clone();
        for pos in cells.iter_neighborhood(center) {
            let cell = &mut cells[pos.to_nd_index()];
            *cell = !*cell;
        }
        log::trace!("toggled around {:?}", center);
        Board { cells }
    }

    /// True when every light is off.
    pub fn has_won(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }
}

fn check_dimensions(rows: Ix, cols: Ix) -> Result<()> {
    if rows == 0 || cols == 0 {
        Err(GameError::InvalidDimension)
    } else {
        Ok(())
    }
}

impl TryFrom<Array2<bool>> for Board {
    type Error = GameError;

    fn try_from(cells: Array2<bool>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        check_dimensions(rows, cols)?;
        Ok(Self { cells })
    }
}

impl From<Board> for Array2<bool> {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl Index<Ix2> for Board {
    type Output = bool;

    fn index(&self, coords: Ix2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

/// Outcome of activating a cell
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    NoChange,
    Toggled,
    Won,
}

impl ToggleOutcome {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Toggled => true,
            Self::Won => true,
        }
    }
}
