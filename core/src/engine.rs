use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    Playing,
    Won,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won)
    }

    fn of(board: &Board) -> Self {
        if board.has_won() {
            Self::Won
        } else {
            Self::Playing
        }
    }
}

/// Game-level state machine on top of [`Board`].
///
/// Each activation replaces the held board with the value returned by
/// [`Board::toggle_around`] and re-checks the win condition. Once won, activations are
/// ignored until a new game is started.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SavedEngine")]
pub struct PlayEngine {
    board: Board,
    state: EngineState,
    moves: u32,
}

#[derive(Deserialize)]
struct SavedEngine {
    board: Board,
    state: EngineState,
    moves: u32,
}

impl TryFrom<SavedEngine> for PlayEngine {
    type Error = GameError;

    fn try_from(saved: SavedEngine) -> Result<Self> {
        if saved.state != EngineState::of(&saved.board) {
            return Err(GameError::InconsistentState);
        }
        Ok(Self {
            board: saved.board,
            state: saved.state,
            moves: saved.moves,
        })
    }
}

impl PlayEngine {
    pub fn new(board: Board) -> Self {
        let state = EngineState::of(&board);
        if state.is_finished() {
            log::warn!("Starting from a board with every light already off");
        }
        Self {
            board,
            state,
            moves: 0,
        }
    }

    pub fn generate(generator: impl BoardGenerator, config: GameConfig) -> Result<Self> {
        Ok(Self::new(generator.generate(config)?))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_won(&self) -> bool {
        self.state.is_finished()
    }

    /// Activations that changed the board since the game started.
    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn dimensions(&self) -> Ix2 {
        self.board.dimensions()
    }

    pub fn get_cell(&self, row: Ix, col: Ix) -> bool {
        self.board.get_cell(row, col)
    }

    /// Handles a "cell activated" event.
    pub fn activate(&mut self, coords: Pos) -> ToggleOutcome {
        if self.state.is_finished() {
            log::debug!("Ignoring activation at {:?}, game already won", coords);
            return ToggleOutcome::NoChange;
        }

        if self.board.neighborhood(coords).next().is_none() {
            log::debug!("Activation at {:?} misses the board", coords);
            return ToggleOutcome::NoChange;
        }

        self.board = self.board.toggle_around(coords);
        self.moves += 1;
        self.state = EngineState::of(&self.board);

        if self.state.is_finished() {
            log::info!("Board cleared in {} moves", self.moves);
            ToggleOutcome::Won
        } else {
            ToggleOutcome::Toggled
        }
    }

    /// Discards the current game and starts over on `board`.
    pub fn new_game(&mut self, board: Board) {
        *self = Self::new(board);
    }
}
