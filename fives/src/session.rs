use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    all_legal_moves, any_legal_move_exists, evaluate, Board, ConfigError, Evaluation, GameConfig,
    HintAlreadyUsed, Ledger, LegalMove, RejectedMove, Window,
};

/// Whether a session still accepts moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Playing,
    /// No empty cell admits a scoring dot. Only [`GameSession::reset()`] leaves this state.
    GameOver,
}

/// Summarizes an accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The windows that were scored, at least one.
    pub windows: Vec<Window>,
    /// Did this move end the game?
    pub game_over: bool,
}

impl MoveOutcome {
    /// The points gained by this move.
    pub fn count(&self) -> usize {
        self.windows.len()
    }
}

/// One game: the board, the scored windows, and the score.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    ledger: Ledger,
    score: usize,
    moves: usize,
    status: SessionStatus,
    hint_used: bool,
}

impl GameSession {
    /// Starts a game on a freshly seeded board.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        let board = Board::new(config)?;
        Ok(Self::from_board(board))
    }

    /// Starts a game on an arbitrary position, with nothing scored yet.
    pub fn from_board(board: Board) -> Self {
        let mut session = Self {
            board,
            ledger: Ledger::new(),
            score: 0,
            moves: 0,
            status: SessionStatus::Playing,
            hint_used: false,
        };
        session.update_status();
        session
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn score(&self) -> usize {
        self.score
    }

    /// Number of accepted moves.
    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == SessionStatus::GameOver
    }

    pub fn hint_used(&self) -> bool {
        self.hint_used
    }

    /// Previews a move without playing it.
    pub fn evaluate(&self, x: i32, y: i32) -> Evaluation {
        evaluate(&self.board, &self.ledger, x, y)
    }

    /// Places a dot, if that scores at least one window.
    ///
    /// A rejected move leaves the session untouched.
    pub fn submit_move(&mut self, x: i32, y: i32) -> Result<MoveOutcome, RejectedMove> {
        if self.is_game_over() {
            return Err(RejectedMove::GameOver);
        }
        if !self.board.in_bounds(x, y) {
            return Err(RejectedMove::OutOfBounds { x, y });
        }
        if self.board.is_occupied(x, y) {
            return Err(RejectedMove::CellOccupied { x, y });
        }
        let Evaluation { windows } = self.evaluate(x, y);
        if windows.is_empty() {
            return Err(RejectedMove::NoWindowCompleted { x, y });
        }

        self.board.place(x, y)?;
        self.ledger.commit(&windows);
        self.score += windows.len();
        self.moves += 1;
        debug!(x, y, points = windows.len(), score = self.score, "Move accepted");

        self.update_status();
        Ok(MoveOutcome {
            windows,
            game_over: self.is_game_over(),
        })
    }

    /// Lists every scoring move. This works once per game.
    pub fn hint(&mut self) -> Result<Vec<LegalMove>, HintAlreadyUsed> {
        if self.hint_used {
            return Err(HintAlreadyUsed);
        }
        self.hint_used = true;
        Ok(all_legal_moves(&self.board, &self.ledger))
    }

    /// Starts over with the seeded board, nothing scored, and the hint available.
    pub fn reset(&mut self) {
        self.board.reset();
        self.ledger = Ledger::new();
        self.score = 0;
        self.moves = 0;
        self.hint_used = false;
        self.status = SessionStatus::Playing;
        self.update_status();
    }

    fn update_status(&mut self) {
        if !any_legal_move_exists(&self.board, &self.ledger) {
            info!(score = self.score, moves = self.moves, "Game over");
            self.status = SessionStatus::GameOver;
        }
    }
}
