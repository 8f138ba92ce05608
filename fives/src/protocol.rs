use serde::{Deserialize, Serialize};

use crate::{GameSession, LegalMove, MoveOutcome, RejectedMove, SessionStatus, Window};

/// Request from the player to the game host, one JSON object per line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Request {
    /// Start over with a freshly seeded board.
    ///
    /// The response is an [`Response::Okay`].
    NewGame,
    /// Ask what a dot would score, without placing it.
    ///
    /// The response is a [`Response::Evaluation`].
    Evaluate { x: i32, y: i32 },
    /// Place a dot.
    ///
    /// The response is a [`Response::MoveResult`].
    Place { x: i32, y: i32 },
    /// Reveal all scoring moves. Only allowed once per game.
    ///
    /// The response is a [`Response::Hint`] or [`Response::HintRefused`].
    Hint,
    /// Draw the board.
    ///
    /// The response is a [`Response::Board`].
    Show,
    /// The host should shut down.
    Bye,
}

/// Answer from the game host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Response {
    Okay,
    Evaluation {
        count: usize,
        windows: Vec<Window>,
    },
    MoveResult {
        accepted: bool,
        count: usize,
        windows: Vec<Window>,
        is_game_over: bool,
        score: usize,
        /// Why the move was rejected. Omitted for accepted moves.
        #[serde(skip_serializing_if = "Option::is_none")]
        #[serde(default)]
        reason: Option<String>,
    },
    Hint {
        moves: Vec<LegalMove>,
    },
    HintRefused {
        reason: String,
    },
    Board {
        rendering: String,
        score: usize,
        moves: usize,
        status: SessionStatus,
    },
    /// The request could not be understood.
    Error {
        message: String,
    },
}

impl Response {
    /// Describes the result of [`GameSession::submit_move()`] on `session`.
    pub fn move_result(session: &GameSession, result: Result<MoveOutcome, RejectedMove>) -> Self {
        match result {
            Ok(MoveOutcome { windows, game_over }) => Response::MoveResult {
                accepted: true,
                count: windows.len(),
                windows,
                is_game_over: game_over,
                score: session.score(),
                reason: None,
            },
            Err(rejected) => Response::MoveResult {
                accepted: false,
                count: 0,
                windows: Vec::new(),
                is_game_over: session.is_game_over(),
                score: session.score(),
                reason: Some(rejected.to_string()),
            },
        }
    }
}
