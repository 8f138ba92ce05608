use crate::PlacementError;

/// The error type for [`GameConfig::validate()`](crate::GameConfig::validate).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    BoardTooSmall { size: usize },
    BoardTooLarge { size: usize },
    EvenBoardSize { size: usize },
    LineTooShort { line_length: usize },
}

impl std::error::Error for ConfigError {}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::BoardTooSmall { size } =>
                write!(f, "Board size {} is too small, it must be at least {}", size, crate::MIN_BOARD_SIZE),
            ConfigError::BoardTooLarge { size } =>
                write!(f, "Board size {} is too large, it must be at most {}", size, crate::MAX_BOARD_SIZE),
            ConfigError::EvenBoardSize { size } =>
                write!(f, "Board size {} is even, but the board needs a center cell", size),
            ConfigError::LineTooShort { line_length } =>
                write!(f, "Seed line length {} is shorter than a scoring window", line_length),
        }
    }
}

/// Why [`GameSession::submit_move()`](crate::GameSession::submit_move) refused a move.
///
/// None of these change the session: board, ledger and score stay as they were.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RejectedMove {
    OutOfBounds { x: i32, y: i32 },
    CellOccupied { x: i32, y: i32 },
    /// The dot would not complete any unscored window.
    NoWindowCompleted { x: i32, y: i32 },
    /// The session has already ended and needs a reset.
    GameOver,
}

impl From<PlacementError> for RejectedMove {
    fn from(err: PlacementError) -> Self {
        match err {
            PlacementError::OutOfBounds { x, y } => RejectedMove::OutOfBounds { x, y },
            PlacementError::CellOccupied { x, y } => RejectedMove::CellOccupied { x, y },
        }
    }
}

impl std::error::Error for RejectedMove {}

impl std::fmt::Display for RejectedMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectedMove::OutOfBounds { x, y } => {
                write!(f, "{}", PlacementError::OutOfBounds { x: *x, y: *y })
            }
            RejectedMove::CellOccupied { x, y } => {
                write!(f, "{}", PlacementError::CellOccupied { x: *x, y: *y })
            }
            RejectedMove::NoWindowCompleted { x, y } => write!(
                f,
                "A dot at ({}, {}) would not complete any unscored line of five",
                x, y
            ),
            RejectedMove::GameOver => write!(f, "The game is over, start a new one"),
        }
    }
}

/// The hint was already revealed in this game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HintAlreadyUsed;

impl std::error::Error for HintAlreadyUsed {}

impl std::fmt::Display for HintAlreadyUsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The hint can only be used once per game")
    }
}
