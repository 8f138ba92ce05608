/// The error type for [`Board::place()`](crate::Board::place).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementError {
    OutOfBounds { x: i32, y: i32 },
    CellOccupied { x: i32, y: i32 },
}

impl std::error::Error for PlacementError {}

impl std::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlacementError::OutOfBounds { x, y } =>
                write!(f, "Cell ({}, {}) is outside of the board", x, y),
            PlacementError::CellOccupied { x, y } =>
                write!(f, "Cell ({}, {}) is already occupied", x, y),
        }
    }
}
