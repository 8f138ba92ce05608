use serde::{Deserialize, Serialize};

/// One of the four line directions on the board.
///
/// A direction and its negation describe the same axis, so every axis is
/// stored by its canonical unit step: `dx` is never negative, and if it is
/// zero then `dy` is positive. Walking "forward" along an axis therefore
/// always visits coordinates in increasing lexicographic `(x, y)` order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Axis {
    Horizontal,
    Vertical,
    DiagonalDown,
    DiagonalUp,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// The unit step `(dx, dy)` in the positive direction of this axis.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (1, -1),
        }
    }

    /// Moves `steps` cells along the axis; negative steps go backwards.
    pub fn step(self, (x, y): (i32, i32), steps: i32) -> (i32, i32) {
        let (dx, dy) = self.delta();
        (x + dx * steps, y + dy * steps)
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
