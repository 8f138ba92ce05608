use serde::{Deserialize, Serialize};

use super::Axis;

/// Number of cells in a scoring run.
pub const WINDOW_LEN: usize = 5;

/// Exactly five collinear, adjacent cells on one axis.
///
/// A window is identified by its axis and its two endpoints. The endpoints
/// are kept sorted (`start < end` lexicographically), which makes the derived
/// equality structural: two windows covering the same cells compare equal no
/// matter which end they were built from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Window {
    pub axis: Axis,
    pub start: (i32, i32),
    pub end: (i32, i32),
}

impl Window {
    /// Builds the window on `axis` spanning from `back` steps behind
    /// `anchor` to `WINDOW_LEN - 1 - back` steps ahead of it.
    pub(crate) fn around(axis: Axis, anchor: (i32, i32), back: usize) -> Self {
        debug_assert!(back < WINDOW_LEN);
        let back = back as i32;
        let ahead = WINDOW_LEN as i32 - 1 - back;
        Self::from_endpoints(axis, axis.step(anchor, -back), axis.step(anchor, ahead))
    }

    /// Creates a window from two endpoints given in either order.
    ///
    /// Panics in debug builds if the endpoints are not four steps apart on `axis`.
    pub fn from_endpoints(axis: Axis, a: (i32, i32), b: (i32, i32)) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        debug_assert_eq!(axis.step(start, WINDOW_LEN as i32 - 1), end);
        Self { axis, start, end }
    }

    /// The five cells, from `start` to `end`.
    pub fn cells(&self) -> [(i32, i32); WINDOW_LEN] {
        std::array::from_fn(|k| self.axis.step(self.start, k as i32))
    }

    pub fn contains(&self, cell: (i32, i32)) -> bool {
        self.cells().contains(&cell)
    }

    /// Do both windows lie on the same axis and share at least one cell?
    pub fn overlaps(&self, other: &Window) -> bool {
        self.axis == other.axis && other.cells().iter().any(|&c| self.contains(c))
    }
}
