use std::collections::BTreeSet;

use crate::{Axis, Window};

/// Every window that has been scored so far, grouped by axis.
///
/// The ledger only grows. A window can only be added if none of its cells is
/// already covered by an earlier window on the same axis. Windows on different
/// axes may freely cross each other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    /// The windows, in the order they were committed, per axis.
    windows: [Vec<Window>; 4],
    /// The union of the cells of `windows`, per axis.
    ///
    /// Derived from `windows`, for constant-time overlap checks.
    covered: [BTreeSet<(i32, i32)>; 4],
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Would scoring `candidate` reuse a cell of a window on the same axis?
    pub fn would_overlap(&self, candidate: &Window) -> bool {
        let covered = &self.covered[candidate.axis.index()];
        candidate.cells().iter().any(|cell| covered.contains(cell))
    }

    /// Records all windows scored by a single move.
    ///
    /// The windows of one move are added together. They may share the cell of
    /// the dot that was placed, but none of them may touch an earlier window on
    /// the same axis.
    pub fn commit(&mut self, windows: &[Window]) {
        debug_assert!(windows.iter().all(|w| !self.would_overlap(w)));
        for window in windows {
            let axis = window.axis.index();
            self.covered[axis].extend(window.cells());
            self.windows[axis].push(*window);
        }
    }

    pub fn len(&self) -> usize {
        self.windows.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.iter().all(Vec::is_empty)
    }

    /// The windows scored on one axis, oldest first.
    pub fn on_axis(&self, axis: Axis) -> &[Window] {
        &self.windows[axis.index()]
    }

    /// All scored windows, grouped by axis.
    pub fn iter(&self) -> impl Iterator<Item = &Window> + '_ {
        self.windows.iter().flatten()
    }
}
