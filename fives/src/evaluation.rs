use serde::{Deserialize, Serialize};

use crate::{Axis, Board, Ledger, Window, WINDOW_LEN};

/// The windows a dot at some cell would score.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// At most two windows per axis, grouped by axis.
    pub windows: Vec<Window>,
}

impl Evaluation {
    /// How many points the move is worth.
    pub fn count(&self) -> usize {
        self.windows.len()
    }

    pub fn is_legal(&self) -> bool {
        !self.windows.is_empty()
    }
}

/// A read-only view of the board with one extra dot on it.
///
/// This is used instead of temporarily placing the dot on the board, so that
/// evaluating never needs mutable access.
#[derive(Clone, Copy)]
struct Probe<'a> {
    board: &'a Board,
    dot: (i32, i32),
}

impl Probe<'_> {
    fn is_occupied(&self, cell: (i32, i32)) -> bool {
        cell == self.dot || self.board.is_occupied(cell.0, cell.1)
    }

    /// Number of consecutive dots next to the probed dot, not counting itself,
    /// going `direction` (+1 or -1) steps at a time along the axis.
    ///
    /// Stops looking after `limit` dots.
    fn run_length(&self, axis: Axis, direction: i32, limit: usize) -> usize {
        let mut len = 0;
        while len < limit && self.is_occupied(axis.step(self.dot, direction * (len as i32 + 1))) {
            len += 1;
        }
        len
    }
}

/// Computes which windows placing a dot at `(x, y)` would score.
///
/// For each axis, the dots on either side of `(x, y)` are counted. If the
/// run through `(x, y)` is at least five long, up to two windows are
/// candidates: the one reaching as far back as possible ("left-heavy") and
/// the one reaching as far forward as possible ("right-heavy"). They coincide
/// if the run is exactly five long. Candidates sharing a cell with an earlier
/// window on the same axis are discarded.
///
/// Cells that are occupied or out of bounds yield an empty evaluation.
/// Neither the board nor the ledger is changed.
pub fn evaluate(board: &Board, ledger: &Ledger, x: i32, y: i32) -> Evaluation {
    if !board.is_empty(x, y) {
        return Evaluation::default();
    }
    let probe = Probe { board, dot: (x, y) };
    let reach = WINDOW_LEN - 1;

    let mut windows = Vec::new();
    for axis in Axis::ALL {
        // Runs longer than a window don't produce any further candidates.
        let back = probe.run_length(axis, -1, reach);
        let ahead = probe.run_length(axis, 1, reach);
        if back + 1 + ahead < WINDOW_LEN {
            continue;
        }

        let left_heavy = back;
        let right_heavy = reach - ahead;
        debug_assert!(reach - left_heavy <= ahead);
        debug_assert!(right_heavy <= back);

        let mut candidates = vec![Window::around(axis, probe.dot, left_heavy)];
        let second = Window::around(axis, probe.dot, right_heavy);
        if second != candidates[0] {
            candidates.push(second);
        }
        windows.extend(candidates.into_iter().filter(|w| !ledger.would_overlap(w)));
    }
    Evaluation { windows }
}
