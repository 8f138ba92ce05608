use serde::{Deserialize, Serialize};

use crate::{evaluate, Board, Ledger};

/// A cell where a dot can be placed, and how many points it would score.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalMove {
    pub x: i32,
    pub y: i32,
    pub count: usize,
}

/// Is there any empty cell where a dot would score?
///
/// Stops at the first such cell.
pub fn any_legal_move_exists(board: &Board, ledger: &Ledger) -> bool {
    board
        .empty_cells()
        .any(|(x, y)| evaluate(board, ledger, x, y).is_legal())
}

/// Every cell where a dot would score, in row-major order.
pub fn all_legal_moves(board: &Board, ledger: &Ledger) -> Vec<LegalMove> {
    board
        .empty_cells()
        .filter_map(|(x, y)| {
            let count = evaluate(board, ledger, x, y).count();
            (count > 0).then_some(LegalMove { x, y, count })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::PlayedGame;
    use crate::GameConfig;

    quickcheck! {
        fn any_agrees_with_all(game: PlayedGame) -> bool {
            let board = game.session.board();
            let ledger = game.session.ledger();
            any_legal_move_exists(board, ledger) == !all_legal_moves(board, ledger).is_empty()
        }
    }

    #[test]
    fn seeded_board_has_moves() {
        let board = Board::new(GameConfig::default()).unwrap();
        let ledger = Ledger::new();
        assert!(any_legal_move_exists(&board, &ledger));

        let moves = all_legal_moves(&board, &ledger);
        // Both ends of each of the four seeded runs.
        for (x, y) in [(6, 10), (15, 10), (6, 11), (15, 11), (10, 6), (10, 15), (11, 6), (11, 15)] {
            assert!(
                moves.iter().any(|m| (m.x, m.y) == (x, y) && m.count >= 1),
                "missing ({}, {})",
                x,
                y
            );
        }
        assert!(moves.iter().all(|m| board.is_empty(m.x, m.y)));
    }

    #[test]
    fn empty_board_has_no_moves() {
        let board = Board::empty(13).unwrap();
        let ledger = Ledger::new();
        assert!(!any_legal_move_exists(&board, &ledger));
        assert!(all_legal_moves(&board, &ledger).is_empty());
    }

    #[test]
    fn scored_windows_remove_moves() {
        let mut board = Board::empty(13).unwrap();
        for x in 0..4 {
            board.place(x, 0).unwrap();
        }
        let mut ledger = Ledger::new();
        assert_eq!(
            all_legal_moves(&board, &ledger),
            vec![LegalMove { x: 4, y: 0, count: 1 }]
        );

        let evaluation = evaluate(&board, &ledger, 4, 0);
        board.place(4, 0).unwrap();
        ledger.commit(&evaluation.windows);
        assert!(!any_legal_move_exists(&board, &ledger));
    }
}
