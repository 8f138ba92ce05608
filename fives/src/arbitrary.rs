use quickcheck::{Arbitrary, Gen};

use crate::{all_legal_moves, GameConfig, GameSession, LegalMove, Window};

/// A default game after a random number of random legal moves.
#[derive(Clone, Debug)]
pub struct PlayedGame {
    pub session: GameSession,
    /// The windows scored by each move, in order.
    pub turns: Vec<Vec<Window>>,
}

impl Arbitrary for PlayedGame {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut session = GameSession::new(GameConfig::default()).unwrap();
        let mut turns = Vec::new();
        let num_moves = usize::arbitrary(g) % 40;
        for _ in 0..num_moves {
            let moves = all_legal_moves(session.board(), session.ledger());
            let Some(&LegalMove { x, y, .. }) = g.choose(&moves) else {
                break;
            };
            turns.push(session.submit_move(x, y).unwrap().windows);
        }
        PlayedGame { session, turns }
    }
}
