use std::io::{BufRead, Write};

use fives::{visualize_board, GameConfig, GameSession, Request, Response};
use tracing::{info, trace, warn};

use crate::HighScore;

/// Runs one game session on behalf of a player who sends [`Request`]s.
pub struct Host {
    session: GameSession,
    high_score: HighScore,
}

impl Host {
    pub fn new(config: GameConfig, high_score: HighScore) -> anyhow::Result<Self> {
        Ok(Self {
            session: GameSession::new(config)?,
            high_score,
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn high_score(&self) -> &HighScore {
        &self.high_score
    }

    /// Answers a single request. Returns `None` when the player said goodbye.
    ///
    /// Rejected moves and a high score that cannot be saved are reported in
    /// the log, the player still gets a response.
    pub fn handle(&mut self, req: Request) -> anyhow::Result<Option<Response>> {
        let response = match req {
            Request::NewGame => {
                self.session.reset();
                info!("New game");
                Response::Okay
            }
            Request::Evaluate { x, y } => {
                let evaluation = self.session.evaluate(x, y);
                Response::Evaluation {
                    count: evaluation.count(),
                    windows: evaluation.windows,
                }
            }
            Request::Place { x, y } => {
                let result = self.session.submit_move(x, y);
                match &result {
                    Ok(outcome) if outcome.game_over => {
                        let score = self.session.score();
                        match self.high_score.record(score) {
                            Ok(true) => info!(score, "New high score"),
                            Ok(false) => {}
                            Err(err) => warn!(score, "Could not save high score: {:#}", err),
                        }
                    }
                    Ok(_) => {}
                    Err(rejected) => info!(x, y, "{}", rejected),
                }
                Response::move_result(&self.session, result)
            }
            Request::Hint => match self.session.hint() {
                Ok(moves) => Response::Hint { moves },
                Err(err) => Response::HintRefused {
                    reason: err.to_string(),
                },
            },
            Request::Show => Response::Board {
                rendering: visualize_board(self.session.board()),
                score: self.session.score(),
                moves: self.session.moves(),
                status: self.session.status(),
            },
            Request::Bye => return Ok(None),
        };
        Ok(Some(response))
    }

    /// Reads one request per line from `reader` and writes one response per line to
    /// `writer`, until a [`Request::Bye`] or the end of the input.
    pub fn run(&mut self, mut reader: impl BufRead, mut writer: impl Write) -> anyhow::Result<()> {
        let mut buf = String::new();
        loop {
            buf.clear(); // because read_line() appends to the buffer
            let num_bytes_read = reader.read_line(&mut buf)?;
            if num_bytes_read == 0 {
                break Ok(());
            }
            let line = buf.trim();
            if line.is_empty() {
                continue;
            }
            trace!(name: "Received request", request = %line);

            let response = match serde_json::from_str::<Request>(line) {
                Ok(req) => match self.handle(req)? {
                    Some(response) => response,
                    None => break Ok(()),
                },
                Err(err) => {
                    warn!(%err, "Malformed request");
                    Response::Error {
                        message: err.to_string(),
                    }
                }
            };
            serde_json::to_writer(&mut writer, &response)?;
            writeln!(writer)?;
            writer.flush()?;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn host() -> Host {
        Host::new(GameConfig::default(), HighScore::in_memory()).unwrap()
    }

    fn play_out(host: &mut Host) -> Option<Response> {
        let mut last = None;
        loop {
            let moves = fives::all_legal_moves(host.session().board(), host.session().ledger());
            let Some(m) = moves.first() else { break last };
            last = host.handle(Request::Place { x: m.x, y: m.y }).unwrap();
        }
    }

    fn run(host: &mut Host, input: &str) -> Vec<Response> {
        let mut output = Vec::new();
        host.run(Cursor::new(input), &mut output).unwrap();
        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn preview_then_place() {
        let mut host = host();
        let responses = run(
            &mut host,
            concat!(
                r#"{"type":"Evaluate","x":10,"y":6}"#, "\n",
                r#"{"type":"Place","x":10,"y":6}"#, "\n",
                r#"{"type":"Place","x":10,"y":6}"#, "\n",
            ),
        );
        assert_eq!(responses.len(), 3);
        let Response::Evaluation { count, windows } = &responses[0] else {
            panic!("unexpected response {:?}", responses[0]);
        };
        assert_eq!(*count, 1);
        match &responses[1] {
            Response::MoveResult {
                accepted,
                windows: placed,
                score,
                ..
            } => {
                assert!(accepted);
                assert_eq!(placed, windows);
                assert_eq!(*score, 1);
            }
            other => panic!("unexpected response {:?}", other),
        }
        assert!(matches!(
            &responses[2],
            Response::MoveResult { accepted: false, score: 1, .. }
        ));
        assert_eq!(host.session().moves(), 1);
    }

    #[test]
    fn hint_is_single_use_until_new_game() {
        let mut host = host();
        let responses = run(
            &mut host,
            concat!(
                r#"{"type":"Hint"}"#, "\n",
                r#"{"type":"Hint"}"#, "\n",
                r#"{"type":"NewGame"}"#, "\n",
                r#"{"type":"Hint"}"#, "\n",
            ),
        );
        assert!(matches!(&responses[0], Response::Hint { moves } if !moves.is_empty()));
        assert!(matches!(&responses[1], Response::HintRefused { .. }));
        assert_eq!(responses[2], Response::Okay);
        assert_eq!(responses[3], responses[0]);
    }

    #[test]
    fn bye_stops_reading() {
        let mut host = host();
        let responses = run(
            &mut host,
            concat!(
                "\n",
                "not json\n",
                r#"{"type":"Show"}"#, "\n",
                r#"{"type":"Bye"}"#, "\n",
                r#"{"type":"Place","x":10,"y":6}"#, "\n",
            ),
        );
        assert_eq!(responses.len(), 2);
        assert!(matches!(&responses[0], Response::Error { .. }));
        assert!(matches!(
            &responses[1],
            Response::Board { score: 0, moves: 0, rendering, .. } if rendering.contains('●')
        ));
        assert_eq!(host.session().moves(), 0);
    }

    #[test]
    fn game_over_updates_high_score() {
        let mut host = host();
        play_out(&mut host);
        assert!(host.session().is_game_over());
        assert!(host.session().score() > 0);
        assert_eq!(host.high_score().best(), host.session().score());

        let response = host.handle(Request::Place { x: 0, y: 0 }).unwrap();
        assert!(matches!(
            response,
            Some(Response::MoveResult { accepted: false, is_game_over: true, .. })
        ));
    }

    #[test]
    fn unsaved_high_score_still_answers_the_move() {
        let dir = tempfile::tempdir().unwrap();
        let sub_dir = dir.path().join("scores");
        std::fs::create_dir(&sub_dir).unwrap();
        let high_score = HighScore::load(sub_dir.join("high_score.json")).unwrap();
        std::fs::remove_dir(&sub_dir).unwrap();

        let mut host = Host::new(GameConfig::default(), high_score).unwrap();
        let last = play_out(&mut host);
        assert!(matches!(
            last,
            Some(Response::MoveResult { accepted: true, is_game_over: true, .. })
        ));
        assert!(host.session().score() > 0);
        assert_eq!(host.high_score().best(), 0);
    }
}
