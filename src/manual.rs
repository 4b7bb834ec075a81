//! Manual-entry mode: one `x y` move per input line.

use std::io::{BufRead, Write};

use crate::autoplay::{GameReport, PlayOutcome};
use crate::engine::{Coord, ShotBoard, ShotOutcome, BOARD_SIZE};
use crate::session::{GameSession, SessionId};
use crate::ui;

/// Parse `"x y"`. Each component must be an integer in `[0, BOARD_SIZE)`.
pub fn parse_move(line: &str) -> Result<Coord, String> {
    let mut parts = line.split_whitespace();
    let (Some(xs), Some(ys), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err("Enter moves as: x y".to_string());
    };
    let x: i64 = xs
        .parse()
        .map_err(|_| format!("Invalid number '{}'", xs))?;
    let y: i64 = ys
        .parse()
        .map_err(|_| format!("Invalid number '{}'", ys))?;
    if x < 0 || y < 0 {
        return Err(format!("Invalid coordinates. Use 0-{}.", BOARD_SIZE - 1));
    }
    Coord::new(x as usize, y as usize)
        .ok_or_else(|| format!("Invalid coordinates. Use 0-{}.", BOARD_SIZE - 1))
}

/// Reads moves from `input` and reports results to `output` until the game
/// ends or input runs out.
pub struct ManualPlayer<R, W> {
    input: R,
    output: W,
    board: ShotBoard,
}

impl<R: BufRead, W: Write> ManualPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            board: ShotBoard::new(),
        }
    }

    /// Cells recorded from the replies so far.
    pub fn board(&self) -> &ShotBoard {
        &self.board
    }

    pub async fn play<S: GameSession + ?Sized>(
        &mut self,
        session: &mut S,
        id: &SessionId,
    ) -> anyhow::Result<GameReport> {
        let mut report = GameReport {
            outcome: PlayOutcome::Quit,
            shots: 0,
            failures: 0,
            discarded: 0,
            score: None,
        };
        writeln!(
            self.output,
            "Enter moves as: x y (0-{}). 'q' or end of input quits.",
            BOARD_SIZE - 1
        )?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let line = line.trim();
            if line.eq_ignore_ascii_case("q") || line.eq_ignore_ascii_case("quit") {
                break;
            }
            if line.is_empty() {
                continue;
            }
            let target = match parse_move(line) {
                Ok(target) => target,
                Err(e) => {
                    writeln!(self.output, "{}", e)?;
                    continue;
                }
            };

            let result = session.execute_move(id, target).await;
            writeln!(self.output, "{}", ui::describe_move(target, &result))?;
            let Some(shot) = result.shot() else {
                report.failures += 1;
                continue;
            };
            report.shots += 1;
            if let Some(score) = result.score() {
                report.score = Some(score);
            }
            if let ShotOutcome::Hit | ShotOutcome::Miss = shot {
                self.board.record(target.x(), target.y(), shot.is_hit());
            }
            write!(self.output, "{}", ui::render_board(&self.board))?;
            if let Some(end) = result.game_result() {
                report.outcome = end.into();
                break;
            }
        }
        Ok(report)
    }
}
