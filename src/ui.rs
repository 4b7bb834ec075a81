//! Text rendering of moves, boards and reports for the CLI.

use crate::autoplay::GameReport;
use crate::engine::{Coord, GameResult, MoveResult, ShotBoard, ShotOutcome};

/// One-line description of a move, e.g. `[ 3, 4] -> HIT`.
pub fn describe_move(target: Coord, result: &MoveResult) -> String {
    let shot = match result.shot() {
        None => return format!("{} -> request failed", target),
        Some(ShotOutcome::Hit) => "HIT",
        Some(ShotOutcome::Miss) => "MISS",
        Some(ShotOutcome::AlreadyFired { hit: true }) => "HIT (already fired)",
        Some(ShotOutcome::AlreadyFired { hit: false }) => "MISS (already fired)",
    };
    let mut line = format!("{} -> {}", target, shot);
    match result.game_result() {
        Some(GameResult::Won) => line.push_str(", game won"),
        Some(GameResult::Lost) => line.push_str(", game lost"),
        None => {}
    }
    if let Some(score) = result.score() {
        line.push_str(&format!(", score {}", score));
    }
    line
}

/// Board grid under a heading.
pub fn render_board(board: &ShotBoard) -> String {
    format!("Opponent board:\n{}\n", board)
}

/// One-line summary of a finished game.
pub fn render_report(report: &GameReport) -> String {
    let mut out = format!(
        "Game {} after {} shots ({} failed attempts, {} stale targets skipped)",
        report.outcome, report.shots, report.failures, report.discarded
    );
    if let Some(score) = report.score {
        out.push_str(&format!(", score {}", score));
    }
    out
}
