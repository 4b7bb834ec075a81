//! Hunt/target shot selection.
//!
//! While the target queue is empty the strategy hunts: it fires across the board in
//! checkerboard order, since every ship of length two or more covers cells of
//! both colours. Each hit queues its Unknown neighbors, and the strategy then
//! works the queue until it drains.

use super::board::ShotBoard;
use super::common::{GameResult, MoveResult, ShotOutcome};
use super::coord::Coord;
use super::queue::TargetQueue;

/// What the strategy wants to do on the current iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Fire at this cell.
    Fire(Coord),
    /// A queued cell that became known while waiting; nothing is fired.
    Discard(Coord),
    /// No Unknown cell is left.
    Stuck,
}

/// Which phase the strategy is in, derived from the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Hunting,
    Targeting,
}

/// Board, queue and scan parity for one game.
#[derive(Clone, Debug, Default)]
pub struct HuntTarget {
    board: ShotBoard,
    queue: TargetQueue,
    parity: u8,
}

impl HuntTarget {
    /// Fresh game: empty board, empty queue, parity 0.
    pub fn new() -> Self {
        Self {
            board: ShotBoard::new(),
            queue: TargetQueue::new(),
            parity: 0,
        }
    }

    /// Back to a fresh game state.
    pub fn reset(&mut self) {
        self.board.reset();
        self.queue.clear();
        self.parity = 0;
    }

    /// What is known about the opponent board so far.
    pub fn board(&self) -> &ShotBoard {
        &self.board
    }

    /// Mutable board, for seeding a position.
    pub fn board_mut(&mut self) -> &mut ShotBoard {
        &mut self.board
    }

    /// Cells waiting to be fired on.
    pub fn queue(&self) -> &TargetQueue {
        &self.queue
    }

    /// Mutable queue, for seeding a position.
    pub fn queue_mut(&mut self) -> &mut TargetQueue {
        &mut self.queue
    }

    /// Checkerboard colour the next hunt scan tries first.
    pub fn parity(&self) -> u8 {
        self.parity
    }

    /// `Targeting` while the queue holds entries, `Hunting` otherwise.
    pub fn mode(&self) -> Mode {
        if self.queue.is_empty() {
            Mode::Hunting
        } else {
            Mode::Targeting
        }
    }

    /// Pick the next action. Pops at most one queue entry.
    pub fn decide(&mut self) -> Decision {
        if let Some(at) = self.queue.pop() {
            if self.board.is_unknown(at) {
                return Decision::Fire(at);
            }
            log::trace!("discarding queued {}, already known", at);
            return Decision::Discard(at);
        }
        match self.hunt() {
            Some(at) => Decision::Fire(at),
            None => Decision::Stuck,
        }
    }

    /// Checkerboard scan: current parity, then the opposite one, then any
    /// Unknown cell at all.
    fn hunt(&mut self) -> Option<Coord> {
        if let Some(at) = self.board.first_unknown(Some(self.parity)) {
            return Some(at);
        }
        let other = self.parity ^ 1;
        if let Some(at) = self.board.first_unknown(Some(other)) {
            log::debug!("parity {} exhausted, switching to {}", self.parity, other);
            self.parity = other;
            return Some(at);
        }
        self.board.first_unknown(None)
    }

    /// Apply the result of firing at `at`.
    ///
    /// Transport failures change nothing. Repeated shots are not recorded, but
    /// a reported hit still queues neighbors. Returns the final result when
    /// the game is over.
    pub fn observe(&mut self, at: Coord, result: &MoveResult) -> Option<GameResult> {
        let shot = result.shot()?;
        if let ShotOutcome::Hit | ShotOutcome::Miss = shot {
            self.board.record(at.x(), at.y(), shot.is_hit());
        }
        if shot.is_hit() {
            let queued = self.queue.enqueue_neighbors(&self.board, at);
            log::trace!("hit at {}, queued {} neighbors", at, queued);
        }
        result.game_result()
    }
}
