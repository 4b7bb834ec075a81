//! In-process opponent that owns a fleet and rules on shots.

use rand::Rng;

use super::common::{BoardError, GameResult, MoveResult, ShotOutcome};
use super::config::BOARD_CELLS;
use super::coord::Coord;
use super::fleet::{Fleet, Impact};

/// Rules on one game: every accepted shot counts against the optional budget,
/// sinking the whole fleet wins, running out of shots loses.
///
/// The score reported with a win is the number of cells never fired at;
/// a loss scores zero.
#[derive(Debug)]
pub struct Referee {
    fleet: Fleet,
    shot_budget: Option<u32>,
    shots: u32,
    finished: Option<GameResult>,
}

impl Referee {
    /// Referee over `fleet`; `shot_budget` of `None` means unlimited.
    pub fn new(fleet: Fleet, shot_budget: Option<u32>) -> Self {
        Self {
            fleet,
            shot_budget,
            shots: 0,
            finished: None,
        }
    }

    /// Referee over a randomly placed standard fleet.
    pub fn random<R: Rng>(rng: &mut R, shot_budget: Option<u32>) -> Result<Self, BoardError> {
        Ok(Self::new(Fleet::random(rng)?, shot_budget))
    }

    /// The hidden fleet.
    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Accepted shots, repeats included.
    pub fn shots(&self) -> u32 {
        self.shots
    }

    /// Final result, once the game is over.
    pub fn finished(&self) -> Option<GameResult> {
        self.finished
    }

    /// Rule on a shot at `(x, y)`.
    ///
    /// Off-board coordinates and shots after the game ended are errors; a
    /// repeated shot is accepted and reported as `AlreadyFired`.
    pub fn fire(&mut self, x: usize, y: usize) -> Result<MoveResult, BoardError> {
        if self.finished.is_some() {
            return Err(BoardError::GameFinished);
        }
        let at = Coord::try_from((x, y))?;
        let shot = match self.fleet.fire(at.x(), at.y()) {
            Ok(Impact::Miss) => ShotOutcome::Miss,
            Ok(Impact::Hit) => ShotOutcome::Hit,
            Ok(Impact::Sink(name)) => {
                log::debug!("{} sunk at {}", name, at);
                ShotOutcome::Hit
            }
            Err(BoardError::AlreadyGuessed) => ShotOutcome::AlreadyFired {
                hit: self.fleet.previous_shot(at.x(), at.y())? == Some(true),
            },
            Err(e) => return Err(e),
        };
        self.shots += 1;

        let result = if self.fleet.all_sunk() {
            Some(GameResult::Won)
        } else if self.shot_budget.is_some_and(|b| self.shots >= b) {
            Some(GameResult::Lost)
        } else {
            None
        };
        self.finished = result;
        Ok(match result {
            Some(GameResult::Won) => MoveResult::GameOver {
                shot,
                result: GameResult::Won,
                score: Some(BOARD_CELLS.saturating_sub(self.fleet.shots_taken()) as i32),
            },
            Some(GameResult::Lost) => MoveResult::GameOver {
                shot,
                result: GameResult::Lost,
                score: Some(0),
            },
            None => MoveResult::Success { shot, score: None },
        })
    }
}
