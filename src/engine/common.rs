//! Shared engine types: errors, cell states and move results.

use super::bitboard::BitBoardError;

/// What the shooter knows about one cell of the opponent board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellStatus {
    #[default]
    Unknown,
    Miss,
    Hit,
}

/// Effect of one accepted shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotOutcome {
    Hit,
    Miss,
    /// The cell had been fired on before. Nothing is recorded for it, even
    /// when the opponent reports it as a hit.
    AlreadyFired { hit: bool },
}

impl ShotOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::AlreadyFired { hit: true })
    }
}

/// Final result of a game from the shooter's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    Won,
    Lost,
}

/// Outcome of a single move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveResult {
    /// Shot accepted, game continues.
    Success {
        shot: ShotOutcome,
        score: Option<i32>,
    },
    /// Shot accepted and the game ended with it.
    GameOver {
        shot: ShotOutcome,
        result: GameResult,
        score: Option<i32>,
    },
    /// The attempt did not complete or the reply could not be understood.
    TransportFailure,
}

impl MoveResult {
    /// The shot effect, if the attempt went through.
    pub fn shot(&self) -> Option<ShotOutcome> {
        match self {
            MoveResult::Success { shot, .. } | MoveResult::GameOver { shot, .. } => Some(*shot),
            MoveResult::TransportFailure => None,
        }
    }

    pub fn game_result(&self) -> Option<GameResult> {
        match self {
            MoveResult::GameOver { result, .. } => Some(*result),
            _ => None,
        }
    }

    pub fn score(&self) -> Option<i32> {
        match self {
            MoveResult::Success { score, .. } | MoveResult::GameOver { score, .. } => *score,
            MoveResult::TransportFailure => None,
        }
    }
}

/// Errors returned by board, fleet and referee operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Coordinate outside the board.
    OutOfBounds { x: usize, y: usize },
    /// Ship index outside the fleet definition.
    InvalidIndex,
    /// Attempted to place a ship that is already placed.
    ShipAlreadyPlaced,
    /// Ship placement overlaps another ship.
    ShipOverlaps,
    /// Ship would stick out of the board.
    ShipOutOfBounds,
    /// Random placement gave up.
    UnableToPlaceShip,
    /// Cell was already fired on.
    AlreadyGuessed,
    /// A hit landed on the ship map but on no placed ship.
    UnknownShipHit,
    /// The game has already ended.
    GameFinished,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl core::fmt::Display for BoardError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({}, {}) is off the board", x, y)
            }
            BoardError::InvalidIndex => write!(f, "Ship index is out of range"),
            BoardError::ShipAlreadyPlaced => write!(f, "Ship is already placed on the board"),
            BoardError::ShipOverlaps => write!(f, "Ship placement overlaps with another ship"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
            BoardError::AlreadyGuessed => write!(f, "Cell was already fired on"),
            BoardError::UnknownShipHit => write!(f, "Hit did not match any placed ship"),
            BoardError::GameFinished => write!(f, "Game is already over"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
