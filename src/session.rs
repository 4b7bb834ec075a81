//! The game session seam: whatever can start a game and execute moves.

use std::fmt;

use rand::rngs::SmallRng;

use crate::engine::{Coord, MoveResult, Referee};

/// Opaque handle for one game, issued by `start_new_game`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(id: impl Into<String>) -> Self {
        SessionId(id.into())
    }

    /// The id as sent over the wire.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Failure to obtain a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The request never got an answer.
    Transport(String),
    /// The opponent refused to allocate a game.
    Rejected(String),
    /// The answer was not the one the protocol calls for.
    Protocol(String),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::Transport(e) => write!(f, "transport error: {}", e),
            SessionError::Rejected(e) => write!(f, "new game rejected: {}", e),
            SessionError::Protocol(e) => write!(f, "protocol error: {}", e),
        }
    }
}

impl std::error::Error for SessionError {}

/// Opponent side of a game, as seen by the shooter.
#[async_trait::async_trait]
pub trait GameSession: Send {
    /// Allocate a new game.
    async fn start_new_game(&mut self) -> Result<SessionId, SessionError>;

    /// Fire at `target`. Failures come back as `MoveResult::TransportFailure`.
    async fn execute_move(&mut self, session: &SessionId, target: Coord) -> MoveResult;
}

/// Session against a referee running in this process.
pub struct LocalSession {
    rng: SmallRng,
    shot_budget: Option<u32>,
    games: u64,
    current: Option<(SessionId, Referee)>,
}

impl LocalSession {
    /// Each new game gets a fleet drawn from `rng`.
    pub fn new(rng: SmallRng, shot_budget: Option<u32>) -> Self {
        Self {
            rng,
            shot_budget,
            games: 0,
            current: None,
        }
    }

    /// Referee of the game in progress.
    pub fn referee(&self) -> Option<&Referee> {
        self.current.as_ref().map(|(_, r)| r)
    }
}

#[async_trait::async_trait]
impl GameSession for LocalSession {
    async fn start_new_game(&mut self) -> Result<SessionId, SessionError> {
        let referee = Referee::random(&mut self.rng, self.shot_budget)
            .map_err(|e| SessionError::Rejected(e.to_string()))?;
        self.games += 1;
        let id = SessionId::new(format!("local-{}", self.games));
        log::info!("new local game {}", id);
        self.current = Some((id.clone(), referee));
        Ok(id)
    }

    async fn execute_move(&mut self, session: &SessionId, target: Coord) -> MoveResult {
        let Some((id, referee)) = self.current.as_mut() else {
            log::warn!("move {} without a game", target);
            return MoveResult::TransportFailure;
        };
        if id != session {
            log::warn!("move for unknown game {}", session);
            return MoveResult::TransportFailure;
        }
        match referee.fire(target.x(), target.y()) {
            Ok(result) => result,
            Err(e) => {
                log::warn!("move {} rejected: {}", target, e);
                MoveResult::TransportFailure
            }
        }
    }
}
