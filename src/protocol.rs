//! Wire messages between a client session and a referee server.

use serde::{Deserialize, Serialize};

use crate::engine::{GameResult, MoveResult, ShotOutcome};

/// Bumped whenever `Message` changes shape.
pub const PROTOCOL_VERSION: u16 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Opens a connection; the server answers with `HandshakeAck`.
    Handshake { version: u16 },
    HandshakeAck { version: u16 },
    /// Ask for a fresh game.
    NewGame { login: String },
    GameStarted { game_id: String },
    /// Fire at `(x, y)` in game `game_id`. `seq` is echoed in the reply.
    Move {
        seq: u32,
        game_id: String,
        x: u8,
        y: u8,
    },
    /// Answer to the `Move` with the same `seq`.
    MoveReply { seq: u32, reply: MoveReply },
    /// Request rejected before it reached a game.
    Error { reason: String },
    /// Keep-alive, swallowed by `HeartbeatTransport`.
    Heartbeat { version: u16 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShotReport {
    Hit,
    Miss,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Server answer to a `Move`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReply {
    pub result: ShotReport,
    /// The cell had been fired on before.
    pub already: bool,
    pub game_status: GameStatus,
    pub score: Option<i32>,
}

impl MoveReply {
    /// Reply for a move the server could not rule on.
    pub fn error() -> Self {
        MoveReply {
            result: ShotReport::Error,
            already: false,
            game_status: GameStatus::InProgress,
            score: None,
        }
    }
}

impl From<MoveReply> for MoveResult {
    fn from(reply: MoveReply) -> Self {
        let hit = match reply.result {
            ShotReport::Hit => true,
            ShotReport::Miss => false,
            ShotReport::Error => return MoveResult::TransportFailure,
        };
        let shot = match (reply.already, hit) {
            (true, hit) => ShotOutcome::AlreadyFired { hit },
            (false, true) => ShotOutcome::Hit,
            (false, false) => ShotOutcome::Miss,
        };
        let score = reply.score;
        match reply.game_status {
            GameStatus::InProgress => MoveResult::Success { shot, score },
            GameStatus::Won => MoveResult::GameOver {
                shot,
                result: GameResult::Won,
                score,
            },
            GameStatus::Lost => MoveResult::GameOver {
                shot,
                result: GameResult::Lost,
                score,
            },
        }
    }
}

impl From<MoveResult> for MoveReply {
    fn from(result: MoveResult) -> Self {
        let (shot, game_status, score) = match result {
            MoveResult::Success { shot, score } => (shot, GameStatus::InProgress, score),
            MoveResult::GameOver {
                shot,
                result: GameResult::Won,
                score,
            } => (shot, GameStatus::Won, score),
            MoveResult::GameOver {
                shot,
                result: GameResult::Lost,
                score,
            } => (shot, GameStatus::Lost, score),
            MoveResult::TransportFailure => return MoveReply::error(),
        };
        MoveReply {
            result: if shot.is_hit() {
                ShotReport::Hit
            } else {
                ShotReport::Miss
            },
            already: matches!(shot, ShotOutcome::AlreadyFired { .. }),
            game_status,
            score,
        }
    }
}
