//! Commonly used types for ease of import.

pub use crate::autoplay::{auto_play, AutoPlayConfig, AutoPlayer, GameReport, PlayOutcome};
pub use crate::engine::{Coord, Decision, GameResult, HuntTarget, MoveResult, ShotBoard, ShotOutcome};
pub use crate::session::{GameSession, LocalSession, SessionId};
pub use crate::transport::{InMemoryTransport, TcpTransport, Transport};
