#![cfg_attr(not(feature = "std"), no_std)]

pub mod engine;

#[cfg(feature = "std")]
pub mod autoplay;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod manual;
#[cfg(feature = "std")]
pub mod prelude;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod remote;
#[cfg(feature = "std")]
pub mod server;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
pub mod ui;

pub use engine::*;

#[cfg(feature = "std")]
pub use autoplay::{auto_play, AutoPlayConfig, AutoPlayer, GameReport, PlayOutcome};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use manual::{parse_move, ManualPlayer};
#[cfg(feature = "std")]
pub use protocol::{Message, MoveReply, PROTOCOL_VERSION};
#[cfg(feature = "std")]
pub use remote::RemoteSession;
#[cfg(feature = "std")]
pub use server::RefereeServer;
#[cfg(feature = "std")]
pub use session::{GameSession, LocalSession, SessionError, SessionId};
#[cfg(feature = "std")]
pub use transport::{HeartbeatTransport, InMemoryTransport, TcpConfig, TcpTransport, Transport};
