//! Message transports between a session and a referee server.

use crate::protocol::Message;

/// Ordered, reliable delivery of whole `Message`s.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<Message>;
}

pub mod heartbeat;
pub mod in_memory;
pub mod tcp;

pub use heartbeat::HeartbeatTransport;
pub use in_memory::InMemoryTransport;
pub use tcp::{TcpConfig, TcpTransport};
