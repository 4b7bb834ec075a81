use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use tokio::task::yield_now;

use crate::protocol::Message;
use crate::transport::Transport;

type Queue = Arc<Mutex<VecDeque<Message>>>;

/// One end of an in-process message pipe. `recv` fails once the peer end has
/// been dropped and nothing is left to read.
pub struct InMemoryTransport {
    inbox: Queue,
    outbox: Queue,
}

impl InMemoryTransport {
    /// Two connected ends.
    pub fn pair() -> (Self, Self) {
        let a: Queue = Arc::default();
        let b: Queue = Arc::default();
        (
            Self {
                inbox: a.clone(),
                outbox: b.clone(),
            },
            Self { inbox: b, outbox: a },
        )
    }
}

fn poisoned<T>(_: T) -> anyhow::Error {
    anyhow::anyhow!("In-memory queue poisoned")
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        if Arc::strong_count(&self.outbox) == 1 {
            return Err(anyhow::anyhow!("Channel closed"));
        }
        self.outbox.lock().map_err(poisoned)?.push_back(msg);
        Ok(())
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        loop {
            let next = self.inbox.lock().map_err(poisoned)?.pop_front();
            if let Some(msg) = next {
                return Ok(msg);
            }
            if Arc::strong_count(&self.inbox) == 1 {
                return Err(anyhow::anyhow!("Channel closed"));
            }
            yield_now().await;
        }
    }
}
