use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{interval, sleep, Duration, Instant};

use crate::protocol::{Message, PROTOCOL_VERSION};
use crate::transport::Transport;

/// Wraps a transport with keep-alives.
///
/// A `Heartbeat` goes out every `interval`, both while waiting in `recv` and
/// while the owner is busy elsewhere (a background task covers the idle
/// stretches). Incoming heartbeats are dropped so callers never see them.
/// `recv` fails once nothing has arrived for `idle_timeout`.
///
/// The inner transport's `recv` must be cancel-safe.
pub struct HeartbeatTransport<T: Transport + 'static> {
    inner: Arc<Mutex<T>>,
    interval: Duration,
    idle_timeout: Duration,
    last_seen: Instant,
    enabled: bool,
    keepalive: Option<JoinHandle<()>>,
}

impl<T: Transport + 'static> HeartbeatTransport<T> {
    pub fn new(inner: T, interval: Duration, idle_timeout: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(inner)),
            interval,
            idle_timeout,
            last_seen: Instant::now(),
            enabled: true,
            keepalive: None,
        }
    }

    /// Pass-through wrapper, for transports that never go stale.
    pub fn disabled(inner: T) -> Self {
        let mut this = Self::new(inner, Duration::from_secs(10), Duration::from_secs(45));
        this.enabled = false;
        this
    }

    /// Start the idle-time sender on first use, inside the runtime.
    fn ensure_keepalive(&mut self) {
        if !self.enabled || self.keepalive.is_some() {
            return;
        }
        let inner = Arc::clone(&self.inner);
        let period = self.interval;
        self.keepalive = Some(tokio::spawn(async move {
            loop {
                sleep(period).await;
                let mut transport = inner.lock().await;
                let sent = transport
                    .send(Message::Heartbeat {
                        version: PROTOCOL_VERSION,
                    })
                    .await;
                if let Err(e) = sent {
                    log::debug!("keep-alive stopped: {}", e);
                    break;
                }
            }
        }));
    }
}

impl<T: Transport + 'static> Drop for HeartbeatTransport<T> {
    fn drop(&mut self) {
        if let Some(task) = self.keepalive.take() {
            task.abort();
        }
    }
}

#[async_trait::async_trait]
impl<T: Transport + 'static> Transport for HeartbeatTransport<T> {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        self.ensure_keepalive();
        self.inner.lock().await.send(msg).await
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        self.ensure_keepalive();
        let mut inner = self.inner.lock().await;

        if !self.enabled {
            return loop {
                match inner.recv().await? {
                    Message::Heartbeat { .. } => continue,
                    msg => break Ok(msg),
                }
            };
        }

        self.last_seen = Instant::now();
        let mut ticker = interval(self.interval);
        ticker.tick().await;

        loop {
            tokio::select! {
                received = inner.recv() => {
                    match received? {
                        Message::Heartbeat { version } if version != PROTOCOL_VERSION => {
                            log::warn!("heartbeat version mismatch: expected {}, got {}", PROTOCOL_VERSION, version);
                            return Err(anyhow::anyhow!(
                                "Heartbeat version mismatch: expected {}, got {}",
                                PROTOCOL_VERSION,
                                version
                            ));
                        }
                        Message::Heartbeat { .. } => {
                            self.last_seen = Instant::now();
                        }
                        msg => return Ok(msg),
                    }
                }
                _ = ticker.tick() => {
                    if self.last_seen.elapsed() > self.idle_timeout {
                        log::warn!("peer idle for more than {:?}", self.idle_timeout);
                        return Err(anyhow::anyhow!(
                            "Connection idle timeout exceeded ({:?})",
                            self.idle_timeout
                        ));
                    }
                    inner
                        .send(Message::Heartbeat { version: PROTOCOL_VERSION })
                        .await?;
                }
            }
        }
    }
}
