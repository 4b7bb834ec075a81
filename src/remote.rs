//! `GameSession` backed by a referee server on the other end of a transport.

use crate::engine::{Coord, MoveResult};
use crate::protocol::{Message, PROTOCOL_VERSION};
use crate::session::{GameSession, SessionError, SessionId};
use crate::transport::Transport;

pub struct RemoteSession<T: Transport> {
    transport: T,
    login: String,
    handshaken: bool,
    next_seq: u32,
}

impl<T: Transport> RemoteSession<T> {
    /// The handshake runs lazily, before the first request.
    pub fn new(transport: T, login: impl Into<String>) -> Self {
        Self {
            transport,
            login: login.into(),
            handshaken: false,
            next_seq: 0,
        }
    }

    /// Name sent with every `NewGame`.
    pub fn login(&self) -> &str {
        &self.login
    }

    async fn ensure_handshake(&mut self) -> anyhow::Result<()> {
        if self.handshaken {
            return Ok(());
        }
        self.transport
            .send(Message::Handshake {
                version: PROTOCOL_VERSION,
            })
            .await?;
        match self.transport.recv().await? {
            Message::HandshakeAck { version } if version == PROTOCOL_VERSION => {
                self.handshaken = true;
                Ok(())
            }
            Message::HandshakeAck { version } => Err(anyhow::anyhow!(
                "Protocol version mismatch: expected {}, got {}",
                PROTOCOL_VERSION,
                version
            )),
            other => Err(anyhow::anyhow!("Expected HandshakeAck, got {:?}", other)),
        }
    }

    /// Send one move and wait for its reply. Replies to earlier moves that
    /// gave up waiting are skipped.
    async fn request_move(&mut self, session: &SessionId, target: Coord) -> anyhow::Result<MoveResult> {
        self.ensure_handshake().await?;
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        self.transport
            .send(Message::Move {
                seq,
                game_id: session.as_str().to_owned(),
                x: target.x() as u8,
                y: target.y() as u8,
            })
            .await?;
        loop {
            match self.transport.recv().await? {
                Message::MoveReply { seq: got, reply } if got == seq => return Ok(reply.into()),
                Message::MoveReply { seq: got, .. } => {
                    log::debug!("dropping late reply #{} while waiting for #{}", got, seq);
                }
                Message::Error { reason } => return Err(anyhow::anyhow!("Move refused: {}", reason)),
                other => return Err(anyhow::anyhow!("Expected MoveReply, got {:?}", other)),
            }
        }
    }
}

#[async_trait::async_trait]
impl<T: Transport> GameSession for RemoteSession<T> {
    async fn start_new_game(&mut self) -> Result<SessionId, SessionError> {
        self.ensure_handshake()
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;
        let request = Message::NewGame {
            login: self.login.clone(),
        };
        self.transport
            .send(request)
            .await
            .map_err(|e| SessionError::Transport(e.to_string()))?;
        loop {
            let reply = self
                .transport
                .recv()
                .await
                .map_err(|e| SessionError::Transport(e.to_string()))?;
            match reply {
                Message::GameStarted { game_id } => {
                    log::info!("new game started, game_id={}", game_id);
                    return Ok(SessionId::new(game_id));
                }
                Message::MoveReply { seq, .. } => {
                    log::debug!("dropping late reply #{} while waiting for a new game", seq);
                }
                Message::Error { reason } => return Err(SessionError::Rejected(reason)),
                other => {
                    return Err(SessionError::Protocol(format!(
                        "expected GameStarted, got {:?}",
                        other
                    )))
                }
            }
        }
    }

    async fn execute_move(&mut self, session: &SessionId, target: Coord) -> MoveResult {
        match self.request_move(session, target).await {
            Ok(result) => result,
            Err(e) => {
                log::warn!("move {} failed: {}", target, e);
                MoveResult::TransportFailure
            }
        }
    }
}
