//! Serves referee games to one connected client.

use rand::rngs::SmallRng;
use rand::Rng;

use crate::engine::Referee;
use crate::protocol::{Message, MoveReply, PROTOCOL_VERSION};
use crate::transport::Transport;

/// Answers `NewGame` and `Move` requests on a single transport.
///
/// Holds at most one game; a new `NewGame` replaces the previous one.
pub struct RefereeServer<T: Transport> {
    transport: T,
    rng: SmallRng,
    shot_budget: Option<u32>,
    game: Option<(String, Referee)>,
    games_served: u64,
}

impl<T: Transport> RefereeServer<T> {
    pub fn new(transport: T, rng: SmallRng, shot_budget: Option<u32>) -> Self {
        Self {
            transport,
            rng,
            shot_budget,
            game: None,
            games_served: 0,
        }
    }

    /// Games started on this connection.
    pub fn games_served(&self) -> u64 {
        self.games_served
    }

    async fn handshake(&mut self) -> anyhow::Result<()> {
        match self.transport.recv().await? {
            Message::Handshake { version } if version == PROTOCOL_VERSION => {
                self.transport
                    .send(Message::HandshakeAck {
                        version: PROTOCOL_VERSION,
                    })
                    .await
            }
            Message::Handshake { version } => {
                log::warn!(
                    "handshake version mismatch: expected {}, peer sent {}",
                    PROTOCOL_VERSION,
                    version
                );
                self.transport
                    .send(Message::HandshakeAck {
                        version: PROTOCOL_VERSION,
                    })
                    .await?;
                Err(anyhow::anyhow!(
                    "Protocol version mismatch: expected {}, got {}",
                    PROTOCOL_VERSION,
                    version
                ))
            }
            other => Err(anyhow::anyhow!("Expected Handshake, got {:?}", other)),
        }
    }

    /// Serve until the peer hangs up. Only a failed handshake is an error.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        self.handshake().await?;
        while let Ok(msg) = self.transport.recv().await {
            let Some(reply) = self.handle(msg) else {
                continue;
            };
            if let Err(e) = self.transport.send(reply).await {
                log::warn!("failed to reply: {}", e);
                break;
            }
        }
        log::info!("client disconnected after {} games", self.games_served);
        Ok(())
    }

    fn handle(&mut self, msg: Message) -> Option<Message> {
        match msg {
            Message::NewGame { login } => Some(self.new_game(&login)),
            Message::Move { seq, game_id, x, y } => Some(Message::MoveReply {
                seq,
                reply: self.fire(&game_id, x, y),
            }),
            Message::Heartbeat { .. } => None,
            other => Some(Message::Error {
                reason: format!("unexpected message {:?}", other),
            }),
        }
    }

    fn new_game(&mut self, login: &str) -> Message {
        match Referee::random(&mut self.rng, self.shot_budget) {
            Ok(referee) => {
                let game_id = format!("{:016x}", self.rng.random::<u64>());
                log::info!("game {} started for {}", game_id, login);
                self.game = Some((game_id.clone(), referee));
                self.games_served += 1;
                Message::GameStarted { game_id }
            }
            Err(e) => Message::Error {
                reason: e.to_string(),
            },
        }
    }

    fn fire(&mut self, game_id: &str, x: u8, y: u8) -> MoveReply {
        let Some((id, referee)) = self.game.as_mut() else {
            return MoveReply::error();
        };
        if id != game_id {
            log::debug!("move for stale game {}", game_id);
            return MoveReply::error();
        }
        match referee.fire(x as usize, y as usize) {
            Ok(result) => result.into(),
            Err(e) => {
                log::debug!("move ({}, {}) rejected: {}", x, y, e);
                MoveReply::error()
            }
        }
    }
}
