#![cfg(feature = "std")]

use rand::rngs::SmallRng;

use crate::{
    core::{ActionKind, RematchChoice},
    player::Player,
    protocol::{Message, PROTOCOL_VERSION},
    replica::Replica,
    transport::Transport,
};

/// A participant: mirrors the match in a [`Replica`] and relays its player's
/// decisions to the authority.
pub struct PlayerNode {
    player: Box<dyn Player>,
    transport: Box<dyn Transport>,
    replica: Option<Replica>,
}

impl PlayerNode {
    pub fn new(player: Box<dyn Player>, transport: Box<dyn Transport>) -> Self {
        Self {
            player,
            transport,
            replica: None,
        }
    }

    /// Local view, available after the handshake.
    pub fn replica(&self) -> Option<&Replica> {
        self.replica.as_ref()
    }

    /// Announce our version and learn our participant id.
    async fn handshake(&mut self) -> anyhow::Result<Replica> {
        self.transport
            .send(Message::Handshake {
                version: PROTOCOL_VERSION,
            })
            .await?;
        match self.transport.recv().await? {
            Message::HandshakeAck {
                version,
                participant,
            } if version == PROTOCOL_VERSION => {
                log::debug!("joined as participant {}", participant);
                Ok(Replica::new(participant))
            }
            Message::HandshakeAck { version, .. } => Err(anyhow::anyhow!(
                "Protocol version mismatch in HandshakeAck: expected {}, got {}",
                PROTOCOL_VERSION,
                version
            )),
            other => Err(anyhow::anyhow!(
                "Expected HandshakeAck, got unexpected message: {:?}",
                other
            )),
        }
    }

    /// Play until the session closes or our player leaves.
    pub async fn run(&mut self, rng: &mut SmallRng) -> anyhow::Result<()> {
        let mut replica = self.handshake().await?;
        let result = self.play(&mut replica, rng).await;
        self.replica = Some(replica);
        result
    }

    async fn play(&mut self, replica: &mut Replica, rng: &mut SmallRng) -> anyhow::Result<()> {
        loop {
            let msg = self.transport.recv().await?;
            if msg == Message::MatchClosed {
                log::info!("session closed by the authority");
                return Ok(());
            }
            if msg.is_request() {
                return Err(anyhow::anyhow!(
                    "Authority sent a request-only message: {:?}",
                    msg
                ));
            }
            replica.apply(&msg);
            self.player.handle_message(replica, &msg);

            let next = match msg {
                Message::TurnChanged { .. } if replica.is_my_turn() => self.next_action(replica, rng),
                Message::WinnerSet { .. } if replica.is_host() => self
                    .player
                    .choose_rematch(replica)
                    .map(|choice| Message::RematchRequest {
                        swap_colors: choice == RematchChoice::Swap,
                    }),
                _ => continue,
            };

            match next {
                Some(request) => self.transport.send(request).await?,
                None => {
                    log::info!("player left the session");
                    self.transport.send(Message::Leave).await?;
                    return Ok(());
                }
            }
        }
    }

    /// Ask the player until it names something the authority will accept.
    fn next_action(&mut self, replica: &Replica, rng: &mut SmallRng) -> Option<Message> {
        loop {
            let action = self.player.choose_action(rng, replica)?;
            if !replica.can_request(action) {
                self.player.handle_invalid_action(replica, action);
                continue;
            }
            let (x, z) = (action.cell.x(), action.cell.z());
            return Some(match action.kind {
                ActionKind::PlaceTrap => Message::PlaceTrapRequest { x, z },
                ActionKind::PlacePiece => Message::PlacePieceRequest { x, z },
            });
        }
    }
}
