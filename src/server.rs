#![cfg(feature = "std")]

//! Runs an [`Authority`] against two participant links.

use rand::Rng;

use crate::{
    authority::{Authority, MatchRecord},
    protocol::{
        Envelope, Message, ParticipantId, AUTHORITY_PARTICIPANT, GUEST_PARTICIPANT,
        PROTOCOL_VERSION,
    },
    transport::Transport,
};

struct Link {
    id: ParticipantId,
    transport: Box<dyn Transport>,
}

/// Summary of a finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub matches: Vec<MatchRecord>,
    /// Participant whose `Leave` ended the session.
    pub left_by: ParticipantId,
}

/// The single serialization point of a session: every request from either
/// participant goes through here, one at a time, in arrival order.
pub struct AuthorityServer<R: Rng> {
    authority: Authority<R>,
    links: [Link; 2],
}

impl<R: Rng + Send> AuthorityServer<R> {
    /// `host` is the participant running alongside the authority.
    pub fn new(
        authority: Authority<R>,
        host: Box<dyn Transport>,
        guest: Box<dyn Transport>,
    ) -> Self {
        Self {
            authority,
            links: [
                Link {
                    id: AUTHORITY_PARTICIPANT,
                    transport: host,
                },
                Link {
                    id: GUEST_PARTICIPANT,
                    transport: guest,
                },
            ],
        }
    }

    pub fn authority(&self) -> &Authority<R> {
        &self.authority
    }

    async fn handshake(link: &mut Link) -> anyhow::Result<()> {
        match link.transport.recv().await? {
            Message::Handshake { version } if version == PROTOCOL_VERSION => {
                link.transport
                    .send(Message::HandshakeAck {
                        version: PROTOCOL_VERSION,
                        participant: link.id,
                    })
                    .await
            }
            Message::Handshake { version } => Err(anyhow::anyhow!(
                "Protocol version mismatch from {}: expected {}, got {}",
                link.id,
                PROTOCOL_VERSION,
                version
            )),
            other => Err(anyhow::anyhow!(
                "Expected Handshake from {}, got unexpected message: {:?}",
                link.id,
                other
            )),
        }
    }

    /// Deliver each envelope to exactly the participants it targets.
    async fn dispatch(&mut self, envelopes: Vec<Envelope>) -> anyhow::Result<()> {
        for envelope in envelopes {
            for link in self.links.iter_mut() {
                if envelope.delivery.includes(link.id) {
                    link.transport.send(envelope.message.clone()).await?;
                }
            }
        }
        Ok(())
    }

    /// Tell everyone but `except` the session is over. Best effort.
    async fn close(&mut self, except: ParticipantId) {
        for link in self.links.iter_mut().filter(|l| l.id != except) {
            if let Err(e) = link.transport.send(Message::MatchClosed).await {
                log::debug!("could not notify {} of closure: {}", link.id, e);
            }
        }
    }

    /// Next message from whichever participant speaks first.
    async fn next_request(&mut self) -> (ParticipantId, anyhow::Result<Message>) {
        let [host, guest] = &mut self.links;
        tokio::select! {
            msg = host.transport.recv() => (host.id, msg),
            msg = guest.transport.recv() => (guest.id, msg),
        }
    }

    /// Handshake both links, start the first match and serve requests until a
    /// participant leaves or its link drops.
    pub async fn run(&mut self) -> anyhow::Result<SessionReport> {
        for link in self.links.iter_mut() {
            Self::handshake(link).await?;
        }
        let opening = self.authority.bootstrap();
        self.dispatch(opening).await?;

        loop {
            let (from, msg) = self.next_request().await;
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    log::warn!("link to {} dropped: {}", from, e);
                    self.close(from).await;
                    return Err(e.context(format!("participant {} disconnected", from)));
                }
            };
            if msg == Message::Leave {
                log::info!("participant {} left the session", from);
                self.close(from).await;
                return Ok(SessionReport {
                    matches: self.authority.history().to_vec(),
                    left_by: from,
                });
            }
            let envelopes = self.authority.handle(from, msg);
            self.dispatch(envelopes).await?;
        }
    }
}
