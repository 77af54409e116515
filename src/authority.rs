#![cfg(feature = "std")]

//! The authoritative side of a session: owns the engine and the match
//! session, turns participant requests into routed broadcasts.

use rand::Rng;

use crate::core::{
    start_match, Action, ActionKind, Cell, Color, Event, GameEngine, MatchSession,
    RematchChoice,
};
use crate::protocol::{
    Delivery, Envelope, Message, ParticipantId, AUTHORITY_PARTICIPANT, GUEST_PARTICIPANT,
};

/// Result of one finished match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchRecord {
    pub host_color: Color,
    pub winner: Color,
}

pub struct Authority<R: Rng> {
    engine: GameEngine,
    session: MatchSession,
    host_color: Color,
    rng: R,
    history: Vec<MatchRecord>,
}

impl<R: Rng> Authority<R> {
    pub fn new(session: MatchSession, rng: R) -> Self {
        Self {
            engine: GameEngine::new(),
            host_color: session.next_host_color(),
            session,
            rng,
            history: Vec::new(),
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn session(&self) -> &MatchSession {
        &self.session
    }

    /// Colour the host participant plays this match.
    pub fn host_color(&self) -> Color {
        self.host_color
    }

    /// Finished matches, oldest first.
    pub fn history(&self) -> &[MatchRecord] {
        &self.history
    }

    /// Colour played by `participant`, if it belongs to this session.
    pub fn color_of(&self, participant: ParticipantId) -> Option<Color> {
        match participant {
            AUTHORITY_PARTICIPANT => Some(self.host_color),
            GUEST_PARTICIPANT => Some(self.host_color.opponent()),
            _ => None,
        }
    }

    /// Participant playing `color`.
    pub fn participant_of(&self, color: Color) -> ParticipantId {
        if color == self.host_color {
            AUTHORITY_PARTICIPANT
        } else {
            GUEST_PARTICIPANT
        }
    }

    /// Start a match: reset state, announce colours, seed public traps.
    pub fn bootstrap(&mut self) -> Vec<Envelope> {
        let start = start_match(&mut self.session, &mut self.engine, &mut self.rng);
        self.host_color = start.host_color;
        let mut out = vec![Envelope::to_all(Message::MatchStarted {
            host_color: start.host_color,
        })];
        out.extend(self.route(start.events()));
        out
    }

    /// Handle one message from `from`. Anything invalid yields no envelopes.
    pub fn handle(&mut self, from: ParticipantId, msg: Message) -> Vec<Envelope> {
        if !msg.is_request() {
            log::warn!("participant {} sent a broadcast-only message: {:?}", from, msg);
            return Vec::new();
        }
        match msg {
            Message::PlaceTrapRequest { x, z } => self.request(from, ActionKind::PlaceTrap, x, z),
            Message::PlacePieceRequest { x, z } => {
                self.request(from, ActionKind::PlacePiece, x, z)
            }
            Message::RematchRequest { swap_colors } => self.rematch(from, swap_colors.into()),
            other => {
                log::debug!("ignoring {:?} from {}", other, from);
                Vec::new()
            }
        }
    }

    fn request(&mut self, from: ParticipantId, kind: ActionKind, x: u8, z: u8) -> Vec<Envelope> {
        let Some(color) = self.color_of(from) else {
            log::debug!("dropping {:?} from unknown participant {}", kind, from);
            return Vec::new();
        };
        let cell = match Cell::new(x, z) {
            Ok(cell) => cell,
            Err(e) => {
                log::debug!("dropping {:?} from {}: {}", kind, from, e);
                return Vec::new();
            }
        };
        match self
            .engine
            .request_action(color, Action { kind, cell }, &mut self.rng)
        {
            Ok(events) => {
                if let Some(winner) = self.engine.winner() {
                    self.history.push(MatchRecord {
                        host_color: self.host_color,
                        winner,
                    });
                }
                self.route(events)
            }
            Err(reason) => {
                log::debug!("dropping {:?} at {} from {}: {}", kind, cell, color, reason);
                Vec::new()
            }
        }
    }

    fn rematch(&mut self, from: ParticipantId, choice: RematchChoice) -> Vec<Envelope> {
        if from != AUTHORITY_PARTICIPANT {
            log::debug!("dropping rematch request from guest {}", from);
            return Vec::new();
        }
        if self.engine.winner().is_none() {
            log::debug!("dropping rematch request while the match is running");
            return Vec::new();
        }
        self.session.schedule_rematch(self.host_color, choice);
        self.bootstrap()
    }

    /// Turn engine events into messages with their delivery targets. Private
    /// trap visuals only ever reach the trap's owner.
    pub fn route<I: IntoIterator<Item = Event>>(&self, events: I) -> Vec<Envelope> {
        events
            .into_iter()
            .map(|event| match event {
                Event::PublicTrapSeeded(cell) => {
                    Envelope::new(Delivery::NonAuthority, Message::PublicTrapSeeded { cell })
                }
                Event::TrapPlaced { cell, owner } => {
                    let owner = self.participant_of(owner);
                    Envelope::new(
                        Delivery::Only(owner),
                        Message::TrapPlacedVisual { cell, owner },
                    )
                }
                Event::TrapCleared { cell, owner } => Envelope::new(
                    Delivery::Only(self.participant_of(owner)),
                    Message::TrapClearedVisual {
                        cell,
                        owner_color: owner,
                    },
                ),
                Event::TrapTriggered { trigger, .. } => Envelope::to_all(Message::TrapAlert {
                    message: trigger.alert_text().to_string(),
                }),
                Event::PieceRemoved(cell) => Envelope::to_all(Message::PieceRemoved { cell }),
                Event::PieceSpawned { cell, color } => {
                    Envelope::to_all(Message::PieceSpawned { cell, color })
                }
                Event::TurnChanged(color) => Envelope::to_all(Message::TurnChanged { color }),
                Event::WinnerSet(color) => Envelope::to_all(Message::WinnerSet { color }),
            })
            .collect()
    }
}
