#![cfg(feature = "std")]

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{Cell, Color};

/// Current protocol version, checked during the handshake.
pub const PROTOCOL_VERSION: u16 = 1;

/// Identity the authority assigns to each connected participant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ParticipantId(pub u64);

/// The participant co-located with the authority (the host).
pub const AUTHORITY_PARTICIPANT: ParticipantId = ParticipantId(0);
/// The remote participant.
pub const GUEST_PARTICIPANT: ParticipantId = ParticipantId(1);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Messages exchanged between participants and the authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Participant announces its protocol version.
    Handshake { version: u16 },
    /// Authority accepts the participant and tells it who it is.
    HandshakeAck {
        version: u16,
        participant: ParticipantId,
    },

    /// Ask to hide a trap. Raw coordinates, range-checked by the authority.
    PlaceTrapRequest { x: u8, z: u8 },
    /// Ask to place a stone.
    PlacePieceRequest { x: u8, z: u8 },
    /// Host asks for another match, optionally swapping colours.
    RematchRequest { swap_colors: bool },
    /// Participant quits the session.
    Leave,

    /// A match begins; guests play the colour the host does not.
    MatchStarted { host_color: Color },
    /// One public trap cell. Never sent to the host participant.
    PublicTrapSeeded { cell: Cell },
    /// The recipient's own trap was armed.
    TrapPlacedVisual { cell: Cell, owner: ParticipantId },
    /// A trap owned by `owner_color` is gone.
    TrapClearedVisual { cell: Cell, owner_color: Color },
    PieceSpawned { cell: Cell, color: Color },
    PieceRemoved { cell: Cell },
    /// Short-lived notification text.
    TrapAlert { message: String },
    TurnChanged { color: Color },
    WinnerSet { color: Color },
    /// The session is over; no further messages follow.
    MatchClosed,
}

impl Message {
    /// Messages a participant may send to the authority.
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            Message::Handshake { .. }
                | Message::PlaceTrapRequest { .. }
                | Message::PlacePieceRequest { .. }
                | Message::RematchRequest { .. }
                | Message::Leave
        )
    }
}

/// Who receives an authority message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Every participant.
    All,
    /// Every participant except the one hosting the authority.
    NonAuthority,
    /// Exactly one participant.
    Only(ParticipantId),
}

impl Delivery {
    /// Does `recipient` get the message?
    pub fn includes(self, recipient: ParticipantId) -> bool {
        match self {
            Delivery::All => true,
            Delivery::NonAuthority => recipient != AUTHORITY_PARTICIPANT,
            Delivery::Only(id) => recipient == id,
        }
    }
}

/// An authority message paired with its delivery target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub delivery: Delivery,
    pub message: Message,
}

impl Envelope {
    pub fn new(delivery: Delivery, message: Message) -> Self {
        Self { delivery, message }
    }

    pub fn to_all(message: Message) -> Self {
        Self::new(Delivery::All, message)
    }
}
