#![cfg(feature = "std")]

//! A participant's read-only mirror of the authoritative match state.

use crate::core::{Action, ActionKind, Board, CellSet, Color, TRAP_BUDGET};
use crate::protocol::{Message, ParticipantId, AUTHORITY_PARTICIPANT};

/// Local view kept in sync solely by authority messages.
///
/// Applying a message twice, or a message about something already gone, is
/// a no-op.
#[derive(Debug, Clone)]
pub struct Replica {
    me: ParticipantId,
    color: Option<Color>,
    board: Board,
    my_traps: CellSet,
    public_traps: CellSet,
    traps_remaining: u8,
    turn: Color,
    winner: Option<Color>,
    last_alert: Option<String>,
    matches_seen: u32,
}

impl Replica {
    pub fn new(me: ParticipantId) -> Self {
        Self {
            me,
            color: None,
            board: Board::new(),
            my_traps: CellSet::new(),
            public_traps: CellSet::new(),
            traps_remaining: TRAP_BUDGET,
            turn: Color::FIRST,
            winner: None,
            last_alert: None,
            matches_seen: 0,
        }
    }

    pub fn participant(&self) -> ParticipantId {
        self.me
    }

    /// Whether this replica belongs to the participant hosting the authority.
    pub fn is_host(&self) -> bool {
        self.me == AUTHORITY_PARTICIPANT
    }

    /// Own colour, known once a match has started.
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cells where this participant has a live hidden trap.
    pub fn my_traps(&self) -> CellSet {
        self.my_traps
    }

    /// Public trap cells this replica was told about. Not for display.
    pub fn known_public_traps(&self) -> CellSet {
        self.public_traps
    }

    pub fn traps_remaining(&self) -> u8 {
        self.traps_remaining
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn winner(&self) -> Option<Color> {
        self.winner
    }

    pub fn last_alert(&self) -> Option<&str> {
        self.last_alert.as_deref()
    }

    pub fn matches_seen(&self) -> u32 {
        self.matches_seen
    }

    pub fn is_my_turn(&self) -> bool {
        self.winner.is_none() && self.color == Some(self.turn)
    }

    /// Would the authority accept `action` from us right now?
    pub fn can_request(&self, action: Action) -> bool {
        if !self.is_my_turn() || !self.board.is_empty(action.cell) {
            return false;
        }
        match action.kind {
            ActionKind::PlacePiece => true,
            ActionKind::PlaceTrap => {
                self.traps_remaining > 0 && !self.my_traps.contains(action.cell)
            }
        }
    }

    /// Apply one authority message. Returns `true` if the view changed.
    pub fn apply(&mut self, msg: &Message) -> bool {
        match *msg {
            Message::MatchStarted { host_color } => {
                let me = self.me;
                let seen = self.matches_seen;
                *self = Replica::new(me);
                self.matches_seen = seen + 1;
                self.color = Some(if self.is_host() {
                    host_color
                } else {
                    host_color.opponent()
                });
                true
            }
            Message::PublicTrapSeeded { cell } => self.public_traps.insert(cell),
            Message::TrapPlacedVisual { cell, owner } => {
                if owner != self.me || !self.my_traps.insert(cell) {
                    return false;
                }
                self.traps_remaining = self.traps_remaining.saturating_sub(1);
                true
            }
            Message::TrapClearedVisual { cell, owner_color } => {
                Some(owner_color) == self.color && self.my_traps.remove(cell)
            }
            Message::PieceSpawned { cell, color } => {
                let changed = self.board.get(cell) != Some(color);
                self.board.set(cell, color);
                changed
            }
            Message::PieceRemoved { cell } => self.board.clear(cell).is_some(),
            Message::TrapAlert { ref message } => {
                self.last_alert = Some(message.clone());
                true
            }
            Message::TurnChanged { color } => {
                let changed = self.turn != color;
                self.turn = color;
                changed
            }
            Message::WinnerSet { color } => {
                let changed = self.winner != Some(color);
                self.winner = Some(color);
                changed
            }
            _ => false,
        }
    }
}
