//! Match bootstrap and rematch negotiation.

use alloc::vec::Vec;

use rand::Rng;

use crate::core::common::{Cell, Color};
use crate::core::game::{Event, GameEngine};

/// Host's answer to "play again?".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RematchChoice {
    /// Host keeps its colour.
    Keep,
    /// Host takes the other colour.
    Swap,
}

impl From<bool> for RematchChoice {
    fn from(swap: bool) -> Self {
        if swap {
            RematchChoice::Swap
        } else {
            RematchChoice::Keep
        }
    }
}

/// State carried from one match to the next within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSession {
    next_host_color: Color,
    matches_started: u32,
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchSession {
    /// New session; the host plays Black in the first match.
    pub const fn new() -> Self {
        Self::with_host_color(Color::Black)
    }

    pub const fn with_host_color(color: Color) -> Self {
        Self {
            next_host_color: color,
            matches_started: 0,
        }
    }

    pub fn next_host_color(&self) -> Color {
        self.next_host_color
    }

    pub fn matches_started(&self) -> u32 {
        self.matches_started
    }

    /// Record the host's rematch choice relative to the colour it played.
    pub fn schedule_rematch(&mut self, current_host: Color, choice: RematchChoice) -> Color {
        self.next_host_color = match choice {
            RematchChoice::Keep => current_host,
            RematchChoice::Swap => current_host.opponent(),
        };
        self.next_host_color
    }
}

/// Outcome of bootstrapping a match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchStart {
    pub host_color: Color,
    pub public_traps: Vec<Cell>,
}

impl MatchStart {
    /// Events the replication layer announces, in order: the seeded traps,
    /// then the opening turn.
    pub fn events(&self) -> Vec<Event> {
        self.public_traps
            .iter()
            .map(|&cell| Event::PublicTrapSeeded(cell))
            .chain(core::iter::once(Event::TurnChanged(Color::FIRST)))
            .collect()
    }
}

/// Reset `engine`, assign the host colour from `session` and seed traps.
pub fn start_match<R: Rng + ?Sized>(
    session: &mut MatchSession,
    engine: &mut GameEngine,
    rng: &mut R,
) -> MatchStart {
    engine.reset();
    session.matches_started += 1;
    let host_color = session.next_host_color;
    let public_traps = engine.seed_public_traps(rng);
    log::info!(
        "match {} starts, host plays {}",
        session.matches_started,
        host_color
    );
    MatchStart {
        host_color,
        public_traps,
    }
}
