//! Trap triggers and penalty selection.

use alloc::vec::Vec;

use rand::seq::index;
use rand::Rng;

use crate::core::bitboard::CellSet;
use crate::core::common::Cell;
use crate::core::config::{DOUBLE_TRAP_PENALTY, SINGLE_TRAP_PENALTY};

/// Which traps went off under a freshly placed stone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TrapTrigger {
    /// A public trap and an opposing hidden trap on the same cell.
    Double,
    /// Only a public trap.
    Public,
    /// Only an opposing hidden trap.
    Opponent,
}

impl TrapTrigger {
    /// Classify a landing. The mover's own hidden trap never counts.
    pub const fn classify(public: bool, opposing_hidden: bool) -> Option<TrapTrigger> {
        match (public, opposing_hidden) {
            (true, true) => Some(TrapTrigger::Double),
            (true, false) => Some(TrapTrigger::Public),
            (false, true) => Some(TrapTrigger::Opponent),
            (false, false) => None,
        }
    }

    /// Stones the mover loses.
    pub const fn penalty(self) -> usize {
        match self {
            TrapTrigger::Double => DOUBLE_TRAP_PENALTY,
            TrapTrigger::Public | TrapTrigger::Opponent => SINGLE_TRAP_PENALTY,
        }
    }

    /// Text shown to every participant when the trap fires.
    pub const fn alert_text(self) -> &'static str {
        match self {
            TrapTrigger::Double => "Double trap triggered! (4 stones removed)",
            TrapTrigger::Public => "Public trap triggered! (2 stones removed)",
            TrapTrigger::Opponent => "Opponent trap triggered! (2 stones removed)",
        }
    }
}

/// Pick `min(stones.len(), penalty)` distinct stones uniformly at random.
pub fn select_penalty_targets<R: Rng + ?Sized>(
    stones: CellSet,
    penalty: usize,
    rng: &mut R,
) -> Vec<Cell> {
    let candidates: Vec<Cell> = stones.iter().collect();
    let amount = penalty.min(candidates.len());
    index::sample(rng, candidates.len(), amount)
        .into_iter()
        .map(|i| candidates[i])
        .collect()
}
