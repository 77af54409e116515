use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;
use rand::Rng;

use crate::core::{longest_run, Action, Cell, RematchChoice, WIN_LENGTH};
use crate::protocol::Message;
use crate::replica::Replica;

use super::Player;

/// Actions an AI takes in one match before conceding.
pub const DEFAULT_MOVE_LIMIT: usize = 200;

/// Heuristic opponent: completes its own five, blocks the opponent's, and
/// otherwise extends its longest line. Now and then it hides a trap on the
/// cell the opponent wants most.
pub struct AiPlayer {
    rematches_left: usize,
    swap_on_rematch: bool,
    move_limit: Option<usize>,
    moves_this_match: usize,
    trap_chance: f64,
}

impl Default for AiPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl AiPlayer {
    pub fn new() -> Self {
        Self {
            rematches_left: 0,
            swap_on_rematch: true,
            move_limit: Some(DEFAULT_MOVE_LIMIT),
            moves_this_match: 0,
            trap_chance: 0.15,
        }
    }

    /// Ask for `count` rematches as host, swapping colours or not.
    pub fn with_rematches(mut self, count: usize, swap: bool) -> Self {
        self.rematches_left = count;
        self.swap_on_rematch = swap;
        self
    }

    pub fn with_move_limit(mut self, limit: Option<usize>) -> Self {
        self.move_limit = limit;
        self
    }

    /// Probability of hiding a trap on a turn where one is allowed.
    pub fn with_trap_chance(mut self, chance: f64) -> Self {
        self.trap_chance = chance.clamp(0.0, 1.0);
        self
    }

    fn score(view: &Replica, cell: Cell) -> (usize, usize) {
        let Some(me) = view.color() else {
            return (0, 0);
        };
        (
            longest_run(view.board(), cell, me),
            longest_run(view.board(), cell, me.opponent()),
        )
    }
}

impl Player for AiPlayer {
    fn choose_action(&mut self, rng: &mut SmallRng, view: &Replica) -> Option<Action> {
        if self.move_limit.is_some_and(|limit| self.moves_this_match >= limit) {
            log::info!("AI reached its move limit, conceding");
            return None;
        }
        let empty: Vec<Cell> = (!view.board().occupied()).iter().collect();
        if empty.is_empty() {
            return None;
        }

        let scored: Vec<(Cell, usize, usize)> = empty
            .iter()
            .map(|&cell| {
                let (mine, theirs) = Self::score(view, cell);
                (cell, mine, theirs)
            })
            .collect();
        let value = |&(_, mine, theirs): &(Cell, usize, usize)| {
            if mine >= WIN_LENGTH {
                1_000
            } else if theirs >= WIN_LENGTH {
                900
            } else {
                mine * 10 + theirs * 8
            }
        };
        let best_value = scored.iter().map(value).max().unwrap_or(0);
        let best: Vec<Cell> = scored
            .iter()
            .filter(|s| value(*s) == best_value)
            .map(|s| s.0)
            .collect();
        let piece = *best.choose(rng)?;

        self.moves_this_match += 1;

        if best_value < 900 && view.traps_remaining() > 0 && rng.random_bool(self.trap_chance) {
            let most_wanted = scored
                .iter()
                .filter(|s| view.can_request(Action::trap(s.0)))
                .max_by_key(|s| s.2);
            if let Some(&(cell, _, _)) = most_wanted {
                return Some(Action::trap(cell));
            }
        }
        Some(Action::piece(piece))
    }

    fn choose_rematch(&mut self, _view: &Replica) -> Option<RematchChoice> {
        if self.rematches_left == 0 {
            return None;
        }
        self.rematches_left -= 1;
        Some(RematchChoice::from(self.swap_on_rematch))
    }

    fn handle_message(&mut self, _view: &Replica, msg: &Message) {
        if let Message::MatchStarted { .. } = msg {
            self.moves_this_match = 0;
        }
    }
}
