#![cfg(feature = "std")]

use rand::rngs::SmallRng;

use crate::core::{Action, RematchChoice};
use crate::protocol::Message;
use crate::replica::Replica;

pub mod ai;
pub mod cli;

pub use ai::AiPlayer;
pub use cli::CliPlayer;

/// Input and presentation for one participant.
pub trait Player: Send {
    /// Pick the next action. `None` means the player gives up the session.
    fn choose_action(&mut self, rng: &mut SmallRng, view: &Replica) -> Option<Action>;

    /// Host only: after a win, play again (keeping or swapping colours) or stop.
    fn choose_rematch(&mut self, view: &Replica) -> Option<RematchChoice>;

    /// Called after every authority message has been applied to `view`.
    fn handle_message(&mut self, _view: &Replica, _msg: &Message) {}

    /// Called when `choose_action` returned something the authority would drop.
    fn handle_invalid_action(&mut self, _view: &Replica, _action: Action) {}
}
