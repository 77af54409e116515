//! Core trapfive game engine (no_std compatible)
//!
//! Pure match logic: board and trap layers, the turn coordinator, trap
//! resolution, win detection and match lifecycle. Needs only `alloc`, `rand`, `thiserror`
//! and `log`, so it can run inside any host that owns the network.

pub mod bitboard;
pub mod board;
pub mod common;
pub mod config;
pub mod game;
pub mod lifecycle;
pub mod trap;
pub mod win;

pub use bitboard::{CellSet, Cells};
pub use board::{Board, HiddenTraps, PublicTraps};
pub use common::{Action, ActionKind, Cell, CellError, Color, Rejection};
pub use config::*;
pub use game::{Event, GameEngine, GameState, GameStatus};
pub use lifecycle::{start_match, MatchSession, MatchStart, RematchChoice};
pub use trap::{select_penalty_targets, TrapTrigger};
pub use win::{check_win, longest_run, run_length, DIRECTIONS};
