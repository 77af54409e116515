#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod core;

#[cfg(feature = "std")]
pub mod authority;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod player;
#[cfg(feature = "std")]
pub mod player_node;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod replica;
#[cfg(feature = "std")]
pub mod server;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
pub mod ui;

pub use crate::core::*;

#[cfg(feature = "std")]
pub use authority::{Authority, MatchRecord};
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from, LOG_ENV};
#[cfg(feature = "std")]
pub use player::{AiPlayer, CliPlayer, Player};
#[cfg(feature = "std")]
pub use player_node::PlayerNode;
#[cfg(feature = "std")]
pub use protocol::{
    Delivery, Envelope, Message, ParticipantId, AUTHORITY_PARTICIPANT, GUEST_PARTICIPANT,
    PROTOCOL_VERSION,
};
#[cfg(feature = "std")]
pub use replica::Replica;
#[cfg(feature = "std")]
pub use server::{AuthorityServer, SessionReport};
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport};
#[cfg(feature = "std")]
pub use ui::AlertBanner;
