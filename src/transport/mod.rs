#![cfg(feature = "std")]

use crate::protocol::Message;

/// Reliable, ordered message channel to one peer.
///
/// `recv` must be cancel-safe: the authority waits on several links at once
/// and drops the losing futures.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<Message>;
}

pub mod in_memory;
pub mod tcp;
