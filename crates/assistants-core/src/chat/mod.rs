//! Training chat domain types.

mod message;
mod replies;

pub use message::{ChatMessage, ChatRole};
pub use replies::{FALLBACK_REPLY, pick_reply, replies_for};
