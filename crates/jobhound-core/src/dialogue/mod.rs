//! The conversation state machine and its supporting pieces.
//!
//! [`engine::DialogueEngine`] is the single entry point: it routes every
//! inbound event by the session's current step, mutates filters through the
//! [`store::SessionStore`], and emits transport-agnostic [`reply::Effect`]s.

pub mod engine;
pub mod input;
pub mod menu;
pub mod reply;
pub mod store;

pub use engine::DialogueEngine;
pub use reply::{Effect, Reply, TextMarkup};
pub use store::SessionStore;
