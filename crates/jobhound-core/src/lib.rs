//! Business logic for jobhound.
//!
//! This crate defines the "ports" (search / area-directory traits) that the
//! infrastructure layer implements, plus everything pure: the session store,
//! the dialogue state machine, the query translator, and the result
//! formatter. It depends only on `jobhound-types` -- never on any HTTP or
//! transport crate.

pub mod dialogue;
pub mod render;
pub mod search;
