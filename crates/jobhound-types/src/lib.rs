//! Shared domain types for jobhound.
//!
//! Pure data: filters, sessions, inbound events, vacancy listings, config,
//! and the error enums the other crates speak in. No I/O, no async.

pub mod config;
pub mod error;
pub mod event;
pub mod filter;
pub mod listing;
pub mod session;
