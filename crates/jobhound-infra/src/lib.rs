//! Infrastructure implementations for jobhound.
//!
//! Concrete adapters behind the ports defined in `jobhound-core`: the HH.ru
//! vacancy and area-directory clients, the Telegram Bot API client, and the
//! config loader. All HTTP goes through reqwest with bounded timeouts.

pub mod config;
pub mod hh;
pub mod telegram;
