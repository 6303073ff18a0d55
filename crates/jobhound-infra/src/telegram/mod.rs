//! Telegram Bot API transport.

pub mod client;
pub mod keyboard;
pub mod types;

pub use client::{TelegramClient, TelegramError};
pub use keyboard::to_reply_markup;
