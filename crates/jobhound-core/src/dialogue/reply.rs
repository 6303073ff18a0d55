//! Outbound effects emitted by the dialogue engine.
//!
//! The engine knows nothing about message ids or delivery; it only says
//! "send this", "edit the menu message in place", or "answer the button
//! press with an alert". The transport layer maps these onto its own calls.

use super::menu::Menu;

/// Text rendering mode requested for a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMarkup {
    Plain,
    Html,
    /// Strict mode: the transport may reject malformed markup, in which
    /// case it re-sends `Reply::fallback`.
    MarkdownV2,
}

/// One outbound message: text, an optional menu, and a markup mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub menu: Option<Menu>,
    pub markup: TextMarkup,
    /// Pre-rendered plain-text rendition, present only for strict replies.
    /// The transport sends it if the strict text is rejected; the formatter
    /// itself stays pure and never observes the rejection.
    pub fallback: Option<String>,
}

impl Reply {
    /// Plain-text reply.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            menu: None,
            markup: TextMarkup::Plain,
            fallback: None,
        }
    }

    /// HTML reply (prompts and confirmations; tags are author-controlled).
    pub fn html(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            menu: None,
            markup: TextMarkup::Html,
            fallback: None,
        }
    }

    /// Strict MarkdownV2 reply with its plain fallback.
    pub fn markdown_with_fallback(text: impl Into<String>, fallback: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            menu: None,
            markup: TextMarkup::MarkdownV2,
            fallback: Some(fallback.into()),
        }
    }

    /// Attach a menu.
    pub fn with_menu(mut self, menu: Menu) -> Self {
        self.menu = Some(menu);
        self
    }
}

/// What the transport should do in response to one inbound event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Send a new message.
    Send(Reply),
    /// Edit the message the triggering button was attached to.
    Edit(Reply),
    /// Answer the button press with a popup notice (no message sent).
    Alert(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_reply_has_no_fallback() {
        let reply = Reply::plain("hi");
        assert_eq!(reply.markup, TextMarkup::Plain);
        assert!(reply.fallback.is_none());
        assert!(reply.menu.is_none());
    }

    #[test]
    fn test_markdown_reply_carries_fallback() {
        let reply = Reply::markdown_with_fallback("*hi*", "hi");
        assert_eq!(reply.markup, TextMarkup::MarkdownV2);
        assert_eq!(reply.fallback.as_deref(), Some("hi"));
    }

    #[test]
    fn test_with_menu() {
        let reply = Reply::plain("pick").with_menu(Menu::RemoveReply);
        assert_eq!(reply.menu, Some(Menu::RemoveReply));
    }
}
