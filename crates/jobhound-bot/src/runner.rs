//! The long-poll update loop.
//!
//! Pulls updates from Telegram, decodes each into a core event exactly once
//! (free text, a command recognized by its reply-keyboard label, or a parsed
//! button action), feeds it to the dialogue engine, and performs the emitted
//! effects. Updates are processed one at a time in arrival order, which is
//! what keeps per-chat event ordering intact.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use jobhound_core::dialogue::menu::{
    Menu, BTN_FIND_JOBS, BTN_HELP, BTN_MAIN_MENU, BTN_NEW_SEARCH,
};
use jobhound_core::dialogue::{Effect, Reply, TextMarkup};
use jobhound_infra::telegram::keyboard::{to_inline_markup, to_reply_markup};
use jobhound_infra::telegram::types::Update;
use jobhound_infra::telegram::TelegramError;
use jobhound_types::event::{ButtonAction, ChatId, Command, Event};

use crate::state::AppState;

/// Pause after a failed poll before trying again.
const POLL_RETRY_DELAY: Duration = Duration::from_secs(5);

/// A decoded inbound update.
#[derive(Debug)]
struct Incoming {
    chat: ChatId,
    event: Event,
    /// Present when the update was a button press; `message_id` is the
    /// message the pressed keyboard was attached to (the edit target).
    callback: Option<CallbackRef>,
}

#[derive(Debug)]
struct CallbackRef {
    id: String,
    message_id: i64,
}

/// Run the poll loop until the token is cancelled.
pub async fn run(state: AppState, shutdown: CancellationToken) -> anyhow::Result<()> {
    tracing::info!("jobhound started, polling for updates");
    let mut offset = 0i64;

    loop {
        let updates = tokio::select! {
            _ = shutdown.cancelled() => {
                tracing::info!("shutdown requested, stopping poll loop");
                return Ok(());
            }
            result = state.telegram.get_updates(offset, state.config.poll_timeout_secs) => result,
        };

        let updates = match updates {
            Ok(updates) => updates,
            Err(err) => {
                tracing::warn!(%err, "poll failed, retrying");
                tokio::time::sleep(POLL_RETRY_DELAY).await;
                continue;
            }
        };

        for update in updates {
            offset = offset.max(update.update_id + 1);
            handle_update(&state, update).await;
        }
    }
}

async fn handle_update(state: &AppState, update: Update) {
    let Some(incoming) = decode_update(&update) else {
        // Undecodable button presses still get their spinner dismissed.
        if let Some(callback) = &update.callback_query {
            answer_callback(state, &callback.id, None).await;
        }
        return;
    };

    tracing::debug!(chat = incoming.chat, event = ?incoming.event, "handling update");
    let effects = state
        .engine
        .handle(incoming.chat, incoming.event.clone())
        .await;

    dispatch(state, incoming.chat, incoming.callback.as_ref(), effects).await;
}

/// Decode one update into a core event. Returns `None` for updates this bot
/// does not understand (stickers, edits, malformed callback data).
fn decode_update(update: &Update) -> Option<Incoming> {
    if let Some(message) = &update.message {
        let text = message.text.as_deref()?;
        let event = match text {
            "/start" | BTN_MAIN_MENU => Event::Command(Command::Start),
            "/help" | BTN_HELP => Event::Command(Command::Help),
            BTN_FIND_JOBS | BTN_NEW_SEARCH => Event::Command(Command::BeginSearch),
            other => Event::Text(other.to_string()),
        };
        return Some(Incoming {
            chat: message.chat.id,
            event,
            callback: None,
        });
    }

    if let Some(callback) = &update.callback_query {
        let message = callback.message.as_ref()?;
        let action: ButtonAction = callback.data.as_deref()?.parse().ok()?;
        return Some(Incoming {
            chat: message.chat.id,
            event: Event::Button(action),
            callback: Some(CallbackRef {
                id: callback.id.clone(),
                message_id: message.message_id,
            }),
        });
    }

    None
}

fn parse_mode(markup: TextMarkup) -> Option<&'static str> {
    match markup {
        TextMarkup::Plain => None,
        TextMarkup::Html => Some("HTML"),
        TextMarkup::MarkdownV2 => Some("MarkdownV2"),
    }
}

/// Perform the engine's effects in order, then dismiss the callback spinner
/// unless an alert already answered it.
async fn dispatch(state: &AppState, chat: ChatId, callback: Option<&CallbackRef>, effects: Vec<Effect>) {
    let mut answered = false;

    for effect in effects {
        match effect {
            Effect::Send(reply) => send_with_fallback(state, chat, reply).await,
            Effect::Edit(reply) => {
                if let Some(callback) = callback {
                    edit_in_place(state, chat, callback.message_id, reply).await;
                } else {
                    // An edit with no message to edit degrades to a send.
                    send_with_fallback(state, chat, reply).await;
                }
            }
            Effect::Alert(text) => {
                if let Some(callback) = callback {
                    answer_callback(state, &callback.id, Some(&text)).await;
                    answered = true;
                } else {
                    send_with_fallback(state, chat, Reply::plain(text)).await;
                }
            }
        }
    }

    if let Some(callback) = callback {
        if !answered {
            answer_callback(state, &callback.id, None).await;
        }
    }
}

/// Send a reply; when strict markup is rejected by the Bot API, re-send the
/// pre-rendered plain fallback with the same menu.
async fn send_with_fallback(state: &AppState, chat: ChatId, reply: Reply) {
    let markup = reply.menu.as_ref().map(to_reply_markup);

    let result = state
        .telegram
        .send_message(chat, &reply.text, parse_mode(reply.markup), markup.as_ref())
        .await;

    let err = match result {
        Ok(_) => return,
        Err(err) => err,
    };

    if err.is_parse_rejection() {
        if let Some(fallback) = &reply.fallback {
            tracing::warn!(chat, "strict markup rejected, re-sending plain text");
            if let Err(err) = state
                .telegram
                .send_message(chat, fallback, None, markup.as_ref())
                .await
            {
                tracing::error!(chat, %err, "plain-text fallback send failed");
            }
            return;
        }
    }
    tracing::error!(chat, %err, "send failed");
}

async fn edit_in_place(state: &AppState, chat: ChatId, message_id: i64, reply: Reply) {
    let markup = match &reply.menu {
        Some(Menu::Inline(rows)) => Some(to_inline_markup(rows)),
        // Edits can only carry inline keyboards.
        _ => None,
    };

    if let Err(err) = state
        .telegram
        .edit_message_text(chat, message_id, &reply.text, parse_mode(reply.markup), markup.as_ref())
        .await
    {
        // Re-pressing a toggle can produce an identical message; Telegram
        // rejects that edit and it is safe to ignore.
        if matches!(&err, TelegramError::Api { description, .. } if description.contains("message is not modified"))
        {
            tracing::debug!(chat, "edit skipped: message not modified");
        } else {
            tracing::warn!(chat, %err, "edit failed");
        }
    }
}

async fn answer_callback(state: &AppState, callback_id: &str, alert: Option<&str>) {
    if let Err(err) = state
        .telegram
        .answer_callback_query(callback_id, alert, alert.is_some())
        .await
    {
        tracing::warn!(%err, "failed to answer callback query");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobhound_infra::telegram::types::{CallbackQuery, Chat, Message};

    fn text_update(text: &str) -> Update {
        Update {
            update_id: 1,
            message: Some(Message {
                message_id: 10,
                chat: Chat { id: 42 },
                text: Some(text.to_string()),
            }),
            callback_query: None,
        }
    }

    fn callback_update(data: &str) -> Update {
        Update {
            update_id: 2,
            message: None,
            callback_query: Some(CallbackQuery {
                id: "cb-1".to_string(),
                data: Some(data.to_string()),
                message: Some(Message {
                    message_id: 99,
                    chat: Chat { id: 42 },
                    text: None,
                }),
            }),
        }
    }

    #[test]
    fn test_decode_free_text() {
        let incoming = decode_update(&text_update("Python developer")).unwrap();
        assert_eq!(incoming.chat, 42);
        assert_eq!(incoming.event, Event::Text("Python developer".to_string()));
        assert!(incoming.callback.is_none());
    }

    #[test]
    fn test_decode_commands_by_label() {
        let cases = [
            ("/start", Command::Start),
            (BTN_MAIN_MENU, Command::Start),
            ("/help", Command::Help),
            (BTN_HELP, Command::Help),
            (BTN_FIND_JOBS, Command::BeginSearch),
            (BTN_NEW_SEARCH, Command::BeginSearch),
        ];
        for (text, command) in cases {
            let incoming = decode_update(&text_update(text)).unwrap();
            assert_eq!(incoming.event, Event::Command(command), "for '{text}'");
        }
    }

    #[test]
    fn test_decode_button_press() {
        let incoming = decode_update(&callback_update("toggle_remote")).unwrap();
        assert_eq!(incoming.event, Event::Button(ButtonAction::ToggleRemote));
        let callback = incoming.callback.unwrap();
        assert_eq!(callback.id, "cb-1");
        assert_eq!(callback.message_id, 99);
    }

    #[test]
    fn test_decode_rejects_unknown_callback_data() {
        assert!(decode_update(&callback_update("frobnicate")).is_none());
    }

    #[test]
    fn test_decode_rejects_textless_message() {
        let update = Update {
            update_id: 3,
            message: Some(Message {
                message_id: 11,
                chat: Chat { id: 42 },
                text: None,
            }),
            callback_query: None,
        };
        assert!(decode_update(&update).is_none());
    }

    #[test]
    fn test_parse_mode_mapping() {
        assert_eq!(parse_mode(TextMarkup::Plain), None);
        assert_eq!(parse_mode(TextMarkup::Html), Some("HTML"));
        assert_eq!(parse_mode(TextMarkup::MarkdownV2), Some("MarkdownV2"));
    }
}
