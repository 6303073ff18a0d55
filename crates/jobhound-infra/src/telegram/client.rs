//! TelegramClient -- thin Bot API client over reqwest.
//!
//! The bot token is wrapped in [`secrecy::SecretString`]; it appears only
//! inside request URLs and never in Debug output or logs (the struct
//! deliberately does not derive Debug).

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use super::types::{
    AnswerCallbackQueryRequest, ApiResponse, EditMessageTextRequest, GetUpdatesRequest,
    InlineKeyboardMarkup, Message, ReplyMarkup, SendMessageRequest, Update,
};

/// Errors from Bot API calls.
#[derive(Debug, Error)]
pub enum TelegramError {
    /// Network failure or timeout before an envelope arrived.
    #[error("telegram transport error: {0}")]
    Transport(String),

    /// The API answered `ok: false`.
    #[error("telegram API error {code}: {description}")]
    Api { code: i64, description: String },

    /// The envelope could not be decoded.
    #[error("malformed telegram response: {0}")]
    Payload(String),
}

impl TelegramError {
    /// Whether this is the Bot API rejecting strict markup, which is the
    /// trigger for re-sending the plain-text fallback rendition.
    pub fn is_parse_rejection(&self) -> bool {
        matches!(
            self,
            TelegramError::Api { code: 400, description }
                if description.contains("can't parse entities")
        )
    }
}

/// Telegram Bot API client.
pub struct TelegramClient {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
}

impl TelegramClient {
    /// `poll_timeout_secs` is the long-poll window for `get_updates`; the
    /// HTTP timeout is set above it so a quiet poll is not a timeout error.
    pub fn new(token: SecretString, poll_timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(poll_timeout_secs + 10))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            token,
            base_url: "https://api.telegram.org".to_string(),
        }
    }

    /// Override the base URL (useful for tests or a local Bot API server).
    #[allow(dead_code)]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.base_url, self.token.expose_secret())
    }

    /// POST one Bot API method and unwrap the response envelope.
    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        body: &impl Serialize,
    ) -> Result<T, TelegramError> {
        let response = self
            .client
            .post(self.method_url(method))
            .json(body)
            .send()
            .await
            .map_err(|e| TelegramError::Transport(e.to_string()))?;

        // The Bot API wraps errors in the same JSON envelope regardless of
        // HTTP status, so decode before looking at the status code.
        let envelope: ApiResponse<T> = response
            .json()
            .await
            .map_err(|e| TelegramError::Payload(e.to_string()))?;

        if !envelope.ok {
            return Err(TelegramError::Api {
                code: envelope.error_code.unwrap_or(0),
                description: envelope.description.unwrap_or_default(),
            });
        }
        envelope
            .result
            .ok_or_else(|| TelegramError::Payload("ok response without result".to_string()))
    }

    /// Long-poll for updates past `offset`.
    pub async fn get_updates(
        &self,
        offset: i64,
        timeout_secs: u64,
    ) -> Result<Vec<Update>, TelegramError> {
        self.call(
            "getUpdates",
            &GetUpdatesRequest {
                offset,
                timeout: timeout_secs,
            },
        )
        .await
    }

    pub async fn send_message(
        &self,
        chat_id: i64,
        text: &str,
        parse_mode: Option<&str>,
        reply_markup: Option<&ReplyMarkup>,
    ) -> Result<Message, TelegramError> {
        self.call(
            "sendMessage",
            &SendMessageRequest {
                chat_id,
                text,
                parse_mode,
                reply_markup,
                disable_web_page_preview: true,
            },
        )
        .await
    }

    pub async fn edit_message_text(
        &self,
        chat_id: i64,
        message_id: i64,
        text: &str,
        parse_mode: Option<&str>,
        reply_markup: Option<&InlineKeyboardMarkup>,
    ) -> Result<(), TelegramError> {
        // The result is the edited Message (or `true` for inline messages);
        // callers only care that the edit landed.
        self.call::<serde_json::Value>(
            "editMessageText",
            &EditMessageTextRequest {
                chat_id,
                message_id,
                text,
                parse_mode,
                reply_markup,
            },
        )
        .await
        .map(|_| ())
    }

    pub async fn answer_callback_query(
        &self,
        callback_query_id: &str,
        text: Option<&str>,
        show_alert: bool,
    ) -> Result<(), TelegramError> {
        self.call::<serde_json::Value>(
            "answerCallbackQuery",
            &AnswerCallbackQueryRequest {
                callback_query_id,
                text,
                show_alert,
            },
        )
        .await
        .map(|_| ())
    }
}
