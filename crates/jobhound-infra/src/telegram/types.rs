//! Wire types for the Telegram Bot API.
//!
//! Only the fields this bot actually reads or writes; everything else in
//! the upstream payloads is ignored by serde.

use serde::{Deserialize, Serialize};

/// Response envelope every Bot API method returns.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

/// One long-poll update.
#[derive(Debug, Clone, Deserialize)]
pub struct Update {
    pub update_id: i64,
    pub message: Option<Message>,
    pub callback_query: Option<CallbackQuery>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    pub text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Chat {
    pub id: i64,
}

/// An inline-keyboard press.
#[derive(Debug, Clone, Deserialize)]
pub struct CallbackQuery {
    pub id: String,
    pub data: Option<String>,
    /// The message the pressed keyboard was attached to.
    pub message: Option<Message>,
}

/// Keyboard attachment for outbound messages.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ReplyMarkup {
    Inline(InlineKeyboardMarkup),
    Keyboard(ReplyKeyboardMarkup),
    Remove(ReplyKeyboardRemove),
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardMarkup {
    pub inline_keyboard: Vec<Vec<InlineKeyboardButton>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InlineKeyboardButton {
    pub text: String,
    pub callback_data: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplyKeyboardMarkup {
    pub keyboard: Vec<Vec<KeyboardButton>>,
    pub resize_keyboard: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct KeyboardButton {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReplyKeyboardRemove {
    pub remove_keyboard: bool,
}

#[derive(Debug, Serialize)]
pub struct GetUpdatesRequest {
    pub offset: i64,
    pub timeout: u64,
}

#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<&'a ReplyMarkup>,
    pub disable_web_page_preview: bool,
}

#[derive(Debug, Serialize)]
pub struct EditMessageTextRequest<'a> {
    pub chat_id: i64,
    pub message_id: i64,
    pub text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_mode: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_markup: Option<&'a InlineKeyboardMarkup>,
}

#[derive(Debug, Serialize)]
pub struct AnswerCallbackQueryRequest<'a> {
    pub callback_query_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<&'a str>,
    pub show_alert: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_with_message() {
        let json = r#"{
            "update_id": 10,
            "message": {"message_id": 1, "chat": {"id": 42}, "text": "hello"}
        }"#;
        let update: Update = serde_json::from_str(json).unwrap();
        assert_eq!(update.update_id, 10);
        let message = update.message.unwrap();
        assert_eq!(message.chat.id, 42);
        assert_eq!(message.text.as_deref(), Some("hello"));
        assert!(update.callback_query.is_none());
    }

    #[test]
    fn test_update_with_callback() {
        let json = r#"{
            "update_id": 11,
            "callback_query": {
                "id": "abc",
                "data": "toggle_remote",
                "message": {"message_id": 5, "chat": {"id": 42}}
            }
        }"#;
        let update: Update = serde_json::from_str(json).unwrap();
        let callback = update.callback_query.unwrap();
        assert_eq!(callback.data.as_deref(), Some("toggle_remote"));
        assert_eq!(callback.message.unwrap().message_id, 5);
    }

    #[test]
    fn test_api_error_envelope() {
        let json = r#"{"ok": false, "error_code": 400, "description": "Bad Request"}"#;
        let response: ApiResponse<serde_json::Value> = serde_json::from_str(json).unwrap();
        assert!(!response.ok);
        assert_eq!(response.error_code, Some(400));
    }

    #[test]
    fn test_inline_markup_serialization() {
        let markup = ReplyMarkup::Inline(InlineKeyboardMarkup {
            inline_keyboard: vec![vec![InlineKeyboardButton {
                text: "Run".to_string(),
                callback_data: "search_jobs".to_string(),
            }]],
        });
        let json = serde_json::to_value(&markup).unwrap();
        assert_eq!(
            json["inline_keyboard"][0][0]["callback_data"],
            "search_jobs"
        );
    }

    #[test]
    fn test_send_message_omits_absent_fields() {
        let request = SendMessageRequest {
            chat_id: 42,
            text: "hi",
            parse_mode: None,
            reply_markup: None,
            disable_web_page_preview: true,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("parse_mode").is_none());
        assert!(json.get("reply_markup").is_none());
    }
}
