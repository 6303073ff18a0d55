//! Conversion from the core's transport-agnostic [`Menu`] model to
//! Telegram keyboard markup.

use jobhound_core::dialogue::menu::{InlineButton, Menu};

use super::types::{
    InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, ReplyKeyboardMarkup,
    ReplyKeyboardRemove, ReplyMarkup,
};

/// Render a core menu as Bot API reply markup.
pub fn to_reply_markup(menu: &Menu) -> ReplyMarkup {
    match menu {
        Menu::Reply(rows) => ReplyMarkup::Keyboard(ReplyKeyboardMarkup {
            keyboard: rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(|label| KeyboardButton {
                            text: label.clone(),
                        })
                        .collect()
                })
                .collect(),
            resize_keyboard: true,
        }),
        Menu::RemoveReply => ReplyMarkup::Remove(ReplyKeyboardRemove {
            remove_keyboard: true,
        }),
        Menu::Inline(rows) => ReplyMarkup::Inline(to_inline_markup(rows)),
    }
}

/// Render inline rows alone (edits can only carry inline keyboards).
pub fn to_inline_markup(rows: &[Vec<InlineButton>]) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup {
        inline_keyboard: rows
            .iter()
            .map(|row| {
                row.iter()
                    .map(|button| InlineKeyboardButton {
                        text: button.label.clone(),
                        callback_data: button.action.to_string(),
                    })
                    .collect()
            })
            .collect(),
    }
}
