//! MarkdownV2 escaping.
//!
//! Telegram's MarkdownV2 dialect rejects a whole message when any reserved
//! character appears unescaped, so every interpolated value goes through
//! [`escape_markdown_v2`] before it touches a strict-mode template.

/// Every character MarkdownV2 reserves.
const RESERVED: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

/// Backslash-escape all reserved MarkdownV2 characters in `text`.
pub fn escape_markdown_v2(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if RESERVED.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
