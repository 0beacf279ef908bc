//! # Display Helpers

/// Longest chat title shown in a chat list.
pub const CHAT_TITLE_MAX_CHARS: usize = 32;

/// Truncate `text` to at most `max_chars` characters without splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
