// Output formatting: terminal display and HTML pages.

pub mod html;
pub mod terminal;

/// Shorten `text` to its first `max_chars` characters, marking the cut with "...".
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
