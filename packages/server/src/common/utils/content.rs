/// Pure utility functions for text manipulation
///
/// These functions contain NO side effects - they take inputs and return outputs
/// without touching databases, making API calls, or performing I/O.
/// Lengths are counted in characters, never bytes, so multi-byte text is safe.

use regex::Regex;

/// Return the first `max_chars` characters of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Shorten text to at most `max_length` characters, marking the cut with "...".
///
/// If the text is longer than max_length, it keeps (max_length - 3) characters
/// and appends "..." for a total of max_length characters.
pub fn generate_summary(text: &str, max_length: usize) -> String {
    if text.chars().count() > max_length {
        let kept = truncate_chars(text, max_length.saturating_sub(3));
        format!("{}...", kept.trim_end())
    } else {
        text.to_string()
    }
}

/// Whole-word matcher for `term`: it must not be glued to word characters
/// on either side. Multi-word terms ("fine dining") match as a phrase.
pub fn word_matcher(term: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"\b{}\b", regex::escape(term)))
}
