/// Split text on single spaces. Consecutive spaces yield empty tokens, callers
/// decide what an empty token means. Empty input yields no tokens.
pub fn split_into_words(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(' ').collect()
}

/// A word is valid when it contains no control characters (U+0000..=U+001F).
pub fn is_valid_word(word: &str) -> bool {
    !word.chars().any(|c| c < ' ')
}
