// Tokenizer and stopword filter.

use super::normalize::{is_separator, normalize};
use super::stopwords::StopwordSet;

/// Tokens must be longer than this many characters to survive.
pub const MIN_TOKEN_CHARS: usize = 2;

/// Split normalized text into tokens, dropping short words and stopwords.
///
/// Length is counted in Unicode scalar values, so vowel signs and viramas
/// count towards a word's length. Token order is preserved.
pub fn tokenize(normalized: &str, stopwords: &StopwordSet) -> Vec<String> {
    normalized
        .split(is_separator)
        .filter(|token| token.chars().count() > MIN_TOKEN_CHARS)
        .filter(|token| !stopwords.contains(token))
        .map(str::to_string)
        .collect()
}

/// Full preprocessing: normalize raw input, then tokenize it.
pub fn preprocess(raw: &str, stopwords: &StopwordSet) -> Vec<String> {
    tokenize(&normalize(raw), stopwords)
}
