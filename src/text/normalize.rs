// Marathi text normalizer.
//
// Three passes, in this order:
//   1. drop every character outside the Devanagari block (U+0900–U+097F)
//      unless it is a separator
//   2. replace punctuation with a single space
//   3. collapse separator runs and trim
//
// Separators are Unicode whitespace plus the ASCII information separators
// U+001C..U+001F, which char::is_whitespace leaves out.
//
// Step 1 already removes ASCII punctuation, so in practice step 2 only ever
// sees the danda marks. The ASCII set stays in the class so the pass is
// correct on its own.

use std::sync::LazyLock;

use regex_lite::Regex;

/// First code point of the Devanagari block used for Marathi.
pub const MARATHI_BLOCK_START: char = '\u{0900}';
/// Last code point of the Devanagari block used for Marathi.
pub const MARATHI_BLOCK_END: char = '\u{097F}';

/// Punctuation replaced by a space: ASCII punctuation plus danda and double danda.
pub const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~\u{0964}\u{0965}";

static PUNCTUATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let class = format!("[{}]", regex_lite::escape(PUNCTUATION));
    Regex::new(&class).expect("punctuation class is a valid regex")
});

/// True for characters in the Marathi (Devanagari) Unicode block.
pub fn is_marathi(c: char) -> bool {
    (MARATHI_BLOCK_START..=MARATHI_BLOCK_END).contains(&c)
}

/// True for characters that separate words.
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1C}'..='\u{1F}').contains(&c)
}

/// Normalize raw input into space-separated Marathi words.
///
/// Never fails. Empty or fully non-Marathi input yields an empty string.
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|&c| is_marathi(c) || is_separator(c))
        .collect();

    let spaced = PUNCTUATION_RE.replace_all(&kept, " ");

    spaced
        .split(is_separator)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
