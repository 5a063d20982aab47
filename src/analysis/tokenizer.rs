use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anything outside ASCII word characters and whitespace, plus '_'.
    static ref NON_TOKEN: Regex = Regex::new(r"[^A-Za-z0-9\s]|_").unwrap();
}

/// Splits text into lowercase tokens for dictionary matching.
///
/// Punctuation becomes a separator, so "don't" yields "don" and "t".
/// Numeric runs survive as tokens; they simply never match a word list.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_TOKEN
        .replace_all(&lowered, " ")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}
