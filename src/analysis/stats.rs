use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

lazy_static! {
    static ref LETTER: Regex = Regex::new(r"[A-Za-z0-9]").unwrap();
    static ref WORD: Regex = Regex::new(r"[A-Za-z0-9_]+").unwrap();
    // U+FEFF counts as whitespace, as it does for a browser's `\s`.
    static ref SPACE: Regex = Regex::new(r"[\s\x{FEFF}]").unwrap();
    static ref SPECIAL: Regex = Regex::new(r"[^A-Za-z0-9_\s\x{FEFF}]").unwrap();
}

/// Byte order mark / zero-width no-break space.
pub const BOM: char = '\u{FEFF}';

/// True when `text` holds nothing but whitespace (U+FEFF included).
pub fn is_blank(text: &str) -> bool {
    text.chars().all(|c| c.is_whitespace() || c == BOM)
}

/// Character and word counts over raw, untokenized text.
///
/// The counts are independent of each other: digits count as letters, and
/// every newline is counted in `spaces` as well as in `newlines`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BasicStats {
    pub letters: usize,
    pub words: usize,
    pub spaces: usize,
    pub newlines: usize,
    pub specials: usize,
}

/// Counts are per `char`, so an emoji or accented letter is one special.
pub fn compute_basic_stats(text: &str) -> BasicStats {
    BasicStats {
        letters: LETTER.find_iter(text).count(),
        words: WORD.find_iter(text).count(),
        spaces: SPACE.find_iter(text).count(),
        newlines: text.chars().filter(|&c| c == '\n').count(),
        specials: SPECIAL.find_iter(text).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_counts_as_space() {
        assert_eq!(
            compute_basic_stats("\u{feff}"),
            BasicStats {
                spaces: 1,
                ..BasicStats::default()
            }
        );
        let stats = compute_basic_stats("\u{feff}hi there");
        assert_eq!(stats.spaces, 2);
        assert_eq!(stats.specials, 0);
        assert_eq!(stats.words, 2);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\n"));
        assert!(is_blank("\u{feff}"));
        assert!(is_blank("\u{feff} \n\u{feff}"));
        assert!(!is_blank("\u{feff}a"));
        assert!(!is_blank("."));
    }

    #[test]
    fn test_mixed_sample() {
        let stats = compute_basic_stats("ab 12!\n");
        assert_eq!(
            stats,
            BasicStats {
                letters: 4,
                words: 2,
                spaces: 2,
                newlines: 1,
                specials: 1,
            }
        );
    }

    #[test]
    fn test_empty_text_is_all_zero() {
        assert_eq!(compute_basic_stats(""), BasicStats::default());
    }

    #[test]
    fn test_newlines_also_count_as_spaces() {
        let stats = compute_basic_stats("a\nb\n\tc");
        assert_eq!(stats.newlines, 2);
        assert_eq!(stats.spaces, 3);
    }

    #[test]
    fn test_underscore_is_word_but_not_letter_or_special() {
        let stats = compute_basic_stats("snake_case");
        assert_eq!(stats.letters, 9);
        assert_eq!(stats.words, 1);
        assert_eq!(stats.specials, 0);
    }

    #[test]
    fn test_non_ascii_counts_as_special() {
        let stats = compute_basic_stats("café 😊");
        assert_eq!(stats.letters, 3);
        assert_eq!(stats.words, 1);
        assert_eq!(stats.specials, 2);
        assert_eq!(stats.spaces, 1);
    }

    #[test]
    fn test_contraction_splits_words() {
        let stats = compute_basic_stats("don't");
        assert_eq!(stats.words, 2);
        assert_eq!(stats.specials, 1);
    }
}
