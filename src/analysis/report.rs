use super::frequency::{count_flat, count_grouped, FrequencyTable, GroupedFrequencies};
use super::lexicon::{INDEFINITE_ARTICLES, PREPOSITIONS, PRONOUNS};
use super::stats::{compute_basic_stats, is_blank, BasicStats};
use super::tokenizer::tokenize;
use crate::error::AnalyzeError;
use serde::Serialize;
use tracing::{debug, warn};

/// Everything one analysis pass produces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub stats: BasicStats,
    pub token_count: usize,
    pub pronouns: GroupedFrequencies,
    pub prepositions: FrequencyTable,
    pub articles: FrequencyTable,
}

/// Runs every analysis over `text` with the built-in word lists.
///
/// Blank or whitespace-only text (byte order marks included) is rejected
/// before anything is computed.
pub fn analyze(text: &str) -> Result<AnalysisReport, AnalyzeError> {
    if is_blank(text) {
        warn!(len = text.len(), "rejected blank input");
        return Err(AnalyzeError::BlankInput);
    }

    let stats = compute_basic_stats(text);
    let tokens = tokenize(text);
    debug!(tokens = tokens.len(), words = stats.words, "tokenized input");

    Ok(AnalysisReport {
        stats,
        token_count: tokens.len(),
        pronouns: count_grouped(&tokens, &PRONOUNS),
        prepositions: count_flat(&tokens, &PREPOSITIONS),
        articles: count_flat(&tokens, &INDEFINITE_ARTICLES),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bom_only_input_rejected() {
        assert_eq!(analyze("\u{feff}"), Err(AnalyzeError::BlankInput));
        assert_eq!(analyze("\u{feff}\n  "), Err(AnalyzeError::BlankInput));
    }

    #[test]
    fn test_end_to_end_sentence() {
        let report = analyze("She gave her book to him. It was hers.").unwrap();
        assert_eq!(report.token_count, 9);

        let personal = report.pronouns.get("personal").unwrap();
        assert_eq!(
            personal.sorted(),
            vec![("she", 1), ("her", 1), ("him", 1), ("it", 1), ("hers", 1)]
        );

        let possessive = report.pronouns.get("possessive").unwrap();
        assert_eq!(possessive.sorted(), vec![("her", 1), ("hers", 1)]);

        assert_eq!(report.prepositions.sorted(), vec![("to", 1)]);
        assert!(report.articles.is_empty());
    }

    #[test]
    fn test_blank_input_rejected() {
        assert!(matches!(analyze(""), Err(AnalyzeError::BlankInput)));
        assert!(matches!(analyze("   "), Err(AnalyzeError::BlankInput)));
        assert!(matches!(analyze("\n\t \n"), Err(AnalyzeError::BlankInput)));
    }

    #[test]
    fn test_punctuation_only_is_not_blank() {
        let report = analyze("?!").unwrap();
        assert_eq!(report.stats.specials, 2);
        assert_eq!(report.token_count, 0);
        assert!(!report.pronouns.has_matches());
        assert_eq!(report.pronouns.len(), 6);
    }

    #[test]
    fn test_report_serializes_all_sections() {
        let report = analyze("A cat sat on a mat.").unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["stats"]["words"], 6);
        assert_eq!(value["articles"]["a"], 2);
        assert_eq!(value["prepositions"]["on"], 1);
        assert!(value["pronouns"]["personal"].as_object().unwrap().is_empty());
    }
}
