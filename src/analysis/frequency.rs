use super::lexicon::{Dictionary, TokenCategorySet};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashMap;

/// Occurrence counts for matched words.
///
/// Words that never matched are absent, never zero-valued. Iteration follows
/// first occurrence; [`FrequencyTable::sorted`] gives display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
    order: Vec<String>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
                self.order.push(word.to_string());
            }
        }
    }

    pub fn get(&self, word: &str) -> Option<usize> {
        self.counts.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.order
            .iter()
            .map(|word| (word.as_str(), self.counts[word]))
    }

    /// Entries by descending count. Equal counts keep first-occurrence order;
    /// there is no secondary key.
    pub fn sorted(&self) -> Vec<(&str, usize)> {
        let mut entries: Vec<(&str, usize)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let sorted = self.sorted();
        let mut map = serializer.serialize_map(Some(sorted.len()))?;
        for (word, count) in sorted {
            map.serialize_entry(word, &count)?;
        }
        map.end()
    }
}

/// One [`FrequencyTable`] per category, in category order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupedFrequencies {
    groups: Vec<(String, FrequencyTable)>,
}

impl GroupedFrequencies {
    pub fn get(&self, category: &str) -> Option<&FrequencyTable> {
        self.groups
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, table)| table)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FrequencyTable)> {
        self.groups.iter().map(|(name, table)| (name.as_str(), table))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// True when at least one category matched a token.
    pub fn has_matches(&self) -> bool {
        self.groups.iter().any(|(_, table)| !table.is_empty())
    }
}

impl Serialize for GroupedFrequencies {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (name, table) in &self.groups {
            map.serialize_entry(name, table)?;
        }
        map.end()
    }
}

/// Counts tokens that belong to `dictionary`.
pub fn count_flat<S: AsRef<str>>(tokens: &[S], dictionary: &Dictionary) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for token in tokens {
        let token = token.as_ref();
        if dictionary.contains(token) {
            table.increment(token);
        }
    }
    table
}

/// Counts tokens per category. Every category gets a table, even an empty
/// one, and a token listed under several categories counts in each.
pub fn count_grouped<S: AsRef<str>>(
    tokens: &[S],
    categories: &TokenCategorySet,
) -> GroupedFrequencies {
    let mut groups: Vec<(String, FrequencyTable)> = categories
        .iter()
        .map(|(name, _)| (name.to_string(), FrequencyTable::new()))
        .collect();

    for token in tokens {
        let token = token.as_ref();
        for ((_, dictionary), (_, table)) in categories.iter().zip(groups.iter_mut()) {
            if dictionary.contains(token) {
                table.increment(token);
            }
        }
    }

    GroupedFrequencies { groups }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::lexicon::{INDEFINITE_ARTICLES, PREPOSITIONS, PRONOUNS};
    use crate::analysis::tokenizer::tokenize;

    #[test]
    fn test_count_flat_only_present_words() {
        let tokens = tokenize("to the house and to the sea, up we go");
        let table = count_flat(&tokens, &PREPOSITIONS);
        assert_eq!(table.get("to"), Some(2));
        assert_eq!(table.get("up"), Some(1));
        assert_eq!(table.get("from"), None);
        assert_eq!(table.len(), 2);
        assert_eq!(table.iter().map(|(_, count)| count).sum::<usize>(), 3);
    }

    #[test]
    fn test_count_flat_ignores_words_outside_dictionary() {
        let tokens = tokenize("an apple a day and another");
        let table = count_flat(&tokens, &INDEFINITE_ARTICLES);
        assert_eq!(table.get("an"), Some(1));
        assert_eq!(table.get("a"), Some(1));
        assert_eq!(table.get("another"), None);
    }

    #[test]
    fn test_count_flat_empty_inputs() {
        let empty: Vec<String> = vec![];
        assert!(count_flat(&empty, &PREPOSITIONS).is_empty());
        let tokens = tokenize("over the hill");
        assert!(count_flat(&tokens, &Dictionary::default()).is_empty());
    }

    #[test]
    fn test_count_grouped_keeps_every_category() {
        let tokens = tokenize("nothing matches here at all today");
        let grouped = count_grouped(&tokens, &PRONOUNS);
        assert_eq!(grouped.len(), 6);
        assert!(grouped.get("personal").unwrap().is_empty());
        assert!(grouped.get("relative").unwrap().is_empty());
        assert_eq!(grouped.get("indefinite").unwrap().get("all"), Some(1));
    }

    #[test]
    fn test_count_grouped_without_matches() {
        let tokens = tokenize("sun rain wind");
        let grouped = count_grouped(&tokens, &PRONOUNS);
        assert_eq!(grouped.len(), 6);
        assert!(!grouped.has_matches());
    }

    #[test]
    fn test_shared_word_counts_in_each_category() {
        let tokens = tokenize("her her");
        let grouped = count_grouped(&tokens, &PRONOUNS);
        assert_eq!(grouped.get("personal").unwrap().get("her"), Some(2));
        assert_eq!(grouped.get("possessive").unwrap().get("her"), Some(2));
        assert_eq!(grouped.get("demonstrative").unwrap().get("her"), None);
    }

    #[test]
    fn test_sorted_is_count_descending_with_stable_ties() {
        let tokens = tokenize("on at on in at on by");
        let table = count_flat(&tokens, &PREPOSITIONS);
        assert_eq!(table.sorted(), vec![("on", 3), ("at", 2), ("in", 1), ("by", 1)]);
    }

    #[test]
    fn test_serialize_in_display_order() {
        let tokens = tokenize("at on on");
        let table = count_flat(&tokens, &PREPOSITIONS);
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(json, r#"{"on":2,"at":1}"#);
    }
}
