//! Built-in word lists and the dictionary types that hold them.
//!
//! Every list is lowercase and matched against lowercase tokens. Lists are
//! exposed through `lazy_static` statics so callers only ever see shared,
//! read-only views.

use lazy_static::lazy_static;

pub const PERSONAL_PRONOUNS: &[&str] = &[
    "i", "me", "my", "mine", "myself", "you", "your", "yours", "yourself", "he", "him", "his",
    "himself", "she", "her", "hers", "herself", "it", "its", "itself", "we", "us", "our", "ours",
    "ourselves", "yourselves", "they", "them", "their", "theirs", "themselves",
];

pub const POSSESSIVE_PRONOUNS: &[&str] = &[
    "my", "your", "his", "her", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs",
];

pub const DEMONSTRATIVE_PRONOUNS: &[&str] = &["this", "that", "these", "those"];

pub const INTERROGATIVE_PRONOUNS: &[&str] = &["who", "whom", "whose", "which", "what"];

pub const RELATIVE_PRONOUNS: &[&str] = &["who", "whom", "whose", "which", "that"];

/// "no one" never matches a single token; it stays for parity with the
/// published list.
pub const INDEFINITE_PRONOUNS: &[&str] = &[
    "anybody", "anyone", "anything", "each", "either", "everybody", "everyone", "everything",
    "neither", "nobody", "no one", "nothing", "one", "somebody", "someone", "something", "both",
    "few", "many", "several", "all", "any", "most", "none", "some",
];

pub const PREPOSITION_WORDS: &[&str] = &[
    "about", "above", "across", "after", "against", "along", "amid", "among", "around", "at",
    "before", "behind", "below", "beneath", "beside", "between", "beyond", "by", "concerning",
    "considering", "despite", "down", "during", "except", "for", "from", "in", "inside", "into",
    "like", "near", "of", "off", "on", "onto", "out", "outside", "over", "past", "regarding",
    "round", "since", "through", "throughout", "to", "toward", "towards", "under", "underneath",
    "until", "unto", "up", "upon", "with", "within", "without",
];

pub const INDEFINITE_ARTICLE_WORDS: &[&str] = &["a", "an"];

lazy_static! {
    /// Pronoun categories in display order. Categories overlap on purpose.
    pub static ref PRONOUNS: TokenCategorySet = TokenCategorySet::new()
        .with_category("personal", Dictionary::new(PERSONAL_PRONOUNS.iter().copied()))
        .with_category("possessive", Dictionary::new(POSSESSIVE_PRONOUNS.iter().copied()))
        .with_category("demonstrative", Dictionary::new(DEMONSTRATIVE_PRONOUNS.iter().copied()))
        .with_category("interrogative", Dictionary::new(INTERROGATIVE_PRONOUNS.iter().copied()))
        .with_category("relative", Dictionary::new(RELATIVE_PRONOUNS.iter().copied()))
        .with_category("indefinite", Dictionary::new(INDEFINITE_PRONOUNS.iter().copied()));
    pub static ref PREPOSITIONS: Dictionary = Dictionary::new(PREPOSITION_WORDS.iter().copied());
    pub static ref INDEFINITE_ARTICLES: Dictionary =
        Dictionary::new(INDEFINITE_ARTICLE_WORDS.iter().copied());
}

/// An ordered set of lowercase words.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Builds a dictionary, lowercasing entries and dropping repeats while
    /// keeping first-seen order.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        for word in words {
            let word = word.as_ref().to_lowercase();
            if !dictionary.contains(&word) {
                dictionary.words.push(word);
            }
        }
        dictionary
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Named dictionaries, kept in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenCategorySet {
    categories: Vec<(String, Dictionary)>,
}

impl TokenCategorySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a category. A repeated name replaces the earlier dictionary in
    /// place.
    pub fn with_category(mut self, name: &str, dictionary: Dictionary) -> Self {
        match self.categories.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = dictionary,
            None => self.categories.push((name.to_string(), dictionary)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&Dictionary> {
        self.categories
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, dictionary)| dictionary)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Dictionary)> {
        self.categories
            .iter()
            .map(|(name, dictionary)| (name.as_str(), dictionary))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
