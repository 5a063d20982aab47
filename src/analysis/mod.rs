//! Text statistics and word-category counting.
//!
//! Every function here is pure: plain text and word lists in, plain data
//! out. Nothing is cached between calls.

pub mod frequency;
pub mod lexicon;
pub mod report;
pub mod stats;
pub mod tokenizer;

pub use frequency::{count_flat, count_grouped, FrequencyTable, GroupedFrequencies};
pub use lexicon::{Dictionary, TokenCategorySet, INDEFINITE_ARTICLES, PREPOSITIONS, PRONOUNS};
pub use report::{analyze, AnalysisReport};
pub use stats::{compute_basic_stats, is_blank, BasicStats, BOM};
pub use tokenizer::tokenize;
