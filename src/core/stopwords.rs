// src/core/stopwords.rs
use std::collections::HashSet;
use std::sync::LazyLock;

/// Common English function words excluded from the "top other words"
/// ranking. All entries are lower-case; tokens are always lower-cased
/// before lookup, so the comparison is effectively case-insensitive.
static STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "from",
    "has", "he", "her", "hers", "him", "his", "how", "i", "if", "in", "is",
    "it", "its", "me", "my", "not", "of", "on", "or", "our", "she", "that",
    "the", "their", "them", "these", "they", "this", "those", "to", "was",
    "we", "were", "what", "when", "where", "which", "who", "whom", "why",
    "will", "with", "you", "your", "yours",
];

static STOP_WORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOP_WORDS.iter().copied().collect());

/// Exact membership test against the fixed stop-word list.
#[must_use]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORD_SET.contains(word)
}
