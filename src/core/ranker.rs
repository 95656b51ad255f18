// src/core/ranker.rs
use crate::core::index::{FrequencyIndex, WordRecord};
use crate::core::stopwords::is_stop_word;

/// How many non-topic, non-stop words the report shows.
pub const TOP_OTHERS: usize = 4;

/// Records selected for the report: the topic word's own stats plus up to
/// [`TOP_OTHERS`] highest-count qualifying words.
#[derive(Debug, Default)]
pub struct Ranking {
    pub topic: Option<WordRecord>,
    pub top_others: Vec<WordRecord>,
}

/// Sorts the full index by occurrence count descending and selects the
/// topic record plus the top qualifying others.
///
/// Ties between equal counts break lexicographically on the word, so the
/// selection is deterministic regardless of index iteration order. Stop
/// words and the topic word never appear among the others; the topic word
/// itself is reported even when it is a stop word. `topic` must already be
/// lower-cased.
#[must_use]
pub fn rank(index: &FrequencyIndex, topic: &str) -> Ranking {
    let mut records: Vec<&WordRecord> = index.records().collect();
    records.sort_by(|a, b| {
        b.total_count
            .cmp(&a.total_count)
            .then_with(|| a.word.cmp(&b.word))
    });

    let top_others = records
        .iter()
        .filter(|record| record.word != topic && !is_stop_word(&record.word))
        .take(TOP_OTHERS)
        .map(|record| (*record).clone())
        .collect();

    Ranking {
        topic: index.get(topic).cloned(),
        top_others,
    }
}
