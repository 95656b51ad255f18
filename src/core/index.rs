// src/core/index.rs
use std::collections::HashMap;

/// Counters for one distinct lower-cased word.
///
/// `last_sentence_id` only de-duplicates sentence membership within a
/// sentence; it is not part of the reported statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub total_count: u64,
    pub sentence_count: u64,
    last_sentence_id: Option<u64>,
}

impl WordRecord {
    fn new(word: &str) -> Self {
        Self {
            word: word.to_owned(),
            total_count: 0,
            sentence_count: 0,
            last_sentence_id: None,
        }
    }
}

/// Mapping from normalized word to its counters, owned by a single run and
/// dropped when the run's scope ends.
#[derive(Debug, Default)]
pub struct FrequencyIndex {
    words: HashMap<String, WordRecord>,
}

impl FrequencyIndex {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one occurrence of `word` inside `sentence_id`.
    ///
    /// `total_count` always moves; `sentence_count` moves at most once per
    /// word per sentence, however often the word recurs within it.
    pub fn record(&mut self, word: &str, sentence_id: u64) {
        let record = self
            .words
            .entry(word.to_owned())
            .or_insert_with_key(|key| WordRecord::new(key));

        record.total_count = record.total_count.saturating_add(1);
        if record.last_sentence_id != Some(sentence_id) {
            record.sentence_count = record.sentence_count.saturating_add(1);
            record.last_sentence_id = Some(sentence_id);
        }
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&WordRecord> {
        self.words.get(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn records(&self) -> impl Iterator<Item = &WordRecord> {
        self.words.values()
    }
}
