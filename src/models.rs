// src/models.rs

/// Document-wide counters accumulated during the single tokenizing pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DocumentStats {
    pub total_words: u64,
    pub total_sentences: u64,
}

impl DocumentStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_words: 0,
            total_sentences: 0,
        }
    }

    /// Treats the whole text as one sentence when words were seen but no
    /// terminator was, so per-sentence percentages stay defined.
    pub const fn finalize(&mut self) {
        if self.total_sentences == 0 && self.total_words > 0 {
            self.total_sentences = 1;
        }
    }

    #[must_use]
    pub fn percent_of_words(&self, count: u64) -> f64 {
        if self.total_words == 0 {
            return 0.0;
        }
        (count as f64 / self.total_words as f64) * 100.0
    }

    #[must_use]
    pub fn percent_of_sentences(&self, count: u64) -> f64 {
        if self.total_sentences == 0 {
            return 0.0;
        }
        (count as f64 / self.total_sentences as f64) * 100.0
    }
}
