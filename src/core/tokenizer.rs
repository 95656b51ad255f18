// src/core/tokenizer.rs
use anyhow::Result;
use std::io::BufRead;

use crate::models::DocumentStats;

/// Streaming word scanner with ASCII semantics.
///
/// Alphanumeric bytes are lower-cased and accumulated into a pending word;
/// any other byte flushes that word, tagged with the current sentence id.
/// `.`, `!` and `?` each close a sentence, consecutive terminators
/// included. Digits are word characters, so "2023" is a token.
#[derive(Debug, Default)]
pub struct Tokenizer {
    pending: String,
    current_sentence: u64,
    stats: DocumentStats,
}

impl Tokenizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current sentence id: 0 before the first terminator, then the running
    /// terminator count. Ids are monotonically non-decreasing but not
    /// required to be contiguous.
    #[must_use]
    pub const fn current_sentence(&self) -> u64 {
        self.current_sentence
    }

    /// Feeds one byte, delivering any completed word to `emit` along with
    /// the id of the sentence it belongs to.
    pub fn push_byte<F>(&mut self, byte: u8, emit: &mut F)
    where
        F: FnMut(&str, u64),
    {
        if byte.is_ascii_alphanumeric() {
            self.pending.push(char::from(byte.to_ascii_lowercase()));
            return;
        }

        self.flush(emit);

        if matches!(byte, b'.' | b'!' | b'?') {
            self.stats.total_sentences = self.stats.total_sentences.saturating_add(1);
            self.current_sentence = self.stats.total_sentences;
        }
    }

    /// Flushes a trailing unterminated word and returns the finalized
    /// document counters.
    pub fn finish<F>(mut self, emit: &mut F) -> DocumentStats
    where
        F: FnMut(&str, u64),
    {
        self.flush(emit);
        self.stats.finalize();
        self.stats
    }

    fn flush<F>(&mut self, emit: &mut F)
    where
        F: FnMut(&str, u64),
    {
        if self.pending.is_empty() {
            return;
        }
        emit(&self.pending, self.current_sentence);
        self.stats.total_words = self.stats.total_words.saturating_add(1);
        self.pending.clear();
    }
}

/// Consumes `reader` in a single pass, delivering every word and its
/// sentence id to `on_word`.
///
/// # Errors
///
/// Returns an error if reading from `reader` fails.
pub fn scan<R, F>(mut reader: R, mut on_word: F) -> Result<DocumentStats>
where
    R: BufRead,
    F: FnMut(&str, u64),
{
    let mut tokenizer = Tokenizer::new();

    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            break;
        }
        let len = chunk.len();
        for &byte in chunk {
            tokenizer.push_byte(byte, &mut on_word);
        }
        reader.consume(len);
    }

    Ok(tokenizer.finish(&mut on_word))
}
