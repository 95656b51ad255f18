// src/cli.rs
use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use crate::core::index::FrequencyIndex;
use crate::core::ranker::{self, Ranking};
use crate::core::tokenizer;
use crate::models::DocumentStats;
use crate::report::write_report;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Word whose frequency is always reported, stop word or not
    pub topic: String,

    /// Plain-text file to read (defaults to standard input)
    pub input: Option<PathBuf>,
}

/// Outcome of one analysis pass: document counters plus the records
/// selected for the report.
#[derive(Debug)]
pub struct Analysis {
    pub stats: DocumentStats,
    pub ranking: Ranking,
}

/// Tokenizes and indexes `reader` in a single pass, then ranks the indexed
/// words against `topic`. The topic is lower-cased before lookup.
///
/// # Errors
///
/// Returns an error if reading the input fails.
pub fn analyze<R: BufRead>(reader: R, topic: &str) -> Result<Analysis> {
    let topic = topic.to_ascii_lowercase();
    let mut index = FrequencyIndex::new();

    let stats = tokenizer::scan(reader, |word, sentence_id| {
        index.record(word, sentence_id);
    })?;
    let ranking = ranker::rank(&index, &topic);

    Ok(Analysis { stats, ranking })
}

/// Runs one full analysis and prints the report to standard output.
///
/// # Errors
///
/// This function may return an error if:
/// * The input file cannot be opened or read
/// * Writing the report to standard output fails
pub fn run(args: Args) -> Result<()> {
    let analysis = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?;
            analyze(BufReader::new(file), &args.topic)?
        }
        None => analyze(io::stdin().lock(), &args.topic)?,
    };

    let stdout = io::stdout();
    write_report(
        &mut stdout.lock(),
        &args.topic,
        &analysis.stats,
        &analysis.ranking,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_counts_words_and_sentences() {
        let text = "The cat sat. The cat ran. The dog slept.";
        let analysis = analyze(text.as_bytes(), "cat").expect("analysis should succeed");

        assert_eq!(analysis.stats.total_words, 9);
        assert_eq!(analysis.stats.total_sentences, 3);
        let topic = analysis.ranking.topic.expect("topic should be found");
        assert_eq!(topic.total_count, 2);
        assert_eq!(topic.sentence_count, 2);
    }

    #[test]
    fn test_analyze_lowercases_topic() {
        let analysis = analyze("Cats cats CATS.".as_bytes(), "CATS").expect("analysis should succeed");
        let topic = analysis.ranking.topic.expect("topic matches after normalization");
        assert_eq!(topic.word, "cats");
        assert_eq!(topic.total_count, 3);
        assert_eq!(topic.sentence_count, 1);
    }
}
