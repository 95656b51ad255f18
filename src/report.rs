// src/report.rs
use anyhow::Result;
use std::io::Write;

use crate::core::index::WordRecord;
use crate::core::ranker::Ranking;
use crate::models::DocumentStats;

const BANNER: &str = "=============================";
const RULE: &str = "-------------------------------------------------------------------";

/// Writes the fixed-column report: header, topic row, then the top other
/// words. Rows for absent records are simply omitted, so a topic that never
/// occurs produces a header-only table.
///
/// The header echoes the topic word as supplied by the caller, not the
/// lower-cased form the rows use.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_report<W: Write>(
    out: &mut W,
    topic: &str,
    stats: &DocumentStats,
    ranking: &Ranking,
) -> Result<()> {
    writeln!(out, "{BANNER}")?;
    writeln!(out, "Topic index report")?;
    writeln!(out, "Topic word: '{topic}'")?;
    writeln!(out, "Total words: {}", stats.total_words)?;
    writeln!(out, "Total sentences: {}", stats.total_sentences)?;
    writeln!(out, "{BANNER}")?;
    writeln!(
        out,
        "{:<15} {:>8} {:>10} {:>15} {:>10}",
        "Word", "Count", "% Words", "Sentences", "% Sent"
    )?;
    writeln!(out, "{RULE}")?;

    if let Some(record) = &ranking.topic {
        write_row(out, record, stats)?;
    }
    for record in &ranking.top_others {
        write_row(out, record, stats)?;
    }

    writeln!(out, "{BANNER}")?;
    Ok(())
}

fn write_row<W: Write>(out: &mut W, record: &WordRecord, stats: &DocumentStats) -> Result<()> {
    writeln!(
        out,
        "{:<15} {:>8} {:>9.2}%   {:>5}/{:<7} {:>8.2}%",
        record.word,
        record.total_count,
        stats.percent_of_words(record.total_count),
        record.sentence_count,
        stats.total_sentences,
        stats.percent_of_sentences(record.sentence_count),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::analyze;

    fn render(text: &str, topic: &str) -> String {
        let analysis = analyze(text.as_bytes(), topic).expect("in-memory analysis cannot fail");
        let mut out = Vec::new();
        write_report(&mut out, topic, &analysis.stats, &analysis.ranking)
            .expect("writing to a Vec cannot fail");
        String::from_utf8(out).expect("report is valid UTF-8")
    }

    #[test]
    fn test_full_report_layout() {
        let report = render("The cat sat. The cat ran. The dog slept.", "cat");
        let expected = "\
=============================
Topic index report
Topic word: 'cat'
Total words: 9
Total sentences: 3
=============================
Word               Count    % Words       Sentences     % Sent
-------------------------------------------------------------------
cat                    2     22.22%       2/3          66.67%
dog                    1     11.11%       1/3          33.33%
ran                    1     11.11%       1/3          33.33%
sat                    1     11.11%       1/3          33.33%
slept                  1     11.11%       1/3          33.33%
=============================
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_empty_input_produces_header_only_table() {
        let report = render("", "cat");
        let expected = "\
=============================
Topic index report
Topic word: 'cat'
Total words: 0
Total sentences: 0
=============================
Word               Count    % Words       Sentences     % Sent
-------------------------------------------------------------------
=============================
";
        assert_eq!(report, expected);
    }

    #[test]
    fn test_absent_topic_omits_topic_row() {
        let report = render("The dog slept.", "cat");
        assert!(
            !report.lines().any(|line| line.starts_with("cat")),
            "No row for a topic that never occurs"
        );
        assert!(report.contains("Topic word: 'cat'"));
        assert!(report.lines().any(|line| line.starts_with("dog")));
    }

    #[test]
    fn test_header_preserves_topic_casing() {
        let report = render("Cats cats CATS.", "Cats");
        assert!(
            report.contains("Topic word: 'Cats'"),
            "Header echoes the topic as typed"
        );
        assert!(
            report.lines().any(|line| line.starts_with("cats ")),
            "Row uses the normalized form"
        );
    }

    #[test]
    fn test_output_is_idempotent() {
        let text = "Rust is fast. Rust is safe! Is Rust fun?";
        let first = render(text, "rust");
        let second = render(text, "rust");
        assert_eq!(first, second, "Identical input yields byte-identical output");
    }
}
