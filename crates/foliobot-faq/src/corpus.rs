//! FAQ corpus model, line parser, and serializer.
//!
//! Grammar per record line: `Q:<q1>|<q2>|...|<qN>A:<answer text>`.
//! Comment lines start with `#`; blank lines are ignored. Malformed
//! lines are dropped silently — the corpus is user-authored and a typo
//! must never take the widget down.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Question used by the sentinel record substituted on corpus-load failure.
pub const SENTINEL_QUESTION: &str = "error";

/// One question-group/answer pair.
///
/// Invariant: `questions` is non-empty and every entry is lower-cased
/// and trimmed. `answer` keeps its case and may contain markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    pub questions: Vec<String>,
    pub answer: String,
}

/// The full ordered collection of FAQ records.
///
/// Insertion order equals source order; the matcher relies on this for
/// first-match-wins tie breaking. Immutable after load.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FaqCorpus {
    records: Vec<FaqRecord>,
}

impl FaqCorpus {
    pub fn new(records: Vec<FaqRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[FaqRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parse the line-oriented text format.
    ///
    /// A line is a valid record only if it contains the `Q:` marker, the
    /// `A:` marker, and a `|` somewhere before the first `A:`. The line
    /// is split on the FIRST `A:`; everything the rule rejects is
    /// skipped without error.
    pub fn parse(raw: &str) -> Self {
        let mut records = Vec::new();

        for line in raw.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let Some((q_part, a_part)) = line.split_once("A:") else {
                tracing::debug!("Skipping FAQ line without A: marker: {line}");
                continue;
            };
            if !q_part.contains('|') {
                tracing::debug!("Skipping FAQ line without | separator: {line}");
                continue;
            }
            let Some(q_list) = q_part.trim_start().strip_prefix("Q:") else {
                tracing::debug!("Skipping FAQ line without Q: marker: {line}");
                continue;
            };

            let questions: Vec<String> = q_list
                .split('|')
                .map(|q| q.trim().to_lowercase())
                .filter(|q| !q.is_empty())
                .collect();
            let answer = a_part.trim();

            if questions.is_empty() || answer.is_empty() {
                tracing::debug!("Skipping FAQ line with empty questions or answer: {line}");
                continue;
            }

            records.push(FaqRecord {
                questions,
                answer: answer.to_string(),
            });
        }

        Self { records }
    }

    /// Serialize back to the line format. `parse(corpus.serialize())`
    /// reproduces an equivalent corpus (same records, same order).
    pub fn serialize(&self) -> String {
        let mut out = String::new();
        for record in &self.records {
            let mut questions = record.questions.join("|");
            // A single question has no pipe of its own; the parser
            // requires one before A:, and trailing empties are dropped.
            if record.questions.len() == 1 {
                questions.push('|');
            }
            out.push_str(&format!("Q:{} A:{}\n", questions, record.answer));
        }
        out
    }

    /// Load a corpus from a file. An unreadable file degrades to the
    /// sentinel corpus instead of an error — the widget stays up.
    pub fn load(path: &Path, apology: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(raw) => {
                let corpus = Self::parse(&raw);
                tracing::info!("Loaded {} FAQ records from {}", corpus.len(), path.display());
                corpus
            }
            Err(e) => {
                tracing::warn!("Failed to load FAQ corpus from {}: {e}", path.display());
                Self::sentinel(apology)
            }
        }
    }

    /// Single-record corpus substituted when the corpus resource cannot
    /// be retrieved.
    pub fn sentinel(apology: &str) -> Self {
        Self {
            records: vec![FaqRecord {
                questions: vec![SENTINEL_QUESTION.to_string()],
                answer: apology.to_string(),
            }],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_single_line() {
        let corpus = FaqCorpus::parse("Q:hello|hi A:Hello there!");
        assert_eq!(corpus.len(), 1);
        let record = &corpus.records()[0];
        assert_eq!(record.questions, vec!["hello", "hi"]);
        assert_eq!(record.answer, "Hello there!");
    }

    #[test]
    fn test_parse_lowercases_and_trims_questions() {
        let corpus = FaqCorpus::parse("Q: Who Are You | WHO A:I'm a bot.");
        assert_eq!(corpus.records()[0].questions, vec!["who are you", "who"]);
        // Answer case preserved
        assert_eq!(corpus.records()[0].answer, "I'm a bot.");
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let raw = "# portfolio FAQ\n\n   \nQ:projects|my work A:Check out my portfolio.\n# trailing comment";
        let corpus = FaqCorpus::parse(raw);
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_parse_skips_indented_comment() {
        let corpus = FaqCorpus::parse("   # not a record\nQ:a|b A:ok");
        assert_eq!(corpus.len(), 1);
    }

    #[test]
    fn test_parse_skips_malformed_lines() {
        let raw = "\
Q:no answer marker|really
no markers at all
Q:no pipe before answer A:dropped
Q:|   | A:only empty questions
Q:empty answer|blank A:
Q:valid|ok A:kept";
        let corpus = FaqCorpus::parse(raw);
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.records()[0].answer, "kept");
    }

    #[test]
    fn test_parse_splits_on_first_answer_marker() {
        let corpus = FaqCorpus::parse("Q:grades|marks A:My GPA was an A: average.");
        assert_eq!(corpus.records()[0].answer, "My GPA was an A: average.");
    }

    #[test]
    fn test_parse_preserves_markup_in_answer() {
        let corpus =
            FaqCorpus::parse("Q:contact|email A:Write me at <a href=\"mailto:x@y.z\">x@y.z</a>");
        assert!(corpus.records()[0].answer.contains("<a href"));
    }

    #[test]
    fn test_parse_order_matches_input_order() {
        let raw = "Q:first|1st A:one\nQ:second|2nd A:two\nQ:third|3rd A:three";
        let corpus = FaqCorpus::parse(raw);
        let answers: Vec<&str> = corpus.records().iter().map(|r| r.answer.as_str()).collect();
        assert_eq!(answers, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_serialize_parse_round_trip() {
        let raw = "Q:hello|hi A:Hello there!\nQ:projects|my work|portfolio A:Check out my portfolio.";
        let corpus = FaqCorpus::parse(raw);
        let reparsed = FaqCorpus::parse(&corpus.serialize());
        assert_eq!(corpus, reparsed);
    }

    #[test]
    fn test_round_trip_single_question_record() {
        let corpus = FaqCorpus::new(vec![FaqRecord {
            questions: vec!["hello".into()],
            answer: "Hi!".into(),
        }]);
        let reparsed = FaqCorpus::parse(&corpus.serialize());
        assert_eq!(corpus, reparsed);
    }

    #[test]
    fn test_load_missing_file_degrades_to_sentinel() {
        let corpus = FaqCorpus::load(Path::new("/nonexistent/faq.txt"), "sorry, no data");
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.records()[0].questions, vec![SENTINEL_QUESTION]);
        assert_eq!(corpus.records()[0].answer, "sorry, no data");
    }

    #[test]
    fn test_load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Q:hello|hi A:Hello there!").unwrap();
        let corpus = FaqCorpus::load(file.path(), "unused");
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.records()[0].answer, "Hello there!");
    }
}
