//! Local keyword matcher — the scoring fallback behind the remote backend.
//!
//! Intentionally crude: exact / substring / word-overlap scoring, no
//! stemming, no frequency weighting. Fast, dependency-free, and every
//! answer is explainable from the score table below.

use crate::corpus::{FaqCorpus, FaqRecord};

/// Question entry equals the full normalized query.
const SCORE_EXACT: u32 = 100;
/// Question entry contains the full normalized query as a substring.
const SCORE_SUBSTRING: u32 = 50;
/// Symmetric partial match between one query word and one question word.
const SCORE_WORD: u32 = 10;
/// Minimum winning score, exclusive. Tuning knob, not a principled
/// cutoff: a single word match (10) is already enough to surface an
/// answer.
const SCORE_THRESHOLD: u32 = 8;

/// Query words at or below this length never count toward word matches.
const MIN_WORD_LEN: usize = 2;

/// Find the best answer for a free-text query, or return `fallback`.
///
/// Total function: never fails, always returns a non-empty string for a
/// non-empty fallback. Ties go to the earlier record — only a strictly
/// greater score replaces the current best.
pub fn find_answer(query: &str, corpus: &FaqCorpus, fallback: &str) -> String {
    let query = query.trim().to_lowercase();
    let words: Vec<&str> = query.split_whitespace().collect();

    let mut best: Option<&FaqRecord> = None;
    let mut best_score = 0u32;

    for record in corpus.records() {
        let score = score_record(record, &query, &words);
        if score > best_score {
            best_score = score;
            best = Some(record);
        }
    }

    match best {
        Some(record) if best_score > SCORE_THRESHOLD => record.answer.clone(),
        _ => fallback.to_string(),
    }
}

/// Score one record against the normalized query.
fn score_record(record: &FaqRecord, query: &str, words: &[&str]) -> u32 {
    let mut score = 0;

    for question in &record.questions {
        if question == query {
            score += SCORE_EXACT;
        } else if question.contains(query) {
            score += SCORE_SUBSTRING;
        } else {
            // Each qualifying query word counts once per question entry,
            // so multiple question variants can stack increments.
            let question_words: Vec<&str> = question.split_whitespace().collect();
            for word in words {
                if word.chars().count() > MIN_WORD_LEN
                    && question_words
                        .iter()
                        .any(|qw| qw.contains(word) || word.contains(qw))
                {
                    score += SCORE_WORD;
                }
            }
        }
    }

    score
}
