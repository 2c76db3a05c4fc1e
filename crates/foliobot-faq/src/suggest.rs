//! Quick-reply suggestions — the clickable chip strip under the input.

use crate::corpus::FaqCorpus;

/// How many corpus-derived chips to show at most.
const MAX_SUGGESTIONS: usize = 3;

/// The fixed chips shown while the input is empty.
pub fn default_replies(owner: &str) -> Vec<String> {
    vec![
        "Who are you?".to_string(),
        format!("Who is {owner}?"),
        "Show me projects".to_string(),
        "How to contact?".to_string(),
    ]
}

/// Chips for a non-empty input: the first three records where any
/// question contains the input as a substring. Chip label is the
/// record's first question, capitalized.
pub fn suggest(input: &str, corpus: &FaqCorpus) -> Vec<String> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return Vec::new();
    }

    corpus
        .records()
        .iter()
        .filter(|record| record.questions.iter().any(|q| q.contains(&input)))
        .take(MAX_SUGGESTIONS)
        .filter_map(|record| record.questions.first())
        .map(|q| capitalize(q))
        .collect()
}

/// Upper-case the first character.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> FaqCorpus {
        FaqCorpus::parse(
            "Q:projects|my work A:Portfolio.\n\
             Q:skills|what can you do A:Rust.\n\
             Q:project history|past work A:History.\n\
             Q:projections|estimates A:Numbers.",
        )
    }

    #[test]
    fn test_default_replies_mention_owner() {
        let replies = default_replies("Ada");
        assert_eq!(replies.len(), 4);
        assert!(replies.contains(&"Who is Ada?".to_string()));
    }

    #[test]
    fn test_suggest_filters_by_substring() {
        let chips = suggest("skill", &corpus());
        assert_eq!(chips, vec!["Skills"]);
    }

    #[test]
    fn test_suggest_caps_at_three() {
        // "project" hits three records ("projects", "project history",
        // "projections") — all three fit the cap, in corpus order.
        let chips = suggest("project", &corpus());
        assert_eq!(chips, vec!["Projects", "Project history", "Projections"]);
    }

    #[test]
    fn test_suggest_uses_first_question_capitalized() {
        // "past work" matches the third record; its chip is the record's
        // FIRST question, not the matching one.
        let chips = suggest("past work", &corpus());
        assert_eq!(chips, vec!["Project history"]);
    }

    #[test]
    fn test_suggest_empty_input_yields_nothing() {
        assert!(suggest("   ", &corpus()).is_empty());
    }

    #[test]
    fn test_suggest_no_match_yields_nothing() {
        assert!(suggest("weather", &corpus()).is_empty());
    }
}
