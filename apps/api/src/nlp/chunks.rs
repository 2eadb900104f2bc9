//! Noun chunk detection over tagged sentences.

use super::tagger::PosTag;
use super::{Sentence, Span};

/// Finds base noun phrases: an optional determiner, any run of adjectives,
/// nouns and numbers, closed by a noun or proper noun head.
pub fn noun_chunks(sentences: &[Sentence<'_>]) -> Vec<Span> {
    let mut spans = Vec::new();

    for (sentence_idx, sentence) in sentences.iter().enumerate() {
        let tags: Vec<PosTag> = sentence.tokens.iter().map(|t| t.tag).collect();
        let mut i = 0;
        while i < tags.len() {
            let body = if tags[i] == PosTag::Det { i + 1 } else { i };
            let mut end = body;
            while end < tags.len() && tags[end].is_nominal_modifier() {
                end += 1;
            }

            if let Some(head) = (body..end).rev().find(|&k| tags[k].is_noun()) {
                spans.push(Span {
                    sentence: sentence_idx,
                    start: i,
                    end: head + 1,
                });
            }

            i = end.max(i + 1);
        }
    }

    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::parse;

    fn chunk_texts(text: &str) -> Vec<String> {
        let sentences = parse(text);
        noun_chunks(&sentences)
            .iter()
            .map(|s| s.text(&sentences).to_string())
            .collect()
    }

    #[test]
    fn test_determiner_and_modifiers_join_head() {
        assert_eq!(
            chunk_texts("Built a scalable data platform for the analytics team."),
            vec!["a scalable data platform", "the analytics team"]
        );
    }

    #[test]
    fn test_skill_list_yields_one_chunk_per_item() {
        assert_eq!(
            chunk_texts("Python, SQL, Docker"),
            vec!["Python", "SQL", "Docker"]
        );
    }

    #[test]
    fn test_trailing_adjective_is_not_a_chunk() {
        assert_eq!(chunk_texts("the team was effective"), vec!["the team"]);
    }

    #[test]
    fn test_lone_determiner_is_skipped() {
        assert!(chunk_texts("all of it").is_empty());
    }
}
