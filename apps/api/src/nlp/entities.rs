//! Named entity spotting: organizations, technologies, products and dates.

use std::sync::LazyLock;

use regex::Regex;

use super::lexicon::{COMMON_CAPITALIZED, ENTITY_CONNECTORS, MONTHS, ORG_SUFFIXES};
use super::tagger::{PosTag, Tagged};
use super::{Sentence, Span};

static YEAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(19[5-9]\d|20\d\d)$").expect("year regex is valid")
});

/// Finds entity spans. Runs of proper nouns may be linked by connectors
/// (`Bank of America`, `AT & T`); a month followed by a year, or a bare year,
/// is a date.
pub fn entities(sentences: &[Sentence<'_>]) -> Vec<Span> {
    let mut spans = Vec::new();

    for (sentence_idx, sentence) in sentences.iter().enumerate() {
        let tokens = &sentence.tokens;
        let mut i = 0;
        while i < tokens.len() {
            if let Some(end) = date_at(tokens, i) {
                spans.push(Span {
                    sentence: sentence_idx,
                    start: i,
                    end,
                });
                i = end;
                continue;
            }

            if !is_entity_token(&tokens[i]) {
                i += 1;
                continue;
            }

            let start = i;
            let mut end = i + 1;
            loop {
                if end < tokens.len() && is_entity_token(&tokens[end]) {
                    end += 1;
                } else if end + 1 < tokens.len()
                    && ENTITY_CONNECTORS.contains(tokens[end].token.lower.as_str())
                    && is_entity_token(&tokens[end + 1])
                {
                    end += 2;
                } else {
                    break;
                }
            }

            let run = &tokens[start..end];
            let lone_org_suffix =
                run.len() == 1 && ORG_SUFFIXES.contains(run[0].token.lower.as_str());
            if !lone_org_suffix {
                spans.push(Span {
                    sentence: sentence_idx,
                    start,
                    end,
                });
            }
            i = end;
        }
    }

    spans
}

fn is_entity_token(tagged: &Tagged<'_>) -> bool {
    tagged.tag == PosTag::Propn && !COMMON_CAPITALIZED.contains(tagged.token.lower.as_str())
}

/// Returns the end of a date span starting at `i`, if any.
fn date_at(tokens: &[Tagged<'_>], i: usize) -> Option<usize> {
    let token = &tokens[i].token;
    let starts_upper = token.text.chars().next().is_some_and(char::is_uppercase);
    let month = starts_upper && MONTHS.contains(token.lower.trim_end_matches('.'));

    if month {
        let mut end = i + 1;
        if tokens.get(end).is_some_and(|t| t.token.text == ".") {
            end += 1;
        }
        if tokens.get(end).is_some_and(|t| YEAR.is_match(t.token.text)) {
            return Some(end + 1);
        }
        return None;
    }

    YEAR.is_match(token.text).then_some(i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::parse;

    fn entity_texts(text: &str) -> Vec<String> {
        let sentences = parse(text);
        entities(&sentences)
            .iter()
            .map(|s| s.text(&sentences).to_string())
            .collect()
    }

    #[test]
    fn test_multiword_org_with_connector() {
        assert_eq!(
            entity_texts("Interned at the Bank of America in 2019."),
            vec!["Bank of America", "2019"]
        );
    }

    #[test]
    fn test_technologies_in_skill_row() {
        assert_eq!(
            entity_texts("Tools: Docker, Kubernetes, AWS S3 and C++"),
            vec!["Docker", "Kubernetes", "AWS S3", "C++"]
        );
    }

    #[test]
    fn test_month_year_range() {
        assert_eq!(
            entity_texts("Software Engineer at Google, Jan 2020 - Mar 2023"),
            vec!["Software Engineer", "Google", "Jan 2020", "Mar 2023"]
        );
    }

    #[test]
    fn test_headings_and_common_words_are_not_entities() {
        assert!(entity_texts("Experience").is_empty());
        assert!(entity_texts("Developed dashboards for finance").is_empty());
    }

    #[test]
    fn test_may_without_year_is_not_a_date() {
        assert!(entity_texts("we may ship weekly").is_empty());
    }
}
