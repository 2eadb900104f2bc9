//! Requirement match scoring: set intersection of requirement terms against
//! the keyword sets produced by language analysis.
//!
//! Algorithm:
//! 1. Requirements are lower-cased and collected into a set.
//! 2. matching_noun = noun_keywords ∩ requirements, matching_ner = ner_keywords ∩ requirements
//! 3. matched = |matching_noun ∪ matching_ner| (a term found by both counts once)
//! 4. percentage = floor(matched × 100 / |requirements|), or 0 with no requirements
//! 5. suitable = percentage ≥ threshold

use std::collections::BTreeSet;

use uuid::Uuid;

use crate::models::MatchResult;
use crate::nlp::DocumentAnalysis;

/// Tunables for turning an analysis into a verdict.
#[derive(Debug, Clone, Copy)]
pub struct MatchPolicy {
    pub suitability_threshold: u8,
    pub max_ranked_phrases: usize,
}

impl Default for MatchPolicy {
    fn default() -> Self {
        Self {
            suitability_threshold: 70,
            max_ranked_phrases: 20,
        }
    }
}

pub fn score_match(
    resume_id: Uuid,
    requirements: &[String],
    analysis: DocumentAnalysis,
    policy: &MatchPolicy,
) -> MatchResult {
    let requirements: BTreeSet<String> = requirements.iter().map(|r| r.to_lowercase()).collect();
    let noun_keywords = lowercase_set(analysis.noun_chunks);
    let ner_keywords = lowercase_set(analysis.entities);

    let matching_noun_keywords: BTreeSet<String> =
        noun_keywords.intersection(&requirements).cloned().collect();
    let matching_ner_keywords: BTreeSet<String> =
        ner_keywords.intersection(&requirements).cloned().collect();

    let matched = matching_noun_keywords.union(&matching_ner_keywords).count();
    let match_percentage = match_percentage(matched, requirements.len());

    let mut ranked_phrases = analysis.ranked_phrases;
    ranked_phrases.truncate(policy.max_ranked_phrases);

    MatchResult {
        resume_id,
        ranked_phrases,
        noun_keywords,
        ner_keywords,
        matching_noun_keywords,
        matching_ner_keywords,
        match_percentage,
        suitable: match_percentage >= policy.suitability_threshold,
    }
}

/// Integer percentage, floored and clamped to `[0, 100]`.
pub fn match_percentage(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    (matched.min(total) * 100 / total) as u8
}

fn lowercase_set(set: BTreeSet<String>) -> BTreeSet<String> {
    set.into_iter().map(|s| s.to_lowercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reqs(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn analysis(nouns: &[&str], entities: &[&str]) -> DocumentAnalysis {
        DocumentAnalysis {
            ranked_phrases: vec![],
            noun_chunks: set(nouns),
            entities: set(entities),
        }
    }

    #[test]
    fn test_half_of_requirements_split_across_nouns_and_entities() {
        let result = score_match(
            Uuid::nil(),
            &reqs(&["python", "sql", "go", "docker"]),
            analysis(&["python", "data pipelines"], &["sql", "acme corp"]),
            &MatchPolicy::default(),
        );

        assert_eq!(result.matching_noun_keywords, set(&["python"]));
        assert_eq!(result.matching_ner_keywords, set(&["sql"]));
        assert_eq!(result.match_percentage, 50);
        assert!(!result.suitable);
    }

    #[test]
    fn test_matches_from_nouns_and_entities_add_up() {
        let result = score_match(
            Uuid::nil(),
            &reqs(&["python", "sql"]),
            analysis(&["python"], &["sql"]),
            &MatchPolicy::default(),
        );

        // one term from each set covers both requirements
        assert_eq!(result.match_percentage, 100);
        assert!(result.suitable);
    }

    #[test]
    fn test_term_found_twice_counts_once() {
        let result = score_match(
            Uuid::nil(),
            &reqs(&["python", "sql", "docker"]),
            analysis(&["python", "sql"], &["python", "sql"]),
            &MatchPolicy::default(),
        );
        // 2 of 3, not 4 of 3
        assert_eq!(result.match_percentage, 66);
        assert!(!result.suitable);
    }

    #[test]
    fn test_no_requirements_scores_zero() {
        let result = score_match(
            Uuid::nil(),
            &[],
            analysis(&["python"], &["sql"]),
            &MatchPolicy::default(),
        );
        assert_eq!(result.match_percentage, 0);
        assert!(!result.suitable);
        assert!(result.matching_noun_keywords.is_empty());
    }

    #[test]
    fn test_comparison_is_case_insensitive() {
        let result = score_match(
            Uuid::nil(),
            &reqs(&["Kubernetes"]),
            analysis(&[], &["KUBERNETES"]),
            &MatchPolicy::default(),
        );
        assert_eq!(result.match_percentage, 100);
        assert!(result.suitable);
        assert!(result.ner_keywords.contains("kubernetes"));
    }

    #[test]
    fn test_duplicate_requirements_count_once() {
        let result = score_match(
            Uuid::nil(),
            &reqs(&["rust", "rust", "go"]),
            analysis(&["rust"], &[]),
            &MatchPolicy::default(),
        );
        assert_eq!(result.match_percentage, 50);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let policy = MatchPolicy::default();
        let seven_of_ten = reqs(&["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"]);
        let result = score_match(
            Uuid::nil(),
            &seven_of_ten,
            analysis(&["a", "b", "c", "d", "e", "f", "g"], &[]),
            &policy,
        );
        assert_eq!(result.match_percentage, 70);
        assert!(result.suitable);

        let stricter = MatchPolicy {
            suitability_threshold: 71,
            ..policy
        };
        let result = score_match(
            Uuid::nil(),
            &seven_of_ten,
            analysis(&["a", "b", "c", "d", "e", "f", "g"], &[]),
            &stricter,
        );
        assert!(!result.suitable);
    }

    #[test]
    fn test_ranked_phrases_are_capped() {
        let mut doc = analysis(&[], &[]);
        doc.ranked_phrases = (0..30).map(|i| format!("phrase {i}")).collect();

        let result = score_match(Uuid::nil(), &reqs(&["x"]), doc, &MatchPolicy::default());
        assert_eq!(result.ranked_phrases.len(), 20);
        assert_eq!(result.ranked_phrases[0], "phrase 0");
    }

    #[test]
    fn test_percentage_bounds_and_suitability_agree() {
        for total in 0..12usize {
            for matched in 0..=total + 2 {
                let pct = match_percentage(matched, total);
                assert!(pct <= 100);
                if total == 0 {
                    assert_eq!(pct, 0);
                }
            }
        }
        assert_eq!(match_percentage(1, 3), 33);
        assert_eq!(match_percentage(2, 3), 66);
        assert_eq!(match_percentage(3, 3), 100);
    }
}
