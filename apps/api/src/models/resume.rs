use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A resume as stored by the ingestion handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub id: Uuid,
    pub filename: String,
    pub text: String,
    /// Trimmed, lower-cased requirement terms in submission order.
    pub requirements: Vec<String>,
    pub ingested_at: DateTime<Utc>,
}

/// Output of the matching handler. Field names are part of the public JSON contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub resume_id: Uuid,
    pub ranked_phrases: Vec<String>,
    pub noun_keywords: BTreeSet<String>,
    pub ner_keywords: BTreeSet<String>,
    pub matching_noun_keywords: BTreeSet<String>,
    pub matching_ner_keywords: BTreeSet<String>,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
    pub suitable: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_result_uses_camel_case_percentage() {
        let result = MatchResult {
            resume_id: Uuid::nil(),
            ranked_phrases: vec!["data pipelines".to_string()],
            noun_keywords: BTreeSet::from(["sql".to_string(), "python".to_string()]),
            ner_keywords: BTreeSet::new(),
            matching_noun_keywords: BTreeSet::from(["python".to_string()]),
            matching_ner_keywords: BTreeSet::new(),
            match_percentage: 50,
            suitable: false,
        };

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["matchPercentage"], 50);
        assert!(json.get("match_percentage").is_none());
        // sets serialize as sorted arrays
        assert_eq!(json["noun_keywords"], serde_json::json!(["python", "sql"]));
    }
}
