//! Language analysis: a pluggable pipeline that turns resume text into ranked
//! keyphrases, noun chunks and named entities.
//!
//! Default: `HeuristicPipeline` (pure-Rust, rule-based tagging + TextRank).
//! `AppState` holds an `Arc<dyn LanguagePipeline>` so a model-backed pipeline
//! can be swapped in without touching the handlers.
//!
//! Analysis is CPU-bound and runs inside `tokio::task::spawn_blocking`.

pub mod chunks;
pub mod entities;
pub mod lexicon;
pub mod tagger;
pub mod textrank;
pub mod tokenize;

use std::collections::BTreeSet;

use async_trait::async_trait;
use tracing::debug;

use crate::errors::AppError;
use tagger::Tagged;

/// A tagged sentence borrowed from the analyzed text.
#[derive(Debug, Clone)]
pub struct Sentence<'a> {
    pub text: &'a str,
    pub tokens: Vec<Tagged<'a>>,
}

/// Token range `[start, end)` within one sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub sentence: usize,
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Source text covered by the span, including inner whitespace.
    pub fn text<'a>(&self, sentences: &[Sentence<'a>]) -> &'a str {
        let sentence = &sentences[self.sentence];
        let first = &sentence.tokens[self.start].token;
        let last = &sentence.tokens[self.end - 1].token;
        let text: &'a str = sentence.text;
        &text[first.start..last.end]
    }
}

/// Everything the matcher needs from a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentAnalysis {
    /// Keyphrases, most important first.
    pub ranked_phrases: Vec<String>,
    /// Lower-cased noun chunk texts.
    pub noun_chunks: BTreeSet<String>,
    /// Lower-cased named entity texts.
    pub entities: BTreeSet<String>,
}

#[async_trait]
pub trait LanguagePipeline: Send + Sync {
    async fn analyze(&self, text: &str) -> Result<DocumentAnalysis, AppError>;
}

/// Rule-based pipeline: Unicode segmentation, lexicon tagging, chunking,
/// entity spotting and TextRank.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPipeline;

#[async_trait]
impl LanguagePipeline for HeuristicPipeline {
    async fn analyze(&self, text: &str) -> Result<DocumentAnalysis, AppError> {
        let text = text.to_owned();
        tokio::task::spawn_blocking(move || analyze_text(&text))
            .await
            .map_err(|e| {
                if e.is_panic() {
                    AppError::Upstream("Language analysis panicked".to_string())
                } else {
                    AppError::Internal(e.into())
                }
            })
    }
}

/// Segments and tags text into sentences.
pub fn parse(text: &str) -> Vec<Sentence<'_>> {
    tokenize::sentences(text)
        .into_iter()
        .map(|s| Sentence {
            text: s,
            tokens: tagger::tag(tokenize::tokenize(s)),
        })
        .filter(|s| !s.tokens.is_empty())
        .collect()
}

pub fn analyze_text(text: &str) -> DocumentAnalysis {
    let sentences = parse(text);
    let chunk_spans = chunks::noun_chunks(&sentences);
    let entity_spans = entities::entities(&sentences);

    let lowered = |spans: &[Span]| -> BTreeSet<String> {
        spans
            .iter()
            .map(|s| s.text(&sentences).to_lowercase())
            .collect()
    };
    let noun_chunks = lowered(&chunk_spans);
    let entities = lowered(&entity_spans);

    let mut candidates = chunk_spans;
    candidates.extend(entity_spans);
    let ranked_phrases: Vec<String> = textrank::rank_phrases(&sentences, &candidates)
        .into_iter()
        .map(|p| p.text)
        .collect();

    debug!(
        sentences = sentences.len(),
        noun_chunks = noun_chunks.len(),
        entities = entities.len(),
        phrases = ranked_phrases.len(),
        "Document analyzed"
    );

    DocumentAnalysis {
        ranked_phrases,
        noun_chunks,
        entities,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESUME: &str = "Jane Doe\n\
        Senior Data Engineer\n\
        Experience\n\
        Acme Corp, Jan 2019 - Present\n\
        Built scalable data pipelines with Python and SQL.\n\
        Migrated the reporting stack to AWS.\n\
        Skills\n\
        Python, SQL, Docker, Kubernetes";

    #[test]
    fn test_resume_keyword_sets() {
        let analysis = analyze_text(RESUME);

        for expected in ["python", "sql", "docker", "kubernetes", "scalable data pipelines"] {
            assert!(
                analysis.noun_chunks.contains(expected),
                "missing noun chunk {expected}: {:?}",
                analysis.noun_chunks
            );
        }
        for expected in ["jane doe", "acme corp", "jan 2019", "sql", "aws", "kubernetes"] {
            assert!(
                analysis.entities.contains(expected),
                "missing entity {expected}: {:?}",
                analysis.entities
            );
        }
        assert!(!analysis.entities.contains("experience"));
        assert!(!analysis.entities.contains("skills"));
    }

    #[test]
    fn test_keyword_sets_are_lowercase() {
        let analysis = analyze_text(RESUME);
        for kw in analysis.noun_chunks.iter().chain(&analysis.entities) {
            assert_eq!(kw, &kw.to_lowercase());
        }
    }

    #[test]
    fn test_ranked_phrases_are_distinct() {
        let analysis = analyze_text(RESUME);
        assert!(!analysis.ranked_phrases.is_empty());
        let distinct: BTreeSet<String> = analysis
            .ranked_phrases
            .iter()
            .map(|p| p.to_lowercase())
            .collect();
        assert_eq!(distinct.len(), analysis.ranked_phrases.len());
    }

    #[test]
    fn test_blank_text_yields_empty_analysis() {
        assert_eq!(analyze_text("   \n\t"), DocumentAnalysis::default());
    }

    #[tokio::test]
    async fn test_pipeline_runs_on_blocking_pool() {
        let pipeline = HeuristicPipeline;
        let analysis = pipeline.analyze("Shipped Rust services on Kubernetes.").await.unwrap();
        assert!(analysis.entities.contains("kubernetes"));
    }
}
