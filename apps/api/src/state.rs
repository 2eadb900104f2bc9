use std::sync::Arc;

use crate::config::Config;
use crate::ingest::TextExtractor;
use crate::nlp::LanguagePipeline;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<ResumeStore>,
    /// Pluggable document extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Pluggable language pipeline. Default: HeuristicPipeline.
    pub pipeline: Arc<dyn LanguagePipeline>,
}
