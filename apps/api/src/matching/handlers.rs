//! Axum route handler for the matching endpoint.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::matching::scoring::{score_match, MatchPolicy};
use crate::models::MatchResult;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct MatchQuery {
    /// Defaults to the most recently ingested resume.
    pub resume_id: Option<Uuid>,
}

/// GET /nlp-module
///
/// Runs language analysis over a stored resume, scores it against the stored
/// requirements, persists the result and returns it.
pub async fn handle_nlp_module(
    State(state): State<AppState>,
    query: Result<Query<MatchQuery>, QueryRejection>,
) -> Result<Json<MatchResult>, AppError> {
    let Query(query) = query.map_err(|e| AppError::InvalidInput(e.body_text()))?;

    let record = state.store.load_record(query.resume_id).await?;
    if record.text.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "No resume text found in data".to_string(),
        ));
    }

    let analysis = state.pipeline.analyze(&record.text).await?;

    let policy = MatchPolicy {
        suitability_threshold: state.config.suitability_threshold,
        max_ranked_phrases: state.config.max_ranked_phrases,
    };
    let result = score_match(record.id, &record.requirements, analysis, &policy);
    state.store.save_result(&result).await?;

    info!(
        resume_id = %record.id,
        match_percentage = result.match_percentage,
        suitable = result.suitable,
        "Resume matched"
    );

    Ok(Json(result))
}
