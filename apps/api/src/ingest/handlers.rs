//! Axum route handler for resume ingestion.

use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::ingest::extract::join_pages;
use crate::ingest::requirements::normalize_requirements;
use crate::ingest::upload::parse_upload;
use crate::models::ResumeRecord;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct IngestResponse {
    pub message: String,
    pub resume_id: Uuid,
}

/// POST /extract-features
///
/// Extracts resume text from an uploaded PDF, normalizes the requirement list
/// and stores both as the latest resume record.
pub async fn handle_extract_features(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<IngestResponse>, AppError> {
    let upload = parse_upload(multipart).await?;
    let requirements = normalize_requirements(&upload.requirements)?;

    let pages = state.extractor.extract_pages(upload.data).await?;
    let page_count = pages.len();
    let text = join_pages(pages);

    let record = ResumeRecord {
        id: Uuid::new_v4(),
        filename: upload.filename,
        text,
        requirements,
        ingested_at: Utc::now(),
    };
    state.store.save_record(&record).await?;

    info!(
        resume_id = %record.id,
        filename = %record.filename,
        pages = page_count,
        requirements = record.requirements.len(),
        "Resume ingested"
    );

    Ok(Json(IngestResponse {
        message: "Resume processed successfully".to_string(),
        resume_id: record.id,
    }))
}
