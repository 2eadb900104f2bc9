//! PDF text extraction behind a trait, so handlers can be exercised without
//! real documents.

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppError;

pub const MIME_PDF: &str = "application/pdf";

#[async_trait]
pub trait TextExtractor: Send + Sync {
    /// Returns the text of each page in document order.
    async fn extract_pages(&self, data: Bytes) -> Result<Vec<String>, AppError>;
}

/// `pdf-extract` backed extractor. Parsing runs on the blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract_pages(&self, data: Bytes) -> Result<Vec<String>, AppError> {
        tokio::task::spawn_blocking(move || {
            pdf_extract::extract_text_from_mem_by_pages(&data).map_err(|e| e.to_string())
        })
        .await
        .map_err(|e| {
            // pdf-extract panics on some malformed documents
            if e.is_panic() {
                AppError::Upstream("PDF extraction failed: malformed document".to_string())
            } else {
                AppError::Internal(e.into())
            }
        })?
        .map_err(|e| AppError::Upstream(format!("PDF extraction failed: {e}")))
    }
}

/// Joins the pages that produced text, one newline between pages.
/// Whitespace-only pages count as empty and are dropped, so a document with
/// no visible text yields `""` and is refused at match time.
pub fn join_pages(pages: Vec<String>) -> String {
    pages
        .into_iter()
        .filter(|page| !page.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// True when a part's declared content type is PDF, ignoring parameters.
pub fn is_pdf_content_type(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|ct| ct.split(';').next())
        .is_some_and(|essence| essence.trim().eq_ignore_ascii_case(MIME_PDF))
}
