// Resume ingestion: multipart upload -> PDF text -> normalized requirements -> store.
// PDF parsing is CPU-bound and runs inside tokio::task::spawn_blocking.

pub mod extract;
pub mod handlers;
pub mod requirements;
pub mod upload;

pub use extract::{PdfTextExtractor, TextExtractor};
