use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;
use crate::ingest::extract::is_pdf_content_type;

/// Parsed form fields from the `/extract-features` multipart upload.
#[derive(Debug)]
pub struct ResumeUpload {
    pub filename: String,
    pub data: Bytes,
    pub requirements: String,
}

/// Reads the `file` and `requirements` parts. A `file` part that is not
/// declared as PDF is rejected before its body is read.
pub async fn parse_upload(mut multipart: Multipart) -> Result<ResumeUpload, AppError> {
    let mut file: Option<(String, Bytes)> = None;
    let mut requirements: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                if !is_pdf_content_type(field.content_type()) {
                    return Err(AppError::InvalidInput(
                        "Invalid file type. Only PDFs are accepted.".to_string(),
                    ));
                }
                let filename = field.file_name().unwrap_or_default().to_string();
                let data = field.bytes().await?;
                file = Some((filename, data));
            }
            "requirements" => {
                requirements = Some(field.text().await?);
            }
            _ => {
                // Ignore unknown fields
                let _ = field.bytes().await?;
            }
        }
    }

    let (filename, data) =
        file.ok_or_else(|| AppError::InvalidInput("Missing 'file' form field".to_string()))?;
    let requirements = requirements
        .ok_or_else(|| AppError::InvalidInput("Missing 'requirements' form field".to_string()))?;

    Ok(ResumeUpload {
        filename,
        data,
        requirements,
    })
}
