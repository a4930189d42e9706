use axum::{extract::Multipart, Json};
use bytes::Bytes;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::profile::ResumeData;
use crate::resume::parser::parse_resume;

/// Uploads above this size are rejected before any parse attempt.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Serialize)]
pub struct ResumeParseResponse {
    pub resume: ResumeData,
}

/// POST /api/v1/resume/parse
///
/// Accepts a single PDF in the multipart field `file`. The filename suffix,
/// size, and emptiness checks run before the PDF is handed to the extractor.
pub async fn handle_parse_resume(
    mut multipart: Multipart,
) -> Result<Json<ResumeParseResponse>, AppError> {
    let mut upload: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed upload: {e}")))?
    {
        if field.name() == Some("file") {
            let file_name = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some((file_name, data));
            break;
        }
    }

    let (file_name, data) =
        upload.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    if !file_name.to_ascii_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation("The file must be a PDF".to_string()));
    }
    if data.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::Validation(
            "The file is too large. The maximum size is 10MB".to_string(),
        ));
    }
    if data.is_empty() {
        return Err(AppError::Validation("The uploaded PDF is empty".to_string()));
    }

    // pdf-extract is synchronous and CPU-bound; keep it off the runtime threads.
    let text = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&data))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("PDF extraction task failed: {e}")))?
        .map_err(|e| AppError::PdfExtraction(format!("Could not parse the PDF: {e}")))?;

    if text.trim().is_empty() {
        return Err(AppError::PdfExtraction(
            "No text could be extracted from the PDF. It may be protected or contain only images."
                .to_string(),
        ));
    }

    let resume = parse_resume(&text);
    info!(
        "Parsed résumé '{}': {} experience, {} education, {} skill entries",
        file_name,
        resume.experience.len(),
        resume.education.len(),
        resume.skills.len()
    );

    Ok(Json(ResumeParseResponse { resume }))
}
