use axum::{
    http::{header, HeaderMap, HeaderValue},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::models::site::GeneratedSite;
use crate::packager::{archive_file_name, build_archive};

#[derive(Debug, Deserialize)]
pub struct ArchiveRequest {
    pub site: GeneratedSite,
    /// Display name the archive filename is derived from.
    pub name: String,
}

/// POST /api/v1/portfolio/archive
///
/// Returns the ZIP bytes as an attachment. Any archive-creation failure
/// aborts the request — no partial download is ever sent.
pub async fn handle_archive(Json(req): Json<ArchiveRequest>) -> Result<Response, AppError> {
    let bytes =
        build_archive(&req.site, &req.name).map_err(|e| AppError::Archive(e.to_string()))?;

    let file_name = archive_file_name(&req.name);
    info!("Built archive {} ({} bytes)", file_name, bytes.len());

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/zip"),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!("attachment; filename=\"{file_name}\""))
            .map_err(|e| AppError::Archive(format!("invalid archive filename: {e}")))?,
    );

    Ok((headers, bytes).into_response())
}
