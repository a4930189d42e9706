pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::generation::handlers as generation_handlers;
use crate::packager::handlers as packager_handlers;
use crate::resume::handlers as resume_handlers;
use crate::state::AppState;

/// Request body cap. Kept above the upload rejection threshold so oversized
/// résumés reach the handler and get its descriptive error instead of a
/// framework 413.
const MAX_REQUEST_BYTES: usize = 32 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/resume/parse",
            post(resume_handlers::handle_parse_resume),
        )
        .route(
            "/api/v1/portfolio/prompt",
            post(generation_handlers::handle_build_prompt),
        )
        .route(
            "/api/v1/portfolio/generate",
            post(generation_handlers::handle_generate),
        )
        .route(
            "/api/v1/portfolio/archive",
            post(packager_handlers::handle_archive),
        )
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::Config;
    use crate::generation::generator::LlmSiteGenerator;

    fn test_state() -> AppState {
        AppState {
            generator: Arc::new(LlmSiteGenerator::new(None)),
            config: Config {
                anthropic_api_key: None,
                port: 8080,
                rust_log: "info".to_string(),
            },
        }
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(uri: &str, file_name: &str, data: &[u8]) -> Request<Body> {
        let boundary = "test-boundary";
        let mut body = Vec::new();
        body.extend_from_slice(
            format!(
                "--{boundary}\r\nContent-Disposition: form-data; name=\"file\"; \
                 filename=\"{file_name}\"\r\nContent-Type: application/pdf\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

        Request::builder()
            .method("POST")
            .uri(uri)
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={boundary}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = build_router(test_state())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "folio-api");
        assert_eq!(body["generation"], "template");
    }

    #[tokio::test]
    async fn test_generate_without_api_key_returns_fallback_site() {
        let request = json_request(
            "/api/v1/portfolio/generate",
            json!({
                "profile": {
                    "name": "Ada",
                    "bio": "Engineer",
                    "style": "dark",
                    "colors": ["#111111", "#222222", "#333333"]
                }
            }),
        );
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["origin"], "fallback");
        assert!(body["site"]["markup"].as_str().unwrap().contains("Ada"));
        assert!(body["site"]["stylesheet"]
            .as_str()
            .unwrap()
            .contains("#121212"));
        assert!(!body["site"]["script"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generate_rejects_missing_name() {
        let request = json_request(
            "/api/v1/portfolio/generate",
            json!({ "profile": { "name": "  ", "bio": "Engineer" } }),
        );
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_generate_rejects_missing_bio() {
        let request = json_request(
            "/api/v1/portfolio/generate",
            json!({ "profile": { "name": "Ada", "bio": "" } }),
        );
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_prompt_endpoint_returns_built_prompt() {
        let request = json_request(
            "/api/v1/portfolio/prompt",
            json!({
                "profile": {
                    "name": "Ada",
                    "bio": "Engineer",
                    "style": "neon",
                    "colors": ["#ff00ff"]
                }
            }),
        );
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        let prompt = body["prompt"].as_str().unwrap();
        assert!(prompt.contains("STYLE: neon"));
        assert!(prompt.contains("PRIMARY COLOR: #ff00ff"));
    }

    #[tokio::test]
    async fn test_upload_rejects_non_pdf_filename_before_parsing() {
        let request = multipart_request("/api/v1/resume/parse", "resume.docx", b"irrelevant");
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("must be a PDF"));
    }

    #[tokio::test]
    async fn test_upload_rejects_oversized_file_before_parsing() {
        let oversized = vec![b'a'; 15 * 1024 * 1024];
        let request = multipart_request("/api/v1/resume/parse", "resume.pdf", &oversized);
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert!(body["error"]["message"]
            .as_str()
            .unwrap()
            .contains("too large"));
    }

    #[tokio::test]
    async fn test_upload_rejects_unparseable_pdf() {
        let request = multipart_request("/api/v1/resume/parse", "resume.pdf", b"not a real pdf");
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "PDF_EXTRACTION_ERROR");
    }

    #[tokio::test]
    async fn test_archive_endpoint_returns_zip_attachment() {
        let request = json_request(
            "/api/v1/portfolio/archive",
            json!({
                "name": "Ada Lovelace",
                "site": {
                    "markup": "<main></main>",
                    "stylesheet": "body {}",
                    "script": "console.log(1);"
                }
            }),
        );
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/zip"
        );
        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(disposition.contains("ada-lovelace-portfolio.zip"));
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        // ZIP local file header magic
        assert_eq!(&bytes[..4], &b"PK\x03\x04"[..]);
    }
}
