use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::prompt_builder::build_prompt;
use crate::models::profile::UserProfile;
use crate::models::site::{GeneratedSite, SiteOrigin};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PromptRequest {
    pub profile: UserProfile,
}

#[derive(Debug, Serialize)]
pub struct PromptResponse {
    pub prompt: String,
}

/// POST /api/v1/portfolio/prompt
///
/// Returns the prompt the generation endpoint would use, so the client can
/// show it for editing before submission.
pub async fn handle_build_prompt(
    Json(req): Json<PromptRequest>,
) -> Result<Json<PromptResponse>, AppError> {
    Ok(Json(PromptResponse {
        prompt: build_prompt(&req.profile),
    }))
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub profile: UserProfile,
    /// User-edited prompt. When absent the prompt is rebuilt from the profile.
    #[serde(default)]
    pub prompt: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub site: GeneratedSite,
    pub origin: SiteOrigin,
}

/// POST /api/v1/portfolio/generate
///
/// Validates the required fields, then runs the generation pipeline. The
/// pipeline itself cannot fail — generation-path errors produce fallback
/// output, never an error response.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if req.profile.name.trim().is_empty() {
        return Err(AppError::Validation("name is required".to_string()));
    }
    if req.profile.bio.trim().is_empty() {
        return Err(AppError::Validation("bio is required".to_string()));
    }

    let prompt = match req.prompt.as_deref().map(str::trim) {
        Some(edited) if !edited.is_empty() => edited.to_string(),
        _ => build_prompt(&req.profile),
    };

    let outcome = state.generator.generate(&req.profile, &prompt).await;

    Ok(Json(GenerateResponse {
        site: outcome.site,
        origin: outcome.origin,
    }))
}
