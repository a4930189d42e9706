//! Site generation — orchestrates the prompt → LLM → extraction pipeline.
//!
//! Flow: build_prompt → LlmClient::call → extract_site. Any failure along
//! the way (missing credential, transport error, non-success status,
//! response without a text segment) diverts to the fallback template
//! generator. Callers always receive a complete site; nothing on this path
//! can error.

use async_trait::async_trait;
use tracing::{info, warn};

use crate::generation::extractor::extract_site;
use crate::generation::fallback;
use crate::generation::prompts::PORTFOLIO_SYSTEM;
use crate::llm_client::LlmClient;
use crate::models::profile::UserProfile;
use crate::models::site::{GeneratedSite, SiteOrigin};

/// Result of a generation run: the site plus which path produced it.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    pub site: GeneratedSite,
    pub origin: SiteOrigin,
}

/// The generation backend seam. Carried in `AppState` as
/// `Arc<dyn SiteGenerator>` so tests and future backends can swap in
/// without touching handlers.
#[async_trait]
pub trait SiteGenerator: Send + Sync {
    /// Produces a complete site for `profile`. `prompt` is the already-built
    /// (possibly user-edited) generation prompt. Infallible by contract.
    async fn generate(&self, profile: &UserProfile, prompt: &str) -> GenerationOutcome;
}

/// Default backend: one LLM attempt, fallback on anything else.
///
/// The API key is injected at construction — there is no global key lookup.
/// A `None` key is a supported configuration, not an error.
pub struct LlmSiteGenerator {
    llm: Option<LlmClient>,
}

impl LlmSiteGenerator {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            llm: api_key.map(LlmClient::new),
        }
    }
}

#[async_trait]
impl SiteGenerator for LlmSiteGenerator {
    async fn generate(&self, profile: &UserProfile, prompt: &str) -> GenerationOutcome {
        let llm = match &self.llm {
            Some(llm) => llm,
            None => {
                info!("No API key configured; using the built-in template generator");
                return fallback_outcome(profile);
            }
        };

        match llm.call(prompt, PORTFOLIO_SYSTEM).await {
            Ok(response) => match response.text() {
                Some(text) => {
                    info!("Generation response received ({} chars)", text.len());
                    GenerationOutcome {
                        site: extract_site(text),
                        origin: SiteOrigin::Model,
                    }
                }
                None => {
                    warn!("Generation response carried no text segment; falling back");
                    fallback_outcome(profile)
                }
            },
            Err(e) => {
                warn!("Generation call failed ({e}); falling back");
                fallback_outcome(profile)
            }
        }
    }
}

fn fallback_outcome(profile: &UserProfile) -> GenerationOutcome {
    GenerationOutcome {
        site: fallback::render_site(profile),
        origin: SiteOrigin::Fallback,
    }
}
