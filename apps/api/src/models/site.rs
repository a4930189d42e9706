use serde::{Deserialize, Serialize};

/// The three-file output of a generation run. Created once per request,
/// fully replaced on regeneration, held client-side only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedSite {
    pub markup: String,
    pub stylesheet: String,
    pub script: String,
}

/// Which path produced the site — reported to the client for transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteOrigin {
    /// Extracted from a live model response.
    Model,
    /// Synthesized by the built-in template generator.
    Fallback,
}
