#![allow(dead_code)]

//! Profile data model — everything the client submits before generation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uuid::Uuid;

/// Default palette, applied position-by-position when the client omits colors.
pub const DEFAULT_COLORS: [&str; 3] = ["#3498db", "#2ecc71", "#f39c12"];

/// The fixed set of visual styles a portfolio can be generated in.
///
/// Unknown style names deserialize to `Modern` rather than failing the
/// request — the client select box is the source of these strings and older
/// clients may send values we no longer ship.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StyleKind {
    Minimal,
    #[default]
    Modern,
    Dark,
    Neon,
    Retro,
    Neobrutalism,
    Glassmorphism,
    Cyberpunk,
    Neumorphism,
    Gradient,
}

impl StyleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StyleKind::Minimal => "minimal",
            StyleKind::Modern => "modern",
            StyleKind::Dark => "dark",
            StyleKind::Neon => "neon",
            StyleKind::Retro => "retro",
            StyleKind::Neobrutalism => "neobrutalism",
            StyleKind::Glassmorphism => "glassmorphism",
            StyleKind::Cyberpunk => "cyberpunk",
            StyleKind::Neumorphism => "neumorphism",
            StyleKind::Gradient => "gradient",
        }
    }

    /// Case-insensitive lookup. Anything outside the fixed set maps to the
    /// default variant.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "minimal" => StyleKind::Minimal,
            "modern" => StyleKind::Modern,
            "dark" => StyleKind::Dark,
            "neon" => StyleKind::Neon,
            "retro" => StyleKind::Retro,
            "neobrutalism" => StyleKind::Neobrutalism,
            "glassmorphism" => StyleKind::Glassmorphism,
            "cyberpunk" => StyleKind::Cyberpunk,
            "neumorphism" => StyleKind::Neumorphism,
            "gradient" => StyleKind::Gradient,
            _ => StyleKind::default(),
        }
    }
}

impl Serialize for StyleKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StyleKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(StyleKind::from_name(&name))
    }
}

/// A single portfolio project. Created and removed freely by the user before
/// generation; immutable once packaged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub link: Option<String>,
}

impl Project {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            link: None,
        }
    }
}

/// Structured data recovered from an uploaded résumé PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResumeData {
    pub name: String,
    pub experience: Vec<String>,
    pub education: Vec<String>,
    pub skills: Vec<String>,
    pub raw_text: String,
}

/// Everything the client submits before generation. Owned by the UI session;
/// the server never stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub bio: String,
    /// Hero tagline, e.g. "Web Developer & Designer".
    #[serde(default)]
    pub profession: Option<String>,
    #[serde(default)]
    pub style: StyleKind,
    /// Raw color list as submitted. Use [`UserProfile::palette`] for the
    /// normalized primary/secondary/accent triple.
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub resume: Option<ResumeData>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// The normalized three-color palette every generation path works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

impl UserProfile {
    /// Normalizes `colors` to exactly three entries, filling missing or blank
    /// positions from [`DEFAULT_COLORS`].
    pub fn palette(&self) -> Palette {
        let pick = |i: usize| -> String {
            self.colors
                .get(i)
                .map(|c| c.trim())
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| DEFAULT_COLORS[i].to_string())
        };
        Palette {
            primary: pick(0),
            secondary: pick(1),
            accent: pick(2),
        }
    }
}
