//! Prompt Builder — assembles the generation prompt from a `UserProfile`.
//!
//! Pure function of its input: identical profiles produce identical prompts.
//! Missing optional sections render a literal placeholder instead of being
//! omitted, so downstream consumers can rely on every section being present.

use crate::generation::prompts::PORTFOLIO_PROMPT_TEMPLATE;
use crate::generation::style;
use crate::models::profile::UserProfile;

/// Placeholder rendered for every missing optional section.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Builds the full generation prompt by filling the template.
pub fn build_prompt(profile: &UserProfile) -> String {
    let palette = profile.palette();

    let projects = if profile.projects.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        profile
            .projects
            .iter()
            .map(|p| format!("- {}: {}", p.title, p.description))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let skills = profile
        .resume
        .as_ref()
        .filter(|r| !r.skills.is_empty())
        .map(|r| r.skills.join(", "))
        .unwrap_or_else(|| NOT_SPECIFIED.to_string());

    let education = list_section(profile.resume.as_ref().map(|r| r.education.as_slice()));
    let experience = list_section(profile.resume.as_ref().map(|r| r.experience.as_slice()));

    PORTFOLIO_PROMPT_TEMPLATE
        .replace("{style_details}", style::prompt_guidance(profile.style))
        .replace("{style_requirements}", style::prompt_requirements(profile.style))
        .replace("{style}", profile.style.as_str())
        .replace("{primary}", &palette.primary)
        .replace("{secondary}", &palette.secondary)
        .replace("{accent}", &palette.accent)
        .replace("{name}", or_placeholder(&profile.name))
        .replace("{bio}", or_placeholder(&profile.bio))
        .replace("{projects}", &projects)
        .replace("{skills}", &skills)
        .replace("{education}", &education)
        .replace("{experience}", &experience)
}

fn or_placeholder(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        NOT_SPECIFIED
    } else {
        trimmed
    }
}

fn list_section(items: Option<&[String]>) -> String {
    match items {
        Some(items) if !items.is_empty() => items.join("\n"),
        _ => NOT_SPECIFIED.to_string(),
    }
}
