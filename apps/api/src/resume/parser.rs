//! Résumé text parser — recovers structured sections from the plain text
//! extracted out of an uploaded PDF.
//!
//! Heuristic by design: résumés have no schema. Lines are bucketed by the
//! most recent section heading; anything before the first heading is
//! ignored except the first non-empty line, which is taken as the name.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::profile::ResumeData;

const EXPERIENCE_HEADINGS: &[&str] = &[
    "experience",
    "work experience",
    "professional experience",
    "employment",
    "work history",
];

const EDUCATION_HEADINGS: &[&str] = &["education", "academic background", "studies"];

const SKILLS_HEADINGS: &[&str] = &[
    "skills",
    "technical skills",
    "technologies",
    "core competencies",
];

/// Headings longer than this are treated as content, not section markers.
const MAX_HEADING_LEN: usize = 40;

static SKILL_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;|\u{2022}]").expect("valid separator pattern"));

#[derive(Clone, Copy, PartialEq)]
enum Section {
    Preamble,
    Experience,
    Education,
    Skills,
}

pub fn parse_resume(text: &str) -> ResumeData {
    let mut name = String::new();
    let mut experience = Vec::new();
    let mut education = Vec::new();
    let mut skills: Vec<String> = Vec::new();
    let mut section = Section::Preamble;

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(next) = heading_for(line) {
            section = next;
            continue;
        }

        match section {
            Section::Preamble => {
                if name.is_empty() {
                    name = line.to_string();
                }
            }
            Section::Experience => experience.push(line.to_string()),
            Section::Education => education.push(line.to_string()),
            Section::Skills => {
                for token in SKILL_SEPARATORS.split(line) {
                    let skill = token.trim().trim_start_matches('-').trim();
                    if !skill.is_empty() && !skills.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
                        skills.push(skill.to_string());
                    }
                }
            }
        }
    }

    ResumeData {
        name,
        experience,
        education,
        skills,
        raw_text: text.to_string(),
    }
}

fn heading_for(line: &str) -> Option<Section> {
    if line.len() > MAX_HEADING_LEN {
        return None;
    }
    let normalized = line.trim_end_matches(':').trim().to_ascii_lowercase();

    if EXPERIENCE_HEADINGS.contains(&normalized.as_str()) {
        Some(Section::Experience)
    } else if EDUCATION_HEADINGS.contains(&normalized.as_str()) {
        Some(Section::Education)
    } else if SKILLS_HEADINGS.contains(&normalized.as_str()) {
        Some(Section::Skills)
    } else {
        None
    }
}
