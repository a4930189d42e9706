//! Code Block Extractor — pulls the markup, stylesheet, and script blocks
//! out of a raw model response.
//!
//! Two delimiting conventions are accepted, tried in priority order:
//! 1. fenced code blocks labeled by language (```html / ```css / ```js,
//!    with ```javascript accepted as an alternate script label)
//! 2. explicit tag pairs (<html>…</html>, <css>…</css>,
//!    <javascript>…</javascript>)
//!
//! First match wins per category. A category with no match yields a visible
//! placeholder so the user sees a broken-generation signal instead of an
//! empty page. Never fails.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::site::GeneratedSite;

pub const MISSING_MARKUP: &str = "<div class=\"error-message\">Error: no HTML block was found in \
the generated response. Try again with different options.</div>";
pub const MISSING_STYLESHEET: &str = "/* No CSS block was found in the generated response */";
pub const MISSING_SCRIPT: &str = "// No JavaScript block was found in the generated response";

// The \b after each fence label keeps ```js from matching inside ```json.
static MARKUP_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[r"(?is)```html\b\s*(.*?)```", r"(?is)<html>(.*?)</html>"])
});

static STYLESHEET_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[r"(?is)```css\b\s*(.*?)```", r"(?is)<css>(.*?)</css>"])
});

static SCRIPT_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    compile(&[
        r"(?is)```javascript\b\s*(.*?)```",
        r"(?is)```js\b\s*(.*?)```",
        r"(?is)<javascript>(.*?)</javascript>",
    ])
});

fn compile(patterns: &[&str]) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| Regex::new(p).expect("valid extraction pattern"))
        .collect()
}

/// Extracts the three code blocks from `response`, substituting a placeholder
/// for each category with no match.
pub fn extract_site(response: &str) -> GeneratedSite {
    GeneratedSite {
        markup: first_match(&MARKUP_PATTERNS, response)
            .unwrap_or_else(|| MISSING_MARKUP.to_string()),
        stylesheet: first_match(&STYLESHEET_PATTERNS, response)
            .unwrap_or_else(|| MISSING_STYLESHEET.to_string()),
        script: first_match(&SCRIPT_PATTERNS, response)
            .unwrap_or_else(|| MISSING_SCRIPT.to_string()),
    }
}

fn first_match(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern
            .captures(text)
            .and_then(|captures| captures.get(1))
            .map(|m| m.as_str().trim().to_string())
    })
}
