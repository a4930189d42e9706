//! Style catalog — per-style prompt guidance and stylesheet override
//! fragments, keyed by `StyleKind`.
//!
//! Overrides are a lookup table rather than a match so a style with no
//! special treatment falls through to the documented default: an empty
//! fragment, leaving only the base rules.

use crate::models::profile::{Palette, StyleKind};

/// Free-text design guidance injected into the generation prompt.
pub fn prompt_guidance(style: StyleKind) -> &'static str {
    match style {
        StyleKind::Minimal => {
            "Clean, minimalist design with ample white space, subtle animations, \
             and elegant typography. Focus on readability and content."
        }
        StyleKind::Modern => {
            "Contemporary design with balanced layout, smooth transitions, \
             and professional aesthetics."
        }
        StyleKind::Dark => {
            "Dark theme with high contrast elements. Use dark backgrounds \
             with vibrant accent colors."
        }
        StyleKind::Neon => {
            "Vibrant glowing effects with bright colors against dark backgrounds. \
             Include neon-like text effects and borders."
        }
        StyleKind::Retro => {
            "Vintage aesthetics with retro typography, patterns, and color schemes. \
             Consider pixel art elements or 80s/90s inspired design."
        }
        StyleKind::Neobrutalism => {
            "Bold, raw design with strong colors, thick borders and shadows. \
             Include slightly off-grid elements, chunky buttons, and high contrast."
        }
        StyleKind::Glassmorphism => {
            "Frosted glass effect with transparency and subtle borders. Include \
             blur effects, subtle gradients, and layered elements with transparency."
        }
        StyleKind::Cyberpunk => {
            "Futuristic style with neon accents and digital elements. Include \
             glitch effects, tech-inspired graphics, and bold typography."
        }
        StyleKind::Neumorphism => {
            "Soft UI with subtle shadows creating a semi-3D effect. Use soft, \
             extruded elements that appear to push out from the background."
        }
        StyleKind::Gradient => {
            "Smooth color transitions creating depth and movement. Use gradient \
             backgrounds, buttons, and cards that transition between the main colors."
        }
    }
}

/// Short style-specific requirement line for the prompt's instruction block.
pub fn prompt_requirements(style: StyleKind) -> &'static str {
    match style {
        StyleKind::Minimal => {
            "Prioritize whitespace, use subtle animations, keep elements clean and simple"
        }
        StyleKind::Modern => {
            "Use modern layout techniques, subtle shadows, and appropriate spacing"
        }
        StyleKind::Dark => {
            "Use dark backgrounds with high contrast text, add subtle glow effects \
             to important elements"
        }
        StyleKind::Neon => {
            "Implement neon-like glowing text effects, use bright colors against \
             dark backgrounds"
        }
        StyleKind::Retro => {
            "Include retro typography, vintage color schemes, and possibly \
             pixelated elements"
        }
        StyleKind::Neobrutalism => {
            "Use bold colors, thick borders, chunky elements, and strong shadows. \
             Elements should have a raw, unrefined look"
        }
        StyleKind::Glassmorphism => {
            "Create translucent, frosted glass effects with blur and transparency. \
             Layer elements for depth"
        }
        StyleKind::Cyberpunk => {
            "Add tech-inspired graphics, glitch effects, neon accents, and \
             futuristic elements"
        }
        StyleKind::Neumorphism => {
            "Create soft UI elements with subtle shadows that give a 3D extruded \
             effect. Use monochromatic color schemes"
        }
        StyleKind::Gradient => {
            "Incorporate smooth gradient transitions between main colors in \
             backgrounds, buttons, and cards"
        }
    }
}

type OverrideFn = fn(&Palette) -> String;

/// Styles with dedicated stylesheet fragments. Styles absent from this table
/// (minimal, modern, retro) get the base rules only.
const STYLE_OVERRIDES: &[(StyleKind, OverrideFn)] = &[
    (StyleKind::Dark, dark_overrides),
    (StyleKind::Neon, neon_overrides),
    (StyleKind::Neobrutalism, neobrutalism_overrides),
    (StyleKind::Glassmorphism, glassmorphism_overrides),
    (StyleKind::Cyberpunk, cyberpunk_overrides),
    (StyleKind::Neumorphism, neumorphism_overrides),
    (StyleKind::Gradient, gradient_overrides),
];

/// Returns the override fragment for `style`, or an empty string when the
/// style has no entry in the table.
pub fn stylesheet_overrides(style: StyleKind, palette: &Palette) -> String {
    STYLE_OVERRIDES
        .iter()
        .find(|(kind, _)| *kind == style)
        .map(|(_, render)| render(palette))
        .unwrap_or_default()
}

fn dark_overrides(_palette: &Palette) -> String {
    r#"
body {
  background-color: #121212;
  color: #f8f9fa;
}

.bg-light {
  background-color: #1e1e1e !important;
}

.card {
  background-color: #2a2a2a;
  color: #f8f9fa;
  border: none;
}"#
    .to_string()
}

fn neon_overrides(palette: &Palette) -> String {
    format!(
        r#"
body {{
  background-color: #0a0a1a;
  color: #ffffff;
}}

.neon-header {{
  box-shadow: 0 0 20px {primary}80;
}}

.section-divider {{
  box-shadow: 0 0 10px {primary};
}}

.nav-link:hover, .navbar-brand:hover {{
  text-shadow: 0 0 8px {primary};
}}

.skill-badge {{
  box-shadow: 0 0 8px {primary}80;
}}"#,
        primary = palette.primary
    )
}

fn neobrutalism_overrides(_palette: &Palette) -> String {
    r#"
.brutalist-header {
  box-shadow: 8px 8px 0 rgba(0, 0, 0, 0.9);
  border: 3px solid #000;
}

.card {
  border: 3px solid #000;
  box-shadow: 5px 5px 0 rgba(0, 0, 0, 0.9);
  border-radius: 0;
}

.btn {
  border: 3px solid #000;
  border-radius: 0;
  box-shadow: 3px 3px 0 rgba(0, 0, 0, 0.9);
  transform: rotate(-1deg);
}

.form-control {
  border: 3px solid #000;
  border-radius: 0;
}"#
    .to_string()
}

fn glassmorphism_overrides(palette: &Palette) -> String {
    format!(
        r#"
body {{
  background: linear-gradient(135deg, {primary}20, {secondary}20);
  background-attachment: fixed;
}}

.card, .navbar, section {{
  background-color: rgba(255, 255, 255, 0.15) !important;
  backdrop-filter: blur(10px);
  -webkit-backdrop-filter: blur(10px);
  border: 1px solid rgba(255, 255, 255, 0.2);
  border-radius: 12px;
}}

.btn {{
  background-color: rgba(255, 255, 255, 0.2);
  border: 1px solid rgba(255, 255, 255, 0.3);
  backdrop-filter: blur(5px);
}}"#,
        primary = palette.primary,
        secondary = palette.secondary
    )
}

fn cyberpunk_overrides(palette: &Palette) -> String {
    format!(
        r#"
body {{
  background-color: #0a0a1a;
  color: #ffffff;
  font-family: 'Courier New', monospace;
}}

h1, h2, h3 {{
  font-family: 'Courier New', monospace;
  text-transform: uppercase;
  letter-spacing: 2px;
}}

.section-divider {{
  height: 2px;
  background: linear-gradient(90deg, transparent, {primary}, transparent);
}}

.card {{
  border: 1px solid {primary};
  background-color: #0a0a1a;
}}

.btn {{
  background: {primary};
  color: #000;
  font-weight: bold;
  text-transform: uppercase;
  border: none;
}}

.navbar, footer {{
  background-color: #000 !important;
  border-bottom: 2px solid {primary};
}}"#,
        primary = palette.primary
    )
}

fn neumorphism_overrides(_palette: &Palette) -> String {
    r#"
body {
  background-color: #e0e5ec;
}

.card, .btn, .form-control {
  background-color: #e0e5ec;
  border: none;
  border-radius: 16px;
  box-shadow: 9px 9px 16px rgba(163, 177, 198, 0.6),
    -9px -9px 16px rgba(255, 255, 255, 0.5);
}

.btn:active {
  box-shadow: inset 4px 4px 8px rgba(163, 177, 198, 0.6),
    inset -4px -4px 8px rgba(255, 255, 255, 0.5);
}"#
    .to_string()
}

fn gradient_overrides(palette: &Palette) -> String {
    format!(
        r#"
body {{
  background: linear-gradient(160deg, {primary}, {secondary});
  background-attachment: fixed;
  color: #ffffff;
}}

.btn-primary {{
  background: linear-gradient(90deg, {primary}, {accent});
  border: none;
}}

.card {{
  background: linear-gradient(135deg, {secondary}22, {accent}22);
}}"#,
        primary = palette.primary,
        secondary = palette.secondary,
        accent = palette.accent
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette {
            primary: "#111111".to_string(),
            secondary: "#222222".to_string(),
            accent: "#333333".to_string(),
        }
    }

    #[test]
    fn test_dark_overrides_recolor_backgrounds() {
        let css = stylesheet_overrides(StyleKind::Dark, &palette());
        assert!(css.contains("background-color: #121212"));
    }

    #[test]
    fn test_neon_overrides_glow_with_primary_color() {
        let css = stylesheet_overrides(StyleKind::Neon, &palette());
        assert!(css.contains("box-shadow: 0 0 20px #11111180"));
        assert!(css.contains("text-shadow: 0 0 8px #111111"));
    }

    #[test]
    fn test_neobrutalism_overrides_add_heavy_borders() {
        let css = stylesheet_overrides(StyleKind::Neobrutalism, &palette());
        assert!(css.contains("border: 3px solid #000"));
        assert!(css.contains("box-shadow: 5px 5px 0"));
    }

    #[test]
    fn test_cyberpunk_overrides_key_borders_to_primary() {
        let css = stylesheet_overrides(StyleKind::Cyberpunk, &palette());
        assert!(css.contains("border: 1px solid #111111"));
    }

    #[test]
    fn test_styles_without_entry_get_empty_fragment() {
        for style in [StyleKind::Minimal, StyleKind::Modern, StyleKind::Retro] {
            assert!(stylesheet_overrides(style, &palette()).is_empty());
        }
    }

    #[test]
    fn test_every_style_has_prompt_guidance() {
        for style in [
            StyleKind::Minimal,
            StyleKind::Modern,
            StyleKind::Dark,
            StyleKind::Neon,
            StyleKind::Retro,
            StyleKind::Neobrutalism,
            StyleKind::Glassmorphism,
            StyleKind::Cyberpunk,
            StyleKind::Neumorphism,
            StyleKind::Gradient,
        ] {
            assert!(!prompt_guidance(style).is_empty());
            assert!(!prompt_requirements(style).is_empty());
        }
    }
}
