// All LLM prompt constants for portfolio generation.

/// System prompt for site generation — pins the model to the exact requested
/// colors, style, and a full-width layout.
pub const PORTFOLIO_SYSTEM: &str = "You are an expert web developer specializing in portfolio websites. \
Your task is to create a responsive, full-width portfolio website that EXACTLY matches the style \
and colors specified by the user. \
You MUST use the exact colors provided in the PRIMARY COLOR, SECONDARY COLOR, and ACCENT COLOR fields. \
The style must match the STYLE specified. Use a full-width layout. \
Return complete HTML, CSS, and JS code blocks.";

/// Portfolio generation prompt template.
/// Replace: {name}, {style}, {style_details}, {primary}, {secondary},
///          {accent}, {bio}, {projects}, {skills}, {education},
///          {experience}, {style_requirements}
pub const PORTFOLIO_PROMPT_TEMPLATE: &str = r#"Create a professional portfolio website in English for {name}.

STYLE: {style}
STYLE DETAILS: {style_details}

PRIMARY COLOR: {primary}
SECONDARY COLOR: {secondary}
ACCENT COLOR: {accent}

NAME: {name}

BIO:
{bio}

PROJECTS:
{projects}

SKILLS: {skills}

EDUCATION:
{education}

EXPERIENCE:
{experience}

IMPORTANT INSTRUCTIONS:
1. Create the portfolio entirely in ENGLISH
2. Use responsive, professional, and modern design with Bootstrap 5 (NO Tailwind)
3. Create a full-width layout using Bootstrap containers properly
4. Include a responsive navigation with appropriate sections
5. Use the "{style}" style consistently throughout the design
6. Apply the specified color palette effectively
7. Make sure all content sections are properly displayed and formatted
8. Use semantic HTML5 elements and ensure the site is accessible
9. Include appropriate animations or transitions based on the style
10. Respond with exactly three separate fenced code blocks labeled html, css, and js

Special requirements for the {style} style:
- {style_requirements}
"#;
