//! Fallback Template Generator — synthesizes a complete three-file site
//! directly from the structured profile, bypassing free-text parsing.
//!
//! Total for any well-formed profile: string templating only, no I/O, no
//! failure path. This is the output every user gets when no API key is
//! configured or the live generation attempt fails.

use chrono::Datelike;

use crate::generation::style;
use crate::models::profile::{Palette, Project, StyleKind, UserProfile};
use crate::models::site::GeneratedSite;

/// Skills rendered when the profile carries none.
pub const DEFAULT_SKILLS: [&str; 3] = ["HTML", "CSS", "JavaScript"];

const DEFAULT_TAGLINE: &str = "Web Developer & Designer";

pub fn render_site(profile: &UserProfile) -> GeneratedSite {
    let palette = profile.palette();
    GeneratedSite {
        markup: render_markup(profile),
        stylesheet: render_stylesheet(profile.style, &palette),
        script: FALLBACK_SCRIPT.to_string(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Markup
// ────────────────────────────────────────────────────────────────────────────

const MARKUP_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{name} - Portfolio</title>
  <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha1/dist/css/bootstrap.min.css" rel="stylesheet">
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.10.0/font/bootstrap-icons.css">
</head>
<body class="{style}-theme">
  <nav class="navbar navbar-expand-lg {navbar_class} sticky-top">
    <div class="container-fluid">
      <a class="navbar-brand fw-bold" href="#">{brand}</a>
      <button class="navbar-toggler" type="button" data-bs-toggle="collapse" data-bs-target="#navbarNav">
        <span class="navbar-toggler-icon"></span>
      </button>
      <div class="collapse navbar-collapse" id="navbarNav">
        <ul class="navbar-nav ms-auto">
          <li class="nav-item"><a class="nav-link active" href="#home">Home</a></li>
          <li class="nav-item"><a class="nav-link" href="#about">About</a></li>
          <li class="nav-item"><a class="nav-link" href="#projects">Projects</a></li>
          <li class="nav-item"><a class="nav-link" href="#skills">Skills</a></li>
          <li class="nav-item"><a class="nav-link" href="#contact">Contact</a></li>
        </ul>
      </div>
    </div>
  </nav>

  <header id="home" class="{header_class}">
    <div class="container-fluid px-5">
      <div class="row align-items-center">
        <div class="col-md-6">
          <h1 class="display-4 fw-bold">{name}</h1>
          <p class="lead">{tagline}</p>
          <div class="mt-4">
            <a href="#contact" class="btn btn-primary btn-lg me-2">Contact Me</a>
            <a href="#projects" class="btn btn-outline-light btn-lg">View Work</a>
          </div>
        </div>
        <div class="col-md-6 d-none d-md-block text-center">
          <img src="https://via.placeholder.com/500" class="img-fluid rounded-circle header-img" alt="Profile">
        </div>
      </div>
    </div>
  </header>

  <main>
    <section id="about" class="py-5">
      <div class="container-fluid px-5">
        <div class="section-header text-center mb-5">
          <h2 class="fw-bold">About Me</h2>
          <div class="section-divider"></div>
        </div>
        <div class="row">
          <div class="col-lg-8 mx-auto">
            <p class="lead text-center about-text">{bio}</p>
          </div>
        </div>
      </div>
    </section>

    <section id="projects" class="py-5 bg-light">
      <div class="container-fluid px-5">
        <div class="section-header text-center mb-5">
          <h2 class="fw-bold">My Projects</h2>
          <div class="section-divider"></div>
        </div>
        <div class="row">
{projects}
        </div>
      </div>
    </section>

    <section id="skills" class="py-5">
      <div class="container-fluid px-5">
        <div class="section-header text-center mb-5">
          <h2 class="fw-bold">Skills</h2>
          <div class="section-divider"></div>
        </div>
        <div class="row">
          <div class="col-lg-10 mx-auto">
            <div class="skills-container text-center">{skills}</div>
          </div>
        </div>
      </div>
    </section>

    <section id="contact" class="py-5 bg-light">
      <div class="container-fluid px-5">
        <div class="section-header text-center mb-5">
          <h2 class="fw-bold">Get In Touch</h2>
          <div class="section-divider"></div>
        </div>
        <div class="row">
          <div class="col-lg-8 mx-auto">
            <form>
              <div class="mb-3">
                <input type="text" class="form-control" placeholder="Your Name" required>
              </div>
              <div class="mb-3">
                <input type="email" class="form-control" placeholder="Your Email" required>
              </div>
              <div class="mb-3">
                <textarea class="form-control" rows="5" placeholder="Your Message" required></textarea>
              </div>
              <div class="text-center">
                <button type="submit" class="btn btn-primary btn-lg">Send Message</button>
              </div>
            </form>
          </div>
        </div>
      </div>
    </section>
  </main>

  <footer class="{footer_class} py-4">
    <div class="container-fluid px-5 text-center">
      <div class="social-icons mb-3">
        <a href="#" class="me-3"><i class="bi bi-github"></i></a>
        <a href="#" class="me-3"><i class="bi bi-linkedin"></i></a>
        <a href="#" class="me-3"><i class="bi bi-twitter"></i></a>
        <a href="#" class="me-3"><i class="bi bi-envelope"></i></a>
      </div>
      <p class="mb-0">&copy; {year} {name}. All rights reserved.</p>
    </div>
  </footer>

  <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha1/dist/js/bootstrap.bundle.min.js"></script>
</body>
</html>"##;

fn render_markup(profile: &UserProfile) -> String {
    let name = display_name(profile);
    let brand = name.split_whitespace().next().unwrap_or(&name).to_string();
    let tagline = profile
        .profession
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_TAGLINE);
    let bio = if profile.bio.trim().is_empty() {
        "A passionate developer"
    } else {
        profile.bio.trim()
    };

    MARKUP_TEMPLATE
        .replace("{style}", profile.style.as_str())
        .replace("{navbar_class}", navbar_class(profile.style))
        .replace("{header_class}", header_class(profile.style))
        .replace("{footer_class}", footer_class(profile.style))
        .replace("{brand}", &brand)
        .replace("{tagline}", tagline)
        .replace("{bio}", bio)
        .replace("{projects}", &project_cards(&profile.projects, &name))
        .replace("{skills}", &skill_badges(profile))
        .replace("{year}", &chrono::Utc::now().year().to_string())
        .replace("{name}", &name)
}

fn display_name(profile: &UserProfile) -> String {
    let trimmed = profile.name.trim();
    if trimmed.is_empty() {
        "John Doe".to_string()
    } else {
        trimmed.to_string()
    }
}

fn header_class(style: StyleKind) -> &'static str {
    match style {
        StyleKind::Minimal => "bg-light text-dark py-5 border-bottom",
        StyleKind::Neon | StyleKind::Cyberpunk => "bg-dark text-white py-5 neon-header",
        StyleKind::Neobrutalism => "bg-warning text-dark py-5 brutalist-header",
        _ => "bg-dark text-white py-5",
    }
}

fn navbar_class(style: StyleKind) -> &'static str {
    if dark_chrome(style) {
        "navbar-dark bg-dark"
    } else {
        "navbar-light bg-light"
    }
}

fn footer_class(style: StyleKind) -> &'static str {
    if dark_chrome(style) {
        "bg-dark text-white"
    } else {
        "bg-light text-dark"
    }
}

fn dark_chrome(style: StyleKind) -> bool {
    matches!(
        style,
        StyleKind::Dark | StyleKind::Neon | StyleKind::Cyberpunk
    )
}

/// One card per project; exactly one sample card when the list is empty.
fn project_cards(projects: &[Project], name: &str) -> String {
    if projects.is_empty() {
        return format!(
            r##"          <div class="col-md-4 mb-4">
            <div class="card h-100 project-card">
              <div class="card-body">
                <h5 class="card-title">Sample Project</h5>
                <p class="card-text">This is a sample project description for {name}.</p>
                <a href="#" class="btn btn-primary">View Project</a>
              </div>
            </div>
          </div>"##
        );
    }

    projects
        .iter()
        .map(|project| {
            let description = if project.description.trim().is_empty() {
                "Project description goes here."
            } else {
                project.description.trim()
            };
            let link = project.link.as_deref().unwrap_or("#");
            format!(
                r#"          <div class="col-md-4 mb-4">
            <div class="card h-100 project-card">
              <div class="card-body">
                <h5 class="card-title">{title}</h5>
                <p class="card-text">{description}</p>
                <a href="{link}" class="btn btn-primary">View Project</a>
              </div>
            </div>
          </div>"#,
                title = project.title,
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn skill_badges(profile: &UserProfile) -> String {
    let owned: Vec<String>;
    let skills: &[String] = match profile.resume.as_ref().filter(|r| !r.skills.is_empty()) {
        Some(resume) => &resume.skills,
        None => {
            owned = DEFAULT_SKILLS.iter().map(|s| s.to_string()).collect();
            &owned
        }
    };
    skills
        .iter()
        .map(|skill| format!(r#"<span class="badge skill-badge">{skill}</span>"#))
        .collect::<Vec<_>>()
        .join(" ")
}

// ────────────────────────────────────────────────────────────────────────────
// Stylesheet
// ────────────────────────────────────────────────────────────────────────────

const BASE_STYLESHEET_TEMPLATE: &str = r#"body {
  font-family: 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
  scroll-behavior: smooth;
  width: 100%;
  overflow-x: hidden;
}

/* Header Styles */
.header-img {
  max-width: 80%;
}

/* Section Styles */
.section-header {
  position: relative;
  margin-bottom: 2rem;
}

.section-divider {
  width: 80px;
  height: 4px;
  background-color: {primary};
  margin: 0 auto;
  margin-top: 1rem;
}

/* Project Cards */
.project-card {
  transition: transform 0.3s ease, box-shadow 0.3s ease;
}

.project-card:hover {
  transform: translateY(-10px);
  box-shadow: 0 10px 20px rgba(0, 0, 0, 0.1);
}

/* Skills */
.skills-container {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 10px;
}

.skill-badge {
  background-color: {primary};
  font-size: 1rem;
  padding: 8px 15px;
  border-radius: 30px;
  color: white;
}

/* Social Icons */
.social-icons a {
  font-size: 1.5rem;
  color: {primary};
  transition: transform 0.3s ease;
}

.social-icons a:hover {
  transform: translateY(-3px);
}

/* Primary buttons */
.btn-primary {
  background-color: {primary};
  border-color: {primary};
}

.btn-primary:hover {
  background-color: {primary}dd;
  border-color: {primary}dd;
}

/* Secondary elements */
.btn-secondary, .bg-secondary, .text-secondary {
  background-color: {secondary};
  border-color: {secondary};
  color: white;
}

/* Accent elements */
.btn-accent, .accent-border {
  border-color: {accent};
}

.accent-text, .accent-icon {
  color: {accent};
}

/* Container fluid fixes */
.container-fluid {
  max-width: 100%;
  width: 100%;
}

/* Style-specific overrides */
{overrides}

/* Animation */
@media (prefers-reduced-motion: no-preference) {
  .header-img {
    animation: pulse 3s infinite ease-in-out;
  }

  @keyframes pulse {
    0% { transform: scale(1); }
    50% { transform: scale(1.05); }
    100% { transform: scale(1); }
  }
}

/* Full width layout fixes */
section {
  width: 100%;
}

.row {
  width: 100%;
  margin-left: 0;
  margin-right: 0;
}"#;

fn render_stylesheet(kind: StyleKind, palette: &Palette) -> String {
    BASE_STYLESHEET_TEMPLATE
        .replace("{overrides}", &style::stylesheet_overrides(kind, palette))
        .replace("{primary}", &palette.primary)
        .replace("{secondary}", &palette.secondary)
        .replace("{accent}", &palette.accent)
}

// ────────────────────────────────────────────────────────────────────────────
// Script
// ────────────────────────────────────────────────────────────────────────────

/// Fixed behavior bundle: smooth scroll and active-nav-link highlighting.
/// Independent of the profile and style, so constant across invocations.
const FALLBACK_SCRIPT: &str = r##"// Wait for the document to be ready
document.addEventListener('DOMContentLoaded', function() {
  // Smooth scrolling for navigation links
  document.querySelectorAll('a[href^="#"]').forEach(anchor => {
    anchor.addEventListener('click', function(e) {
      e.preventDefault();

      const href = this.getAttribute('href');
      if (!href) return;

      const target = document.querySelector(href);
      if (!target) return;

      window.scrollTo({
        top: target.offsetTop - 70,
        behavior: 'smooth'
      });

      // Close mobile menu if open
      const navbarCollapse = document.querySelector('.navbar-collapse');
      if (navbarCollapse && navbarCollapse.classList.contains('show')) {
        navbarCollapse.classList.remove('show');
      }
    });
  });

  // Active nav link based on scroll position
  const sections = document.querySelectorAll('section, header');
  const navLinks = document.querySelectorAll('.nav-link');

  window.addEventListener('scroll', function() {
    let current = '';
    const scrollPosition = window.scrollY + 100;

    sections.forEach(section => {
      const sectionTop = section.offsetTop;
      const sectionHeight = section.clientHeight;

      if (scrollPosition >= sectionTop && scrollPosition < sectionTop + sectionHeight) {
        current = section.getAttribute('id') || '';
      }
    });

    navLinks.forEach(link => {
      link.classList.remove('active');
      if (link.getAttribute('href') === '#' + current) {
        link.classList.add('active');
      }
    });
  });
});"##;
