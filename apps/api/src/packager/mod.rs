//! Packager — bundles a generated site into a downloadable ZIP archive.
//!
//! Entry names are fixed; only the archive's own name varies, derived from
//! the user's display name. The script entry is included only when the
//! script is non-blank after trimming, and the entry page references it
//! under the same condition so the two can never disagree.

pub mod handlers;

use std::io::{Cursor, Write};

use anyhow::{Context, Result};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::models::site::GeneratedSite;

pub const INDEX_FILE: &str = "index.html";
pub const STYLESHEET_FILE: &str = "styles.css";
pub const SCRIPT_FILE: &str = "script.js";
pub const README_FILE: &str = "README.md";

/// Builds the complete archive in memory.
pub fn build_archive(site: &GeneratedSite, display_name: &str) -> Result<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);

    writer
        .start_file(INDEX_FILE, options)
        .context("failed to start archive entry index.html")?;
    writer.write_all(render_index_page(site, display_name).as_bytes())?;

    writer
        .start_file(STYLESHEET_FILE, options)
        .context("failed to start archive entry styles.css")?;
    writer.write_all(site.stylesheet.as_bytes())?;

    if has_script(site) {
        writer
            .start_file(SCRIPT_FILE, options)
            .context("failed to start archive entry script.js")?;
        writer.write_all(site.script.as_bytes())?;
    }

    writer
        .start_file(README_FILE, options)
        .context("failed to start archive entry README.md")?;
    writer.write_all(render_readme(display_name).as_bytes())?;

    let cursor = writer.finish().context("failed to finalize archive")?;
    Ok(cursor.into_inner())
}

/// The archive's download name: display name lower-cased with
/// non-alphanumeric runs collapsed to a single `-`.
pub fn archive_file_name(display_name: &str) -> String {
    let slug = slugify(display_name);
    if slug.is_empty() {
        "portfolio.zip".to_string()
    } else {
        format!("{slug}-portfolio.zip")
    }
}

fn slugify(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut pending_separator = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_separator && !out.is_empty() {
                out.push('-');
            }
            pending_separator = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_separator = true;
        }
    }
    out
}

fn has_script(site: &GeneratedSite) -> bool {
    !site.script.trim().is_empty()
}

/// The entry page: a shell that embeds the markup and links the stylesheet
/// and, when present, the script by their fixed entry names.
fn render_index_page(site: &GeneratedSite, display_name: &str) -> String {
    let script_tag = if has_script(site) {
        format!("\n  <script src=\"{SCRIPT_FILE}\"></script>")
    } else {
        String::new()
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{display_name} - Portfolio</title>
  <link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha1/dist/css/bootstrap.min.css" rel="stylesheet">
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap-icons@1.10.0/font/bootstrap-icons.css">
  <link rel="stylesheet" href="{STYLESHEET_FILE}">
</head>
<body>
{markup}
  <script src="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0-alpha1/dist/js/bootstrap.bundle.min.js"></script>{script_tag}
</body>
</html>"#,
        markup = site.markup,
    )
}

fn render_readme(display_name: &str) -> String {
    format!(
        r#"# {display_name}'s Portfolio

This portfolio was generated with Folio.

## How to Use

1. Unzip the file
2. Open `index.html` in your browser
3. To publish online, upload all files to a hosting service

## Customization

- Edit `index.html` to update content
- Edit `styles.css` to customize styling
- Edit `script.js` to add JavaScript functionality

## Technologies

- HTML5
- CSS3
- Bootstrap 5
- JavaScript (optional)
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;
    use zip::ZipArchive;

    fn site() -> GeneratedSite {
        GeneratedSite {
            markup: "<main><h1>Ada</h1></main>".to_string(),
            stylesheet: "body { margin: 0; }".to_string(),
            script: "console.log('ready');".to_string(),
        }
    }

    fn entry(bytes: &[u8], name: &str) -> String {
        let mut archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut contents = String::new();
        file.read_to_string(&mut contents).unwrap();
        contents
    }

    fn entry_names(bytes: &[u8]) -> Vec<String> {
        let archive = ZipArchive::new(Cursor::new(bytes.to_vec())).unwrap();
        archive.file_names().map(String::from).collect()
    }

    #[test]
    fn test_archive_contains_all_entries_when_script_present() {
        let bytes = build_archive(&site(), "Ada").unwrap();
        let mut names = entry_names(&bytes);
        names.sort();
        assert_eq!(
            names,
            vec!["README.md", "index.html", "script.js", "styles.css"]
        );
    }

    #[test]
    fn test_index_always_references_stylesheet() {
        let bytes = build_archive(&site(), "Ada").unwrap();
        let index = entry(&bytes, INDEX_FILE);
        assert!(index.contains(r#"<link rel="stylesheet" href="styles.css">"#));
    }

    #[test]
    fn test_index_references_script_iff_nonblank() {
        let bytes = build_archive(&site(), "Ada").unwrap();
        assert!(entry(&bytes, INDEX_FILE).contains(r#"<script src="script.js"></script>"#));

        let mut blank = site();
        blank.script = "   \n\t".to_string();
        let bytes = build_archive(&blank, "Ada").unwrap();
        let index = entry(&bytes, INDEX_FILE);
        assert!(!index.contains("script.js"));
        assert!(!entry_names(&bytes).contains(&SCRIPT_FILE.to_string()));
    }

    #[test]
    fn test_index_embeds_markup() {
        let bytes = build_archive(&site(), "Ada").unwrap();
        assert!(entry(&bytes, INDEX_FILE).contains("<main><h1>Ada</h1></main>"));
    }

    #[test]
    fn test_stylesheet_entry_round_trips() {
        let bytes = build_archive(&site(), "Ada").unwrap();
        assert_eq!(entry(&bytes, STYLESHEET_FILE), "body { margin: 0; }");
    }

    #[test]
    fn test_readme_names_the_owner() {
        let bytes = build_archive(&site(), "Ada Lovelace").unwrap();
        assert!(entry(&bytes, README_FILE).starts_with("# Ada Lovelace's Portfolio"));
    }

    #[test]
    fn test_archive_extracts_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let bytes = build_archive(&site(), "Ada").unwrap();
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        archive.extract(dir.path()).unwrap();
        assert!(dir.path().join(INDEX_FILE).exists());
        assert!(dir.path().join(STYLESHEET_FILE).exists());
        assert!(dir.path().join(README_FILE).exists());
    }

    #[test]
    fn test_archive_file_name_slug_rules() {
        assert_eq!(archive_file_name("Ada Lovelace"), "ada-lovelace-portfolio.zip");
        assert_eq!(
            archive_file_name("  Ada --- Lovelace!  "),
            "ada-lovelace-portfolio.zip"
        );
        assert_eq!(archive_file_name("ADA"), "ada-portfolio.zip");
        assert_eq!(archive_file_name("!!!"), "portfolio.zip");
    }
}
