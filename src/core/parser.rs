//! Parser collaborator boundary.
//!
//! The Gherkin grammar parser is consumed as an opaque service: it turns a
//! file into raw source text plus either a parsed document or an error
//! attachment. Grammar failures are data (the attachment), I/O failures are
//! faults and surface as `Err`.

use std::{fs, path::Path, sync::LazyLock};

use anyhow::{Context, Result};
use gherkin::GherkinEnv;
use regex::Regex;

/// Everything the collaborator reports for one file.
#[derive(Debug)]
pub struct ParsedFeature {
    /// Raw source text, exactly as read.
    pub source: String,
    /// Parsed document, absent when the input is malformed.
    pub document: Option<gherkin::Feature>,
    /// Parser failure payload, present when `document` is absent.
    pub attachment: Option<String>,
    /// Language code from the `# language:` header, defaulting to `en`.
    pub language: String,
}

pub trait FeatureParser: Sync {
    fn parse(&self, path: &Path) -> Result<ParsedFeature>;
}

/// Default collaborator backed by the `gherkin` crate.
pub struct GherkinParser;

impl FeatureParser for GherkinParser {
    fn parse(&self, path: &Path) -> Result<ParsedFeature> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let language = detect_language(&source);
        let env = GherkinEnv::new(&language).unwrap_or_default();

        Ok(match gherkin::Feature::parse(&source, env) {
            Ok(feature) => ParsedFeature {
                source,
                document: Some(feature),
                attachment: None,
                language,
            },
            Err(err) => ParsedFeature {
                source,
                document: None,
                attachment: Some(err.to_string()),
                language,
            },
        })
    }
}

static LANGUAGE_HEADER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#\s*language\s*:\s*([A-Za-z][A-Za-z-]*)").expect("language header pattern")
});

/// Language code from a leading `# language: xx` comment.
///
/// Only the comment block before the first content line is considered.
pub fn detect_language(source: &str) -> String {
    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.starts_with('#') {
            if let Some(captures) = LANGUAGE_HEADER.captures(trimmed) {
                return captures[1].to_string();
            }
            continue;
        }
        break;
    }
    "en".to_string()
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;
    use tempfile::NamedTempFile;

    use super::*;

    fn feature_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::with_suffix(".feature").unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn detects_language_header() {
        assert_eq!(detect_language("# language: de\nFunktionalität: X\n"), "de");
        assert_eq!(detect_language("#language:fr\nFonctionnalité: X\n"), "fr");
        assert_eq!(
            detect_language("\n# a comment\n# language: ru\nФункция: X\n"),
            "ru"
        );
    }

    #[test]
    fn defaults_to_english() {
        assert_eq!(detect_language("Feature: X\n"), "en");
        // header after the first content line is ignored
        assert_eq!(detect_language("Feature: X\n# language: de\n"), "en");
    }

    #[test]
    fn parses_a_valid_file_into_a_document() {
        let file = feature_file("Feature: Search\n\n  Scenario: Simple\n    Given a page\n");
        let parsed = GherkinParser.parse(file.path()).unwrap();

        assert!(parsed.attachment.is_none());
        let document = parsed.document.unwrap();
        assert_eq!(document.name, "Search");
        assert_eq!(document.scenarios.len(), 1);
    }

    #[test]
    fn malformed_input_becomes_an_attachment() {
        let file = feature_file("This is not Gherkin at all\n");
        let parsed = GherkinParser.parse(file.path()).unwrap();

        assert!(parsed.document.is_none());
        assert!(parsed.attachment.is_some());
    }

    #[test]
    fn missing_file_is_a_fault() {
        assert!(GherkinParser.parse(Path::new("/nonexistent/x.feature")).is_err());
    }
}
