//! Diagnostics collected during an analysis run.
//!
//! Diagnostics are a side channel, separate from the returned records: the
//! CLI renders them on request, library callers can inspect or discard them.
//! They are collected into an ordered list rather than written to a fixed
//! output stream.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    UnresolvedConjunction,
    UnknownKeyword,
    SkippedStep,
    EmptyScenarioTitle,
    EmptyFeatureTitle,
    MalformedFile,
    CollaboratorFault,
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticKind::UnresolvedConjunction => write!(f, "unresolved-conjunction"),
            DiagnosticKind::UnknownKeyword => write!(f, "unknown-keyword"),
            DiagnosticKind::SkippedStep => write!(f, "skipped-step"),
            DiagnosticKind::EmptyScenarioTitle => write!(f, "empty-scenario-title"),
            DiagnosticKind::EmptyFeatureTitle => write!(f, "empty-feature-title"),
            DiagnosticKind::MalformedFile => write!(f, "malformed-file"),
            DiagnosticKind::CollaboratorFault => write!(f, "collaborator-fault"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
}

impl Diagnostic {
    pub fn unresolved_conjunction(keyword: &str, file: &str, line: usize) -> Self {
        Self {
            severity: Severity::Warning,
            kind: DiagnosticKind::UnresolvedConjunction,
            message: format!(
                "Got conjunction keyword \"{}\" without prior non-conjunction keyword",
                keyword
            ),
            file: Some(file.to_string()),
            line: Some(line),
        }
    }

    pub fn unknown_keyword(keyword: &str, file: &str, line: usize) -> Self {
        Self {
            severity: Severity::Warning,
            kind: DiagnosticKind::UnknownKeyword,
            message: format!("Unknown keyword \"{}\"", keyword),
            file: Some(file.to_string()),
            line: Some(line),
        }
    }

    pub fn skipped_step(keyword: &str, text: &str, file: &str, line: usize) -> Self {
        Self {
            severity: Severity::Warning,
            kind: DiagnosticKind::SkippedStep,
            message: format!("Skipping step \"{}{}\"", keyword, text),
            file: Some(file.to_string()),
            line: Some(line),
        }
    }

    pub fn empty_scenario_title(file: &str, line: usize) -> Self {
        Self {
            severity: Severity::Warning,
            kind: DiagnosticKind::EmptyScenarioTitle,
            message: "Title of scenario cannot be empty".to_string(),
            file: Some(file.to_string()),
            line: Some(line),
        }
    }

    pub fn empty_feature_title(file: &str) -> Self {
        Self {
            severity: Severity::Error,
            kind: DiagnosticKind::EmptyFeatureTitle,
            message: "Title for feature is empty".to_string(),
            file: Some(file.to_string()),
            line: None,
        }
    }

    pub fn malformed_file(file: &str, attachment: &str) -> Self {
        Self {
            severity: Severity::Error,
            kind: DiagnosticKind::MalformedFile,
            message: format!("Wrong format, skipping: {}", attachment),
            file: Some(file.to_string()),
            line: None,
        }
    }

    pub fn collaborator_fault(file: &str, fault: &str) -> Self {
        Self {
            severity: Severity::Error,
            kind: DiagnosticKind::CollaboratorFault,
            message: fault.to_string(),
            file: Some(file.to_string()),
            line: None,
        }
    }
}

/// Ordered diagnostic collector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.0.push(diagnostic);
    }

    pub fn merge(&mut self, other: Diagnostics) {
        self.0.extend(other.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn error_count(&self) -> usize {
        self.0
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.0
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
