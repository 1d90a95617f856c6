//! Output data model.
//!
//! One `FeatureRecord` per analyzed file. Records are immutable values
//! assembled once per run and serialize directly to the export JSON shape.

use serde::Serialize;

use crate::core::keyword::StepKind;

/// One resolved step. The original localized keyword token is discarded
/// once resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepRecord {
    pub keyword: StepKind,
    pub title: String,
}

/// One scenario with its verbatim, keyword-translated source slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioRecord {
    /// Scenario title with sigil-retained tag names appended.
    pub name: String,
    /// Path relative to the working directory.
    pub file: String,
    /// Zero-based start line in the source.
    pub line: usize,
    /// Tag names with the leading sigil stripped, in declaration order.
    pub tags: Vec<String>,
    /// Source slice for this scenario, each line keyword-translated.
    pub code: String,
    pub steps: Vec<StepRecord>,
}

/// File-level result: a parsed feature or an error message. The two can
/// coexist only for the empty-feature-title case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeatureRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<Vec<ScenarioRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
