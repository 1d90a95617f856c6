//! Per-file feature building.
//!
//! One call per file: skip dependency paths, invoke the parser collaborator
//! and assemble the file-level record from either the parsed document or
//! the error attachment.

use std::path::Path;

use anyhow::Result;

use crate::core::dialect::DialectRepository;
use crate::core::parser::FeatureParser;
use crate::core::record::FeatureRecord;
use crate::core::scenario::{anchor_line, bare_tag, extract_scenarios, title_with_tags};
use crate::diagnostics::{Diagnostic, Diagnostics};

/// Marker substring for dependency directories. Deliberately loose (no
/// leading `n`, no separators) so it matches under both `/` and `\` path
/// conventions.
pub const DEPENDENCY_DIR_MARKER: &str = "ode_modules";

/// Build the record for one file.
///
/// Returns `Ok(None)` for dependency paths (no record, no diagnostics).
/// Grammar and content problems are captured in the record's `error` field;
/// an `Err` means the collaborator itself faulted (e.g. unreadable file)
/// and is left to the runner to account for.
pub fn build_feature(
    path: &Path,
    work_dir: &Path,
    parser: &dyn FeatureParser,
    repo: &dyn DialectRepository,
    sink: &mut Diagnostics,
) -> Result<Option<FeatureRecord>> {
    let file_name = relative_name(path, work_dir);
    if file_name.contains(DEPENDENCY_DIR_MARKER) {
        return Ok(None);
    }

    let parsed = parser.parse(path)?;

    let mut record = FeatureRecord::default();
    match parsed.document {
        Some(feature) => {
            let title = title_with_tags(&feature.name, &feature.tags);
            if title.is_empty() {
                sink.push(Diagnostic::empty_feature_title(&file_name));
                record.error = Some(format!("{file_name} : Empty feature"));
            }
            record.feature = Some(title);

            let lines: Vec<&str> = parsed.source.split('\n').collect();
            record.line = Some(anchor_line(feature.position.line, &feature.tags, &lines) + 1);
            record.tags = feature.tags.iter().map(|t| bare_tag(t).to_string()).collect();
            record.scenario = Some(extract_scenarios(
                &parsed.source,
                &feature,
                &file_name,
                &parsed.language,
                repo,
                sink,
            ));
        }
        None => {
            let attachment = parsed
                .attachment
                .unwrap_or_else(|| "Unknown parser failure".to_string());
            sink.push(Diagnostic::malformed_file(&file_name, &attachment));
            record.error = Some(format!("{file_name} : {attachment}"));
        }
    }

    Ok(Some(record))
}

/// Path relative to the working directory, for display and record fields.
pub(crate) fn relative_name(path: &Path, work_dir: &Path) -> String {
    path.strip_prefix(work_dir)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}
