//! Analysis fan-out across matched files.

use std::path::PathBuf;

use anyhow::{Context, Result};
use rayon::prelude::*;

use crate::core::dialect::DialectRepository;
use crate::core::feature::{build_feature, relative_name};
use crate::core::parser::FeatureParser;
use crate::core::record::FeatureRecord;
use crate::diagnostics::{Diagnostic, Diagnostics};

/// Inputs for one analysis run. The working directory is explicit state
/// passed down every call; nothing is process-wide.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Glob pattern, joined under `work_dir`.
    pub pattern: String,
    /// Base directory; record paths are made relative to it.
    pub work_dir: PathBuf,
}

/// Result of one run: per-file records in discovery order, plus the
/// diagnostics side channel.
#[derive(Debug)]
pub struct Analysis {
    pub features: Vec<FeatureRecord>,
    pub diagnostics: Diagnostics,
}

impl Analysis {
    /// Number of records carrying an `error` field.
    pub fn error_count(&self) -> usize {
        self.features.iter().filter(|f| f.error.is_some()).count()
    }

    pub fn scenario_count(&self) -> usize {
        self.features
            .iter()
            .filter_map(|f| f.scenario.as_ref())
            .map(Vec::len)
            .sum()
    }
}

/// Analyze every file matching the pattern.
///
/// Files are built concurrently with purely file-local state. One file's
/// collaborator fault never aborts the batch: the fault becomes that file's
/// error record and every other result is still returned.
pub fn analyze(
    options: &AnalyzeOptions,
    parser: &dyn FeatureParser,
    repo: &dyn DialectRepository,
) -> Result<Analysis> {
    let pattern = options.work_dir.join(&options.pattern);
    let pattern = pattern.to_string_lossy();
    let paths: Vec<PathBuf> = glob::glob(&pattern)
        .with_context(|| format!("Invalid glob pattern \"{pattern}\""))?
        .filter_map(|entry| entry.ok())
        .collect();

    let outcomes: Vec<(Option<FeatureRecord>, Diagnostics)> = paths
        .par_iter()
        .map(|path| {
            let mut sink = Diagnostics::new();
            let record = match build_feature(path, &options.work_dir, parser, repo, &mut sink) {
                Ok(record) => record,
                Err(fault) => {
                    let file_name = relative_name(path, &options.work_dir);
                    let fault = format!("{fault:#}");
                    sink.push(Diagnostic::collaborator_fault(&file_name, &fault));
                    Some(FeatureRecord {
                        error: Some(format!("{file_name} : {fault}")),
                        ..Default::default()
                    })
                }
            };
            (record, sink)
        })
        .collect();

    let mut features = Vec::new();
    let mut diagnostics = Diagnostics::new();
    for (record, sink) in outcomes {
        features.extend(record);
        diagnostics.merge(sink);
    }

    Ok(Analysis {
        features,
        diagnostics,
    })
}
