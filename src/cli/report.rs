//! Report formatting and printing utilities.
//!
//! Separate from the core library logic so cukescan can be used as a
//! library without printing side effects.

use std::io::{self, Write};

use colored::Colorize;

use crate::core::Analysis;
use crate::diagnostics::Severity;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print the analysis to stdout.
pub fn print_analysis(analysis: &Analysis, verbose: bool) -> io::Result<()> {
    print_analysis_to(analysis, verbose, &mut io::stdout().lock())
}

/// Print the analysis to a custom writer. Useful for testing.
pub fn print_analysis_to<W: Write>(
    analysis: &Analysis,
    verbose: bool,
    writer: &mut W,
) -> io::Result<()> {
    for record in &analysis.features {
        match (&record.feature, &record.error) {
            (Some(title), None) => {
                writeln!(writer, "{} {}", SUCCESS_MARK.green(), title.bold())?;
                print_scenarios(record, writer)?;
            }
            (Some(title), Some(error)) => {
                writeln!(writer, "{} {}", FAILURE_MARK.red(), title.bold())?;
                writeln!(writer, "  {}", error.red())?;
                print_scenarios(record, writer)?;
            }
            (None, Some(error)) => {
                writeln!(writer, "{} {}", FAILURE_MARK.red(), error.red())?;
            }
            (None, None) => {}
        }
    }

    if verbose && !analysis.diagnostics.is_empty() {
        writeln!(writer)?;
        for diagnostic in analysis.diagnostics.iter() {
            let severity = match diagnostic.severity {
                Severity::Error => "error".bold().red(),
                Severity::Warning => "warning".bold().yellow(),
            };
            write!(writer, "{}: {}", severity, diagnostic.message)?;
            if let Some(file) = &diagnostic.file {
                write!(writer, "  {} {}", "-->".blue(), file)?;
                if let Some(line) = diagnostic.line {
                    write!(writer, ":{}", line)?;
                }
            }
            writeln!(writer)?;
        }
    }

    print_summary(analysis, writer)
}

fn print_scenarios<W: Write>(
    record: &crate::core::FeatureRecord,
    writer: &mut W,
) -> io::Result<()> {
    let Some(scenarios) = &record.scenario else {
        return Ok(());
    };
    for scenario in scenarios {
        writeln!(
            writer,
            "  - {} {}",
            scenario.name,
            format!("({} steps)", scenario.steps.len()).dimmed()
        )?;
    }
    Ok(())
}

fn print_summary<W: Write>(analysis: &Analysis, writer: &mut W) -> io::Result<()> {
    let files = analysis.features.len();
    let scenarios = analysis.scenario_count();
    let errors = analysis.error_count();

    writeln!(writer)?;
    let summary = format!(
        "Analyzed {} {} - {} {}, {} {}",
        files,
        plural(files, "file"),
        scenarios,
        plural(scenarios, "scenario"),
        errors,
        plural(errors, "error"),
    );
    if errors == 0 {
        writeln!(writer, "{} {}", SUCCESS_MARK.green(), summary.green())?;
    } else {
        writeln!(writer, "{} {}", FAILURE_MARK.red(), summary.red())?;
    }
    Ok(())
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{noun}s")
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{Analysis, FeatureRecord, ScenarioRecord};
    use crate::diagnostics::Diagnostics;

    use super::*;

    fn render(analysis: &Analysis, verbose: bool) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        print_analysis_to(analysis, verbose, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_features_scenarios_and_summary() {
        let analysis = Analysis {
            features: vec![FeatureRecord {
                feature: Some("Search".to_string()),
                line: Some(1),
                tags: Vec::new(),
                scenario: Some(vec![ScenarioRecord {
                    name: "Simple".to_string(),
                    file: "search.feature".to_string(),
                    line: 2,
                    tags: Vec::new(),
                    code: String::new(),
                    steps: Vec::new(),
                }]),
                error: None,
            }],
            diagnostics: Diagnostics::new(),
        };

        let out = render(&analysis, false);
        assert!(out.contains("Search"));
        assert!(out.contains("- Simple"));
        assert!(out.contains("Analyzed 1 file - 1 scenario, 0 errors"));
    }

    #[test]
    fn renders_error_records() {
        let analysis = Analysis {
            features: vec![FeatureRecord {
                error: Some("broken.feature : Wrong format".to_string()),
                ..Default::default()
            }],
            diagnostics: Diagnostics::new(),
        };

        let out = render(&analysis, false);
        assert!(out.contains("broken.feature : Wrong format"));
        assert!(out.contains("1 error"));
    }
}
