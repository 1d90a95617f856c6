//! Scenario extraction.
//!
//! Walks one parsed feature, computes per-scenario line ranges, resolves
//! step keywords and slices the original source into per-scenario code
//! blocks. Ranges are contiguous and non-overlapping: each scenario runs
//! from its anchor line to the next scenario's anchor, the last one to the
//! end of the file.

use crate::core::dialect::DialectRepository;
use crate::core::keyword::KeywordResolver;
use crate::core::record::{ScenarioRecord, StepRecord};
use crate::core::translate::translate_line;
use crate::diagnostics::{Diagnostic, Diagnostics};

/// Tag marker character in Gherkin syntax.
pub const TAG_SIGIL: char = '@';

/// Extract all scenario records for one feature.
///
/// `file_name` is the path already made relative to the working directory;
/// `language` selects the dialect, falling back to English when unsupported.
pub fn extract_scenarios(
    source: &str,
    feature: &gherkin::Feature,
    file_name: &str,
    language: &str,
    repo: &dyn DialectRepository,
    sink: &mut Diagnostics,
) -> Vec<ScenarioRecord> {
    let lines: Vec<&str> = source.split('\n').collect();
    let dialect = repo.lookup(language).unwrap_or_else(|| repo.english());
    let english = repo.english();

    let mut records = Vec::with_capacity(feature.scenarios.len());
    for (index, scenario) in feature.scenarios.iter().enumerate() {
        let start = anchor_line(scenario.position.line, &scenario.tags, &lines);
        let end = match feature.scenarios.get(index + 1) {
            Some(next) => anchor_line(next.position.line, &next.tags, &lines),
            None => lines.len(),
        };

        if scenario.name.is_empty() {
            sink.push(Diagnostic::empty_scenario_title(file_name, start));
        }

        let mut resolver = KeywordResolver::new(dialect);
        let mut steps = Vec::with_capacity(scenario.steps.len());
        for step in &scenario.steps {
            match resolver.resolve(&step.keyword, file_name, step.position.line, sink) {
                Some(kind) => steps.push(StepRecord {
                    keyword: kind,
                    title: step.value.clone(),
                }),
                None => sink.push(Diagnostic::skipped_step(
                    &step.keyword,
                    &step.value,
                    file_name,
                    step.position.line,
                )),
            }
        }

        let code = lines
            .iter()
            .skip(start)
            .take(end.saturating_sub(start))
            .map(|line| translate_line(line, dialect, english))
            .collect::<Vec<_>>()
            .join("\n");

        records.push(ScenarioRecord {
            name: title_with_tags(&scenario.name, &scenario.tags),
            file: file_name.to_string(),
            line: start,
            tags: scenario.tags.iter().map(|t| bare_tag(t).to_string()).collect(),
            code,
            steps,
        });
    }

    records
}

/// Zero-based anchor line for a tagged block: the first tag's line when tags
/// are present, otherwise the declaration line itself.
///
/// The parser does not report tag positions, so the anchor is recovered by
/// scanning upward from the declaration over contiguous tag lines.
pub(crate) fn anchor_line(declaration_line: usize, tags: &[String], lines: &[&str]) -> usize {
    let declaration = declaration_line.saturating_sub(1);
    if tags.is_empty() {
        return declaration;
    }
    let mut anchor = declaration;
    while anchor > 0 {
        let above = lines.get(anchor - 1).map_or("", |line| line.trim());
        if above.starts_with(TAG_SIGIL) {
            anchor -= 1;
        } else {
            break;
        }
    }
    anchor
}

/// Title with sigil-retained tag names appended, space-joined.
pub(crate) fn title_with_tags(name: &str, tags: &[String]) -> String {
    let mut title = name.to_string();
    for tag in tags {
        title.push(' ');
        if !tag.starts_with(TAG_SIGIL) {
            title.push(TAG_SIGIL);
        }
        title.push_str(tag);
    }
    title
}

/// Tag name with the leading sigil stripped. Purely cosmetic; ordering is
/// the caller's concern.
pub(crate) fn bare_tag(tag: &str) -> &str {
    tag.strip_prefix(TAG_SIGIL).unwrap_or(tag)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::core::dialect::BuiltinDialects;
    use crate::core::keyword::StepKind;

    fn parse(source: &str) -> gherkin::Feature {
        gherkin::Feature::parse(source, gherkin::GherkinEnv::default()).unwrap()
    }

    fn extract(source: &str) -> (Vec<ScenarioRecord>, Diagnostics) {
        let feature = parse(source);
        let mut sink = Diagnostics::new();
        let records = extract_scenarios(
            source,
            &feature,
            "test.feature",
            "en",
            &BuiltinDialects,
            &mut sink,
        );
        (records, sink)
    }

    const TWO_SCENARIOS: &str = "\
Feature: Search

  Scenario: First
    Given a page
    When I search
    Then I see results

  @smoke
  Scenario: Second
    Given a page
    And a query
";

    #[test]
    fn ranges_are_contiguous_and_cover_to_eof() {
        let (records, _) = extract(TWO_SCENARIOS);
        let total_lines = TWO_SCENARIOS.split('\n').count();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].line, 2);
        // second scenario starts at its tag line, which is also where the
        // first scenario's slice ends
        assert_eq!(records[1].line, 7);
        assert_eq!(records[0].code.split('\n').count(), 7 - 2);
        assert_eq!(records[1].code.split('\n').count(), total_lines - 7);
    }

    #[test]
    fn steps_resolve_conjunctions_and_drop_the_raw_keyword() {
        let (records, sink) = extract(TWO_SCENARIOS);

        let kinds: Vec<StepKind> = records[0].steps.iter().map(|s| s.keyword).collect();
        assert_eq!(kinds, vec![StepKind::Given, StepKind::When, StepKind::Then]);

        let kinds: Vec<StepKind> = records[1].steps.iter().map(|s| s.keyword).collect();
        assert_eq!(kinds, vec![StepKind::Given, StepKind::Given]);
        assert_eq!(records[1].steps[1].title, "a query");
        assert!(sink.is_empty());
    }

    #[test]
    fn tags_are_stripped_in_the_list_and_kept_in_the_name() {
        let (records, _) = extract(TWO_SCENARIOS);

        assert_eq!(records[0].tags, Vec::<String>::new());
        assert_eq!(records[0].name, "First");
        assert_eq!(records[1].tags, vec!["smoke"]);
        assert_eq!(records[1].name, "Second @smoke");
    }

    fn step(ty: gherkin::StepType, keyword: &str, value: &str, line: usize) -> gherkin::Step {
        gherkin::Step {
            keyword: keyword.to_string(),
            ty,
            value: value.to_string(),
            docstring: None,
            table: None,
            span: gherkin::Span { start: 0, end: 0 },
            position: gherkin::LineCol { line, col: 1 },
        }
    }

    fn scenario(name: &str, line: usize, steps: Vec<gherkin::Step>) -> gherkin::Scenario {
        gherkin::Scenario {
            keyword: "Scenario".to_string(),
            name: name.to_string(),
            description: None,
            steps,
            examples: Vec::new(),
            tags: Vec::new(),
            span: gherkin::Span { start: 0, end: 0 },
            position: gherkin::LineCol { line, col: 3 },
        }
    }

    fn feature(scenarios: Vec<gherkin::Scenario>) -> gherkin::Feature {
        gherkin::Feature {
            keyword: "Feature".to_string(),
            name: "Built".to_string(),
            description: None,
            background: None,
            scenarios,
            rules: Vec::new(),
            tags: Vec::new(),
            span: gherkin::Span { start: 0, end: 0 },
            position: gherkin::LineCol { line: 1, col: 1 },
            path: None,
        }
    }

    #[test]
    fn resolution_state_resets_between_scenarios() {
        let source = "\
Feature: Built

  Scenario: One
    Then an outcome

  Scenario: Two
    And a dangling conjunction
";
        let feature = feature(vec![
            scenario("One", 3, vec![step(gherkin::StepType::Then, "Then", "an outcome", 4)]),
            scenario(
                "Two",
                6,
                vec![step(gherkin::StepType::Given, "And", "a dangling conjunction", 7)],
            ),
        ]);
        let mut sink = Diagnostics::new();
        let records = extract_scenarios(
            source,
            &feature,
            "test.feature",
            "en",
            &BuiltinDialects,
            &mut sink,
        );

        // the second scenario must not inherit "Then" from the first
        assert!(records[1].steps.is_empty());
        assert_eq!(sink.len(), 2); // unresolved conjunction + skipped step
    }

    #[test]
    fn empty_scenario_title_is_diagnosed_but_kept() {
        let source = "\
Feature: Built

  Scenario:
    Given a page
";
        let feature = feature(vec![scenario(
            "",
            3,
            vec![step(gherkin::StepType::Given, "Given", "a page", 4)],
        )]);
        let mut sink = Diagnostics::new();
        let records = extract_scenarios(
            source,
            &feature,
            "test.feature",
            "en",
            &BuiltinDialects,
            &mut sink,
        );

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].steps.len(), 1);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn stacked_tags_anchor_at_the_first_tag_line() {
        let source = "\
Feature: Tags

  Scenario: Early
    Given a page

  @slow
  @nightly
  Scenario: Late
    Given a page
";
        let (records, _) = extract(source);

        assert_eq!(records[1].line, 5);
        assert_eq!(records[1].tags, vec!["slow", "nightly"]);
        assert!(records[1].code.starts_with("  @slow"));
        // the first scenario's slice ends where the tag block begins
        assert!(!records[0].code.contains("@slow"));
    }

    #[test]
    fn code_slice_is_keyword_translated() {
        let source = "\
# language: de
Funktionalität: Suche

  Szenario: Einfach
    Angenommen eine Seite
    Wenn ich suche
    Dann sehe ich Ergebnisse
";
        let feature =
            gherkin::Feature::parse(source, gherkin::GherkinEnv::new("de").unwrap()).unwrap();
        let mut sink = Diagnostics::new();
        let records = extract_scenarios(
            source,
            &feature,
            "german.feature",
            "de",
            &BuiltinDialects,
            &mut sink,
        );

        assert_eq!(records.len(), 1);
        assert!(records[0].code.contains("Given eine Seite"));
        assert!(records[0].code.contains("When ich suche"));
        assert!(records[0].code.contains("Then sehe ich Ergebnisse"));
        let kinds: Vec<StepKind> = records[0].steps.iter().map(|s| s.keyword).collect();
        assert_eq!(kinds, vec![StepKind::Given, StepKind::When, StepKind::Then]);
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        let feature = parse("Feature: X\n\n  Scenario: S\n    Given a page\n");
        let mut sink = Diagnostics::new();
        let records = extract_scenarios(
            "Feature: X\n\n  Scenario: S\n    Given a page\n",
            &feature,
            "x.feature",
            "zz",
            &BuiltinDialects,
            &mut sink,
        );
        assert_eq!(records[0].steps[0].keyword, StepKind::Given);
    }
}
