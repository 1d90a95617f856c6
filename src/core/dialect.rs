//! Gherkin dialect tables.
//!
//! A dialect maps each Gherkin keyword category to the ordered list of
//! localized keyword literals recognised in that language. The builtin
//! repository is backed by an embedded subset of the official Gherkin
//! language tables and is parsed once on first use.

use std::{collections::HashMap, sync::LazyLock};

use serde::Deserialize;

/// The wildcard step keyword. It belongs to every step category and must
/// never be chosen as a canonical replacement token.
pub const WILDCARD_KEYWORD: &str = "* ";

/// A Gherkin keyword category.
///
/// Step categories (`Given`..`But`) drive keyword resolution; the block
/// categories only participate in line translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Feature,
    Background,
    Rule,
    Scenario,
    ScenarioOutline,
    Examples,
    Given,
    When,
    Then,
    And,
    But,
}

/// Keyword table for one language.
///
/// Step keyword literals carry their trailing separator (e.g. `"Given "`),
/// block keywords do not (the source places a `:` after them). Literals may
/// be prefixes of one another; consumers must apply longest-match rules.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dialect {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub native: String,
    pub feature: Vec<String>,
    pub background: Vec<String>,
    #[serde(default)]
    pub rule: Vec<String>,
    pub scenario: Vec<String>,
    pub scenario_outline: Vec<String>,
    pub examples: Vec<String>,
    pub given: Vec<String>,
    pub when: Vec<String>,
    pub then: Vec<String>,
    pub and: Vec<String>,
    pub but: Vec<String>,
}

impl Dialect {
    /// Literals for one category.
    pub fn keywords(&self, category: KeywordCategory) -> &[String] {
        match category {
            KeywordCategory::Feature => &self.feature,
            KeywordCategory::Background => &self.background,
            KeywordCategory::Rule => &self.rule,
            KeywordCategory::Scenario => &self.scenario,
            KeywordCategory::ScenarioOutline => &self.scenario_outline,
            KeywordCategory::Examples => &self.examples,
            KeywordCategory::Given => &self.given,
            KeywordCategory::When => &self.when,
            KeywordCategory::Then => &self.then,
            KeywordCategory::And => &self.and,
            KeywordCategory::But => &self.but,
        }
    }

    /// All categories with their literals, in stable declaration order.
    pub fn entries(&self) -> [(KeywordCategory, &[String]); 11] {
        [
            (KeywordCategory::Feature, self.feature.as_slice()),
            (KeywordCategory::Background, self.background.as_slice()),
            (KeywordCategory::Rule, self.rule.as_slice()),
            (KeywordCategory::Scenario, self.scenario.as_slice()),
            (KeywordCategory::ScenarioOutline, self.scenario_outline.as_slice()),
            (KeywordCategory::Examples, self.examples.as_slice()),
            (KeywordCategory::Given, self.given.as_slice()),
            (KeywordCategory::When, self.when.as_slice()),
            (KeywordCategory::Then, self.then.as_slice()),
            (KeywordCategory::And, self.and.as_slice()),
            (KeywordCategory::But, self.but.as_slice()),
        ]
    }

    /// The canonical replacement token for a category: the first literal
    /// that is not the wildcard sentinel.
    pub fn canonical_keyword(&self, category: KeywordCategory) -> Option<&str> {
        self.keywords(category)
            .iter()
            .map(String::as_str)
            .find(|k| *k != WILDCARD_KEYWORD)
    }
}

/// Read-only lookup from language code to keyword table.
///
/// Injected wherever dialect data is needed so callers can substitute their
/// own tables; `BuiltinDialects` is the default implementation.
pub trait DialectRepository: Sync {
    /// Dialect for a language code, if supported.
    fn lookup(&self, language: &str) -> Option<&Dialect>;

    /// The canonical English table used as translation target.
    fn english(&self) -> &Dialect;
}

static DIALECTS: LazyLock<HashMap<String, Dialect>> = LazyLock::new(|| {
    serde_json::from_str(include_str!("gherkin-languages.json"))
        .expect("embedded gherkin-languages.json parses")
});

static ENGLISH: LazyLock<&'static Dialect> = LazyLock::new(|| {
    DIALECTS
        .get("en")
        .expect("embedded dialect table includes English")
});

/// Dialect repository backed by the embedded language tables.
pub struct BuiltinDialects;

impl BuiltinDialects {
    /// All embedded dialects as `(code, dialect)` pairs.
    pub fn entries() -> impl Iterator<Item = (&'static str, &'static Dialect)> {
        DIALECTS.iter().map(|(code, dialect)| (code.as_str(), dialect))
    }
}

impl DialectRepository for BuiltinDialects {
    fn lookup(&self, language: &str) -> Option<&Dialect> {
        DIALECTS.get(language)
    }

    fn english(&self) -> &Dialect {
        *ENGLISH
    }
}
