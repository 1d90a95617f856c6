//! Step keyword resolution.
//!
//! Localized step keywords are resolved to canonical English categories.
//! Conjunction keywords (the localized "And"/"But") carry no category of
//! their own: they inherit the category of the closest preceding resolved
//! primary keyword within the same scenario.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::dialect::Dialect;
use crate::diagnostics::{Diagnostic, Diagnostics};

/// Canonical step category. Conjunctions are resolution-time only and never
/// appear in output records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    Given,
    When,
    Then,
}

impl StepKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            StepKind::Given => "Given",
            StepKind::When => "When",
            StepKind::Then => "Then",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stateful keyword resolver for one scenario.
///
/// Create a fresh resolver per scenario: the resolution state never crosses
/// scenario boundaries.
pub struct KeywordResolver<'a> {
    dialect: &'a Dialect,
    previous: Option<StepKind>,
}

impl<'a> KeywordResolver<'a> {
    pub fn new(dialect: &'a Dialect) -> Self {
        Self {
            dialect,
            previous: None,
        }
    }

    /// Resolve one raw keyword token to its canonical category.
    ///
    /// Primary keywords resolve to their own category and become the new
    /// inheritance target. Conjunctions return the previous category
    /// unchanged, or `None` (with a diagnostic) when no primary keyword has
    /// resolved yet. Unknown tokens return `None` with a diagnostic. The
    /// caller must drop the step on `None`.
    pub fn resolve(
        &mut self,
        token: &str,
        file: &str,
        line: usize,
        sink: &mut Diagnostics,
    ) -> Option<StepKind> {
        let token = token.trim();
        let dialect = self.dialect;

        for (kind, literals) in [
            (StepKind::Given, &dialect.given),
            (StepKind::When, &dialect.when),
            (StepKind::Then, &dialect.then),
        ] {
            if contains_keyword(literals, token) {
                self.previous = Some(kind);
                return Some(kind);
            }
        }

        if contains_keyword(&dialect.and, token) || contains_keyword(&dialect.but, token) {
            if self.previous.is_none() {
                sink.push(Diagnostic::unresolved_conjunction(token, file, line));
            }
            return self.previous;
        }

        sink.push(Diagnostic::unknown_keyword(token, file, line));
        None
    }
}

// Exact membership, not prefix. Tokens arrive trimmed from the parser while
// the table literals keep their trailing separator, so both sides compare
// trimmed.
fn contains_keyword(literals: &[String], token: &str) -> bool {
    literals.iter().any(|literal| literal.trim() == token)
}
