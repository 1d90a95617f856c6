//! Keyword translation of raw source lines.

use crate::core::dialect::{Dialect, KeywordCategory};

/// Rewrite one source line, replacing a leading localized keyword with its
/// canonical English equivalent.
///
/// Detection runs on the trimmed line and scans every category of the
/// dialect; where literals are prefixes of one another the longest match
/// wins. Substitution then replaces the first occurrence of the matched
/// literal in the untrimmed line. Detection is anchored to the line start
/// while substitution is not; an earlier identical substring (e.g. inside
/// quoted step data) can therefore be replaced instead of the leading
/// keyword. That asymmetry is intentional and kept.
pub fn translate_line(line: &str, dialect: &Dialect, english: &Dialect) -> String {
    let trimmed = line.trim();

    let mut best: Option<(KeywordCategory, &str)> = None;
    for (category, literals) in dialect.entries() {
        for literal in literals {
            if trimmed.starts_with(literal.as_str())
                && best.is_none_or(|(_, b)| literal.len() > b.len())
            {
                best = Some((category, literal));
            }
        }
    }

    let Some((category, literal)) = best else {
        return line.to_string();
    };
    let Some(replacement) = english.canonical_keyword(category) else {
        return line.to_string();
    };
    line.replacen(literal, replacement, 1)
}
