//! Cukescan - Gherkin feature-file analyzer
//!
//! Cukescan is a CLI tool and library that ingests Gherkin feature files in
//! any supported natural-language dialect and produces a normalized,
//! structured representation of features, scenarios and steps suitable for
//! export to a test-management system. Localized step keywords are resolved
//! to canonical English categories, source lines are keyword-translated,
//! and each scenario carries its verbatim source slice.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Analysis engine (dialects, keyword resolution, extraction)
//! - `diagnostics`: Diagnostic collection, separate from returned records

pub mod cli;
pub mod config;
pub mod core;
pub mod diagnostics;
