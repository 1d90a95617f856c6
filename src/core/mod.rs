//! Core analysis engine: dialect normalization and scenario extraction.

pub mod dialect;
pub mod feature;
pub mod keyword;
pub mod parser;
pub mod record;
pub mod runner;
pub mod scenario;
pub mod translate;

pub use dialect::{BuiltinDialects, Dialect, DialectRepository, KeywordCategory};
pub use feature::build_feature;
pub use keyword::{KeywordResolver, StepKind};
pub use parser::{FeatureParser, GherkinParser, ParsedFeature};
pub use record::{FeatureRecord, ScenarioRecord, StepRecord};
pub use runner::{Analysis, AnalyzeOptions, analyze};
pub use scenario::extract_scenarios;
pub use translate::translate_line;
