//! Command dispatch.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;

use super::args::AnalyzeCommand;
use super::exit_status::ExitStatus;
use super::report;
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};
use crate::core::{AnalyzeOptions, BuiltinDialects, GherkinParser, analyze};

pub fn run_analyze(cmd: AnalyzeCommand) -> Result<ExitStatus> {
    let config = Config::load(Path::new("."))?;
    let work_dir = cmd
        .common
        .dir
        .unwrap_or_else(|| PathBuf::from(&config.work_dir));
    let pattern = cmd.pattern.unwrap_or_else(|| config.pattern.clone());

    let options = AnalyzeOptions { pattern, work_dir };
    let analysis = analyze(&options, &GherkinParser, &BuiltinDialects)?;

    if cmd.json {
        println!("{}", serde_json::to_string_pretty(&analysis.features)?);
    } else {
        report::print_analysis(&analysis, cmd.common.verbose)?;
    }

    if analysis.error_count() > 0 {
        Ok(ExitStatus::Failure)
    } else {
        Ok(ExitStatus::Success)
    }
}

pub fn run_init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() {
        anyhow::bail!("{} already exists", CONFIG_FILE_NAME);
    }
    fs::write(config_path, default_config_json()?)?;
    println!("Created {}", CONFIG_FILE_NAME);
    Ok(ExitStatus::Success)
}
