//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `analyze`: Analyze feature files and print normalized scenario data
//! - `init`: Initialize cukescan configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Working directory (overrides config file)
    #[arg(long)]
    pub dir: Option<PathBuf>,

    /// Print diagnostics alongside the report
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct AnalyzeCommand {
    /// Glob pattern for feature files (overrides config file)
    pub pattern: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Print records as JSON instead of the human report
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze Gherkin feature files and print normalized scenario data
    Analyze(AnalyzeCommand),
    /// Initialize a new .cukescanrc.json configuration file
    Init,
}
