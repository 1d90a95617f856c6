//! Command-line interface layer.

use anyhow::Result;

mod args;
mod exit_status;
mod report;
mod run;

pub use args::{AnalyzeCommand, Arguments, Command, CommonArgs};
pub use exit_status::ExitStatus;
pub use report::{print_analysis, print_analysis_to};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Analyze(cmd)) => run::run_analyze(cmd),
        Some(Command::Init) => run::run_init(),
        None => Ok(ExitStatus::Success),
    }
}
