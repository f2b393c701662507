//! Command implementations for the IDP processor CLI
//!
//! Each command is implemented in its own module:
//! - `process`: parse, filter, normalize and export the star schema
//! - `stats`: KPI statistics, chart breakdowns and the insight payload
//! - `template`: write the upload template

pub mod process;
pub mod shared;
pub mod stats;
pub mod template;

pub use shared::LoadedUpload;

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch to the handler for the given subcommand
pub fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Process(process_args) => process::run_process(&process_args),
        Commands::Stats(stats_args) => stats::run_stats(&stats_args),
        Commands::Template(template_args) => template::run_template(&template_args),
    }
}
