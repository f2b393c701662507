use anyhow::Context;
use clap::Parser;
use idp_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        process::exit(0);
    };

    let result = commands::run(command).context("IDP processing failed");

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("IDP Processor - Individual Development Plan Normalizer");
    println!("======================================================");
    println!();
    println!("Turn IDP spreadsheet exports (CSV, comma or semicolon delimited)");
    println!("into KPI reports and a star schema of CSV tables for SQL or BI tools.");
    println!();
    println!("USAGE:");
    println!("    idp-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    process     Parse an upload and export the star schema (main command)");
    println!("    stats       Print KPI statistics and chart breakdowns");
    println!("    template    Write the upload template");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Export all tables for one country:");
    println!("    idp-processor process -i idp_2025.csv -o star_schema --country PE");
    println!();
    println!("    # Indicators as JSON, including the insight request payload:");
    println!("    idp-processor stats -i idp_2025.csv --insight --format json");
    println!();
    println!("    # Print the template to stdout:");
    println!("    idp-processor template -o -");
    println!();
    println!("For detailed help on any command, use:");
    println!("    idp-processor <COMMAND> --help");
}
