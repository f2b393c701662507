//! Template command: write the upload template

use crate::Result;
use crate::app::services::template::{template_csv, write_template};
use crate::cli::args::TemplateArgs;
use colored::*;

pub fn run_template(args: &TemplateArgs) -> Result<()> {
    if args.to_stdout() {
        println!("{}", template_csv());
        return Ok(());
    }

    let bytes = write_template(&args.output)?;
    println!(
        "{} {} ({} bytes)",
        "Template written:".bright_green().bold(),
        args.output.display(),
        bytes
    );
    Ok(())
}
