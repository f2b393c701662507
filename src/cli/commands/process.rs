//! Process command: upload to star-schema tables

use super::shared::{
    LoadedUpload, describe_filter, format_size, generated_at, load_configuration, load_upload,
    setup_logging,
};
use crate::Result;
use crate::app::models::StarSchema;
use crate::app::services::analytics::KpiStats;
use crate::app::services::star_schema::StarSchemaNormalizer;
use crate::app::services::table_export::{ExportSummary, TableExporter};
use crate::cli::args::{OutputFormat, ProcessArgs};
use colored::*;
use std::time::Instant;
use tracing::info;

/// Parse, filter, normalize and export one upload
pub fn run_process(args: &ProcessArgs) -> Result<()> {
    setup_logging(&args.input)?;
    args.input.validate()?;

    let start = Instant::now();
    let config = load_configuration(&args.input)?;
    let upload = load_upload(&args.input, &config)?;

    let kpis = KpiStats::compute(&upload.filtered, &config.analytics);
    let schema = StarSchemaNormalizer::new(config.analytics.unclassified_skill_type.as_str())
        .normalize(&upload.filtered);

    let exporter = TableExporter::new(config.export.clone());
    let export = exporter.export_all(&schema, &args.output_dir)?;

    info!("Processing finished in {:.2?}", start.elapsed());

    match args.input.output_format {
        OutputFormat::Human => print_human_report(args, &upload, &kpis, &schema, &export),
        OutputFormat::Json => print_json_report(args, &upload, &kpis, &schema, &export)?,
    }

    Ok(())
}

fn print_human_report(
    args: &ProcessArgs,
    upload: &LoadedUpload,
    kpis: &KpiStats,
    schema: &StarSchema,
    export: &ExportSummary,
) {
    println!("\n{}", "IDP Processing Complete".bright_green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Input: {}", args.input.input_path.display());
    println!("Filter: {}", describe_filter(&upload.filter));
    println!(
        "Records: {} parsed, {} selected",
        upload.records.len().to_string().bright_white().bold(),
        upload.filtered.len().to_string().bright_white().bold()
    );

    let stats = &upload.parse_stats;
    if stats.codes_generated > 0 {
        println!(
            "{} {} rows had no code and received a generated one",
            "Note:".yellow(),
            stats.codes_generated
        );
    }
    if stats.progress_defaulted > 0 {
        println!(
            "{} {} progress values could not be read and were set to 0",
            "Note:".yellow(),
            stats.progress_defaulted
        );
    }
    if !stats.ignored_headers.is_empty() {
        println!(
            "{} ignored columns: {}",
            "Note:".yellow(),
            stats.ignored_headers.join(", ")
        );
    }

    println!("\n{}", "Indicators".bright_cyan().bold());
    println!("   • Average progress: {:.1}%", kpis.avg_progress);
    println!(
        "   • Completed: {:.1}% of {} activities",
        kpis.completed_percentage, kpis.total_activities
    );
    println!("   • Collaborators: {}", kpis.unique_collaborators);
    println!(
        "   • At risk: {}",
        kpis.critical_risk_count.to_string().bright_red().bold()
    );
    println!("   • Top category: {}", kpis.top_category);
    println!("   • Top country: {}", kpis.top_country);
    println!("   • Best completion: {}", kpis.top_completion_country);

    println!("\n{}", "Star Schema".bright_cyan().bold());
    for table in schema.tables() {
        println!(
            "   • {:<18} {:>6} rows  (key: {})",
            table.name, table.row_count, table.key_column
        );
    }

    if !export.written.is_empty() {
        println!("\n{}", "Output Files".bright_cyan().bold());
        for table in &export.written {
            println!(
                "   • {}: {}",
                table.path.display(),
                format_size(table.bytes)
            );
        }
    }
    if !export.skipped.is_empty() {
        println!(
            "{} skipped empty tables: {}",
            "Warning:".bright_yellow().bold(),
            export.skipped.join(", ")
        );
    }
    println!();
}

fn print_json_report(
    args: &ProcessArgs,
    upload: &LoadedUpload,
    kpis: &KpiStats,
    schema: &StarSchema,
    export: &ExportSummary,
) -> Result<()> {
    let report = serde_json::json!({
        "generated_at": generated_at(),
        "input": args.input.input_path.display().to_string(),
        "filter": upload.filter,
        "records_parsed": upload.records.len(),
        "records_selected": upload.filtered.len(),
        "parse_stats": upload.parse_stats,
        "kpis": kpis,
        "tables": schema.tables(),
        "output_dir": args.output_dir.display().to_string(),
        "export": export,
        "total_output_size_bytes": export.total_bytes(),
    });

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
