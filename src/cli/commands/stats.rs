//! Stats command: KPI statistics and chart breakdowns

use super::shared::{
    LoadedUpload, describe_filter, generated_at, load_configuration, load_upload, setup_logging,
};
use crate::Result;
use crate::app::services::analytics::{
    Breakdowns, HeatLevel, InsightRequest, KpiStats, select_insight_dataset,
};
use crate::cli::args::{OutputFormat, StatsArgs};
use colored::*;
use tracing::debug;

pub fn run_stats(args: &StatsArgs) -> Result<()> {
    setup_logging(&args.input)?;
    args.input.validate()?;

    let config = load_configuration(&args.input)?;
    let upload = load_upload(&args.input, &config)?;

    let kpis = KpiStats::compute(&upload.filtered, &config.analytics);
    let breakdowns = Breakdowns::compute_with_limit(&upload.filtered, config.analytics.ranking_limit);

    let insight = if args.insight {
        let dataset = select_insight_dataset(&upload.filtered, &upload.records);
        debug!("Insight request built from {} records", dataset.len());
        Some(InsightRequest::from_records(dataset, &config.analytics))
    } else {
        None
    };

    match args.input.output_format {
        OutputFormat::Human => {
            print_human_report(&upload, &kpis, &breakdowns);
            if let Some(request) = &insight {
                println!("{}", "Insight Request".bright_cyan().bold());
                println!("{}\n", request.to_json_pretty()?);
            }
        }
        OutputFormat::Json => {
            let report = serde_json::json!({
                "generated_at": generated_at(),
                "input": args.input.input_path.display().to_string(),
                "filter": upload.filter,
                "filter_options": upload.options,
                "kpis": kpis,
                "breakdowns": breakdowns,
                "insight_request": insight,
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn print_human_report(upload: &LoadedUpload, kpis: &KpiStats, breakdowns: &Breakdowns) {
    println!("\n{}", "IDP Indicators".bright_green().bold());
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Filter: {}", describe_filter(&upload.filter));
    println!(
        "Countries available: {}",
        upload.options.countries.join(", ")
    );
    println!("   • Average progress: {:.1}%", kpis.avg_progress);
    println!(
        "   • Completed: {:.1}% of {} activities",
        kpis.completed_percentage, kpis.total_activities
    );
    println!("   • Collaborators: {}", kpis.unique_collaborators);
    println!(
        "   • At risk (<40%): {}",
        kpis.critical_risk_count.to_string().bright_red().bold()
    );
    println!("   • Top category: {}", kpis.top_category);
    println!("   • Top country: {}", kpis.top_country);
    println!("   • Best completion: {}", kpis.top_completion_country);

    println!("\n{}", "Categories".bright_cyan().bold());
    for category in &breakdowns.category_distribution {
        println!("   • {:<30} {:>5}", category.name, category.count);
    }

    if !breakdowns.top_competencies.is_empty() {
        println!("\n{}", "Most Requested Competencies".bright_cyan().bold());
        for competency in &breakdowns.top_competencies {
            println!("   • {:<30} {:>5}", competency.name, competency.count);
        }
    }

    println!("\n{}", "Skill Mix by Country".bright_cyan().bold());
    println!(
        "   {:<8} {:>10} {:>8} {:>12}",
        "Country", "Technical", "Cloud", "Soft Skills"
    );
    for mix in &breakdowns.skill_mix_by_country {
        println!(
            "   {:<8} {:>10} {:>8} {:>12}",
            mix.country, mix.technical, mix.cloud, mix.soft_skills
        );
    }

    println!("\n{}", "Progress Heatmap".bright_cyan().bold());
    for row in &breakdowns.progress_heatmap {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(|cell| {
                let value = format!("{:>5.1}% ({})", cell.average, cell.count);
                format!("{}: {}", cell.bucket, colorize_level(&value, cell.level))
            })
            .collect();
        println!("   {:<6} {}", row.country, cells.join(" | "));
    }

    println!("\n{}", "Top Collaborators".bright_cyan().bold());
    for (position, rank) in breakdowns.collaborator_ranking.iter().enumerate() {
        println!(
            "   {}. {:<16} {:>4}%  {}",
            position + 1,
            rank.display_name,
            rank.progress,
            rank.country
        );
    }
    println!();
}

fn colorize_level(value: &str, level: HeatLevel) -> ColoredString {
    match level {
        HeatLevel::Empty => value.dimmed(),
        HeatLevel::Critical => value.red(),
        HeatLevel::Moderate => value.yellow(),
        HeatLevel::OnTrack => value.blue(),
        HeatLevel::Complete => value.green(),
    }
}
