//! Shared components for CLI commands
//!
//! Logging setup, configuration loading and upload reading used by every
//! command that works on an IDP export.

use crate::app::models::FlatRecord;
use crate::app::services::analytics::{FilterOptions, RecordFilter};
use crate::app::services::record_parser::{
    ParseStats, RandomCodeGenerator, RecordParser,
};
use crate::cli::args::InputArgs;
use crate::config::Config;
use crate::{Error, Result};
use chrono::{SecondsFormat, Utc};
use tracing::{debug, info};

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags.
pub fn setup_logging(args: &InputArgs) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("idp_processor={}", log_level)));

    let layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_writer(std::io::stderr);

    let init_result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.compact())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(layer.with_timer(fmt::time::uptime()))
            .try_init()
    };

    init_result
        .map_err(|e| Error::configuration(format!("Failed to initialize logging: {}", e)))?;

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration from `--config` or the default location
pub fn load_configuration(args: &InputArgs) -> Result<Config> {
    info!("Loading configuration");
    Config::load(args.config_file.as_deref())
}

/// Parser for the loaded rules, seeded when `--seed` was given
pub fn create_parser(config: &Config, seed: Option<u64>) -> RecordParser {
    match seed {
        Some(seed) => {
            debug!("Using seeded fallback codes (seed {})", seed);
            RecordParser::with_code_generator(
                config.parser.clone(),
                Box::new(RandomCodeGenerator::seeded(seed)),
            )
        }
        None => RecordParser::new(config.parser.clone()),
    }
}

/// One upload after parsing and filtering
#[derive(Debug, Clone)]
pub struct LoadedUpload {
    /// Every parsed record
    pub records: Vec<FlatRecord>,
    /// Records selected by the filter
    pub filtered: Vec<FlatRecord>,
    /// Filter actually applied
    pub filter: RecordFilter,
    /// Filter options for the current country selection
    pub options: FilterOptions,
    pub parse_stats: ParseStats,
}

/// Parse the input file and apply the country/manager filter
///
/// An upload that yields no records is an error. A manager that does not
/// occur in the selected country is dropped from the filter.
pub fn load_upload(args: &InputArgs, config: &Config) -> Result<LoadedUpload> {
    let mut parser = create_parser(config, args.seed);
    let result = parser.parse_file(&args.input_path)?;

    if result.is_empty() {
        return Err(Error::no_records(args.input_path.display().to_string()));
    }

    let country = args.country_filter();
    let options = FilterOptions::from_records(&result.records, country.as_deref());
    let filter = RecordFilter::new(country, args.manager.clone()).reconcile(&options);
    let filtered = filter.apply(&result.records);

    info!(
        "Loaded {} records, {} after filtering",
        result.records.len(),
        filtered.len()
    );

    Ok(LoadedUpload {
        records: result.records,
        filtered,
        filter,
        options,
        parse_stats: result.stats,
    })
}

/// Current time for report headers
pub fn generated_at() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Format a byte count in human-readable form
pub fn format_size(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

/// Describe a filter for report headers
pub fn describe_filter(filter: &RecordFilter) -> String {
    format!(
        "country: {}, manager: {}",
        filter.country.as_deref().unwrap_or("all"),
        filter.manager.as_deref().unwrap_or("all")
    )
}
