//! Configuration management and validation.
//!
//! Provides the rule tables the parser works from (header phrases, country
//! fragments, skill keyword sets), analytics thresholds and export settings.
//! Every section has defaults, so a TOML file only needs the keys it changes.

use crate::app::models::FieldId;
use crate::constants::{
    self, COMPLETED_STATUS_KEYWORDS, COUNTRY_RULES, DEFAULT_CATEGORY, DEFAULT_RISK_THRESHOLD,
    DEFAULT_STATUS, FALLBACK_CODE_PREFIX, PENDING_STATUS_KEYWORDS, UNCLASSIFIED_SKILL_TYPE,
    skill_types,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Header phrases that identify one flat-record field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeaderRule {
    pub field: FieldId,
    /// Lower-case fragments; a header cell matches if it contains any of them
    pub phrases: Vec<String>,
}

/// Upper-case fragments that map a country value to a code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRule {
    pub code: String,
    pub fragments: Vec<String>,
}

/// Competency keywords that select a skill-type label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRule {
    pub label: String,
    pub keywords: Vec<String>,
}

/// Rule tables and defaults owned by the record parser
///
/// Substituting a different instance changes locale behaviour without
/// touching parsing logic. All rule lists are evaluated in order and the
/// first hit wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserRules {
    pub header_rules: Vec<HeaderRule>,
    pub country_rules: Vec<CountryRule>,
    pub skill_rules: Vec<SkillRule>,
    /// Label used when no skill rule matches
    pub fallback_skill_type: String,
    pub default_status: String,
    pub default_category: String,
    pub fallback_code_prefix: String,
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

impl Default for ParserRules {
    fn default() -> Self {
        let header = |field: FieldId, phrases: &[&str]| HeaderRule {
            field,
            phrases: strings(phrases),
        };

        Self {
            header_rules: vec![
                header(FieldId::Code, &["código", "codigo"]),
                header(FieldId::Name, &["nombre"]),
                header(FieldId::Manager, &["jefe"]),
                header(FieldId::Country, &["país", "pais"]),
                header(FieldId::Function, &["función", "funcion", "cargo"]),
                header(FieldId::Objective, &["objetivo de desarrollo", "objetivo"]),
                header(
                    FieldId::Competency,
                    &["competencia a desarrollar", "competencia"],
                ),
                header(
                    FieldId::SkillType,
                    &["tipo habilidad", "tipo de habilidad", "skill type"],
                ),
                header(FieldId::Description, &["descripción", "descripcion"]),
                header(FieldId::StartDate, &["fecha inicio", "inicio"]),
                header(FieldId::EndDate, &["fecha fin", "fin"]),
                header(FieldId::Status, &["estatus", "estado"]),
                header(FieldId::Category, &["categoría", "categoria"]),
                header(FieldId::Progress, &["progreso", "%"]),
            ],
            country_rules: COUNTRY_RULES
                .iter()
                .map(|(code, fragments)| CountryRule {
                    code: code.to_string(),
                    fragments: strings(fragments),
                })
                .collect(),
            skill_rules: vec![
                SkillRule {
                    label: skill_types::CLOUD_DEVOPS.to_string(),
                    keywords: strings(skill_types::CLOUD_KEYWORDS),
                },
                SkillRule {
                    label: skill_types::SOFT_SKILLS_AGILE.to_string(),
                    keywords: strings(skill_types::SOFT_KEYWORDS),
                },
            ],
            fallback_skill_type: skill_types::TECHNICAL_CORE.to_string(),
            default_status: DEFAULT_STATUS.to_string(),
            default_category: DEFAULT_CATEGORY.to_string(),
            fallback_code_prefix: FALLBACK_CODE_PREFIX.to_string(),
        }
    }
}

impl ParserRules {
    /// Validate rule tables for obvious mistakes
    pub fn validate(&self) -> Result<()> {
        if self.header_rules.is_empty() {
            return Err(Error::configuration(
                "At least one header rule is required".to_string(),
            ));
        }

        for rule in &self.header_rules {
            if rule.phrases.iter().any(|p| p.trim().is_empty()) {
                return Err(Error::configuration(format!(
                    "Header rule for '{}' contains an empty phrase",
                    rule.field
                )));
            }
            if rule.phrases.iter().any(|p| p.to_lowercase() != *p) {
                return Err(Error::configuration(format!(
                    "Header phrases for '{}' must be lower-case",
                    rule.field
                )));
            }
        }

        for rule in &self.country_rules {
            if rule.code.trim().is_empty() || rule.fragments.iter().any(|f| f.is_empty()) {
                return Err(Error::configuration(format!(
                    "Country rule '{}' has an empty code or fragment",
                    rule.code
                )));
            }
        }

        for rule in &self.skill_rules {
            if rule.label.trim().is_empty() || rule.keywords.iter().any(|k| k.is_empty()) {
                return Err(Error::configuration(format!(
                    "Skill rule '{}' has an empty label or keyword",
                    rule.label
                )));
            }
        }

        if self.fallback_skill_type.trim().is_empty() {
            return Err(Error::configuration(
                "Fallback skill type cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Analytics thresholds and keyword lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Progress strictly below this value is at risk
    pub risk_threshold: f64,
    /// Lower-case status fragments meaning "done"
    pub completed_keywords: Vec<String>,
    /// Lower-case status fragments meaning "not started"
    pub pending_keywords: Vec<String>,
    /// Dimension member for records without a skill type
    pub unclassified_skill_type: String,
    /// Entries in the collaborator ranking
    pub ranking_limit: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            risk_threshold: DEFAULT_RISK_THRESHOLD,
            completed_keywords: strings(COMPLETED_STATUS_KEYWORDS),
            pending_keywords: strings(PENDING_STATUS_KEYWORDS),
            unclassified_skill_type: UNCLASSIFIED_SKILL_TYPE.to_string(),
            ranking_limit: constants::DEFAULT_RANKING_LIMIT,
        }
    }
}

impl AnalyticsConfig {
    /// True if the status contains a completed keyword (case-insensitive)
    pub fn is_completed_status(&self, status: &str) -> bool {
        let lower = status.to_lowercase();
        self.completed_keywords.iter().any(|k| lower.contains(k))
    }

    /// True if the status contains a pending keyword (case-insensitive)
    pub fn is_pending_status(&self, status: &str) -> bool {
        let lower = status.to_lowercase();
        self.pending_keywords.iter().any(|k| lower.contains(k))
    }

    pub fn validate(&self) -> Result<()> {
        if !self.risk_threshold.is_finite() {
            return Err(Error::configuration(
                "Risk threshold must be a finite number".to_string(),
            ));
        }
        if self.unclassified_skill_type.trim().is_empty() {
            return Err(Error::configuration(
                "Unclassified skill type label cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Table export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Prefix exported CSV with a UTF-8 byte-order mark (spreadsheet friendly)
    pub include_bom: bool,
    /// Field delimiter for exported tables
    pub delimiter: char,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            include_bom: true,
            delimiter: ',',
        }
    }
}

impl ExportConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() || self.delimiter == '"' || self.delimiter == '\n' {
            return Err(Error::configuration(format!(
                "Unsupported export delimiter '{}'",
                self.delimiter.escape_default()
            )));
        }
        Ok(())
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub parser: ParserRules,
    pub analytics: AnalyticsConfig,
    pub export: ExportConfig,
}

impl Config {
    /// Default configuration file location (`<config_dir>/idp-processor/config.toml`)
    pub fn default_config_path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| {
                dir.join(constants::CONFIG_DIR_NAME)
                    .join(constants::CONFIG_FILENAME)
            })
            .ok_or_else(|| {
                Error::configuration("Could not determine user configuration directory")
            })
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str, origin: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config_parse(origin, e))
    }

    /// Load configuration layered as defaults <- file
    ///
    /// With no explicit file, the default location is used if it exists.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let default_path = match config_file {
            Some(_) => None,
            None => Self::default_config_path().ok().filter(|p| p.exists()),
        };

        let config = match config_file.or(default_path.as_deref()) {
            Some(path) => {
                info!("Using config file: {}", path.display());
                let content = std::fs::read_to_string(path).map_err(|e| {
                    Error::io(format!("Failed to read config file {}", path.display()), e)
                })?;
                Self::from_toml_str(&content, &path.display().to_string())?
            }
            None => {
                debug!("No config file found, using built-in rules");
                Self::default()
            }
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate every section
    pub fn validate(&self) -> Result<()> {
        self.parser.validate()?;
        self.analytics.validate()?;
        self.export.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.parser.header_rules.len(), 14);
        assert_eq!(config.parser.header_rules[0].field, FieldId::Code);
        assert_eq!(config.parser.skill_rules.len(), 2);
        assert_eq!(config.analytics.risk_threshold, 40.0);
        assert!(config.export.include_bom);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let toml = r#"
[analytics]
risk_threshold = 25.0

[export]
include_bom = false
"#;
        let config = Config::from_toml_str(toml, "inline").unwrap();
        assert_eq!(config.analytics.risk_threshold, 25.0);
        assert!(!config.export.include_bom);
        assert_eq!(config.parser, ParserRules::default());
        assert_eq!(config.analytics.ranking_limit, 7);
    }

    #[test]
    fn test_toml_overrides_country_rules() {
        let toml = r#"
[parser]
country_rules = [
    { code = "MX", fragments = ["MEX"] },
]
"#;
        let config = Config::from_toml_str(toml, "inline").unwrap();
        assert_eq!(config.parser.country_rules.len(), 1);
        assert_eq!(config.parser.country_rules[0].code, "MX");
        // Other parser tables fall back to the built-in ones
        assert_eq!(config.parser.header_rules.len(), 14);
    }

    #[test]
    fn test_invalid_toml_reports_origin() {
        let err = Config::from_toml_str("[analytics\nrisk_threshold = ", "broken.toml").unwrap_err();
        assert!(matches!(err, Error::ConfigParse { ref path, .. } if path == "broken.toml"));
    }

    #[test]
    fn test_validate_rejects_upper_case_header_phrase() {
        let mut rules = ParserRules::default();
        rules.header_rules[0].phrases.push("CODE".to_string());
        assert!(matches!(
            rules.validate(),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_quote_delimiter() {
        let export = ExportConfig {
            include_bom: true,
            delimiter: '"',
        };
        assert!(export.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[analytics]\npending_keywords = [\"todo\"]").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.analytics.pending_keywords, vec!["todo".to_string()]);
        assert!(config.analytics.is_pending_status("TODO later"));
        assert!(!config.analytics.is_pending_status("Pendiente"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = Config::load(Some(Path::new("/definitely/not/here.toml"))).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
    }

    #[test]
    fn test_status_keyword_matching() {
        let analytics = AnalyticsConfig::default();
        assert!(analytics.is_completed_status("Completado"));
        assert!(analytics.is_completed_status("COMPLETED"));
        assert!(analytics.is_pending_status("Pendiente"));
        assert!(analytics.is_pending_status("Pending"));
        assert!(!analytics.is_pending_status("En Progreso"));
    }
}
