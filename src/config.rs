//! Configuration file handling.
//!
//! Settings come from an optional `jobstat.toml`; command-line flags
//! override individual values afterwards.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "jobstat.toml";

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub salary: SalaryConfig,

    #[serde(default)]
    pub skills: SkillsConfig,

    #[serde(default)]
    pub ramp: RampConfig,

    #[serde(default)]
    pub columns: ColumnsConfig,

    #[serde(default)]
    pub dataset: DatasetConfig,
}

/// Mean-salary aggregation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryConfig {
    /// Column holding the job title to group by.
    #[serde(default = "default_grouping_field")]
    pub grouping_field: String,

    /// Numeric column averaged per group.
    #[serde(default = "default_value_field")]
    pub value_field: String,

    /// Column whose most common value is named in the chart subtitle.
    #[serde(default = "default_industry_field")]
    pub industry_field: String,
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            grouping_field: default_grouping_field(),
            value_field: default_value_field(),
            industry_field: default_industry_field(),
        }
    }
}

fn default_grouping_field() -> String {
    "job_title".to_string()
}

fn default_value_field() -> String {
    "salary_usd".to_string()
}

fn default_industry_field() -> String {
    "industry".to_string()
}

/// Skill frequency settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsConfig {
    #[serde(default = "default_tokens_field")]
    pub tokens_field: String,

    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Number of skills shown; colors are still fitted on all of them.
    #[serde(default = "default_max_words")]
    pub max_words: usize,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            tokens_field: default_tokens_field(),
            delimiter: default_delimiter(),
            max_words: default_max_words(),
        }
    }
}

fn default_tokens_field() -> String {
    "required_skills".to_string()
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_max_words() -> usize {
    100
}

/// Truncated color ramp settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampConfig {
    #[serde(default = "default_ramp_name")]
    pub base_ramp_name: String,

    #[serde(default)]
    pub minval: f64,

    /// 0.85 drops inferno's pale yellow top.
    #[serde(default = "default_maxval")]
    pub maxval: f64,

    #[serde(default = "default_resolution")]
    pub resolution: usize,
}

impl Default for RampConfig {
    fn default() -> Self {
        Self {
            base_ramp_name: default_ramp_name(),
            minval: 0.0,
            maxval: default_maxval(),
            resolution: default_resolution(),
        }
    }
}

fn default_ramp_name() -> String {
    "inferno".to_string()
}

fn default_maxval() -> f64 {
    0.85
}

fn default_resolution() -> usize {
    256
}

/// Column renames applied right after loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnsConfig {
    /// `old_name = "new_name"` pairs.
    #[serde(default)]
    pub rename: HashMap<String, String>,
}

/// Input file settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetConfig {
    /// Worksheet to read from spreadsheet inputs; the first sheet when unset.
    #[serde(default)]
    pub sheet: Option<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Try to load configuration from the default location.
    ///
    /// Returns `Ok(None)` if the file doesn't exist, `Err` if it exists but can't be parsed.
    pub fn load_default() -> Result<Option<Self>> {
        let default_path = Path::new(DEFAULT_CONFIG_FILE);

        if default_path.exists() {
            Ok(Some(Self::load(default_path)?))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.salary.grouping_field, "job_title");
        assert_eq!(config.salary.value_field, "salary_usd");
        assert_eq!(config.skills.tokens_field, "required_skills");
        assert_eq!(config.skills.delimiter, ",");
        assert_eq!(config.skills.max_words, 100);
        assert_eq!(config.ramp.base_ramp_name, "inferno");
        assert_eq!(config.ramp.minval, 0.0);
        assert_eq!(config.ramp.maxval, 0.85);
        assert_eq!(config.ramp.resolution, 256);
        assert!(config.columns.rename.is_empty());
        assert_eq!(config.dataset.sheet, None);
    }

    #[test]
    fn test_parse_toml_config() {
        let toml_content = r#"
[salary]
grouping_field = "Title"
value_field = "Salary"

[skills]
delimiter = ";"
max_words = 25

[ramp]
base_ramp_name = "viridis"
maxval = 0.9

[columns]
rename = { job_title = "Title", salary_usd = "Salary" }

[dataset]
sheet = "Sheet1"
"#;

        let config: Config = toml::from_str(toml_content).unwrap();
        assert_eq!(config.salary.grouping_field, "Title");
        assert_eq!(config.salary.industry_field, "industry");
        assert_eq!(config.skills.tokens_field, "required_skills");
        assert_eq!(config.skills.delimiter, ";");
        assert_eq!(config.skills.max_words, 25);
        assert_eq!(config.ramp.base_ramp_name, "viridis");
        assert_eq!(config.ramp.minval, 0.0);
        assert_eq!(config.ramp.maxval, 0.9);
        assert_eq!(config.ramp.resolution, 256);
        assert_eq!(config.columns.rename.get("job_title").unwrap(), "Title");
        assert_eq!(config.dataset.sheet.as_deref(), Some("Sheet1"));
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("jobstat.toml");
        std::fs::write(&path, "[ramp]\nmaxval = \"high\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(format!("{}", err).contains("Failed to parse config file"));
    }
}
