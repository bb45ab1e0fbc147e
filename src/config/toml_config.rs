use crate::core::ConfigProvider;
use crate::ingest::validate::default_required_fields;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub transform: TransformConfig,
    #[serde(default)]
    pub charts: ChartsConfig,
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// A `.json` path is read as one JSON array, anything else as
    /// newline-delimited JSON.
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransformConfig {
    #[serde(default = "default_required_fields")]
    pub required_fields: Vec<String>,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            required_fields: default_required_fields(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartsConfig {
    #[serde(default = "default_top_hashtags")]
    pub top_hashtags: usize,
    #[serde(default = "default_top_authors")]
    pub top_authors: usize,
}

impl Default for ChartsConfig {
    fn default() -> Self {
        Self {
            top_hashtags: default_top_hashtags(),
            top_authors: default_top_authors(),
        }
    }
}

fn default_top_hashtags() -> usize {
    5
}

fn default_top_authors() -> usize {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the value of that environment
    /// variable. Unset variables are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").unwrap();

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        crate::utils::validation::validate_path("source.path", &self.source.path)?;
        crate::utils::validation::validate_path("load.output_path", &self.load.output_path)?;
        crate::utils::validation::validate_positive_number(
            "charts.top_hashtags",
            self.charts.top_hashtags,
            1,
        )?;
        crate::utils::validation::validate_positive_number(
            "charts.top_authors",
            self.charts.top_authors,
            1,
        )?;
        Ok(())
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        &self.source.path
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn required_fields(&self) -> &[String] {
        &self.transform.required_fields
    }

    fn top_hashtags(&self) -> usize {
        self.charts.top_hashtags
    }

    fn top_authors(&self) -> usize {
        self.charts.top_authors
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
