pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::ingest::validate::default_required_fields;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "tweet-etl")]
#[command(about = "Batch cleaning and analytics for tweet dumps")]
pub struct CliConfig {
    /// Input batch: a `.json` file holds one JSON array, anything else
    /// is read as one JSON record per line.
    #[arg(long, default_value = "tweets.json")]
    pub input_path: String,

    #[arg(long, default_value = "./landing")]
    pub output_path: String,

    /// Fields a record must carry to count as valid.
    #[arg(long, value_delimiter = ',', default_values_t = default_required_fields())]
    pub required_fields: Vec<String>,

    /// How many hashtags the hashtag chart shows.
    #[arg(long, default_value = "5")]
    pub top_hashtags: usize,

    /// How many authors the author chart shows.
    #[arg(long, default_value = "10")]
    pub top_authors: usize,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log per-stage timing and memory usage")]
    pub monitor: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn required_fields(&self) -> &[String] {
        &self.required_fields
    }

    fn top_hashtags(&self) -> usize {
        self.top_hashtags
    }

    fn top_authors(&self) -> usize {
        self.top_authors
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_path("input_path", &self.input_path)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_positive_number("top_hashtags", self.top_hashtags, 1)?;
        validation::validate_positive_number("top_authors", self.top_authors, 1)?;
        Ok(())
    }
}
