pub mod analysis;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod ingest;
pub mod utils;
pub mod viz;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::TweetPipeline;
pub use config::cli::LocalStorage;
pub use crate::core::etl::EtlEngine;
pub use utils::error::{EtlError, Result};
