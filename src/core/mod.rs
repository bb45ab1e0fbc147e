pub mod etl;

pub use crate::domain::model::{
    ChartSpec, ChartSummary, Record, RunReport, TransformResult,
};
pub use crate::domain::ports::{
    ChartBackend, ConfigProvider, Pipeline, SentimentScorer, Storage,
};
pub use crate::utils::error::Result;
