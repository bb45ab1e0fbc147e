use crate::domain::model::{ChartSpec, ChartSummary, TransformResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn required_fields(&self) -> &[String];
    fn top_hashtags(&self) -> usize;
    fn top_authors(&self) -> usize;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<serde_json::Value>>;
    async fn transform(&self, data: Vec<serde_json::Value>) -> Result<TransformResult>;
    async fn load(&self, result: &TransformResult) -> Result<String>;
    async fn visualize(&self, result: &TransformResult) -> Result<ChartSummary>;
}

/// Polarity scoring for a piece of text, in `[-1.0, 1.0]`.
/// 0.0 means neutral or nothing recognized.
pub trait SentimentScorer: Send + Sync {
    fn score(&self, text: &str) -> f64;
}

/// Renders one chart. Implementations decide how a spec becomes pixels,
/// glyphs or files.
pub trait ChartBackend: Send + Sync {
    fn render(&self, chart: &ChartSpec) -> Result<()>;
}
