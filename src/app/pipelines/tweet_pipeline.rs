use crate::analysis::clean::TextCleaner;
use crate::analysis::extract::{self, FeatureExtractor};
use crate::analysis::sentiment::{self, LexiconScorer};
use crate::analysis::stats;
use crate::core::{
    ChartBackend, ChartSummary, ConfigProvider, Pipeline, Record, SentimentScorer, Storage,
    TransformResult,
};
use crate::domain::model::{RecordValidation, RejectionCounts, TweetStats};
use crate::ingest::{landing, loader, validate};
use crate::utils::error::{EtlError, Result};
use crate::viz::{self, TerminalCharts};
use std::path::Path;

/// The tweet batch pipeline: reads a dump, validates and cleans it,
/// lands the survivors as NDJSON and reports on the batch with three
/// charts.
pub struct TweetPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
    cleaner: TextCleaner,
    extractor: FeatureExtractor,
    scorer: Box<dyn SentimentScorer>,
    charts: Box<dyn ChartBackend>,
}

impl<S: Storage, C: ConfigProvider> TweetPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            cleaner: TextCleaner::new(),
            extractor: FeatureExtractor::new(),
            scorer: Box::new(LexiconScorer::new()),
            charts: Box::new(TerminalCharts::new()),
        }
    }

    /// Swaps the sentiment scorer, e.g. for a domain lexicon.
    pub fn with_scorer(mut self, scorer: Box<dyn SentimentScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Swaps the chart backend, e.g. to capture charts in tests.
    pub fn with_charts(mut self, charts: Box<dyn ChartBackend>) -> Self {
        self.charts = charts;
        self
    }

    fn analyze(&self, tweets: &[Record]) -> TweetStats {
        let mut hashtags = Vec::new();
        let mut authors = Vec::new();
        let mut sentiments = Vec::new();
        let mut total_mentions = 0;

        for tweet in tweets {
            hashtags.extend(self.extractor.hashtags(tweet));
            total_mentions += self.extractor.mentions(tweet).len();
            authors.push(extract::author(tweet));
            sentiments.push(sentiment::sentiment(tweet, self.scorer.as_ref()));
        }

        let total_hashtags = hashtags.len();
        TweetStats {
            tweets_per_author: stats::tweets_per_author(tweets),
            top_hashtags: stats::top_k(&hashtags, self.config.top_hashtags()),
            top_authors: stats::top_k(&authors, self.config.top_authors()),
            // Three labels exist, so this keeps every one that occurs.
            sentiment_counts: stats::top_k(&sentiments, 3),
            total_hashtags,
            total_mentions,
        }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for TweetPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<serde_json::Value>> {
        let input_path = self.config.input_path();
        tracing::info!("Reading tweets from: {}", input_path);

        match loader::read_tweets(Path::new(input_path)) {
            Ok(records) => {
                tracing::debug!("Loaded {} raw records", records.len());
                Ok(records)
            }
            // An unusable input file means an empty batch, not a crash.
            Err(e @ EtlError::InputMissing { .. }) | Err(e @ EtlError::InputMalformed { .. }) => {
                tracing::warn!("{}; continuing with an empty batch", e);
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    async fn transform(&self, data: Vec<serde_json::Value>) -> Result<TransformResult> {
        let mut tweets = Vec::new();
        let mut rejections = RejectionCounts::default();

        for (index, value) in data.into_iter().enumerate() {
            match validate::validate_record(&value, self.config.required_fields()) {
                RecordValidation::Valid => {
                    if let serde_json::Value::Object(object) = value {
                        let mut record = Record {
                            data: object.into_iter().collect(),
                        };
                        self.cleaner.clean_record(&mut record);
                        tweets.push(record);
                    }
                }
                RecordValidation::MissingFields(missing) => {
                    rejections.missing_fields += 1;
                    tracing::warn!("Record {} rejected: missing fields {:?}", index, missing);
                }
                RecordValidation::NotAnObject => {
                    rejections.not_an_object += 1;
                    tracing::warn!("Record {} rejected: not a JSON object", index);
                }
            }
        }

        let stats = self.analyze(&tweets);
        tracing::info!(
            "{} valid tweets after cleaning ({} rejected)",
            tweets.len(),
            rejections.total()
        );
        if let Some((hashtag, count)) = stats.top_hashtags.first() {
            tracing::debug!("Most frequent hashtag: {} ({} uses)", hashtag, count);
        }

        Ok(TransformResult {
            tweets,
            rejections,
            stats,
        })
    }

    async fn load(&self, result: &TransformResult) -> Result<String> {
        let landing_path = format!("{}/{}", self.config.output_path(), landing::LANDING_FILE);
        let body = landing::to_ndjson(&result.tweets)?;

        tracing::debug!(
            "Writing {} records ({} bytes) to landing zone",
            result.tweets.len(),
            body.len()
        );
        self.storage
            .write_file(landing::LANDING_FILE, body.as_bytes())
            .await
            .map_err(|e| EtlError::OutputFailure {
                path: landing_path.clone(),
                reason: e.to_string(),
            })?;

        tracing::info!("Landing file written: {}", landing_path);
        Ok(landing_path)
    }

    async fn visualize(&self, result: &TransformResult) -> Result<ChartSummary> {
        let mut summary = ChartSummary::default();
        let specs = [
            viz::hashtag_bar_chart(&result.stats.top_hashtags, self.config.top_hashtags()),
            viz::sentiment_pie_chart(&result.stats.sentiment_counts),
            viz::author_bar_chart(&result.stats.top_authors, self.config.top_authors()),
        ];

        for spec in specs {
            match spec {
                Ok(chart) => {
                    self.charts.render(&chart)?;
                    summary.rendered += 1;
                }
                // An empty aggregate skips its chart; the run goes on.
                Err(e @ EtlError::EmptyAggregate { .. }) => {
                    tracing::warn!("{}", e);
                    summary.skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ChartSpec, SentimentLabel};
    use serde_json::json;
    use std::collections::HashMap;
    use std::io::Write;
    use std::sync::{Arc, Mutex};
    use tempfile::Builder;

    struct MockStorage {
        files: Arc<tokio::sync::Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockStorage {
        fn new() -> Self {
            Self {
                files: Arc::new(tokio::sync::Mutex::new(HashMap::new())),
            }
        }

        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().await.get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        async fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.files
                .lock()
                .await
                .get(path)
                .cloned()
                .ok_or_else(|| EtlError::ProcessingError {
                    message: format!("File not found: {}", path),
                })
        }

        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files
                .lock()
                .await
                .insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct MockConfig {
        input_path: String,
        required_fields: Vec<String>,
        top_hashtags: usize,
        top_authors: usize,
    }

    impl MockConfig {
        fn new(input_path: &str) -> Self {
            Self {
                input_path: input_path.to_string(),
                required_fields: validate::default_required_fields(),
                top_hashtags: 5,
                top_authors: 10,
            }
        }
    }

    impl ConfigProvider for MockConfig {
        fn input_path(&self) -> &str {
            &self.input_path
        }

        fn output_path(&self) -> &str {
            "./landing"
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

    #[derive(Clone, Default)]
    struct RecordingCharts {
        rendered: Arc<Mutex<Vec<ChartSpec>>>,
    }

    impl RecordingCharts {
        fn titles(&self) -> Vec<String> {
            self.rendered
                .lock()
                .unwrap()
                .iter()
                .map(|chart| chart.title.clone())
                .collect()
        }
    }

    impl ChartBackend for RecordingCharts {
        fn render(&self, chart: &ChartSpec) -> Result<()> {
            self.rendered.lock().unwrap().push(chart.clone());
            Ok(())
        }
    }

    fn pipeline_for(
        input_path: &str,
    ) -> (TweetPipeline<MockStorage, MockConfig>, RecordingCharts) {
        let charts = RecordingCharts::default();
        let pipeline = TweetPipeline::new(MockStorage::new(), MockConfig::new(input_path))
            .with_charts(Box::new(charts.clone()));
        (pipeline, charts)
    }

    fn tweet(author: &str, text: &str) -> serde_json::Value {
        json!({
            "author_id": author,
            "text": text,
            "created_at": "2024-05-01T10:00:00Z"
        })
    }

    #[tokio::test]
    async fn test_extract_reads_array_file() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"[{"id": 1}, {"id": 2}]"#).unwrap();

        let (pipeline, _) = pipeline_for(file.path().to_str().unwrap());
        let records = pipeline.extract().await.unwrap();
        assert_eq!(records.len(), 2);
    }

    #[tokio::test]
    async fn test_extract_missing_file_yields_empty_batch() {
        let (pipeline, _) = pipeline_for("/nonexistent/tweets.json");
        let records = pipeline.extract().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_extract_malformed_file_yields_empty_batch() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"{{{ not json").unwrap();

        let (pipeline, _) = pipeline_for(file.path().to_str().unwrap());
        let records = pipeline.extract().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_extract_non_utf8_file_yields_empty_batch() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(b"[\xff\xfe]").unwrap();

        let (pipeline, _) = pipeline_for(file.path().to_str().unwrap());
        let records = pipeline.extract().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_transform_validates_cleans_and_aggregates() {
        let (pipeline, _) = pipeline_for("unused.json");
        let data = vec![
            tweet("u1", "Great day! #sunshine 😀 @friend"),
            tweet("u1", "Another #sunshine post!!!"),
            tweet("u2", "terrible weather... #rain"),
            json!({"author_id": "u3"}),
            json!("not an object"),
        ];

        let result = pipeline.transform(data).await.unwrap();

        assert_eq!(result.tweets.len(), 3);
        assert_eq!(result.rejections.missing_fields, 1);
        assert_eq!(result.rejections.not_an_object, 1);

        assert_eq!(
            result.tweets[0].text(),
            Some("Great day #sunshine @friend")
        );

        assert_eq!(result.stats.tweets_per_author["u1"], 2);
        assert_eq!(result.stats.tweets_per_author["u2"], 1);
        assert_eq!(result.stats.top_hashtags[0], ("#sunshine".to_string(), 2));
        assert_eq!(result.stats.total_hashtags, 3);
        assert_eq!(result.stats.total_mentions, 1);

        let sentiment_counts: HashMap<SentimentLabel, usize> =
            result.stats.sentiment_counts.iter().cloned().collect();
        assert_eq!(sentiment_counts[&SentimentLabel::Positive], 1);
        assert_eq!(sentiment_counts[&SentimentLabel::Negative], 1);
    }

    #[tokio::test]
    async fn test_transform_single_tweet_end_to_end_features() {
        let (pipeline, _) = pipeline_for("unused.json");
        let data = vec![json!({
            "author_id": "u1",
            "text": "Great day! #sun @bob",
            "created_at": "t"
        })];

        let result = pipeline.transform(data).await.unwrap();

        assert_eq!(result.tweets.len(), 1);
        assert_eq!(result.tweets[0].text(), Some("Great day #sun @bob"));
        assert_eq!(result.stats.top_hashtags, vec![("#sun".to_string(), 1)]);
        assert_eq!(result.stats.total_mentions, 1);
        assert_eq!(result.stats.tweets_per_author["u1"], 1);
        assert_eq!(
            result.stats.top_authors,
            vec![("u1".to_string(), 1)]
        );
    }

    #[tokio::test]
    async fn test_transform_empty_batch() {
        let (pipeline, _) = pipeline_for("unused.json");
        let result = pipeline.transform(vec![]).await.unwrap();
        assert!(result.tweets.is_empty());
        assert_eq!(result.rejections.total(), 0);
        assert!(result.stats.top_hashtags.is_empty());
    }

    #[tokio::test]
    async fn test_load_writes_ndjson_that_parses_back() {
        let (pipeline, _) = pipeline_for("unused.json");
        let data = vec![tweet("u1", "hello #world"), tweet("u2", "again")];
        let result = pipeline.transform(data).await.unwrap();

        let landing_path = pipeline.load(&result).await.unwrap();
        assert_eq!(landing_path, "./landing/cleaned_tweets.jsonl");

        let written = pipeline
            .storage
            .get_file(landing::LANDING_FILE)
            .await
            .expect("landing file was not written");
        let body = String::from_utf8(written).unwrap();
        let parsed: Vec<Record> = body
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(parsed, result.tweets);
    }

    #[tokio::test]
    async fn test_injected_scorer_drives_sentiment_chart() {
        struct Fixed(f64);
        impl SentimentScorer for Fixed {
            fn score(&self, _text: &str) -> f64 {
                self.0
            }
        }

        let charts = RecordingCharts::default();
        let pipeline = TweetPipeline::new(MockStorage::new(), MockConfig::new("unused.json"))
            .with_scorer(Box::new(Fixed(-0.8)))
            .with_charts(Box::new(charts.clone()));

        // The default lexicon would call both of these positive.
        let data = vec![tweet("u1", "great wonderful day"), tweet("u2", "excellent")];
        let result = pipeline.transform(data).await.unwrap();
        assert_eq!(
            result.stats.sentiment_counts,
            vec![(SentimentLabel::Negative, 2)]
        );

        pipeline.visualize(&result).await.unwrap();
        let pie = charts
            .rendered
            .lock()
            .unwrap()
            .iter()
            .find(|chart| chart.title == "Sentiment Distribution")
            .cloned()
            .expect("sentiment chart missing");
        assert_eq!(pie.series, vec![("negative".to_string(), 2)]);
    }

    #[tokio::test]
    async fn test_visualize_renders_all_three_charts() {
        let (pipeline, charts) = pipeline_for("unused.json");
        let data = vec![tweet("u1", "post #a @b"), tweet("u2", "more #a")];
        let result = pipeline.transform(data).await.unwrap();

        let summary = pipeline.visualize(&result).await.unwrap();
        assert_eq!(summary.rendered, 3);
        assert_eq!(summary.skipped, 0);
        assert_eq!(
            charts.titles(),
            vec![
                "Top 5 Hashtags".to_string(),
                "Sentiment Distribution".to_string(),
                "Top 10 Active Authors".to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_visualize_skips_empty_aggregates() {
        let (pipeline, charts) = pipeline_for("unused.json");
        // No hashtags anywhere, so that chart has nothing to show.
        let data = vec![tweet("u1", "plain text only")];
        let result = pipeline.transform(data).await.unwrap();

        let summary = pipeline.visualize(&result).await.unwrap();
        assert_eq!(summary.rendered, 2);
        assert_eq!(summary.skipped, 1);
        assert!(!charts.titles().contains(&"Top 5 Hashtags".to_string()));
    }

    #[tokio::test]
    async fn test_visualize_empty_batch_skips_everything() {
        let (pipeline, _) = pipeline_for("unused.json");
        let result = pipeline.transform(vec![]).await.unwrap();

        let summary = pipeline.visualize(&result).await.unwrap();
        assert_eq!(summary.rendered, 0);
        assert_eq!(summary.skipped, 3);
    }
}
