use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// One tweet as an open field mapping. Records keep every field they
/// arrived with; the pipeline only ever rewrites "text" in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: HashMap<String, serde_json::Value>,
}

impl Record {
    /// The "text" field, when present and a string.
    pub fn text(&self) -> Option<&str> {
        self.data.get("text").and_then(|value| value.as_str())
    }
}

/// Outcome of checking one raw value against the required field set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidation {
    Valid,
    MissingFields(Vec<String>),
    NotAnObject,
}

impl RecordValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, RecordValidation::Valid)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SentimentLabel {
    Positive,
    Negative,
    Neutral,
}

impl SentimentLabel {
    /// Strictly positive polarity is positive, strictly negative is
    /// negative, everything else (including exactly 0.0) is neutral.
    pub fn from_polarity(polarity: f64) -> Self {
        if polarity > 0.0 {
            SentimentLabel::Positive
        } else if polarity < 0.0 {
            SentimentLabel::Negative
        } else {
            SentimentLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::Positive => "positive",
            SentimentLabel::Negative => "negative",
            SentimentLabel::Neutral => "neutral",
        }
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Counts of records rejected during validation, by reason.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RejectionCounts {
    pub missing_fields: usize,
    pub not_an_object: usize,
}

impl RejectionCounts {
    pub fn total(&self) -> usize {
        self.missing_fields + self.not_an_object
    }
}

/// Aggregates computed over the valid, cleaned batch.
#[derive(Debug, Clone, Default)]
pub struct TweetStats {
    pub tweets_per_author: HashMap<String, usize>,
    pub top_hashtags: Vec<(String, usize)>,
    pub top_authors: Vec<(String, usize)>,
    pub sentiment_counts: Vec<(SentimentLabel, usize)>,
    pub total_hashtags: usize,
    pub total_mentions: usize,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub tweets: Vec<Record>,
    pub rejections: RejectionCounts,
    pub stats: TweetStats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartSummary {
    pub rendered: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
}

/// A chart described as data, so backends stay swappable.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub series: Vec<(String, u64)>,
}

/// What one full pipeline run did, stage by stage.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub records_loaded: usize,
    pub records_valid: usize,
    pub rejections: RejectionCounts,
    pub landing_path: String,
    pub charts: ChartSummary,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn duration(&self) -> chrono::Duration {
        self.finished_at - self.started_at
    }
}
