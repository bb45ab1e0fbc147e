use crate::domain::model::Record;
use regex::Regex;

/// Author bucket for records without a usable `author_id`.
pub const UNKNOWN_AUTHOR: &str = "unknown";

/// The record's author id, or [`UNKNOWN_AUTHOR`] when the field is
/// absent or not a string.
pub fn author(record: &Record) -> String {
    record
        .data
        .get("author_id")
        .and_then(|value| value.as_str())
        .unwrap_or(UNKNOWN_AUTHOR)
        .to_string()
}

/// Pulls hashtags, mentions and topic words out of tweet text.
/// Occurrences are reported in text order, duplicates included.
pub struct FeatureExtractor {
    hashtag: Regex,
    mention: Regex,
    topic: Regex,
}

impl FeatureExtractor {
    pub fn new() -> Self {
        Self {
            hashtag: Regex::new(r"#\w+").unwrap(),
            mention: Regex::new(r"@\w+").unwrap(),
            // Maximal runs of four or more letters.
            topic: Regex::new(r"[A-Za-z]{4,}").unwrap(),
        }
    }

    pub fn hashtags(&self, record: &Record) -> Vec<String> {
        self.find_all(&self.hashtag, record)
    }

    pub fn mentions(&self, record: &Record) -> Vec<String> {
        self.find_all(&self.mention, record)
    }

    pub fn topics(&self, record: &Record) -> Vec<String> {
        self.find_all(&self.topic, record)
    }

    fn find_all(&self, pattern: &Regex, record: &Record) -> Vec<String> {
        let Some(text) = record.text() else {
            return Vec::new();
        };
        pattern
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new()
    }
}
