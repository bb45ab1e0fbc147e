use crate::domain::model::Record;
use crate::utils::error::Result;

/// Name of the landing file inside the output directory. Rewritten on
/// every run.
pub const LANDING_FILE: &str = "cleaned_tweets.jsonl";

/// Serializes the batch as newline-delimited JSON: one record per line,
/// in batch order. An empty batch yields an empty string.
pub fn to_ndjson(records: &[Record]) -> Result<String> {
    let mut output = String::new();
    for record in records {
        output.push_str(&serde_json::to_string(record)?);
        output.push('\n');
    }
    Ok(output)
}
