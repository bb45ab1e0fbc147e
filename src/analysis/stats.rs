use crate::analysis::extract::{self, FeatureExtractor};
use crate::domain::model::Record;
use std::collections::HashMap;
use std::hash::Hash;

/// The `k` most frequent items, as `(item, count)` pairs sorted by
/// count descending. Items with equal counts keep first-appearance
/// order, so results are deterministic for a given input order.
pub fn top_k<T>(items: &[T], k: usize) -> Vec<(T, usize)>
where
    T: Eq + Hash + Clone,
{
    let mut positions: HashMap<&T, usize> = HashMap::new();
    let mut tally: Vec<(&T, usize)> = Vec::new();

    for item in items {
        match positions.get(item) {
            Some(&index) => tally[index].1 += 1,
            None => {
                positions.insert(item, tally.len());
                tally.push((item, 1));
            }
        }
    }

    // Stable sort: ties keep first-seen order.
    tally.sort_by(|a, b| b.1.cmp(&a.1));
    tally
        .into_iter()
        .take(k)
        .map(|(item, count)| (item.clone(), count))
        .collect()
}

/// Tweet counts per author, with authorless records pooled under the
/// unknown bucket.
pub fn tweets_per_author(records: &[Record]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(extract::author(record)).or_insert(0) += 1;
    }
    counts
}

/// Records whose `author_id` field is exactly `author_id`. Records
/// without a string `author_id` never match.
pub fn filter_by_author<'a>(records: &'a [Record], author_id: &str) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|record| {
            record
                .data
                .get("author_id")
                .and_then(|value| value.as_str())
                == Some(author_id)
        })
        .collect()
}

/// Records that mention `mention` (full token, `@` included).
pub fn filter_by_mention<'a>(records: &'a [Record], mention: &str) -> Vec<&'a Record> {
    let extractor = FeatureExtractor::new();
    records
        .iter()
        .filter(|record| extractor.mentions(record).iter().any(|m| m == mention))
        .collect()
}
