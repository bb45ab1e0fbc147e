pub mod terminal;

pub use terminal::TerminalCharts;

use crate::domain::model::{ChartKind, ChartSpec, SentimentLabel};
use crate::utils::error::{EtlError, Result};

/// Bar chart of the most frequent hashtags. Fails with `EmptyAggregate`
/// when there are none, so callers can skip the chart and move on.
pub fn hashtag_bar_chart(top_hashtags: &[(String, usize)], k: usize) -> Result<ChartSpec> {
    if top_hashtags.is_empty() {
        return Err(EtlError::EmptyAggregate {
            chart: "hashtag bar chart".to_string(),
        });
    }

    Ok(ChartSpec {
        kind: ChartKind::Bar,
        title: format!("Top {} Hashtags", k),
        x_label: Some("Hashtags".to_string()),
        y_label: Some("Frequency".to_string()),
        series: top_hashtags
            .iter()
            .take(k)
            .map(|(hashtag, count)| (hashtag.clone(), *count as u64))
            .collect(),
    })
}

/// Pie chart of the sentiment distribution across the batch.
pub fn sentiment_pie_chart(distribution: &[(SentimentLabel, usize)]) -> Result<ChartSpec> {
    if distribution.is_empty() {
        return Err(EtlError::EmptyAggregate {
            chart: "sentiment pie chart".to_string(),
        });
    }

    Ok(ChartSpec {
        kind: ChartKind::Pie,
        title: "Sentiment Distribution".to_string(),
        x_label: None,
        y_label: None,
        series: distribution
            .iter()
            .map(|(label, count)| (label.to_string(), *count as u64))
            .collect(),
    })
}

/// Bar chart of the most active authors.
pub fn author_bar_chart(top_authors: &[(String, usize)], n: usize) -> Result<ChartSpec> {
    if top_authors.is_empty() {
        return Err(EtlError::EmptyAggregate {
            chart: "author bar chart".to_string(),
        });
    }

    Ok(ChartSpec {
        kind: ChartKind::Bar,
        title: format!("Top {} Active Authors", n),
        x_label: Some("Author IDs".to_string()),
        y_label: Some("Tweets".to_string()),
        series: top_authors
            .iter()
            .take(n)
            .map(|(author, count)| (author.clone(), *count as u64))
            .collect(),
    })
}
