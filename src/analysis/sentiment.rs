use crate::domain::model::{Record, SentimentLabel};
use crate::domain::ports::SentimentScorer;
use std::collections::HashMap;

/// Labels one record. Records without a string "text" field score as an
/// empty string, which every scorer maps to neutral.
pub fn sentiment(record: &Record, scorer: &dyn SentimentScorer) -> SentimentLabel {
    let text = record.text().unwrap_or("");
    SentimentLabel::from_polarity(scorer.score(text))
}

/// Word-list scorer: tokenizes on non-alphabetic characters, looks each
/// lowercased token up in a weighted lexicon and averages the weights of
/// the tokens it recognizes. Unrecognized text scores 0.0.
pub struct LexiconScorer {
    weights: HashMap<String, f64>,
}

impl LexiconScorer {
    pub fn new() -> Self {
        let mut scorer = Self {
            weights: HashMap::new(),
        };
        scorer.add_defaults();
        scorer
    }

    pub fn with_weights(weights: HashMap<String, f64>) -> Self {
        let mut scorer = Self {
            weights: HashMap::new(),
        };
        for (word, weight) in weights {
            scorer.add_word(&word, weight);
        }
        scorer
    }

    pub fn add_word(&mut self, word: &str, weight: f64) {
        self.weights
            .insert(word.to_lowercase(), weight.clamp(-1.0, 1.0));
    }

    fn add_defaults(&mut self) {
        let strong_positive = [
            "excellent",
            "wonderful",
            "amazing",
            "fantastic",
            "brilliant",
            "awesome",
            "incredible",
            "love",
            "perfect",
            "best",
        ];
        let positive = [
            "good", "great", "happy", "nice", "glad", "fun", "beautiful", "enjoy", "enjoyed",
            "win", "winning", "thanks", "thank",
        ];
        let mild_positive = ["okay", "fine", "decent", "interesting", "useful", "cool"];
        let strong_negative = [
            "terrible",
            "awful",
            "horrible",
            "disgusting",
            "worst",
            "hate",
            "disaster",
        ];
        let negative = [
            "bad",
            "sad",
            "angry",
            "poor",
            "disappointing",
            "disappointed",
            "annoying",
            "broken",
            "fail",
            "failed",
        ];
        let mild_negative = ["boring", "mediocre", "slow", "dull", "meh"];

        for word in strong_positive {
            self.add_word(word, 0.9);
        }
        for word in positive {
            self.add_word(word, 0.6);
        }
        for word in mild_positive {
            self.add_word(word, 0.3);
        }
        for word in strong_negative {
            self.add_word(word, -0.9);
        }
        for word in negative {
            self.add_word(word, -0.6);
        }
        for word in mild_negative {
            self.add_word(word, -0.3);
        }
    }
}

impl SentimentScorer for LexiconScorer {
    fn score(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut matched = 0usize;

        for token in text.split(|c: char| !c.is_alphabetic()) {
            if token.is_empty() {
                continue;
            }
            if let Some(weight) = self.weights.get(&token.to_lowercase()) {
                total += weight;
                matched += 1;
            }
        }

        if matched == 0 {
            0.0
        } else {
            (total / matched as f64).clamp(-1.0, 1.0)
        }
    }
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new()
    }
}
