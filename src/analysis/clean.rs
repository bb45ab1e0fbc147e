use crate::domain::model::Record;
use regex::Regex;

/// Normalizes tweet text in three passes, always in this order: drop
/// everything outside the keep set (ASCII letters, digits, `@`, `#`,
/// whitespace), strip emoji and symbol blocks, then collapse whitespace
/// runs to single spaces and trim.
///
/// The emoji pass covers: emoticons (U+1F600..U+1F64F), symbols and
/// pictographs (U+1F300..U+1F5FF), transport (U+1F680..U+1F6FF),
/// alchemical and geometric extensions (U+1F700..U+1F8FF), supplemental
/// symbols (U+1F900..U+1F9FF), extended-A (U+1FA00..U+1FAFF), dingbats
/// (U+2700..U+27BF), flags (U+1F1E6..U+1F1FF) and the box-drawing
/// through miscellaneous-symbols span (U+2500..U+2BEF).
pub struct TextCleaner {
    keep_set: Regex,
    emoji: Regex,
    whitespace: Regex,
}

impl TextCleaner {
    pub fn new() -> Self {
        let emoji_pattern = r"[\x{1F600}-\x{1F64F}\x{1F300}-\x{1F5FF}\x{1F680}-\x{1F6FF}\x{1F700}-\x{1F77F}\x{1F780}-\x{1F7FF}\x{1F800}-\x{1F8FF}\x{1F900}-\x{1F9FF}\x{1FA00}-\x{1FA6F}\x{1FA70}-\x{1FAFF}\x{2700}-\x{27BF}\x{1F1E6}-\x{1F1FF}\x{2500}-\x{2BEF}]+";
        Self {
            keep_set: Regex::new(r"[^a-zA-Z0-9@#\s]").unwrap(),
            emoji: Regex::new(emoji_pattern).unwrap(),
            whitespace: Regex::new(r"\s+").unwrap(),
        }
    }

    pub fn clean_text(&self, text: &str) -> String {
        let stripped = self.keep_set.replace_all(text, "");
        let stripped = self.emoji.replace_all(&stripped, "");
        self.whitespace
            .replace_all(&stripped, " ")
            .trim()
            .to_string()
    }

    /// Rewrites the record's "text" field in place. Records without a
    /// string "text" field pass through untouched.
    pub fn clean_record(&self, record: &mut Record) {
        let cleaned = record.text().map(|text| self.clean_text(text));
        if let Some(cleaned) = cleaned {
            record
                .data
                .insert("text".to_string(), serde_json::Value::String(cleaned));
        }
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}
