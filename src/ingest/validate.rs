use crate::domain::model::RecordValidation;
use serde_json::Value;

/// Fields a tweet must carry unless the configuration says otherwise.
pub const DEFAULT_REQUIRED_FIELDS: [&str; 3] = ["author_id", "text", "created_at"];

pub fn default_required_fields() -> Vec<String> {
    DEFAULT_REQUIRED_FIELDS
        .iter()
        .map(|field| field.to_string())
        .collect()
}

/// Checks one raw value against the required key set. Presence is all
/// that counts; field values are never inspected here.
pub fn validate_record(value: &Value, required_fields: &[String]) -> RecordValidation {
    let Some(object) = value.as_object() else {
        return RecordValidation::NotAnObject;
    };

    let missing: Vec<String> = required_fields
        .iter()
        .filter(|field| !object.contains_key(field.as_str()))
        .cloned()
        .collect();

    if missing.is_empty() {
        RecordValidation::Valid
    } else {
        RecordValidation::MissingFields(missing)
    }
}
