use crate::utils::error::{EtlError, Result};
use serde_json::Value;
use std::path::Path;

/// Files ending in `.json` (any case) hold a single JSON array.
/// Everything else is read as newline-delimited JSON, one record per line.
pub fn is_json_array_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

/// Reads the raw batch from `path`. Records come back in file order,
/// unvalidated; non-object entries are kept so the validator can count them.
pub fn read_tweets(path: &Path) -> Result<Vec<Value>> {
    let raw = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(EtlError::InputMissing {
                path: path.display().to_string(),
            });
        }
        // Any other read failure (e.g. non-UTF-8 bytes) counts as a
        // malformed input file.
        Err(e) => {
            return Err(EtlError::InputMalformed {
                path: path.display().to_string(),
                reason: e.to_string(),
            });
        }
    };

    if is_json_array_path(path) {
        parse_array(&raw, path)
    } else {
        parse_lines(&raw, path)
    }
}

fn parse_array(raw: &str, path: &Path) -> Result<Vec<Value>> {
    let value: Value = serde_json::from_str(raw).map_err(|e| EtlError::InputMalformed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    match value {
        Value::Array(items) => Ok(items),
        // A bare top-level object is treated as a batch of one.
        Value::Object(_) => Ok(vec![value]),
        other => Err(EtlError::InputMalformed {
            path: path.display().to_string(),
            reason: format!(
                "expected an array of records at the top level, found {}",
                json_type_name(&other)
            ),
        }),
    }
}

fn parse_lines(raw: &str, path: &Path) -> Result<Vec<Value>> {
    let mut records = Vec::new();
    for (index, line) in raw.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value: Value = serde_json::from_str(line).map_err(|e| EtlError::InputMalformed {
            path: path.display().to_string(),
            reason: format!("line {}: {}", index + 1, e),
        })?;
        records.push(value);
    }
    Ok(records)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
