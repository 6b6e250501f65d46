//! Strict decoding of a details response body.

use nsrl_core::errors::DecodeError;
use nsrl_core::models::FileDetails;
use serde_json::Value;

/// Decode a details body into catalog records, preserving response order.
///
/// The body must be a JSON array whose every element matches
/// [`FileDetails`]. Empty strings are accepted; missing keys or wrong types
/// fail with the index of the offending element.
pub fn decode_details(body: &str) -> Result<Vec<FileDetails>, DecodeError> {
    let value: Value = serde_json::from_str(body).map_err(|e| DecodeError::InvalidJson {
        reason: e.to_string(),
    })?;

    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(DecodeError::NotAnArray {
                found: json_kind(&other).to_string(),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item).map_err(|e| DecodeError::MalformedRecord {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> String {
        format!(
            r#"{{"sha256": "AA", "package": {{"name": "{name}", "version": "1.0", "application_type": "Game", "os": null, "manufacturer": null}}}}"#
        )
    }

    #[test]
    fn decodes_records_in_order() {
        let body = format!("[{}, {}]", record("First"), record("Second"));
        let records = decode_details(&body).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].package.name, "First");
        assert_eq!(records[1].package.name, "Second");
    }

    #[test]
    fn empty_array_is_valid() {
        assert!(decode_details("[]").unwrap().is_empty());
    }

    #[test]
    fn empty_strings_are_tolerated() {
        let body = r#"[{"package": {"name": "", "version": "", "application_type": ""}}]"#;
        let records = decode_details(body).unwrap();
        assert_eq!(records[0].package.name, "");
    }

    #[test]
    fn object_body_is_rejected() {
        let err = decode_details(r#"{"package": {}}"#).unwrap_err();
        assert!(matches!(err, DecodeError::NotAnArray { ref found } if found == "object"));
    }

    #[test]
    fn malformed_element_reports_index() {
        let body = format!(r#"[{}, {{"package": {{"name": "X"}}}}]"#, record("Ok"));
        let err = decode_details(&body).unwrap_err();
        assert!(matches!(err, DecodeError::MalformedRecord { index: 1, .. }));
    }

    #[test]
    fn null_name_is_structural_not_empty() {
        let body = r#"[{"package": {"name": null, "version": "1", "application_type": "Game"}}]"#;
        assert!(matches!(
            decode_details(body),
            Err(DecodeError::MalformedRecord { index: 0, .. })
        ));
    }

    #[test]
    fn garbage_is_invalid_json() {
        assert!(matches!(
            decode_details("not json"),
            Err(DecodeError::InvalidJson { .. })
        ));
    }
}
