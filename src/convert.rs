//! Argument extraction and response formatting.
//!
//! Tool arguments arrive as a JSON object; these helpers pull typed values
//! out of it, and `format_response` turns API responses into the single
//! string an agent runtime expects back from a tool call.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value as JsonValue};

use crate::error::{Result, SmartleadError};

/// Get a required string argument.
pub fn get_string_arg(args: &Map<String, JsonValue>, name: &str) -> Result<String> {
    args.get(name)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| SmartleadError::MissingArg(name.to_string()))
}

/// Get a required identifier argument.
///
/// Smartlead IDs travel as path segments, so both string and integer inputs
/// are accepted; agent runtimes routinely send numeric IDs as numbers.
pub fn get_id_arg(args: &Map<String, JsonValue>, name: &str) -> Result<String> {
    match args.get(name) {
        Some(JsonValue::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(JsonValue::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(SmartleadError::InvalidArg {
            name: name.to_string(),
            reason: "expected a string or integer ID".to_string(),
        }),
        None => Err(SmartleadError::MissingArg(name.to_string())),
    }
}

/// Get an optional string argument.
pub fn get_optional_string(args: &Map<String, JsonValue>, name: &str) -> Option<String> {
    args.get(name).and_then(|v| v.as_str()).map(|s| s.to_string())
}

/// Get a required array argument.
pub fn get_array_arg(args: &Map<String, JsonValue>, name: &str) -> Result<Vec<JsonValue>> {
    args.get(name)
        .and_then(|v| v.as_array())
        .cloned()
        .ok_or_else(|| SmartleadError::MissingArg(name.to_string()))
}

/// Get a required object argument.
pub fn get_object_arg(args: &Map<String, JsonValue>, name: &str) -> Result<JsonValue> {
    match args.get(name) {
        Some(v @ JsonValue::Object(_)) => Ok(v.clone()),
        Some(_) => Err(SmartleadError::InvalidArg {
            name: name.to_string(),
            reason: "expected an object".to_string(),
        }),
        None => Err(SmartleadError::MissingArg(name.to_string())),
    }
}

/// Deserialize the whole argument object into a typed request struct.
///
/// Fields the struct doesn't know (like `campaign_id`, which travels in the
/// URL path instead of the body) are ignored.
pub fn parse_args<T: DeserializeOwned>(args: &Map<String, JsonValue>) -> Result<T> {
    serde_json::from_value(JsonValue::Object(args.clone())).map_err(|e| {
        SmartleadError::InvalidArg {
            name: "arguments".to_string(),
            reason: e.to_string(),
        }
    })
}

/// Format an API response as the string returned to the agent.
///
/// Objects and arrays are re-encoded as single-line JSON; primitives are cast
/// directly (strings without quotes).
pub fn format_response(data: &JsonValue) -> String {
    match data {
        JsonValue::Object(_) | JsonValue::Array(_) => {
            serde_json::to_string(data).unwrap_or_else(|_| data.to_string())
        }
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn args(value: JsonValue) -> Map<String, JsonValue> {
        match value {
            JsonValue::Object(m) => m,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_get_string_arg_missing() {
        let err = get_string_arg(&args(json!({})), "campaign_id").unwrap_err();
        assert!(matches!(err, SmartleadError::MissingArg(_)));
    }

    #[test]
    fn test_get_id_arg_accepts_numbers() {
        let map = args(json!({"campaign_id": 372}));
        assert_eq!(get_id_arg(&map, "campaign_id").unwrap(), "372");

        let map = args(json!({"campaign_id": "372"}));
        assert_eq!(get_id_arg(&map, "campaign_id").unwrap(), "372");
    }

    #[test]
    fn test_get_id_arg_rejects_other_types() {
        let map = args(json!({"campaign_id": [1, 2]}));
        let err = get_id_arg(&map, "campaign_id").unwrap_err();
        assert!(matches!(err, SmartleadError::InvalidArg { .. }));
    }

    #[test]
    fn test_format_response_object_is_single_line() {
        let formatted = format_response(&json!({"ok": true, "data": "success"}));
        assert!(!formatted.contains('\n'));
        let round_trip: JsonValue = serde_json::from_str(&formatted).unwrap();
        assert_eq!(round_trip, json!({"ok": true, "data": "success"}));
    }

    #[test]
    fn test_format_response_array() {
        let formatted = format_response(&json!([{"id": 2011}, {"id": 5055}]));
        assert_eq!(formatted, r#"[{"id":2011},{"id":5055}]"#);
    }

    #[test]
    fn test_format_response_primitives() {
        assert_eq!(format_response(&json!("plain text")), "plain text");
        assert_eq!(format_response(&json!(42)), "42");
        assert_eq!(format_response(&json!(true)), "true");
        assert_eq!(format_response(&JsonValue::Null), "null");
    }
}
