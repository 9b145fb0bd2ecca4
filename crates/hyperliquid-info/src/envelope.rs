//! Response Envelope
//!
//! Every query tool returns JSON text: the downstream payload verbatim on
//! success, or a single-key `{"error": ...}` object on failure. The failure
//! message is a fixed per-operation prefix followed by the underlying error.

use serde_json::Value;

use crate::error::InfoError;

/// Serialize a successful downstream payload, unreshaped.
pub fn success(value: &Value) -> String {
    value.to_string()
}

/// Build the failure payload for an operation.
pub fn failure(prefix: &str, err: &InfoError) -> String {
    serde_json::json!({ "error": format!("{}: {}", prefix, err) }).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_verbatim() {
        let value = serde_json::json!({"BTC": "50000.0", "ETH": "3000.0"});
        let text = success(&value);
        let round: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(round, value);
    }

    #[test]
    fn test_failure_shape() {
        let err = InfoError::Api("boom".into());
        let text = failure("Failed to fetch all mids", &err);
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"error": "Failed to fetch all mids: API error: boom"})
        );
    }

    #[test]
    fn test_failure_is_single_key() {
        let err = InfoError::InvalidTimestamp("not-a-date".into());
        let text = failure("Failed to fetch candles snapshot", &err);
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 1);
    }
}
