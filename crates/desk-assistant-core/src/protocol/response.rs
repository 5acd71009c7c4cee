//! Response parsing utilities for device protocol.

use serde::de::DeserializeOwned;

use crate::error::DeviceError;
use crate::protocol::endpoints::IDENTITY;

/// Parse a JSON body into `T`, reporting shape mismatches as
/// `DeviceError::InvalidResponse`.
pub fn parse_json_response<T: DeserializeOwned>(
    body: &str,
    address: &str,
    path: &str,
) -> Result<T, DeviceError> {
    serde_json::from_str(body).map_err(|e| DeviceError::InvalidResponse {
        address: address.to_string(),
        path: path.to_string(),
        message: format!("Failed to parse JSON: {}", e),
    })
}

/// Check whether a probe body identifies a desk assistant.
///
/// The comparison is exact: no trimming, no case folding.
pub fn is_identity_response(body: &str) -> bool {
    body == IDENTITY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AlarmConfig;

    #[test]
    fn test_parse_json_typed() {
        let alarm: AlarmConfig =
            parse_json_response(r#"{"hour": 6, "minute": 45, "enabled": false}"#, "10.0.0.2", "/api/alarm")
                .unwrap();
        assert_eq!(alarm.hour, 6);
        assert!(!alarm.enabled);
    }

    #[test]
    fn test_parse_json_shape_mismatch() {
        let result: Result<AlarmConfig, _> =
            parse_json_response(r#"{"hour": "six"}"#, "10.0.0.2", "/api/alarm");
        match result {
            Err(DeviceError::InvalidResponse { path, .. }) => assert_eq!(path, "/api/alarm"),
            other => panic!("expected InvalidResponse, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_json_not_json() {
        let result: Result<serde_json::Value, _> = parse_json_response("OK", "10.0.0.2", "/api/time");
        assert!(result.is_err());
    }

    #[test]
    fn test_identity_is_exact() {
        assert!(is_identity_response("ESP32 Smart Desktop Assistant API"));
        assert!(!is_identity_response("ESP32 Smart Desktop Assistant API\n"));
        assert!(!is_identity_response("esp32 smart desktop assistant api"));
        assert!(!is_identity_response("Hello from ESP32"));
    }
}
