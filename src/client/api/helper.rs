use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::client::model::error::ApiError;

use super::transport::ApiRequest;

/// Helper function to turn a raw response into a JSON body with consistent error handling
///
/// 2xx responses with an empty body map to `Ok(None)`; non-2xx responses are
/// converted with [`ApiError::from_status`].
pub fn parse_response(status: u64, text: &str) -> Result<Option<Value>, ApiError> {
    if (200..300).contains(&status) {
        if text.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str::<Value>(text)
            .map(Some)
            .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
    } else {
        Err(ApiError::from_status(status, text))
    }
}

/// Serialize a payload to a JSON value
pub fn serialize_json<T: Serialize>(payload: &T) -> Result<Value, ApiError> {
    serde_json::to_value(payload)
        .map_err(|e| ApiError::decode(format!("Failed to serialize request: {}", e)))
}

/// Deserialize a JSON value into the expected response type
pub fn deserialize_json<T: DeserializeOwned>(value: Value) -> Result<T, ApiError> {
    serde_json::from_value(value)
        .map_err(|e| ApiError::decode(format!("Failed to parse response: {}", e)))
}

/// Build the absolute URL of a request against the configured backend origin
pub fn build_url(base_url: &str, request: &ApiRequest) -> String {
    let mut url = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        request.path.trim_start_matches('/')
    );

    if !request.query.is_empty() {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(request.query.iter())
            .finish();
        url.push('?');
        url.push_str(&query);
    }

    url
}
