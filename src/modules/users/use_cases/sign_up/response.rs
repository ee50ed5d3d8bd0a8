use reqwest::StatusCode;
use serde_json::Value;

/// A 2xx answer from the sign-up endpoint.
#[derive(Debug, Clone)]
pub struct SignUpResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl SignUpResponse {
    pub fn token(&self) -> Option<&str> {
        self.body.get("token").and_then(Value::as_str)
    }
}

/// Decodes a response body: empty is `null`, non-JSON is kept as a string.
pub(crate) fn decode_body(bytes: &[u8]) -> Value {
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(bytes).unwrap_or_else(|parse_err| {
        tracing::trace!("response body is not JSON: {}", parse_err);
        Value::String(String::from_utf8_lossy(bytes).into_owned())
    })
}
