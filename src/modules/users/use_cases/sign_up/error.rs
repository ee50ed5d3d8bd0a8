use reqwest::StatusCode;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignUpError {
    #[error("sign-up rejected with {}: {body}", .status.as_u16())]
    Status { status: StatusCode, body: Value },

    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl SignUpError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            SignUpError::Status { status, .. } => Some(*status),
            SignUpError::Transport(e) => e.status(),
        }
    }

    pub fn body(&self) -> Option<&Value> {
        match self {
            SignUpError::Status { body, .. } => Some(body),
            SignUpError::Transport(_) => None,
        }
    }

    /// Validation message reported for `field`, either a plain string or the
    /// first entry of a list of messages.
    pub fn field_error(&self, field: &str) -> Option<&str> {
        match self.body()?.get(field)? {
            Value::String(message) => Some(message.as_str()),
            Value::Array(messages) => messages.iter().find_map(Value::as_str),
            _ => None,
        }
    }
}
