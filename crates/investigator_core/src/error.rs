use thiserror::Error;

use crate::Strings;

/// What a non-2xx response body said about the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerDetail {
    /// The body carried a `detail` value.
    Message(String),
    /// The body was JSON but had no usable `detail`.
    Missing,
    /// The body was absent or not JSON.
    Unparseable,
}

impl ServerDetail {
    /// Best-effort extraction of `{"detail": ...}` from an error body.
    pub fn from_body(body: &[u8]) -> Self {
        let value: serde_json::Value = match serde_json::from_slice(body) {
            Ok(value) => value,
            Err(_) => return ServerDetail::Unparseable,
        };
        match value.get("detail") {
            Some(serde_json::Value::String(text)) if !text.is_empty() => {
                ServerDetail::Message(text.clone())
            }
            None | Some(serde_json::Value::Null) | Some(serde_json::Value::String(_)) => {
                ServerDetail::Missing
            }
            // Validation errors from the service arrive as structured detail.
            Some(other) => ServerDetail::Message(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("malformed response body: {0}")]
    Malformed(String),
    #[error("response is missing required field `{0}`")]
    MissingField(String),
}

/// Every way a submitted investigation can end without a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvestigationError {
    #[error("server responded with status {status}")]
    RequestFailed { status: u16, detail: ServerDetail },
    #[error("network error: {0}")]
    Network(String),
    #[error(transparent)]
    InvalidPayload(#[from] PayloadError),
}

impl InvestigationError {
    /// The text shown on the error panel's details line.
    pub fn detail(&self, strings: &Strings) -> String {
        match self {
            InvestigationError::RequestFailed { detail, .. } => match detail {
                ServerDetail::Message(text) => text.clone(),
                ServerDetail::Missing => strings.unsuccessful_response.to_string(),
                ServerDetail::Unparseable => strings.unknown_server_error.to_string(),
            },
            InvestigationError::Network(message) => message.clone(),
            InvestigationError::InvalidPayload(err) => err.to_string(),
        }
    }
}
