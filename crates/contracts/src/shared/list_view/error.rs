use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Shown when a read fails and the backend gave no usable message.
pub const GENERIC_FETCH_MESSAGE: &str = "Failed to load data";

/// Shown when a mutation fails and the backend gave no usable message.
pub const GENERIC_MUTATION_MESSAGE: &str = "The action could not be completed";

/// Failure reported by the HTTP collaborator.
///
/// `status` is `None` for transport failures (no response at all).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub status: Option<u16>,
    pub message: Option<String>,
}

impl ApiError {
    pub fn new(status: Option<u16>, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Transport-level failure with no HTTP status.
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: None,
            message: Some(message.into()),
        }
    }

    /// Build from a non-2xx response body.
    ///
    /// The message is looked up in `message`, `data.message`, then `error`.
    pub fn from_body(status: u16, body: &Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| {
                body.get("data")
                    .and_then(|d| d.get("message"))
                    .and_then(Value::as_str)
            })
            .or_else(|| body.get("error").and_then(Value::as_str))
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(String::from);

        Self {
            status: Some(status),
            message,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.status, &self.message) {
            (Some(status), Some(message)) => write!(f, "{} ({})", message, status),
            (Some(status), None) => write!(f, "request failed with status {}", status),
            (None, Some(message)) => f.write_str(message),
            (None, None) => f.write_str("request failed"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Error taxonomy of the list-view controller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ListError {
    /// A read failed; previously displayed rows stay in place.
    #[error("{message}")]
    Fetch {
        status: Option<u16>,
        message: String,
    },

    /// Client-side form validation failed; nothing was sent.
    #[error("{} field(s) failed validation", .fields.len())]
    Validation { fields: BTreeMap<String, String> },

    /// The backend rejected a create/update/delete.
    #[error("{message}")]
    Mutation {
        status: Option<u16>,
        message: String,
    },

    /// The response body did not contain a recognizable item sequence.
    #[error("unexpected response shape: {0}")]
    Envelope(String),

    /// A superseded request resolved late. Never surfaced to the user.
    #[error("stale response discarded")]
    Stale,
}

impl ListError {
    pub fn fetch(err: ApiError) -> Self {
        let message = err.message.unwrap_or_else(|| match err.status {
            Some(status) => format!("{} ({})", GENERIC_FETCH_MESSAGE, status),
            None => GENERIC_FETCH_MESSAGE.to_string(),
        });
        ListError::Fetch {
            status: err.status,
            message,
        }
    }

    pub fn mutation(err: ApiError) -> Self {
        ListError::Mutation {
            status: err.status,
            message: err
                .message
                .unwrap_or_else(|| GENERIC_MUTATION_MESSAGE.to_string()),
        }
    }

    pub fn validation(fields: BTreeMap<String, String>) -> Self {
        ListError::Validation { fields }
    }

    pub fn is_stale(&self) -> bool {
        matches!(self, ListError::Stale)
    }

    /// Human-readable message for inline alerts and toasts.
    pub fn user_message(&self) -> String {
        match self {
            ListError::Fetch { message, .. } | ListError::Mutation { message, .. } => {
                message.clone()
            }
            ListError::Validation { fields } => fields
                .values()
                .next()
                .cloned()
                .unwrap_or_else(|| "Please check the form".to_string()),
            ListError::Envelope(_) => GENERIC_FETCH_MESSAGE.to_string(),
            ListError::Stale => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_lookup_order() {
        let err = ApiError::from_body(400, &json!({ "data": { "message": "Email taken" } }));
        assert_eq!(err.message.as_deref(), Some("Email taken"));

        let err = ApiError::from_body(500, &json!({ "error": "boom", "message": "  " }));
        assert_eq!(err.message.as_deref(), Some("boom"));

        let err = ApiError::from_body(502, &json!(null));
        assert_eq!(err.message, None);
    }

    #[test]
    fn test_mutation_falls_back_to_generic_message() {
        let err = ListError::mutation(ApiError::new(Some(500), None));
        assert_eq!(err.user_message(), GENERIC_MUTATION_MESSAGE);

        let err = ListError::mutation(ApiError::new(Some(409), Some("Already booked".into())));
        assert_eq!(err.user_message(), "Already booked");
    }

    #[test]
    fn test_fetch_without_message_mentions_status() {
        let err = ListError::fetch(ApiError::new(Some(503), None));
        assert_eq!(err.user_message(), "Failed to load data (503)");
        assert!(!err.is_stale());
    }
}
