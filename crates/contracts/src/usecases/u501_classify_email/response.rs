use super::errors::ClassifyError;
use super::labels::REMOTE_FALLBACK_MESSAGE;
use crate::domain::a001_email_classification::ClassificationResult;
use serde::{Deserialize, Serialize};

/// Error body sent with non-2xx responses. Both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    /// Server-side detail (exception text). Logged, not shown.
    #[serde(default)]
    pub message: Option<String>,
}

/// Turn a raw HTTP status and body into the submission outcome.
///
/// The body is parsed as JSON whatever the status is; an unparseable body is a
/// transport failure.
pub fn interpret_response(status: u16, body: &str) -> Result<ClassificationResult, ClassifyError> {
    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        ClassifyError::Transport(format!("HTTP {status}: response is not JSON: {e}"))
    })?;

    if !(200..300).contains(&status) {
        let body: ApiErrorBody = serde_json::from_value(value).unwrap_or_default();
        if let Some(detail) = &body.message {
            log::warn!("classify failed with HTTP {status}: {detail}");
        }
        let message = body
            .error
            .filter(|e| !e.trim().is_empty())
            .unwrap_or_else(|| REMOTE_FALLBACK_MESSAGE.to_string());
        return Err(ClassifyError::Remote(message));
    }

    serde_json::from_value(value).map_err(|e| {
        ClassifyError::Transport(format!("HTTP {status}: unexpected response shape: {e}"))
    })
}
