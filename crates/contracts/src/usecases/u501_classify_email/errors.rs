use super::labels::{
    BUSY_MESSAGE, CLIPBOARD_MESSAGE, CONNECTIVITY_MESSAGE, EMPTY_INPUT_MESSAGE,
    MISSING_FILE_MESSAGE,
};
use thiserror::Error;

/// Everything that can go wrong between clicking "Classify" and seeing a result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("email text is empty")]
    EmptyInput,

    #[error("no file selected")]
    MissingFile,

    /// Non-2xx response. Carries the server message or the generic fallback.
    #[error("remote error: {0}")]
    Remote(String),

    /// Network failure or an undecodable body. The detail is for logs only.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("a submission is already in flight")]
    Busy,
}

impl ClassifyError {
    /// The single message shown by the error panel.
    pub fn user_message(&self) -> String {
        match self {
            ClassifyError::EmptyInput => EMPTY_INPUT_MESSAGE.to_string(),
            ClassifyError::MissingFile => MISSING_FILE_MESSAGE.to_string(),
            ClassifyError::Remote(message) => message.clone(),
            ClassifyError::Transport(_) => CONNECTIVITY_MESSAGE.to_string(),
            ClassifyError::Clipboard(_) => CLIPBOARD_MESSAGE.to_string(),
            ClassifyError::Busy => BUSY_MESSAGE.to_string(),
        }
    }
}
