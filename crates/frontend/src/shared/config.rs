//! Client configuration, resolved once at startup and shared via context.

use super::api_utils::{api_base, join_url};
use contracts::usecases::u501_classify_email::labels::COPY_FEEDBACK_MS;
use contracts::usecases::u501_classify_email::CLASSIFY_PATH;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    /// Origin of the classification service, empty for relative URLs.
    pub api_base: String,
    pub classify_path: String,
    /// Duration of the "Copied!" acknowledgment.
    pub copy_feedback_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            classify_path: CLASSIFY_PATH.to_string(),
            copy_feedback_ms: COPY_FEEDBACK_MS,
        }
    }
}

impl ClientConfig {
    /// Same-origin configuration for the running page.
    pub fn from_window() -> Self {
        Self {
            api_base: api_base(),
            ..Self::default()
        }
    }

    pub fn classify_url(&self) -> String {
        join_url(&self.api_base, &self.classify_path)
    }
}
