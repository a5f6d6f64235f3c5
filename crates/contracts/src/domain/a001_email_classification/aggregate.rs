use serde::{Deserialize, Serialize};

/// Classification returned by the remote endpoint for one email.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Raw category as sent by the server, e.g. "Produtivo" or "SPAM".
    pub category: String,
    /// Model confidence in `[0, 1]`.
    pub confidence: f64,
    pub suggested_response: String,
    /// Length of the text the server actually classified (after file extraction).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processed_text_length: Option<u64>,
}

impl ClassificationResult {
    pub fn confidence_percent(&self) -> u8 {
        confidence_percent(self.confidence)
    }

    /// CSS modifier derived from the category. Display text keeps the raw value.
    pub fn category_style_key(&self) -> String {
        category_style_key(&self.category)
    }
}

/// `round(confidence * 100)`, clamped to `0..=100`.
///
/// Non-finite input renders as 0 so a malformed payload never breaks the badge.
pub fn confidence_percent(confidence: f64) -> u8 {
    if !confidence.is_finite() {
        return 0;
    }
    (confidence * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Lowercased category with inner whitespace collapsed to `-`.
pub fn category_style_key(category: &str) -> String {
    category
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
