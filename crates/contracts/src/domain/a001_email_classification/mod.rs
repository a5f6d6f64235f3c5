pub mod aggregate;

pub use aggregate::{category_style_key, confidence_percent, ClassificationResult};
