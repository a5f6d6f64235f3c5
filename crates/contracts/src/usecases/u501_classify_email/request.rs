use super::errors::ClassifyError;
use super::labels::FILE_INDICATOR_PREFIX;
use serde::{Deserialize, Serialize};

/// Endpoint path, relative to the page origin.
pub const CLASSIFY_PATH: &str = "/api/classify";

/// Multipart field name the server reads the upload from.
pub const FILE_FIELD: &str = "file";

/// Picker hint only. The server decides what it accepts.
pub const PICKER_ACCEPT: &str = ".txt,.pdf";

/// Which input surface is currently accepted for submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Text,
    File,
}

impl InputMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputMode::Text => "text",
            InputMode::File => "file",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InputMode::Text => "Paste text",
            InputMode::File => "Upload file",
        }
    }

    pub fn all() -> [InputMode; 2] {
        [InputMode::Text, InputMode::File]
    }
}

/// A file chosen through the picker or dropped on the drop zone.
///
/// `handle` is the platform object (`web_sys::File` in the browser).
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile<F> {
    pub name: String,
    pub size: u64,
    pub handle: F,
}

impl<F> SelectedFile<F> {
    pub fn new(name: impl Into<String>, size: u64, handle: F) -> Self {
        Self {
            name: name.into(),
            size,
            handle,
        }
    }

    /// Text of the filename indicator under the drop zone.
    pub fn indicator_label(&self) -> String {
        format!("{}{}", FILE_INDICATOR_PREFIX, self.name)
    }
}

/// JSON body of a text-mode request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifyTextRequest {
    pub text: String,
}

/// Exactly one payload per submission.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationRequest<F> {
    Text(ClassifyTextRequest),
    File(SelectedFile<F>),
}

impl<F> ClassificationRequest<F> {
    pub fn mode(&self) -> InputMode {
        match self {
            ClassificationRequest::Text(_) => InputMode::Text,
            ClassificationRequest::File(_) => InputMode::File,
        }
    }
}

/// Validate the active input and package it.
///
/// Text is trimmed before the emptiness check and sent trimmed. File type and
/// size are not checked here.
pub fn build_request<F>(
    mode: InputMode,
    text: &str,
    file: Option<SelectedFile<F>>,
) -> Result<ClassificationRequest<F>, ClassifyError> {
    match mode {
        InputMode::Text => {
            let text = text.trim();
            if text.is_empty() {
                return Err(ClassifyError::EmptyInput);
            }
            Ok(ClassificationRequest::Text(ClassifyTextRequest {
                text: text.to_string(),
            }))
        }
        InputMode::File => file
            .map(ClassificationRequest::File)
            .ok_or(ClassifyError::MissingFile),
    }
}
