//! User-facing strings and fixed values shared by the controller and the UI.

pub const EMPTY_INPUT_MESSAGE: &str = "Please insert the email text before classifying.";
pub const MISSING_FILE_MESSAGE: &str = "Please select a file before classifying.";
pub const REMOTE_FALLBACK_MESSAGE: &str = "Error processing email.";
pub const CONNECTIVITY_MESSAGE: &str =
    "Error classifying email. Check your connection and try again.";
pub const CLIPBOARD_MESSAGE: &str = "Error copying the reply to the clipboard.";
pub const BUSY_MESSAGE: &str = "A classification is already in progress.";

pub const TRIGGER_IDLE_LABEL: &str = "Classify Email";
pub const TRIGGER_BUSY_LABEL: &str = "Processing...";

pub const COPY_LABEL: &str = "Copy";
pub const COPIED_LABEL: &str = "Copied!";

/// How long the "Copied!" acknowledgment stays before reverting.
pub const COPY_FEEDBACK_MS: u32 = 2000;

pub const FILE_INDICATOR_PREFIX: &str = "Selected file: ";
