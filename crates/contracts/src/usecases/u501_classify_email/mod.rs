//! Classify one email, pasted as text or uploaded as a file.
//!
//! - request.rs: input modes, selected file, request builder
//! - response.rs: HTTP outcome interpretation
//! - state.rs: submission lifecycle state machine
//! - slot.rs: single-flight guard
//! - errors.rs / labels.rs: error taxonomy and user-facing strings

pub mod errors;
pub mod labels;
pub mod request;
pub mod response;
pub mod slot;
pub mod state;

pub use errors::ClassifyError;
pub use request::{
    build_request, ClassificationRequest, ClassifyTextRequest, InputMode, SelectedFile,
    CLASSIFY_PATH, FILE_FIELD, PICKER_ACCEPT,
};
pub use response::{interpret_response, ApiErrorBody};
pub use slot::{SlotGuard, SubmissionSlot};
pub use state::{
    ClassifierEvent, ClassifierState, Command, CopyFeedback, Panel, SubmissionState, ViewState,
};
