//! Submission lifecycle state machine.
//!
//! All UI state for the classifier page lives in [`ClassifierState`]. The UI
//! feeds it [`ClassifierEvent`]s and executes the [`Command`]s it returns
//! (HTTP dispatch, clipboard write, timers, scrolling). Nothing here touches
//! the DOM, so every transition is testable natively.

use super::errors::ClassifyError;
use super::labels::{
    COPIED_LABEL, COPY_FEEDBACK_MS, COPY_LABEL, TRIGGER_BUSY_LABEL, TRIGGER_IDLE_LABEL,
};
use super::request::{build_request, ClassificationRequest, InputMode, SelectedFile};
use crate::domain::a001_email_classification::ClassificationResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
}

/// What the output area shows. Result and error are never visible together.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ViewState {
    #[default]
    Empty,
    Result(ClassificationResult),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CopyFeedback {
    #[default]
    Idle,
    Copied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Result,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassifierEvent<F> {
    ModeSelected(InputMode),
    TextChanged(String),
    /// Picker `change`: the first file, or `None` when the picker came back empty.
    FilePicked(Option<SelectedFile<F>>),
    /// Drop target `drop`: every dropped file, in order.
    FilesDropped(Vec<SelectedFile<F>>),
    /// `dragenter` / `dragover`.
    DragEntered,
    /// `dragleave`.
    DragLeft,
    SubmitRequested,
    ResponseReceived(Result<ClassificationResult, ClassifyError>),
    CopyRequested,
    /// Clipboard write settled for the result shown under `result_generation`.
    CopyFinished {
        result_generation: u64,
        outcome: Result<(), ClassifyError>,
    },
    /// Timer fired for the acknowledgment with this generation.
    CopyFeedbackExpired(u64),
}

/// Side effects the UI must perform after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<F> {
    Dispatch(ClassificationRequest<F>),
    WriteClipboard {
        text: String,
        result_generation: u64,
    },
    ScheduleCopyReset { generation: u64, after_ms: u32 },
    RevealPanel(Panel),
}

#[derive(Debug, Clone)]
pub struct ClassifierState<F> {
    mode: InputMode,
    text: String,
    selected_file: Option<SelectedFile<F>>,
    submission: SubmissionState,
    view: ViewState,
    drag_over: bool,
    copy_feedback: CopyFeedback,
    copy_generation: u64,
    copy_feedback_ms: u32,
    /// Bumped every time a new result is shown.
    result_generation: u64,
    dispatched: u64,
    completed: u64,
}

impl<F> Default for ClassifierState<F> {
    fn default() -> Self {
        Self {
            mode: InputMode::default(),
            text: String::new(),
            selected_file: None,
            submission: SubmissionState::default(),
            view: ViewState::default(),
            drag_over: false,
            copy_feedback: CopyFeedback::default(),
            copy_generation: 0,
            copy_feedback_ms: COPY_FEEDBACK_MS,
            result_generation: 0,
            dispatched: 0,
            completed: 0,
        }
    }
}

impl<F: Clone> ClassifierState<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_copy_feedback_ms(mut self, ms: u32) -> Self {
        self.copy_feedback_ms = ms;
        self
    }

    /// Apply one event and return the side effects to run, in order.
    pub fn apply(&mut self, event: ClassifierEvent<F>) -> Vec<Command<F>> {
        match event {
            ClassifierEvent::ModeSelected(mode) => {
                log::debug!("input mode -> {}", mode.as_str());
                self.mode = mode;
                self.view = ViewState::Empty;
                self.drag_over = false;
                Vec::new()
            }
            ClassifierEvent::TextChanged(text) => {
                self.text = text;
                Vec::new()
            }
            ClassifierEvent::FilePicked(file) => {
                match &file {
                    Some(f) => log::debug!("file picked: {} ({} bytes)", f.name, f.size),
                    None => log::debug!("file picker returned no file"),
                }
                self.selected_file = file;
                Vec::new()
            }
            ClassifierEvent::FilesDropped(files) => {
                self.drag_over = false;
                if let Some(first) = files.into_iter().next() {
                    log::debug!("file dropped: {} ({} bytes)", first.name, first.size);
                    self.selected_file = Some(first);
                }
                Vec::new()
            }
            ClassifierEvent::DragEntered => {
                self.drag_over = true;
                Vec::new()
            }
            ClassifierEvent::DragLeft => {
                self.drag_over = false;
                Vec::new()
            }
            ClassifierEvent::SubmitRequested => self.begin_submission(),
            ClassifierEvent::ResponseReceived(outcome) => self.finish_submission(outcome),
            ClassifierEvent::CopyRequested => match &self.view {
                ViewState::Result(result) => {
                    vec![Command::WriteClipboard {
                        text: result.suggested_response.clone(),
                        result_generation: self.result_generation,
                    }]
                }
                _ => Vec::new(),
            },
            ClassifierEvent::CopyFinished {
                result_generation,
                outcome,
            } => self.finish_copy(result_generation, outcome),
            ClassifierEvent::CopyFeedbackExpired(generation) => {
                if generation == self.copy_generation {
                    self.copy_feedback = CopyFeedback::Idle;
                }
                Vec::new()
            }
        }
    }

    fn begin_submission(&mut self) -> Vec<Command<F>> {
        if self.submission == SubmissionState::Submitting {
            log::debug!("submit ignored: {}", ClassifyError::Busy);
            return Vec::new();
        }

        self.view = ViewState::Empty;

        match build_request(self.mode, &self.text, self.selected_file.clone()) {
            Ok(request) => {
                self.submission = SubmissionState::Submitting;
                self.dispatched += 1;
                log::info!("classify request #{} ({})", self.dispatched, self.mode.as_str());
                vec![Command::Dispatch(request)]
            }
            Err(err) => {
                log::debug!("validation failed: {err}");
                self.show_error(&err)
            }
        }
    }

    /// A copy only lands on the result it was taken from.
    fn finish_copy(
        &mut self,
        result_generation: u64,
        outcome: Result<(), ClassifyError>,
    ) -> Vec<Command<F>> {
        let shown = matches!(self.view, ViewState::Result(_));
        if !shown || result_generation != self.result_generation {
            log::debug!("copy outcome for a result no longer shown, ignored");
            return Vec::new();
        }

        match outcome {
            Ok(()) => {
                self.copy_generation += 1;
                self.copy_feedback = CopyFeedback::Copied;
                vec![Command::ScheduleCopyReset {
                    generation: self.copy_generation,
                    after_ms: self.copy_feedback_ms,
                }]
            }
            Err(err) => {
                log::error!("copy failed: {err}");
                self.show_error(&err)
            }
        }
    }

    fn finish_submission(
        &mut self,
        outcome: Result<ClassificationResult, ClassifyError>,
    ) -> Vec<Command<F>> {
        if self.submission != SubmissionState::Submitting {
            log::warn!("response received with no submission in flight, ignored");
            return Vec::new();
        }

        self.submission = SubmissionState::Idle;
        self.completed += 1;

        match outcome {
            Ok(result) => {
                log::info!(
                    "classified as {} ({}%)",
                    result.category,
                    result.confidence_percent()
                );
                self.view = ViewState::Result(result);
                self.result_generation += 1;
                self.copy_feedback = CopyFeedback::Idle;
                vec![Command::RevealPanel(Panel::Result)]
            }
            Err(err) => {
                match &err {
                    ClassifyError::Transport(detail) => {
                        log::error!("classify transport error: {detail}")
                    }
                    other => log::warn!("classify failed: {other}"),
                }
                self.show_error(&err)
            }
        }
    }

    fn show_error(&mut self, err: &ClassifyError) -> Vec<Command<F>> {
        self.view = ViewState::Error(err.user_message());
        vec![Command::RevealPanel(Panel::Error)]
    }
}

impl<F> ClassifierState<F> {
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn selected_file(&self) -> Option<&SelectedFile<F>> {
        self.selected_file.as_ref()
    }

    /// `None` hides the indicator.
    pub fn file_indicator(&self) -> Option<String> {
        self.selected_file.as_ref().map(SelectedFile::indicator_label)
    }

    pub fn is_submitting(&self) -> bool {
        self.submission == SubmissionState::Submitting
    }

    pub fn trigger_label(&self) -> &'static str {
        if self.is_submitting() {
            TRIGGER_BUSY_LABEL
        } else {
            TRIGGER_IDLE_LABEL
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        match &self.view {
            ViewState::Result(result) => Some(result),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.view {
            ViewState::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_drag_over(&self) -> bool {
        self.drag_over
    }

    pub fn copy_feedback(&self) -> CopyFeedback {
        self.copy_feedback
    }

    pub fn copy_label(&self) -> &'static str {
        match self.copy_feedback {
            CopyFeedback::Idle => COPY_LABEL,
            CopyFeedback::Copied => COPIED_LABEL,
        }
    }

    /// Requests handed to the transport so far.
    pub fn dispatched_count(&self) -> u64 {
        self.dispatched
    }

    /// Submissions that returned to `Idle` (success or failure).
    pub fn completed_count(&self) -> u64 {
        self.completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_classify_email::labels::{
        CLIPBOARD_MESSAGE, CONNECTIVITY_MESSAGE, EMPTY_INPUT_MESSAGE, MISSING_FILE_MESSAGE,
    };

    type State = ClassifierState<u32>;
    type Event = ClassifierEvent<u32>;

    fn spam() -> ClassificationResult {
        ClassificationResult {
            category: "SPAM".to_string(),
            confidence: 0.87,
            suggested_response: "No reply needed.".to_string(),
            processed_text_length: None,
        }
    }

    fn file(name: &str, handle: u32) -> SelectedFile<u32> {
        SelectedFile::new(name, 10, handle)
    }

    fn submitted_text(text: &str) -> State {
        let mut state = State::new();
        state.apply(Event::TextChanged(text.to_string()));
        let commands = state.apply(Event::SubmitRequested);
        assert_eq!(commands.len(), 1);
        state
    }

    #[test]
    fn test_text_submission_success_scenario() {
        let mut state = State::new();
        state.apply(Event::TextChanged("Hello".to_string()));

        let commands = state.apply(Event::SubmitRequested);
        match commands.as_slice() {
            [Command::Dispatch(ClassificationRequest::Text(body))] => {
                assert_eq!(body.text, "Hello")
            }
            other => panic!("unexpected commands: {other:?}"),
        }
        assert!(state.is_submitting());
        assert_eq!(state.trigger_label(), TRIGGER_BUSY_LABEL);
        assert_eq!(state.view(), &ViewState::Empty);

        let commands = state.apply(Event::ResponseReceived(Ok(spam())));
        assert_eq!(commands, vec![Command::RevealPanel(Panel::Result)]);
        assert!(!state.is_submitting());
        assert_eq!(state.trigger_label(), TRIGGER_IDLE_LABEL);

        let result = state.result().unwrap();
        assert_eq!(result.category, "SPAM");
        assert_eq!(format!("{}%", result.confidence_percent()), "87%");
        assert_eq!(result.category_style_key(), "spam");
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn test_empty_text_never_dispatches() {
        for blank in ["", "   ", "\n\t"] {
            let mut state = State::new();
            state.apply(Event::TextChanged(blank.to_string()));
            let commands = state.apply(Event::SubmitRequested);
            assert_eq!(commands, vec![Command::RevealPanel(Panel::Error)]);
            assert_eq!(state.error_message(), Some(EMPTY_INPUT_MESSAGE));
            assert!(!state.is_submitting());
            assert_eq!(state.dispatched_count(), 0);
        }
    }

    #[test]
    fn test_file_mode_without_file_never_dispatches() {
        let mut state = State::new();
        state.apply(Event::TextChanged("text in the other tab".to_string()));
        state.apply(Event::ModeSelected(InputMode::File));
        let commands = state.apply(Event::SubmitRequested);
        assert_eq!(commands, vec![Command::RevealPanel(Panel::Error)]);
        assert_eq!(state.error_message(), Some(MISSING_FILE_MESSAGE));
        assert_eq!(state.dispatched_count(), 0);
    }

    #[test]
    fn test_file_mode_remote_error_scenario() {
        let mut state = State::new();
        state.apply(Event::ModeSelected(InputMode::File));
        state.apply(Event::FilePicked(Some(file("mail.pdf", 1))));

        let commands = state.apply(Event::SubmitRequested);
        match commands.as_slice() {
            [Command::Dispatch(ClassificationRequest::File(f))] => assert_eq!(f.handle, 1),
            other => panic!("unexpected commands: {other:?}"),
        }

        let commands = state.apply(Event::ResponseReceived(Err(ClassifyError::Remote(
            "bad format".to_string(),
        ))));
        assert_eq!(commands, vec![Command::RevealPanel(Panel::Error)]);
        assert_eq!(state.error_message(), Some("bad format"));
        assert!(!state.is_submitting());
        assert!(state.result().is_none());
    }

    #[test]
    fn test_transport_failure_shows_connectivity_message() {
        let mut state = submitted_text("Hello");
        state.apply(Event::ResponseReceived(Err(ClassifyError::Transport(
            "TypeError: NetworkError".to_string(),
        ))));
        assert_eq!(state.error_message(), Some(CONNECTIVITY_MESSAGE));
        assert!(!state.is_submitting());
    }

    #[test]
    fn test_mode_switch_clears_result_and_error() {
        let mut with_result = submitted_text("Hello");
        with_result.apply(Event::ResponseReceived(Ok(spam())));

        let mut with_error = State::new();
        with_error.apply(Event::SubmitRequested);

        for mut state in [with_result, with_error, State::new()] {
            for mode in [InputMode::File, InputMode::Text, InputMode::Text] {
                state.apply(Event::ModeSelected(mode));
                assert_eq!(state.view(), &ViewState::Empty);
                assert_eq!(state.mode(), mode);
            }
        }
    }

    #[test]
    fn test_single_flight() {
        let mut state = submitted_text("Hello");
        assert!(state.apply(Event::SubmitRequested).is_empty());
        assert!(state.apply(Event::SubmitRequested).is_empty());
        assert_eq!(state.dispatched_count(), 1);

        state.apply(Event::ResponseReceived(Ok(spam())));
        assert_eq!(state.completed_count(), 1);

        // stale duplicate response does not flip state twice
        assert!(state.apply(Event::ResponseReceived(Ok(spam()))).is_empty());
        assert_eq!(state.completed_count(), 1);

        assert_eq!(state.apply(Event::SubmitRequested).len(), 1);
        assert_eq!(state.dispatched_count(), 2);
    }

    #[test]
    fn test_idle_restored_once_per_submission() {
        let mut state = State::new();
        state.apply(Event::TextChanged("Hello".to_string()));
        let outcomes = [
            Ok(spam()),
            Err(ClassifyError::Remote("x".to_string())),
            Err(ClassifyError::Transport("y".to_string())),
        ];
        for (i, outcome) in outcomes.into_iter().enumerate() {
            state.apply(Event::SubmitRequested);
            assert!(state.is_submitting());
            state.apply(Event::ResponseReceived(outcome));
            assert!(!state.is_submitting());
            assert_eq!(state.completed_count(), i as u64 + 1);
            assert_eq!(state.dispatched_count(), state.completed_count());
        }
    }

    #[test]
    fn test_submit_clears_previous_result() {
        let mut state = submitted_text("Hello");
        state.apply(Event::ResponseReceived(Ok(spam())));
        state.apply(Event::SubmitRequested);
        assert_eq!(state.view(), &ViewState::Empty);
    }

    #[test]
    fn test_drop_with_no_files_keeps_selection() {
        let mut state = State::new();
        state.apply(Event::FilesDropped(Vec::new()));
        assert!(state.selected_file().is_none());
        assert_eq!(state.file_indicator(), None);

        state.apply(Event::FilePicked(Some(file("a.txt", 1))));
        state.apply(Event::DragEntered);
        state.apply(Event::FilesDropped(Vec::new()));
        assert_eq!(state.selected_file().unwrap().handle, 1);
        assert!(!state.is_drag_over());
    }

    #[test]
    fn test_drop_selects_first_file() {
        let mut state = State::new();
        state.apply(Event::FilePicked(Some(file("old.txt", 9))));
        state.apply(Event::FilesDropped(vec![file("b.txt", 2), file("c.pdf", 3)]));
        assert_eq!(state.selected_file().unwrap().handle, 2);
        assert_eq!(state.file_indicator().as_deref(), Some("Selected file: b.txt"));
    }

    #[test]
    fn test_empty_picker_clears_selection() {
        let mut state = State::new();
        state.apply(Event::FilePicked(Some(file("a.txt", 1))));
        state.apply(Event::FilePicked(None));
        assert!(state.selected_file().is_none());
        assert_eq!(state.file_indicator(), None);
    }

    #[test]
    fn test_drag_highlight() {
        let mut state = State::new();
        state.apply(Event::DragEntered);
        state.apply(Event::DragEntered);
        assert!(state.is_drag_over());
        state.apply(Event::DragLeft);
        assert!(!state.is_drag_over());
    }

    fn copied(result_generation: u64) -> Event {
        Event::CopyFinished {
            result_generation,
            outcome: Ok(()),
        }
    }

    fn copy_rejected(result_generation: u64) -> Event {
        Event::CopyFinished {
            result_generation,
            outcome: Err(ClassifyError::Clipboard("NotAllowedError".to_string())),
        }
    }

    fn showing_spam() -> State {
        let mut state = submitted_text("Hello");
        state.apply(Event::ResponseReceived(Ok(spam())));
        state
    }

    #[test]
    fn test_copy_feedback_reverts_after_delay() {
        let mut state = showing_spam();

        let commands = state.apply(Event::CopyRequested);
        assert_eq!(
            commands,
            vec![Command::WriteClipboard {
                text: "No reply needed.".to_string(),
                result_generation: 1,
            }]
        );

        let commands = state.apply(copied(1));
        assert_eq!(
            commands,
            vec![Command::ScheduleCopyReset {
                generation: 1,
                after_ms: 2000
            }]
        );
        assert_eq!(state.copy_label(), "Copied!");

        state.apply(Event::CopyFeedbackExpired(1));
        assert_eq!(state.copy_label(), "Copy");
        assert!(state.result().is_some());
    }

    #[test]
    fn test_older_copy_timer_does_not_cut_newer_feedback() {
        let mut state = showing_spam();
        state.apply(copied(1));
        state.apply(copied(1));

        state.apply(Event::CopyFeedbackExpired(1));
        assert_eq!(state.copy_feedback(), CopyFeedback::Copied);
        state.apply(Event::CopyFeedbackExpired(2));
        assert_eq!(state.copy_feedback(), CopyFeedback::Idle);
    }

    #[test]
    fn test_copy_failure_routes_to_error() {
        let mut state = showing_spam();
        let commands = state.apply(copy_rejected(1));
        assert_eq!(commands, vec![Command::RevealPanel(Panel::Error)]);
        assert_eq!(state.error_message(), Some(CLIPBOARD_MESSAGE));
    }

    #[test]
    fn test_late_copy_rejection_after_new_submit_is_ignored() {
        let mut state = showing_spam();
        state.apply(Event::CopyRequested);
        assert_eq!(state.apply(Event::SubmitRequested).len(), 1);

        assert!(state.apply(copy_rejected(1)).is_empty());
        assert!(state.is_submitting());
        assert_eq!(state.view(), &ViewState::Empty);

        assert!(state.apply(copied(1)).is_empty());
        assert_eq!(state.copy_feedback(), CopyFeedback::Idle);
    }

    #[test]
    fn test_late_copy_outcome_does_not_touch_next_result() {
        let mut state = showing_spam();
        state.apply(Event::CopyRequested);
        state.apply(Event::SubmitRequested);
        state.apply(Event::ResponseReceived(Ok(spam())));

        assert!(state.apply(copy_rejected(1)).is_empty());
        assert!(state.apply(copied(1)).is_empty());
        assert!(state.result().is_some());
        assert_eq!(state.copy_label(), "Copy");

        assert_eq!(state.apply(copied(2)).len(), 1);
        assert_eq!(state.copy_label(), "Copied!");
    }

    #[test]
    fn test_copy_outcome_after_mode_switch_is_ignored() {
        let mut state = showing_spam();
        state.apply(Event::CopyRequested);
        state.apply(Event::ModeSelected(InputMode::File));

        assert!(state.apply(copy_rejected(1)).is_empty());
        assert_eq!(state.view(), &ViewState::Empty);
    }

    #[test]
    fn test_copy_without_result_is_noop() {
        let mut state = State::new();
        assert!(state.apply(Event::CopyRequested).is_empty());
    }

    #[test]
    fn test_custom_copy_delay() {
        let mut state = State::new().with_copy_feedback_ms(500);
        state.apply(Event::TextChanged("Hello".to_string()));
        state.apply(Event::SubmitRequested);
        state.apply(Event::ResponseReceived(Ok(spam())));
        let commands = state.apply(copied(1));
        assert_eq!(
            commands,
            vec![Command::ScheduleCopyReset {
                generation: 1,
                after_ms: 500
            }]
        );
    }
}
