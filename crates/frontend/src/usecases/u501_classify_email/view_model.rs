//! Email classification - View Model
//!
//! Wraps the lifecycle state machine in a local signal and executes the
//! commands it returns (HTTP, clipboard, timers, scrolling).

use super::api;
use crate::shared::clipboard;
use crate::shared::config::ClientConfig;
use contracts::usecases::u501_classify_email::{
    ClassifierEvent, ClassifierState, ClassifyError, ClassificationRequest, Command, InputMode,
    Panel, SelectedFile, SlotGuard, SubmissionSlot,
};
use gloo_timers::future::TimeoutFuture;
use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::{File, FileList, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

#[derive(Clone, Copy)]
pub struct ClassifyEmailVm {
    pub state: RwSignal<ClassifierState<File>, LocalStorage>,
    /// Textarea contents. Copied into the state on submit.
    pub text: RwSignal<String>,
    pub result_ref: NodeRef<html::Div>,
    pub error_ref: NodeRef<html::Div>,
    slot: StoredValue<SubmissionSlot>,
    config: StoredValue<ClientConfig>,
}

impl ClassifyEmailVm {
    pub fn new(config: ClientConfig) -> Self {
        let state = ClassifierState::new().with_copy_feedback_ms(config.copy_feedback_ms);
        Self {
            state: RwSignal::new_local(state),
            text: RwSignal::new(String::new()),
            result_ref: NodeRef::new(),
            error_ref: NodeRef::new(),
            slot: StoredValue::new(SubmissionSlot::new()),
            config: StoredValue::new(config),
        }
    }

    pub fn mode(&self) -> InputMode {
        self.state.with(|s| s.mode())
    }

    pub fn is_submitting(&self) -> bool {
        self.state.with(|s| s.is_submitting())
    }

    pub fn select_mode(&self, mode: InputMode) {
        self.dispatch(ClassifierEvent::ModeSelected(mode));
    }

    /// Picker `change`: first file wins, an empty list clears the selection.
    pub fn pick_files(&self, files: Option<FileList>) {
        let first = collect_files(files).into_iter().next();
        self.dispatch(ClassifierEvent::FilePicked(first));
    }

    pub fn drop_files(&self, files: Option<FileList>) {
        self.dispatch(ClassifierEvent::FilesDropped(collect_files(files)));
    }

    pub fn drag_enter(&self) {
        if !self.state.with_untracked(|s| s.is_drag_over()) {
            self.dispatch(ClassifierEvent::DragEntered);
        }
    }

    pub fn drag_leave(&self) {
        self.dispatch(ClassifierEvent::DragLeft);
    }

    pub fn copy_reply(&self) {
        self.dispatch(ClassifierEvent::CopyRequested);
    }

    /// Start a classification unless one is already in flight.
    pub fn submit(&self) {
        let Some(guard) = self.slot.with_value(SubmissionSlot::try_acquire) else {
            log::debug!("submit ignored: {}", ClassifyError::Busy);
            return;
        };

        let text = self.text.get_untracked();
        let mut guard = Some(guard);
        self.apply(ClassifierEvent::TextChanged(text));
        for command in self.apply(ClassifierEvent::SubmitRequested) {
            self.run(command, &mut guard);
        }
        // validation failure: `guard` is still Some and releases the slot here
    }

    fn dispatch(&self, event: ClassifierEvent<File>) {
        let mut no_slot = None;
        for command in self.apply(event) {
            self.run(command, &mut no_slot);
        }
    }

    fn apply(&self, event: ClassifierEvent<File>) -> Vec<Command<File>> {
        self.state
            .try_update(|s| s.apply(event))
            .unwrap_or_default()
    }

    fn run(&self, command: Command<File>, guard: &mut Option<SlotGuard>) {
        match command {
            Command::Dispatch(request) => match guard.take() {
                Some(guard) => self.spawn_classify(request, guard),
                None => {
                    log::error!("dispatch without the submission slot");
                    self.dispatch(ClassifierEvent::ResponseReceived(Err(ClassifyError::Busy)));
                }
            },
            Command::WriteClipboard {
                text,
                result_generation,
            } => {
                let vm = *self;
                spawn_local(async move {
                    let outcome = clipboard::write_text(&text)
                        .await
                        .map_err(ClassifyError::Clipboard);
                    vm.dispatch(ClassifierEvent::CopyFinished {
                        result_generation,
                        outcome,
                    });
                });
            }
            Command::ScheduleCopyReset {
                generation,
                after_ms,
            } => {
                let vm = *self;
                spawn_local(async move {
                    TimeoutFuture::new(after_ms).await;
                    vm.dispatch(ClassifierEvent::CopyFeedbackExpired(generation));
                });
            }
            Command::RevealPanel(panel) => self.reveal(panel),
        }
    }

    fn spawn_classify(&self, request: ClassificationRequest<File>, guard: SlotGuard) {
        let vm = *self;
        let config = self.config.get_value();
        spawn_local(async move {
            let outcome = api::classify(&config, request).await;
            drop(guard);
            vm.dispatch(ClassifierEvent::ResponseReceived(outcome));
        });
    }

    /// Scroll the panel into view after the next paint.
    fn reveal(&self, panel: Panel) {
        let node_ref = match panel {
            Panel::Result => self.result_ref,
            Panel::Error => self.error_ref,
        };
        request_animation_frame(move || {
            if let Some(el) = node_ref.get_untracked() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                options.set_block(ScrollLogicalPosition::Nearest);
                el.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }
}

fn collect_files(files: Option<FileList>) -> Vec<SelectedFile<File>> {
    let Some(files) = files else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(|file| SelectedFile::new(file.name(), file.size() as u64, file))
        .collect()
}
