use super::view_model::ClassifyEmailVm;
use crate::shared::icons::icon;
use contracts::usecases::u501_classify_email::PICKER_ACCEPT;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

/// Keep the browser from opening the dropped file.
fn suppress_default(ev: &DragEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

/// File picker plus drop zone, both feeding the same selection.
#[component]
#[allow(non_snake_case)]
pub fn FileDrop(vm: ClassifyEmailVm) -> impl IntoView {
    let handle_file_select = move |ev: web_sys::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok());

        if let Some(input) = input {
            vm.pick_files(input.files());
        }
    };

    let is_drag_over = move || vm.state.with(|s| s.is_drag_over());

    view! {
        <div class="file-upload-wrapper">
            <input
                id="file-input"
                type="file"
                accept=PICKER_ACCEPT
                class="file-input"
                style="display: none;"
                on:change=handle_file_select
            />
            <label
                for="file-input"
                class="file-label"
                class:drag-over=is_drag_over
                style=move || {
                    if is_drag_over() {
                        "border-color: var(--primary-color); background: rgba(37, 99, 235, 0.1);"
                    } else {
                        "border-color: var(--border-color); background: var(--background-color);"
                    }
                }
                on:dragenter=move |ev: DragEvent| {
                    suppress_default(&ev);
                    vm.drag_enter();
                }
                on:dragover=move |ev: DragEvent| {
                    suppress_default(&ev);
                    vm.drag_enter();
                }
                on:dragleave=move |ev: DragEvent| {
                    suppress_default(&ev);
                    vm.drag_leave();
                }
                on:drop=move |ev: DragEvent| {
                    suppress_default(&ev);
                    vm.drop_files(ev.data_transfer().and_then(|dt| dt.files()));
                }
            >
                {icon("upload-large")}
                <span class="file-label__title">"Click to choose a file or drag it here"</span>
                <span class="file-label__hint">"Accepted formats: .txt, .pdf"</span>
            </label>
            {move || {
                vm.state
                    .with(|s| s.file_indicator())
                    .map(|label| view! { <p id="file-name" class="file-name show">{label}</p> })
            }}
        </div>
    }
}
