use super::view_model::ClassifyEmailVm;
use crate::shared::icons::icon;
use contracts::usecases::u501_classify_email::CopyFeedback;
use leptos::prelude::*;
use thaw::*;

/// Category, confidence and suggested reply of the last successful request.
#[component]
#[allow(non_snake_case)]
pub fn ResultPanel(vm: ClassifyEmailVm) -> impl IntoView {
    let result = Memo::new(move |_| vm.state.with(|s| s.result().cloned()));
    let copied = move || vm.state.with(|s| s.copy_feedback() == CopyFeedback::Copied);

    view! {
        <div
            node_ref=vm.result_ref
            id="results-section"
            class="results-section"
            style=move || if result.with(Option::is_some) { "display: block;" } else { "display: none;" }
        >
            {move || {
                result
                    .get()
                    .map(|r| {
                        let pct = r.confidence_percent();
                        let category_class = format!("category-value {}", r.category_style_key());
                        view! {
                            <div class="result-card">
                                <div class="result-header">
                                    <h2>"Classification Result"</h2>
                                    <span id="confidence-badge" class="confidence-badge">
                                        {format!("{pct}%")}
                                    </span>
                                </div>
                                <div class="result-item">
                                    <span class="result-label">"Category:"</span>
                                    <span id="category-value" class=category_class>
                                        {r.category.clone()}
                                    </span>
                                </div>
                                <div class="result-item">
                                    <span class="result-label">"Confidence:"</span>
                                    <div class="confidence-bar">
                                        <div
                                            id="confidence-fill"
                                            class="confidence-fill"
                                            style=format!("width: {pct}%;")
                                        ></div>
                                    </div>
                                    <span id="confidence-percentage">{format!("{pct}%")}</span>
                                </div>
                                {r
                                    .processed_text_length
                                    .map(|len| {
                                        view! {
                                            <div class="result-meta">
                                                {format!("Processed text: {len} characters")}
                                            </div>
                                        }
                                    })}
                            </div>
                            <div class="response-card">
                                <div class="result-header">
                                    <h3>"Suggested Reply"</h3>
                                    <Button
                                        appearance=ButtonAppearance::Secondary
                                        attr:id="copy-button"
                                        on_click=move |_| vm.copy_reply()
                                    >
                                        {move || if copied() { icon("check") } else { icon("copy") }}
                                        " "
                                        {move || vm.state.with(|s| s.copy_label())}
                                    </Button>
                                </div>
                                <div id="response-text" class="response-text" style="white-space: pre-wrap;">
                                    {r.suggested_response.clone()}
                                </div>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
