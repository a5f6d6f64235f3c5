//! Email classification - View Component

use super::error_panel::ErrorPanel;
use super::file_drop::FileDrop;
use super::mode_tabs::ModeTabs;
use super::result_panel::ResultPanel;
use super::view_model::ClassifyEmailVm;
use crate::shared::config::ClientConfig;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_USECASE;
use contracts::usecases::u501_classify_email::InputMode;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn ClassifyEmailPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::from_window);
    let vm = ClassifyEmailVm::new(config);

    let surface_style = move |mode: InputMode| {
        if vm.mode() == mode {
            "display: block;"
        } else {
            "display: none;"
        }
    };

    view! {
        <PageFrame page_id="u501_classify_email--usecase" category=PAGE_CAT_USECASE>
            <div class="page__header">
                <h1 class="page__title">
                    {icon("mail")}
                    " Email Classifier"
                </h1>
                <p class="page__subtitle">
                    "Paste an email or upload a .txt / .pdf file to get its category and a suggested reply."
                </p>
            </div>

            <div class="page__content">
                <ModeTabs vm=vm />

                <div class="tab-content" style=move || surface_style(InputMode::Text)>
                    <Textarea
                        value=vm.text
                        placeholder="Paste the email text here... (Ctrl+Enter to classify)"
                        attr:id="email-text"
                        attr:style="width: 100%; min-height: 220px; resize: vertical;"
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && ev.ctrl_key() {
                                ev.prevent_default();
                                vm.submit();
                            }
                        }
                    />
                </div>

                <div class="tab-content" style=move || surface_style(InputMode::File)>
                    <FileDrop vm=vm />
                </div>

                <div class="classify-actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        attr:id="classify-button"
                        disabled=Signal::derive(move || vm.is_submitting())
                        on_click=move |_| vm.submit()
                    >
                        {move || {
                            vm.is_submitting()
                                .then(|| view! { <Spinner size=SpinnerSize::Small /> })
                        }}
                        <span class="button-text">
                            {move || vm.state.with(|s| s.trigger_label())}
                        </span>
                    </Button>
                </div>

                <ErrorPanel vm=vm />
                <ResultPanel vm=vm />
            </div>
        </PageFrame>
    }
}
