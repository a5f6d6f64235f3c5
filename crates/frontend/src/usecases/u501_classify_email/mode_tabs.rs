use super::view_model::ClassifyEmailVm;
use crate::shared::icons::icon;
use contracts::usecases::u501_classify_email::InputMode;
use leptos::prelude::*;

/// Text / file switcher. Switching clears the output panels.
#[component]
#[allow(non_snake_case)]
pub fn ModeTabs(vm: ClassifyEmailVm) -> impl IntoView {
    view! {
        <div class="tabs" role="tablist">
            {InputMode::all()
                .into_iter()
                .map(move |mode| {
                    let icon_name = match mode {
                        InputMode::Text => "document",
                        InputMode::File => "upload",
                    };
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class="tab-button"
                            class:active=move || vm.mode() == mode
                            aria-selected=move || (vm.mode() == mode).to_string()
                            data-tab=mode.as_str()
                            on:click=move |_| vm.select_mode(mode)
                        >
                            {icon(icon_name)}
                            " "
                            {mode.display_name()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
