use super::view_model::ClassifyEmailVm;
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn ErrorPanel(vm: ClassifyEmailVm) -> impl IntoView {
    let message = Memo::new(move |_| vm.state.with(|s| s.error_message().map(str::to_string)));

    view! {
        <div
            node_ref=vm.error_ref
            id="error-section"
            class="error-section"
            style=move || if message.with(Option::is_some) { "display: block;" } else { "display: none;" }
        >
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span id="error-message" class="warning-box__text">
                    {move || message.get().unwrap_or_default()}
                </span>
            </div>
        </div>
    }
}
