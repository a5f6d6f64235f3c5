use crate::shared::config::ClientConfig;
use crate::usecases::u501_classify_email::ClassifyEmailPage;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Resolved once per page session from window.location.
    let config = ClientConfig::from_window();
    log::info!("email classifier loaded, endpoint {}", config.classify_url());
    provide_context(config);

    view! {
        <ClassifyEmailPage />
    }
}
