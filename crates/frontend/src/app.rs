use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::ApiConfig;
use crate::shared::messages::Labels;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Backend address and message catalog are resolved once and shared via context.
    let api = ApiConfig::from_location();
    log::info!("API base: {}", api.base_url());
    provide_context(api);
    provide_context(Labels::from_navigator());

    view! {
        <AppRoutes />
    }
}
