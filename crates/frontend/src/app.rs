use crate::layout::app_services::AppServices;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Services live exactly as long as the root owner
    let services = AppServices::load();
    provide_context(services.clone());
    on_cleanup(move || services.dispose());

    provide_context(AppGlobalContext::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
