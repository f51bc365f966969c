pub mod app_services;
pub mod global_context;
pub mod navbar;
pub mod page_transition;
pub mod toast_service;

use crate::layout::app_services::use_services;
use contracts::shared::routing::AppRoute;
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use navbar::Navbar;
use page_transition::PageTransition;
use toast_service::Toaster;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |  Navbar (every route except "/")         |
/// +------------------------------------------+
/// |  PageTransition                          |
/// |    routed page                           |
/// +------------------------------------------+
///                                   Toaster
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let services = use_services();
    let location = use_location();
    let shows_navbar = move || AppRoute::from_path(&location.pathname.get()).shows_navbar();

    Effect::new(move |_| {
        let route = AppRoute::from_path(&location.pathname.get());
        if route == AppRoute::NotFound {
            log::warn!("no route for {}", location.pathname.get_untracked());
        }
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(route.title());
        }
    });

    view! {
        <div class="app-layout">
            <Show when=shows_navbar>
                <Navbar />
            </Show>
            <main class="app-main">
                <PageTransition duration_ms=services.config.transition.duration_ms>
                    {children()}
                </PageTransition>
            </main>
            <Toaster service=services.toasts />
        </div>
    }
}
