use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();

    view! {
        <PageFrame page_id="not_found--system" category=PAGE_CAT_SYSTEM class="not-found">
            <div class="not-found__body">
                <div class="not-found__icon">{icon("alert-circle")}</div>
                <h1>"404"</h1>
                <p>"Oops! Page not found"</p>
                <p class="not-found__path">{move || location.pathname.get()}</p>
                <A href="/">
                    <span class="not-found__home">{icon("arrow-left")}"Return to Home"</span>
                </A>
            </div>
        </PageFrame>
    }
}
