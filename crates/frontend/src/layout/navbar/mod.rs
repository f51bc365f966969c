//! Navbar: brand, route links and the mobile drawer.
//!
//! Rendered once by the shell above every page except the landing page,
//! which carries its own hero navigation.

use crate::layout::global_context::use_global_context;
use crate::shared::icons::icon;
use contracts::shared::routing::{NavItem, NAV_ITEMS};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
fn NavLink(item: NavItem, #[prop(optional)] mobile: bool) -> impl IntoView {
    let ctx = use_global_context();
    let location = use_location();
    let is_active = move || item.is_active(&location.pathname.get());
    let base = if mobile { "navbar__mobile-link" } else { "navbar__link" };

    view! {
        <A href=item.href>
            <span
                class=move || {
                    if is_active() { format!("{base} {base}--active") } else { base.to_string() }
                }
                on:click=move |_| ctx.close_mobile_menu()
            >
                {icon(item.icon)}
                <span>{item.label}</span>
            </span>
        </A>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_global_context();

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <A href="/">
                    <span class="navbar__brand" on:click=move |_| ctx.close_mobile_menu()>
                        <span class="navbar__logo">{icon("scale")}</span>
                        <span class="navbar__title gradient-text">"LegalAI"</span>
                    </span>
                </A>

                <div class="navbar__links">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| view! { <NavLink item=item /> })
                        .collect_view()}
                </div>

                <button
                    class="navbar__menu-btn"
                    aria-label="Toggle navigation"
                    on:click=move |_| ctx.toggle_mobile_menu()
                >
                    {move || if ctx.mobile_menu_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>

            <Show when=move || ctx.mobile_menu_open.get()>
                <div class="navbar__mobile">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|item| view! { <NavLink item=item mobile=true /> })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
