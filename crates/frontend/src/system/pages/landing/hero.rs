use super::DEMO_ANCHOR;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use thaw::*;

fn scroll_to_demo() {
    let target = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(DEMO_ANCHOR));
    match target {
        Some(element) => element.scroll_into_view(),
        None => log::warn!("demo section #{} not mounted", DEMO_ANCHOR),
    }
}

#[component]
pub fn Hero() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <section class="hero">
            <div class="hero__bg" aria-hidden="true"></div>

            <nav class="hero__nav">
                <A href="/">
                    <span class="navbar__brand">
                        <span class="navbar__logo">{icon("scale")}</span>
                        <span class="navbar__title gradient-text">"LegalAI"</span>
                    </span>
                </A>
                <div class="hero__nav-links">
                    <A href="/cases">"Cases"</A>
                    <A href="/upload">"Upload"</A>
                    <Button appearance=ButtonAppearance::Secondary size=ButtonSize::Small>
                        "Sign In"
                    </Button>
                </div>
            </nav>

            <div class="hero__content">
                <div class="hero__badge floating">
                    {icon("sparkles")}
                    "AI-Powered Legal Analysis"
                </div>

                <h1 class="hero__title">
                    <div class="hero__line" style="animation-delay: 0ms;">"Transform Legal"</div>
                    <div class="hero__line gradient-text" style="animation-delay: 150ms;">"Documents Into"</div>
                    <div class="hero__line" style="animation-delay: 300ms;">"Clear Insights"</div>
                </h1>

                <p class="hero__subtitle">
                    "Experience the future of legal document analysis with AI-powered insights, real-time translation, and expert consultation, all in one professional platform."
                </p>

                <div class="hero__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| navigate("/upload", Default::default())
                    >
                        "Start Analysis"
                        {icon("arrow-right")}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| scroll_to_demo()>
                        {icon("play")}
                        "Watch Demo"
                    </Button>
                </div>

                <div class="hero__visual floating card-glass">
                    {["primary", "accent", "success"]
                        .into_iter()
                        .enumerate()
                        .map(|(column, tone)| {
                            let delay = |row: usize| format!("animation-delay: {}ms;", (column * 3 + row) * 100);
                            view! {
                                <div class="hero__skeleton">
                                    <div class=format!("skeleton skeleton--{tone}") style=delay(0)></div>
                                    <div class="skeleton skeleton--muted w-3-4" style=delay(1)></div>
                                    <div class="skeleton skeleton--muted w-1-2" style=delay(2)></div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
