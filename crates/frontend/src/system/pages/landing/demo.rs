use super::DEMO_ANCHOR;
use crate::shared::icons::icon;
use contracts::shared::carousel::Carousel;
use contracts::shared::landing::DEMO_SLIDES;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

fn slide_preview(id: &'static str) -> AnyView {
    match id {
        "analysis" => view! {
            <div class="demo-preview">
                <div class="demo-preview__doc">
                    <div class="skeleton skeleton--primary w-3-4"></div>
                    <div class="skeleton skeleton--muted"></div>
                    <div class="skeleton skeleton--muted w-2-3"></div>
                </div>
                <div class="demo-preview__badges">
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Warning>"Warning"</Badge>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Critical"</Badge>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>"Info"</Badge>
                </div>
            </div>
        }
        .into_any(),
        "translation" => view! {
            <div class="demo-preview demo-preview--split">
                <div>
                    <h4>"Legal Text"</h4>
                    <div class="demo-preview__quote">"\"Whereas the party of the first part...\""</div>
                </div>
                <div>
                    <h4>"Plain English"</h4>
                    <div class="demo-preview__quote demo-preview__quote--accent">"\"Since both companies agree...\""</div>
                </div>
            </div>
        }
        .into_any(),
        _ => view! {
            <div class="demo-preview">
                <div class="demo-flow">
                    <div class="demo-flow__node tone--success"></div>
                    <div class="demo-flow__line"></div>
                    <div class="demo-flow__node tone--warning"></div>
                    <div class="demo-flow__line"></div>
                    <div class="demo-flow__node tone--neutral"></div>
                </div>
                <div class="demo-flow__labels">
                    <span>"Signed"</span>
                    <span>"Review"</span>
                    <span>"Expire"</span>
                </div>
            </div>
        }
        .into_any(),
    }
}

/// Route opened by "Try Interactive Demo" for each slide
fn slide_route(id: &str) -> &'static str {
    match id {
        "analysis" => "/upload",
        "translation" => "/translate",
        _ => "/workflow",
    }
}

#[component]
pub fn DemoSection() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(DEMO_SLIDES.len()));
    let active = move || DEMO_SLIDES[carousel.get().index()];
    let navigate = use_navigate();

    view! {
        <section class="landing-section" id=DEMO_ANCHOR>
            <div class="section-heading">
                <h2>
                    "See LegalAI"
                    <span class="gradient-text block">"In Action"</span>
                </h2>
                <p>"Experience the power of AI-driven legal analysis through our interactive demonstrations"</p>
            </div>

            <div class="demo-layout">
                <div class="demo-tabs">
                    {DEMO_SLIDES
                        .iter()
                        .enumerate()
                        .map(|(index, slide)| view! {
                            <button
                                class="demo-tab"
                                class:demo-tab--active=move || carousel.get().index() == index
                                on:click=move |_| carousel.update(|c| c.select(index))
                            >
                                <span class="demo-tab__icon">{icon(slide.icon)}</span>
                                <span class="demo-tab__text">
                                    <h3>{slide.title}</h3>
                                    <p>{slide.description}</p>
                                </span>
                            </button>
                        })
                        .collect_view()}
                </div>

                <Card class="demo-stage">
                    <div class="demo-stage__header">
                        <h3>{move || active().title}</h3>
                        <div class="demo-stage__arrows">
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                on_click=move |_| carousel.update(|c| c.prev())
                            >
                                {icon("chevron-left")}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                on_click=move |_| carousel.update(|c| c.next())
                            >
                                {icon("chevron-right")}
                            </Button>
                        </div>
                    </div>
                    <div class="demo-stage__body">
                        {move || slide_preview(active().id)}
                    </div>
                    <div class="demo-stage__actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| navigate(slide_route(active().id), Default::default())
                        >
                            {icon("play")}
                            "Try Interactive Demo"
                        </Button>
                    </div>
                </Card>
            </div>

            <div class="demo-dots">
                {(0..DEMO_SLIDES.len())
                    .map(|index| view! {
                        <button
                            class="demo-dot"
                            class:demo-dot--active=move || carousel.get().index() == index
                            aria-label=format!("Show demo {}", index + 1)
                            on:click=move |_| carousel.update(|c| c.select(index))
                        ></button>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::routing::AppRoute;

    #[test]
    fn test_slide_routes_exist() {
        for slide in DEMO_SLIDES {
            assert_ne!(AppRoute::from_path(slide_route(slide.id)), AppRoute::NotFound);
        }
    }
}
