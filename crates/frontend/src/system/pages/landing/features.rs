use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::icons::icon;
use contracts::shared::landing::FEATURES;
use leptos::prelude::*;

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="landing-section landing-section--muted">
            <div class="section-heading">
                <h2>
                    "Powerful AI-Driven"
                    <span class="gradient-text block">"Legal Solutions"</span>
                </h2>
                <p>
                    "Transform your legal workflow with cutting-edge AI technology designed for modern legal professionals"
                </p>
            </div>

            <div class="feature-grid">
                {FEATURES
                    .iter()
                    .enumerate()
                    .map(|(index, feature)| view! {
                        <CardAnimated class="feature-card" delay_ms=stagger_delay(index, 100)>
                            <div class="feature-card__icon">{icon(feature.icon)}</div>
                            <h3 class="feature-card__title">{feature.title}</h3>
                            <p class="feature-card__description">{feature.description}</p>
                        </CardAnimated>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
