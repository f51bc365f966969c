use crate::shared::components::card_animated::{stagger_delay, CardAnimated};
use crate::shared::icons::icon;
use contracts::shared::landing::{Testimonial, TESTIMONIALS, TRUST_STATS};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

fn stars(testimonial: &Testimonial) -> impl IntoView {
    let (filled, empty) = testimonial.stars();
    let star = |class: &'static str| view! { <span class=class>{icon("star")}</span> };
    view! {
        <div class="stars" aria-label=format!("{} out of 5", filled)>
            {(0..filled).map(|_| star("star star--filled")).collect_view()}
            {(0..empty).map(|_| star("star")).collect_view()}
        </div>
    }
}

#[component]
pub fn TestimonialsSection() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <section class="landing-section">
            <div class="section-heading">
                <h2>
                    "Trusted by Legal"
                    <span class="gradient-text block">"Professionals"</span>
                </h2>
                <p>
                    "Join thousands of legal professionals who rely on LegalAI for faster, more accurate document analysis and consultation"
                </p>
            </div>

            <div class="trust-stats">
                {TRUST_STATS
                    .iter()
                    .map(|(value, label)| view! {
                        <div class="trust-stat">
                            <div class="trust-stat__value">{*value}</div>
                            <div class="trust-stat__label">{*label}</div>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="testimonial-grid">
                {TESTIMONIALS
                    .iter()
                    .enumerate()
                    .map(|(index, t)| {
                        let class = if t.featured {
                            "testimonial testimonial--featured"
                        } else {
                            "testimonial card-glass"
                        };
                        view! {
                            <CardAnimated class=class delay_ms=stagger_delay(index, 100)>
                                <div class="testimonial__quote-icon">{icon("quote")}</div>
                                <blockquote class="testimonial__quote">{format!("\"{}\"", t.quote)}</blockquote>
                                <div class="testimonial__author">
                                    <div class="avatar">{t.initials()}</div>
                                    <div>
                                        <div class="testimonial__name">{t.name}</div>
                                        <div class="testimonial__role">{format!("{} at {}", t.role, t.company)}</div>
                                        {stars(t)}
                                    </div>
                                </div>
                            </CardAnimated>
                        }
                    })
                    .collect_view()}
            </div>

            <Card class="cta-card">
                <h3>"Join the Legal AI Revolution"</h3>
                <p>"Don't let complex legal documents slow you down. Experience the future of legal analysis today."</p>
                <div class="cta-card__actions">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| navigate("/upload", Default::default())
                    >
                        "Start Your Free Trial"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary>"Contact Sales"</Button>
                </div>
                <p class="cta-card__note">"No credit card required • 14-day free trial • Cancel anytime"</p>
            </Card>
        </section>
    }
}
