//! Marketing landing page at `/`.
//!
//! Sections top to bottom: hero (with its own navigation), features grid,
//! demo carousel, testimonials, footer. Content comes from
//! `contracts::shared::landing`.

mod demo;
mod features;
mod footer;
mod hero;
mod testimonials;

use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_CUSTOM;
use leptos::prelude::*;

pub use demo::DemoSection;
pub use features::FeaturesSection;
pub use footer::Footer;
pub use hero::Hero;
pub use testimonials::TestimonialsSection;

/// Anchor the hero's "Watch Demo" button scrolls to
pub const DEMO_ANCHOR: &str = "demo";

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <PageFrame page_id="landing--custom" category=PAGE_CAT_CUSTOM class="landing">
            <Hero />
            <FeaturesSection />
            <DemoSection />
            <TestimonialsSection />
            <Footer />
        </PageFrame>
    }
}
