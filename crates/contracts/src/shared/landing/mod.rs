//! Static marketing content of the landing page.
//!
//! Presentation lives in the frontend; the records here are plain data so
//! the counts and invariants can be checked on the host.

pub mod demo_slides;
pub mod features;
pub mod footer;
pub mod testimonials;

pub use demo_slides::{DemoSlide, DEMO_SLIDES};
pub use features::{Feature, FEATURES};
pub use footer::{
    Contact, FooterLink, FooterSection, SocialLink, CONTACT, FOOTER_SECTIONS, LEGAL_LINKS,
    SOCIAL_LINKS,
};
pub use testimonials::{Testimonial, TESTIMONIALS, TRUST_STATS};
