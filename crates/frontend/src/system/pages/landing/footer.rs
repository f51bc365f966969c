use crate::shared::icons::icon;
use chrono::Datelike;
use contracts::shared::landing::{FooterLink, CONTACT, FOOTER_SECTIONS, LEGAL_LINKS, SOCIAL_LINKS};
use leptos::prelude::*;
use leptos_router::components::A;

fn footer_link(link: &FooterLink) -> AnyView {
    let link = *link;
    if link.is_internal() {
        view! { <A href=link.href>{link.label}</A> }.into_any()
    } else {
        view! { <a href=link.href>{link.label}</a> }.into_any()
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer">
            <div class="footer__grid">
                <div class="footer__brand">
                    <A href="/">
                        <span class="navbar__brand">
                            <span class="navbar__logo">{icon("scale")}</span>
                            <span class="navbar__title gradient-text">"LegalAI"</span>
                        </span>
                    </A>
                    <p>
                        "Transform complex legal documents into clear, understandable insights with AI-powered analysis, translation, and consultation."
                    </p>
                    <ul class="footer__contact">
                        <li>{icon("mail")}<span>{CONTACT.email}</span></li>
                        <li>{icon("phone")}<span>{CONTACT.phone}</span></li>
                        <li>{icon("map-pin")}<span>{CONTACT.location}</span></li>
                    </ul>
                    <div class="footer__social">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|social| view! {
                                <a class="footer__social-link" href=social.href aria-label=social.label>
                                    {icon(social.icon)}
                                </a>
                            })
                            .collect_view()}
                    </div>
                </div>

                {FOOTER_SECTIONS
                    .iter()
                    .map(|section| view! {
                        <div class="footer__section">
                            <h4>{section.title}</h4>
                            <ul>
                                {section
                                    .links
                                    .iter()
                                    .map(|link| view! { <li>{footer_link(link)}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="footer__bottom">
                <span>{format!("© {} LegalAI. All rights reserved.", year)}</span>
                <div class="footer__legal">
                    {LEGAL_LINKS.iter().map(footer_link).collect_view()}
                </div>
                <div class="footer__status">
                    <span class="status-dot"></span>
                    <span>"All systems operational"</span>
                </div>
            </div>
        </footer>
    }
}
