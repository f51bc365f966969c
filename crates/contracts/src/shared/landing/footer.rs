#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl FooterLink {
    /// In-app routes go through the router, `#` placeholders stay plain anchors
    pub fn is_internal(&self) -> bool {
        self.href.starts_with('/')
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterSection {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub icon: &'static str,
    pub label: &'static str,
    pub href: &'static str,
}

pub struct Contact {
    pub email: &'static str,
    pub phone: &'static str,
    pub location: &'static str,
}

pub const CONTACT: Contact = Contact {
    email: "contact@legalai.com",
    phone: "+1 (555) 123-4567",
    location: "San Francisco, CA",
};

const fn link(label: &'static str, href: &'static str) -> FooterLink {
    FooterLink { label, href }
}

pub const FOOTER_SECTIONS: [FooterSection; 4] = [
    FooterSection {
        title: "Product",
        links: &[
            link("Document Analysis", "/upload"),
            link("AI Consultation", "/call"),
            link("Translation", "/translate"),
            link("Workflow", "/workflow"),
            link("Case Tracker", "/cases"),
        ],
    },
    FooterSection {
        title: "Solutions",
        links: &[
            link("Law Firms", "#"),
            link("Corporate Legal", "#"),
            link("Solo Practitioners", "#"),
            link("Legal Departments", "#"),
            link("Compliance Teams", "#"),
        ],
    },
    FooterSection {
        title: "Resources",
        links: &[
            link("Documentation", "#"),
            link("API Reference", "#"),
            link("Case Studies", "#"),
            link("Blog", "#"),
            link("Webinars", "#"),
        ],
    },
    FooterSection {
        title: "Company",
        links: &[
            link("About Us", "#"),
            link("Careers", "#"),
            link("Press", "#"),
            link("Partners", "#"),
            link("Contact", "#"),
        ],
    },
];

pub const LEGAL_LINKS: [FooterLink; 4] = [
    link("Privacy Policy", "#"),
    link("Terms of Service", "#"),
    link("Cookie Policy", "#"),
    link("Security", "#"),
];

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        icon: "linkedin",
        label: "LinkedIn",
        href: "#",
    },
    SocialLink {
        icon: "twitter",
        label: "Twitter",
        href: "#",
    },
    SocialLink {
        icon: "facebook",
        label: "Facebook",
        href: "#",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::routing::AppRoute;

    #[test]
    fn test_internal_links_resolve_to_routes() {
        for section in FOOTER_SECTIONS {
            for link in section.links.iter().filter(|l| l.is_internal()) {
                assert_ne!(AppRoute::from_path(link.href), AppRoute::NotFound, "{}", link.href);
            }
        }
    }
}
