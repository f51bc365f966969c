//! Client-side route table.
//!
//! The router in the frontend matches the same paths; this module owns the
//! decisions that depend only on the path (which page, whether the shared
//! navbar is shown, which nav item is active).

/// One page of the application
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Landing,
    Upload,
    Document { id: String },
    Translate,
    Call,
    Workflow,
    Cases,
    NotFound,
}

impl AppRoute {
    /// Selects exactly one route for `path`. A trailing slash is ignored.
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed = path.trim_end_matches('/');
        if trimmed.is_empty() {
            return if path.starts_with('/') || path.is_empty() {
                AppRoute::Landing
            } else {
                AppRoute::NotFound
            };
        }

        match trimmed {
            "/upload" => AppRoute::Upload,
            "/translate" => AppRoute::Translate,
            "/call" => AppRoute::Call,
            "/workflow" => AppRoute::Workflow,
            "/cases" => AppRoute::Cases,
            other => match other.strip_prefix("/document/") {
                Some(id) if !id.is_empty() && !id.contains('/') => AppRoute::Document {
                    id: id.to_string(),
                },
                _ => AppRoute::NotFound,
            },
        }
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Landing => "/".into(),
            AppRoute::Upload => "/upload".into(),
            AppRoute::Document { id } => format!("/document/{}", id),
            AppRoute::Translate => "/translate".into(),
            AppRoute::Call => "/call".into(),
            AppRoute::Workflow => "/workflow".into(),
            AppRoute::Cases => "/cases".into(),
            AppRoute::NotFound => "/404".into(),
        }
    }

    /// The shared navbar is hidden only on the landing page, which has its own
    pub fn shows_navbar(&self) -> bool {
        !matches!(self, AppRoute::Landing)
    }

    /// Browser tab title
    pub fn title(&self) -> &'static str {
        match self {
            AppRoute::Landing => "LegalAI",
            AppRoute::Upload => "Document Upload | LegalAI",
            AppRoute::Document { .. } => "Document Analysis | LegalAI",
            AppRoute::Translate => "Document Translation | LegalAI",
            AppRoute::Call => "AI Legal Consultation | LegalAI",
            AppRoute::Workflow => "Contract Workflow | LegalAI",
            AppRoute::Cases => "Case Tracker | LegalAI",
            AppRoute::NotFound => "Page Not Found | LegalAI",
        }
    }
}

/// Entry of the shared navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub href: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}

impl NavItem {
    /// Exact path match, as the navbar highlights only the current page
    pub fn is_active(&self, path: &str) -> bool {
        let path = path.trim_end_matches('/');
        self.href == path
    }
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        href: "/cases",
        label: "Cases",
        icon: "bar-chart",
    },
    NavItem {
        href: "/upload",
        label: "Upload",
        icon: "upload",
    },
    NavItem {
        href: "/translate",
        label: "Translate",
        icon: "languages",
    },
    NavItem {
        href: "/workflow",
        label: "Workflow",
        icon: "file-text",
    },
    NavItem {
        href: "/call",
        label: "AI Call",
        icon: "video",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    const PATHS: [&str; 10] = [
        "/",
        "/upload",
        "/document/1",
        "/translate",
        "/call",
        "/workflow",
        "/cases",
        "/nope",
        "/document/",
        "/document/1/extra",
    ];

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/"), AppRoute::Landing);
        assert_eq!(AppRoute::from_path(""), AppRoute::Landing);
        assert_eq!(AppRoute::from_path("/upload/"), AppRoute::Upload);
        assert_eq!(AppRoute::from_path("/cases?q=lease"), AppRoute::Cases);
        assert_eq!(
            AppRoute::from_path("/document/42"),
            AppRoute::Document { id: "42".into() }
        );
        assert_eq!(AppRoute::from_path("/document/"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/document/1/extra"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/admin"), AppRoute::NotFound);
    }

    #[test]
    fn test_navbar_shown_for_every_path_but_root() {
        for path in PATHS {
            let route = AppRoute::from_path(path);
            let navbars = usize::from(route.shows_navbar());
            if path == "/" {
                assert_eq!(navbars, 0, "{}", path);
            } else {
                assert_eq!(navbars, 1, "{}", path);
            }
        }
    }

    #[test]
    fn test_path_round_trip() {
        for path in &PATHS[..7] {
            assert_eq!(AppRoute::from_path(path).path(), *path);
        }
    }

    #[test]
    fn test_nav_item_active_exact_match() {
        let cases = NAV_ITEMS[0];
        assert!(cases.is_active("/cases"));
        assert!(cases.is_active("/cases/"));
        assert!(!cases.is_active("/"));
        assert!(!cases.is_active("/cases-archive"));
        let active: Vec<_> = NAV_ITEMS
            .iter()
            .filter(|item| item.is_active("/upload"))
            .map(|item| item.label)
            .collect();
        assert_eq!(active, vec!["Upload"]);
    }
}
