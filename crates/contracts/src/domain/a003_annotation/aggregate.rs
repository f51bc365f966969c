use crate::domain::common::{FixtureRecord, StatusTone};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnnotationId(pub u32);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    Info,
    Warning,
    Critical,
}

impl AnnotationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationKind::Info => "info",
            AnnotationKind::Warning => "warning",
            AnnotationKind::Critical => "critical",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            AnnotationKind::Info => StatusTone::Accent,
            AnnotationKind::Warning => StatusTone::Warning,
            AnnotationKind::Critical => StatusTone::Danger,
        }
    }
}

/// A highlighted clause with a plain-language explanation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub id: AnnotationId,
    pub kind: AnnotationKind,
    /// Exact clause text as it appears in the document body
    pub text: String,
    pub explanation: String,
}

impl FixtureRecord for Annotation {
    fn fixture_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "annotation"
    }

    fn list_name() -> &'static str {
        "Annotations"
    }
}
