use serde::{Deserialize, Serialize};

/// Visual tone of a status value.
///
/// Statuses map onto a tone; the frontend maps tones onto badge colours and
/// CSS modifiers, so the colour scheme lives in one place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusTone {
    Success,
    Warning,
    Danger,
    Brand,
    Info,
    Accent,
    Neutral,
}

impl StatusTone {
    /// CSS modifier suffix, e.g. `tone--success`.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusTone::Success => "success",
            StatusTone::Warning => "warning",
            StatusTone::Danger => "danger",
            StatusTone::Brand => "brand",
            StatusTone::Info => "info",
            StatusTone::Accent => "accent",
            StatusTone::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for StatusTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
