use crate::domain::common::{FixtureRecord, StatusTone};
use serde::{Deserialize, Serialize};

/// Id of a case; doubles as the `:id` segment of `/document/:id`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CaseId(pub u32);

impl CaseId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn from_string(s: &str) -> Result<Self, String> {
        s.trim()
            .parse::<u32>()
            .map(CaseId)
            .map_err(|e| format!("Invalid case id '{}': {}", s, e))
    }

    pub fn as_string(&self) -> String {
        self.0.to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseType {
    Employment,
    Contract,
    Nda,
    Lease,
}

impl CaseType {
    pub fn all() -> [CaseType; 4] {
        [
            CaseType::Employment,
            CaseType::Contract,
            CaseType::Nda,
            CaseType::Lease,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseType::Employment => "employment",
            CaseType::Contract => "contract",
            CaseType::Nda => "nda",
            CaseType::Lease => "lease",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|t| t.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaseType::Employment => "Employment",
            CaseType::Contract => "Contract",
            CaseType::Nda => "NDA",
            CaseType::Lease => "Lease",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CaseStatus {
    Active,
    Pending,
    Completed,
    NeedsAttention,
}

impl CaseStatus {
    pub fn all() -> [CaseStatus; 4] {
        [
            CaseStatus::Active,
            CaseStatus::Pending,
            CaseStatus::Completed,
            CaseStatus::NeedsAttention,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Active => "active",
            CaseStatus::Pending => "pending",
            CaseStatus::Completed => "completed",
            CaseStatus::NeedsAttention => "needs-attention",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|st| st.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CaseStatus::Active => "Active",
            CaseStatus::Pending => "Pending",
            CaseStatus::Completed => "Completed",
            CaseStatus::NeedsAttention => "Needs Attention",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            CaseStatus::Active => StatusTone::Brand,
            CaseStatus::Pending => StatusTone::Warning,
            CaseStatus::Completed => StatusTone::Success,
            CaseStatus::NeedsAttention => StatusTone::Danger,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CasePriority {
    High,
    Medium,
    Low,
}

impl CasePriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            CasePriority::High => "high",
            CasePriority::Medium => "medium",
            CasePriority::Low => "low",
        }
    }

    pub fn tone(&self) -> StatusTone {
        match self {
            CasePriority::High => StatusTone::Danger,
            CasePriority::Medium => StatusTone::Warning,
            CasePriority::Low => StatusTone::Neutral,
        }
    }
}

/// A tracked legal matter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub id: CaseId,
    pub title: String,
    pub case_type: CaseType,
    pub status: CaseStatus,
    pub priority: CasePriority,
    pub last_activity: String,
    pub documents: u32,
    pub ai_interactions: u32,
    pub assigned_to: Option<String>,
    pub due_date: Option<String>,
}

impl Case {
    /// Route of the document viewer for this case
    pub fn document_href(&self) -> String {
        format!("/document/{}", self.id.as_string())
    }
}

impl FixtureRecord for Case {
    fn fixture_index() -> &'static str {
        "a002"
    }

    fn collection_name() -> &'static str {
        "case"
    }

    fn list_name() -> &'static str {
        "Case Tracker"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_names() {
        assert_eq!(Case::full_name(), "a002_case");
        assert_eq!(Case::list_name(), "Case Tracker");
    }

    #[test]
    fn test_status_round_trips_through_str() {
        for status in CaseStatus::all() {
            assert_eq!(CaseStatus::parse(status.as_str()), Some(status));
        }
        assert_eq!(CaseStatus::parse("all"), None);
    }

    #[test]
    fn test_type_parses_only_exact_names() {
        for case_type in CaseType::all() {
            assert_eq!(CaseType::parse(case_type.as_str()), Some(case_type));
        }
        assert_eq!(CaseType::parse("NDA"), None);
        assert_eq!(CaseType::parse(""), None);
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let value = toml::Value::try_from(CaseStatus::NeedsAttention).unwrap();
        assert_eq!(value.as_str(), Some("needs-attention"));
    }

    #[test]
    fn test_case_id_parsing() {
        assert_eq!(CaseId::from_string("4"), Ok(CaseId(4)));
        assert!(CaseId::from_string("abc").is_err());
    }
}
