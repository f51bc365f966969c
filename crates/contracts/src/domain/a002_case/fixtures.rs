use super::aggregate::{Case, CaseId, CasePriority, CaseStatus, CaseType};
use once_cell::sync::Lazy;

static CASES: Lazy<Vec<Case>> = Lazy::new(|| {
    vec![
        Case {
            id: CaseId(1),
            title: "TechCorp Employment Agreement".into(),
            case_type: CaseType::Employment,
            status: CaseStatus::Active,
            priority: CasePriority::High,
            last_activity: "2 hours ago".into(),
            documents: 3,
            ai_interactions: 15,
            assigned_to: Some("Sarah Johnson".into()),
            due_date: Some("2024-01-15".into()),
        },
        Case {
            id: CaseId(2),
            title: "Consulting Services Contract".into(),
            case_type: CaseType::Contract,
            status: CaseStatus::Pending,
            priority: CasePriority::Medium,
            last_activity: "1 day ago".into(),
            documents: 2,
            ai_interactions: 8,
            assigned_to: None,
            due_date: Some("2024-01-20".into()),
        },
        Case {
            id: CaseId(3),
            title: "Non-Disclosure Agreement - StartupXYZ".into(),
            case_type: CaseType::Nda,
            status: CaseStatus::Completed,
            priority: CasePriority::Low,
            last_activity: "3 days ago".into(),
            documents: 1,
            ai_interactions: 5,
            assigned_to: Some("Mike Chen".into()),
            due_date: None,
        },
        Case {
            id: CaseId(4),
            title: "Office Lease Agreement".into(),
            case_type: CaseType::Lease,
            status: CaseStatus::NeedsAttention,
            priority: CasePriority::High,
            last_activity: "5 hours ago".into(),
            documents: 4,
            ai_interactions: 22,
            assigned_to: Some("Sarah Johnson".into()),
            due_date: Some("2024-01-12".into()),
        },
        Case {
            id: CaseId(5),
            title: "Freelance Agreement - DesignCo".into(),
            case_type: CaseType::Contract,
            status: CaseStatus::Active,
            priority: CasePriority::Medium,
            last_activity: "6 hours ago".into(),
            documents: 2,
            ai_interactions: 12,
            assigned_to: None,
            due_date: Some("2024-01-25".into()),
        },
    ]
});

/// All fixture cases, in display order
pub fn all_cases() -> &'static [Case] {
    &CASES
}

pub fn find_case(id: CaseId) -> Option<&'static Case> {
    CASES.iter().find(|c| c.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_ids_are_unique() {
        let mut ids: Vec<_> = all_cases().iter().map(|c| c.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), all_cases().len());
    }

    #[test]
    fn test_find_case() {
        assert_eq!(
            find_case(CaseId(4)).map(|c| c.title.as_str()),
            Some("Office Lease Agreement")
        );
        assert!(find_case(CaseId(99)).is_none());
    }
}
