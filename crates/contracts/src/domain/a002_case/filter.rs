use super::aggregate::{Case, CaseStatus, CaseType};
use serde::{Deserialize, Serialize};

/// Case list filter.
///
/// `None` for status or type means "all". Serialized into the page query
/// string, so field names are kept short.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseFilter {
    #[serde(default, rename = "q", skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<CaseStatus>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub case_type: Option<CaseType>,
}

impl CaseFilter {
    pub fn is_empty(&self) -> bool {
        self.search.trim().is_empty() && self.status.is_none() && self.case_type.is_none()
    }

    /// Title contains the search term (case-insensitive), status and type
    /// match exactly when set.
    pub fn matches(&self, case: &Case) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = case.title.to_lowercase().contains(&needle);
        let matches_status = self.status.map_or(true, |s| case.status == s);
        let matches_type = self.case_type.map_or(true, |t| case.case_type == t);
        matches_search && matches_status && matches_type
    }

    pub fn apply<'a>(&self, cases: &'a [Case]) -> Vec<&'a Case> {
        cases.iter().filter(|c| self.matches(c)).collect()
    }
}

/// Headline counters shown above the case list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseStats {
    pub total: usize,
    pub active: usize,
    pub needs_attention: usize,
    pub completed: usize,
}

impl CaseStats {
    pub fn from_cases(cases: &[Case]) -> Self {
        let count = |status: CaseStatus| cases.iter().filter(|c| c.status == status).count();
        Self {
            total: cases.len(),
            active: count(CaseStatus::Active),
            needs_attention: count(CaseStatus::NeedsAttention),
            completed: count(CaseStatus::Completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_case::fixtures::all_cases;

    #[test]
    fn test_empty_filter_keeps_everything() {
        let filter = CaseFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(all_cases()).len(), all_cases().len());
    }

    #[test]
    fn test_status_filter_is_exact() {
        for status in CaseStatus::all() {
            let filter = CaseFilter {
                status: Some(status),
                ..Default::default()
            };
            let result = filter.apply(all_cases());
            assert!(result.iter().all(|c| c.status == status));
            let expected = all_cases().iter().filter(|c| c.status == status).count();
            assert_eq!(result.len(), expected);
        }
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let filter = CaseFilter {
            search: "AGREEMENT".into(),
            ..Default::default()
        };
        let titles: Vec<_> = filter
            .apply(all_cases())
            .iter()
            .map(|c| c.id.0)
            .collect();
        assert_eq!(titles, vec![1, 3, 4, 5]);

        let filter = CaseFilter {
            search: "xyz".into(),
            ..Default::default()
        };
        let result = filter.apply(all_cases());
        assert_eq!(result.len(), 1);
        assert!(result[0].title.contains("StartupXYZ"));
    }

    #[test]
    fn test_combined_filters() {
        let filter = CaseFilter {
            search: "agreement".into(),
            status: Some(CaseStatus::Active),
            case_type: Some(CaseType::Contract),
        };
        let result = filter.apply(all_cases());
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].title, "Freelance Agreement - DesignCo");
    }

    #[test]
    fn test_no_match() {
        let filter = CaseFilter {
            search: "merger".into(),
            ..Default::default()
        };
        assert!(filter.apply(all_cases()).is_empty());
    }

    #[test]
    fn test_stats_from_fixtures() {
        let stats = CaseStats::from_cases(all_cases());
        assert_eq!(
            stats,
            CaseStats {
                total: 5,
                active: 2,
                needs_attention: 1,
                completed: 1,
            }
        );
    }
}
