use contracts::domain::a002_case::{CaseFilter, CaseStatus, CaseType};
use leptos::prelude::*;

/// Select value meaning "no restriction"
pub const ALL: &str = "all";

/// Widget-facing filter signals. Selects hold `ALL` or the enum's `as_str`.
#[derive(Clone, Copy)]
pub struct CaseListState {
    pub search: RwSignal<String>,
    pub status: RwSignal<String>,
    pub case_type: RwSignal<String>,
}

impl CaseListState {
    pub fn from_filter(filter: &CaseFilter) -> Self {
        Self {
            search: RwSignal::new(filter.search.clone()),
            status: RwSignal::new(filter.status.map_or(ALL, |s| s.as_str()).to_string()),
            case_type: RwSignal::new(filter.case_type.map_or(ALL, |t| t.as_str()).to_string()),
        }
    }

    /// Tracked read of the current filter
    pub fn filter(&self) -> CaseFilter {
        CaseFilter {
            search: self.search.get(),
            status: CaseStatus::parse(&self.status.get()),
            case_type: CaseType::parse(&self.case_type.get()),
        }
    }

    pub fn clear(&self) {
        self.search.set(String::new());
        self.status.set(ALL.to_string());
        self.case_type.set(ALL.to_string());
    }
}

/// Parses `?q=..&status=..&type=..`; anything unparseable means no filter
pub fn filter_from_query(search: &str) -> CaseFilter {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default()
}

/// Query string for `filter`, empty when nothing is filtered
pub fn filter_to_query(filter: &CaseFilter) -> String {
    if filter.is_empty() {
        return String::new();
    }
    let mut filter = filter.clone();
    filter.search = filter.search.trim().to_string();
    match serde_qs::to_string(&filter) {
        Ok(query) => format!("?{}", query),
        Err(e) => {
            log::warn!("case filter not serialisable: {}", e);
            String::new()
        }
    }
}

/// Restores the filter from the address bar and keeps the address bar in
/// step with later changes
pub fn create_state() -> CaseListState {
    let search = window()
        .location()
        .search()
        .unwrap_or_default();
    let state = CaseListState::from_filter(&filter_from_query(&search));

    Effect::new(move |_| {
        let query = filter_to_query(&state.filter());
        let location = window().location();
        let path = location.pathname().unwrap_or_default();
        let current = location.search().unwrap_or_default();
        // Only update URL if it actually changed
        if current == query {
            return;
        }
        if let Ok(history) = window().history() {
            let _ = history.replace_state_with_url(
                &wasm_bindgen::JsValue::NULL,
                "",
                Some(&format!("{}{}", path, query)),
            );
        }
    });

    state
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_restores_filter() {
        let filter = filter_from_query("?q=lease&status=needs-attention&type=nda");
        assert_eq!(filter.search, "lease");
        assert_eq!(filter.status, Some(CaseStatus::NeedsAttention));
        assert_eq!(filter.case_type, Some(CaseType::Nda));
    }

    #[test]
    fn test_empty_or_garbage_query_is_no_filter() {
        assert!(filter_from_query("").is_empty());
        assert!(filter_from_query("?status=archived").is_empty());
        assert_eq!(filter_to_query(&CaseFilter::default()), "");
    }

    #[test]
    fn test_filter_writes_only_set_fields() {
        let filter = CaseFilter {
            search: String::new(),
            status: Some(CaseStatus::Active),
            case_type: None,
        };
        assert_eq!(filter_to_query(&filter), "?status=active");
        assert_eq!(filter_from_query(&filter_to_query(&filter)), filter);
    }
}
