//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a002_case--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The `--` separator keeps the entity searchable: copy the id from the DOM
//! inspector and it leads to the matching `domain/` or `usecases/` directory.

/// List of records with filters.
pub const PAGE_CAT_LIST: &str = "list";

/// Single record view.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Interactive visualisation.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Use-case page (upload, translation, consultation).
pub const PAGE_CAT_USECASE: &str = "usecase";

/// Application pages without a domain entity (not found).
pub const PAGE_CAT_SYSTEM: &str = "system";

/// Free-form marketing layout, exempt from the header/content structure.
pub const PAGE_CAT_CUSTOM: &str = "custom";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_USECASE,
    PAGE_CAT_SYSTEM,
    PAGE_CAT_CUSTOM,
];

/// `{entity}--{category}`; `entity` is a record or use case `full_name()`
pub fn page_id(entity: &str, category: &str) -> String {
    format!("{entity}--{category}")
}

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    let parts: Vec<&str> = id.splitn(2, "--").collect();
    parts.len() == 2 && !parts[0].is_empty() && !parts[1].is_empty()
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

/// Root CSS class for a category
pub fn page_class(category: &str) -> &'static str {
    match category {
        PAGE_CAT_DETAIL => "page page--detail",
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        PAGE_CAT_CUSTOM => "page page--custom",
        _ => "page",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_id_format() {
        assert!(is_valid_page_id("a002_case--list"));
        assert!(!is_valid_page_id("a002_case"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a002_case--"));
    }

    #[test]
    fn test_page_id_from_metadata() {
        use contracts::domain::a002_case::Case;
        use contracts::domain::common::FixtureRecord;
        use contracts::usecases::common::UseCaseMetadata;
        use contracts::usecases::u501_simulate_upload::SimulateUpload;

        let case_page = page_id(&Case::full_name(), PAGE_CAT_LIST);
        assert_eq!(case_page, "a002_case--list");
        assert!(is_valid_page_id(&case_page));

        let upload_page = page_id(&SimulateUpload::full_name(), PAGE_CAT_USECASE);
        assert_eq!(upload_page, "u501_simulate_upload--usecase");
        assert!(is_valid_page_id(&upload_page));
    }

    #[test]
    fn test_categories() {
        assert!(is_known_category(PAGE_CAT_USECASE));
        assert!(!is_known_category("legacy"));
        assert_eq!(page_class(PAGE_CAT_DASHBOARD), "page page--dashboard");
        assert_eq!(page_class(PAGE_CAT_LIST), "page");
    }
}
