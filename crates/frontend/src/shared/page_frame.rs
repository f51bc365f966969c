use super::page_standard::{is_known_category, is_valid_page_id, page_class};
use leptos::prelude::*;

/// Root element of every routed page.
///
/// `page_id` follows `{entity}--{category}` (see `page_standard::page_id`) and
/// ends up as the DOM id, so `u501_simulate_upload--usecase` in the inspector
/// points straight at `usecases/u501_simulate_upload`.
#[component]
pub fn PageFrame(
    #[prop(into)] page_id: String,
    /// A `PAGE_CAT_*` constant
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(&page_id) || !is_known_category(category) {
        log::warn!("page frame {page_id:?} does not follow the page standard ({category})");
    }

    let classes = [page_class(category), class]
        .iter()
        .filter(|c| !c.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");

    view! {
        <div id=page_id class=classes data-page-category=category>
            {children()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::shared::page_standard::{is_valid_page_id, PAGE_CAT_LIST, PAGE_CAT_USECASE};

    #[test]
    fn test_routed_page_ids() {
        for id in [
            "a002_case--list",
            "a003_annotation--detail",
            "a004_workflow--custom",
            "u501_simulate_upload--usecase",
            "u502_translate_document--usecase",
            "u503_consult_assistant--usecase",
            "landing--custom",
            "not_found--system",
        ] {
            assert!(is_valid_page_id(id), "{id}");
        }
        assert_ne!(PAGE_CAT_LIST, PAGE_CAT_USECASE);
    }
}
