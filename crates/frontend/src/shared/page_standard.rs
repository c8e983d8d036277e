//! Page category constants.
//!
//! Every routed page declares:
//!   - HTML `id` in the format `{entity}--{category}` (e.g. `"a001_category--list"`)
//!   - `data-page-category` with one of the constants below
//!
//! The entity part matches the module directory, so an id copied from the
//! DOM inspector leads straight to the code.

/// Paginated table of records.
pub const PAGE_CAT_LIST: &str = "list";

/// Create / edit form for a single record on its own route.
pub const PAGE_CAT_DETAIL: &str = "detail";

/// Overview with metrics.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Sign-in and password recovery, rendered outside the shell.
pub const PAGE_CAT_AUTH: &str = "auth";

/// All known category values.
pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DETAIL,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_AUTH,
];

/// Validate that a page id matches the `{entity}--{category}` format.
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && is_known_category(category),
        None => false,
    }
}

pub fn is_known_category(cat: &str) -> bool {
    ALL_CATEGORIES.contains(&cat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_ids() {
        assert!(is_valid_page_id("a001_category--list"));
        assert!(is_valid_page_id("d400_overview--dashboard"));
        assert!(!is_valid_page_id("a001_category"));
        assert!(!is_valid_page_id("--list"));
        assert!(!is_valid_page_id("a001_category--table"));
    }
}
