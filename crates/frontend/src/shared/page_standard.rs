//! Page categories carried by every [`PageFrame`](super::page_frame::PageFrame)
//! as `data-page-category`.

/// Generic list page backed by a list controller.
pub const PAGE_CAT_LIST: &str = "list";

/// Role dashboard overview.
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// Public marketing page (home, about, services).
pub const PAGE_CAT_MARKETING: &str = "marketing";

/// Forms outside a list, e.g. the concierge request form.
pub const PAGE_CAT_FORM: &str = "form";

pub const ALL_CATEGORIES: &[&str] = &[
    PAGE_CAT_LIST,
    PAGE_CAT_DASHBOARD,
    PAGE_CAT_MARKETING,
    PAGE_CAT_FORM,
];

pub fn is_known_category(category: &str) -> bool {
    ALL_CATEGORIES.contains(&category)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories() {
        assert!(is_known_category("list"));
        assert!(!is_known_category("legacy"));
    }
}
