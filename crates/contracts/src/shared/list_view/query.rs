use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Filter value meaning "no filter" in select boxes.
pub const FILTER_ALL: &str = "all";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub ascending: bool,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: true,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            ascending: false,
        }
    }

    /// Wire value for the `sortOrder` parameter.
    pub fn order(&self) -> &'static str {
        if self.ascending {
            "asc"
        } else {
            "desc"
        }
    }
}

/// Query state of one list page.
///
/// `page` is 1-based. Any change of the search term or a filter resets it to 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryState {
    pub search: String,
    pub filters: BTreeMap<String, String>,
    pub page: usize,
    pub page_size: usize,
    pub sort: Option<SortSpec>,
}

impl Default for QueryState {
    fn default() -> Self {
        Self::new(10)
    }
}

impl QueryState {
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            page: 1,
            page_size: page_size.max(1),
            sort: None,
        }
    }

    /// Returns true if the term actually changed.
    pub fn set_search(&mut self, term: impl Into<String>) -> bool {
        let term = term.into();
        if term == self.search {
            return false;
        }
        self.search = term;
        self.page = 1;
        true
    }

    /// Empty value or `"all"` removes the filter. Returns true on change.
    pub fn set_filter(&mut self, key: impl Into<String>, value: impl Into<String>) -> bool {
        let key = key.into();
        let value = value.into();
        let value = value.trim();

        let changed = if value.is_empty() || value == FILTER_ALL {
            self.filters.remove(&key).is_some()
        } else if self.filters.get(&key).map(String::as_str) == Some(value) {
            false
        } else {
            self.filters.insert(key, value.to_string());
            true
        };

        if changed {
            self.page = 1;
        }
        changed
    }

    pub fn clear_filter(&mut self, key: &str) -> bool {
        self.set_filter(key, "")
    }

    /// Drop the search term and every filter.
    pub fn clear_all(&mut self) -> bool {
        let changed = !self.search.is_empty() || !self.filters.is_empty();
        self.search.clear();
        self.filters.clear();
        if changed {
            self.page = 1;
        }
        changed
    }

    pub fn filter(&self, key: &str) -> Option<&str> {
        self.filters.get(key).map(String::as_str)
    }

    /// Page changes never touch search or filters.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Zero is ignored. Resets the page to 1.
    pub fn set_page_size(&mut self, size: usize) -> bool {
        if size == 0 {
            return false;
        }
        self.page_size = size;
        self.page = 1;
        true
    }

    /// Coerces the select box value to an integer.
    pub fn set_page_size_text(&mut self, raw: &str) -> bool {
        match raw.trim().parse::<usize>() {
            Ok(size) => self.set_page_size(size),
            Err(_) => false,
        }
    }

    /// Same field flips direction, another field starts ascending.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = match self.sort.take() {
            Some(sort) if sort.field == field => Some(SortSpec {
                ascending: !sort.ascending,
                ..sort
            }),
            _ => Some(SortSpec::asc(field)),
        };
    }

    pub fn offset(&self) -> usize {
        (self.page - 1) * self.page_size
    }

    pub fn is_filtered(&self) -> bool {
        !self.search.trim().is_empty() || !self.filters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_and_filter_reset_page() {
        let mut q = QueryState::new(10);
        q.set_page(4);
        assert!(q.set_search("jo"));
        assert_eq!(q.page, 1);

        q.set_page(3);
        assert!(q.set_filter("status", "pending"));
        assert_eq!(q.page, 1);

        q.set_page(2);
        assert!(q.set_filter("status", "all"));
        assert_eq!(q.page, 1);
        assert_eq!(q.filter("status"), None);
    }

    #[test]
    fn test_filter_reset_over_mixed_operations() {
        let mut q = QueryState::new(20);
        let steps: [(&str, &str); 6] = [
            ("page", "5"),
            ("search", "villa"),
            ("page", "9"),
            ("priority", "high"),
            ("page", "2"),
            ("search", "villa dubai"),
        ];
        for (op, value) in steps {
            match op {
                "page" => {
                    let before = (q.search.clone(), q.filters.clone());
                    q.set_page(value.parse().unwrap());
                    assert_eq!((q.search.clone(), q.filters.clone()), before);
                    assert_eq!(q.page, value.parse::<usize>().unwrap());
                }
                "search" => {
                    q.set_search(value);
                    assert_eq!(q.page, 1);
                }
                key => {
                    q.set_filter(key, value);
                    assert_eq!(q.page, 1);
                }
            }
        }
    }

    #[test]
    fn test_unchanged_values_report_no_change() {
        let mut q = QueryState::new(10);
        q.set_filter("status", "pending");
        q.set_page(3);
        assert!(!q.set_filter("status", "pending"));
        assert!(!q.set_search(""));
        assert_eq!(q.page, 3);
    }

    #[test]
    fn test_page_size_coercion() {
        let mut q = QueryState::new(10);
        q.set_page(3);
        assert!(q.set_page_size_text(" 20 "));
        assert_eq!(q.page_size, 20);
        assert_eq!(q.page, 1);
        assert!(!q.set_page_size_text("abc"));
        assert!(!q.set_page_size_text("0"));
        assert_eq!(q.page_size, 20);
    }

    #[test]
    fn test_toggle_sort() {
        let mut q = QueryState::new(10);
        q.toggle_sort("name");
        assert_eq!(q.sort, Some(SortSpec::asc("name")));
        q.toggle_sort("name");
        assert_eq!(q.sort, Some(SortSpec::desc("name")));
        q.toggle_sort("email");
        assert_eq!(q.sort, Some(SortSpec::asc("email")));
    }
}
