//! List query state: page, page size, and filter values.
//!
//! # Design
//! - Any filter or page-size change resets to page 1 so stale page numbers
//!   never produce empty results.
//! - Blank filter values are never sent.

use std::collections::BTreeMap;
use std::fmt::Write;

/// Page sizes offered by the list views.
pub const PAGE_SIZES: [u32; 3] = [10, 25, 50];

/// Highest page a list will request.
pub const MAX_PAGE: u32 = 100_000;

/// Parameters of one list request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    page: u32,
    page_size: u32,
    filters: BTreeMap<String, String>,
}

impl ListQuery {
    /// Query for the first page with no filters.
    #[must_use]
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            filters: BTreeMap::new(),
        }
    }

    /// Current 1-based page.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Records per page.
    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Raw value of a filter, empty when unset.
    #[must_use]
    pub fn filter(&self, key: &str) -> &str {
        self.filters.get(key).map_or("", String::as_str)
    }

    /// Whether any filter carries a non-blank value.
    #[must_use]
    pub fn has_filters(&self) -> bool {
        self.filters.values().any(|value| !value.trim().is_empty())
    }

    /// Move to `page` (clamped to `1..=MAX_PAGE`). Returns whether it changed.
    pub fn set_page(&mut self, page: u32) -> bool {
        let page = page.clamp(1, MAX_PAGE);
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    /// Change the page size and return to page 1. Returns whether it changed.
    pub fn set_page_size(&mut self, page_size: u32) -> bool {
        let page_size = page_size.max(1);
        if self.page_size == page_size {
            return false;
        }
        self.page_size = page_size;
        self.page = 1;
        true
    }

    /// Set or clear a filter and return to page 1. Returns whether it changed.
    pub fn set_filter(&mut self, key: &str, value: &str) -> bool {
        let changed = if value.is_empty() {
            self.filters.remove(key).is_some()
        } else if self.filters.get(key).map(String::as_str) == Some(value) {
            false
        } else {
            self.filters.insert(key.to_string(), value.to_string());
            true
        };
        if changed {
            self.page = 1;
        }
        changed
    }

    /// Remove every filter. Returns whether anything changed.
    pub fn clear_filters(&mut self) -> bool {
        if self.filters.is_empty() {
            return false;
        }
        self.filters.clear();
        self.page = 1;
        true
    }

    /// URL-encoded query string: `page`, `limit`, then non-blank filters by key.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut query = format!("page={}&limit={}", self.page, self.page_size);
        for (key, value) in &self.filters {
            let value = value.trim();
            if value.is_empty() {
                continue;
            }
            let _ = write!(
                query,
                "&{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            );
        }
        query
    }

    /// Full request path for a list endpoint.
    #[must_use]
    pub fn list_path(&self, base_path: &str) -> String {
        format!("{base_path}?{}", self.to_query_string())
    }
}

/// Read the `page` parameter from a location search string (`?page=3&x=y`).
///
/// Values above [`MAX_PAGE`] are capped.
#[must_use]
pub fn page_from_search(search: &str) -> Option<u32> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "page")
        .and_then(|(_, value)| value.parse::<u32>().ok())
        .filter(|page| *page >= 1)
        .map(|page| page.min(MAX_PAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_change_resets_page() {
        let mut query = ListQuery::new(10);
        query.set_page(4);
        assert!(query.set_filter("search", "erbil"));
        assert_eq!(query.page(), 1);
        query.set_page(2);
        assert!(!query.set_filter("search", "erbil"));
        assert_eq!(query.page(), 2);
        assert!(query.set_filter("search", ""));
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn page_size_change_resets_page() {
        let mut query = ListQuery::new(10);
        query.set_page(3);
        assert!(query.set_page_size(25));
        assert_eq!(query.page(), 1);
        assert!(!query.set_page_size(25));
    }

    #[test]
    fn page_is_clamped_to_one() {
        let mut query = ListQuery::new(0);
        assert_eq!(query.page_size(), 1);
        assert!(!query.set_page(0));
        assert_eq!(query.page(), 1);
    }

    #[test]
    fn huge_pages_are_capped() {
        assert_eq!(page_from_search("?page=4294967295"), Some(MAX_PAGE));
        assert_eq!(page_from_search("?page=4294967296"), None);
        let mut query = ListQuery::new(10);
        assert!(query.set_page(u32::MAX));
        assert_eq!(query.page(), MAX_PAGE);
        assert!(!query.set_page(MAX_PAGE.saturating_add(1)));
    }

    #[test]
    fn query_string_encodes_and_skips_blank_filters() {
        let mut query = ListQuery::new(25);
        query.set_filter("search", "Al Noor school");
        query.set_filter("cityId", "   ");
        query.set_filter("status", "active");
        assert_eq!(
            query.to_query_string(),
            "page=1&limit=25&search=Al%20Noor%20school&status=active"
        );
        assert!(query.has_filters());
        assert_eq!(query.list_path("/schools").split('?').next(), Some("/schools"));
    }

    #[test]
    fn clear_filters_reports_change() {
        let mut query = ListQuery::new(10);
        assert!(!query.clear_filters());
        query.set_filter("role", "admin");
        query.set_page(2);
        assert!(query.clear_filters());
        assert_eq!(query.page(), 1);
        assert_eq!(query.filter("role"), "");
    }

    #[test]
    fn page_is_read_from_search_string() {
        assert_eq!(page_from_search("?page=3"), Some(3));
        assert_eq!(page_from_search("?search=x&page=12"), Some(12));
        assert_eq!(page_from_search("?page=0"), None);
        assert_eq!(page_from_search("?page=abc"), None);
        assert_eq!(page_from_search(""), None);
    }
}
