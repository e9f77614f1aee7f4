//! Pagination-related DTOs for API requests and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Default number of items per page when the query omits `page_size`.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size a client may request.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Query parameters for pagination.
#[derive(Debug, Clone, Deserialize, IntoParams, Validate)]
pub struct PaginationParams {
    /// Page number (1-based)
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "Page must be at least 1"))]
    #[param(minimum = 1, example = 1)]
    pub page: u32,

    /// Number of items per page (max 100)
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    #[param(minimum = 1, maximum = 100, example = 20)]
    pub page_size: u32,
}

impl PaginationParams {
    /// Clamps out-of-range values to safe defaults.
    ///
    /// Page 0 becomes 1; a page size of 0 or above the maximum falls back
    /// to the default.
    pub fn normalize(mut self) -> Self {
        if self.page == 0 {
            self.page = 1;
        }
        if self.page_size == 0 || self.page_size > MAX_PAGE_SIZE {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        self
    }

    /// Calculates the offset for database queries.
    pub fn offset(&self) -> u32 {
        (self.page - 1) * self.page_size
    }

    /// Returns the limit for database queries.
    pub fn limit(&self) -> u32 {
        self.page_size
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

/// Generic paged response wrapper.
#[derive(Debug, Serialize, ToSchema)]
pub struct PagedResponse<T> {
    /// The data items for this page
    pub data: Vec<T>,

    /// Pagination metadata
    pub pagination: PaginationMeta,
}

/// Pagination metadata.
#[derive(Debug, Serialize, ToSchema)]
pub struct PaginationMeta {
    /// Current page number (1-based)
    #[schema(example = 1)]
    pub page: u32,

    /// Number of items per page
    #[schema(example = 20)]
    pub page_size: u32,

    /// Total number of items across all pages
    #[schema(example = 100)]
    pub total_items: u64,

    /// Total number of pages
    #[schema(example = 5)]
    pub total_pages: u32,

    /// Whether there is a next page
    #[schema(example = true)]
    pub has_next: bool,

    /// Whether there is a previous page
    #[schema(example = false)]
    pub has_prev: bool,

    /// Zero-based index of the first item on this page within the full
    /// collection
    #[schema(example = 0)]
    pub start_index: u64,

    /// Zero-based index of the last item on this page within the full
    /// collection (equals start_index for an empty page)
    #[schema(example = 19)]
    pub end_index: u64,
}

impl<T> PagedResponse<T> {
    /// Creates a new paged response.
    pub fn new(data: Vec<T>, params: &PaginationParams, total_items: u64) -> Self {
        let total_pages = total_items.div_ceil(params.page_size as u64) as u32;
        let has_next = params.page < total_pages;
        let has_prev = params.page > 1;
        let start_index = params.offset() as u64;
        let end_index = start_index + (data.len() as u64).saturating_sub(1);

        Self {
            data,
            pagination: PaginationMeta {
                page: params.page,
                page_size: params.page_size,
                total_items,
                total_pages,
                has_next,
                has_prev,
                start_index,
                end_index,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn params(page: u32, page_size: u32) -> PaginationParams {
        PaginationParams { page, page_size }
    }

    #[test]
    fn test_offset_and_limit() {
        let p = params(3, 20);
        assert_eq!(p.offset(), 40);
        assert_eq!(p.limit(), 20);
    }

    #[test]
    fn test_normalize_clamps_zero_page() {
        let p = params(0, 20).normalize();
        assert_eq!(p.page, 1);
    }

    #[test]
    fn test_normalize_clamps_page_size() {
        assert_eq!(params(1, 0).normalize().page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(params(1, 500).normalize().page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(params(1, 100).normalize().page_size, 100);
    }

    #[test]
    fn test_paged_response_metadata() {
        let p = params(2, 10);
        let response = PagedResponse::new(vec![(); 10], &p, 25);

        assert_eq!(response.pagination.total_pages, 3);
        assert!(response.pagination.has_next);
        assert!(response.pagination.has_prev);
        assert_eq!(response.pagination.start_index, 10);
        assert_eq!(response.pagination.end_index, 19);
    }

    #[test]
    fn test_paged_response_last_partial_page() {
        let p = params(3, 10);
        let response = PagedResponse::new(vec![(); 5], &p, 25);

        assert_eq!(response.pagination.total_pages, 3);
        assert!(!response.pagination.has_next);
        assert!(response.pagination.has_prev);
        assert_eq!(response.pagination.start_index, 20);
        assert_eq!(response.pagination.end_index, 24);
    }

    #[test]
    fn test_paged_response_empty_collection() {
        let p = params(1, 20);
        let response = PagedResponse::new(Vec::<()>::new(), &p, 0);

        assert_eq!(response.pagination.total_pages, 0);
        assert!(!response.pagination.has_next);
        assert!(!response.pagination.has_prev);
        assert_eq!(response.pagination.start_index, 0);
        assert_eq!(response.pagination.end_index, 0);
    }

    proptest! {
        #[test]
        fn prop_offset_take_formulas(page in 1u32..10_000, page_size in 1u32..=100) {
            let p = params(page, page_size);
            prop_assert_eq!(p.offset(), (page - 1) * page_size);
            prop_assert_eq!(p.limit(), page_size);
        }

        #[test]
        fn prop_total_pages_is_ceiling_division(
            page in 1u32..1_000,
            page_size in 1u32..=100,
            total in 0u64..100_000,
        ) {
            let p = params(page, page_size);
            let response = PagedResponse::new(Vec::<()>::new(), &p, total);
            let meta = &response.pagination;

            prop_assert_eq!(meta.total_pages as u64, total.div_ceil(page_size as u64));
            prop_assert_eq!(meta.has_next, page < meta.total_pages);
            prop_assert_eq!(meta.has_prev, page > 1);
        }

        #[test]
        fn prop_index_bounds_match_page_contents(
            page in 1u32..100,
            page_size in 1u32..=100,
        ) {
            let total: u64 = 1_000;
            let offset = ((page - 1) * page_size) as u64;
            let len = total.saturating_sub(offset).min(page_size as u64);
            let p = params(page, page_size);
            let response = PagedResponse::new(vec![(); len as usize], &p, total);
            let meta = &response.pagination;

            prop_assert_eq!(meta.start_index, offset);
            if len > 0 {
                prop_assert_eq!(meta.end_index - meta.start_index + 1, len);
            }
        }
    }
}
