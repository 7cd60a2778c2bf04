//! Pagination cursor stored next to the filters in the location

use super::query::QueryParams;
use serde::{Deserialize, Serialize};

/// Query parameter holding the 1-based page number
pub const PAGE_NUM_PARAM: &str = "pageNum";

/// Query parameter holding the page size
pub const PAGE_SIZE_PARAM: &str = "pageSize";

/// Page number used when the location has none
pub const DEFAULT_PAGE_NUM: u32 = 1;

/// Page size used when the location has none
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Pagination cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page number
    pub page_num: u32,
    /// Items per page, always positive
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_num: DEFAULT_PAGE_NUM,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Create a cursor; zero values are raised to the defaults
    #[must_use]
    pub const fn new(page_num: u32, page_size: u32) -> Self {
        Self {
            page_num: if page_num == 0 { DEFAULT_PAGE_NUM } else { page_num },
            page_size: if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size },
        }
    }

    /// Same page size, back on the first page
    #[must_use]
    pub const fn first_page(self) -> Self {
        Self {
            page_num: DEFAULT_PAGE_NUM,
            page_size: self.page_size,
        }
    }

    /// Read the cursor from query parameters
    ///
    /// Absent, non-numeric, or zero values fall back to page 1 and
    /// `default_page_size`.
    #[must_use]
    pub fn read(params: &QueryParams, default_page_size: u32) -> Self {
        let default_page_size = if default_page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            default_page_size
        };
        Self {
            page_num: parse_positive(params.get(PAGE_NUM_PARAM)).unwrap_or(DEFAULT_PAGE_NUM),
            page_size: parse_positive(params.get(PAGE_SIZE_PARAM)).unwrap_or(default_page_size),
        }
    }

    /// Write the cursor into query parameters
    pub fn write(self, params: &mut QueryParams) {
        params.set(PAGE_NUM_PARAM, self.page_num.to_string());
        params.set(PAGE_SIZE_PARAM, self.page_size.to_string());
    }
}

fn parse_positive(raw: Option<&str>) -> Option<u32> {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .filter(|n| *n > 0)
}
