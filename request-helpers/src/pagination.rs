//! Limit/offset pagination arithmetic
//!
//! Two independent operations:
//!
//! - [`compute_window`] turns a page number and page size into the
//!   limit/offset pair used to slice a record set.
//! - [`compute_meta`] goes the other way: from a limit, an offset and the
//!   total record count it derives the metadata shown to clients.
//!
//! Neither operation clamps its inputs. A page of 0 produces a negative
//! offset and a limit of 0 produces zeroed metadata; callers pick sane
//! defaults upstream (see [`PaginationConfig`]).
//!
//! # Example
//!
//! ```rust
//! use request_helpers::pagination::{compute_meta, compute_window};
//!
//! let window = compute_window(3, 10);
//! assert_eq!((window.limit, window.offset), (10, 20));
//!
//! let meta = compute_meta(window.limit, window.offset, 95);
//! assert_eq!(meta.current_page, 3);
//! assert_eq!(meta.total_pages, 10);
//! ```

use serde::{Deserialize, Serialize};

/// Default page number when the client does not send one
pub const DEFAULT_PAGE: i64 = 1;

/// Default page size when the client does not send one
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Query parameter naming scheme for pagination
///
/// Two naming conventions are in use by clients; both are supported and the
/// service picks one through configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryScheme {
    /// `page-size` and `page-no`
    PageSizeNo,
    /// `per-page` and `page`
    #[default]
    PerPage,
}

impl QueryScheme {
    /// Name of the query parameter carrying the page size
    #[must_use]
    pub const fn page_size_param(&self) -> &'static str {
        match self {
            Self::PageSizeNo => "page-size",
            Self::PerPage => "per-page",
        }
    }

    /// Name of the query parameter carrying the page number
    #[must_use]
    pub const fn page_param(&self) -> &'static str {
        match self {
            Self::PageSizeNo => "page-no",
            Self::PerPage => "page",
        }
    }
}

/// What an unparsable pagination query value turns into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseFallback {
    /// Non-numeric values become 0 (a garbage `per-page` yields a limit of 0)
    #[default]
    Zero,
    /// Non-numeric values become the configured default
    Defaults,
}

/// Pagination settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Query parameter names to read
    #[serde(default)]
    pub scheme: QueryScheme,

    /// Page number used when the parameter is absent
    #[serde(default = "default_page")]
    pub default_page: i64,

    /// Page size used when the parameter is absent
    #[serde(default = "default_page_size")]
    pub default_page_size: i64,

    /// Handling of values that are present but not integers
    #[serde(default)]
    pub fallback: ParseFallback,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            scheme: QueryScheme::default(),
            default_page: DEFAULT_PAGE,
            default_page_size: DEFAULT_PAGE_SIZE,
            fallback: ParseFallback::default(),
        }
    }
}

fn default_page() -> i64 {
    DEFAULT_PAGE
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl PaginationConfig {
    /// Parse a raw page-size query value according to the fallback policy
    #[must_use]
    pub fn parse_page_size(&self, raw: &str) -> i64 {
        parse_or(raw, self.fallback, self.default_page_size)
    }

    /// Parse a raw page-number query value according to the fallback policy
    #[must_use]
    pub fn parse_page(&self, raw: &str) -> i64 {
        parse_or(raw, self.fallback, self.default_page)
    }
}

fn parse_or(raw: &str, fallback: ParseFallback, default: i64) -> i64 {
    raw.parse().unwrap_or(match fallback {
        ParseFallback::Zero => 0,
        ParseFallback::Defaults => default,
    })
}

/// Page number and size as requested by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-indexed page number
    pub page: i64,
    /// Items per page
    pub page_size: i64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    /// Create a page request
    #[must_use]
    pub const fn new(page: i64, page_size: i64) -> Self {
        Self { page, page_size }
    }

    /// The limit/offset window for this request
    #[must_use]
    pub fn window(&self) -> PageWindow {
        compute_window(self.page, self.page_size)
    }
}

/// Limit and offset used to slice a record set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    /// Maximum number of records to return
    pub limit: i64,
    /// Number of records to skip
    pub offset: i64,
}

impl PageWindow {
    /// Build the display metadata for this window given the total record count
    #[must_use]
    pub fn meta(&self, total_records: u64) -> PageMeta {
        compute_meta(self.limit, self.offset, total_records)
    }
}

/// Pagination metadata returned alongside a list
///
/// Serialized with camelCase keys:
///
/// ```rust
/// use request_helpers::pagination::compute_meta;
///
/// let json = serde_json::to_value(compute_meta(10, 0, 25)).unwrap();
/// assert_eq!(json["totalRecords"], 25);
/// assert_eq!(json["totalPages"], 3);
/// assert_eq!(json["currentPage"], 1);
/// assert_eq!(json["pageSize"], 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    /// Total number of records across all pages
    pub total_records: u64,
    /// Number of pages, 0 when the limit is 0
    pub total_pages: i64,
    /// 1-indexed current page, 0 when the limit is 0
    pub current_page: i64,
    /// Page size (the limit)
    pub page_size: i64,
}

/// Convert a page number and page size into a limit/offset window
///
/// `limit = page_size` and `offset = (page - 1) * limit`. No clamping is
/// applied.
#[must_use]
pub fn compute_window(page: i64, page_size: i64) -> PageWindow {
    let limit = page_size;
    let offset = page.wrapping_sub(1).wrapping_mul(limit);
    PageWindow { limit, offset }
}

/// Derive display metadata from a limit, an offset and a total record count
#[must_use]
pub fn compute_meta(limit: i64, offset: i64, total_records: u64) -> PageMeta {
    PageMeta {
        total_records,
        total_pages: total_pages(total_records, limit),
        current_page: current_page(offset, limit),
        page_size: limit,
    }
}

fn current_page(offset: i64, limit: i64) -> i64 {
    if limit == 0 {
        return 0;
    }
    offset.wrapping_div(limit).wrapping_add(1)
}

fn total_pages(total_records: u64, limit: i64) -> i64 {
    if limit == 0 {
        return 0;
    }
    let total = i64::try_from(total_records).unwrap_or(i64::MAX);
    // Integer ceiling without the (total + limit - 1) overflow
    if total.wrapping_rem(limit) == 0 {
        total.wrapping_div(limit)
    } else {
        total.wrapping_div(limit).wrapping_add(1)
    }
}
