//! Failure reporting and list response types
//!
//! [`ResponseHelper`] is the sink the request helpers report failures to.
//! [`PaginatedResponse`] is the standard body for list endpoints.
//!
//! # Example
//!
//! ```rust
//! use request_helpers::handlers::PaginatedResponse;
//! use request_helpers::pagination::compute_window;
//!
//! let window = compute_window(1, 10);
//! let response = PaginatedResponse::new(vec!["a", "b"], window.meta(2));
//! assert_eq!(response.pagination.total_pages, 1);
//! assert_eq!(response.len(), 2);
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use super::context::RequestContext;
use crate::error::ErrorResponse;
use crate::pagination::PageMeta;

/// Writes failure responses into a request context
pub trait ResponseHelper: Send + Sync {
    /// Record a 400 response with `message` and a remediation hint
    fn bad_request(&self, ctx: &mut dyn RequestContext, message: &str, fix: &str);
}

/// Writes failures as JSON [`ErrorResponse`] bodies
///
/// The body has the shape
/// `{"error": "...", "fix": "...", "code": "BAD_REQUEST", "status": 400}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonResponseHelper;

impl ResponseHelper for JsonResponseHelper {
    fn bad_request(&self, ctx: &mut dyn RequestContext, message: &str, fix: &str) {
        tracing::warn!(fix = %fix, "Bad request: {}", message);
        ctx.abort_with(ErrorResponse::bad_request(message, fix).into_response());
    }
}

/// List response with pagination metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// The items on the current page
    pub data: Vec<T>,
    /// Pagination metadata
    pub pagination: PageMeta,
}

impl<T> PaginatedResponse<T> {
    /// Create a new list response
    pub fn new(data: Vec<T>, pagination: PageMeta) -> Self {
        Self { data, pagination }
    }

    /// Map each item in the list to a new type
    ///
    /// ```rust
    /// use request_helpers::handlers::PaginatedResponse;
    /// use request_helpers::pagination::compute_meta;
    ///
    /// let response = PaginatedResponse::new(vec![1, 2, 3], compute_meta(10, 0, 3));
    /// let mapped = response.map(|n| n.to_string());
    /// assert_eq!(mapped.data, vec!["1", "2", "3"]);
    /// ```
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            data: self.data.into_iter().map(f).collect(),
            pagination: self.pagination,
        }
    }

    /// Number of items on the current page
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the current page is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl<T: Serialize> IntoResponse for PaginatedResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::context::{AxumRequestContext, ContextValues};
    use crate::pagination::compute_meta;

    #[test]
    fn test_json_response_helper_records_bad_request() {
        let mut ctx = AxumRequestContext::new(
            Default::default(),
            Default::default(),
            ContextValues::new(),
        );
        JsonResponseHelper.bad_request(&mut ctx, "invalid ID", "Please provide a valid ID.");

        assert!(ctx.is_aborted());
        let response = ctx.take_response().unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_json_response_helper_body() {
        let mut ctx = AxumRequestContext::default();
        JsonResponseHelper.bad_request(&mut ctx, "invalid username", "Please provide a valid username.");

        let response = ctx.take_response().unwrap();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "invalid username");
        assert_eq!(body.fix.as_deref(), Some("Please provide a valid username."));
        assert_eq!(body.code.as_deref(), Some("BAD_REQUEST"));
        assert_eq!(body.status, 400);
    }

    #[test]
    fn test_paginated_response_serialization() {
        let response = PaginatedResponse::new(vec![1, 2], compute_meta(10, 20, 95));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"], serde_json::json!([1, 2]));
        assert_eq!(json["pagination"]["currentPage"], 3);
        assert_eq!(json["pagination"]["totalPages"], 10);
        assert_eq!(json["pagination"]["totalRecords"], 95);
        assert_eq!(json["pagination"]["pageSize"], 10);
    }

    #[test]
    fn test_paginated_response_map_preserves_pagination() {
        let response = PaginatedResponse::new(vec![1, 2, 3], compute_meta(10, 10, 100));
        let mapped = response.map(|n| n * 2);
        assert_eq!(mapped.data, vec![2, 4, 6]);
        assert_eq!(mapped.pagination.current_page, 2);
    }

    #[test]
    fn test_paginated_response_empty() {
        let response: PaginatedResponse<String> =
            PaginatedResponse::new(Vec::new(), compute_meta(10, 0, 0));
        assert!(response.is_empty());
        assert_eq!(response.pagination.total_pages, 0);
        assert_eq!(
            response.into_response().status(),
            StatusCode::OK
        );
    }
}
