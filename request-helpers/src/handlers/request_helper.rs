//! Extract-and-validate helpers for handlers
//!
//! Each helper reads a raw value from the [`RequestContext`], applies the
//! validation rule from the handler's [`HasValidator`] capability and, on
//! failure, reports a bad request through the [`HasResponseHelper`]
//! capability. The returned [`ValidationOutcome`] is the only failure signal:
//! when `failed` is set the response has already been recorded and the
//! handler must stop.

use serde::de::DeserializeOwned;

use super::context::{RequestContext, USERNAME_KEY};
use super::response::ResponseHelper;
use super::traits::{HasResponseHelper, HasValidator, HasValidatorAndResponseHelper};
use crate::error::{hints, Error};
use crate::pagination::{compute_window, PageWindow, PaginationConfig};

/// A validated value plus a flag telling whether validation failed
///
/// On failure `value` holds a zero value (`""`, `0`, `T::default()`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "check `failed` and return early when it is set"]
pub struct ValidationOutcome<T> {
    /// The validated datum
    pub value: T,
    /// Whether a bad request has been reported
    pub failed: bool,
}

impl<T> ValidationOutcome<T> {
    /// A successfully validated value
    pub fn passed(value: T) -> Self {
        Self {
            value,
            failed: false,
        }
    }

    /// A failed validation carrying a placeholder value
    pub fn rejected(value: T) -> Self {
        Self {
            value,
            failed: true,
        }
    }

    /// The value, or `None` when validation failed
    pub fn into_option(self) -> Option<T> {
        if self.failed {
            None
        } else {
            Some(self.value)
        }
    }

    /// Split into the `(value, failed)` pair
    pub fn into_parts(self) -> (T, bool) {
        (self.value, self.failed)
    }
}

/// Parameter extraction and validation for handlers
pub trait RequestHelper: Send + Sync {
    /// Read the authenticated username and check that it is non-empty
    ///
    /// The username is expected under [`USERNAME_KEY`], placed there by
    /// authentication middleware. On failure a bad request with
    /// [`hints::FIX_INVALID_USERNAME`] is reported and the value is `""`.
    fn get_and_validate_username(
        &self,
        ctx: &mut dyn RequestContext,
        h: &dyn HasValidatorAndResponseHelper,
    ) -> ValidationOutcome<String>;

    /// Read path parameter `id_name` and parse it as a positive ID
    ///
    /// On failure a bad request with `fix_message` is reported and the
    /// value is `0`.
    fn validate_and_parse_id(
        &self,
        h: &dyn HasValidatorAndResponseHelper,
        id_name: &str,
        ctx: &mut dyn RequestContext,
        fix_message: &str,
    ) -> ValidationOutcome<u64>;

    /// Read the pagination query parameters and compute the limit/offset
    fn get_limit_and_offset(&self, ctx: &dyn RequestContext) -> PageWindow;

    /// Read a path parameter without validation
    fn get_url_param(&self, ctx: &dyn RequestContext, name: &str) -> String;
}

/// Standard [`RequestHelper`] driven by a [`PaginationConfig`]
///
/// # Example
///
/// ```rust
/// use request_helpers::handlers::{AxumRequestContext, DefaultRequestHelper, RequestHelper};
/// use std::collections::HashMap;
///
/// let ctx = AxumRequestContext::new(
///     HashMap::new(),
///     HashMap::from([("page".to_string(), "3".to_string())]),
///     Default::default(),
/// );
/// let window = DefaultRequestHelper::default().get_limit_and_offset(&ctx);
/// assert_eq!((window.limit, window.offset), (10, 20));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRequestHelper {
    pagination: PaginationConfig,
}

impl DefaultRequestHelper {
    /// Create a helper with the given pagination settings
    #[must_use]
    pub fn new(pagination: PaginationConfig) -> Self {
        Self { pagination }
    }

    /// The pagination settings in use
    #[must_use]
    pub fn pagination(&self) -> &PaginationConfig {
        &self.pagination
    }
}

impl RequestHelper for DefaultRequestHelper {
    fn get_and_validate_username(
        &self,
        ctx: &mut dyn RequestContext,
        h: &dyn HasValidatorAndResponseHelper,
    ) -> ValidationOutcome<String> {
        let username = ctx.context_value(USERNAME_KEY);
        if let Err(err) = h.validator().validate_username(&username) {
            report(h, ctx, &err, hints::FIX_INVALID_USERNAME);
            return ValidationOutcome::rejected(String::new());
        }
        ValidationOutcome::passed(username)
    }

    fn validate_and_parse_id(
        &self,
        h: &dyn HasValidatorAndResponseHelper,
        id_name: &str,
        ctx: &mut dyn RequestContext,
        fix_message: &str,
    ) -> ValidationOutcome<u64> {
        let raw = ctx.path_param(id_name);
        match h.validator().validate_id_and_parse(&raw) {
            Ok(id) => ValidationOutcome::passed(id),
            Err(err) => {
                tracing::debug!(param = %id_name, raw = %raw, "Rejected path parameter");
                report(h, ctx, &err, fix_message);
                ValidationOutcome::rejected(0)
            }
        }
    }

    fn get_limit_and_offset(&self, ctx: &dyn RequestContext) -> PageWindow {
        let scheme = self.pagination.scheme;
        let limit = self.pagination.parse_page_size(&ctx.query_param(
            scheme.page_size_param(),
            &self.pagination.default_page_size.to_string(),
        ));
        let page = self.pagination.parse_page(&ctx.query_param(
            scheme.page_param(),
            &self.pagination.default_page.to_string(),
        ));
        compute_window(page, limit)
    }

    fn get_url_param(&self, ctx: &dyn RequestContext, name: &str) -> String {
        ctx.path_param(name)
    }
}

fn report<H>(h: &H, ctx: &mut dyn RequestContext, err: &Error, fix: &str)
where
    H: HasResponseHelper + ?Sized,
{
    h.response_helper().bad_request(ctx, &err.to_string(), fix);
}

/// Decode a JSON request body
///
/// On a decoding failure a bad request with the message `"bad request"` and
/// [`hints::FIX_INVALID_REQUEST_DATA`] is reported and the value is
/// `T::default()`.
pub fn bind_json<T>(
    body: &[u8],
    response_helper: &dyn ResponseHelper,
    ctx: &mut dyn RequestContext,
) -> ValidationOutcome<T>
where
    T: DeserializeOwned + Default,
{
    match serde_json::from_slice(body) {
        Ok(data) => ValidationOutcome::passed(data),
        Err(e) => {
            tracing::warn!("Error binding JSON: {}", e);
            response_helper.bad_request(
                ctx,
                &Error::BadRequest.to_string(),
                hints::FIX_INVALID_REQUEST_DATA,
            );
            ValidationOutcome::rejected(T::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::context::{AxumRequestContext, ContextValues};
    use crate::pagination::{ParseFallback, QueryScheme};
    use crate::validation::{DefaultRequestValidator, RequestValidator};
    use axum::response::{IntoResponse, Response};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingResponseHelper {
        reports: Mutex<Vec<(String, String)>>,
    }

    impl RecordingResponseHelper {
        fn reports(&self) -> Vec<(String, String)> {
            self.reports.lock().unwrap().clone()
        }
    }

    impl ResponseHelper for RecordingResponseHelper {
        fn bad_request(&self, ctx: &mut dyn RequestContext, message: &str, fix: &str) {
            self.reports
                .lock()
                .unwrap()
                .push((message.to_string(), fix.to_string()));
            ctx.abort_with(axum::http::StatusCode::BAD_REQUEST.into_response());
        }
    }

    #[derive(Default)]
    struct TestHandler {
        validator: DefaultRequestValidator,
        responses: RecordingResponseHelper,
    }

    impl HasValidator for TestHandler {
        fn validator(&self) -> &dyn RequestValidator {
            &self.validator
        }
    }

    impl HasResponseHelper for TestHandler {
        fn response_helper(&self) -> &dyn ResponseHelper {
            &self.responses
        }
    }

    /// In-memory context so the helpers can be tested without axum extraction
    #[derive(Default)]
    struct MemoryContext {
        query: HashMap<String, String>,
        path: HashMap<String, String>,
        values: HashMap<String, String>,
        response: Option<Response>,
    }

    impl MemoryContext {
        fn with_query(mut self, key: &str, value: &str) -> Self {
            self.query.insert(key.to_string(), value.to_string());
            self
        }

        fn with_path(mut self, key: &str, value: &str) -> Self {
            self.path.insert(key.to_string(), value.to_string());
            self
        }

        fn with_value(mut self, key: &str, value: &str) -> Self {
            self.values.insert(key.to_string(), value.to_string());
            self
        }
    }

    impl RequestContext for MemoryContext {
        fn query_param(&self, name: &str, default: &str) -> String {
            self.query
                .get(name)
                .cloned()
                .unwrap_or_else(|| default.to_string())
        }

        fn path_param(&self, name: &str) -> String {
            self.path.get(name).cloned().unwrap_or_default()
        }

        fn context_value(&self, name: &str) -> String {
            self.values.get(name).cloned().unwrap_or_default()
        }

        fn abort_with(&mut self, response: Response) {
            self.response = Some(response);
        }

        fn is_aborted(&self) -> bool {
            self.response.is_some()
        }
    }

    #[test]
    fn test_username_present() {
        let handler = TestHandler::default();
        let mut ctx = MemoryContext::default().with_value(USERNAME_KEY, "alice");

        let outcome = DefaultRequestHelper::default().get_and_validate_username(&mut ctx, &handler);
        assert_eq!(outcome, ValidationOutcome::passed("alice".to_string()));
        assert!(!ctx.is_aborted());
        assert!(handler.responses.reports().is_empty());
    }

    #[test]
    fn test_username_missing_reports_bad_request() {
        let handler = TestHandler::default();
        let mut ctx = MemoryContext::default();

        let outcome = DefaultRequestHelper::default().get_and_validate_username(&mut ctx, &handler);
        assert_eq!(outcome.into_parts(), (String::new(), true));
        assert!(ctx.is_aborted());
        assert_eq!(
            handler.responses.reports(),
            vec![(
                "invalid username".to_string(),
                hints::FIX_INVALID_USERNAME.to_string()
            )]
        );
    }

    #[test]
    fn test_valid_id_is_parsed() {
        let handler = TestHandler::default();
        let mut ctx = MemoryContext::default().with_path("qualification_id", "42");

        let outcome = DefaultRequestHelper::default().validate_and_parse_id(
            &handler,
            "qualification_id",
            &mut ctx,
            hints::FIX_INVALID_ID,
        );
        assert_eq!(outcome.into_option(), Some(42));
        assert!(handler.responses.reports().is_empty());
    }

    #[test]
    fn test_zero_id_reports_exactly_once_with_caller_hint() {
        let handler = TestHandler::default();
        let mut ctx = MemoryContext::default().with_path("id", "0");

        let outcome = DefaultRequestHelper::default().validate_and_parse_id(
            &handler,
            "id",
            &mut ctx,
            "Use the numeric record id.",
        );
        assert_eq!(outcome.into_parts(), (0, true));
        assert_eq!(
            handler.responses.reports(),
            vec![(
                "invalid ID".to_string(),
                "Use the numeric record id.".to_string()
            )]
        );
    }

    #[test]
    fn test_missing_id_param_is_invalid() {
        let handler = TestHandler::default();
        let mut ctx = MemoryContext::default();

        let outcome =
            DefaultRequestHelper::default().validate_and_parse_id(&handler, "id", &mut ctx, "fix");
        assert!(outcome.failed);
        assert_eq!(handler.responses.reports().len(), 1);
    }

    #[test]
    fn test_get_url_param_passthrough() {
        let ctx = MemoryContext::default().with_path("slug", "not-validated-0");
        assert_eq!(
            DefaultRequestHelper::default().get_url_param(&ctx, "slug"),
            "not-validated-0"
        );
        assert_eq!(DefaultRequestHelper::default().get_url_param(&ctx, "other"), "");
    }

    #[test]
    fn test_limit_and_offset_defaults() {
        let window = DefaultRequestHelper::default().get_limit_and_offset(&MemoryContext::default());
        assert_eq!(window, PageWindow { limit: 10, offset: 0 });
    }

    #[test]
    fn test_limit_and_offset_per_page_scheme() {
        let ctx = MemoryContext::default()
            .with_query("per-page", "25")
            .with_query("page", "3")
            // Ignored under the per-page scheme
            .with_query("page-size", "99");
        let window = DefaultRequestHelper::default().get_limit_and_offset(&ctx);
        assert_eq!(window, PageWindow { limit: 25, offset: 50 });
    }

    #[test]
    fn test_limit_and_offset_page_size_scheme() {
        let helper = DefaultRequestHelper::new(PaginationConfig {
            scheme: QueryScheme::PageSizeNo,
            ..PaginationConfig::default()
        });
        let ctx = MemoryContext::default()
            .with_query("page-size", "20")
            .with_query("page-no", "4");
        assert_eq!(
            helper.get_limit_and_offset(&ctx),
            PageWindow { limit: 20, offset: 60 }
        );
    }

    #[test]
    fn test_non_numeric_query_falls_back_to_zero() {
        let ctx = MemoryContext::default()
            .with_query("per-page", "ten")
            .with_query("page", "2");
        let window = DefaultRequestHelper::default().get_limit_and_offset(&ctx);
        assert_eq!(window, PageWindow { limit: 0, offset: 0 });

        let ctx = MemoryContext::default()
            .with_query("per-page", "10")
            .with_query("page", "first");
        let window = DefaultRequestHelper::default().get_limit_and_offset(&ctx);
        // page parses to 0, so the offset steps back one page
        assert_eq!(window, PageWindow { limit: 10, offset: -10 });
    }

    #[test]
    fn test_non_numeric_query_falls_back_to_defaults_when_configured() {
        let helper = DefaultRequestHelper::new(PaginationConfig {
            fallback: ParseFallback::Defaults,
            ..PaginationConfig::default()
        });
        let ctx = MemoryContext::default()
            .with_query("per-page", "ten")
            .with_query("page", "first");
        assert_eq!(
            helper.get_limit_and_offset(&ctx),
            PageWindow { limit: 10, offset: 0 }
        );
    }

    #[test]
    fn test_fallback_policies_agree_on_numeric_input() {
        let zero = DefaultRequestHelper::default();
        let defaults = DefaultRequestHelper::new(PaginationConfig {
            fallback: ParseFallback::Defaults,
            ..PaginationConfig::default()
        });
        for page in 1..=20 {
            for per_page in 1..=20 {
                let ctx = MemoryContext::default()
                    .with_query("per-page", &per_page.to_string())
                    .with_query("page", &page.to_string());
                let expected = compute_window(page, per_page);
                assert_eq!(zero.get_limit_and_offset(&ctx), expected);
                assert_eq!(defaults.get_limit_and_offset(&ctx), expected);
            }
        }
    }

    #[test]
    fn test_helpers_work_with_axum_context() {
        let handler = TestHandler::default();
        let mut ctx = AxumRequestContext::new(
            HashMap::from([("id".to_string(), "-5".to_string())]),
            HashMap::new(),
            ContextValues::new(),
        );
        let outcome =
            DefaultRequestHelper::default().validate_and_parse_id(&handler, "id", &mut ctx, "fix");
        assert!(outcome.failed);
        assert!(ctx.take_response().is_some());
    }

    #[derive(Debug, Default, PartialEq, serde::Deserialize)]
    struct CreateRecord {
        name: String,
        count: u32,
    }

    #[test]
    fn test_bind_json_success() {
        let responses = RecordingResponseHelper::default();
        let mut ctx = MemoryContext::default();
        let outcome: ValidationOutcome<CreateRecord> =
            bind_json(br#"{"name":"desk","count":2}"#, &responses, &mut ctx);
        assert_eq!(
            outcome.into_option(),
            Some(CreateRecord {
                name: "desk".to_string(),
                count: 2
            })
        );
        assert!(responses.reports().is_empty());
    }

    #[test]
    fn test_bind_json_failure_reports_bad_request() {
        let responses = RecordingResponseHelper::default();
        let mut ctx = MemoryContext::default();
        let outcome: ValidationOutcome<CreateRecord> =
            bind_json(b"{not json", &responses, &mut ctx);
        assert_eq!(outcome.into_parts(), (CreateRecord::default(), true));
        assert!(ctx.is_aborted());
        assert_eq!(
            responses.reports(),
            vec![(
                "bad request".to_string(),
                hints::FIX_INVALID_REQUEST_DATA.to_string()
            )]
        );
    }
}
