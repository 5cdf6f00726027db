//! Request context abstraction
//!
//! [`RequestContext`] exposes only what the helpers need from a request:
//! query parameters, path parameters, values stored by upstream middleware,
//! and a slot for an early response. [`AxumRequestContext`] is the axum
//! implementation and can be used directly as a handler extractor.
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::{extract::State, response::{IntoResponse, Response}};
//! use request_helpers::prelude::*;
//!
//! async fn get_record(State(state): State<HandlerState>, mut ctx: AxumRequestContext) -> Response {
//!     let id = state.request_helper().validate_and_parse_id(&state, "id", &mut ctx, FIX_INVALID_ID);
//!     if id.failed {
//!         return ctx.into_response();
//!     }
//!     // ...
//! }
//! ```

use std::collections::HashMap;
use std::convert::Infallible;

use axum::{
    extract::{FromRequestParts, Query, RawPathParams},
    http::request::Parts,
    response::{IntoResponse, Response},
};

use crate::error::Error;

/// Context key under which authentication middleware stores the username
pub const USERNAME_KEY: &str = "username";

/// Read access to a request plus a slot for an early response
///
/// Missing values read as empty strings, never as errors.
pub trait RequestContext: Send {
    /// Query parameter `name`, or `default` when the key is absent
    ///
    /// A key that is present with an empty value returns the empty string.
    fn query_param(&self, name: &str, default: &str) -> String;

    /// Path parameter `name`, or the empty string
    fn path_param(&self, name: &str) -> String;

    /// Value stored by upstream middleware under `name`, or the empty string
    fn context_value(&self, name: &str) -> String;

    /// Record the response to send instead of running the rest of the handler
    fn abort_with(&mut self, response: Response);

    /// Whether a response has been recorded
    fn is_aborted(&self) -> bool;
}

/// String values attached to a request by middleware
///
/// Insert this into the request extensions (for example from an
/// authentication layer) to make values visible through
/// [`RequestContext::context_value`].
///
/// ```rust
/// use request_helpers::handlers::{ContextValues, USERNAME_KEY};
///
/// let values = ContextValues::new().with(USERNAME_KEY, "alice");
/// assert_eq!(values.get(USERNAME_KEY), Some("alice"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextValues(HashMap<String, String>);

impl ContextValues {
    /// Create an empty set of values
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a value, builder style
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add or replace a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

/// [`RequestContext`] backed by an axum request
#[derive(Default)]
pub struct AxumRequestContext {
    path_params: HashMap<String, String>,
    query: HashMap<String, String>,
    values: ContextValues,
    response: Option<Response>,
}

impl AxumRequestContext {
    /// Build a context from already extracted request pieces
    #[must_use]
    pub fn new(
        path_params: HashMap<String, String>,
        query: HashMap<String, String>,
        values: ContextValues,
    ) -> Self {
        Self {
            path_params,
            query,
            values,
            response: None,
        }
    }

    /// Take the recorded response, if any
    pub fn take_response(&mut self) -> Option<Response> {
        self.response.take()
    }
}

impl RequestContext for AxumRequestContext {
    fn query_param(&self, name: &str, default: &str) -> String {
        self.query
            .get(name)
            .cloned()
            .unwrap_or_else(|| default.to_string())
    }

    fn path_param(&self, name: &str) -> String {
        self.path_params.get(name).cloned().unwrap_or_default()
    }

    fn context_value(&self, name: &str) -> String {
        self.values.get(name).unwrap_or_default().to_string()
    }

    fn abort_with(&mut self, response: Response) {
        self.response = Some(response);
    }

    fn is_aborted(&self) -> bool {
        self.response.is_some()
    }
}

impl<S> FromRequestParts<S> for AxumRequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Routes without path parameters reject RawPathParams; treat as empty
        let path_params = match RawPathParams::from_request_parts(parts, state).await {
            Ok(params) => params
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
            Err(_) => HashMap::new(),
        };

        let query = match Query::<HashMap<String, String>>::try_from_uri(&parts.uri) {
            Ok(Query(query)) => query,
            Err(rejection) => {
                tracing::debug!("Ignoring undecodable query string: {}", rejection);
                HashMap::new()
            }
        };

        let values = parts
            .extensions
            .get::<ContextValues>()
            .cloned()
            .unwrap_or_default();

        Ok(Self::new(path_params, query, values))
    }
}

impl IntoResponse for AxumRequestContext {
    fn into_response(mut self) -> Response {
        match self.take_response() {
            Some(response) => response,
            None => {
                tracing::error!("Handler returned a request context without a recorded response");
                Error::Internal.into_response()
            }
        }
    }
}
