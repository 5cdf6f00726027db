//! # request-helpers
//!
//! Shared helpers for axum HTTP handlers: request parameter validation,
//! limit/offset pagination, and standardized error and pagination bodies.
//!
//! ## Features
//!
//! - **Validation**: non-empty usernames and positive integer record IDs
//! - **Pagination**: page/page-size to limit/offset and back to display metadata
//! - **Capabilities**: handlers supply a validator and a response helper through two small traits
//! - **Error reporting**: failures become 400 responses with a remediation hint
//! - **Configuration**: Figment-based, TOML files plus `REQUEST_HELPERS_` environment overrides
//!
//! ## Example
//!
//! ```rust,no_run
//! use request_helpers::prelude::*;
//!
//! async fn get_record(State(state): State<HandlerState>, mut ctx: AxumRequestContext) -> Response {
//!     let helper = state.request_helper();
//!
//!     let username = helper.get_and_validate_username(&mut ctx, &state);
//!     if username.failed {
//!         return ctx.into_response();
//!     }
//!
//!     let id = helper.validate_and_parse_id(&state, "id", &mut ctx, FIX_INVALID_ID);
//!     if id.failed {
//!         return ctx.into_response();
//!     }
//!
//!     Json(serde_json::json!({ "id": id.value, "owner": username.value })).into_response()
//! }
//!
//! #[tokio::main]
//! async fn main() -> request_helpers::error::Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config);
//!
//!     let app: Router = Router::new()
//!         .route("/records/{id}", get(get_record))
//!         .with_state(HandlerState::new(config));
//!     # let _ = app;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod messages;
pub mod observability;
pub mod pagination;
pub mod state;
pub mod validation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Config, ServiceConfig};
    pub use crate::error::hints::{FIX_INVALID_ID, FIX_INVALID_REQUEST_DATA, FIX_INVALID_USERNAME};
    pub use crate::error::{Error, ErrorKind, ErrorResponse, Result};
    pub use crate::handlers::{
        bind_json, AxumRequestContext, ContextValues, DefaultRequestHelper, HasResponseHelper,
        HasValidator, HasValidatorAndResponseHelper, JsonResponseHelper, PaginatedResponse,
        RequestContext, RequestHelper, ResponseHelper, ValidationOutcome, USERNAME_KEY,
    };
    pub use crate::messages::{build_ownership_error, DefaultErrorMessageBuilder, ErrorMessageBuilder};
    pub use crate::observability::init_tracing;
    pub use crate::pagination::{
        compute_meta, compute_window, PageMeta, PageRequest, PageWindow, PaginationConfig,
        ParseFallback, QueryScheme,
    };
    pub use crate::state::HandlerState;
    pub use crate::validation::{DefaultRequestValidator, RequestValidator};

    pub use axum::{
        extract::{Path, Query, State},
        http::StatusCode,
        response::{IntoResponse, Json, Response},
        routing::{delete, get, post, put},
        Extension, Router,
    };

    pub use serde::{Deserialize, Serialize};

    pub use tracing::{debug, error, info, instrument, trace, warn};
}
