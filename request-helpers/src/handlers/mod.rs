//! Handler-facing helpers
//!
//! This module ties the pure validation and pagination rules to HTTP
//! requests. A handler passes its request context and an object carrying the
//! two capabilities ([`HasValidator`] and [`HasResponseHelper`]) to a
//! [`RequestHelper`], gets back a [`ValidationOutcome`], and returns early
//! when `failed` is set.
//!
//! # Features
//!
//! - **Request context**: [`RequestContext`] trait, [`AxumRequestContext`] extractor
//! - **Capabilities**: [`HasValidator`], [`HasResponseHelper`], [`HasValidatorAndResponseHelper`]
//! - **Extraction**: [`RequestHelper`], [`DefaultRequestHelper`], [`bind_json`]
//! - **Responses**: [`ResponseHelper`], [`JsonResponseHelper`], [`PaginatedResponse`]
//!
//! # Integration with Axum
//!
//! ```rust,ignore
//! use axum::{extract::State, response::{IntoResponse, Response}};
//! use request_helpers::prelude::*;
//!
//! async fn list_records(State(state): State<HandlerState>, mut ctx: AxumRequestContext) -> Response {
//!     let helper = state.request_helper();
//!     let username = helper.get_and_validate_username(&mut ctx, &state);
//!     if username.failed {
//!         return ctx.into_response();
//!     }
//!
//!     let window = helper.get_limit_and_offset(&ctx);
//!     let (records, total) = load_records(&username.value, window.limit, window.offset).await;
//!     PaginatedResponse::new(records, window.meta(total)).into_response()
//! }
//! ```

mod context;
mod request_helper;
mod response;
mod traits;

pub use context::{AxumRequestContext, ContextValues, RequestContext, USERNAME_KEY};
pub use request_helper::{bind_json, DefaultRequestHelper, RequestHelper, ValidationOutcome};
pub use response::{JsonResponseHelper, PaginatedResponse, ResponseHelper};
pub use traits::{HasResponseHelper, HasValidator, HasValidatorAndResponseHelper};
