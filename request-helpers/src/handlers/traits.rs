//! Capability traits for handler contexts
//!
//! Handlers hand the helpers a single object that exposes a validator and a
//! response helper. The two capabilities are separate traits; anything that
//! implements both gets [`HasValidatorAndResponseHelper`] for free.
//!
//! # Example
//!
//! ```rust
//! use request_helpers::handlers::{
//!     HasResponseHelper, HasValidator, HasValidatorAndResponseHelper, JsonResponseHelper,
//!     ResponseHelper,
//! };
//! use request_helpers::validation::{DefaultRequestValidator, RequestValidator};
//!
//! struct StaffHandler {
//!     validator: DefaultRequestValidator,
//!     responses: JsonResponseHelper,
//! }
//!
//! impl HasValidator for StaffHandler {
//!     fn validator(&self) -> &dyn RequestValidator {
//!         &self.validator
//!     }
//! }
//!
//! impl HasResponseHelper for StaffHandler {
//!     fn response_helper(&self) -> &dyn ResponseHelper {
//!         &self.responses
//!     }
//! }
//!
//! fn requires_both(_: &dyn HasValidatorAndResponseHelper) {}
//!
//! requires_both(&StaffHandler {
//!     validator: DefaultRequestValidator,
//!     responses: JsonResponseHelper,
//! });
//! ```

use super::response::ResponseHelper;
use crate::validation::RequestValidator;

/// Access to request validation rules
pub trait HasValidator {
    /// The validator to apply to raw request parameters
    fn validator(&self) -> &dyn RequestValidator;
}

/// Access to the bad-request reporter
pub trait HasResponseHelper {
    /// The helper that writes failure responses
    fn response_helper(&self) -> &dyn ResponseHelper;
}

/// Both capabilities required by [`RequestHelper`](super::RequestHelper)
pub trait HasValidatorAndResponseHelper: HasValidator + HasResponseHelper {}

impl<T> HasValidatorAndResponseHelper for T where T: HasValidator + HasResponseHelper {}
