//! Standard domain error messages

use std::fmt::Display;

use crate::error::Error;

/// Builds display-only error messages for handler responses and logs
pub trait ErrorMessageBuilder: Send + Sync {
    /// Error stating that record `id` does not belong to `username`
    fn record_does_not_belong(&self, id: &dyn Display, username: &str) -> Error;
}

/// Default message builder
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultErrorMessageBuilder;

impl ErrorMessageBuilder for DefaultErrorMessageBuilder {
    fn record_does_not_belong(&self, id: &dyn Display, username: &str) -> Error {
        build_ownership_error(id, username)
    }
}

/// Build an ownership error embedding both identifiers
///
/// Older clients saw two spaces before the username; this text uses one.
///
/// ```rust
/// use request_helpers::messages::build_ownership_error;
///
/// let error = build_ownership_error(42, "alice");
/// assert_eq!(error.to_string(), "the record 42 does not belong to alice");
/// ```
pub fn build_ownership_error(id: impl Display, username: &str) -> Error {
    Error::OwnershipMismatch {
        id: id.to_string(),
        username: username.to_string(),
    }
}
