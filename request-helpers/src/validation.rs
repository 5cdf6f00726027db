//! Request parameter validation rules
//!
//! The rules are intentionally narrow: a username must be non-empty and a
//! record ID must be a positive base-10 integer. Anything richer belongs in
//! the handler's own business logic.

use crate::error::{Error, Result};

/// Validation rules applied to raw request parameters
///
/// Implementations must be pure: the same input always yields the same
/// result.
pub trait RequestValidator: Send + Sync {
    /// Check that a username is present
    ///
    /// Fails with [`Error::InvalidUsername`] for the empty string. No trimming
    /// and no charset or length rules are applied.
    fn validate_username(&self, username: &str) -> Result<()>;

    /// Parse a record ID, rejecting anything that is not a positive integer
    ///
    /// Fails with [`Error::InvalidId`] when `raw` is not a base-10 unsigned
    /// integer (this covers negative numbers, empty strings and non-numeric
    /// input) or when it parses to zero.
    fn validate_id_and_parse(&self, raw: &str) -> Result<u64>;
}

/// The standard validation rules
///
/// # Example
///
/// ```rust
/// use request_helpers::validation::{DefaultRequestValidator, RequestValidator};
///
/// let validator = DefaultRequestValidator;
/// assert!(validator.validate_username("alice").is_ok());
/// assert_eq!(validator.validate_id_and_parse("42").unwrap(), 42);
/// assert!(validator.validate_id_and_parse("0").is_err());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRequestValidator;

impl RequestValidator for DefaultRequestValidator {
    fn validate_username(&self, username: &str) -> Result<()> {
        if username.is_empty() {
            return Err(Error::InvalidUsername);
        }
        Ok(())
    }

    fn validate_id_and_parse(&self, raw: &str) -> Result<u64> {
        match raw.parse::<u64>() {
            Ok(id) if id != 0 => Ok(id),
            _ => Err(Error::InvalidId),
        }
    }
}
