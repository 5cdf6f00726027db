//! Shared handler state

use std::sync::Arc;

use crate::{
    config::Config,
    handlers::{DefaultRequestHelper, HasResponseHelper, HasValidator, JsonResponseHelper, ResponseHelper},
    messages::{DefaultErrorMessageBuilder, ErrorMessageBuilder},
    validation::{DefaultRequestValidator, RequestValidator},
};

/// State shared across handlers
///
/// Implements both handler capabilities, so `&state` can be passed wherever a
/// [`HasValidatorAndResponseHelper`](crate::handlers::HasValidatorAndResponseHelper)
/// is expected. Cloning is cheap.
///
/// # Example
///
/// ```rust
/// use request_helpers::config::Config;
/// use request_helpers::state::HandlerState;
///
/// let state = HandlerState::new(Config::default());
/// assert_eq!(state.config().service.name, "request-helpers");
/// ```
#[derive(Clone)]
pub struct HandlerState {
    config: Arc<Config>,
    validator: Arc<dyn RequestValidator>,
    response_helper: Arc<dyn ResponseHelper>,
    error_messages: Arc<dyn ErrorMessageBuilder>,
    request_helper: DefaultRequestHelper,
}

impl Default for HandlerState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl HandlerState {
    /// Create state with the standard validator, response helper and message builder
    pub fn new(config: Config) -> Self {
        let request_helper = DefaultRequestHelper::new(config.pagination);
        Self {
            config: Arc::new(config),
            validator: Arc::new(DefaultRequestValidator),
            response_helper: Arc::new(JsonResponseHelper),
            error_messages: Arc::new(DefaultErrorMessageBuilder),
            request_helper,
        }
    }

    /// Replace the validator
    #[must_use]
    pub fn with_validator(mut self, validator: impl RequestValidator + 'static) -> Self {
        self.validator = Arc::new(validator);
        self
    }

    /// Replace the response helper
    #[must_use]
    pub fn with_response_helper(mut self, response_helper: impl ResponseHelper + 'static) -> Self {
        self.response_helper = Arc::new(response_helper);
        self
    }

    /// Replace the error message builder
    #[must_use]
    pub fn with_error_messages(mut self, builder: impl ErrorMessageBuilder + 'static) -> Self {
        self.error_messages = Arc::new(builder);
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the request helper configured from `config.pagination`
    pub fn request_helper(&self) -> &DefaultRequestHelper {
        &self.request_helper
    }

    /// Get the error message builder
    pub fn error_messages(&self) -> &dyn ErrorMessageBuilder {
        self.error_messages.as_ref()
    }
}

impl HasValidator for HandlerState {
    fn validator(&self) -> &dyn RequestValidator {
        self.validator.as_ref()
    }
}

impl HasResponseHelper for HandlerState {
    fn response_helper(&self) -> &dyn ResponseHelper {
        self.response_helper.as_ref()
    }
}
