//! Generic error handling utilities
//!
//! Unified fatal-error reporting that works across error types while keeping
//! domain-specific detail out of the user's face.

/// Trait for errors that can distinguish between user-actionable and system
/// errors.
///
/// User-actionable errors (a missing `version` file the user can create)
/// carry a specific message to display directly. System errors (IO failures,
/// permission problems) get generic context with detail pushed to debug
/// level.
///
/// When `is_user_actionable()` returns `true`, `user_message()` must return
/// `Some(message)`; when it returns `false`, `user_message()` must return
/// `None`.
pub trait ContextualError: std::error::Error {
    /// True if this error carries a specific, user-actionable message
    fn is_user_actionable(&self) -> bool;

    /// The specific user message, present exactly when `is_user_actionable()`
    fn user_message(&self) -> Option<&str>;
}

/// Log an error fatally with detail appropriate to its specificity.
///
/// User-actionable errors log their own message; system errors log the
/// operation context. Either way the full error chain is available at debug
/// level for diagnosis.
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    if let Some(user_msg) = error.user_message().filter(|_| error.is_user_actionable()) {
        log::error!("FATAL: {}", user_msg);
    } else {
        log::error!("FATAL: {}", operation_context);
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
