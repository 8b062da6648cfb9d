//! Shared error classification.
//!
//! Every module error implements [`ErrorCode`] so callers (the editor UI
//! action handlers, the CLI) can surface a stable code and decide whether a
//! retry affordance makes sense without matching on concrete types.

/// Stable machine-readable classification for an error.
pub trait ErrorCode: std::fmt::Display {
    fn error_code(&self) -> &'static str;

    fn retryable(&self) -> bool {
        false
    }
}
