//! Error types used by the emitter and its listeners.
//!
//! - [`EmitterError`] errors returned by emitter operations.
//! - [`ListenerError`] the error type a listener returns to fail a dispatch.
//!
//! [`EmitterError`] provides helper methods (`as_label`, `as_message`) for logging.

use thiserror::Error;

use crate::events::EventName;

/// Error a listener returns to signal failure.
///
/// Boxed so listeners can use `?` on any error type.
pub type ListenerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// # Errors produced by emitter operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EmitterError {
    /// An argument was rejected before any state was changed.
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Why the argument was rejected.
        reason: String,
    },

    /// A listener failed during `emit`; the rest of the pass was skipped.
    #[error("listener for {event} failed: {source}")]
    Listener {
        /// Name the failing listener was dispatched under (the wildcard name for wildcard listeners).
        event: EventName,
        /// The listener's error.
        #[source]
        source: ListenerError,
    },
}

impl EmitterError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        EmitterError::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use ripple::EmitterError;
    ///
    /// let err = EmitterError::InvalidArgument { reason: "cycle".into() };
    /// assert_eq!(err.as_label(), "invalid_argument");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitterError::InvalidArgument { .. } => "invalid_argument",
            EmitterError::Listener { .. } => "listener_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EmitterError::InvalidArgument { reason } => format!("invalid argument: {reason}"),
            EmitterError::Listener { event, source } => {
                format!("listener for {event} failed: {source}")
            }
        }
    }

    /// True when the error came from a listener rather than from argument validation.
    pub fn is_listener_failure(&self) -> bool {
        matches!(self, EmitterError::Listener { .. })
    }
}
