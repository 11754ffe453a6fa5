//! # Listener failure policies.
//!
//! [`FailurePolicy`] decides what one failing listener does to the rest of an `emit`.
//!
//! - [`FailurePolicy::Abort`] the first `Err` stops the pass and is returned from `emit` (default).
//! - [`FailurePolicy::Isolate`] every listener runs; failures and panics are logged and dropped.
//!
//! ## Choosing the right policy
//! ```text
//! FailurePolicy::Abort    → caller sees the failure; later listeners, wildcard
//!                           dispatch and bubbling are skipped
//! FailurePolicy::Isolate  → listeners cannot affect each other; caller never
//!                           sees listener failures (only `tracing::warn!`)
//! ```

/// Policy controlling how a listener failure affects the current dispatch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Stop at the first failing listener and return its error (default).
    ///
    /// Panics unwind through `emit` to the caller.
    #[default]
    Abort,
    /// Run every listener regardless of failures.
    ///
    /// `Err` returns and panics are logged with `tracing::warn!`; `emit` returns `Ok`.
    Isolate,
}

impl FailurePolicy {
    /// True for [`FailurePolicy::Isolate`].
    #[inline]
    pub fn isolates(&self) -> bool {
        matches!(self, FailurePolicy::Isolate)
    }
}
