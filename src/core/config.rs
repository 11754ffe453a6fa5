//! # Emitter configuration.
//!
//! Provides [`EmitterConfig`] settings fixed at emitter construction.
//!
//! ## Sentinel values
//! - `max_listeners = 0` → unlimited (no overflow warning)

use crate::events::EventName;
use crate::policies::FailurePolicy;

/// Default per-event listener count above which a warning is logged.
pub const DEFAULT_MAX_LISTENERS: usize = 10;

/// Default wildcard event name.
pub const DEFAULT_WILDCARD: &str = "*";

/// Configuration for an [`Emitter`](crate::Emitter).
///
/// ## Field semantics
/// - `wildcard`: name whose listeners observe every other event
/// - `failure`: what a failing listener does to the rest of the pass
/// - `max_listeners`: per-event count above which a warning is logged (`0` = unlimited)
///
/// ## Notes
/// All fields are public for flexibility. Prefer the helper accessors to avoid
/// sprinkling sentinel checks (`0`) across the codebase.
#[derive(Clone, Debug)]
pub struct EmitterConfig {
    /// Reserved catch-all name.
    ///
    /// Listeners registered here are invoked after the direct listeners of every
    /// event except the wildcard itself, and see the fired name in [`Event::name`](crate::Event::name).
    pub wildcard: EventName,

    /// Listener failure policy.
    pub failure: FailurePolicy,

    /// Listener count per event above which a one-time warning is logged.
    ///
    /// - `0` = unlimited
    /// - `n > 0` = warn once when an event gets its `n + 1`th listener
    ///
    /// Registration always succeeds; this only surfaces likely leaks.
    pub max_listeners: usize,
}

impl EmitterConfig {
    /// Returns the listener limit as an `Option`.
    ///
    /// - `None` → unlimited
    /// - `Some(n)` → warn above `n`
    #[inline]
    pub fn listener_limit(&self) -> Option<usize> {
        if self.max_listeners == 0 {
            None
        } else {
            Some(self.max_listeners)
        }
    }

    /// True when `name` is the configured wildcard.
    #[inline]
    pub fn is_wildcard(&self, name: &EventName) -> bool {
        *name == self.wildcard
    }
}

impl Default for EmitterConfig {
    /// Default configuration:
    ///
    /// - `wildcard = "*"`
    /// - `failure = FailurePolicy::Abort`
    /// - `max_listeners = 10`
    fn default() -> Self {
        Self {
            wildcard: EventName::from(DEFAULT_WILDCARD),
            failure: FailurePolicy::default(),
            max_listeners: DEFAULT_MAX_LISTENERS,
        }
    }
}
