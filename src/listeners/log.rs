//! # LogWriter: wildcard event logger
//!
//! A minimal listener factory that records every fired event with `tracing::info!`.
//! Use it for tests or demos.
//!
//! ## Example output
//! ```text
//! INFO ripple::listeners::log: [event] event=login args="alice"
//! INFO ripple::listeners::log: [event] event=child-login args="alice"
//! ```

use std::fmt::Debug;

use crate::core::Emitter;
use crate::listeners::Listener;

/// Event writer listener.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Builds a listener that logs the fired name and the arguments.
    pub fn listener<A: Debug + 'static>(&self) -> Listener<A> {
        Listener::new(|_em: &Emitter<A>, ev| {
            tracing::info!(event = %ev.name(), args = ?ev.args(), "[event]");
            Ok(())
        })
    }

    /// Registers a logging listener under the emitter's wildcard name.
    ///
    /// Returns the handle so it can be removed again with `off`.
    pub fn attach<A: Debug + 'static>(&self, emitter: &Emitter<A>) -> Listener<A> {
        let listener = self.listener();
        emitter.on(emitter.config().wildcard.clone(), listener.clone());
        listener
    }
}
