//! # Event capability for host types.
//!
//! [`Emits`] lets any type that embeds an [`Emitter`] expose the emitter API
//! directly, and makes it a valid bubbling target.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use ripple::{Emits, Emitter, Listener};
//!
//! struct Session {
//!     user: String,
//!     events: Emitter<String>,
//! }
//!
//! impl Emits<String> for Session {
//!     fn emitter(&self) -> &Emitter<String> {
//!         &self.events
//!     }
//! }
//!
//! let app = Arc::new(Emitter::<String>::new());
//! let session = Session { user: "alice".into(), events: Emitter::new() };
//!
//! session
//!     .on("login", Listener::new(|_em, _ev| Ok(())))
//!     .propagate(&app, "session-")
//!     .unwrap();
//! session.emit("login", session.user.clone()).unwrap();
//! ```

use std::sync::Arc;

use crate::error::EmitterError;
use crate::events::EventName;
use crate::listeners::Listener;

use super::Emitter;

/// Capability interface over an embedded [`Emitter`].
///
/// Only [`emitter`](Emits::emitter) is required; everything else forwards to it
/// and returns `self` for chaining.
pub trait Emits<A>: Send + Sync {
    /// Returns the embedded emitter.
    fn emitter(&self) -> &Emitter<A>;

    /// See [`Emitter::on`].
    fn on(&self, name: impl Into<EventName>, listener: Listener<A>) -> &Self
    where
        Self: Sized,
    {
        self.emitter().on(name, listener);
        self
    }

    /// See [`Emitter::off`].
    fn off(&self, name: impl Into<EventName>, listener: &Listener<A>) -> &Self
    where
        Self: Sized,
    {
        self.emitter().off(name, listener);
        self
    }

    /// See [`Emitter::once`].
    fn once(&self, name: impl Into<EventName>, listener: Listener<A>) -> &Self
    where
        Self: Sized,
    {
        self.emitter().once(name, listener);
        self
    }

    /// See [`Emitter::emit`].
    fn emit(&self, name: impl Into<EventName>, args: A) -> Result<&Self, EmitterError>
    where
        Self: Sized,
    {
        self.emitter().emit(name, args)?;
        Ok(self)
    }

    /// See [`Emitter::has_listeners`].
    fn has_listeners(&self, name: impl Into<EventName>) -> bool
    where
        Self: Sized,
    {
        self.emitter().has_listeners(name)
    }

    /// See [`Emitter::propagate`].
    fn propagate<P>(
        &self,
        parent: &Arc<P>,
        prefix: impl Into<String>,
    ) -> Result<&Self, EmitterError>
    where
        Self: Sized,
        P: Emits<A> + 'static,
    {
        self.emitter().propagate(parent, prefix)?;
        Ok(self)
    }

    /// See [`Emitter::stop_propagation`].
    fn stop_propagation(&self) {
        self.emitter().stop_propagation();
    }
}

impl<A> Emits<A> for Emitter<A> {
    fn emitter(&self) -> &Emitter<A> {
        self
    }
}
