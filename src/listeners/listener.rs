//! # Listener handle.
//!
//! A [`Listener`] is a cheap, cloneable handle around a callback. Identity is the
//! handle itself: clones of one `Listener` are "the same listener" for `off`,
//! while two `Listener::new` calls with identical closures are different.
//!
//! ## Example
//! ```rust
//! use ripple::{Emitter, Listener};
//!
//! let em: Emitter = Emitter::new();
//! let l = Listener::new(|_em, _ev| Ok(()));
//!
//! em.on("tick", l.clone());
//! assert!(em.has_listeners("tick"));
//!
//! em.off("tick", &l);
//! assert!(!em.has_listeners("tick"));
//! ```

use std::fmt;
use std::sync::Arc;

use crate::core::Emitter;
use crate::error::ListenerError;
use crate::events::Event;

/// Callback signature shared by all listeners.
///
/// Receives the emitter dispatching the event and the event view.
pub type ListenerFn<A> =
    dyn Fn(&Emitter<A>, Event<'_, A>) -> Result<(), ListenerError> + Send + Sync;

/// Shared handle to a listener callback.
pub struct Listener<A> {
    f: Arc<ListenerFn<A>>,
}

impl<A> Listener<A> {
    /// Wraps a closure into a new listener with its own identity.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Emitter<A>, Event<'_, A>) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        Self { f: Arc::new(f) }
    }

    /// True when both handles refer to the same registration target.
    #[inline]
    pub fn same(&self, other: &Listener<A>) -> bool {
        Arc::ptr_eq(&self.f, &other.f)
    }

    #[inline]
    pub(crate) fn call(&self, emitter: &Emitter<A>, event: Event<'_, A>) -> Result<(), ListenerError> {
        (self.f)(emitter, event)
    }
}

impl<A> Clone for Listener<A> {
    fn clone(&self) -> Self {
        Self {
            f: Arc::clone(&self.f),
        }
    }
}

impl<A> fmt::Debug for Listener<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("id", &Arc::as_ptr(&self.f).cast::<()>())
            .finish()
    }
}
