//! # The view a listener receives on dispatch.
//!
//! [`Event`] borrows the fired name and the arguments for the duration of one
//! listener call. Direct listeners see the name they were registered under.
//! Wildcard listeners see the name of the event that actually fired, which is
//! how they tell events apart.
//!
//! ## Example
//! ```rust
//! use ripple::{Emitter, Listener};
//!
//! let em: Emitter<(i32, i32)> = Emitter::new();
//! em.on("*", Listener::new(|_em, ev| {
//!     assert!(ev.is_wildcard());
//!     assert_eq!(ev.name().as_str(), Some("sum"));
//!     assert_eq!(*ev.args(), (1, 2));
//!     Ok(())
//! }));
//! em.emit("sum", (1, 2)).unwrap();
//! ```

use super::EventName;

/// One dispatch, as seen by a listener.
#[derive(Debug)]
pub struct Event<'a, A> {
    name: &'a EventName,
    args: &'a A,
    wildcard: bool,
}

// Manual impls: `A` does not need to be `Clone`/`Copy` for the view to be.
impl<A> Clone for Event<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Event<'_, A> {}

impl<'a, A> Event<'a, A> {
    pub(crate) fn direct(name: &'a EventName, args: &'a A) -> Self {
        Self {
            name,
            args,
            wildcard: false,
        }
    }

    pub(crate) fn wildcard(fired: &'a EventName, args: &'a A) -> Self {
        Self {
            name: fired,
            args,
            wildcard: true,
        }
    }

    /// Name of the event that fired.
    pub fn name(&self) -> &'a EventName {
        self.name
    }

    /// Arguments passed to `emit`.
    pub fn args(&self) -> &'a A {
        self.args
    }

    /// True when this call is the wildcard pass of another event.
    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }
}
