//! # ripple
//!
//! **ripple** is a small, synchronous event emitter for Rust.
//!
//! It maps event names to listener callbacks and supports one-shot listeners,
//! a wildcard name that observes every event, and bubbling of events to a
//! parent emitter under a prefixed name. It is meant to be embedded in other
//! types (see [`Emits`]) to give them event-notification capability.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!        ┌────────────────────┐  parent (Weak) + "child-"   ┌────────────────────┐
//!        │   Emitter (child)  │ ──────────────────────────► │  Emitter (parent)  │
//!        │  ┌──────────────┐  │                             │  ┌──────────────┐  │
//!        │  │   Registry   │  │                             │  │   Registry   │  │
//!        │  │ name → [L..] │  │                             │  │ name → [L..] │  │
//!        │  └──────────────┘  │                             │  └──────────────┘  │
//!        └─────────┬──────────┘                             └─────────┬──────────┘
//!                  │ emit("login", user)                              │ emit("child-login", user)
//!                  ▼                                                  ▼
//!        listeners["login"] in order                        listeners["child-login"]
//!        listeners["*"] with Event{ name: "login" }         listeners["*"] with Event{ name: "child-login" }
//!        bubble ──────────────────────────────────────────► (and further up, if it has a parent)
//! ```
//!
//! ### Dispatch
//! ```text
//! emit(name, args)
//!   ├─► snapshot = registry[name].clone()      (lock released before any call)
//!   ├─► for entry in snapshot:
//!   │     ├─ once?  claim + remove itself first
//!   │     └─ call listener(&emitter, Event{ name, args })
//!   ├─► name != wildcard ─► same for registry[wildcard], Event carries the fired name
//!   └─► parent alive ─► parent.emit(prefix + name, args)
//! ```
//!
//! ## Features
//! | Area              | Description                                                | Key types / traits                     |
//! |-------------------|------------------------------------------------------------|----------------------------------------|
//! | **Emitter**       | Register, remove, dispatch, bubble.                        | [`Emitter`], [`Listener`], [`Event`]   |
//! | **Composition**   | Give host types the emitter API; use them as parents.      | [`Emits`]                              |
//! | **Keys**          | String names or identity-compared symbols.                 | [`EventName`], [`Symbol`]              |
//! | **Policies**      | Abort on first listener error, or isolate listeners.       | [`FailurePolicy`]                      |
//! | **Errors**        | Typed errors for validation and listener failures.         | [`EmitterError`], [`ListenerError`]    |
//! | **Configuration** | Wildcard name, failure policy, listener leak warning.      | [`EmitterConfig`], [`EmitterBuilder`]  |
//!
//! ## Optional features
//! - `logging`: exports a simple built-in [`LogWriter`] wildcard listener _(demo/reference only)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use ripple::{Emitter, Listener};
//!
//! let app: Arc<Emitter<String>> = Arc::new(Emitter::new());
//! let child: Emitter<String> = Emitter::new();
//! child.propagate(&app, "child-").unwrap();
//!
//! let logins = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&logins);
//! app.on("child-login", Listener::new(move |_em, ev| {
//!     assert_eq!(ev.args(), "alice");
//!     counter.fetch_add(1, Ordering::SeqCst);
//!     Ok(())
//! }));
//!
//! child.emit("login", "alice".to_string()).unwrap();
//! assert_eq!(logins.load(Ordering::SeqCst), 1);
//! ```
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod core;
mod error;
mod events;
mod listeners;
mod policies;

// ---- Public re-exports ----

pub use crate::core::{
    Emits, Emitter, EmitterBuilder, EmitterConfig, DEFAULT_MAX_LISTENERS, DEFAULT_WILDCARD,
};
pub use error::{EmitterError, ListenerError};
pub use events::{Event, EventName, Symbol};
pub use listeners::{Listener, ListenerFn};
pub use policies::FailurePolicy;

// Optional: expose a simple built-in logging listener (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use listeners::LogWriter;
