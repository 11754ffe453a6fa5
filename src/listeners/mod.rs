//! # Listeners.
//!
//! This module provides the [`Listener`] handle and built-in listeners.
//!
//! ## Architecture
//! ```text
//! emit("login", args)
//!   │
//!   ├──► direct pass:   listeners["login"]  ──► Listener(&emitter, Event{ name: login })
//!   ├──► wildcard pass: listeners["*"]      ──► Listener(&emitter, Event{ name: login, wildcard })
//!   └──► bubble:        parent.emit(prefix + "login", args)
//! ```
//!
//! ## Implementing listeners
//! ```rust
//! use ripple::{Emitter, Listener};
//!
//! let em: Emitter<u32> = Emitter::new();
//! em.on("retry", Listener::new(|_em, ev| {
//!     if *ev.args() > 3 {
//!         return Err("too many retries".into());
//!     }
//!     Ok(())
//! }));
//!
//! assert!(em.emit("retry", 1).is_ok());
//! assert!(em.emit("retry", 7).is_err());
//! ```

mod listener;
#[cfg(feature = "logging")]
mod log;

pub use listener::{Listener, ListenerFn};
#[cfg(feature = "logging")]
pub use log::LogWriter;
