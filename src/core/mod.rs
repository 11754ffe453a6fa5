//! Emitter core: registry, dispatch and propagation.
//!
//! Public API from this module: [`Emitter`], [`EmitterBuilder`], [`EmitterConfig`]
//! and the [`Emits`] capability trait.
//!
//! Internal modules:
//! - [`registry`]: name → ordered listener entries, snapshot support;
//! - [`emitter`]: registration, synchronous dispatch, wildcard pass, bubbling;
//! - [`emits`]: capability trait for host types embedding an emitter;
//! - [`builder`]: construction with non-default settings;
//! - [`config`]: wildcard name, failure policy, listener limit.

mod builder;
mod config;
mod emits;
mod emitter;
mod registry;

pub use builder::EmitterBuilder;
pub use config::{EmitterConfig, DEFAULT_MAX_LISTENERS, DEFAULT_WILDCARD};
pub use emits::Emits;
pub use emitter::Emitter;
