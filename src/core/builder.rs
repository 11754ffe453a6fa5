//! # Emitter builder.
//!
//! [`EmitterBuilder`] assembles an [`EmitterConfig`] and an optional parent link,
//! then produces an [`Emitter`] (or an `Arc` of one via `build_arc`).

use std::sync::{Arc, Weak};

use crate::core::EmitterConfig;
use crate::events::EventName;
use crate::policies::FailurePolicy;

use super::emits::Emits;
use super::emitter::{Emitter, Link};

/// Builder for constructing an [`Emitter`] with non-default settings.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use ripple::{Emitter, FailurePolicy};
///
/// let root: Arc<Emitter<u64>> = Arc::new(Emitter::new());
/// let child: Emitter<u64> = Emitter::builder()
///     .with_wildcard("any")
///     .with_failure_policy(FailurePolicy::Isolate)
///     .with_max_listeners(0)
///     .with_parent(&root, "child-")
///     .build();
///
/// assert_eq!(child.parent_prefix(), "child-");
/// assert!(child.parent().is_some());
/// ```
pub struct EmitterBuilder<A> {
    cfg: EmitterConfig,
    parent: Option<(Weak<dyn Emits<A>>, String)>,
}

impl<A> EmitterBuilder<A> {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: EmitterConfig) -> Self {
        Self { cfg, parent: None }
    }

    /// Sets the wildcard event name.
    pub fn with_wildcard(mut self, name: impl Into<EventName>) -> Self {
        self.cfg.wildcard = name.into();
        self
    }

    /// Sets the listener failure policy.
    pub fn with_failure_policy(mut self, failure: FailurePolicy) -> Self {
        self.cfg.failure = failure;
        self
    }

    /// Sets the per-event listener warning threshold (`0` = unlimited).
    pub fn with_max_listeners(mut self, max: usize) -> Self {
        self.cfg.max_listeners = max;
        self
    }

    /// Bubbles events of the built emitter to `parent` as `prefix + name`.
    ///
    /// A fresh emitter cannot be anyone's ancestor yet, so no cycle check is needed here.
    pub fn with_parent<P>(mut self, parent: &Arc<P>, prefix: impl Into<String>) -> Self
    where
        P: Emits<A> + 'static,
    {
        let target: Arc<dyn Emits<A>> = Arc::clone(parent) as Arc<dyn Emits<A>>;
        self.parent = Some((Arc::downgrade(&target), prefix.into()));
        self
    }

    /// Builds the emitter.
    pub fn build(self) -> Emitter<A> {
        let link = match self.parent {
            Some((parent, prefix)) => Link::to(parent, prefix),
            None => Link::detached(),
        };
        Emitter::from_parts(self.cfg, link)
    }

    /// Builds the emitter behind an `Arc`, ready to serve as a parent.
    pub fn build_arc(self) -> Arc<Emitter<A>> {
        Arc::new(self.build())
    }
}
