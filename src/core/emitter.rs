//! # Emitter: registration, dispatch and bubbling.
//!
//! [`Emitter`] maps event names to listeners and dispatches synchronously on the
//! caller's thread.
//!
//! ## Dispatch
//! ```text
//! emit(name, args)
//!   ├─► snapshot listeners[name]      ──► call each in insertion order
//!   ├─► if name != wildcard:
//!   │     snapshot listeners[wildcard] ──► call each with Event{ name, wildcard }
//!   └─► if parent alive:
//!         parent.emit(prefix + name, args)   (parent repeats all three steps)
//! ```
//!
//! ## Rules
//! - The registry lock is never held while a listener runs, so listeners may
//!   call `on`/`off`/`once`/`emit` on any emitter, including this one.
//! - Each pass works on a snapshot: listeners added or removed during a pass
//!   take effect from the next `emit`.
//! - A `once` entry removes itself before its listener runs and fires at most
//!   once, even across nested `emit` calls.
//! - The parent link is a `Weak`; a dropped parent silently ends bubbling.
//! - Under [`FailurePolicy::Abort`](crate::FailurePolicy::Abort) the first
//!   listener error ends the whole `emit` (remaining listeners, wildcard pass
//!   and bubbling are skipped).
//! - Changes to any parent link are serialized process-wide, so two emitters
//!   can never become each other's ancestors through concurrent `propagate`.

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Weak};

use parking_lot::Mutex;

use crate::error::EmitterError;
use crate::events::{Event, EventName};
use crate::listeners::Listener;

use super::builder::EmitterBuilder;
use super::config::EmitterConfig;
use super::emits::Emits;
use super::registry::{Entry, Registry};

/// Serializes every parent-link change: the ancestor walk in `propagate` and
/// the store that follows it must see the same graph.
static PROPAGATION: Mutex<()> = Mutex::new(());

/// Non-owning link to the emitter events bubble to.
pub(crate) struct Link<A> {
    parent: Option<Weak<dyn Emits<A>>>,
    prefix: String,
}

impl<A> Link<A> {
    pub(crate) fn detached() -> Self {
        Self {
            parent: None,
            prefix: String::new(),
        }
    }

    pub(crate) fn to(parent: Weak<dyn Emits<A>>, prefix: String) -> Self {
        Self {
            parent: Some(parent),
            prefix,
        }
    }
}

/// Synchronous event emitter.
///
/// `A` is the argument type every event on this emitter carries; use a tuple or
/// an enum for several values. Embed it in a host type and implement
/// [`Emits`] to give that type the same API.
///
/// ## Example
/// ```rust
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicI32, Ordering};
/// use ripple::{Emitter, Listener};
///
/// let total = Arc::new(AtomicI32::new(0));
/// let seen = Arc::clone(&total);
///
/// let em: Emitter<(i32, i32)> = Emitter::new();
/// em.on("x", Listener::new(move |_em, ev| {
///     let (a, b) = *ev.args();
///     seen.store(a + b, Ordering::SeqCst);
///     Ok(())
/// }));
///
/// em.emit("x", (1, 2)).unwrap();
/// assert_eq!(total.load(Ordering::SeqCst), 3);
/// ```
pub struct Emitter<A = ()> {
    registry: Mutex<Registry<A>>,
    link: Mutex<Link<A>>,
    config: EmitterConfig,
}

impl<A> Emitter<A> {
    /// Creates an emitter with [`EmitterConfig::default`].
    pub fn new() -> Self {
        Self::with_config(EmitterConfig::default())
    }

    /// Creates an emitter with the given configuration.
    pub fn with_config(config: EmitterConfig) -> Self {
        Self::from_parts(config, Link::detached())
    }

    /// Returns a builder starting from [`EmitterConfig::default`].
    pub fn builder() -> EmitterBuilder<A> {
        EmitterBuilder::new(EmitterConfig::default())
    }

    pub(crate) fn from_parts(config: EmitterConfig, link: Link<A>) -> Self {
        Self {
            registry: Mutex::new(Registry::new()),
            link: Mutex::new(link),
            config,
        }
    }

    /// Returns the configuration this emitter was built with.
    pub fn config(&self) -> &EmitterConfig {
        &self.config
    }

    // ---- Registration ----

    /// Registers `listener` for `name`, after any listeners already there.
    ///
    /// The same listener may be registered more than once; it then runs once
    /// per registration.
    pub fn on(&self, name: impl Into<EventName>, listener: Listener<A>) -> &Self {
        self.register(name.into(), Entry::persistent(listener));
        self
    }

    /// Registers every `(name, listener)` pair, in iteration order.
    pub fn on_many<I, N>(&self, pairs: I) -> &Self
    where
        I: IntoIterator<Item = (N, Listener<A>)>,
        N: Into<EventName>,
    {
        for (name, listener) in pairs {
            self.register(name.into(), Entry::persistent(listener));
        }
        self
    }

    /// Registers `listener` to run on the next `name` event only.
    ///
    /// The registration is removed before the listener is called.
    pub fn once(&self, name: impl Into<EventName>, listener: Listener<A>) -> &Self {
        self.register(name.into(), Entry::once(listener));
        self
    }

    fn register(&self, name: EventName, entry: Arc<Entry<A>>) {
        let mut registry = self.registry.lock();
        let count = registry.add(name.clone(), entry);
        if let Some(limit) = self.config.listener_limit() {
            if count > limit && registry.mark_warned(&name) {
                tracing::warn!(
                    event = %name,
                    count,
                    limit,
                    "possible listener leak: more listeners than max_listeners"
                );
            }
        }
    }

    /// Removes every registration of `listener` under `name`.
    ///
    /// Also removes pending `once` registrations of it. No-op when nothing matches.
    pub fn off(&self, name: impl Into<EventName>, listener: &Listener<A>) -> &Self {
        let name = name.into();
        let removed = self.registry.lock().remove(&name, listener);
        if removed > 0 {
            tracing::trace!(event = %name, removed, "listener removed");
        }
        self
    }

    /// Removes all listeners for `name`, or every listener when `name` is `None`.
    pub fn remove_all_listeners(&self, name: Option<EventName>) -> &Self {
        let mut registry = self.registry.lock();
        match name {
            Some(name) => {
                registry.clear(&name);
            }
            None => registry.clear_all(),
        }
        self
    }

    // ---- Queries ----

    /// True if at least one listener is registered for `name`.
    pub fn has_listeners(&self, name: impl Into<EventName>) -> bool {
        self.registry.lock().contains(&name.into())
    }

    /// Number of registrations for `name`.
    pub fn listener_count(&self, name: impl Into<EventName>) -> usize {
        self.registry.lock().count(&name.into())
    }

    /// Names that currently have listeners, in no particular order.
    pub fn event_names(&self) -> Vec<EventName> {
        self.registry.lock().names()
    }

    // ---- Dispatch ----

    /// Calls every listener for `name`, then the wildcard listeners, then bubbles.
    ///
    /// ### Errors
    /// Under [`FailurePolicy::Abort`](crate::FailurePolicy::Abort), returns
    /// [`EmitterError::Listener`] for the first listener that fails, here or in
    /// any ancestor.
    pub fn emit(&self, name: impl Into<EventName>, args: A) -> Result<&Self, EmitterError> {
        let name = name.into();
        self.dispatch(&name, &args)?;
        Ok(self)
    }

    pub(crate) fn dispatch(&self, name: &EventName, args: &A) -> Result<(), EmitterError> {
        self.notify(name, Event::direct(name, args))?;
        if !self.config.is_wildcard(name) {
            self.notify(&self.config.wildcard, Event::wildcard(name, args))?;
        }
        self.bubble(name, args)
    }

    fn notify(&self, key: &EventName, event: Event<'_, A>) -> Result<(), EmitterError> {
        let Some(snapshot) = self.registry.lock().snapshot(key) else {
            return Ok(());
        };
        tracing::trace!(event = %key, listeners = snapshot.len(), "dispatching");

        for entry in snapshot {
            if !entry.claim() {
                continue;
            }
            if entry.is_once() {
                self.registry.lock().remove_entry(key, &entry);
            }
            self.invoke(key, entry.listener(), event)?;
        }
        Ok(())
    }

    fn invoke(
        &self,
        key: &EventName,
        listener: &Listener<A>,
        event: Event<'_, A>,
    ) -> Result<(), EmitterError> {
        if !self.config.failure.isolates() {
            return listener
                .call(self, event)
                .map_err(|source| EmitterError::Listener {
                    event: key.clone(),
                    source,
                });
        }

        match panic::catch_unwind(AssertUnwindSafe(|| listener.call(self, event))) {
            Ok(Ok(())) => {}
            Ok(Err(err)) => {
                tracing::warn!(event = %key, error = %err, "listener failed; continuing");
            }
            Err(payload) => {
                tracing::warn!(
                    event = %key,
                    panic = panic_message(payload.as_ref()),
                    "listener panicked; continuing"
                );
            }
        }
        Ok(())
    }

    fn bubble(&self, name: &EventName, args: &A) -> Result<(), EmitterError> {
        let (parent, bubbled) = {
            let link = self.link.lock();
            let Some(weak) = &link.parent else {
                return Ok(());
            };
            (weak.upgrade(), name.prefixed(&link.prefix))
        };

        match parent {
            Some(parent) => {
                tracing::trace!(from = %name, to = %bubbled, "bubbling to parent");
                parent.emitter().dispatch(&bubbled, args)
            }
            None => {
                tracing::debug!(event = %name, "parent dropped; bubbling skipped");
                Ok(())
            }
        }
    }

    // ---- Propagation ----

    /// Bubbles every event emitted here to `parent` as `prefix + name`.
    ///
    /// The parent is held weakly. Replaces any previous parent.
    ///
    /// ### Errors
    /// [`EmitterError::InvalidArgument`] if `parent` is this emitter or already
    /// bubbles (directly or transitively) into it; nothing is changed.
    pub fn propagate<P>(
        &self,
        parent: &Arc<P>,
        prefix: impl Into<String>,
    ) -> Result<&Self, EmitterError>
    where
        P: Emits<A> + 'static,
    {
        let target: Arc<dyn Emits<A>> = Arc::clone(parent) as Arc<dyn Emits<A>>;
        let _graph = PROPAGATION.lock();

        let mut cursor = Some(Arc::clone(&target));
        while let Some(node) = cursor {
            if std::ptr::eq(node.emitter(), self) {
                return Err(EmitterError::invalid(
                    "propagation target is this emitter or bubbles into it",
                ));
            }
            cursor = node.emitter().parent();
        }

        *self.link.lock() = Link::to(Arc::downgrade(&target), prefix.into());
        Ok(self)
    }

    /// Clears the parent and the prefix. Listeners are untouched.
    pub fn stop_propagation(&self) {
        let _graph = PROPAGATION.lock();
        *self.link.lock() = Link::detached();
    }

    /// Returns the parent if one is set and still alive.
    pub fn parent(&self) -> Option<Arc<dyn Emits<A>>> {
        self.link.lock().parent.as_ref().and_then(Weak::upgrade)
    }

    /// True if a parent is set (it may have been dropped since).
    pub fn has_parent(&self) -> bool {
        self.link.lock().parent.is_some()
    }

    /// Prefix applied to bubbled names; empty when not propagating.
    pub fn parent_prefix(&self) -> String {
        self.link.lock().prefix.clone()
    }
}

impl<A> Default for Emitter<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> fmt::Debug for Emitter<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners = self.registry.lock().total();
        let link = self.link.lock();
        f.debug_struct("Emitter")
            .field("listeners", &listeners)
            .field("has_parent", &link.parent.is_some())
            .field("prefix", &link.prefix)
            .field("config", &self.config)
            .finish()
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(s) = payload.downcast_ref::<&'static str>() {
        *s
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else {
        "unknown panic"
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Barrier;
    use std::thread;

    use super::*;
    use crate::events::Symbol;
    use crate::policies::FailurePolicy;

    type Log = Arc<Mutex<Vec<String>>>;

    fn log() -> Log {
        Arc::new(Mutex::new(Vec::new()))
    }

    /// Listener that appends `tag` to the log.
    fn record<A: 'static>(log: &Log, tag: &'static str) -> Listener<A> {
        let log = Arc::clone(log);
        Listener::new(move |_em, _ev| {
            log.lock().push(tag.to_string());
            Ok(())
        })
    }

    fn entries(log: &Log) -> Vec<String> {
        log.lock().clone()
    }

    #[test]
    fn test_listeners_run_in_insertion_order() {
        let em: Emitter = Emitter::new();
        let log = log();
        em.on("e", record(&log, "l1")).on("e", record(&log, "l2"));

        em.emit("e", ()).unwrap();
        assert_eq!(entries(&log), ["l1", "l2"]);
    }

    #[test]
    fn test_listener_sees_arguments() {
        let em: Emitter<(i32, i32)> = Emitter::new();
        let seen = Arc::new(Mutex::new(None));
        let out = Arc::clone(&seen);
        em.on(
            "x",
            Listener::new(move |_em, ev| {
                let (a, b) = *ev.args();
                *out.lock() = Some(a + b);
                assert!(!ev.is_wildcard());
                Ok(())
            }),
        );

        em.emit("x", (1, 2)).unwrap();
        assert_eq!(*seen.lock(), Some(3));
    }

    #[test]
    fn test_off_removes_only_target() {
        let em: Emitter = Emitter::new();
        let log = log();
        let f = record(&log, "f");
        em.on("a", f.clone()).on("a", record(&log, "g"));

        em.off("a", &f).emit("a", ()).unwrap();
        assert_eq!(entries(&log), ["g"]);
    }

    #[test]
    fn test_off_sole_listener_clears_name() {
        let em: Emitter = Emitter::new();
        let l = record(&log(), "l");
        em.on("e", l.clone());
        assert!(em.has_listeners("e"));

        em.off("e", &l);
        assert!(!em.has_listeners("e"));
        assert!(em.event_names().is_empty());
    }

    #[test]
    fn test_off_duplicates_and_unknown() {
        let em: Emitter = Emitter::new();
        let log = log();
        let f = record(&log, "f");
        em.on("a", f.clone()).on("a", f.clone()).on("a", record(&log, "g")).on("a", f.clone());
        assert_eq!(em.listener_count("a"), 4);

        em.off("a", &f);
        assert_eq!(em.listener_count("a"), 1);

        em.off("missing", &f);
        em.emit("a", ()).unwrap();
        assert_eq!(entries(&log), ["g"]);
    }

    #[test]
    fn test_once_fires_once() {
        let em: Emitter = Emitter::new();
        let log = log();
        em.once("e", record(&log, "once"));

        em.emit("e", ()).unwrap().emit("e", ()).unwrap();
        assert_eq!(entries(&log), ["once"]);
        assert!(!em.has_listeners("e"));
    }

    #[test]
    fn test_once_is_removed_before_it_runs() {
        let em: Emitter = Emitter::new();
        let still_registered = Arc::new(Mutex::new(None));
        let out = Arc::clone(&still_registered);
        em.once(
            "e",
            Listener::new(move |em, _ev| {
                *out.lock() = Some(em.has_listeners("e"));
                Ok(())
            }),
        );

        em.emit("e", ()).unwrap();
        assert_eq!(*still_registered.lock(), Some(false));
    }

    #[test]
    fn test_once_survives_reentrant_emit() {
        let em: Emitter = Emitter::new();
        let log = log();
        let depth = Arc::new(Mutex::new(0));

        // First listener re-emits the same event once, before the `once` entry runs.
        let d = Arc::clone(&depth);
        em.on(
            "e",
            Listener::new(move |em, _ev| {
                let nested = {
                    let mut d = d.lock();
                    *d += 1;
                    *d == 1
                };
                if nested {
                    em.emit("e", ())?;
                }
                Ok(())
            }),
        );
        em.once("e", record(&log, "once"));

        em.emit("e", ()).unwrap();
        assert_eq!(entries(&log), ["once"]);
    }

    #[test]
    fn test_nested_emit_of_other_event_completes_first() {
        let parent: Arc<Emitter> = Arc::new(Emitter::new());
        let em: Emitter = Emitter::new();
        em.propagate(&parent, "p-").unwrap();

        let log = log();
        let first = Arc::clone(&log);
        let wild = Arc::clone(&log);
        let upstream = Arc::clone(&log);

        em.on(
            "a",
            Listener::new(move |em, _ev| {
                first.lock().push("a1".to_string());
                em.emit("b", ())?;
                Ok(())
            }),
        )
        .on("a", record(&log, "a2"))
        .on("b", record(&log, "b"))
        .on(
            "*",
            Listener::new(move |_em, ev: Event<'_, ()>| {
                wild.lock().push(format!("wild:{}", ev.name()));
                Ok(())
            }),
        );
        parent.on(
            "*",
            Listener::new(move |_em, ev: Event<'_, ()>| {
                upstream.lock().push(format!("parent:{}", ev.name()));
                Ok(())
            }),
        );

        em.emit("a", ()).unwrap();
        assert_eq!(
            entries(&log),
            ["a1", "b", "wild:b", "parent:p-b", "a2", "wild:a", "parent:p-a"]
        );
    }

    #[test]
    fn test_off_removes_pending_once() {
        let em: Emitter = Emitter::new();
        let log = log();
        let l = record(&log, "l");
        em.once("e", l.clone());
        em.off("e", &l);

        em.emit("e", ()).unwrap();
        assert!(entries(&log).is_empty());
    }

    #[test]
    fn test_self_removal_keeps_current_pass() {
        let em: Emitter = Emitter::new();
        let log = log();
        let slot: Arc<Mutex<Option<Listener<()>>>> = Arc::new(Mutex::new(None));

        let me = Arc::clone(&slot);
        let inner_log = Arc::clone(&log);
        let selfish = Listener::new(move |em: &Emitter, _ev| {
            inner_log.lock().push("selfish".to_string());
            let this = me.lock().clone();
            if let Some(this) = this {
                em.off("e", &this);
            }
            Ok(())
        });
        *slot.lock() = Some(selfish.clone());

        em.on("e", selfish).on("e", record(&log, "after"));

        em.emit("e", ()).unwrap();
        assert_eq!(entries(&log), ["selfish", "after"]);

        em.emit("e", ()).unwrap();
        assert_eq!(entries(&log), ["selfish", "after", "after"]);
    }

    #[test]
    fn test_removing_later_listener_does_not_skip_it_this_pass() {
        let em: Emitter = Emitter::new();
        let log = log();
        let victim = record(&log, "victim");

        let v = victim.clone();
        em.on(
            "e",
            Listener::new(move |em, _ev| {
                em.off("e", &v);
                Ok(())
            }),
        )
        .on("e", victim);

        em.emit("e", ()).unwrap();
        assert_eq!(entries(&log), ["victim"]);

        em.emit("e", ()).unwrap();
        assert_eq!(entries(&log), ["victim"]);
    }

    #[test]
    fn test_listener_added_during_emit_waits_for_next() {
        let em: Emitter = Emitter::new();
        let log = log();
        let late = record(&log, "late");

        em.once(
            "e",
            Listener::new(move |em, _ev| {
                em.on("e", late.clone());
                Ok(())
            }),
        );

        em.emit("e", ()).unwrap();
        assert!(entries(&log).is_empty());

        em.emit("e", ()).unwrap();
        assert_eq!(entries(&log), ["late"]);
    }

    #[test]
    fn test_wildcard_sees_fired_name_and_args() {
        let em: Emitter<Vec<i32>> = Emitter::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let out = Arc::clone(&seen);
        em.on(
            "*",
            Listener::new(move |_em, ev: Event<'_, Vec<i32>>| {
                assert!(ev.is_wildcard());
                out.lock().push((ev.name().to_string(), ev.args().clone()));
                Ok(())
            }),
        );

        em.emit("foo", vec![1, 2]).unwrap();
        assert_eq!(*seen.lock(), [("foo".to_string(), vec![1, 2])]);
    }

    #[test]
    fn test_wildcard_runs_after_direct_listeners() {
        let em: Emitter = Emitter::new();
        let log = log();
        em.on("*", record(&log, "wild")).on("e", record(&log, "direct"));

        em.emit("e", ()).unwrap();
        assert_eq!(entries(&log), ["direct", "wild"]);
    }

    #[test]
    fn test_emitting_wildcard_does_not_dispatch_twice() {
        let em: Emitter = Emitter::new();
        let log = log();
        em.on("*", record(&log, "wild"));

        em.emit("*", ()).unwrap();
        assert_eq!(entries(&log), ["wild"]);
    }

    #[test]
    fn test_custom_wildcard_name() {
        let em: Emitter = Emitter::builder().with_wildcard("all").build();
        let log = log();
        em.on("all", record(&log, "all")).on("*", record(&log, "star"));

        em.emit("e", ()).unwrap();
        assert_eq!(entries(&log), ["all"]);
    }

    #[test]
    fn test_bubbles_with_prefix() {
        let parent: Arc<Emitter<String>> = Arc::new(Emitter::new());
        let child: Emitter<String> = Emitter::new();
        child.propagate(&parent, "child-").unwrap();

        let log = log();
        child.on("login", record(&log, "child"));
        parent.on("child-login", record(&log, "parent"));
        parent.on("login", record(&log, "parent-unprefixed"));

        let got = Arc::new(Mutex::new(String::new()));
        let out = Arc::clone(&got);
        parent.on(
            "child-login",
            Listener::new(move |_em, ev| {
                out.lock().clone_from(ev.args());
                Ok(())
            }),
        );

        child.emit("login", "alice".to_string()).unwrap();
        assert_eq!(entries(&log), ["child", "parent"]);
        assert_eq!(*got.lock(), "alice");
    }

    #[test]
    fn test_parent_listener_receives_parent_emitter() {
        let parent: Arc<Emitter> = Arc::new(Emitter::new());
        let child: Emitter = Emitter::new();
        child.propagate(&parent, "").unwrap();

        let same = Arc::new(Mutex::new(false));
        let out = Arc::clone(&same);
        let expected = Arc::as_ptr(&parent) as usize;
        parent.on(
            "e",
            Listener::new(move |em, _ev| {
                *out.lock() = std::ptr::eq(em, expected as *const Emitter);
                Ok(())
            }),
        );

        child.emit("e", ()).unwrap();
        assert!(*same.lock());
    }

    #[test]
    fn test_multi_level_bubbling_and_parent_wildcard() {
        let root: Arc<Emitter> = Arc::new(Emitter::new());
        let mid: Arc<Emitter> = Arc::new(Emitter::new());
        let leaf: Emitter = Emitter::new();
        mid.propagate(&root, "mid.").unwrap();
        leaf.propagate(&mid, "leaf.").unwrap();

        let names = Arc::new(Mutex::new(Vec::new()));
        let out = Arc::clone(&names);
        root.on(
            "*",
            Listener::new(move |_em, ev| {
                out.lock().push(ev.name().to_string());
                Ok(())
            }),
        );

        leaf.emit("save", ()).unwrap();
        mid.emit("load", ()).unwrap();
        assert_eq!(*names.lock(), ["mid.leaf.save", "mid.load"]);
    }

    #[test]
    fn test_symbol_bubbles_unprefixed() {
        let parent: Arc<Emitter> = Arc::new(Emitter::new());
        let child: Emitter = Emitter::new();
        child.propagate(&parent, "child-").unwrap();

        let ready = Symbol::new("ready");
        let log = log();
        parent.on(&ready, record(&log, "parent"));

        child.emit(&ready, ()).unwrap();
        assert_eq!(entries(&log), ["parent"]);
    }

    #[test]
    fn test_stop_propagation_keeps_listeners() {
        let parent: Arc<Emitter> = Arc::new(Emitter::new());
        let child: Emitter = Emitter::new();
        child.propagate(&parent, "c-").unwrap();
        assert_eq!(child.parent_prefix(), "c-");

        let log = log();
        child.on("e", record(&log, "child"));
        parent.on("c-e", record(&log, "parent"));

        child.stop_propagation();
        assert!(!child.has_parent());
        assert_eq!(child.parent_prefix(), "");

        child.emit("e", ()).unwrap();
        assert_eq!(entries(&log), ["child"]);
        assert!(child.has_listeners("e"));
    }

    #[test]
    fn test_dropped_parent_ends_bubbling() {
        let parent: Arc<Emitter> = Arc::new(Emitter::new());
        let child: Emitter = Emitter::new();
        child.propagate(&parent, "").unwrap();
        drop(parent);

        let log = log();
        child.on("e", record(&log, "child"));
        child.emit("e", ()).unwrap();
        assert_eq!(entries(&log), ["child"]);
    }

    #[test]
    fn test_propagate_to_self_is_rejected() {
        let em: Arc<Emitter> = Arc::new(Emitter::new());
        let err = em.propagate(&em, "loop-").unwrap_err();
        assert_eq!(err.as_label(), "invalid_argument");
        assert!(!em.has_parent());
    }

    #[test]
    fn test_propagation_cycle_is_rejected() {
        let a: Arc<Emitter> = Arc::new(Emitter::new());
        let b: Arc<Emitter> = Arc::new(Emitter::new());
        let c: Arc<Emitter> = Arc::new(Emitter::new());
        b.propagate(&a, "b.").unwrap();
        c.propagate(&b, "c.").unwrap();

        let err = a.propagate(&c, "a.").unwrap_err();
        assert!(matches!(err, EmitterError::InvalidArgument { .. }));
        assert!(!a.has_parent());

        // Replacing a parent is still allowed.
        c.propagate(&a, "c2.").unwrap();
        assert_eq!(c.parent_prefix(), "c2.");
    }

    #[test]
    fn test_concurrent_mutual_propagate_links_one_way() {
        let a: Arc<Emitter> = Arc::new(Emitter::new());
        let b: Arc<Emitter> = Arc::new(Emitter::new());

        for _ in 0..200 {
            a.stop_propagation();
            b.stop_propagation();
            let start = Barrier::new(2);

            let (a_linked, b_linked) = thread::scope(|s| {
                let ta = s.spawn(|| {
                    start.wait();
                    a.propagate(&b, "a.").is_ok()
                });
                let tb = s.spawn(|| {
                    start.wait();
                    b.propagate(&a, "b.").is_ok()
                });
                (ta.join().unwrap(), tb.join().unwrap())
            });

            assert!(a_linked ^ b_linked, "exactly one propagate must win");
            assert_ne!(a.has_parent(), b.has_parent());
            a.emit("e", ()).unwrap();
            b.emit("e", ()).unwrap();
        }
    }

    #[test]
    fn test_failing_listener_aborts_pass() {
        let parent: Arc<Emitter> = Arc::new(Emitter::new());
        let em: Emitter = Emitter::new();
        em.propagate(&parent, "").unwrap();

        let log = log();
        em.on("e", record(&log, "before"))
            .on("e", Listener::new(|_em, _ev| Err("boom".into())))
            .on("e", record(&log, "after"))
            .on("*", record(&log, "wild"));
        parent.on("e", record(&log, "parent"));

        let err = em.emit("e", ()).unwrap_err();
        assert!(err.is_listener_failure());
        assert_eq!(err.as_message(), "listener for e failed: boom");
        assert_eq!(entries(&log), ["before"]);
    }

    #[test]
    fn test_parent_failure_reaches_child_caller() {
        let parent: Arc<Emitter> = Arc::new(Emitter::new());
        let child: Emitter = Emitter::new();
        child.propagate(&parent, "child-").unwrap();
        parent.on("child-e", Listener::new(|_em, _ev| Err("parent says no".into())));

        match child.emit("e", ()) {
            Err(EmitterError::Listener { event, .. }) => {
                assert_eq!(event, EventName::from("child-e"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_isolate_runs_everything() {
        let parent: Arc<Emitter> = Arc::new(Emitter::new());
        let em: Emitter = Emitter::builder()
            .with_failure_policy(FailurePolicy::Isolate)
            .with_parent(&parent, "")
            .build();

        let log = log();
        em.on("e", Listener::new(|_em, _ev| Err("boom".into())))
            .on("e", Listener::new(|_em, _ev| panic!("listener panic")))
            .on("e", record(&log, "after"))
            .on("*", record(&log, "wild"));
        parent.on("e", record(&log, "parent"));

        assert!(em.emit("e", ()).is_ok());
        assert_eq!(entries(&log), ["after", "wild", "parent"]);
    }

    #[test]
    fn test_max_listeners_only_warns() {
        let em: Emitter = Emitter::builder().with_max_listeners(1).build();
        let log = log();
        em.on("e", record(&log, "a")).on("e", record(&log, "b")).on("e", record(&log, "c"));

        assert_eq!(em.listener_count("e"), 3);
        em.emit("e", ()).unwrap();
        assert_eq!(entries(&log), ["a", "b", "c"]);
    }

    #[test]
    fn test_on_many_registers_each_pair() {
        let em: Emitter = Emitter::new();
        let log = log();
        em.on_many([("a", record(&log, "a")), ("b", record(&log, "b"))]);

        em.emit("b", ()).unwrap().emit("a", ()).unwrap();
        assert_eq!(entries(&log), ["b", "a"]);
    }

    #[test]
    fn test_remove_all_listeners() {
        let em: Emitter = Emitter::new();
        let log = log();
        em.on("a", record(&log, "a")).on("b", record(&log, "b"));

        em.remove_all_listeners(Some(EventName::from("a")));
        assert!(!em.has_listeners("a"));
        assert!(em.has_listeners("b"));

        em.remove_all_listeners(None);
        assert!(em.event_names().is_empty());
    }

    #[test]
    fn test_emit_without_listeners_is_ok() {
        let em: Emitter<u8> = Emitter::new();
        assert!(em.emit("nothing", 7).is_ok());
    }
}
