//! # Listener registry.
//!
//! Maps each [`EventName`] to its listeners in insertion order.
//!
//! ## Rules
//! - A name maps to a non-empty `Vec`; the slot is deleted when its last entry goes.
//! - Removal keeps the relative order of the remaining entries.
//! - Duplicates are allowed; `remove` drops every entry matching the listener.
//! - Entries are shared (`Arc`) so dispatch can snapshot a slot and release the lock.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use crate::events::EventName;
use crate::listeners::Listener;

/// One registration of a listener.
pub(crate) struct Entry<A> {
    listener: Listener<A>,
    /// `Some` for `once` registrations; flips to `true` on the first claim.
    fired: Option<AtomicBool>,
}

impl<A> Entry<A> {
    pub(crate) fn persistent(listener: Listener<A>) -> Arc<Self> {
        Arc::new(Self {
            listener,
            fired: None,
        })
    }

    pub(crate) fn once(listener: Listener<A>) -> Arc<Self> {
        Arc::new(Self {
            listener,
            fired: Some(AtomicBool::new(false)),
        })
    }

    pub(crate) fn listener(&self) -> &Listener<A> {
        &self.listener
    }

    pub(crate) fn is_once(&self) -> bool {
        self.fired.is_some()
    }

    /// Returns `true` if the entry may run now.
    ///
    /// Persistent entries always may; a `once` entry only the first time, even
    /// when the same entry sits in several in-flight snapshots.
    pub(crate) fn claim(&self) -> bool {
        match &self.fired {
            None => true,
            Some(fired) => !fired.swap(true, AtomicOrdering::AcqRel),
        }
    }
}

/// Event name → ordered listener entries.
pub(crate) struct Registry<A> {
    slots: HashMap<EventName, Vec<Arc<Entry<A>>>>,
    /// Names that already triggered the max-listeners warning.
    warned: HashSet<EventName>,
}

impl<A> Registry<A> {
    pub(crate) fn new() -> Self {
        Self {
            slots: HashMap::new(),
            warned: HashSet::new(),
        }
    }

    /// Appends an entry and returns the new count for `name`.
    pub(crate) fn add(&mut self, name: EventName, entry: Arc<Entry<A>>) -> usize {
        let slot = self.slots.entry(name).or_default();
        slot.push(entry);
        slot.len()
    }

    /// Removes every entry whose listener is `listener`. Returns how many went.
    pub(crate) fn remove(&mut self, name: &EventName, listener: &Listener<A>) -> usize {
        self.retain(name, |entry| !entry.listener.same(listener))
    }

    /// Removes exactly this entry (used by `once` self-removal).
    pub(crate) fn remove_entry(&mut self, name: &EventName, entry: &Arc<Entry<A>>) -> bool {
        self.retain(name, |e| !Arc::ptr_eq(e, entry)) > 0
    }

    fn retain<F>(&mut self, name: &EventName, keep: F) -> usize
    where
        F: FnMut(&Arc<Entry<A>>) -> bool,
    {
        let Some(slot) = self.slots.get_mut(name) else {
            return 0;
        };
        let before = slot.len();
        slot.retain(keep);
        let removed = before - slot.len();
        if slot.is_empty() {
            self.drop_slot(name);
        }
        removed
    }

    /// Deletes the slot for `name`. Returns how many entries it held.
    pub(crate) fn clear(&mut self, name: &EventName) -> usize {
        self.warned.remove(name);
        self.slots.remove(name).map_or(0, |slot| slot.len())
    }

    pub(crate) fn clear_all(&mut self) {
        self.slots.clear();
        self.warned.clear();
    }

    fn drop_slot(&mut self, name: &EventName) {
        self.slots.remove(name);
        self.warned.remove(name);
    }

    /// Shallow copy of the entries for `name`, or `None` if there are none.
    pub(crate) fn snapshot(&self, name: &EventName) -> Option<Vec<Arc<Entry<A>>>> {
        self.slots.get(name).cloned()
    }

    pub(crate) fn count(&self, name: &EventName) -> usize {
        self.slots.get(name).map_or(0, Vec::len)
    }

    pub(crate) fn contains(&self, name: &EventName) -> bool {
        self.slots.contains_key(name)
    }

    pub(crate) fn names(&self) -> Vec<EventName> {
        self.slots.keys().cloned().collect()
    }

    pub(crate) fn total(&self) -> usize {
        self.slots.values().map(Vec::len).sum()
    }

    /// Records that `name` overflowed. Returns `true` only the first time.
    pub(crate) fn mark_warned(&mut self, name: &EventName) -> bool {
        self.warned.insert(name.clone())
    }
}
