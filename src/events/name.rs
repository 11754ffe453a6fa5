//! # Event keys.
//!
//! An [`EventName`] is either a human-readable string or an opaque [`Symbol`].
//! Symbols are process-unique and compare by identity, so two independently
//! created symbols never collide even if they carry the same description.
//!
//! ## Example
//! ```rust
//! use ripple::{EventName, Symbol};
//!
//! let login = EventName::from("login");
//! assert_eq!(login.as_str(), Some("login"));
//!
//! let a = Symbol::new("ready");
//! let b = Symbol::new("ready");
//! assert_ne!(EventName::from(a), EventName::from(b));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};

/// Global counter used to mint unique symbols.
static SYMBOL_SEQ: AtomicU64 = AtomicU64::new(1);

/// Opaque, identity-compared event key.
///
/// The description is informational only; equality and hashing use the id.
#[derive(Clone, Debug)]
pub struct Symbol {
    id: u64,
    description: Cow<'static, str>,
}

impl Symbol {
    /// Mints a new symbol distinct from every other symbol in the process.
    pub fn new(description: impl Into<Cow<'static, str>>) -> Self {
        Self {
            id: SYMBOL_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            description: description.into(),
        }
    }

    /// Returns the description given at creation.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl std::hash::Hash for Symbol {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Key under which listeners are registered.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventName {
    /// Plain string name, e.g. `"login"`.
    Name(Cow<'static, str>),
    /// Opaque symbol key.
    Symbol(Symbol),
}

impl EventName {
    /// Returns the string form for [`EventName::Name`], `None` for symbols.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EventName::Name(name) => Some(name),
            EventName::Symbol(_) => None,
        }
    }

    /// Returns the name used when bubbling to a parent with `prefix`.
    ///
    /// String names get the prefix prepended; symbols bubble unchanged.
    pub fn prefixed(&self, prefix: &str) -> EventName {
        match self {
            EventName::Name(name) if !prefix.is_empty() => {
                EventName::Name(Cow::Owned(format!("{prefix}{name}")))
            }
            other => other.clone(),
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventName::Name(name) => f.write_str(name),
            EventName::Symbol(sym) => write!(f, "Symbol({})", sym.description()),
        }
    }
}

impl From<&'static str> for EventName {
    fn from(name: &'static str) -> Self {
        EventName::Name(Cow::Borrowed(name))
    }
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        EventName::Name(Cow::Owned(name))
    }
}

impl From<Cow<'static, str>> for EventName {
    fn from(name: Cow<'static, str>) -> Self {
        EventName::Name(name)
    }
}

impl From<Symbol> for EventName {
    fn from(sym: Symbol) -> Self {
        EventName::Symbol(sym)
    }
}

impl From<&Symbol> for EventName {
    fn from(sym: &Symbol) -> Self {
        EventName::Symbol(sym.clone())
    }
}

impl From<&EventName> for EventName {
    fn from(name: &EventName) -> Self {
        name.clone()
    }
}
