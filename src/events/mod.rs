//! Event keys and the dispatch view.
//!
//! ## Contents
//! - [`EventName`], [`Symbol`] keys listeners are registered under
//! - [`Event`] what a listener receives: fired name plus borrowed arguments

mod event;
mod name;

pub use event::Event;
pub use name::{EventName, Symbol};
