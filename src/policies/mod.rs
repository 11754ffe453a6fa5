//! Dispatch policies.
//!
//! ## Contents
//! - [`FailurePolicy`] whether a failing listener aborts the pass or is isolated
//!
//! ## Defaults
//! - `FailurePolicy::Abort`: a listener error propagates out of `emit`.

mod failure;

pub use failure::FailurePolicy;
