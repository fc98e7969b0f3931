//! Augment/extend wiring.
//!
//! This module turns definitions into configurable types, propagates property
//! contracts along extension chains, and keeps a named type registry.

pub mod hook;
pub mod kernel;
pub mod registry;
