//! Runtime objects built from configurable types.
//!
//! # Invariants
//! - Every instance keeps a handle to the type it was built from.
//! - Instance fields are owned values; nothing is shared between instances.

pub mod instance;
