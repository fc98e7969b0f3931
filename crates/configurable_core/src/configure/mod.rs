//! Instance configuration.
//!
//! # Responsibility
//! - Expose the `Configurable` capability and the one-shot configure algorithm.
//! - Define the single configuration error kind.
//!
//! # Invariants
//! - The only failure is an unresolved required property.
//! - Unrecognized spec keys are dropped silently.

pub mod configurator;
pub mod error;
