//! Property contract algebra.
//!
//! # Responsibility
//! - Parse raw declarations (`!`-prefixed names are required).
//! - Build and merge canonical required/optional contracts.
//!
//! # Invariants
//! - Contracts are immutable once built.
//! - Declarations never fail to parse; malformed input degrades to empty.

pub mod builder;
pub mod declaration;
