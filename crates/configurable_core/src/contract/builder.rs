//! Property-contract builder.
//!
//! # Responsibility
//! - Normalize a raw declaration into a canonical required/optional contract.
//! - Merge a base contract with a derived declaration (base first).
//!
//! # Invariants
//! - `required` and `optional` partition `names` exactly.
//! - Required names always precede optional names in `names`.
//! - Building never fails; an empty declaration yields an empty contract.

use crate::contract::declaration::{RawDeclaration, REQUIRED_SENTINEL};
use serde::Serialize;
use std::collections::BTreeSet;
use std::ops::Deref;

/// Canonical, immutable property contract of one configurable type.
///
/// Dereferences to the ordered name list, so callers that only care about
/// "which properties exist" can treat it as `&[String]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PropertyContract {
    names: Vec<String>,
    required: Vec<String>,
    optional: Vec<String>,
}

impl PropertyContract {
    /// Creates an empty contract.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a contract from raw declaration entries.
    ///
    /// Entries starting with `!` are required (one sentinel is stripped), all
    /// others are optional. Relative order inside each partition is kept and
    /// a name collapses to its first occurrence. A name declared required
    /// anywhere is required, even if it also appears without the sentinel.
    pub fn build<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut required = Vec::new();
        let mut optional = Vec::new();
        let mut required_seen = BTreeSet::new();

        for entry in entries {
            let entry = entry.as_ref();
            match entry.strip_prefix(REQUIRED_SENTINEL) {
                Some(name) => {
                    if required_seen.insert(name.to_string()) {
                        required.push(name.to_string());
                    }
                }
                None => optional.push(entry.to_string()),
            }
        }

        let mut optional_seen = BTreeSet::new();
        optional.retain(|name| !required_seen.contains(name) && optional_seen.insert(name.clone()));

        let names = required.iter().chain(optional.iter()).cloned().collect();
        Self {
            names,
            required,
            optional,
        }
    }

    /// Builds a contract from a parsed declaration.
    pub fn from_declaration(declaration: &RawDeclaration) -> Self {
        Self::build(declaration.entries())
    }

    /// Merges this (base) contract with a derived type's raw declaration.
    ///
    /// Base properties come first, then the derived entries, and the
    /// concatenation is re-partitioned by [`PropertyContract::build`].
    pub fn merge(&self, derived: &RawDeclaration) -> Self {
        let base = self.to_declaration();
        Self::build(base.entries().iter().chain(derived.entries()))
    }

    /// Re-encodes this contract as a raw declaration.
    ///
    /// Required names get their sentinel back, so building the result yields
    /// an equal contract.
    pub fn to_declaration(&self) -> RawDeclaration {
        RawDeclaration::from_parts(&self.required, &self.optional)
    }

    /// All declared names, required first.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn optional(&self) -> &[String] {
        &self.optional
    }

    /// Returns whether `name` is a recognized property.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|candidate| candidate == name)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.iter().any(|candidate| candidate == name)
    }

    pub fn is_optional(&self, name: &str) -> bool {
        self.optional.iter().any(|candidate| candidate == name)
    }
}

impl Deref for PropertyContract {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.names
    }
}

impl AsRef<[String]> for PropertyContract {
    fn as_ref(&self) -> &[String] {
        &self.names
    }
}

impl From<&RawDeclaration> for PropertyContract {
    fn from(value: &RawDeclaration) -> Self {
        Self::from_declaration(value)
    }
}

impl<'a> IntoIterator for &'a PropertyContract {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::PropertyContract;
    use crate::contract::declaration::RawDeclaration;

    #[test]
    fn empty_declaration_builds_empty_contract() {
        let contract = PropertyContract::build(Vec::<String>::new());
        assert!(contract.is_empty());
        assert!(contract.required().is_empty());
        assert!(contract.optional().is_empty());
        assert_eq!(contract, PropertyContract::empty());
    }

    #[test]
    fn required_names_move_ahead_of_optional_names() {
        let contract = PropertyContract::build(["a", "!b", "c"]);
        assert_eq!(contract.names(), ["b", "a", "c"]);
        assert_eq!(contract.required(), ["b"]);
        assert_eq!(contract.optional(), ["a", "c"]);
    }

    #[test]
    fn keeps_relative_order_inside_each_partition() {
        let contract = PropertyContract::build(["z", "!y", "x", "!w"]);
        assert_eq!(contract.required(), ["y", "w"]);
        assert_eq!(contract.optional(), ["z", "x"]);
        assert_eq!(contract.names(), ["y", "w", "z", "x"]);
    }

    #[test]
    fn strips_only_one_sentinel() {
        let contract = PropertyContract::build(["!!loud"]);
        assert_eq!(contract.required(), ["!loud"]);
    }

    #[test]
    fn duplicates_collapse_to_first_occurrence() {
        let contract = PropertyContract::build(["a", "b", "a", "!c", "!c"]);
        assert_eq!(contract.names(), ["c", "a", "b"]);
    }

    #[test]
    fn required_marking_wins_over_plain_redeclaration() {
        let contract = PropertyContract::build(["!type", "type", "label"]);
        assert_eq!(contract.required(), ["type"]);
        assert_eq!(contract.optional(), ["label"]);

        let contract = PropertyContract::build(["type", "label", "!type"]);
        assert_eq!(contract.required(), ["type"]);
        assert_eq!(contract.optional(), ["label"]);
        assert_eq!(contract.names(), ["type", "label"]);
    }

    #[test]
    fn dereferences_to_name_list() {
        let contract = PropertyContract::build(["a", "!b"]);
        assert_eq!(contract.len(), 2);
        assert_eq!(contract[0], "b");
        let collected: Vec<&String> = (&contract).into_iter().collect();
        assert_eq!(collected, ["b", "a"]);
        assert!(contract.contains("a"));
        assert!(!contract.contains("z"));
        assert!(contract.is_required("b"));
        assert!(contract.is_optional("a"));
    }

    #[test]
    fn declaration_round_trip_preserves_contract() {
        let contract = PropertyContract::build(["a", "!b", "c", "!d"]);
        let rebuilt = PropertyContract::from_declaration(&contract.to_declaration());
        assert_eq!(rebuilt, contract);
    }

    #[test]
    fn merge_puts_base_properties_first() {
        let base = PropertyContract::build(["a", "!b"]);
        let merged = base.merge(&RawDeclaration::from(vec!["c", "!d"]));
        assert_eq!(merged.required(), ["b", "d"]);
        assert_eq!(merged.optional(), ["a", "c"]);
        assert_eq!(merged.names(), ["b", "d", "a", "c"]);
    }

    #[test]
    fn merge_with_empty_declaration_keeps_base() {
        let base = PropertyContract::build(["x", "!y"]);
        assert_eq!(base.merge(&RawDeclaration::default()), base);
    }
}
