//! Type definitions consumed by augment/extend.
//!
//! # Responsibility
//! - Describe one configurable type: display name, optional base, raw
//!   property declaration, constructor defaults and extension callbacks.
//! - Load definition sets from JSON files.
//!
//! # Invariants
//! - Missing `properties` means an empty declaration.
//! - Callbacks are code-only and never (de)serialized.

pub mod loader;

use crate::contract::declaration::RawDeclaration;
use crate::extension::hook::{ExtendHook, ExtensionDraft};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Declarative input for augmenting or extending a type.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct TypeDefinition {
    /// Display name; `None` for anonymous types.
    #[serde(default)]
    pub name: Option<String>,
    /// Registry name of the base type, used by `TypeRegistry::register_all`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,
    /// Raw declaration, `!`-prefixed names are required.
    #[serde(default)]
    pub properties: RawDeclaration,
    /// Field values every new instance starts with, before configuration.
    #[serde(default)]
    pub defaults: Map<String, Value>,
    #[serde(skip)]
    pub(crate) hooks: Vec<ExtendHook>,
}

impl TypeDefinition {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_properties<I, S>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties = entries.into_iter().collect();
        self
    }

    pub fn with_default(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(name.into(), value.into());
        self
    }

    pub fn extending(mut self, base: impl Into<String>) -> Self {
        self.extends = Some(base.into());
        self
    }

    /// Adds a callback that runs whenever the resulting type is extended,
    /// before the derived contract is merged.
    pub fn on_extended<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut ExtensionDraft<'_>) + Send + Sync + 'static,
    {
        self.hooks.push(Arc::new(hook));
        self
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }
}

impl Debug for TypeDefinition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TypeDefinition")
            .field("name", &self.name)
            .field("extends", &self.extends)
            .field("properties", &self.properties)
            .field("defaults", &self.defaults)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
