//! Author callbacks fired when a configurable type is extended.

use crate::contract::builder::PropertyContract;
use crate::contract::declaration::RawDeclaration;
use crate::definition::TypeDefinition;
use crate::extension::kernel::ConfigurableType;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Callback invoked with the derived type's draft before contract merge.
pub type ExtendHook = Arc<dyn Fn(&mut ExtensionDraft<'_>) + Send + Sync>;

/// Pre-merge view of a derivation in progress.
///
/// The base contract is read-only; the derived declaration and defaults can
/// still be edited and the edits flow into the merge.
pub struct ExtensionDraft<'a> {
    base: &'a ConfigurableType,
    definition: &'a mut TypeDefinition,
}

impl<'a> ExtensionDraft<'a> {
    pub(crate) fn new(base: &'a ConfigurableType, definition: &'a mut TypeDefinition) -> Self {
        Self { base, definition }
    }

    pub fn base(&self) -> &ConfigurableType {
        self.base
    }

    /// Base contract as it was before this derivation.
    pub fn base_contract(&self) -> &PropertyContract {
        self.base.contract()
    }

    /// Display name of the derived type.
    pub fn name(&self) -> Option<&str> {
        self.definition.name.as_deref()
    }

    /// Derived type's own raw declaration, not yet merged.
    pub fn declaration(&self) -> &RawDeclaration {
        &self.definition.properties
    }

    pub fn declaration_mut(&mut self) -> &mut RawDeclaration {
        &mut self.definition.properties
    }

    pub fn defaults_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.definition.defaults
    }
}
