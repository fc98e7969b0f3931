//! Augment/extend kernel for configurable types.
//!
//! `augment` builds a type's first contract from its own declaration.
//! `extend` derives a subtype: base callbacks run on the pre-merge draft,
//! then the base contract and the derived declaration are merged (base
//! first) into the subtype's contract. Every derived type can be extended
//! again, so contracts accrete transitively along the chain.

use crate::configure::configurator::{Configurable, ConfigurationSpec};
use crate::configure::error::{ConfigureError, ANONYMOUS_TYPE_NAME};
use crate::contract::builder::PropertyContract;
use crate::definition::TypeDefinition;
use crate::extension::hook::{ExtendHook, ExtensionDraft};
use crate::model::instance::Instance;
use log::{debug, info};
use serde_json::{Map, Value};
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

/// Shared, immutable handle to one augmented or derived type.
#[derive(Clone)]
pub struct ConfigurableType {
    inner: Arc<TypeInner>,
}

struct TypeInner {
    name: Option<String>,
    contract: PropertyContract,
    defaults: Map<String, Value>,
    hooks: Vec<ExtendHook>,
    base: Option<ConfigurableType>,
}

impl ConfigurableType {
    /// Opts a type into the facility and builds its initial contract.
    pub fn augment(definition: TypeDefinition) -> Self {
        let contract = PropertyContract::from_declaration(&definition.properties);
        info!(
            "event=type_augmented module=extension type={} required={} optional={}",
            definition.name.as_deref().unwrap_or(ANONYMOUS_TYPE_NAME),
            contract.required().len(),
            contract.optional().len()
        );
        Self {
            inner: Arc::new(TypeInner {
                name: definition.name,
                contract,
                defaults: definition.defaults,
                hooks: definition.hooks,
                base: None,
            }),
        }
    }

    /// Derives a subtype whose contract is this contract merged with the
    /// derived declaration.
    pub fn extend(&self, mut definition: TypeDefinition) -> Self {
        {
            let mut draft = ExtensionDraft::new(self, &mut definition);
            for hook in &self.inner.hooks {
                hook(&mut draft);
            }
        }
        if !self.inner.hooks.is_empty() {
            debug!(
                "event=extend_hooks module=extension base={} hooks={}",
                self.display_name(),
                self.inner.hooks.len()
            );
        }

        let contract = self.inner.contract.merge(&definition.properties);

        let mut defaults = self.inner.defaults.clone();
        for (name, value) in definition.defaults {
            defaults.insert(name, value);
        }

        let mut hooks = self.inner.hooks.clone();
        hooks.extend(definition.hooks);

        info!(
            "event=type_extended module=extension base={} type={} required={} optional={}",
            self.display_name(),
            definition.name.as_deref().unwrap_or(ANONYMOUS_TYPE_NAME),
            contract.required().len(),
            contract.optional().len()
        );
        Self {
            inner: Arc::new(TypeInner {
                name: definition.name,
                contract,
                defaults,
                hooks,
                base: Some(self.clone()),
            }),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.inner.name.as_deref()
    }

    /// Name for messages; anonymous types get a generic label.
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or(ANONYMOUS_TYPE_NAME)
    }

    pub fn contract(&self) -> &PropertyContract {
        &self.inner.contract
    }

    /// Field values new instances start with.
    pub fn defaults(&self) -> &Map<String, Value> {
        &self.inner.defaults
    }

    pub fn base(&self) -> Option<&ConfigurableType> {
        self.inner.base.as_ref()
    }

    /// Number of extension callbacks that fire when this type is extended.
    pub fn hook_count(&self) -> usize {
        self.inner.hooks.len()
    }

    /// Returns whether both handles point at the same type.
    pub fn same_type(&self, other: &ConfigurableType) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Returns whether `ancestor` appears anywhere up this type's base chain.
    pub fn is_derived_from(&self, ancestor: &ConfigurableType) -> bool {
        let mut current = self.base();
        while let Some(candidate) = current {
            if candidate.same_type(ancestor) {
                return true;
            }
            current = candidate.base();
        }
        false
    }

    /// Creates an unconfigured instance holding the type's defaults.
    pub fn instantiate(&self) -> Instance {
        Instance::new(self.clone())
    }

    /// Creates an instance and configures it from `spec`.
    pub fn construct(&self, spec: Option<&ConfigurationSpec>) -> Result<Instance, ConfigureError> {
        let mut instance = self.instantiate();
        instance.configure(spec)?;
        Ok(instance)
    }
}

impl Debug for ConfigurableType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfigurableType")
            .field("name", &self.inner.name)
            .field("contract", &self.inner.contract)
            .field("base", &self.base().map(ConfigurableType::display_name))
            .field("hooks", &self.inner.hooks.len())
            .finish()
    }
}
