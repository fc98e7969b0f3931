//! Named registry of configurable types.

use crate::configure::configurator::ConfigurationSpec;
use crate::configure::error::ConfigureError;
use crate::definition::TypeDefinition;
use crate::extension::kernel::ConfigurableType;
use crate::model::instance::Instance;
use log::info;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// In-process registry keyed by type display name.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    types: BTreeMap<String, ConfigurableType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Augments and registers a root type.
    pub fn augment(
        &mut self,
        definition: TypeDefinition,
    ) -> Result<ConfigurableType, RegistryError> {
        let name = self.vacant_name(&definition)?;
        let kind = ConfigurableType::augment(definition);
        self.types.insert(name, kind.clone());
        Ok(kind)
    }

    /// Extends a registered base and registers the derived type.
    pub fn extend(
        &mut self,
        base_name: &str,
        definition: TypeDefinition,
    ) -> Result<ConfigurableType, RegistryError> {
        let name = self.vacant_name(&definition)?;
        let base = self
            .types
            .get(base_name.trim())
            .ok_or_else(|| RegistryError::BaseNotFound {
                type_name: name.clone(),
                base_name: base_name.trim().to_string(),
            })?;
        let kind = base.extend(definition);
        self.types.insert(name, kind.clone());
        Ok(kind)
    }

    /// Registers a definition, extending its `extends` base when present.
    pub fn register(
        &mut self,
        definition: TypeDefinition,
    ) -> Result<ConfigurableType, RegistryError> {
        match definition.extends.clone() {
            Some(base_name) => self.extend(&base_name, definition),
            None => self.augment(definition),
        }
    }

    /// Registers definitions in order; stops at the first failure.
    pub fn register_all(
        &mut self,
        definitions: impl IntoIterator<Item = TypeDefinition>,
    ) -> Result<usize, RegistryError> {
        let mut count = 0;
        for definition in definitions {
            self.register(definition)?;
            count += 1;
        }
        info!(
            "event=types_registered module=extension status=ok count={} total={}",
            count,
            self.types.len()
        );
        Ok(count)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn get(&self, type_name: &str) -> Option<&ConfigurableType> {
        self.types.get(type_name.trim())
    }

    /// Returns sorted type names.
    pub fn type_names(&self) -> Vec<String> {
        self.types.keys().cloned().collect()
    }

    /// Constructs and configures an instance of a registered type.
    pub fn construct(
        &self,
        type_name: &str,
        spec: Option<&ConfigurationSpec>,
    ) -> Result<Instance, RegistryError> {
        let kind = self
            .get(type_name)
            .ok_or_else(|| RegistryError::TypeNotFound(type_name.trim().to_string()))?;
        Ok(kind.construct(spec)?)
    }

    fn vacant_name(&self, definition: &TypeDefinition) -> Result<String, RegistryError> {
        let name = match definition.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Err(RegistryError::AnonymousType),
        };
        if self.types.contains_key(name.as_str()) {
            return Err(RegistryError::DuplicateTypeName(name));
        }
        Ok(name)
    }
}

/// Registry registration/lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    AnonymousType,
    DuplicateTypeName(String),
    TypeNotFound(String),
    BaseNotFound { type_name: String, base_name: String },
    Configure(ConfigureError),
}

impl Display for RegistryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AnonymousType => write!(f, "anonymous types cannot be registered"),
            Self::DuplicateTypeName(value) => write!(f, "type already registered: {value}"),
            Self::TypeNotFound(value) => write!(f, "type not found: {value}"),
            Self::BaseNotFound {
                type_name,
                base_name,
            } => write!(f, "base type `{base_name}` for `{type_name}` is not registered"),
            Self::Configure(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RegistryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Configure(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ConfigureError> for RegistryError {
    fn from(value: ConfigureError) -> Self {
        Self::Configure(value)
    }
}
