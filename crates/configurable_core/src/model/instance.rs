//! Instance of a configurable type.
//!
//! # Responsibility
//! - Own the field values of one object built from a `ConfigurableType`.
//! - Implement the `Configurable` capability over those fields.
//!
//! # Invariants
//! - Fields start as a copy of the type defaults.
//! - Configuration succeeds at most once; later calls are no-ops.
//! - `id` is stable for the instance lifetime and only used for diagnostics.

use crate::configure::configurator::Configurable;
use crate::contract::builder::PropertyContract;
use crate::extension::kernel::ConfigurableType;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Stable diagnostic identifier for one instance.
pub type InstanceId = Uuid;

/// One object whose fields follow its type's property contract.
#[derive(Debug, Clone)]
pub struct Instance {
    id: InstanceId,
    kind: ConfigurableType,
    fields: Map<String, Value>,
    configured: bool,
}

impl Instance {
    pub(crate) fn new(kind: ConfigurableType) -> Self {
        let fields = kind.defaults().clone();
        Self {
            id: Uuid::new_v4(),
            kind,
            fields,
            configured: false,
        }
    }

    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Type this instance was built from.
    pub fn kind(&self) -> &ConfigurableType {
        &self.kind
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Sets a field directly, the way a constructor body would before
    /// configuration runs. Not restricted to contract names.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Snapshot of all fields as a JSON object.
    pub fn to_json(&self) -> Value {
        Value::Object(self.fields.clone())
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }
}

impl Configurable for Instance {
    fn contract(&self) -> &PropertyContract {
        self.kind.contract()
    }

    fn type_name(&self) -> Option<&str> {
        self.kind.name()
    }

    fn property(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    fn assign(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn disarm(&mut self) {
        self.configured = true;
    }
}
