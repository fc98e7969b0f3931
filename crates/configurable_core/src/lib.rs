//! Property contracts for configurable types.
//!
//! A type declares named properties (a leading `!` marks one required),
//! derived types inherit and extend that contract, and instances are
//! validated and populated from a configuration map exactly once.

pub mod configure;
pub mod contract;
pub mod definition;
pub mod extension;
pub mod logging;
pub mod model;

pub use configure::configurator::{configure, Configurable, ConfigurationSpec, ConfigureOutcome};
pub use configure::error::{ConfigureError, ANONYMOUS_TYPE_NAME};
pub use contract::builder::PropertyContract;
pub use contract::declaration::{RawDeclaration, REQUIRED_SENTINEL};
pub use definition::loader::{load_definitions, parse_definitions, DefinitionError};
pub use definition::TypeDefinition;
pub use extension::hook::{ExtendHook, ExtensionDraft};
pub use extension::kernel::ConfigurableType;
pub use extension::registry::{RegistryError, TypeRegistry};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::instance::{Instance, InstanceId};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
