//! Instance configurator.
//!
//! # Responsibility
//! - Validate that every required property resolves to a non-null value.
//! - Copy recognized spec entries onto the target, ignore the rest.
//! - Disarm after the first successful run.
//!
//! # Invariants
//! - Validation completes before any assignment, so a failure never leaves
//!   a partially configured target.
//! - The spec and the contract are never mutated.
//! - A failed run does not disarm; the next call validates again.

use crate::configure::error::ConfigureError;
use crate::contract::builder::PropertyContract;
use log::{debug, warn};
use serde_json::{Map, Value};

/// Caller-supplied mapping from property name to value.
pub type ConfigurationSpec = Map<String, Value>;

/// Result of one `configure` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigureOutcome {
    /// Validation passed and `assigned` recognized fields were copied.
    Applied { assigned: usize, ignored: usize },
    /// The target was already configured; nothing was checked or written.
    AlreadyConfigured,
}

/// Capability for objects whose fields are populated from a contract.
///
/// Implementors provide the contract and field access; the provided
/// [`Configurable::configure`] runs the shared algorithm.
pub trait Configurable {
    fn contract(&self) -> &PropertyContract;

    /// Display name used in errors, `None` for anonymous types.
    fn type_name(&self) -> Option<&str>;

    /// Current value of one field, `None` when the field was never set.
    fn property(&self, name: &str) -> Option<&Value>;

    fn assign(&mut self, name: &str, value: Value);

    fn is_configured(&self) -> bool;

    /// Marks the target as configured so later calls become no-ops.
    fn disarm(&mut self);

    fn configure(
        &mut self,
        spec: Option<&ConfigurationSpec>,
    ) -> Result<ConfigureOutcome, ConfigureError> {
        configure(self, spec)
    }
}

/// Runs the configuration algorithm against `target`.
pub fn configure<C>(
    target: &mut C,
    spec: Option<&ConfigurationSpec>,
) -> Result<ConfigureOutcome, ConfigureError>
where
    C: Configurable + ?Sized,
{
    if target.is_configured() {
        debug!(
            "event=configure_skipped module=configure type={} reason=already_configured",
            display_name(target.type_name())
        );
        return Ok(ConfigureOutcome::AlreadyConfigured);
    }

    let empty = ConfigurationSpec::new();
    let spec = spec.unwrap_or(&empty);

    let contract = target.contract();
    let missing = contract
        .required()
        .iter()
        .filter(|name| !spec.contains_key(name.as_str()))
        .find(|name| is_unset(target.property(name)));
    if let Some(name) = missing {
        warn!(
            "event=configure module=configure status=error type={} missing={}",
            display_name(target.type_name()),
            name
        );
        return Err(ConfigureError::missing_required(
            target.type_name(),
            name.clone(),
        ));
    }

    let assignments: Vec<(String, Value)> = spec
        .iter()
        .filter(|(key, _)| contract.contains(key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    let assigned = assignments.len();
    let ignored = spec.len() - assigned;

    for (name, value) in assignments {
        target.assign(&name, value);
    }
    target.disarm();

    debug!(
        "event=configure module=configure status=ok type={} assigned={} ignored={}",
        display_name(target.type_name()),
        assigned,
        ignored
    );
    Ok(ConfigureOutcome::Applied { assigned, ignored })
}

fn is_unset(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Null))
}

fn display_name(name: Option<&str>) -> &str {
    name.unwrap_or(crate::configure::error::ANONYMOUS_TYPE_NAME)
}

#[cfg(test)]
mod tests {
    use super::{configure, Configurable, ConfigurationSpec, ConfigureOutcome};
    use crate::configure::error::ConfigureError;
    use crate::contract::builder::PropertyContract;
    use serde_json::{json, Map, Value};

    /// Minimal hand-written implementor, independent of `Instance`.
    struct Widget {
        contract: PropertyContract,
        fields: Map<String, Value>,
        configured: bool,
    }

    impl Widget {
        fn new(declaration: &[&str]) -> Self {
            Self {
                contract: PropertyContract::build(declaration),
                fields: Map::new(),
                configured: false,
            }
        }
    }

    impl Configurable for Widget {
        fn contract(&self) -> &PropertyContract {
            &self.contract
        }

        fn type_name(&self) -> Option<&str> {
            Some("Widget")
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

    fn spec(value: Value) -> ConfigurationSpec {
        match value {
            Value::Object(map) => map,
            other => panic!("spec fixture must be an object, got {other}"),
        }
    }

    #[test]
    fn fails_when_required_property_is_missing() {
        let mut widget = Widget::new(&["!type"]);
        let err = widget
            .configure(Some(&spec(json!({}))))
            .expect_err("missing required must fail");
        assert_eq!(
            err,
            ConfigureError::MissingRequiredProperty {
                type_name: "Widget".to_string(),
                property: "type".to_string(),
            }
        );
        assert!(!widget.is_configured());
    }

    #[test]
    fn null_default_does_not_satisfy_required_property() {
        let mut widget = Widget::new(&["!type"]);
        widget.assign("type", Value::Null);
        let err = widget.configure(None).expect_err("null default must fail");
        assert_eq!(err.property(), "type");
    }

    #[test]
    fn existing_value_satisfies_required_property() {
        let mut widget = Widget::new(&["!type"]);
        widget.assign("type", json!("x"));
        let outcome = widget.configure(None).expect("default satisfies required");
        assert_eq!(
            outcome,
            ConfigureOutcome::Applied {
                assigned: 0,
                ignored: 0
            }
        );
        assert_eq!(widget.property("type"), Some(&json!("x")));
    }

    #[test]
    fn copies_recognized_and_ignores_unknown_keys() {
        let mut widget = Widget::new(&["a"]);
        let outcome = widget
            .configure(Some(&spec(json!({"a": 1, "z": 99}))))
            .expect("configure");
        assert_eq!(
            outcome,
            ConfigureOutcome::Applied {
                assigned: 1,
                ignored: 1
            }
        );
        assert_eq!(widget.property("a"), Some(&json!(1)));
        assert!(widget.property("z").is_none());
    }

    #[test]
    fn second_call_is_a_no_op() {
        let mut widget = Widget::new(&["!type", "label"]);
        widget
            .configure(Some(&spec(json!({"type": "t", "label": "first"}))))
            .expect("first configure");

        let outcome = configure(&mut widget, Some(&spec(json!({"label": "second"}))))
            .expect("second configure");
        assert_eq!(outcome, ConfigureOutcome::AlreadyConfigured);
        assert_eq!(widget.property("label"), Some(&json!("first")));
    }

    #[test]
    fn failed_run_assigns_nothing() {
        let mut widget = Widget::new(&["!a", "!b"]);
        let err = widget
            .configure(Some(&spec(json!({"a": 1}))))
            .expect_err("b is missing");
        assert_eq!(err.property(), "b");
        assert!(widget.property("a").is_none());
    }
}
