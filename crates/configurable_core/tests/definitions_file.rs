use configurable_core::{load_definitions, DefinitionError, RegistryError, TypeRegistry};
use serde_json::json;
use std::io::Write;

const DEFINITIONS: &str = r#"{
  "types": [
    {"name": "Shape", "properties": ["label", "!kind"], "defaults": {"kind": "shape"}},
    {"name": "Circle", "extends": "Shape", "properties": {"required": ["radius"], "optional": ["fill"]}},
    {"name": "Ring", "extends": "Circle", "properties": ["!inner", 7]}
  ]
}"#;

fn write_definitions(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write definitions");
    file
}

#[test]
fn loads_file_and_builds_registry_chain() {
    let file = write_definitions(DEFINITIONS);
    let definitions = load_definitions(file.path()).expect("load definitions");

    let mut registry = TypeRegistry::new();
    let count = registry.register_all(definitions).expect("register");
    assert_eq!(count, 3);

    let ring = registry.get("Ring").expect("ring registered");
    assert_eq!(ring.contract().required(), ["kind", "radius", "inner"]);
    assert_eq!(ring.contract().optional(), ["label", "fill"]);
    assert_eq!(ring.base().map(|base| base.display_name()), Some("Circle"));

    let instance = registry
        .construct("Ring", json!({"radius": 3, "inner": 1, "label": "r"}).as_object())
        .expect("construct ring");
    assert_eq!(
        instance.to_json(),
        json!({"kind": "shape", "radius": 3, "inner": 1, "label": "r"})
    );
}

#[test]
fn missing_file_reports_io_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_definitions(&dir.path().join("absent.json")).expect_err("missing file");
    assert!(matches!(err, DefinitionError::Io { .. }));
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn out_of_order_definitions_fail_on_unknown_base() {
    let file = write_definitions(
        r#"{"types": [
            {"name": "Circle", "extends": "Shape"},
            {"name": "Shape"}
        ]}"#,
    );
    let definitions = load_definitions(file.path()).expect("load definitions");
    let mut registry = TypeRegistry::new();
    let err = registry
        .register_all(definitions)
        .expect_err("base must come first");
    assert!(matches!(err, RegistryError::BaseNotFound { .. }));
}
