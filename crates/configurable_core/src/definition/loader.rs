//! JSON definition files.
//!
//! File shape: `{"types": [<TypeDefinition>, ...]}`. Order matters: a type
//! must appear after the base it `extends`.

use crate::definition::TypeDefinition;
use log::info;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

#[derive(Debug, Default, Deserialize)]
struct DefinitionFile {
    #[serde(default)]
    types: Vec<TypeDefinition>,
}

/// Definition file read/parse errors.
#[derive(Debug)]
pub enum DefinitionError {
    Io { path: PathBuf, source: std::io::Error },
    Parse(serde_json::Error),
}

impl Display for DefinitionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read definitions `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid definitions: {err}"),
        }
    }
}

impl Error for DefinitionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DefinitionError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Parses a definition set from JSON text.
pub fn parse_definitions(json: &str) -> Result<Vec<TypeDefinition>, DefinitionError> {
    let file: DefinitionFile = serde_json::from_str(json)?;
    Ok(file.types)
}

/// Reads and parses a definition file.
pub fn load_definitions(path: &Path) -> Result<Vec<TypeDefinition>, DefinitionError> {
    let raw = std::fs::read_to_string(path).map_err(|source| DefinitionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let definitions = parse_definitions(&raw)?;
    info!(
        "event=definitions_loaded module=definition status=ok path={} types={}",
        path.display(),
        definitions.len()
    );
    Ok(definitions)
}

#[cfg(test)]
mod tests {
    use super::{parse_definitions, DefinitionError};

    #[test]
    fn parses_types_in_file_order() {
        let definitions = parse_definitions(
            r#"{"types": [
                {"name": "Shape", "properties": ["!kind", "label"]},
                {"name": "Circle", "extends": "Shape", "properties": {"required": ["radius"]}}
            ]}"#,
        )
        .expect("definitions");
        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions[0].name.as_deref(), Some("Shape"));
        assert_eq!(definitions[1].extends.as_deref(), Some("Shape"));
        assert_eq!(definitions[1].properties.entries(), ["!radius"]);
    }

    #[test]
    fn empty_object_has_no_types() {
        assert!(parse_definitions("{}").expect("empty file").is_empty());
    }

    #[test]
    fn rejects_invalid_json() {
        let err = parse_definitions("{types:").expect_err("invalid json");
        assert!(matches!(err, DefinitionError::Parse(_)));
        assert!(err.to_string().starts_with("invalid definitions"));
    }
}
