//! Raw property declarations as written by type authors.
//!
//! Two accepted shapes:
//! - a string list where a leading `!` marks a required name:
//!   `["!type", "label"]`
//! - an explicit split: `{"required": ["type"], "optional": ["label"]}`
//!
//! Malformed input degrades to an empty (or partial) declaration instead of
//! failing; non-string entries are skipped.

use log::warn;
use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Leading character marking a declared name as required.
pub const REQUIRED_SENTINEL: char = '!';

/// Ordered raw declaration entries, sentinel still attached.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDeclaration {
    entries: Vec<String>,
}

impl RawDeclaration {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    /// Encodes an explicit required/optional split as sentinel entries.
    pub fn from_parts<R, O>(required: &[R], optional: &[O]) -> Self
    where
        R: AsRef<str>,
        O: AsRef<str>,
    {
        let entries = required
            .iter()
            .map(|name| format!("{REQUIRED_SENTINEL}{}", name.as_ref()))
            .chain(optional.iter().map(|name| name.as_ref().to_string()))
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Appends one raw entry (sentinel included when required).
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
    }

    /// Appends a required name, adding the sentinel.
    pub fn push_required(&mut self, name: impl AsRef<str>) {
        self.entries
            .push(format!("{REQUIRED_SENTINEL}{}", name.as_ref()));
    }

    /// Interprets an arbitrary JSON value as a declaration.
    pub fn from_json_lenient(value: &Value) -> Self {
        match value {
            Value::Null => Self::default(),
            Value::Array(items) => Self::new(string_entries(items, "properties")),
            Value::Object(map) => {
                let required = match map.get("required") {
                    Some(Value::Array(items)) => string_entries(items, "required"),
                    Some(Value::Null) | None => vec![],
                    Some(_) => {
                        warn!("event=declaration_degraded module=contract field=required reason=not_a_list");
                        vec![]
                    }
                };
                let optional = match map.get("optional") {
                    Some(Value::Array(items)) => string_entries(items, "optional"),
                    Some(Value::Null) | None => vec![],
                    Some(_) => {
                        warn!("event=declaration_degraded module=contract field=optional reason=not_a_list");
                        vec![]
                    }
                };
                Self::from_parts(&required, &optional)
            }
            _ => {
                warn!("event=declaration_degraded module=contract field=properties reason=unsupported_shape");
                Self::default()
            }
        }
    }
}

fn string_entries(items: &[Value], field: &'static str) -> Vec<String> {
    let mut skipped = 0usize;
    let entries = items
        .iter()
        .filter_map(|item| match item {
            Value::String(value) => Some(value.clone()),
            _ => {
                skipped += 1;
                None
            }
        })
        .collect();
    if skipped > 0 {
        warn!(
            "event=declaration_degraded module=contract field={} reason=non_string_entries skipped={}",
            field, skipped
        );
    }
    entries
}

impl<S: Into<String>> From<Vec<S>> for RawDeclaration {
    fn from(value: Vec<S>) -> Self {
        value.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for RawDeclaration {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}

impl Serialize for RawDeclaration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for RawDeclaration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(Self::from_json_lenient(&value))
    }
}
