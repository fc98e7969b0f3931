use std::error::Error;
use std::fmt::{Display, Formatter};

/// Label used when the configured type has no display name.
pub const ANONYMOUS_TYPE_NAME: &str = "Configurable";

/// Instance configuration failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigureError {
    /// A required property is neither in the spec nor set on the instance.
    MissingRequiredProperty { type_name: String, property: String },
}

impl ConfigureError {
    pub fn missing_required(type_name: Option<&str>, property: impl Into<String>) -> Self {
        Self::MissingRequiredProperty {
            type_name: type_name.unwrap_or(ANONYMOUS_TYPE_NAME).to_string(),
            property: property.into(),
        }
    }

    /// Name of the offending property.
    pub fn property(&self) -> &str {
        match self {
            Self::MissingRequiredProperty { property, .. } => property,
        }
    }

    pub fn type_name(&self) -> &str {
        match self {
            Self::MissingRequiredProperty { type_name, .. } => type_name,
        }
    }
}

impl Display for ConfigureError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredProperty {
                type_name,
                property,
            } => write!(f, "{type_name}: missing required property `{property}`"),
        }
    }
}

impl Error for ConfigureError {}

#[cfg(test)]
mod tests {
    use super::{ConfigureError, ANONYMOUS_TYPE_NAME};

    #[test]
    fn falls_back_to_generic_label_for_anonymous_types() {
        let err = ConfigureError::missing_required(None, "type");
        assert_eq!(err.type_name(), ANONYMOUS_TYPE_NAME);
        assert_eq!(err.property(), "type");
    }

    #[test]
    fn display_names_type_and_property() {
        let err = ConfigureError::missing_required(Some("Widget"), "type");
        assert_eq!(err.to_string(), "Widget: missing required property `type`");
    }
}
