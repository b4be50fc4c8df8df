//! Field definitions.

use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Declared type of an entity field.
///
/// Types are descriptive only; the store layer never enforces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// UTF-8 text.
    Text,
    /// Signed integer.
    Integer,
    /// Floating-point number.
    Float,
    /// Boolean flag.
    Boolean,
    /// RFC 3339 timestamp.
    Timestamp,
    /// List of UTF-8 text values.
    TextList,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldType::Text => "text",
            FieldType::Integer => "integer",
            FieldType::Float => "float",
            FieldType::Boolean => "boolean",
            FieldType::Timestamp => "timestamp",
            FieldType::TextList => "text_list",
        };
        write!(f, "{name}")
    }
}

/// Definition of a single entity field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDef {
    /// Field name as it appears in stored documents.
    pub name: &'static str,
    /// Declared type.
    pub field_type: FieldType,
    /// Whether callers must supply the field on creation.
    pub required: bool,
    /// Default value inserted when an optional field is absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Human-readable description for introspection UIs.
    pub description: &'static str,
}

impl FieldDef {
    /// Creates a required field with no default.
    #[must_use]
    pub fn required(name: &'static str, field_type: FieldType, description: &'static str) -> Self {
        Self {
            name,
            field_type,
            required: true,
            default: None,
            description,
        }
    }

    /// Creates an optional field with no default.
    #[must_use]
    pub fn optional(name: &'static str, field_type: FieldType, description: &'static str) -> Self {
        Self {
            name,
            field_type,
            required: false,
            default: None,
            description,
        }
    }

    /// Creates an optional field with a default value.
    #[must_use]
    pub fn with_default(
        name: &'static str,
        field_type: FieldType,
        default: Value,
        description: &'static str,
    ) -> Self {
        Self {
            name,
            field_type,
            required: false,
            default: Some(default),
            description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn required_has_no_default() {
        let f = FieldDef::required("title", FieldType::Text, "Book title");
        assert!(f.required);
        assert!(f.default.is_none());
    }

    #[test]
    fn with_default_keeps_value() {
        let f = FieldDef::with_default("likes", FieldType::Integer, json!(0), "Like count");
        assert!(!f.required);
        assert_eq!(f.default, Some(json!(0)));
    }

    #[test]
    fn field_type_display() {
        assert_eq!(FieldType::TextList.to_string(), "text_list");
        assert_eq!(FieldType::Boolean.to_string(), "boolean");
    }
}
