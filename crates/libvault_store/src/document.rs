//! Stored document representation.

use crate::id::DocumentId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A record read from or written to a collection.
///
/// Documents are plain field maps with a store-assigned identifier. The
/// identifier serializes under `"id"` as a plain string, so HTTP responses
/// never leak a backend-native identifier type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// The store-assigned identifier.
    pub id: DocumentId,
    /// The document fields, verbatim as supplied at creation.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Document {
    /// Creates a document from an identifier and field map.
    #[must_use]
    pub fn new(id: DocumentId, fields: Map<String, Value>) -> Self {
        Self { id, fields }
    }

    /// Returns a field value, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_flat_with_string_id() {
        let mut fields = Map::new();
        fields.insert("title".into(), json!("Dune"));
        let doc = Document::new(DocumentId::new(), fields);

        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["title"], json!("Dune"));
        assert!(value["id"].is_string());
    }

    #[test]
    fn field_access() {
        let mut fields = Map::new();
        fields.insert("likes".into(), json!(3));
        let doc = Document::new(DocumentId::new(), fields);

        assert_eq!(doc.get("likes"), Some(&json!(3)));
        assert!(doc.get("missing").is_none());
    }
}
