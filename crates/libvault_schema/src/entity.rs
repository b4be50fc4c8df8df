//! Entity definitions.

use crate::field::FieldDef;
use serde::Serialize;
use serde_json::{Map, Value};

/// Definition of one entity kind.
///
/// Each entity maps to a store collection named by lowercasing the entity
/// name: `Book` documents live in the `book` collection, `ForumPost`
/// documents in `forumpost`.
#[derive(Debug, Clone, Serialize)]
pub struct EntityDef {
    /// Entity name, e.g. `"Book"`.
    pub name: &'static str,
    /// Declared fields, in declaration order.
    pub fields: Vec<FieldDef>,
}

impl EntityDef {
    /// Creates an entity definition.
    #[must_use]
    pub fn new(name: &'static str, fields: Vec<FieldDef>) -> Self {
        Self { name, fields }
    }

    /// Returns the store collection name for this entity.
    #[must_use]
    pub fn collection_name(&self) -> String {
        self.name.to_lowercase()
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Inserts declared defaults for fields absent from `doc`.
    ///
    /// Required fields and optional fields without a default are left
    /// untouched; the store stays schemaless and the handler layer decides
    /// what to do about missing required fields.
    pub fn fill_defaults(&self, doc: &mut Map<String, Value>) {
        for field in &self.fields {
            if let Some(default) = &field.default {
                if !doc.contains_key(field.name) {
                    doc.insert(field.name.to_string(), default.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldType;
    use serde_json::json;

    fn post_def() -> EntityDef {
        EntityDef::new(
            "ForumPost",
            vec![
                FieldDef::required("title", FieldType::Text, "Post title"),
                FieldDef::with_default("likes", FieldType::Integer, json!(0), "Like count"),
                FieldDef::with_default("tags", FieldType::TextList, json!([]), "Tags"),
            ],
        )
    }

    #[test]
    fn collection_name_is_lowercased() {
        assert_eq!(post_def().collection_name(), "forumpost");
    }

    #[test]
    fn field_lookup() {
        let def = post_def();
        assert!(def.field("likes").is_some());
        assert!(def.field("missing").is_none());
    }

    #[test]
    fn fill_defaults_inserts_absent_only() {
        let def = post_def();
        let mut doc = Map::new();
        doc.insert("title".into(), json!("hello"));
        doc.insert("likes".into(), json!(7));

        def.fill_defaults(&mut doc);

        assert_eq!(doc.get("likes"), Some(&json!(7)));
        assert_eq!(doc.get("tags"), Some(&json!([])));
        // required field without default is never synthesized
        assert_eq!(doc.len(), 3);
    }
}
