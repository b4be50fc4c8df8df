//! The static schema registry.

use crate::entity::EntityDef;
use crate::field::{FieldDef, FieldType};
use serde_json::json;
use std::collections::BTreeMap;

/// Registry of declared entity kinds.
///
/// Built once at startup as an explicit literal; there is no runtime type
/// reflection. Lookups never fail: an unknown name simply yields `None` and
/// an empty registry lists no entities.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    entities: BTreeMap<&'static str, EntityDef>,
}

impl SchemaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity definition, replacing any previous one of the
    /// same name.
    pub fn register(&mut self, def: EntityDef) {
        self.entities.insert(def.name, def);
    }

    /// Returns every declared entity name, in a stable order.
    ///
    /// Never fails; an empty registry returns an empty list.
    #[must_use]
    pub fn list_entities(&self) -> Vec<&'static str> {
        self.entities.keys().copied().collect()
    }

    /// Looks up an entity by name or collection name (case-insensitive).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&EntityDef> {
        self.entities
            .get(name)
            .or_else(|| self.entities.values().find(|e| e.collection_name() == name.to_lowercase()))
    }

    /// Number of declared entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the registry declares no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Builds the registry of LibVault's built-in entities.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.register(EntityDef::new(
            "User",
            vec![
                FieldDef::required("name", FieldType::Text, "Full name"),
                FieldDef::required("email", FieldType::Text, "Email address"),
                FieldDef::with_default(
                    "role",
                    FieldType::Text,
                    json!("member"),
                    "Role based access: admin|librarian|member",
                ),
                FieldDef::optional("avatar", FieldType::Text, "Avatar URL"),
                FieldDef::with_default("is_active", FieldType::Boolean, json!(true), "Active status"),
                FieldDef::with_default(
                    "two_factor_enabled",
                    FieldType::Boolean,
                    json!(false),
                    "2FA enabled",
                ),
            ],
        ));

        registry.register(EntityDef::new(
            "Book",
            vec![
                FieldDef::required("title", FieldType::Text, "Book title"),
                FieldDef::required("author", FieldType::Text, "Author name"),
                FieldDef::optional("isbn", FieldType::Text, "ISBN"),
                FieldDef::optional("category", FieldType::Text, "Category/Genre"),
                FieldDef::optional("year", FieldType::Integer, "Publication year"),
                FieldDef::optional("summary", FieldType::Text, "Short description"),
                FieldDef::with_default(
                    "available",
                    FieldType::Boolean,
                    json!(true),
                    "Availability status",
                ),
                FieldDef::optional("cover_url", FieldType::Text, "Cover image URL"),
                FieldDef::with_default("tags", FieldType::TextList, json!([]), "Tags for search"),
            ],
        ));

        registry.register(EntityDef::new(
            "Transaction",
            vec![
                FieldDef::required("user_id", FieldType::Text, "Borrower user id"),
                FieldDef::required("book_id", FieldType::Text, "Borrowed book id"),
                FieldDef::required("type", FieldType::Text, "borrow|return|renew"),
                FieldDef::optional("due_date", FieldType::Timestamp, "Due date for returns"),
                FieldDef::optional("returned_at", FieldType::Timestamp, "Return timestamp"),
                FieldDef::with_default(
                    "status",
                    FieldType::Text,
                    json!("open"),
                    "open|closed|overdue",
                ),
            ],
        ));

        registry.register(EntityDef::new(
            "Invoice",
            vec![
                FieldDef::required("user_id", FieldType::Text, "Billed user id"),
                FieldDef::required("amount", FieldType::Float, "Invoice amount"),
                FieldDef::with_default("currency", FieldType::Text, json!("USD"), "Currency code"),
                FieldDef::with_default(
                    "status",
                    FieldType::Text,
                    json!("pending"),
                    "pending|paid|failed|refunded",
                ),
                FieldDef::optional("description", FieldType::Text, "Line description"),
            ],
        ));

        registry.register(EntityDef::new(
            "Subscription",
            vec![
                FieldDef::required("user_id", FieldType::Text, "Subscribed user id"),
                FieldDef::with_default(
                    "plan",
                    FieldType::Text,
                    json!("pro"),
                    "free|pro|enterprise",
                ),
                FieldDef::with_default(
                    "status",
                    FieldType::Text,
                    json!("active"),
                    "active|trial|expired|canceled",
                ),
                FieldDef::optional("renews_at", FieldType::Timestamp, "Next renewal"),
            ],
        ));

        registry.register(EntityDef::new(
            "ForumPost",
            vec![
                FieldDef::required("user_id", FieldType::Text, "Author user id"),
                FieldDef::required("title", FieldType::Text, "Post title"),
                FieldDef::required("content", FieldType::Text, "Post body"),
                FieldDef::with_default("tags", FieldType::TextList, json!([]), "Topic tags"),
                FieldDef::with_default("likes", FieldType::Integer, json!(0), "Like count"),
            ],
        ));

        registry.register(EntityDef::new(
            "Club",
            vec![
                FieldDef::required("name", FieldType::Text, "Club name"),
                FieldDef::optional("description", FieldType::Text, "Club description"),
                FieldDef::required("owner_id", FieldType::Text, "Owning user id"),
                FieldDef::with_default("members", FieldType::TextList, json!([]), "Member user ids"),
            ],
        ));

        registry.register(EntityDef::new(
            "Recommendation",
            vec![
                FieldDef::required("user_id", FieldType::Text, "Target user id"),
                FieldDef::with_default(
                    "book_ids",
                    FieldType::TextList,
                    json!([]),
                    "Recommended book ids",
                ),
                FieldDef::with_default(
                    "strategy",
                    FieldType::Text,
                    json!("rule-based"),
                    "Strategy label",
                ),
            ],
        ));

        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_declares_all_entities() {
        let registry = SchemaRegistry::builtin();
        let names = registry.list_entities();
        for expected in [
            "Book",
            "Club",
            "ForumPost",
            "Invoice",
            "Recommendation",
            "Subscription",
            "Transaction",
            "User",
        ] {
            assert!(names.contains(&expected), "missing {expected}");
        }
        assert_eq!(registry.len(), 8);
    }

    #[test]
    fn empty_registry_lists_nothing() {
        let registry = SchemaRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.list_entities().is_empty());
    }

    #[test]
    fn lookup_by_collection_name() {
        let registry = SchemaRegistry::builtin();
        let by_name = registry.get("ForumPost").unwrap();
        let by_collection = registry.get("forumpost").unwrap();
        assert_eq!(by_name.name, by_collection.name);
    }

    #[test]
    fn unknown_entity_is_none() {
        let registry = SchemaRegistry::builtin();
        assert!(registry.get("Spaceship").is_none());
    }

    #[test]
    fn book_defaults() {
        let registry = SchemaRegistry::builtin();
        let book = registry.get("Book").unwrap();
        assert_eq!(book.field("available").unwrap().default, Some(json!(true)));
        assert!(book.field("title").unwrap().required);
    }
}
