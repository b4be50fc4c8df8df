//! # LibVault Schema
//!
//! Static entity schema registry for LibVault.
//!
//! The registry is a mapping literal built at startup. It declares every
//! entity kind the API serves, together with its field definitions (name,
//! type, optionality, default, description). It exists for introspection
//! (the `/schema` endpoint and generic admin UIs) and for field defaulting
//! in the handler layer.
//!
//! The registry deliberately does **not** validate documents. The store
//! layer is schemaless by design; callers that want stricter typing add a
//! validation stage in front of the store, not inside it.
//!
//! ## Example
//!
//! ```rust
//! use libvault_schema::SchemaRegistry;
//!
//! let registry = SchemaRegistry::builtin();
//! assert!(registry.list_entities().contains(&"Book"));
//!
//! let book = registry.get("Book").unwrap();
//! assert_eq!(book.collection_name(), "book");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod entity;
mod field;
mod registry;

pub use entity::EntityDef;
pub use field::{FieldDef, FieldType};
pub use registry::SchemaRegistry;
