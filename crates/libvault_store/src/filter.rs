//! Query filters and field matchers.

use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// The comparison policy applied to one field in a filter.
#[derive(Debug, Clone, PartialEq)]
pub enum Matcher {
    /// Exact value equality. For array fields, matches when any element
    /// equals the expected value (the usual document-store convention for
    /// tag-style fields).
    Eq(Value),

    /// Case-insensitive substring match on text fields. For array fields,
    /// matches when any text element contains the needle.
    Contains(String),

    /// Tokenized full-text match: every whitespace-separated query token
    /// must appear as a whole token in the field text.
    ///
    /// Backends that do not maintain a text index cannot evaluate this
    /// matcher natively; the store degrades it to [`Matcher::Contains`]
    /// semantics transparently, with the same return shape.
    Text(String),
}

impl Matcher {
    /// Evaluates this matcher against a field value.
    ///
    /// `text_supported` reports whether the backend can evaluate
    /// [`Matcher::Text`] natively; when false, text matching degrades to
    /// substring matching.
    #[must_use]
    pub fn matches(&self, value: &Value, text_supported: bool) -> bool {
        match self {
            Matcher::Eq(expected) => match value {
                Value::Array(items) => value == expected || items.contains(expected),
                _ => value == expected,
            },
            Matcher::Contains(needle) => contains_insensitive(value, needle),
            Matcher::Text(query) => {
                if text_supported {
                    matches_tokens(value, query)
                } else {
                    contains_insensitive(value, query)
                }
            }
        }
    }
}

fn contains_insensitive(value: &Value, needle: &str) -> bool {
    let needle = needle.to_lowercase();
    match value {
        Value::String(s) => s.to_lowercase().contains(&needle),
        Value::Array(items) => items.iter().any(|item| {
            item.as_str()
                .is_some_and(|s| s.to_lowercase().contains(&needle))
        }),
        _ => false,
    }
}

fn matches_tokens(value: &Value, query: &str) -> bool {
    let Some(text) = value.as_str() else {
        return false;
    };
    let tokens: Vec<String> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(|t| t.to_lowercase())
        .collect();

    query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .all(|q| tokens.contains(&q.to_lowercase()))
}

/// A conjunction of per-field match constraints.
///
/// An empty filter matches every record. A record lacking any filtered
/// field is excluded, never an error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    constraints: BTreeMap<String, Matcher>,
}

impl Filter {
    /// Creates an empty filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an equality constraint.
    #[must_use]
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.constraints.insert(field.into(), Matcher::Eq(value.into()));
        self
    }

    /// Adds a case-insensitive substring constraint.
    #[must_use]
    pub fn contains(mut self, field: impl Into<String>, needle: impl Into<String>) -> Self {
        self.constraints
            .insert(field.into(), Matcher::Contains(needle.into()));
        self
    }

    /// Adds a full-text constraint.
    #[must_use]
    pub fn text(mut self, field: impl Into<String>, query: impl Into<String>) -> Self {
        self.constraints
            .insert(field.into(), Matcher::Text(query.into()));
        self
    }

    /// Returns true if the filter has no constraints.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Number of constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Evaluates the conjunction against a document's fields.
    #[must_use]
    pub fn matches(&self, fields: &Map<String, Value>, text_supported: bool) -> bool {
        self.constraints.iter().all(|(field, matcher)| {
            fields
                .get(field)
                .is_some_and(|value| matcher.matches(value, text_supported))
        })
    }
}
