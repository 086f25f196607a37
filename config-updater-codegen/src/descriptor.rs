//! Field descriptors built from registry entries.

use config_updater_registry::Registry;

use crate::naming::to_field_name;

/// One configuration key, ready for rendering.
///
/// Built from a registry entry with the field name derived and the example
/// value already sanitized; immutable from construction on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Dotted configuration key name, e.g. "lombok.accessors.chain".
    pub key_name: String,

    /// Derived lower camel case field name, e.g. "accessorsChain".
    pub field_name: String,

    /// Documentation for the key, if any.
    pub description: Option<String>,

    /// Example value, safe to embed in a javadoc comment.
    pub example: String,

    /// Whether the value is a comma separated list.
    pub is_list: bool,
}

impl FieldDescriptor {
    /// Build a descriptor for a single key.
    pub fn new(key_name: &str, description: Option<&str>, example: &str, is_list: bool) -> Self {
        Self {
            key_name: key_name.to_string(),
            field_name: to_field_name(key_name),
            description: description.map(str::to_string),
            example: sanitize_example(example),
            is_list,
        }
    }

    /// Collect descriptors for every non-hidden key, in registry order.
    pub fn from_registry(registry: &Registry) -> Vec<Self> {
        registry
            .iter()
            .filter(|(_, entry)| !entry.hidden)
            .map(|(name, entry)| {
                Self::new(name, entry.description.as_deref(), &entry.example, entry.list)
            })
            .collect()
    }
}

/// Rewrite literal angle brackets so the example stays safe inside the
/// generated javadoc comment.
fn sanitize_example(example: &str) -> String {
    example.replace('<', "[...").replace('>', "...]")
}
