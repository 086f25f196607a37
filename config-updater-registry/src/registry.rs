//! Registry types and parsing for config-keys.toml files.

use std::str::FromStr;

use indexmap::IndexMap;
use miette::SourceSpan;
use serde::Deserialize;

use crate::{Error, KeyEntry, Result, error::SourceContext};

/// Root registry for config-keys.toml.
///
/// Keys iterate in document order, which is also the order of the generated
/// field declarations.
#[derive(Debug, Clone, Deserialize)]
pub struct Registry {
    /// Configuration keys, keyed by their dotted key name.
    #[serde(default)]
    keys: IndexMap<String, KeyEntry>,
}

impl FromStr for Registry {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_registry(s, "config-keys.toml")
    }
}

impl Registry {
    /// Parse a registry from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_registry(content, filename)
    }

    /// Number of registered keys, hidden ones included.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check whether the registry has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Iterate keys in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &KeyEntry)> {
        self.keys.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}

/// Parse a registry from content with the given filename for error reporting.
fn parse_registry(content: &str, filename: &str) -> Result<Registry> {
    let ctx = SourceContext::new(content, filename);
    let registry: Registry = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;
    validate_registry(&registry, &ctx)?;
    Ok(registry)
}

/// Validate all key names after parsing.
fn validate_registry(registry: &Registry, ctx: &SourceContext) -> Result<()> {
    for (name, _) in registry.iter() {
        if let Some(reason) = validate_key_name(name) {
            return Err(ctx.invalid_key_error(name, reason, find_key_span(ctx.src(), name)));
        }
    }
    Ok(())
}

/// Check that a key name is non-empty and dot delimited, with each segment a
/// plain identifier. Returns None if valid, Some(reason) if invalid.
fn validate_key_name(name: &str) -> Option<&'static str> {
    if name.is_empty() {
        return Some("key name cannot be empty");
    }

    let segments: Vec<&str> = name.split('.').collect();
    if segments.len() < 2 {
        return Some("key name must have at least two dot separated segments");
    }

    for segment in segments {
        if segment.is_empty() {
            return Some("key name cannot contain empty segments");
        }

        let mut chars = segment.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() => {}
            _ => return Some("each segment must start with a letter"),
        }

        if !chars.all(|c| c.is_ascii_alphanumeric()) {
            return Some("segments must contain only letters and digits");
        }
    }

    None
}

/// Find the span of a key name in the TOML source.
/// Key names are dotted, so they appear quoted, e.g. `[keys."lombok.val.flagUsage"]`.
fn find_key_span(src: &str, name: &str) -> Option<SourceSpan> {
    let pattern = format!("\"{}\"", name);
    src.find(&pattern)
        .map(|pos| SourceSpan::from((pos + 1, name.len())))
}
