//! Mojo field naming conventions.

/// Namespace prefix stripped from key names before deriving field names.
pub(crate) const NAMESPACE_PREFIX: &str = "lombok.";

/// Derive the mojo field name for a configuration key.
///
/// Strips the leading `lombok.` namespace, splits the remainder on `.`, and
/// joins the segments in lower camel case
/// (e.g. "lombok.accessors.chain" -> "accessorsChain").
pub fn to_field_name(key_name: &str) -> String {
    let trimmed = key_name.strip_prefix(NAMESPACE_PREFIX).unwrap_or(key_name);
    let mut segments = trimmed.split('.');
    let mut name = segments.next().unwrap_or_default().to_string();
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}
