use serde::Deserialize;

/// Metadata for a single configuration key.
///
/// The key's declared type is exposed through the two things the generator
/// reads from it: whether the value is a comma separated list, and the example
/// value its parser supplies.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KeyEntry {
    /// Human readable documentation for the key.
    pub description: Option<String>,

    /// Example value for the key's declared type.
    pub example: String,

    /// Whether the value is a comma separated list.
    #[serde(default)]
    pub list: bool,

    /// Hidden keys are excluded from the generated file.
    #[serde(default)]
    pub hidden: bool,
}
