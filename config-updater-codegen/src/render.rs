//! Renders the generated field block.

use crate::{descriptor::FieldDescriptor, naming::NAMESPACE_PREFIX};

/// Key that is special cased out of the generated file.
const STOP_BUBBLING_KEY: &str = "config.stopBubbling";

/// Keys whose description carries this marker (case sensitive) are dropped.
const DEPRECATED_MARKER: &str = "Deprecated";

/// The rendered field block plus the log of skipped keys.
#[derive(Debug, Default)]
pub struct RenderedFields {
    /// Source text of all field declarations, in input order.
    pub code: String,

    /// One `Skipped: <key> | <description>` line per dropped key.
    pub skipped: Vec<String>,
}

/// Render field declarations for all descriptors.
///
/// Skips the stop-bubbling sentinel and any key whose description mentions
/// deprecation; everything else becomes a documented, annotated `String` field.
pub fn render_fields(descriptors: &[FieldDescriptor]) -> RenderedFields {
    let mut rendered = RenderedFields::default();
    for descriptor in descriptors {
        if is_skipped(descriptor) {
            rendered.skipped.push(format!(
                "Skipped: {} | {}",
                descriptor.key_name,
                descriptor.description.as_deref().unwrap_or_default()
            ));
            continue;
        }
        render_field(&mut rendered.code, descriptor);
    }
    rendered
}

fn is_skipped(descriptor: &FieldDescriptor) -> bool {
    descriptor.key_name == STOP_BUBBLING_KEY
        || descriptor
            .description
            .as_deref()
            .is_some_and(|d| d.contains(DEPRECATED_MARKER))
}

fn render_field(out: &mut String, descriptor: &FieldDescriptor) {
    let field = &descriptor.field_name;

    out.push_str("    /**\n");
    if let Some(description) = non_blank(descriptor.description.as_deref()) {
        out.push_str(&format!("     * <p>{description}</p>\n     * "));
    }
    if descriptor.is_list {
        out.push_str("Value is a comma separated list. ");
    }
    out.push_str(&format!(
        "Example:\n     * <pre>\n     * &lt;{field}&gt;{}&lt;/{field}&gt;\n     * </pre>\n     */\n",
        descriptor.example
    ));

    out.push_str("    @Config(");
    if descriptor.is_list {
        out.push_str("value=");
    }
    out.push_str(&format!("\"{}\"", descriptor.key_name));
    if descriptor.is_list {
        out.push_str(", list=\"true\"");
    }
    out.push_str(")\n    @Parameter(property=\"");
    if !descriptor.key_name.starts_with(NAMESPACE_PREFIX) {
        out.push_str(NAMESPACE_PREFIX);
    }
    out.push_str(&format!("{}\")\n    String {field};\n\n", descriptor.key_name));
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}
