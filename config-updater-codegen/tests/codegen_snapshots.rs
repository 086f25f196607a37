//! Snapshot tests for the generated mojo file.
//!
//! These tests verify that the generated Java source matches expected output.
//! Run `cargo insta review` to update snapshots when making intentional changes.

use std::str::FromStr;

use config_updater_codegen::{FieldDescriptor, MojoFile, render_fields};
use config_updater_registry::Registry;

/// Render the full mojo file for an inline registry document.
fn render_registry(registry_toml: &str) -> (String, Vec<String>) {
    let registry = Registry::from_str(registry_toml).expect("Failed to parse registry");
    let descriptors = FieldDescriptor::from_registry(&registry);
    let rendered = render_fields(&descriptors);
    (MojoFile::new(rendered.code).render(), rendered.skipped)
}

#[test]
fn test_generated_mojo_file() {
    let (content, skipped) = render_registry(
        r#"
[keys."lombok.accessors.chain"]
description = "Generate setters that return 'this' instead of 'void'."
example = "true"

[keys."lombok.val.flagUsage"]
description = "Emit a warning or error when 'val' is used."
example = "WARNING"

[keys."lombok.copyableAnnotations"]
description = "Copy these annotations to getters, setters, with(er)s, builder-setters, etc."
example = "fully.qualified.Annotation"
list = true
"#,
    );

    assert!(skipped.is_empty());
    insta::assert_snapshot!("generated_mojo_file", content);
}

#[test]
fn test_hidden_and_deprecated_keys_are_dropped() {
    let (content, skipped) = render_registry(
        r#"
[keys."lombok.val.flagUsage"]
description = "Emit a warning or error when 'val' is used."
example = "WARNING"

[keys."lombok.internal.noEcho"]
example = "false"
hidden = true

[keys."lombok.fieldDefaults.flagUsage"]
description = "Deprecated, use something else."
example = "WARNING"

[keys."config.stopBubbling"]
description = "Tell the configuration system to stop looking for other files."
example = "true"
"#,
    );

    assert!(content.contains("String valFlagUsage;"));
    assert!(!content.contains("noEcho"));
    assert!(!content.contains("fieldDefaults"));
    assert!(!content.contains("stopBubbling"));
    assert_eq!(
        skipped,
        vec![
            "Skipped: lombok.fieldDefaults.flagUsage | Deprecated, use something else."
                .to_string(),
            "Skipped: config.stopBubbling | Tell the configuration system to stop looking for \
             other files."
                .to_string(),
        ]
    );
}

#[test]
fn test_empty_registry_renders_bare_scaffold() {
    let (content, skipped) = render_registry("");
    assert!(skipped.is_empty());
    assert!(content.starts_with("package lombok.maven;"));
    assert!(content.ends_with("\n}"));
    assert!(!content.contains("@Parameter(property="));
}
