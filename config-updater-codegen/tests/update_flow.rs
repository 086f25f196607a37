//! End to end update flow against a real file on disk.

use std::{fs, str::FromStr};

use config_updater_codegen::{
    FieldDescriptor, MOJO_HEADER, MojoFile, UpdateOutcome, render_fields,
};
use config_updater_registry::Registry;
use tempfile::TempDir;

const SCENARIO_REGISTRY: &str = r#"
[keys."lombok.val.flagUsage"]
description = "flag usage"
example = "WARNING"

[keys."config.stopBubbling"]
description = "Deprecated, does nothing"
example = "true"
"#;

#[test]
fn test_update_rewrites_differing_file_and_logs_skips() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("AbstractLombokConfigMojo.java");
    fs::write(&path, "stale content").unwrap();

    let registry = Registry::from_str(SCENARIO_REGISTRY).unwrap();
    let descriptors = FieldDescriptor::from_registry(&registry);
    let rendered = render_fields(&descriptors);

    assert_eq!(
        rendered.skipped,
        vec!["Skipped: config.stopBubbling | Deprecated, does nothing".to_string()]
    );

    let mojo = MojoFile::new(rendered.code);
    assert_eq!(mojo.update(&path).unwrap(), UpdateOutcome::Updated);

    // Round trip: the file now holds exactly header + block + closing brace.
    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, mojo.render());
    assert!(written.starts_with(MOJO_HEADER));
    assert!(written.ends_with('}'));
    assert!(written.contains("String valFlagUsage;"));
    assert!(!written.contains("stopBubbling"));

    // A second run with unchanged metadata is a no-op.
    assert_eq!(mojo.update(&path).unwrap(), UpdateOutcome::Unchanged);
}
