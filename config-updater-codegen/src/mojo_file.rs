//! The generated mojo file: fixed scaffold, merge, and change detecting write.

use std::path::Path;

use eyre::{Context, Result};

/// Fixed scaffold preceding the generated field block. The file ends with a
/// single closing brace appended after the block.
pub const MOJO_HEADER: &str = r#"package lombok.maven;

import org.apache.maven.plugin.AbstractMojo;
import org.apache.maven.plugins.annotations.Parameter;

//This class is generated by ConfigUpdater. DO NOT MODIFY.
public abstract class AbstractLombokConfigMojo extends AbstractMojo
{
    @java.lang.annotation.Retention(java.lang.annotation.RetentionPolicy.RUNTIME)
    @java.lang.annotation.Target(java.lang.annotation.ElementType.FIELD)
    static @interface Config {
        String value() default "";
        String list() default "";
    }

"#;

/// The target generated file, assembled from the scaffold and a field block.
pub struct MojoFile {
    code: String,
}

/// Whether an update pass rewrote the target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// Existing content already matched; nothing was written.
    Unchanged,
    /// Content differed and the file was rewritten.
    Updated,
}

impl MojoFile {
    /// Create a mojo file around a rendered field block.
    pub fn new(code: impl Into<String>) -> Self {
        Self { code: code.into() }
    }

    /// Full file content: scaffold, field block, closing brace.
    pub fn render(&self) -> String {
        format!("{}{}}}", MOJO_HEADER, self.code)
    }

    /// Rewrite `path` with the rendered content if it differs.
    ///
    /// The target must already exist; its current content is read first so an
    /// unchanged file is never rewritten.
    pub fn update(&self, path: &Path) -> Result<UpdateOutcome> {
        let current = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read '{}'", path.display()))?;

        let expected = self.render();
        if current == expected {
            return Ok(UpdateOutcome::Unchanged);
        }

        std::fs::write(path, &expected)
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        Ok(UpdateOutcome::Updated)
    }
}
