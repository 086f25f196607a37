use std::path::{Path, PathBuf};

use crate::{Error, Registry, Result};

/// A config-keys.toml file on disk with its parsed registry.
#[derive(Debug)]
pub struct RegistryToml {
    path: PathBuf,
    registry: Registry,
}

impl RegistryToml {
    /// Open and parse a config-keys.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let registry = Registry::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, registry })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}
