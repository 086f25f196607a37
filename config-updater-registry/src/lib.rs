//! Configuration-key registry parsing and validation.
//!
//! The registry is a TOML document mapping dotted configuration key names to
//! their metadata (description, example value, list/hidden flags):
//!
//! ```toml
//! [keys."lombok.accessors.chain"]
//! description = "Generate setters that return 'this' instead of 'void'."
//! example = "true"
//! ```
//!
//! Document order is preserved and becomes the order of the generated field
//! declarations.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod key;
mod registry;

pub use error::{Error, Result};
pub use file::RegistryToml;
pub use key::KeyEntry;
pub use registry::Registry;
