//! Code generation for the lombok configuration mojo file.
//!
//! Turns registry entries into annotated `String` field declarations, splices
//! them into the fixed `AbstractLombokConfigMojo` scaffold, and rewrites the
//! target file only when its content changed:
//!
//! ```ignore
//! use config_updater_codegen::{FieldDescriptor, MojoFile, render_fields};
//! use config_updater_registry::RegistryToml;
//!
//! let registry = RegistryToml::open("config-keys.toml")?;
//! let descriptors = FieldDescriptor::from_registry(registry.registry());
//! let rendered = render_fields(&descriptors);
//! let outcome = MojoFile::new(rendered.code).update("AbstractLombokConfigMojo.java".as_ref())?;
//! ```

mod descriptor;
mod mojo_file;
mod naming;
mod render;

pub use descriptor::FieldDescriptor;
pub use mojo_file::{MOJO_HEADER, MojoFile, UpdateOutcome};
pub use naming::to_field_name;
pub use render::{RenderedFields, render_fields};
