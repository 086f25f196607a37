//! Command line interface for the config updater.

use std::path::PathBuf;

use clap::Parser;
use config_updater_codegen::{FieldDescriptor, MojoFile, UpdateOutcome, render_fields};
use config_updater_registry::RegistryToml;
use eyre::Result;

/// Extension trait for exiting on registry errors with pretty formatting
trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for config_updater_registry::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "config-updater")]
#[command(version)]
#[command(about = "Regenerate the lombok configuration mojo from the key registry")]
pub(crate) struct Cli {
    /// Path to the AbstractLombokConfigMojo.java file to update in place
    target: PathBuf,

    /// Path to the configuration key registry
    #[arg(short, long, default_value = "config-keys.toml")]
    registry: PathBuf,

    /// Print the generated file without touching the target
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        let registry = RegistryToml::open(&self.registry).unwrap_or_exit();
        let descriptors = FieldDescriptor::from_registry(registry.registry());
        let rendered = render_fields(&descriptors);
        let mojo = MojoFile::new(rendered.code);

        if self.dry_run {
            println!("── {} ──", self.target.display());
            println!("{}", mojo.render());
            return Ok(());
        }

        match mojo.update(&self.target)? {
            UpdateOutcome::Unchanged => println!("No update needed."),
            UpdateOutcome::Updated => {
                for line in &rendered.skipped {
                    println!("{line}");
                }
                println!();
                println!("Updated {}", self.target.display());
            }
        }

        Ok(())
    }
}
