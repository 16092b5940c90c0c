//! Shared CLI helpers used across multiple commands.

use anyhow::Context;
use clap::Args;
use eqmatch_catalog::{DirectoryCatalog, ProfileResolver, Settings, paths};
use eqmatch_core::EqProfile;
use std::path::PathBuf;

/// Catalog and logging options accepted by every command.
///
/// Declared global so they may appear before or after a subcommand.
#[derive(Args, Debug, Clone)]
pub struct CommonArgs {
    /// AutoEq results directory to search (repeatable, replaces configured roots)
    #[arg(long = "catalog", value_name = "DIR", global = true)]
    pub catalog: Vec<PathBuf>,

    /// Settings file to read instead of the default location
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl CommonArgs {
    /// Settings file in effect.
    pub fn settings_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(paths::settings_path)
    }

    /// Load settings and apply `--catalog` overrides.
    pub fn load_settings(&self) -> anyhow::Result<Settings> {
        let path = self.settings_path();
        let settings = Settings::load_or_default(&path)
            .with_context(|| format!("invalid settings file {}", path.display()))?;

        Ok(if self.catalog.is_empty() {
            settings
        } else {
            settings.with_catalog_dirs(self.catalog.iter().cloned())
        })
    }

    /// Load settings and index the catalog they point at.
    pub fn open_catalog(&self) -> anyhow::Result<(Settings, DirectoryCatalog)> {
        let settings = self.load_settings()?;
        let catalog = DirectoryCatalog::open(settings.catalog_dirs.iter().cloned());
        Ok((settings, catalog))
    }
}

/// Resolve a name or fail with a hint to `eqmatch search`.
pub fn resolve_profile(catalog: &DirectoryCatalog, name: &str) -> anyhow::Result<EqProfile> {
    catalog.resolve(name).with_context(|| {
        format!("no usable profile for '{name}'. Use 'eqmatch search <name>' to see matches.")
    })
}
