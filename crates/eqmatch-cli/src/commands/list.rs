//! List catalog models.

use clap::Args;

use super::common::CommonArgs;

#[derive(Args)]
pub struct ListArgs {
    /// Only show models whose name contains this text (case-insensitive)
    filter: Option<String>,
}

pub fn run(args: ListArgs, common: &CommonArgs) -> anyhow::Result<()> {
    let (_, catalog) = common.open_catalog()?;

    if catalog.is_empty() {
        eprintln!("No profiles found. Point --catalog or catalog_dirs at an AutoEq results directory.");
        eprintln!("Roots searched:");
        for root in catalog.roots() {
            eprintln!("  {}", root.display());
        }
        return Ok(());
    }

    for model in catalog.models(args.filter.as_deref()) {
        println!("{model}");
    }

    Ok(())
}
