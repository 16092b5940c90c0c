//! Print a resolved profile.

use clap::Args;
use eqmatch_core::format_parametric_eq;

use super::common::{CommonArgs, resolve_profile};

#[derive(Args)]
pub struct ShowArgs {
    /// Headphone name
    name: String,

    /// Print JSON instead of ParametricEQ text
    #[arg(long)]
    json: bool,
}

pub fn run(args: ShowArgs, common: &CommonArgs) -> anyhow::Result<()> {
    let (_, catalog) = common.open_catalog()?;
    let profile = resolve_profile(&catalog, &args.name)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        print!("{}", format_parametric_eq(&profile));
    }

    Ok(())
}
