//! Make one headphone sound like another.
//!
//! Stacks the user's own correction with the inverse of the target's, the way
//! an EQ chain would apply them, and writes the result as ParametricEQ text.

use anyhow::Context;
use clap::Args;
use eqmatch_core::format_parametric_eq;
use std::path::PathBuf;

use super::common::{CommonArgs, resolve_profile};

#[derive(Args)]
pub struct SimulateArgs {
    /// Headphones you are listening on
    mine: String,

    /// Headphones to imitate
    target: String,

    /// Write to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

pub fn run(args: SimulateArgs, common: &CommonArgs) -> anyhow::Result<()> {
    let (_, catalog) = common.open_catalog()?;

    let mine = resolve_profile(&catalog, &args.mine)?;
    let target = resolve_profile(&catalog, &args.target)?;

    if mine.len() != target.len() {
        tracing::warn!(
            mine = mine.len(),
            target = target.len(),
            "band counts differ, extra bands dropped"
        );
    }

    let text = format_parametric_eq(&mine.simulate(&target));

    match &args.output {
        Some(path) => {
            std::fs::write(path, &text)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote simulated EQ to {}", path.display());
        }
        None => print!("{text}"),
    }

    Ok(())
}
