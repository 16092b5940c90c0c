//! Ranked name search.

use clap::Args;
use eqmatch_catalog::ProfileResolver;

use super::common::CommonArgs;

#[derive(Args)]
pub struct SearchArgs {
    /// Headphone name or part of it
    query: String,

    /// Maximum number of matches to show
    #[arg(short, long, default_value = "10")]
    limit: usize,
}

pub fn run(args: SearchArgs, common: &CommonArgs) -> anyhow::Result<()> {
    let (_, catalog) = common.open_catalog()?;

    let candidates = catalog.candidates(&args.query)?;
    if candidates.is_empty() {
        anyhow::bail!("No profile matches '{}'.", args.query);
    }

    println!("  {:8}  {:40}  Source", "Match", "Model");
    println!("  {:8}  {:40}  ------", "-----", "-----");
    for candidate in candidates.iter().take(args.limit) {
        println!(
            "  {:8}  {:40}  {}",
            candidate.rank.to_string(),
            candidate.model,
            candidate.source
        );
    }

    if candidates.len() > args.limit {
        println!("  ... {} more", candidates.len() - args.limit);
    }

    Ok(())
}
