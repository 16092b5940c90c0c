//! Default command: EQ difference between two headphones.

use anyhow::Context;
use clap::Args;
use eqmatch_catalog::calculate_eq_difference;
use eqmatch_core::{Alignment, EqDifference};
use std::path::PathBuf;
use std::process::ExitCode;

use super::common::CommonArgs;

/// Printed when the two positional names are not given.
pub const USAGE: &str = "Usage: eqmatch <input_headphones> <output_headphones>";

/// Printed when either profile cannot be resolved or paired.
pub const FAILURE_MESSAGE: &str = "Error calculating EQ difference";

#[derive(Args, Debug)]
pub struct DiffArgs {
    /// Input headphones, then output (target) headphones
    #[arg(value_name = "HEADPHONES")]
    pub names: Vec<String>,

    /// Pair bands up to the shorter profile instead of failing on a mismatch
    #[arg(long)]
    pub truncate: bool,

    /// Pretty-print the JSON
    #[arg(long)]
    pub pretty: bool,

    /// Write the JSON to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

pub fn run(args: DiffArgs, common: &CommonArgs) -> anyhow::Result<ExitCode> {
    let [input, output] = args.names.as_slice() else {
        eprintln!("{USAGE}");
        return Ok(ExitCode::from(1));
    };

    let (settings, catalog) = common.open_catalog()?;
    let alignment = if args.truncate {
        Alignment::Truncate
    } else {
        settings.alignment
    };

    // Failures were logged by the calculator; the exit status stays 0.
    let Ok(diff) = calculate_eq_difference(&catalog, input, output, alignment) else {
        println!("{FAILURE_MESSAGE}");
        return Ok(ExitCode::SUCCESS);
    };

    let json = to_json(&diff, args.pretty)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote EQ difference ({} bands) to {}", diff.len(), path.display());
        }
        None => println!("{json}"),
    }

    Ok(ExitCode::SUCCESS)
}

fn to_json(diff: &EqDifference, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(diff)
    } else {
        serde_json::to_string(diff)
    }
}
