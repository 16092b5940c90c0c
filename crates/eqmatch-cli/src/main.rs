//! eqmatch CLI - headphone EQ differences from AutoEq results.

mod commands;

use clap::error::ErrorKind;
use clap::{Parser, Subcommand};
use std::process::ExitCode;

use commands::common::CommonArgs;

#[derive(Parser)]
#[command(name = "eqmatch")]
#[command(author, version, about = "Compare headphone EQ profiles from AutoEq results", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    diff: commands::diff::DiffArgs,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// List headphone models in the catalog
    List(commands::list::ListArgs),

    /// Show ranked catalog matches for a name
    Search(commands::search::SearchArgs),

    /// Print the profile a name resolves to
    Show(commands::show::ShowArgs),

    /// Build an EQ that makes one headphone sound like another
    Simulate(commands::simulate::SimulateArgs),

    /// Show settings file and catalog directories
    Paths,
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let fallback = if verbose { "debug" } else { "warn" };

    // stdout carries results only
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return Ok(match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            });
        }
    };

    init_tracing(cli.common.verbose);

    match cli.command {
        Some(Commands::List(args)) => commands::list::run(args, &cli.common)?,
        Some(Commands::Search(args)) => commands::search::run(args, &cli.common)?,
        Some(Commands::Show(args)) => commands::show::run(args, &cli.common)?,
        Some(Commands::Simulate(args)) => commands::simulate::run(args, &cli.common)?,
        Some(Commands::Paths) => commands::paths::run(&cli.common)?,
        None => return commands::diff::run(cli.diff, &cli.common),
    }

    Ok(ExitCode::SUCCESS)
}
