//! Profile resolution and settings for eqmatch.
//!
//! This crate turns free-text headphone names into [`EqProfile`]s and wires the
//! resolver to the difference calculator in `eqmatch-core`.
//!
//! # Features
//!
//! - **Resolvers**: the [`ProfileResolver`] trait with ranked [`Candidate`]s
//! - **Directory catalog**: index AutoEq `results/` trees of `ParametricEQ.txt` files
//! - **Memory catalog**: in-process profiles, same ranking rules
//! - **Calculator**: [`calculate_eq_difference`] resolves both names, then subtracts
//! - **Settings**: TOML settings file with catalog roots and alignment policy
//! - **Paths**: platform-specific settings and catalog directories
//!
//! # Example
//!
//! ```rust,no_run
//! use eqmatch_catalog::{DirectoryCatalog, Settings, calculate_eq_difference, paths};
//!
//! let settings = Settings::load_or_default(paths::settings_path()).unwrap();
//! let catalog = DirectoryCatalog::open(settings.catalog_dirs.clone());
//!
//! match calculate_eq_difference(&catalog, "Sennheiser HD 650", "Sennheiser HD 800 S", settings.alignment) {
//!     Ok(diff) => println!("{} bands", diff.len()),
//!     Err(e) => eprintln!("{e}"),
//! }
//! ```

mod calculator;
mod catalog;
mod error;
mod memory;
mod resolver;
mod settings;

/// Platform-specific paths for settings and catalogs.
pub mod paths;

pub use calculator::{CalculationError, Side, calculate_eq_difference};
pub use catalog::{CatalogEntry, DirectoryCatalog, load_profile};
pub use error::CatalogError;
pub use memory::MemoryCatalog;
pub use resolver::{Candidate, MatchRank, ProfileResolver, ResolveError, normalize_name};
pub use settings::Settings;

/// Re-export of the core model used throughout this crate's API.
pub use eqmatch_core::{Alignment, EqDifference, EqProfile};
