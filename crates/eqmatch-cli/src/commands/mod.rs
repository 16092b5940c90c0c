//! CLI command implementations.

pub mod common;
pub mod diff;
pub mod list;
pub mod paths;
pub mod search;
pub mod show;
pub mod simulate;
