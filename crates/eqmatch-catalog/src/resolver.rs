//! Name-to-profile resolution.
//!
//! A resolver maps a free-text headphone name to a ranked list of
//! [`Candidate`]s and loads the profile behind a candidate. Callers that only
//! want "the best match" use [`ProfileResolver::resolve`].

use eqmatch_core::EqProfile;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::error::CatalogError;

/// Why a name could not be turned into a profile.
///
/// The difference calculator treats every variant as "absent".
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The query was empty after trimming.
    #[error("headphone name is empty")]
    EmptyName,

    /// No catalog entry matches the query.
    #[error("no profile found for '{name}'")]
    NotFound {
        /// Query as given by the caller.
        name: String,
    },

    /// The best match exists but could not be read or parsed.
    #[error("failed to load profile for '{model}': {source}")]
    Load {
        /// Model name of the matched entry.
        model: String,
        /// Read or parse failure.
        #[source]
        source: CatalogError,
    },
}

/// How well a model name matches a query. Better ranks sort first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MatchRank {
    /// Same name, ignoring case and whitespace runs.
    Exact,
    /// Model name starts with the query.
    Prefix,
    /// Model name contains the query.
    Contains,
}

impl MatchRank {
    /// Rank `model` against `query`; both must already be [`normalize_name`]d.
    pub fn of(model: &str, query: &str) -> Option<Self> {
        if model == query {
            Some(MatchRank::Exact)
        } else if model.starts_with(query) {
            Some(MatchRank::Prefix)
        } else if model.contains(query) {
            Some(MatchRank::Contains)
        } else {
            None
        }
    }
}

impl fmt::Display for MatchRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MatchRank::Exact => "exact",
            MatchRank::Prefix => "prefix",
            MatchRank::Contains => "contains",
        })
    }
}

/// A ranked match returned by [`ProfileResolver::candidates`].
///
/// `entry` is only meaningful to the resolver that produced the candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Model name as published.
    pub model: String,
    /// Where the profile comes from (measurement source, rig), may be empty.
    pub source: String,
    /// Match quality.
    pub rank: MatchRank,
    /// Backing file, for on-disk catalogs.
    pub path: Option<PathBuf>,
    /// Resolver-specific entry index.
    pub entry: usize,
}

/// Lowercase, trim and collapse whitespace runs to single spaces.
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Rank `(entry, normalized model)` pairs against a normalized query.
///
/// Ties break on shorter model name, then entry order.
pub(crate) fn rank_entries<'a>(
    query: &str,
    keys: impl Iterator<Item = (usize, &'a str)>,
) -> Vec<(MatchRank, usize)> {
    let mut ranked: Vec<(MatchRank, usize, usize)> = keys
        .filter_map(|(entry, key)| MatchRank::of(key, query).map(|rank| (rank, key.len(), entry)))
        .collect();
    ranked.sort_unstable();
    ranked
        .into_iter()
        .map(|(rank, _, entry)| (rank, entry))
        .collect()
}

/// Source of headphone EQ profiles.
pub trait ProfileResolver {
    /// All entries matching `name`, best first.
    ///
    /// An empty list is not an error; an empty `name` is.
    fn candidates(&self, name: &str) -> Result<Vec<Candidate>, ResolveError>;

    /// Load the profile behind a candidate.
    fn load(&self, candidate: &Candidate) -> Result<EqProfile, ResolveError>;

    /// Profile of the top-ranked candidate for `name`.
    fn resolve(&self, name: &str) -> Result<EqProfile, ResolveError> {
        let best = self
            .candidates(name)?
            .into_iter()
            .next()
            .ok_or_else(|| ResolveError::NotFound {
                name: name.to_string(),
            })?;

        tracing::debug!(
            query = name,
            model = %best.model,
            source = %best.source,
            rank = %best.rank,
            "resolved headphone name"
        );
        self.load(&best)
    }
}
