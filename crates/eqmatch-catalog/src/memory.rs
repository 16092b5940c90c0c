//! In-memory resolver.

use eqmatch_core::EqProfile;

use crate::resolver::{Candidate, ProfileResolver, ResolveError, normalize_name, rank_entries};

/// Resolver over profiles held in memory, ranked like [`crate::DirectoryCatalog`].
///
/// # Example
///
/// ```rust
/// use eqmatch_catalog::{MemoryCatalog, ProfileResolver};
/// use eqmatch_core::{EqBand, EqProfile};
///
/// let catalog = MemoryCatalog::new()
///     .with_profile("HD 650", EqProfile::from_bands(vec![EqBand::peaking(105.0, 0.7, 5.5)]));
///
/// assert_eq!(catalog.resolve("hd 650").unwrap().len(), 1);
/// assert!(catalog.resolve("DT 770").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryCatalog {
    entries: Vec<(String, String, EqProfile)>,
}

impl MemoryCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a profile under a model name.
    pub fn with_profile(mut self, model: impl Into<String>, profile: EqProfile) -> Self {
        self.insert(model, profile);
        self
    }

    /// Add a profile under a model name.
    pub fn insert(&mut self, model: impl Into<String>, profile: EqProfile) {
        let model = model.into();
        let key = normalize_name(&model);
        self.entries.push((model, key, profile));
    }

    /// Number of profiles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ProfileResolver for MemoryCatalog {
    fn candidates(&self, name: &str) -> Result<Vec<Candidate>, ResolveError> {
        let query = normalize_name(name);
        if query.is_empty() {
            return Err(ResolveError::EmptyName);
        }

        let keys = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, (_, key, _))| (i, key.as_str()));
        Ok(rank_entries(&query, keys)
            .into_iter()
            .map(|(rank, i)| Candidate {
                model: self.entries[i].0.clone(),
                source: String::new(),
                rank,
                path: None,
                entry: i,
            })
            .collect())
    }

    fn load(&self, candidate: &Candidate) -> Result<EqProfile, ResolveError> {
        self.entries
            .get(candidate.entry)
            .map(|(_, _, profile)| profile.clone())
            .ok_or_else(|| ResolveError::NotFound {
                name: candidate.model.clone(),
            })
    }
}
