//! Directory-backed catalog of AutoEq results.
//!
//! Indexes every `<Model> ParametricEQ.txt` under one or more roots. Files are
//! only read when a candidate is loaded.

use eqmatch_core::{EqProfile, parse_parametric_eq};
use jwalk::WalkDir;
use std::path::{Path, PathBuf};

use crate::error::CatalogError;
use crate::paths::{model_name_from_path, source_label};
use crate::resolver::{Candidate, ProfileResolver, ResolveError, normalize_name, rank_entries};

/// Deepest directory level scanned below a root.
///
/// Symbolic links to directories are not followed.
const MAX_DEPTH: usize = 8;

/// One indexed result file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Model name taken from the file name.
    pub model: String,
    /// Parent directories relative to the root, e.g. `oratory1990/over-ear`.
    pub source: String,
    /// Full path of the result file.
    pub path: PathBuf,
    key: String,
}

/// Catalog over AutoEq result directories.
///
/// # Example
///
/// ```rust,no_run
/// use eqmatch_catalog::{DirectoryCatalog, ProfileResolver};
///
/// let catalog = DirectoryCatalog::open(["/opt/AutoEq/results"]);
/// let profile = catalog.resolve("Sennheiser HD 650").unwrap();
/// println!("{} bands", profile.len());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DirectoryCatalog {
    roots: Vec<PathBuf>,
    entries: Vec<CatalogEntry>,
}

impl DirectoryCatalog {
    /// Index the given roots in order.
    ///
    /// Roots that are missing or unreadable are skipped with a warning.
    pub fn open(roots: impl IntoIterator<Item = impl Into<PathBuf>>) -> Self {
        let roots: Vec<PathBuf> = roots.into_iter().map(Into::into).collect();
        let mut entries = Vec::new();

        for root in &roots {
            if !root.is_dir() {
                tracing::warn!(root = %root.display(), "catalog root not found, skipping");
                continue;
            }
            let before = entries.len();
            scan_root(root, &mut entries);
            tracing::debug!(
                root = %root.display(),
                profiles = entries.len() - before,
                "indexed catalog root"
            );
        }

        tracing::info!(roots = roots.len(), profiles = entries.len(), "catalog ready");
        Self { roots, entries }
    }

    /// Configured roots, including skipped ones.
    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// Indexed entries in scan order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of indexed files.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing was indexed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted, deduplicated model names, optionally filtered by a
    /// case-insensitive substring.
    pub fn models(&self, filter: Option<&str>) -> Vec<&str> {
        let filter = filter.map(normalize_name).filter(|f| !f.is_empty());

        let mut models: Vec<&str> = self
            .entries
            .iter()
            .filter(|e| filter.as_deref().is_none_or(|f| e.key.contains(f)))
            .map(|e| e.model.as_str())
            .collect();
        models.sort_unstable_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then(a.cmp(b)));
        models.dedup();
        models
    }
}

fn scan_root(root: &Path, out: &mut Vec<CatalogEntry>) {
    // symlinks are indexed only when they point at a file
    let walker = WalkDir::new(root)
        .follow_links(false)
        .skip_hidden(false)
        .max_depth(MAX_DEPTH)
        .sort(true);

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(root = %root.display(), error = %e, "cannot read catalog directory");
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() || (file_type.is_symlink() && !entry.path().is_file()) {
            continue;
        }

        let path = entry.path();
        if let Some(model) = model_name_from_path(&path) {
            out.push(CatalogEntry {
                source: source_label(root, &path, &model),
                key: normalize_name(&model),
                model,
                path,
            });
        }
    }
}

/// Read and parse one result file.
pub fn load_profile(path: impl AsRef<Path>) -> Result<EqProfile, CatalogError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|e| CatalogError::read_file(path, e))?;
    parse_parametric_eq(&text).map_err(|e| CatalogError::parse(path, e))
}

impl ProfileResolver for DirectoryCatalog {
    fn candidates(&self, name: &str) -> Result<Vec<Candidate>, ResolveError> {
        let query = normalize_name(name);
        if query.is_empty() {
            return Err(ResolveError::EmptyName);
        }

        let keys = self.entries.iter().enumerate().map(|(i, e)| (i, e.key.as_str()));
        Ok(rank_entries(&query, keys)
            .into_iter()
            .map(|(rank, i)| {
                let entry = &self.entries[i];
                Candidate {
                    model: entry.model.clone(),
                    source: entry.source.clone(),
                    rank,
                    path: Some(entry.path.clone()),
                    entry: i,
                }
            })
            .collect())
    }

    fn load(&self, candidate: &Candidate) -> Result<EqProfile, ResolveError> {
        let path = candidate
            .path
            .as_deref()
            .or_else(|| self.entries.get(candidate.entry).map(|e| e.path.as_path()))
            .ok_or_else(|| ResolveError::NotFound {
                name: candidate.model.clone(),
            })?;

        load_profile(path).map_err(|source| ResolveError::Load {
            model: candidate.model.clone(),
            source,
        })
    }
}
