//! Platform-specific paths for settings and AutoEq result catalogs.
//!
//! # Directory Structure
//!
//! - **Settings**: `~/.config/eqmatch/config.toml` (Linux), `~/Library/Application Support/eqmatch/config.toml` (macOS), `%APPDATA%\eqmatch\config.toml` (Windows)
//! - **User catalog**: `~/.local/share/eqmatch/results/` (Linux), `~/Library/Application Support/eqmatch/results/` (macOS), `%APPDATA%\eqmatch\results\` (Windows)
//! - **System catalog**: `/usr/share/eqmatch/results/` (Linux), `/Library/Application Support/eqmatch/results/` (macOS)
//!
//! A catalog is any directory tree holding AutoEq `<Model> ParametricEQ.txt`
//! files, such as the `results/` directory of an AutoEq checkout.

use std::path::{Path, PathBuf};

/// Application name used for directory paths.
const APP_NAME: &str = "eqmatch";

/// Subdirectory name for result catalogs.
const RESULTS_SUBDIR: &str = "results";

/// Settings file name inside the config directory.
const SETTINGS_FILE: &str = "config.toml";

/// File name suffix of an AutoEq parametric EQ result.
pub const PROFILE_SUFFIX: &str = " ParametricEQ.txt";

/// Returns the user-specific configuration directory.
///
/// Returns a fallback path if the config directory cannot be determined.
pub fn user_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Returns the default settings file path.
pub fn settings_path() -> PathBuf {
    user_config_dir().join(SETTINGS_FILE)
}

/// Returns the user-specific catalog directory.
///
/// # Platform Paths
///
/// - Linux: `~/.local/share/eqmatch/results/`
/// - macOS: `~/Library/Application Support/eqmatch/results/`
/// - Windows: `%APPDATA%\eqmatch\results\`
pub fn user_catalog_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
        .join(RESULTS_SUBDIR)
}

/// Returns the system-wide catalog directory.
///
/// # Platform Paths
///
/// - Linux: `/usr/share/eqmatch/results/`
/// - macOS: `/Library/Application Support/eqmatch/results/`
/// - Windows: `%PROGRAMDATA%\eqmatch\results\`
pub fn system_catalog_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        PathBuf::from("/usr/share").join(APP_NAME).join(RESULTS_SUBDIR)
    }
    #[cfg(target_os = "macos")]
    {
        PathBuf::from("/Library/Application Support")
            .join(APP_NAME)
            .join(RESULTS_SUBDIR)
    }
    #[cfg(target_os = "windows")]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("C:\\ProgramData"))
            .join(APP_NAME)
            .join(RESULTS_SUBDIR)
    }
    #[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
    {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_NAME)
            .join(RESULTS_SUBDIR)
    }
}

/// Catalog roots used when no settings file names any: user first, then system.
pub fn default_catalog_dirs() -> Vec<PathBuf> {
    vec![user_catalog_dir(), system_catalog_dir()]
}

/// Get the headphone model name from a result file path.
///
/// Returns `None` unless the file name ends in ` ParametricEQ.txt`.
///
/// # Example
///
/// ```rust
/// use eqmatch_catalog::paths::model_name_from_path;
/// use std::path::Path;
///
/// let name = model_name_from_path(Path::new("/results/HD 650/Sennheiser HD 650 ParametricEQ.txt"));
/// assert_eq!(name, Some("Sennheiser HD 650".to_string()));
/// ```
pub fn model_name_from_path(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|s| s.to_str())
        .and_then(|s| s.strip_suffix(PROFILE_SUFFIX))
        .filter(|s| !s.trim().is_empty())
        .map(|s| s.to_string())
}

/// Describe where a result file sits relative to its catalog root.
///
/// Gives the parent directories joined with `/`, minus a trailing directory
/// named after the model itself (AutoEq keeps one directory per model).
/// A file directly under the root has an empty source.
pub fn source_label(root: &Path, file: &Path, model: &str) -> String {
    let Some(parent) = file.parent() else {
        return String::new();
    };
    let Ok(rel) = parent.strip_prefix(root) else {
        return String::new();
    };

    let mut parts: Vec<String> = rel
        .components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect();
    if parts.last().is_some_and(|last| last == model) {
        parts.pop();
    }
    parts.join("/")
}
