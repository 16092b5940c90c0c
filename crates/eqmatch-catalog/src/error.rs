//! Error types for catalog and settings operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading profiles or settings.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        /// Path of the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a file
    #[error("failed to write file '{path}': {source}")]
    WriteFile {
        /// Path of the file that could not be written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Profile file is not valid `ParametricEQ.txt`
    #[error("failed to parse profile '{path}': {source}")]
    Parse {
        /// Path of the malformed profile.
        path: PathBuf,
        /// Line-level parse failure.
        #[source]
        source: eqmatch_core::ParseError,
    },

    /// Failed to parse TOML
    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to serialize TOML
    #[error("failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Failed to create directory
    #[error("failed to create directory '{path}': {source}")]
    CreateDir {
        /// Path of the directory that could not be created.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl CatalogError {
    /// Create a read file error.
    pub fn read_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::ReadFile {
            path: path.into(),
            source,
        }
    }

    /// Create a write file error.
    pub fn write_file(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::WriteFile {
            path: path.into(),
            source,
        }
    }

    /// Create a profile parse error.
    pub fn parse(path: impl Into<PathBuf>, source: eqmatch_core::ParseError) -> Self {
        CatalogError::Parse {
            path: path.into(),
            source,
        }
    }

    /// Create a create directory error.
    pub fn create_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        CatalogError::CreateDir {
            path: path.into(),
            source,
        }
    }
}
