//! Error types for form document loading operations
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use crate::loader::document::DocumentError;
use formspec_core::SchemaError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Error types for form document loading operations
#[derive(Error, Debug)]
pub enum LoaderError {
    /// File I/O errors
    #[error("Failed to read file '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// YAML parsing errors
    #[error("Failed to parse YAML file '{path}': {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// JSON parsing errors
    #[error("Failed to parse JSON file '{path}': {source}")]
    JsonParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// Unsupported file format
    #[error("Unsupported file format for '{path}'. Expected .yaml, .yml, or .json")]
    UnsupportedFormat { path: PathBuf },

    /// Structurally malformed form document
    #[error("Malformed form document '{path}': {reason}")]
    Document { path: PathBuf, reason: String },

    /// The document parsed but violates a schema invariant
    #[error("Invalid schema in '{path}': {source}")]
    Schema {
        path: PathBuf,
        source: SchemaError,
    },
}

impl LoaderError {
    /// Create an I/O error with path context
    pub fn io_error(path: PathBuf, error: std::io::Error) -> Self {
        Self::Io {
            path,
            source: error,
        }
    }

    /// Create a YAML parsing error with path context
    pub fn yaml_parse_error(path: PathBuf, error: serde_yaml::Error) -> Self {
        Self::YamlParse {
            path,
            source: error,
        }
    }

    /// Create a JSON parsing error with path context
    pub fn json_parse_error(path: PathBuf, error: serde_json::Error) -> Self {
        Self::JsonParse {
            path,
            source: error,
        }
    }

    /// Create an unsupported format error
    pub fn unsupported_format(path: PathBuf) -> Self {
        Self::UnsupportedFormat { path }
    }

    /// Create a malformed document error
    pub fn document_error(path: PathBuf, reason: String) -> Self {
        Self::Document { path, reason }
    }

    /// Attach path context to a document-level error, routing schema
    /// invariant violations to their own variant
    pub fn from_document(path: &Path, error: DocumentError) -> Self {
        match error {
            DocumentError::Schema(source) => Self::Schema {
                path: path.to_path_buf(),
                source,
            },
            other => Self::Document {
                path: path.to_path_buf(),
                reason: other.to_string(),
            },
        }
    }

    /// Get the path associated with this error
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Io { path, .. } => path,
            Self::YamlParse { path, .. } => path,
            Self::JsonParse { path, .. } => path,
            Self::UnsupportedFormat { path } => path,
            Self::Document { path, .. } => path,
            Self::Schema { path, .. } => path,
        }
    }
}
