//! Main form loader tying parsing and decoding together
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use crate::loader::{
    document::FormDocument,
    error::{LoaderError, LoaderResult},
    parser::{Format, FormParser},
};
use formspec_core::SchemaModel;
use std::path::Path;

/// Configuration for form loader behavior
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Whether [`FormLoader::load_form`] also checks that the document
    /// yields a loadable schema model, so malformed schemas fail at the
    /// boundary even when the caller only wants the raw document
    pub validate_model: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            validate_model: true,
        }
    }
}

/// Loads form-definition documents from disk into documents and models
#[derive(Debug, Default)]
pub struct FormLoader {
    config: LoaderConfig,
    parser: FormParser,
}

impl FormLoader {
    /// Create a new form loader with default configuration
    pub fn new() -> Self {
        Self::with_config(LoaderConfig::default())
    }

    /// Create a new form loader with custom configuration
    pub fn with_config(config: LoaderConfig) -> Self {
        Self {
            config,
            parser: FormParser::new(),
        }
    }

    /// The active configuration
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Load a form document, preserving uninterpreted top-level keys.
    ///
    /// Detects YAML/JSON from the file extension. With
    /// [`LoaderConfig::validate_model`] enabled (the default), the
    /// document's field blocks are additionally checked against the
    /// schema invariants so a malformed definition fails here rather
    /// than at first use.
    pub fn load_form(&self, path: &Path) -> LoaderResult<FormDocument> {
        let value = self.parser.parse_file(path)?;
        let document =
            FormDocument::from_value(value).map_err(|e| LoaderError::from_document(path, e))?;

        if self.config.validate_model {
            document
                .to_model(schema_id_for(path))
                .map_err(|e| LoaderError::from_document(path, e))?;
        }

        log::debug!(
            "loaded form document '{}' with {} field blocks",
            path.display(),
            document.fields.len()
        );
        Ok(document)
    }

    /// Load a form document and build its validated schema model.
    ///
    /// The schema identifier is the document file stem (e.g.
    /// `forms/bug-report.yaml` loads as schema id `bug-report`).
    pub fn load_model(&self, path: &Path) -> LoaderResult<SchemaModel> {
        let value = self.parser.parse_file(path)?;
        let document =
            FormDocument::from_value(value).map_err(|e| LoaderError::from_document(path, e))?;
        let model = document
            .to_model(schema_id_for(path))
            .map_err(|e| LoaderError::from_document(path, e))?;

        log::debug!(
            "loaded schema '{}' with {} interactive fields",
            model.schema_id(),
            model.interactive_fields().count()
        );
        Ok(model)
    }

    /// Build a schema model from in-memory document content.
    ///
    /// Useful for callers that receive documents over a boundary other
    /// than the filesystem; the schema identifier must be supplied.
    pub fn load_model_content(
        &self,
        content: &str,
        format: Format,
        schema_id: &str,
    ) -> LoaderResult<SchemaModel> {
        let path = Path::new("<content>");
        let value = self.parser.parse_content(content, format, path)?;
        let document =
            FormDocument::from_value(value).map_err(|e| LoaderError::from_document(path, e))?;
        document
            .to_model(schema_id)
            .map_err(|e| LoaderError::from_document(path, e))
    }
}

/// Schema identifier for a document path: the file stem
fn schema_id_for(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("form")
        .to_string()
}
