//! Core types and data structures for the Formspec engine
//!
//! This module defines the fundamental data structures used throughout
//! the library for representing form fields, submissions, and normalized
//! validation results.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A raw submission as supplied by an external collaborator: field id
/// mapped to the raw, untrimmed string value.
pub type Submission = HashMap<String, String>;

/// The kind of a form field, determining the expected value shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Single-line text input
    #[serde(alias = "input")]
    ShortText,
    /// Multi-line text input
    #[serde(alias = "textarea")]
    LongText,
    /// Display-only markdown block; carries no submitted value
    #[serde(alias = "markdown")]
    MarkdownNote,
}

impl FieldKind {
    /// Whether fields of this kind accept a submitted value
    pub fn is_interactive(&self) -> bool {
        !matches!(self, Self::MarkdownNote)
    }

    /// The canonical wire name of this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ShortText => "short-text",
            Self::LongText => "long-text",
            Self::MarkdownNote => "markdown-note",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Definition of a single field in a form schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Unique identifier within the schema
    pub id: String,

    /// Field kind
    pub kind: FieldKind,

    /// Human-readable short label; required for interactive kinds,
    /// enforced when the schema is loaded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Optional longer hint shown alongside the field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Optional placeholder text shown in an empty input
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Whether a submission must carry a non-empty value for this field
    #[serde(default)]
    pub required: bool,

    /// Opaque display hint for long-text fields (e.g. "shell"). Passed
    /// through to external renderers, never interpreted here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<String>,
}

impl FieldDefinition {
    /// Create a new field definition with the given id and kind
    pub fn new<I: Into<String>>(id: I, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            kind,
            label: None,
            description: None,
            placeholder: None,
            required: false,
            render: None,
        }
    }

    /// Set the label
    pub fn with_label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the description hint
    pub fn with_description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the placeholder text
    pub fn with_placeholder<S: Into<String>>(mut self, placeholder: S) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Mark the field as required
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set the display hint
    pub fn with_render<S: Into<String>>(mut self, render: S) -> Self {
        self.render = Some(render.into());
        self
    }

    /// Whether this field accepts a submitted value
    pub fn is_interactive(&self) -> bool {
        self.kind.is_interactive()
    }
}

/// A frozen, normalized submission produced by a successful validation.
///
/// Values are trimmed of surrounding whitespace and keyed by field id;
/// only interactive fields declared in the schema can appear. The record
/// is never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatedSubmission {
    schema_id: String,
    values: BTreeMap<String, String>,
}

impl ValidatedSubmission {
    pub(crate) fn new<I: Into<String>>(schema_id: I, values: BTreeMap<String, String>) -> Self {
        Self {
            schema_id: schema_id.into(),
            values,
        }
    }

    /// Identifier of the schema this submission was validated against
    pub fn schema_id(&self) -> &str {
        &self.schema_id
    }

    /// The normalized values, keyed by field id
    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }

    /// Look up the normalized value for a field
    pub fn get(&self, id: &str) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Number of values present
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values are present
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
