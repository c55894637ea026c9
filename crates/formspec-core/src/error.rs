//! Error types for the Formspec core library
//!
//! Two error families exist: [`SchemaError`] for fatal load-time problems
//! with a form definition, and [`ValidationErrors`] for recoverable,
//! user-correctable problems with a submitted set of values.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Result type for schema loading operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Result type for submission validation operations
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Fatal errors raised while loading a form definition into a
/// [`SchemaModel`](crate::SchemaModel).
///
/// Schema authoring is a design-time concern: a caller must not proceed
/// to submission validation with a malformed schema, and none of these
/// errors is retriable.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SchemaError {
    /// Two field blocks share the same id
    #[error("duplicate field id '{id}' in form definition")]
    DuplicateField { id: String },

    /// An interactive field has no label to display
    #[error("interactive field '{id}' is missing a label")]
    MissingLabel { id: String },

    /// The definition contains no field that accepts a submitted value
    #[error("form definition contains no interactive fields")]
    EmptySchema,
}

impl SchemaError {
    /// Create a duplicate-field error
    pub fn duplicate_field<I: Into<String>>(id: I) -> Self {
        Self::DuplicateField { id: id.into() }
    }

    /// Create a missing-label error
    pub fn missing_label<I: Into<String>>(id: I) -> Self {
        Self::MissingLabel { id: id.into() }
    }

    /// Get the field id associated with this error, if any
    pub fn field_id(&self) -> Option<&str> {
        match self {
            Self::DuplicateField { id } => Some(id),
            Self::MissingLabel { id } => Some(id),
            Self::EmptySchema => None,
        }
    }
}

/// The kind of problem found with a single submitted field value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// The field is required but the submission has no usable value for it
    MissingRequired,
    /// The submitted value exceeds the configured maximum length
    TooLong,
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingRequired => write!(f, "missing required value"),
            Self::TooLong => write!(f, "value too long"),
        }
    }
}

/// A validation problem attributed to one field of the schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// Id of the offending field
    pub id: String,
    /// What went wrong
    pub kind: FieldErrorKind,
}

impl FieldError {
    /// Create a field error
    pub fn new<I: Into<String>>(id: I, kind: FieldErrorKind) -> Self {
        Self {
            id: id.into(),
            kind,
        }
    }

    /// Create a missing-required error for a field
    pub fn missing_required<I: Into<String>>(id: I) -> Self {
        Self::new(id, FieldErrorKind::MissingRequired)
    }

    /// Create a too-long error for a field
    pub fn too_long<I: Into<String>>(id: I) -> Self {
        Self::new(id, FieldErrorKind::TooLong)
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.id, self.kind)
    }
}

/// The complete, ordered set of problems found in one submission.
///
/// Validation never fails partially: either a submission normalizes in
/// full, or the caller receives every offending field at once so that
/// user-facing feedback can be rendered in a single pass. Errors are
/// ordered by schema field order and the collection is never empty when
/// returned from [`SubmissionValidator::validate`](crate::SubmissionValidator::validate).
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// List of field-level errors, in schema field order
    pub errors: Vec<FieldError>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission failed validation:")?;
        for (i, error) in self.errors.iter().enumerate() {
            write!(f, "\n{}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl ValidationErrors {
    /// Create an empty collection
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Add an error to the collection
    pub fn add(&mut self, error: FieldError) {
        self.errors.push(error);
    }

    /// Check if there are any errors
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Get the number of errors
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Get a slice of all errors
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Consume self and return the inner list
    pub fn into_inner(self) -> Vec<FieldError> {
        self.errors
    }

    /// Check whether any error concerns the given field id
    pub fn contains_field(&self, id: &str) -> bool {
        self.errors.iter().any(|e| e.id == id)
    }

    /// Convert to a result - Ok if no errors, Err if any errors exist
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationErrors {
    fn default() -> Self {
        Self::new()
    }
}

impl From<FieldError> for ValidationErrors {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}

impl From<Vec<FieldError>> for ValidationErrors {
    fn from(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }
}
