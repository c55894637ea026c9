//! Submission validation against a loaded schema
//!
//! [`SubmissionValidator`] applies per-field presence and shape rules to
//! a candidate submission and produces either a frozen, normalized
//! [`ValidatedSubmission`] or the complete list of field-level errors.
//! Validation is pure and deterministic: no I/O, no shared mutable
//! state, and the same (schema, submission) pair always yields the same
//! result.

use crate::error::{FieldError, ValidationErrors};
use crate::schema::SchemaModel;
use crate::types::{Submission, ValidatedSubmission};
use std::collections::BTreeMap;

/// Configuration for submission validation behavior
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Maximum accepted length of a trimmed value, in characters.
    /// `None` leaves values unconstrained.
    pub max_value_len: Option<usize>,
}

impl ValidatorConfig {
    /// Cap accepted values at `max` characters
    pub fn with_max_value_len(mut self, max: usize) -> Self {
        self.max_value_len = Some(max);
        self
    }
}

/// Validates candidate submissions against a [`SchemaModel`]
#[derive(Debug, Clone, Default)]
pub struct SubmissionValidator {
    config: ValidatorConfig,
}

impl SubmissionValidator {
    /// Create a validator with default configuration (no length cap)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom configuration
    pub fn with_config(config: ValidatorConfig) -> Self {
        Self { config }
    }

    /// The active configuration
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Validate a submission against a schema.
    ///
    /// Interactive fields are checked in schema order, and every field is
    /// checked even after the first failure, so the returned error list
    /// is complete in one pass:
    ///
    /// - a required field with no entry, or a whitespace-only entry,
    ///   records [`FieldErrorKind::MissingRequired`](crate::FieldErrorKind::MissingRequired)
    /// - an entry whose trimmed value exceeds the configured maximum
    ///   length records [`FieldErrorKind::TooLong`](crate::FieldErrorKind::TooLong)
    /// - accepted values are trimmed of surrounding whitespace
    ///
    /// Submission entries for fields the schema does not declare are
    /// ignored, never an error, to stay forward compatible with unknown
    /// extra inputs. Optional fields with absent or whitespace-only
    /// entries simply do not appear in the result.
    pub fn validate(
        &self,
        schema: &SchemaModel,
        submission: &Submission,
    ) -> Result<ValidatedSubmission, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        let mut values = BTreeMap::new();

        for field in schema.interactive_fields() {
            let trimmed = submission.get(&field.id).map(|raw| raw.trim());
            match trimmed {
                None | Some("") => {
                    if field.required {
                        errors.add(FieldError::missing_required(&field.id));
                    }
                }
                Some(value) => {
                    if self
                        .config
                        .max_value_len
                        .is_some_and(|max| value.chars().count() > max)
                    {
                        errors.add(FieldError::too_long(&field.id));
                    } else {
                        values.insert(field.id.clone(), value.to_string());
                    }
                }
            }
        }

        for key in submission.keys() {
            let declared = schema
                .field(key)
                .is_some_and(|field| field.kind.is_interactive());
            if !declared {
                log::debug!("ignoring submission entry for undeclared field '{key}'");
            }
        }

        if errors.is_empty() {
            Ok(ValidatedSubmission::new(schema.schema_id(), values))
        } else {
            Err(errors)
        }
    }
}
