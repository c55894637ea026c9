//! Formspec Core - schema model and submission validation for declarative intake forms
//!
//! This crate provides the core functionality of the Formspec engine: an
//! immutable, validated [`SchemaModel`] built from ordered field
//! definitions, and a [`SubmissionValidator`] that checks candidate
//! submissions against it, producing either a frozen, normalized
//! [`ValidatedSubmission`] or the complete list of field-level errors.
//!
//! # Main Components
//!
//! - **Error Handling**: fatal [`SchemaError`]s at load time, recoverable
//!   [`ValidationErrors`] at submission time, built with `thiserror`
//! - **Core Types**: field definitions, kinds, and normalized submissions
//! - **Schema Model**: ordered, id-indexed, immutable field set
//! - **Submission Validation**: presence/shape rules applied in schema
//!   order with no short-circuiting
//!
//! Parsing form-definition documents (YAML/JSON) lives in the companion
//! `formspec-schemas` crate; this crate performs no I/O.
//!
//! # Example
//!
//! ```rust
//! use formspec_core::{FieldDefinition, FieldKind, SchemaModel, SubmissionValidator};
//! use std::collections::HashMap;
//!
//! let fields = vec![
//!     FieldDefinition::new("email", FieldKind::ShortText).with_label("Contact email"),
//!     FieldDefinition::new("what-happened", FieldKind::LongText)
//!         .with_label("What happened?")
//!         .with_required(true),
//! ];
//! let schema = SchemaModel::load("bug-report", fields)?;
//!
//! let mut submission = HashMap::new();
//! submission.insert("what-happened".to_string(), " crash on startup ".to_string());
//!
//! let validated = SubmissionValidator::new().validate(&schema, &submission)?;
//! assert_eq!(validated.get("what-happened"), Some("crash on startup"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod schema;
pub mod types;
pub mod validation;

// Re-export main types for convenience
pub use error::{
    FieldError, FieldErrorKind, SchemaError, SchemaResult, ValidationErrors, ValidationResult,
};
pub use schema::SchemaModel;
pub use types::{FieldDefinition, FieldKind, Submission, ValidatedSubmission};
pub use validation::{SubmissionValidator, ValidatorConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
