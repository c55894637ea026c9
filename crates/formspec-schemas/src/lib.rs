//! Formspec Schemas - form-definition document loading
//!
//! This crate is the boundary surface of the Formspec engine: it parses
//! declarative form-definition documents (YAML or JSON) and decodes them
//! into the `formspec-core` schema model. Top-level document keys other
//! than the field list (display names, tag lists, host-platform
//! extensions) are preserved verbatim and never interpreted, so an
//! external issue-tracker collaborator can consume them untouched.
//!
//! # Quick Start
//!
//! ```rust
//! use formspec_schemas::{Format, FormDocument, FormParser};
//! use std::path::Path;
//!
//! let content = r#"
//! name: Bug report
//! fields:
//!   - kind: long-text
//!     id: what-happened
//!     label: What happened?
//!     validations:
//!       required: true
//! "#;
//!
//! let parser = FormParser::new();
//! let value = parser.parse_content(content, Format::Yaml, Path::new("bug-report.yaml"))?;
//! let document = FormDocument::from_value(value)?;
//! assert_eq!(document.extra["name"], "Bug report");
//!
//! let schema = document.to_model("bug-report")?;
//! assert_eq!(schema.interactive_fields().count(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Loading from disk goes through [`FormLoader`], which derives the
//! schema identifier from the document file stem and, by default, checks
//! the schema invariants at the boundary.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

pub mod loader;

// Re-export commonly used types for convenience
pub use loader::{
    DocumentError, FieldBlock, Format, FormDocument, FormLoader, FormParser, LoaderConfig,
    LoaderError, LoaderResult, Validations,
};
