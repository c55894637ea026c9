//! Form document loading and parsing functionality
//!
//! This module turns form-definition documents (YAML or JSON) into
//! [`FormDocument`]s and validated [`SchemaModel`](formspec_core::SchemaModel)s:
//! - YAML and JSON parsing with path-contextual errors
//! - wire-level field blocks decoded into core field definitions
//! - unknown top-level document keys preserved untouched
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

pub mod document;
pub mod error;
pub mod form_loader;
pub mod parser;

pub use document::{DocumentError, FieldBlock, FormDocument, Validations};
pub use error::{LoaderError, LoaderResult};
pub use form_loader::{FormLoader, LoaderConfig};
pub use parser::{Format, FormParser};
