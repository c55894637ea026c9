//! Wire-level form document model
//!
//! A [`FormDocument`] is the parsed shape of a form-definition document:
//! an ordered list of field blocks plus every other top-level key,
//! preserved verbatim. Only the field list is interpreted here; display
//! names, tag lists, and any unknown keys pass through untouched for the
//! external issue-tracker collaborator to consume.
//!
//! Copyright (c) 2025 Formspec Team
//! Licensed under the Apache-2.0 license

use formspec_core::{FieldDefinition, FieldKind, SchemaError, SchemaModel};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Errors raised while decoding a document into core types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    /// The document root is not a key/value mapping
    #[error("document root must be a mapping")]
    NotAnObject,

    /// The document has no field list at all
    #[error("document has no 'fields' list")]
    MissingFieldList,

    /// The field list exists but one of its blocks does not decode
    #[error("malformed field list: {reason}")]
    InvalidFieldList { reason: String },

    /// An interactive field block carries no id
    #[error("field block {index} ({kind}) is missing an id")]
    MissingFieldId { index: usize, kind: FieldKind },

    /// The decoded fields violate a schema invariant
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Validation flags nested under a field block's `validations` key
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validations {
    /// Whether a submission must carry a value for this field
    #[serde(default)]
    pub required: bool,
}

/// One field block as it appears in a form-definition document.
///
/// This is the wire-level shape: the id is optional (display-only note
/// blocks may omit it) and the required flag sits in a nested
/// [`Validations`] sub-block. [`FieldBlock::to_definition`] produces the
/// flattened core [`FieldDefinition`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldBlock {
    /// Field kind; accepts the host-platform spellings "input",
    /// "textarea" and "markdown" as aliases
    #[serde(alias = "type")]
    pub kind: FieldKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Opaque display hint, passed through uninterpreted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render: Option<String>,

    #[serde(default)]
    pub validations: Validations,
}

impl FieldBlock {
    /// Convert this block into a core field definition.
    ///
    /// `index` is the block's position in the document, used to
    /// synthesize stable ids for note blocks that omit one. Interactive
    /// blocks must carry an explicit id.
    pub fn to_definition(&self, index: usize) -> Result<FieldDefinition, DocumentError> {
        let interactive = self.kind.is_interactive();
        let id = match (&self.id, interactive) {
            (Some(id), _) => id.clone(),
            (None, false) => format!("note-{index}"),
            (None, true) => {
                return Err(DocumentError::MissingFieldId {
                    index,
                    kind: self.kind,
                })
            }
        };

        let mut field = FieldDefinition::new(id, self.kind);
        field.label = self.label.clone();
        field.description = self.description.clone();
        field.placeholder = self.placeholder.clone();
        field.render = self.render.clone();
        // Display-only notes are never required, whatever the document says.
        field.required = interactive && self.validations.required;
        Ok(field)
    }
}

/// A parsed form-definition document
#[derive(Debug, Clone, PartialEq)]
pub struct FormDocument {
    /// Ordered field blocks from the document's `fields` (or `body`) list
    pub fields: Vec<FieldBlock>,

    /// Every other top-level key of the document, preserved verbatim.
    /// Display names, categorical tag lists and unknown extensions all
    /// land here; none of them is semantically interpreted by this crate.
    pub extra: serde_json::Map<String, Value>,
}

impl FormDocument {
    /// Decode a parsed document value.
    ///
    /// The field list is read from the `fields` key, falling back to the
    /// host-platform spelling `body`. Everything else stays in
    /// [`FormDocument::extra`].
    pub fn from_value(value: Value) -> Result<Self, DocumentError> {
        let Value::Object(mut map) = value else {
            return Err(DocumentError::NotAnObject);
        };

        let list = map
            .remove("fields")
            .or_else(|| map.remove("body"))
            .ok_or(DocumentError::MissingFieldList)?;

        let fields: Vec<FieldBlock> = serde_json::from_value(list)
            .map_err(|e| DocumentError::InvalidFieldList {
                reason: e.to_string(),
            })?;

        Ok(Self { fields, extra: map })
    }

    /// Convert the field blocks into core field definitions, in order
    pub fn field_definitions(&self) -> Result<Vec<FieldDefinition>, DocumentError> {
        self.fields
            .iter()
            .enumerate()
            .map(|(index, block)| block.to_definition(index))
            .collect()
    }

    /// Build the validated, immutable schema model for this document.
    ///
    /// The schema identifier is supplied by the caller; the loader uses
    /// the document file stem so the document's own display name stays
    /// uninterpreted pass-through data.
    pub fn to_model<I: Into<String>>(&self, schema_id: I) -> Result<SchemaModel, DocumentError> {
        let fields = self.field_definitions()?;
        Ok(SchemaModel::load(schema_id, fields)?)
    }
}
