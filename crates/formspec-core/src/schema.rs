//! Loaded, immutable representation of a form's field definitions
//!
//! A [`SchemaModel`] is constructed once via [`SchemaModel::load`], which
//! enforces the structural invariants of a form definition, and is
//! read-only afterwards. It can be shared freely across threads: every
//! validation call only reads the schema.

use crate::error::{SchemaError, SchemaResult};
use crate::types::FieldDefinition;
use std::collections::HashMap;

/// An immutable, validated set of ordered field definitions
#[derive(Debug, Clone)]
pub struct SchemaModel {
    schema_id: String,
    fields: Vec<FieldDefinition>,
    index: HashMap<String, usize>,
}

impl SchemaModel {
    /// Load a schema from an ordered sequence of field definitions.
    ///
    /// Validates the structural invariants of the definition:
    /// - field ids must be unique ([`SchemaError::DuplicateField`])
    /// - interactive fields must carry a non-empty label
    ///   ([`SchemaError::MissingLabel`])
    /// - at least one interactive field must exist
    ///   ([`SchemaError::EmptySchema`])
    ///
    /// The first violation encountered, in field order, is returned.
    /// Schema errors are fatal: callers must not proceed to submission
    /// validation with a malformed schema.
    pub fn load<I: Into<String>>(schema_id: I, fields: Vec<FieldDefinition>) -> SchemaResult<Self> {
        let mut index = HashMap::with_capacity(fields.len());
        let mut interactive = 0usize;

        for (position, field) in fields.iter().enumerate() {
            if index.insert(field.id.clone(), position).is_some() {
                return Err(SchemaError::duplicate_field(&field.id));
            }

            if field.kind.is_interactive() {
                interactive += 1;
                let labeled = field
                    .label
                    .as_deref()
                    .is_some_and(|label| !label.trim().is_empty());
                if !labeled {
                    return Err(SchemaError::missing_label(&field.id));
                }
            }
        }

        if interactive == 0 {
            return Err(SchemaError::EmptySchema);
        }

        Ok(Self {
            schema_id: schema_id.into(),
            fields,
            index,
        })
    }

    /// Identifier of this schema, carried into validated submissions
    pub fn schema_id(&self) -> &str {
        &self.schema_id
    }

    /// All field definitions, in original document order
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Look up a field definition by id
    pub fn field(&self, id: &str) -> Option<&FieldDefinition> {
        self.index.get(id).map(|&position| &self.fields[position])
    }

    /// The interactive fields only, preserving original order
    pub fn interactive_fields(&self) -> impl Iterator<Item = &FieldDefinition> {
        self.fields
            .iter()
            .filter(|field| field.kind.is_interactive())
    }

    /// Total number of fields, display-only notes included
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema holds no fields at all
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
