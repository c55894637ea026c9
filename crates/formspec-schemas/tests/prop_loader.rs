//! Property-based tests for form document decoding
//!
//! These tests verify that decoding preserves pass-through data and
//! upholds the schema invariants across generated documents.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use formspec_schemas::FormDocument;

/// Strategy for a field block value; interactive blocks always carry an
/// id and label so the resulting schema is loadable.
fn block_strategy(index: usize) -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(json!({
            "kind": "markdown-note",
            "description": "a note"
        })),
        (any::<bool>()).prop_map(move |required| json!({
            "kind": "short-text",
            "id": format!("short-{index}"),
            "label": "Short",
            "validations": {"required": required}
        })),
        (any::<bool>()).prop_map(move |required| json!({
            "kind": "long-text",
            "id": format!("long-{index}"),
            "label": "Long",
            "validations": {"required": required}
        })),
    ]
}

fn blocks_strategy() -> impl Strategy<Value = Vec<Value>> {
    (1usize..8).prop_flat_map(|len| {
        (0..len)
            .map(|index| block_strategy(index).boxed())
            .collect::<Vec<_>>()
    })
}

/// Strategy for pass-through top-level keys (never the field list keys)
fn extra_strategy() -> impl Strategy<Value = Map<String, Value>> {
    proptest::collection::hash_map(
        "[a-z][a-z0-9_]{2,12}",
        prop_oneof![
            "[a-zA-Z0-9 ]{0,20}".prop_map(Value::String),
            any::<i64>().prop_map(|n| Value::Number(n.into())),
            any::<bool>().prop_map(Value::Bool),
        ],
        0..5,
    )
    .prop_map(|m| {
        m.into_iter()
            .filter(|(k, _)| k != "fields" && k != "body")
            .collect()
    })
}

proptest! {
    /// Every top-level key other than the field list survives decoding
    /// byte for byte.
    #[test]
    fn extra_keys_pass_through_untouched(blocks in blocks_strategy(), extra in extra_strategy()) {
        let mut root = extra.clone();
        root.insert("fields".to_string(), Value::Array(blocks));

        let document = FormDocument::from_value(Value::Object(root)).unwrap();
        prop_assert_eq!(document.extra, extra);
    }

    /// Documents whose interactive blocks are labeled and uniquely
    /// identified always yield a loadable model when at least one
    /// interactive block exists, and the model reflects the document.
    #[test]
    fn well_formed_documents_load(blocks in blocks_strategy()) {
        let interactive = blocks
            .iter()
            .filter(|b| b["kind"] != "markdown-note")
            .count();

        let document = FormDocument::from_value(json!({ "fields": blocks })).unwrap();
        let result = document.to_model("generated");

        if interactive == 0 {
            prop_assert!(result.is_err());
        } else {
            let model = result.unwrap();
            prop_assert_eq!(model.interactive_fields().count(), interactive);
            prop_assert_eq!(model.len(), document.fields.len());
        }
    }

    /// Note blocks get stable synthesized ids based on their position.
    #[test]
    fn note_ids_are_position_stable(blocks in blocks_strategy()) {
        let document = FormDocument::from_value(json!({ "fields": blocks })).unwrap();
        // Generated interactive blocks always carry ids, so conversion
        // cannot fail.
        let definitions = document.field_definitions().unwrap();

        for (index, definition) in definitions.iter().enumerate() {
            if !definition.is_interactive() {
                prop_assert_eq!(definition.id.clone(), format!("note-{index}"));
            }
        }
    }
}
