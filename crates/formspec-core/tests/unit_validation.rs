//! Unit tests for end-to-end schema loading and submission validation
//!
//! These tests exercise the public API the way an external intake
//! collaborator would: build a schema, validate raw submissions, and
//! render the returned errors.

use formspec_core::{
    FieldDefinition, FieldError, FieldKind, SchemaError, SchemaModel, Submission,
    SubmissionValidator, ValidatorConfig,
};

fn bug_report_schema() -> SchemaModel {
    SchemaModel::load(
        "bug-report",
        vec![
            FieldDefinition::new("intro", FieldKind::MarkdownNote)
                .with_description("Thanks for taking the time to fill out this report!"),
            FieldDefinition::new("email", FieldKind::ShortText)
                .with_label("Contact email")
                .with_placeholder("you@example.com"),
            FieldDefinition::new("what-happened", FieldKind::LongText)
                .with_label("What happened?")
                .with_required(true),
            FieldDefinition::new("logs", FieldKind::LongText)
                .with_label("Relevant log output")
                .with_render("shell"),
        ],
    )
    .unwrap()
}

fn submission(entries: &[(&str, &str)]) -> Submission {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod schema_loading {
    use super::*;

    #[test]
    fn valid_schema_loads() {
        let schema = bug_report_schema();
        assert_eq!(schema.schema_id(), "bug-report");
        assert_eq!(schema.fields().len(), 4);
        assert_eq!(schema.interactive_fields().count(), 3);
    }

    #[test]
    fn schema_with_only_notes_is_rejected() {
        let result = SchemaModel::load(
            "empty",
            vec![FieldDefinition::new("intro", FieldKind::MarkdownNote)],
        );
        assert_eq!(result.unwrap_err(), SchemaError::EmptySchema);
    }

    #[test]
    fn schema_with_repeated_id_is_rejected() {
        let result = SchemaModel::load(
            "dup",
            vec![
                FieldDefinition::new("logs", FieldKind::LongText).with_label("Logs"),
                FieldDefinition::new("logs", FieldKind::LongText).with_label("More logs"),
            ],
        );
        assert_eq!(result.unwrap_err(), SchemaError::duplicate_field("logs"));
    }

    #[test]
    fn schema_is_shareable_across_threads() {
        let schema = std::sync::Arc::new(bug_report_schema());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let schema = std::sync::Arc::clone(&schema);
                std::thread::spawn(move || {
                    let validator = SubmissionValidator::new();
                    let sub = submission(&[("what-happened", "crash")]);
                    let result = validator.validate(&schema, &sub).unwrap();
                    assert_eq!(result.get("what-happened"), Some("crash"));
                    i
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
    }
}

#[cfg(test)]
mod submission_validation {
    use super::*;

    // The worked example: optional email, required what-happened,
    // optional logs.
    #[test]
    fn worked_example_success() {
        let schema = bug_report_schema();
        let validator = SubmissionValidator::new();

        let result = validator
            .validate(&schema, &submission(&[("what-happened", "crash on startup")]))
            .unwrap();

        assert_eq!(result.schema_id(), "bug-report");
        assert_eq!(result.values().len(), 1);
        assert_eq!(result.get("what-happened"), Some("crash on startup"));
    }

    #[test]
    fn worked_example_failure() {
        let schema = bug_report_schema();
        let validator = SubmissionValidator::new();

        let errors = validator.validate(&schema, &submission(&[])).unwrap_err();
        assert_eq!(
            errors.into_inner(),
            vec![FieldError::missing_required("what-happened")]
        );
    }

    #[test]
    fn note_fields_never_appear_in_results() {
        let schema = bug_report_schema();
        let validator = SubmissionValidator::new();

        // Even a submission that names the note id is ignored for it.
        let result = validator
            .validate(
                &schema,
                &submission(&[("what-happened", "crash"), ("intro", "ignored")]),
            )
            .unwrap();
        assert_eq!(result.get("intro"), None);
    }

    #[test]
    fn all_interactive_fields_can_be_submitted() {
        let schema = bug_report_schema();
        let validator = SubmissionValidator::new();

        let result = validator
            .validate(
                &schema,
                &submission(&[
                    ("email", "user@example.com"),
                    ("what-happened", "crash on startup"),
                    ("logs", "thread 'main' panicked"),
                ]),
            )
            .unwrap();

        let ids: Vec<&str> = result.values().keys().map(String::as_str).collect();
        assert_eq!(ids, ["email", "logs", "what-happened"]);
    }

    #[test]
    fn length_cap_reports_every_oversized_field() {
        let schema = bug_report_schema();
        let validator =
            SubmissionValidator::with_config(ValidatorConfig::default().with_max_value_len(5));

        let errors = validator
            .validate(
                &schema,
                &submission(&[
                    ("email", "user@example.com"),
                    ("what-happened", "crash on startup"),
                ]),
            )
            .unwrap_err();

        assert_eq!(
            errors.into_inner(),
            vec![
                FieldError::too_long("email"),
                FieldError::too_long("what-happened"),
            ]
        );
    }

    #[test]
    fn errors_render_for_user_feedback() {
        let schema = bug_report_schema();
        let validator = SubmissionValidator::new();

        let errors = validator.validate(&schema, &submission(&[])).unwrap_err();
        let rendered = errors.to_string();
        assert!(rendered.contains("submission failed validation"));
        assert!(rendered.contains("what-happened: missing required value"));
    }

    #[test]
    fn validated_submission_serializes() {
        let schema = bug_report_schema();
        let validator = SubmissionValidator::new();

        let result = validator
            .validate(&schema, &submission(&[("what-happened", "crash")]))
            .unwrap();

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["schema_id"], "bug-report");
        assert_eq!(json["values"]["what-happened"], "crash");
    }
}
