//! JSON Schema validation of the editing buffer.

use serde_json::Value;

use crate::error::{InputKind, WorkbenchError};

/// One schema violation, located by a JSON-pointer-style path into the
/// document (empty for the document root).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    pub path: String,
    pub message: String,
}

/// The outcome of a validation run that got as far as evaluating the
/// schema. Category problems (empty or unparsable inputs, a schema that
/// does not compile) are errors, not outcomes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Vec<Violation>),
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    /// A display form: a success line, or one line per violation.
    pub fn to_message(&self) -> String {
        match self {
            ValidationOutcome::Valid => "JSON is valid against the schema".to_string(),
            ValidationOutcome::Invalid(violations) => {
                let lines: Vec<String> = violations
                    .iter()
                    .map(|violation| {
                        if violation.path.is_empty() {
                            violation.message.clone()
                        } else {
                            format!("{} {}", violation.path, violation.message)
                        }
                    })
                    .collect();
                lines.join("\n")
            }
        }
    }
}

/// Validate `document_text` against `schema_text`.
///
/// All violations are collected, not just the first, in the evaluator's
/// document order.
pub fn validate(
    schema_text: &str,
    document_text: &str,
) -> Result<ValidationOutcome, WorkbenchError> {
    if document_text.is_empty() {
        return Err(WorkbenchError::EmptyInput(InputKind::Document));
    }
    if schema_text.is_empty() {
        return Err(WorkbenchError::EmptyInput(InputKind::Schema));
    }

    let document: Value =
        serde_json::from_str(document_text).map_err(WorkbenchError::DocumentParse)?;
    let schema: Value = serde_json::from_str(schema_text).map_err(WorkbenchError::SchemaParse)?;

    let validator = jsonschema::validator_for(&schema)
        .map_err(|err| WorkbenchError::SchemaCompile(err.to_string()))?;

    let violations: Vec<Violation> = validator
        .iter_errors(&document)
        .map(|err| {
            let message = err.to_string();
            Violation {
                path: err.instance_path.to_string(),
                message,
            }
        })
        .collect();

    if violations.is_empty() {
        Ok(ValidationOutcome::Valid)
    } else {
        Ok(ValidationOutcome::Invalid(violations))
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
