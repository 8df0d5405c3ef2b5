use validator::{ValidationErrors, ValidationErrorsKind};

/// Domain error taxonomy shared by every layer.
///
/// Lower crates convert their own error enums into one of these variants;
/// the HTTP layer is the only place that maps them to status codes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Malformed or out-of-range input. Never reaches storage.
    #[error("{0}")]
    Validation(String),

    /// A referenced campaign, headline, image or creative is absent or
    /// belongs to another campaign.
    #[error("{0}")]
    NotFound(String),

    /// The generation service failed or returned an unusable payload.
    #[error("{0}")]
    Provider(String),

    /// A storage read or write failed.
    #[error("{0}")]
    Persistence(String),

    /// Every provider output was invalid or empty.
    #[error("{0}")]
    EmptyResult(String),
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(describe_validation_errors(&errors))
    }
}

/// Flatten `validator` errors into a single readable message.
///
/// Nested fields are reported with a dotted path (`context.tone`). Messages
/// are sorted so the output does not depend on hash-map iteration order.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut messages = Vec::new();
    collect_messages("", errors, &mut messages);
    messages.sort();
    if messages.is_empty() {
        "Invalid request body".to_string()
    } else {
        messages.join("; ")
    }
}

fn collect_messages(prefix: &str, errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for error in field_errors {
                    match &error.message {
                        Some(message) => out.push(format!("{path}: {message}")),
                        None => out.push(format!("{path}: invalid value ({})", error.code)),
                    }
                }
            }
            ValidationErrorsKind::Struct(inner) => collect_messages(&path, inner, out),
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_messages(&format!("{path}[{index}]"), inner, out);
                }
            }
        }
    }
}
