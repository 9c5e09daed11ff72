//! Conversion of `validator` errors into plain messages

use validator::ValidationErrors;

/// Flatten validation errors into one message per failed rule.
///
/// Field errors use the rule's message when one is set and fall back to
/// `Invalid <field>`. Struct-level (schema) errors are reported under
/// `__all__` by the validator crate and keep their message as-is.
pub fn describe_validation_errors(errors: &ValidationErrors) -> Vec<String> {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |err| match &err.message {
                Some(msg) => msg.to_string(),
                None => format!("Invalid {}", field),
            })
        })
        .collect();

    // HashMap iteration order is unspecified
    messages.sort();
    messages
}
