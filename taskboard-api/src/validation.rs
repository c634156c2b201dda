/// Request payload validation
///
/// Pure functions over a raw JSON payload. Handlers accept their bodies as
/// `serde_json::Value` so this layer, not the deserializer, owns the failure
/// messages: the caller gets a field-specific error instead of a generic
/// deserialization rejection.
///
/// # Rules
///
/// - Presence (create paths): every required field must be provided and
///   truthy. Absent keys, null, empty strings, zero and false all count as
///   not provided. The failure is one combined message naming all required
///   fields, not a per-field enumeration.
/// - Type: a present field must be a JSON string; on mismatch the failure
///   names that field.
/// - Non-empty (update paths): a provided field must be a string with at
///   least one character. An omitted field stays `None`, which is distinct
///   from provided-but-empty.
///
/// Validation short-circuits at the first failing rule in field declaration
/// order; it never collects multiple errors.

use crate::error::ApiError;
use serde_json::Value;

/// Returns true when a JSON value counts as not provided for a required field
fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(Value::Number(n)) => n.as_f64() == Some(0.0),
        Some(Value::Bool(b)) => !b,
        Some(_) => false,
    }
}

/// Presence rule for create payloads
///
/// Fails with `message` if any of `fields` is missing from `payload`.
pub fn require_all(payload: &Value, fields: &[&str], message: &str) -> Result<(), ApiError> {
    if fields.iter().any(|field| is_missing(payload.get(*field))) {
        return Err(ApiError::Validation(message.to_string()));
    }
    Ok(())
}

/// Type rule for a required field
///
/// Call after [`require_all`] has confirmed presence. Returns the string
/// value, or a failure naming the field when it holds any other JSON type.
pub fn string_field(payload: &Value, field: &str) -> Result<String, ApiError> {
    match payload.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        _ => Err(ApiError::Validation(format!(
            "'{field}' deve ser uma string."
        ))),
    }
}

/// Type and non-empty rules for an optional update field
///
/// An absent key is `Ok(None)`. A present value must be a string (null
/// included counts as provided) and must have at least one character.
pub fn optional_string(payload: &Value, field: &str) -> Result<Option<String>, ApiError> {
    match payload.get(field) {
        None => Ok(None),
        Some(Value::String(s)) if !s.is_empty() => Ok(Some(s.clone())),
        Some(Value::String(_)) => Err(ApiError::Validation(format!(
            "'{field}' deve conter no mínimo 1 caractere."
        ))),
        Some(_) => Err(ApiError::Validation(format!(
            "'{field}' deve ser uma string."
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const MESSAGE: &str = "todos os dados são obrigatórios.";

    fn message_of(err: ApiError) -> String {
        match err {
            ApiError::Validation(message) => message,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_require_all_accepts_complete_payload() {
        let payload = json!({"id": "u1", "name": "Astrodev"});
        assert!(require_all(&payload, &["id", "name"], MESSAGE).is_ok());
    }

    #[test]
    fn test_require_all_combined_message_for_absent_field() {
        let payload = json!({"id": "u1"});
        let err = require_all(&payload, &["id", "name"], MESSAGE).unwrap_err();
        assert_eq!(message_of(err), MESSAGE);
    }

    #[test]
    fn test_require_all_treats_falsy_values_as_missing() {
        for value in [json!(null), json!(""), json!(0), json!(false)] {
            let payload = json!({ "id": value });
            assert!(require_all(&payload, &["id"], MESSAGE).is_err());
        }
    }

    #[test]
    fn test_require_all_accepts_truthy_non_strings() {
        // A truthy number passes presence; the type rule rejects it later.
        let payload = json!({"id": 7});
        assert!(require_all(&payload, &["id"], MESSAGE).is_ok());
    }

    #[test]
    fn test_string_field_returns_value() {
        let payload = json!({"id": "u1"});
        assert_eq!(string_field(&payload, "id").unwrap(), "u1");
    }

    #[test]
    fn test_string_field_names_the_field_on_mismatch() {
        let payload = json!({"id": 7});
        let err = string_field(&payload, "id").unwrap_err();
        assert_eq!(message_of(err), "'id' deve ser uma string.");
    }

    #[test]
    fn test_optional_string_absent_is_none() {
        let payload = json!({});
        assert_eq!(optional_string(&payload, "title").unwrap(), None);
    }

    #[test]
    fn test_optional_string_provided_value() {
        let payload = json!({"title": "Write spec v2"});
        assert_eq!(
            optional_string(&payload, "title").unwrap(),
            Some("Write spec v2".to_string())
        );
    }

    #[test]
    fn test_optional_string_empty_is_rejected_not_treated_as_absent() {
        let payload = json!({"title": ""});
        let err = optional_string(&payload, "title").unwrap_err();
        assert_eq!(message_of(err), "'title' deve conter no mínimo 1 caractere.");
    }

    #[test]
    fn test_optional_string_null_counts_as_provided() {
        let payload = json!({"title": null});
        let err = optional_string(&payload, "title").unwrap_err();
        assert_eq!(message_of(err), "'title' deve ser uma string.");
    }

    #[test]
    fn test_optional_string_non_string_is_type_error() {
        let payload = json!({"title": ["a"]});
        let err = optional_string(&payload, "title").unwrap_err();
        assert_eq!(message_of(err), "'title' deve ser uma string.");
    }
}
