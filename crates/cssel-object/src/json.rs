//! JSON encoding of plain data and materialization of schema-bound objects.

use cssel_common::warning::warn_once;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ObjectError;
use crate::object::Object;
use crate::schema::Schema;

/// Encode `value` as compact JSON.
///
/// # Errors
///
/// Returns [`ObjectError::Encode`] if `value` cannot be represented in JSON
/// (for example a map with non-string keys).
pub fn serialize<T: Serialize + ?Sized>(value: &T) -> Result<String, ObjectError> {
    serde_json::to_string(value).map_err(ObjectError::Encode)
}

/// Parse `text` and build an [`Object`] bound to `schema`.
///
/// Every top-level field of the input is copied with the descriptor the
/// schema assigns it.
///
/// # Errors
///
/// - [`ObjectError::MalformedInput`] if `text` is not valid JSON
/// - [`ObjectError::NotAnObject`] if the top level is not a JSON object
/// - [`ObjectError::MissingField`] if a field the schema requires is absent
pub fn materialize(schema: &Schema, text: &str) -> Result<Object, ObjectError> {
    let value: Value = serde_json::from_str(text).map_err(ObjectError::MalformedInput)?;
    let fields = match value {
        Value::Object(fields) => fields,
        other => {
            return Err(ObjectError::NotAnObject {
                found: json_type(&other),
            });
        }
    };

    if let Some(field) = schema.required().find(|name| !fields.contains_key(*name)) {
        return Err(ObjectError::MissingField {
            field: field.to_string(),
        });
    }

    for (name, _) in schema.overrides() {
        if !fields.contains_key(name) {
            warn_once(
                "Object",
                &format!(
                    "schema '{}' describes field '{name}' but the input has none",
                    schema.name()
                ),
            );
        }
    }

    let mut object = Object::new(schema.name());
    for (name, value) in fields {
        let descriptor = schema.descriptor_for(&name);
        // Keys of a decoded JSON object are unique, so no redefinition occurs.
        object.define(name, value, descriptor)?;
    }
    Ok(object)
}

/// Parse `text` straight into a Rust type.
///
/// # Errors
///
/// Returns [`ObjectError::MalformedInput`] if `text` is not valid JSON or does
/// not have the shape of `T`.
pub fn materialize_as<T: DeserializeOwned>(text: &str) -> Result<T, ObjectError> {
    serde_json::from_str(text).map_err(ObjectError::MalformedInput)
}

const fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
