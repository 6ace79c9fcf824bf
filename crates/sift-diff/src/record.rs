// File: sift-diff/src/record.rs
// Purpose: Dynamic field view over record-shaped values

use indexmap::IndexMap;
use serde::{ser, Serialize};
use serde_json::{Map, Value};

use crate::error::DiffError;
use crate::finite::has_non_finite;

/// The fields a record holds, in declaration order
///
/// Only present fields are stored. An absent field has no entry, which is
/// different from a field holding `null`.
pub type Record = IndexMap<String, Value>;

/// Types that expose their fields for diffing
///
/// Usually derived:
///
/// ```
/// use sift_diff::Diffable;
///
/// #[derive(serde::Serialize, Diffable)]
/// struct Data {
///     id: String,
///     name: Option<String>,
///     count: u32,
/// }
///
/// let data = Data { id: "1".into(), name: None, count: 0 };
/// let record = data.to_record().unwrap();
/// assert_eq!(record.keys().collect::<Vec<_>>(), vec!["id", "count"]);
/// ```
pub trait Diffable {
    /// Snapshot of the present fields
    fn to_record(&self) -> Result<Record, DiffError>;
}

/// Converts one field value for comparison
///
/// Used by `#[derive(Diffable)]`. NaN and infinite floats are rejected: JSON
/// would turn them into `null`, hiding changes between them.
pub fn field_value<T: Serialize + ?Sized>(field: &str, value: &T) -> Result<Value, DiffError> {
    let converted = serde_json::to_value(value).map_err(|source| DiffError::Field {
        field: field.to_string(),
        source,
    })?;

    if has_non_finite(value) {
        return Err(DiffError::Field {
            field: field.to_string(),
            source: ser::Error::custom("NaN or infinite float cannot be compared"),
        });
    }

    Ok(converted)
}

/// Name of a JSON value's kind, for error messages
pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl Diffable for Record {
    fn to_record(&self) -> Result<Record, DiffError> {
        Ok(self.clone())
    }
}

impl Diffable for Map<String, Value> {
    fn to_record(&self) -> Result<Record, DiffError> {
        Ok(self
            .iter()
            .map(|(field, value)| (field.clone(), value.clone()))
            .collect())
    }
}

impl Diffable for Value {
    fn to_record(&self) -> Result<Record, DiffError> {
        match self {
            Value::Object(map) => map.to_record(),
            other => Err(DiffError::NotARecord {
                found: kind_of(other),
            }),
        }
    }
}

impl<T: Diffable + ?Sized> Diffable for Box<T> {
    fn to_record(&self) -> Result<Record, DiffError> {
        (**self).to_record()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_object_value_is_a_record() {
        let record = json!({"id": "1", "tags": []}).to_record().unwrap();
        assert_eq!(record.get("id"), Some(&json!("1")));
        assert_eq!(record.get("tags"), Some(&json!([])));
    }

    #[test]
    fn test_null_field_is_present() {
        let record = json!({"name": null}).to_record().unwrap();
        assert!(record.contains_key("name"));
    }

    #[test]
    fn test_non_object_values_are_rejected() {
        for (value, kind) in [
            (json!(null), "null"),
            (json!(1), "number"),
            (json!("x"), "string"),
            (json!([1]), "array"),
            (json!(false), "boolean"),
        ] {
            let err = value.to_record().unwrap_err();
            assert!(matches!(err, DiffError::NotARecord { found } if found == kind));
        }
    }

    #[test]
    fn test_field_value_serializes() {
        assert_eq!(field_value("count", &3u8).unwrap(), json!(3));
    }

    #[test]
    fn test_field_value_rejects_non_finite() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = field_value("reading", &value).unwrap_err();
            assert!(matches!(err, DiffError::Field { ref field, .. } if field == "reading"));
        }
        assert!(field_value("readings", &vec![1.0, f64::NAN]).is_err());
    }
}
