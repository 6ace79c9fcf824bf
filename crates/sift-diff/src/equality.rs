// File: sift-diff/src/equality.rs
// Purpose: Field value comparison modes and diff options

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// How two field values are compared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Equality {
    /// Scalars compare by value, arrays and objects by identity
    ///
    /// Two distinct records never share a nested container, so a nested
    /// array or object is always reported as changed between them.
    Strict,
    /// Nested arrays and objects compare by contents
    Structural,
}

impl Default for Equality {
    fn default() -> Self {
        Self::Strict
    }
}

impl Equality {
    /// Whether `old` and `new` count as the same value
    pub fn same(&self, old: &Value, new: &Value) -> bool {
        match self {
            Equality::Strict => match (old, new) {
                (Value::Array(_) | Value::Object(_), _) | (_, Value::Array(_) | Value::Object(_)) => {
                    false
                }
                (Value::Number(a), Value::Number(b)) => same_number(a, b),
                _ => old == new,
            },
            Equality::Structural => same_structure(old, new),
        }
    }
}

/// Contents comparison with number normalization at every depth
fn same_structure(old: &Value, new: &Value) -> bool {
    match (old, new) {
        (Value::Number(a), Value::Number(b)) => same_number(a, b),
        (Value::Array(a), Value::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| same_structure(x, y))
        }
        (Value::Object(a), Value::Object(b)) => {
            a.len() == b.len()
                && a.iter()
                    .all(|(key, x)| b.get(key).is_some_and(|y| same_structure(x, y)))
        }
        _ => old == new,
    }
}

/// `1` and `1.0` are one number
fn same_number(a: &serde_json::Number, b: &serde_json::Number) -> bool {
    if a.is_f64() || b.is_f64() {
        a.as_f64() == b.as_f64()
    } else {
        a == b
    }
}

/// Options for [`crate::diff_with`]
///
/// Deserializes from the `[diff]` table of a config file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    pub equality: Equality,
}

impl DiffOptions {
    pub fn with_equality(mut self, equality: Equality) -> Self {
        self.equality = equality;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!(null), json!(null), true)]
    #[case(json!(true), json!(true), true)]
    #[case(json!(true), json!(false), false)]
    #[case(json!(0), json!(1), false)]
    #[case(json!(1), json!(1.0), true)]
    #[case(json!("a"), json!("a"), true)]
    #[case(json!("1"), json!(1), false)]
    #[case(json!(null), json!(false), false)]
    fn test_scalars_compare_by_value(#[case] old: Value, #[case] new: Value, #[case] same: bool) {
        assert_eq!(Equality::Strict.same(&old, &new), same);
        assert_eq!(Equality::Structural.same(&old, &new), same);
    }

    #[rstest]
    #[case(json!([]), json!([]))]
    #[case(json!([1, 2]), json!([1, 2]))]
    #[case(json!({}), json!({}))]
    #[case(json!({"a": 1}), json!({"a": 1}))]
    fn test_strict_never_equates_containers(#[case] old: Value, #[case] new: Value) {
        assert!(!Equality::Strict.same(&old, &new));
        assert!(Equality::Structural.same(&old, &new));
    }

    #[rstest]
    #[case(json!({"a": [1]}), json!({"a": [1.0]}))]
    #[case(json!([{"n": 2}]), json!([{"n": 2.0}]))]
    #[case(json!({"x": {"y": 0}}), json!({"x": {"y": -0.0}}))]
    fn test_structural_normalizes_nested_numbers(#[case] old: Value, #[case] new: Value) {
        assert!(Equality::Structural.same(&old, &new));
    }

    #[rstest]
    #[case(json!([1, 2]), json!([1]))]
    #[case(json!({"a": 1}), json!({"b": 1}))]
    #[case(json!({"a": 1}), json!({"a": 1, "b": 2}))]
    #[case(json!([1]), json!({"0": 1}))]
    fn test_structural_shape_differences(#[case] old: Value, #[case] new: Value) {
        assert!(!Equality::Structural.same(&old, &new));
    }

    #[test]
    fn test_structural_detects_nested_changes() {
        assert!(!Equality::Structural.same(&json!({"a": [1]}), &json!({"a": [2]})));
    }

    #[test]
    fn test_options_default_to_strict() {
        assert_eq!(DiffOptions::default().equality, Equality::Strict);
        let options: DiffOptions = toml::from_str(r#"equality = "structural""#).unwrap();
        assert_eq!(options.equality, Equality::Structural);
    }
}
