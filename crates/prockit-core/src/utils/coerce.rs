//! Loose boolean coercion
//!
//! Query strings, environment variables and config files hand us flags as
//! text. Anything outside a small table of "off" tokens reads as `true`.

use serde_json::Value;

/// Tokens that coerce to `false`, compared case-insensitively
pub const FALSY_TOKENS: [&str; 7] = ["undefined", "false", "null", "off", "no", "0", ""];

/// Coerce an optional value to a boolean
///
/// `None` is `false`. Any present value is rendered to its loose string form,
/// lower-cased and looked up in [`FALSY_TOKENS`].
pub fn is_true(value: Option<&Value>) -> bool {
    match value {
        None => false,
        Some(value) => is_true_str(&loose_string(value)),
    }
}

/// Coerce a string to a boolean using the falsy token table
pub fn is_true_str(value: &str) -> bool {
    let lowered = value.to_lowercase();
    !FALSY_TOKENS.contains(&lowered.as_str())
}

/// Render a JSON value the way string concatenation would
pub fn loose_string(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            // integral floats print without a fraction; -0 prints as 0
            Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{:.0}", f),
            _ => n.to_string(),
        },
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => loose_string(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_falsy_strings() {
        for token in ["false", "FALSE", "0", "", "off", "no", "null", "undefined", "Off", "NO"] {
            assert!(!is_true(Some(&json!(token))), "{:?} should be false", token);
        }
    }

    #[test]
    fn test_truthy_strings() {
        for token in ["1", "yes", "true", "TRUE", "on", "anything else", " "] {
            assert!(is_true(Some(&json!(token))), "{:?} should be true", token);
        }
    }

    #[test]
    fn test_absent_is_false() {
        assert!(!is_true(None));
    }

    #[test]
    fn test_non_string_values() {
        assert!(!is_true(Some(&Value::Null)));
        assert!(!is_true(Some(&json!(false))));
        assert!(!is_true(Some(&json!(0))));
        assert!(!is_true(Some(&json!(0.0))));
        assert!(!is_true(Some(&json!([]))));
        assert!(is_true(Some(&json!(true))));
        assert!(is_true(Some(&json!(2))));
        assert!(is_true(Some(&json!(0.5))));
        assert!(is_true(Some(&json!({}))));
    }

    #[test]
    fn test_loose_string_forms() {
        assert_eq!(loose_string(&json!(3.0)), "3");
        assert_eq!(loose_string(&json!(-0.0)), "0");
        assert_eq!(loose_string(&json!(1e20)), "100000000000000000000");
        assert_eq!(loose_string(&json!(-1e19)), "-10000000000000000000");
        assert_eq!(loose_string(&json!(2.5)), "2.5");
        assert_eq!(loose_string(&json!(-1)), "-1");
        assert_eq!(loose_string(&json!([1, null, "a"])), "1,,a");
        assert_eq!(loose_string(&json!({"a": 1})), "[object Object]");
    }

    #[test]
    fn test_is_true_str() {
        assert!(!is_true_str("Null"));
        assert!(is_true_str("y"));
    }
}
