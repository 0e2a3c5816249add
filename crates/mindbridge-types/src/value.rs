use serde_json::Value;

/// Text form of a field value as the dashboard would print it.
///
/// Missing fields become `"undefined"` and nulls `"null"`, so a free-text
/// search over an absent field is effectively never a match.
pub fn display_text(value: Option<&Value>) -> String {
    match value {
        None => "undefined".to_string(),
        Some(value) => value_text(value),
    }
}

/// Text shown inside a rendered cell. Absent and null values render empty.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => value_text(other),
    }
}

/// Numeric coercion with default-to-zero for null, missing and non-numeric values.
///
/// Strings follow the browser's `Number()`: `0x`/`0o`/`0b` prefixes and
/// `Infinity` are understood, anything else unparseable is zero.
pub fn coerce_number(value: Option<&Value>) -> f64 {
    match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => parse_number_text(s.trim()).unwrap_or(0.0),
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    }
}

fn parse_number_text(text: &str) -> Option<f64> {
    if text.is_empty() {
        return Some(0.0);
    }

    match text {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&text[2..], radix).ok().map(|n| n as f64);
    }

    // Rust also reads "inf" and "nan"; the dashboard does not
    if !text.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<f64>().ok()
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::String(s) => s.clone(),
        Value::Number(n) => {
            if n.is_f64() {
                let f = n.as_f64().unwrap_or(0.0);
                if f.fract() == 0.0 && f.abs() < 1e15 {
                    return format!("{}", f as i64);
                }
            }
            n.to_string()
        }
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                other => value_text(other),
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
    fn test_display_text_follows_dashboard_rules() {
        assert_eq!(display_text(None), "undefined");
        assert_eq!(display_text(Some(&Value::Null)), "null");
        assert_eq!(display_text(Some(&json!("Jane"))), "Jane");
        assert_eq!(display_text(Some(&json!(12.0))), "12");
        assert_eq!(display_text(Some(&json!(12.5))), "12.5");
        assert_eq!(display_text(Some(&json!([1, "a", null]))), "1,a,");
        assert_eq!(display_text(Some(&json!({"a": 1}))), "[object Object]");
    }

    #[test]
    fn test_cell_text_renders_null_empty() {
        assert_eq!(cell_text(&Value::Null), "");
        assert_eq!(cell_text(&json!(true)), "true");
    }

    #[test]
    fn test_coerce_number_defaults_to_zero() {
        assert_eq!(coerce_number(None), 0.0);
        assert_eq!(coerce_number(Some(&Value::Null)), 0.0);
        assert_eq!(coerce_number(Some(&json!("abc"))), 0.0);
        assert_eq!(coerce_number(Some(&json!(" 12.5 "))), 12.5);
        assert_eq!(coerce_number(Some(&json!(3))), 3.0);
        assert_eq!(coerce_number(Some(&json!(true))), 1.0);
    }

    #[test]
    fn test_coerce_number_reads_like_the_browser() {
        assert_eq!(coerce_number(Some(&json!("0x1A"))), 26.0);
        assert_eq!(coerce_number(Some(&json!("0b101"))), 5.0);
        assert_eq!(coerce_number(Some(&json!("0o17"))), 15.0);
        assert_eq!(coerce_number(Some(&json!("Infinity"))), f64::INFINITY);
        assert_eq!(coerce_number(Some(&json!("-Infinity"))), f64::NEG_INFINITY);
        assert_eq!(coerce_number(Some(&json!("1e3"))), 1000.0);
        assert_eq!(coerce_number(Some(&json!(".5"))), 0.5);

        assert_eq!(coerce_number(Some(&json!("inf"))), 0.0);
        assert_eq!(coerce_number(Some(&json!("NaN"))), 0.0);
        assert_eq!(coerce_number(Some(&json!("-0x1A"))), 0.0);
        assert_eq!(coerce_number(Some(&json!("0xZZ"))), 0.0);
    }
}
