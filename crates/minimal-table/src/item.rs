use serde_json::{Map, Value};

/// One data record, rendered as one table row.
///
/// No shape is enforced beyond the keys the fields reference; keys the
/// record does not carry read as null.
pub type Item = Map<String, Value>;

static NULL: Value = Value::Null;

/// The record's value under `key`; missing keys read as null.
pub fn field_value<'a>(item: &'a Item, key: &str) -> &'a Value {
    item.get(key).unwrap_or(&NULL)
}

/// Display text for a raw cell value: strings verbatim, null empty,
/// everything else in its JSON rendering.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_value_missing_key_is_null() {
        let item = json!({"name": "hoi"}).as_object().unwrap().clone();
        assert_eq!(field_value(&item, "name"), &json!("hoi"));
        assert_eq!(field_value(&item, "city"), &Value::Null);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&json!("hoi")), "hoi");
        assert_eq!(display_value(&Value::Null), "");
        assert_eq!(display_value(&json!(42)), "42");
        assert_eq!(display_value(&json!(1.5)), "1.5");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!(["a", "b"])), "[\"a\",\"b\"]");
    }
}
