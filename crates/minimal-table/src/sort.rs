use std::cmp::Ordering;

use serde_json::Value;

use crate::item::{field_value, Item};

/// Sorted copy of `items`, ascending by the value under `sort_by`.
///
/// The sort is stable, so ties keep their incoming relative order, and the
/// caller's slice is never mutated. `None` keeps the incoming order.
pub fn sorted_items(items: &[Item], sort_by: Option<&str>) -> Vec<Item> {
    let mut rows = items.to_vec();
    if let Some(key) = sort_by {
        rows.sort_by(|a, b| compare_values(field_value(a, key), field_value(b, key)));
    }
    rows
}

/// Total order over JSON values.
///
/// Same-type values compare naturally: numbers numerically, strings
/// lexicographically (locale-naive byte order). Mixed types fall back to a
/// fixed rank: null < bool < number < string < array < object.
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Null, Value::Null) => Ordering::Equal,
        (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
        (Value::Number(a), Value::Number(b)) => {
            let a = a.as_f64().unwrap_or(f64::NAN);
            let b = b.as_f64().unwrap_or(f64::NAN);
            a.total_cmp(&b)
        }
        (Value::String(a), Value::String(b)) => a.cmp(b),
        (Value::Array(a), Value::Array(b)) => {
            for (a, b) in a.iter().zip(b) {
                let ordering = compare_values(a, b);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            a.len().cmp(&b.len())
        }
        (Value::Object(a), Value::Object(b)) => {
            let a = serde_json::to_string(a).unwrap_or_default();
            let b = serde_json::to_string(b).unwrap_or_default();
            a.cmp(&b)
        }
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: &Value) -> u8 {
    match value {
        Value::Null => 0,
        Value::Bool(_) => 1,
        Value::Number(_) => 2,
        Value::String(_) => 3,
        Value::Array(_) => 4,
        Value::Object(_) => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> Item {
        value.as_object().expect("test record").clone()
    }

    fn names(rows: &[Item]) -> Vec<&str> {
        rows.iter()
            .map(|row| field_value(row, "name").as_str().unwrap_or(""))
            .collect()
    }

    #[test]
    fn test_sorts_strings_ascending() {
        let items = vec![
            record(json!({"name": "Xantippe"})),
            record(json!({"name": "Adam"})),
            record(json!({"name": "Harry"})),
        ];
        let sorted = sorted_items(&items, Some("name"));
        assert_eq!(names(&sorted), ["Adam", "Harry", "Xantippe"]);
    }

    #[test]
    fn test_no_sort_key_keeps_order() {
        let items = vec![
            record(json!({"name": "Xantippe"})),
            record(json!({"name": "Adam"})),
        ];
        let sorted = sorted_items(&items, None);
        assert_eq!(names(&sorted), ["Xantippe", "Adam"]);
    }

    #[test]
    fn test_sort_does_not_mutate_caller_items() {
        let items = vec![
            record(json!({"name": "Xantippe"})),
            record(json!({"name": "Adam"})),
        ];
        let _ = sorted_items(&items, Some("name"));
        assert_eq!(names(&items), ["Xantippe", "Adam"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let items = vec![
            record(json!({"name": "b", "n": 1})),
            record(json!({"name": "a", "n": 2})),
            record(json!({"name": "b", "n": 3})),
        ];
        let sorted = sorted_items(&items, Some("name"));
        assert_eq!(names(&sorted), ["a", "b", "b"]);
        assert_eq!(field_value(&sorted[1], "n"), &json!(1));
        assert_eq!(field_value(&sorted[2], "n"), &json!(3));
    }

    #[test]
    fn test_numbers_sort_numerically() {
        let items = vec![
            record(json!({"n": 10})),
            record(json!({"n": 2})),
            record(json!({"n": 9.5})),
        ];
        let sorted = sorted_items(&items, Some("n"));
        let order: Vec<f64> = sorted
            .iter()
            .map(|row| field_value(row, "n").as_f64().unwrap())
            .collect();
        assert_eq!(order, [2.0, 9.5, 10.0]);
    }

    #[test]
    fn test_missing_key_sorts_as_null_first() {
        let items = vec![
            record(json!({"name": "Adam"})),
            record(json!({"other": 1})),
        ];
        let sorted = sorted_items(&items, Some("name"));
        assert_eq!(names(&sorted), ["", "Adam"]);
    }

    #[test]
    fn test_mixed_types_rank() {
        assert_eq!(
            compare_values(&Value::Null, &json!(false)),
            Ordering::Less
        );
        assert_eq!(compare_values(&json!(true), &json!(0)), Ordering::Less);
        assert_eq!(compare_values(&json!(99), &json!("1")), Ordering::Less);
        assert_eq!(compare_values(&json!("z"), &json!(["a"])), Ordering::Less);
    }
}
