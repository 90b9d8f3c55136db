//! Dotted-path lookup into the applicant JSON document

use serde_json::Value;

/// Resolve a dotted path like `personal_info.last_name` against nested
/// JSON objects. Returns `None` if any segment is missing or the value
/// along the way is not an object.
pub(crate) fn get_nested_value<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = data;
    for key in path.split('.') {
        current = current.as_object()?.get(key)?;
    }
    Some(current)
}

/// Render a JSON scalar as form text
///
/// Strings pass through, numbers and booleans are formatted; null and
/// structured values have no text representation and are skipped.
pub(crate) fn value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Resolve a path straight to form text, skipping blank values
pub(crate) fn resolve_text(data: &Value, path: &str) -> Option<String> {
    let text = get_nested_value(data, path).and_then(value_to_string)?;
    if text.trim().is_empty() {
        return None;
    }
    Some(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_nested_lookup() {
        let data = json!({"personal_info": {"last_name": "Dupont"}});
        let value = get_nested_value(&data, "personal_info.last_name");
        assert_eq!(value, Some(&json!("Dupont")));
    }

    #[test]
    fn test_top_level_lookup() {
        let data = json!({"signature_date": "01/02/2026"});
        let value = get_nested_value(&data, "signature_date");
        assert_eq!(value, Some(&json!("01/02/2026")));
    }

    #[test]
    fn test_missing_segment() {
        let data = json!({"personal_info": {}});
        assert_eq!(get_nested_value(&data, "personal_info.last_name"), None);
    }

    #[test]
    fn test_path_through_scalar() {
        let data = json!({"personal_info": "oops"});
        assert_eq!(get_nested_value(&data, "personal_info.last_name"), None);
    }

    #[test]
    fn test_value_to_string_scalars() {
        assert_eq!(value_to_string(&json!("text")), Some("text".to_string()));
        assert_eq!(value_to_string(&json!(42)), Some("42".to_string()));
        assert_eq!(value_to_string(&json!(true)), Some("true".to_string()));
    }

    #[test]
    fn test_value_to_string_non_scalars() {
        assert_eq!(value_to_string(&json!(null)), None);
        assert_eq!(value_to_string(&json!([1, 2])), None);
        assert_eq!(value_to_string(&json!({"a": 1})), None);
    }

    #[test]
    fn test_resolve_text_skips_blank() {
        let data = json!({"personal_info": {"middle_name": "   "}});
        assert_eq!(resolve_text(&data, "personal_info.middle_name"), None);
    }
}
