use serde_json::Value;

/// Flattens a value into query-protocol form pairs under `prefix`.
pub(crate) fn flatten(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push((prefix.to_string(), b.to_string())),
        Value::Number(n) => out.push((prefix.to_string(), n.to_string())),
        Value::String(s) => out.push((prefix.to_string(), s.clone())),
        Value::Array(items) if items.is_empty() => out.push((prefix.to_string(), String::new())),
        Value::Array(items) => {
            for (idx, item) in items.iter().enumerate() {
                flatten(&format!("{prefix}.member.{}", idx + 1), item, out);
            }
        }
        Value::Object(fields) => {
            for (key, field) in fields {
                flatten(&format!("{prefix}.{key}"), field, out);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn flattens_nested_structures_and_lists() {
        let mut out = Vec::new();
        flatten(
            "IndexField",
            &json!({
                "IndexFieldName": "title",
                "TextOptions": { "ReturnEnabled": true, "Sources": ["a", "b"] },
                "Skipped": null
            }),
            &mut out,
        );
        assert_eq!(
            out,
            vec![
                ("IndexField.IndexFieldName".to_string(), "title".to_string()),
                ("IndexField.TextOptions.ReturnEnabled".to_string(), "true".to_string()),
                ("IndexField.TextOptions.Sources.member.1".to_string(), "a".to_string()),
                ("IndexField.TextOptions.Sources.member.2".to_string(), "b".to_string()),
            ]
        );
    }

    #[test]
    fn empty_list_is_sent_as_empty_value() {
        let mut out = Vec::new();
        flatten("DomainNames", &json!([]), &mut out);
        assert_eq!(out, vec![("DomainNames".to_string(), String::new())]);
    }
}
