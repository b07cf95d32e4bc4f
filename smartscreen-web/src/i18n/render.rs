use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn render_value(value: &Value, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = value.as_str()?.to_string();

    if let Some(args_map) = args {
        for (k, v) in args_map {
            let ph1 = format!("{{{{{k}}}}}");
            let ph2 = format!("{{{k}}}");
            text = text.replace(&ph1, v);
            text = text.replace(&ph2, v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, args))
            .or_else(|| get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, args)))
    })
}

/// Translate a key to the current language
///
/// Falls back to English if key is not found in current language.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution
///
/// Variables in the translated string use the format {key} or {{key}}.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolation_handles_braced_forms() {
        let value = Value::String("Invalid value in field: {field} ({{field}})".into());
        let mut args = BTreeMap::new();
        args.insert("field", "budget_level");
        let resolved = render_value(&value, Some(&args)).unwrap();
        assert_eq!(
            resolved,
            "Invalid value in field: budget_level (budget_level)"
        );
    }

    #[test]
    fn nested_lookup_stops_at_missing_segments() {
        let value: Value = serde_json::json!({ "a": { "b": "x" } });
        assert_eq!(get_nested_value(&value, "a.b"), Some(&Value::from("x")));
        assert!(get_nested_value(&value, "a.c").is_none());
        assert!(render_value(&value, None).is_none());
    }
}
