//! Locale coverage: every locale carries every key the UI looks up.

use serde_json::Value;
use smartscreen_core::forms::ALLOWED_AD;
use smartscreen_core::{FormKind, InputTip, Lang, StatusCode};
use std::collections::BTreeSet;

/// Raw bundle text per language, exactly as compiled into the shell.
const BUNDLES: [(Lang, &str); 2] = [
    (Lang::Ar, include_str!("../i18n/ar.json")),
    (Lang::En, include_str!("../i18n/en.json")),
];

fn parsed(lang: Lang) -> Value {
    let (_, raw) = BUNDLES
        .iter()
        .find(|(l, _)| *l == lang)
        .unwrap_or_else(|| panic!("no bundle for {lang}"));
    serde_json::from_str(raw).unwrap_or_else(|e| panic!("{lang}.json is not JSON: {e}"))
}

fn has_string(json: &Value, key: &str) -> bool {
    key.split('.')
        .try_fold(json, |current, part| current.get(part))
        .is_some_and(Value::is_string)
}

/// Dotted paths of every leaf in `value`.
fn leaf_keys(value: &Value) -> BTreeSet<String> {
    fn walk(prefix: &str, value: &Value, out: &mut BTreeSet<String>) {
        match value {
            Value::Object(map) => {
                for (k, v) in map {
                    let path = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&path, v, out);
                }
            }
            _ => {
                out.insert(prefix.to_string());
            }
        }
    }
    let mut out = BTreeSet::new();
    walk("", value, &mut out);
    out
}

fn keys_used_by_forms() -> Vec<String> {
    let mut keys = Vec::new();
    for (field, values) in ALLOWED_AD {
        keys.push(format!("forms.ad.fields.{field}"));
        for value in *values {
            keys.push(format!("forms.ad.options.{field}.{value}"));
        }
    }
    for (field, values) in crate::components::forms::maintenance_fields::PM_CHOICES {
        for value in *values {
            keys.push(format!("forms.pm.options.{field}.{value}"));
        }
    }
    for field in smartscreen_core::forms::maintenance::REQUIRED_PM {
        keys.push(format!("forms.pm.fields.{field}"));
    }
    keys.extend((1..=12).map(|m| format!("forms.pm.months.{m}")));
    for kind in [FormKind::Ad, FormKind::Maintenance] {
        let tag = kind.tag();
        keys.push(format!("forms.{tag}.submit"));
        keys.push(format!("validation.{tag}.missing"));
        keys.push(format!("api.{tag}.status"));
        keys.push(format!("api.{tag}.transport"));
        keys.push(format!("pending.{tag}"));
    }
    for code in [StatusCode::Ok, StatusCode::Warn, StatusCode::Fail, StatusCode::Unknown] {
        keys.push(format!("result.pm.status.{}", code.key()));
        if code.is_known() {
            keys.push(format!("result.pm.advice.{}", code.key()));
        }
    }
    for tip in [InputTip::HighDailyHours, InputTip::FrequentReboots, InputTip::HighHumidity] {
        keys.push(format!("tips.{}", tip.key()));
    }
    keys
}

#[test]
fn bundles_cover_every_locale_with_the_same_keys() {
    let listed: Vec<Lang> = crate::i18n::locales().iter().map(|m| m.lang).collect();
    let bundled: Vec<Lang> = BUNDLES.iter().map(|(l, _)| *l).collect();
    assert_eq!(listed, bundled);

    let english = leaf_keys(&parsed(Lang::En));
    let arabic = leaf_keys(&parsed(Lang::Ar));
    let missing: Vec<_> = english.difference(&arabic).collect();
    let extra: Vec<_> = arabic.difference(&english).collect();
    assert!(missing.is_empty(), "ar.json lacks {missing:?}");
    assert!(extra.is_empty(), "ar.json has keys en.json lacks: {extra:?}");
}

#[test]
fn every_form_value_has_copy() {
    let required = keys_used_by_forms();
    for lang in Lang::ALL {
        let json = parsed(lang);
        for key in &required {
            assert!(has_string(&json, key), "Missing key '{key}' in {lang}.json");
        }
    }
}

#[test]
fn placeholders_are_balanced() {
    for (lang, raw) in BUNDLES {
        assert_eq!(
            raw.matches('{').count(),
            raw.matches('}').count(),
            "unmatched braces in {lang}.json"
        );
    }
}
