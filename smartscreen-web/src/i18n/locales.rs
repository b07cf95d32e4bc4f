use serde_json::Value;
use smartscreen_core::Lang;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub lang: Lang,
    pub name: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        lang: Lang::Ar,
        name: "العربية",
    },
    LocaleMeta {
        lang: Lang::En,
        name: "English",
    },
];

const LOCALE_TABLE: &[(Lang, &str)] = &[
    (Lang::En, include_str!("../../i18n/en.json")),
    (Lang::Ar, include_str!("../../i18n/ar.json")),
];

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

pub fn load_translations(lang: Lang) -> Option<Value> {
    let bundle = LOCALE_TABLE
        .iter()
        .find_map(|(code, data)| (*code == lang).then_some(*data))
        .unwrap_or(LOCALE_TABLE[0].1);

    serde_json::from_str(bundle).ok()
}
