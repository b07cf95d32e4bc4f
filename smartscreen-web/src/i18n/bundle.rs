use crate::i18n::locales::load_translations;
use serde_json::Value;
use smartscreen_core::Lang;
use std::cell::RefCell;

pub struct I18nBundle {
    pub lang: Lang,
    pub translations: Value,
    pub fallback: Value,
}

fn build_bundle(lang: Lang) -> I18nBundle {
    let fallback = load_translations(Lang::En).unwrap_or(Value::Object(serde_json::Map::new()));
    let translations = load_translations(lang).unwrap_or_else(|| fallback.clone());

    I18nBundle {
        lang,
        translations,
        fallback,
    }
}

/// Language the hosting page was served in, before any choice is made.
fn document_lang() -> Lang {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::dom::document()
            .and_then(|doc| doc.document_element())
            .and_then(|el| el.get_attribute("lang"))
            .map_or(Lang::Ar, |code| Lang::from_document_lang(&code))
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        Lang::En
    }
}

thread_local! {
    pub(super) static CURRENT: RefCell<I18nBundle> = RefCell::new(build_bundle(document_lang()));
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active language and update `<html lang dir>` and the body
/// direction classes. The choice is not persisted; every page declares its
/// own language.
pub fn set_lang(lang: Lang) {
    CURRENT.with(|cell| cell.replace(build_bundle(lang)));
    #[cfg(target_arch = "wasm32")]
    crate::dom::apply_lang(lang);
}

#[must_use]
pub fn current_lang() -> Lang {
    with_bundle(|bundle| bundle.lang)
}

/// Check if the current language uses right-to-left text direction
#[must_use]
pub fn is_rtl() -> bool {
    current_lang().is_rtl()
}
