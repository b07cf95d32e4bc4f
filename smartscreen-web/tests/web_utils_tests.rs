use smartscreen_core::{Lang, NavEntry};
use smartscreen_web::i18n;
use smartscreen_web::router::{Route, Screen, screen_for};
use smartscreen_web::{dom, paths};
use std::collections::BTreeMap;

#[test]
fn dom_helpers_are_inert_off_the_browser() {
    assert!(dom::window().is_none());
    assert!(dom::document().is_none());
    assert_eq!(dom::current_path(), "/");
    assert_eq!(dom::history_state_json(), None);
    assert_eq!(dom::runtime_backend_base(), None);
    dom::apply_lang(Lang::Ar);
    dom::alert("no window");
}

#[test]
fn history_push_reports_a_missing_window() {
    let entry = NavEntry::home(Lang::En);
    let err = dom::push_history(&entry, "/pages/home-en.html").unwrap_err();
    assert!(matches!(err, dom::HistoryError::Refused(_)));
    assert!(err.to_string().contains("window"));
}

#[test]
fn i18n_bundle_switches_and_formats() {
    i18n::set_lang(Lang::En);
    assert_eq!(i18n::current_lang(), Lang::En);
    assert!(!i18n::is_rtl());

    let mut vars = BTreeMap::new();
    vars.insert("field", "budget_level");
    assert_eq!(
        i18n::tr("validation.ad.not_allowed", Some(&vars)),
        "Invalid value in field: budget_level"
    );
    assert_eq!(i18n::t("missing.key"), "missing.key");

    i18n::set_lang(Lang::Ar);
    assert!(i18n::is_rtl());
    assert_eq!(i18n::t("result.pm.status.fail"), "عطل");
    i18n::set_lang(Lang::En);
}

#[test]
fn i18n_locales_metadata_is_accessible() {
    let metas = i18n::locales();
    assert!(metas.iter().any(|m| m.lang == Lang::En));
    assert!(metas.iter().any(|m| m.lang == Lang::Ar && m.lang.is_rtl()));
}

#[test]
fn page_routes_and_screens() {
    assert_eq!(
        Route::from_path("/pages/home-ar.html"),
        Route::Page {
            page: "home-ar.html".into()
        }
    );
    assert_eq!(
        screen_for("/pages/home-ar.html", None),
        Screen::Page(NavEntry::home(Lang::Ar))
    );
    let state = serde_json::to_string(&NavEntry::home(Lang::En)).expect("entry serializes");
    assert_eq!(
        screen_for("/", Some(&state)),
        Screen::Page(NavEntry::home(Lang::En))
    );
}

#[test]
fn fragment_urls_respect_the_asset_base() {
    let url = smartscreen_core::nav::fragment_url("/pages/pm-en.html").expect("page path");
    assert_eq!(paths::asset_path(&url), "/fragments/pm-en.json");
}

#[test]
fn reset_intro_sound_is_harmless_without_storage() {
    smartscreen_web::reset_intro_sound();
}
