//! Navigation shell decisions: language switches, history entries and what
//! to show for a given location.

use crate::lang::Lang;
use crate::session::{SessionContext, SessionStore};
use serde::{Deserialize, Serialize};

/// Delay before the splash language buttons appear.
pub const SHOW_LANG_AFTER_MS: u32 = 2_500;

const PAGES_PREFIX: &str = "/pages/";
const FRAGMENTS_PREFIX: &str = "/fragments/";

/// State carried by every history entry the shell pushes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    #[serde(rename = "p")]
    pub page: String,
    pub lang: Lang,
}

impl NavEntry {
    #[must_use]
    pub fn home(lang: Lang) -> Self {
        Self {
            page: home_page(lang).to_string(),
            lang,
        }
    }

    /// Entry for a direct visit to `page`, language taken from its suffix.
    #[must_use]
    pub fn for_page(page: &str) -> Option<Self> {
        let page = normalize_path(page);
        let lang = lang_for_page(&page)?;
        Some(Self { page, lang })
    }
}

#[must_use]
pub const fn home_page(lang: Lang) -> &'static str {
    match lang {
        Lang::Ar => "/pages/home-ar.html",
        Lang::En => "/pages/home-en.html",
    }
}

/// Collapse leading slashes into exactly one.
#[must_use]
pub fn normalize_path(path: &str) -> String {
    format!("/{}", path.trim().trim_start_matches('/'))
}

fn page_stem(page: &str) -> Option<&str> {
    let stem = page.strip_prefix(PAGES_PREFIX)?.strip_suffix(".html")?;
    (!stem.is_empty() && !stem.contains('/')).then_some(stem)
}

#[must_use]
pub fn is_page_path(path: &str) -> bool {
    page_stem(&normalize_path(path)).is_some()
}

/// `/pages/ad-ar.html` → `Lang::Ar`.
#[must_use]
pub fn lang_for_page(page: &str) -> Option<Lang> {
    let stem = page_stem(page)?;
    let (_, suffix) = stem.rsplit_once('-')?;
    suffix.parse().ok()
}

/// `/pages/<stem>.html` → `/fragments/<stem>.json`.
#[must_use]
pub fn fragment_url(page: &str) -> Option<String> {
    page_stem(&normalize_path(page)).map(|stem| format!("{FRAGMENTS_PREFIX}{stem}.json"))
}

/// Everything a language button press must do, decided up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSwitch {
    pub entry: NavEntry,
    pub play_intro: bool,
}

impl<S: SessionStore> SessionContext<S> {
    /// Decide the effects of choosing `lang`. Navigation always happens; the
    /// intro is only requested the first time per language per session.
    pub fn switch_language(&self, lang: Lang) -> LanguageSwitch {
        LanguageSwitch {
            entry: NavEntry::home(lang),
            play_intro: self.claim_intro(lang),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellView {
    Splash,
    Page(NavEntry),
}

/// Resolve what the shell shows for `path`, preferring history state.
#[must_use]
pub fn resolve_location(path: &str, state: Option<&NavEntry>) -> ShellView {
    if let Some(entry) = state {
        return ShellView::Page(entry.clone());
    }
    NavEntry::for_page(path).map_or(ShellView::Splash, ShellView::Page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn history_state_uses_short_page_key() {
        let entry = NavEntry::home(Lang::Ar);
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["p"], "/pages/home-ar.html");
        assert_eq!(json["lang"], "ar");
    }

    #[test]
    fn page_paths_map_to_fragments() {
        assert_eq!(
            fragment_url("pages/home-en.html").as_deref(),
            Some("/fragments/home-en.json")
        );
        assert_eq!(
            fragment_url("//pages/pm-ar.html").as_deref(),
            Some("/fragments/pm-ar.json")
        );
        assert_eq!(fragment_url("/pages/.html"), None);
        assert_eq!(fragment_url("/about.html"), None);
        assert_eq!(fragment_url("/pages/a/b.html"), None);
    }

    #[test]
    fn language_comes_from_page_suffix() {
        assert_eq!(lang_for_page("/pages/ad-ar.html"), Some(Lang::Ar));
        assert_eq!(lang_for_page("/pages/home-en.html"), Some(Lang::En));
        assert_eq!(lang_for_page("/pages/home.html"), None);
        assert!(is_page_path("/pages/pm-en.html"));
        assert!(!is_page_path("/"));
    }

    #[test]
    fn second_switch_navigates_without_intro() {
        let ctx = SessionContext::new(MemorySessionStore::new());
        let first = ctx.switch_language(Lang::En);
        let second = ctx.switch_language(Lang::En);
        assert!(first.play_intro);
        assert!(!second.play_intro);
        assert_eq!(second.entry, NavEntry::home(Lang::En));
        assert!(ctx.switch_language(Lang::Ar).play_intro);
    }

    #[test]
    fn location_resolution() {
        let entry = NavEntry::home(Lang::Ar);
        assert_eq!(
            resolve_location("/pages/home-en.html", Some(&entry)),
            ShellView::Page(entry)
        );
        assert_eq!(resolve_location("/", None), ShellView::Splash);
        assert_eq!(
            resolve_location("/pages/ad-en.html", None),
            ShellView::Page(NavEntry {
                page: "/pages/ad-en.html".into(),
                lang: Lang::En
            })
        );
        assert_eq!(resolve_location("/pages/ad.html", None), ShellView::Splash);
    }
}
