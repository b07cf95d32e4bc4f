//! Shell transitions: language choice, page swaps and history restores.

use crate::app::state::{AppState, PageLoad};
use crate::paths::asset_path;
use crate::router::{Screen, screen_for};
use smartscreen_core::nav::fragment_url;
use smartscreen_core::{FragmentError, FragmentOutcome, Lang, NavEntry};

/// Choose a language on the splash: direction, intro once, history push, home fragment.
pub fn choose_language(state: &AppState, lang: Lang) {
    let switch = state.session.switch_language(lang);
    if switch.play_intro {
        state.audio.play_claimed(&state.session, lang);
    }
    show_page(state, switch.entry, true);
}

/// Switch the shell to `entry`, optionally pushing a history entry first.
pub fn show_page(state: &AppState, entry: NavEntry, push: bool) {
    crate::i18n::set_lang(entry.lang);
    state.lang.set(entry.lang);
    if push {
        push_entry(&entry);
    }
    let page = entry.page.clone();
    state.screen.set(Screen::Page(entry));
    load_page(state, page);
}

/// Route an in-content link through the shell when it names a page.
pub fn open_link(state: &AppState, href: &str) {
    match NavEntry::for_page(href) {
        Some(entry) => show_page(state, entry, true),
        None => crate::dom::full_navigation(&asset_path(href)),
    }
}

/// Leave the current page for the splash screen.
pub fn back_to_splash(state: &AppState) {
    state.audio.stop_all();
    if let Err(err) = crate::dom::push_history(&(), &asset_path("")) {
        log::warn!("history push failed: {err}");
    }
    state.next_load_token();
    state.load.set(PageLoad::Idle);
    state.screen.set(Screen::Splash);
    state.show_lang.set(true);
}

/// Back/forward: restore the entry's language and fragment without replaying the intro.
pub fn restore_location(state: &AppState, path: &str, state_json: Option<&str>) {
    state.audio.stop_all();
    match screen_for(path, state_json) {
        Screen::Page(entry) => show_page(state, entry, false),
        screen => {
            state.next_load_token();
            state.load.set(PageLoad::Idle);
            state.screen.set(screen);
        }
    }
}

fn push_entry(entry: &NavEntry) {
    if let Err(err) = crate::dom::push_history(entry, &asset_path(&entry.page)) {
        log::warn!("history push for {} failed: {err}", entry.page);
    }
}

/// Fetch the fragment for `page` and apply the failure policy.
pub fn load_page(state: &AppState, page: String) {
    let token = state.next_load_token();
    let Some(url) = fragment_url(&page) else {
        let outcome = state
            .session
            .settle_fragment(&page, Err(FragmentError::NotAPage(page.clone())));
        apply_outcome(state, outcome);
        return;
    };
    state.load.set(PageLoad::Loading);

    #[cfg(target_arch = "wasm32")]
    {
        let state = state.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let result = match crate::dom::fetch_no_cache(&asset_path(&url)).await {
                Ok((status, body)) => smartscreen_core::decode_fragment(status, &body),
                Err(err) => Err(FragmentError::Fetch(crate::dom::js_error_message(&err))),
            };
            if !state.is_current_load(token) {
                log::debug!("dropping stale fragment for {page}");
                return;
            }
            let outcome = state.session.settle_fragment(&page, result);
            apply_outcome(&state, outcome);
        });
    }
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("fragment {url} (request {token}) needs a browser");
}

fn apply_outcome(state: &AppState, outcome: FragmentOutcome) {
    match outcome {
        FragmentOutcome::Render(fragment) => {
            state.load.set(PageLoad::Ready(std::rc::Rc::new(fragment)));
        }
        FragmentOutcome::FullReload(page) => crate::dom::full_navigation(&asset_path(&page)),
        FragmentOutcome::GiveUp(_) => {
            state
                .load
                .set(PageLoad::Failed(crate::i18n::t("shell.fragment_failed").into()));
        }
    }
}
