use crate::app::navigation;
use crate::app::state::AppState;
use smartscreen_core::Lang;
use yew::prelude::*;

#[derive(Clone)]
pub struct AppHandlers {
    pub choose_lang: Callback<Lang>,
    pub open_link: Callback<String>,
    pub back_to_splash: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            choose_lang: build_choose_lang(state),
            open_link: build_open_link(state),
            back_to_splash: build_back_to_splash(state),
        }
    }
}

fn build_choose_lang(state: &AppState) -> Callback<Lang> {
    let state = state.clone();
    Callback::from(move |lang: Lang| navigation::choose_language(&state, lang))
}

fn build_open_link(state: &AppState) -> Callback<String> {
    let state = state.clone();
    Callback::from(move |href: String| navigation::open_link(&state, &href))
}

fn build_back_to_splash(state: &AppState) -> Callback<()> {
    let state = state.clone();
    Callback::from(move |()| navigation::back_to_splash(&state))
}
