use crate::audio::IntroAudio;
use crate::dom::BrowserSessionStore;
use crate::router::{Screen, screen_for};
use smartscreen_core::{Fragment, Lang, SessionContext};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Progress of the fragment shown in the content region.
#[derive(Clone, Debug, PartialEq)]
pub enum PageLoad {
    Idle,
    Loading,
    Ready(Rc<Fragment>),
    Failed(AttrValue),
}

#[derive(Clone)]
pub struct AppState {
    pub screen: UseStateHandle<Screen>,
    pub load: UseStateHandle<PageLoad>,
    pub lang: UseStateHandle<Lang>,
    pub logo_shown: UseStateHandle<bool>,
    pub show_lang: UseStateHandle<bool>,
    pub session: SessionContext<BrowserSessionStore>,
    /// Bumped on every fragment request; responses carrying an older value are dropped.
    pub load_token: Rc<RefCell<u32>>,
    pub audio: Rc<IntroAudio>,
}

/// Screen for the location the shell was opened at.
#[must_use]
pub fn initial_screen() -> Screen {
    let path = crate::paths::strip_router_base(&crate::dom::current_path());
    screen_for(&path, crate::dom::history_state_json().as_deref())
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        screen: use_state(initial_screen),
        load: use_state(|| PageLoad::Idle),
        lang: use_state(crate::i18n::current_lang),
        logo_shown: use_state(|| false),
        show_lang: use_state(|| false),
        session: SessionContext::new(BrowserSessionStore),
        load_token: use_mut_ref(|| 0_u32),
        audio: use_memo((), |()| IntroAudio::load()),
    }
}

impl AppState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(*self.load, PageLoad::Loading)
    }

    /// Start a new fragment request and return its token.
    pub fn next_load_token(&self) -> u32 {
        let mut token = self.load_token.borrow_mut();
        *token = token.wrapping_add(1);
        *token
    }

    #[must_use]
    pub fn is_current_load(&self, token: u32) -> bool {
        *self.load_token.borrow() == token
    }
}
