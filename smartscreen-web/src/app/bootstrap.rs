use crate::app::state::AppState;
use yew::prelude::*;

#[cfg(target_arch = "wasm32")]
struct ShellListeners {
    _popstate: Option<crate::dom::WindowListener>,
}

#[cfg(target_arch = "wasm32")]
fn start_shell(state: &AppState) -> ShellListeners {
    use crate::app::navigation;
    use crate::router::Screen;
    use smartscreen_core::SHOW_LANG_AFTER_MS;

    state.logo_shown.set(true);
    {
        let show_lang = state.show_lang.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(err) = crate::dom::sleep_ms(SHOW_LANG_AFTER_MS).await {
                log::warn!("splash timer failed: {}", crate::dom::js_error_message(&err));
            }
            show_lang.set(true);
        });
    }

    if let Screen::Page(entry) = (*state.screen).clone() {
        log::info!("direct entry on {}", entry.page);
        navigation::show_page(state, entry, false);
    }

    let popstate = {
        let state = state.clone();
        crate::dom::WindowListener::new("popstate", move |_event| {
            let path = crate::paths::strip_router_base(&crate::dom::current_path());
            let history_state = crate::dom::history_state_json();
            navigation::restore_location(&state, &path, history_state.as_deref());
        })
    };
    let popstate = match popstate {
        Ok(listener) => Some(listener),
        Err(err) => {
            log::error!("popstate listener failed: {}", crate::dom::js_error_message(&err));
            None
        }
    };

    let audio = state.audio.clone();
    if let Err(err) = crate::dom::once_on_window("touchstart", move || audio.unlock()) {
        log::warn!("audio unlock listener failed: {}", crate::dom::js_error_message(&err));
    }

    ShellListeners {
        _popstate: popstate,
    }
}

/// Splash timers, direct-entry load, history listener and the iOS audio unlock.
#[cfg(target_arch = "wasm32")]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let state = app_state.clone();
    use_effect_with((), move |()| {
        let listeners = start_shell(&state);
        move || drop(listeners)
    });
}

/// Server-side renders show the first frame only.
#[cfg(not(target_arch = "wasm32"))]
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let _ = app_state;
    use_effect_with((), |()| ());
}
