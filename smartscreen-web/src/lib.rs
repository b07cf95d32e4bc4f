#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod app;
pub mod audio;
pub mod components;
pub mod dom;
pub mod i18n;
#[cfg(test)]
mod i18n_tests;
pub mod logging;
pub mod paths;
pub mod router;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logging::init();
    // Direction classes follow the language the hosting page was served in.
    crate::i18n::set_lang(crate::i18n::current_lang());
    yew::Renderer::<app::App>::new().render();
}

/// Forget both intro-played flags so the next language choice plays its intro again.
#[cfg_attr(target_arch = "wasm32", wasm_bindgen(js_name = resetIntroSound))]
pub fn reset_intro_sound() {
    smartscreen_core::SessionContext::new(dom::BrowserSessionStore).reset();
    log::info!("intro flags cleared");
}
