use smartscreen_core::nav::{NavEntry, ShellView, resolve_location};
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Splash,
    #[at("/pages/:page")]
    Page { page: String },
    #[at("/404")]
    #[not_found]
    NotFound,
}

/// What the shell shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Page(NavEntry),
    NotFound,
}

impl From<ShellView> for Screen {
    fn from(view: ShellView) -> Self {
        match view {
            ShellView::Splash => Self::Splash,
            ShellView::Page(entry) => Self::Page(entry),
        }
    }
}

impl Route {
    /// Match a base-relative location path.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        Self::recognize(path).unwrap_or(Self::NotFound)
    }
}

/// Resolve the screen for a location, preferring the history entry's state.
///
/// Paths outside the shell's routes show the not-found screen; page paths
/// without a language suffix fall back to the splash.
#[must_use]
pub fn screen_for(path: &str, state_json: Option<&str>) -> Screen {
    let state = state_json.and_then(|json| serde_json::from_str::<NavEntry>(json).ok());
    match Route::from_path(path) {
        Route::NotFound if state.is_none() => Screen::NotFound,
        _ => resolve_location(path, state.as_ref()).into(),
    }
}
