use crate::app::handlers::AppHandlers;
use crate::app::state::AppState;
use crate::components::not_found::NotFound;
use crate::components::page_host::PageHost;
use crate::components::splash::Splash;
use crate::components::veil::Veil;
use crate::router::Screen;
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let lang = *state.lang;

    let body = match &*state.screen {
        Screen::Splash => html! {
            <Splash
                logo_shown={*state.logo_shown}
                show_lang={*state.show_lang}
                on_choose={handlers.choose_lang.clone()}
            />
        },
        Screen::Page(entry) => html! {
            <PageHost
                page={AttrValue::from(entry.page.clone())}
                lang={entry.lang}
                load={(*state.load).clone()}
                on_link={handlers.open_link.clone()}
                on_back={handlers.back_to_splash.clone()}
            />
        },
        Screen::NotFound => html! { <NotFound on_back={handlers.back_to_splash.clone()} /> },
    };

    html! {
        <>
            <Veil shown={state.is_loading()} />
            <main id="app" role="main" lang={lang.code()} dir={lang.dir()}>
                { body }
            </main>
        </>
    }
}
