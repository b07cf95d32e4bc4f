use crate::i18n::{locales, t};
use crate::paths::asset_path;
use smartscreen_core::Lang;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub logo_shown: bool,
    pub show_lang: bool,
    pub on_choose: Callback<Lang>,
}

fn shown(base: &'static str, on: bool) -> Classes {
    let mut classes = classes!(base);
    if on {
        classes.push("show");
    }
    classes
}

#[function_component(Splash)]
pub fn splash(props: &Props) -> Html {
    let choose = |lang: Lang| {
        let cb = props.on_choose.clone();
        Callback::from(move |_: MouseEvent| cb.emit(lang))
    };

    html! {
        <section id="splash" class="splash">
            <img
                id="logo"
                class={shown("splash-logo", props.logo_shown)}
                src={asset_path("static/img/logo.png")}
                alt={t("splash.logo_alt")}
            />
            <div
                id="lang"
                class={shown("splash-lang", props.show_lang)}
                role="group"
                aria-label={t("splash.choose")}
                aria-hidden={(!props.show_lang).to_string()}
            >
                { for locales().iter().map(|meta| html! {
                    <button
                        id={format!("btn-{}", meta.lang.code())}
                        type="button"
                        lang={meta.lang.code()}
                        dir={meta.lang.dir()}
                        onclick={choose(meta.lang)}
                    >
                        { meta.name }
                    </button>
                }) }
            </div>
            <p id="hint" class="splash-hint">{ t("splash.choose") }</p>
        </section>
    }
}
