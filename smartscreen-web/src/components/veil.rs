use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub shown: bool,
}

/// Overlay shown while a page fragment is loading.
#[function_component(Veil)]
pub fn veil(props: &Props) -> Html {
    let class = if props.shown { "veil show" } else { "veil" };
    html! {
        <div id="veil" {class} aria-hidden={(!props.shown).to_string()} aria-busy={props.shown.to_string()}>
            <span class="veil-label">{ t("shell.loading") }</span>
        </div>
    }
}
