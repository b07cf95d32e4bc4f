use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub on_back: Callback<()>,
}

#[function_component(NotFound)]
pub fn not_found(props: &Props) -> Html {
    let on_click = {
        let cb = props.on_back.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    html! {
        <section id="not-found" class="not-found">
            <h1>{ t("not_found.title") }</h1>
            <button type="button" class="back-btn" onclick={on_click}>{ t("shell.back_to_start") }</button>
        </section>
    }
}
