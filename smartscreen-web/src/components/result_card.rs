use crate::components::forms::messages::{
    maintenance_note, pending_message, status_label, tip_lines,
};
use crate::i18n::t;
use smartscreen_core::{FormKind, PredictionView};
use yew::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum ResultState {
    #[default]
    Idle,
    Pending,
    Ready(PredictionView),
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub kind: FormKind,
    pub state: ResultState,
}

fn render_prediction(view: &PredictionView) -> Html {
    match view {
        PredictionView::Placement(place) => html! {
            <>
                <h3>{ t("result.ad.title") }</h3>
                <p class="result-row">
                    <span class="result-label">{ t("result.ad.place") }{ ": " }</span>
                    <strong id="r-place">{ place.place.clone() }</strong>
                </p>
                <p class="result-row">
                    <span class="result-label">{ t("result.note") }{ ": " }</span>
                    <span id="r-note">{ place.note.clone() }</span>
                </p>
            </>
        },
        PredictionView::Maintenance(pm) => {
            let status_class = classes!("status", format!("status-{}", pm.code.key()));
            html! {
                <>
                    <h3>{ t("result.pm.title") }</h3>
                    <p class="result-row">
                        <strong id="r-status" class={status_class}>{ status_label(pm.code) }</strong>
                    </p>
                    <p id="r-note" class="result-row">{ maintenance_note(pm) }</p>
                    <h4>{ t("result.pm.tips") }</h4>
                    <ul id="r-tips">
                        { for tip_lines(&pm.tips).into_iter().map(|line| html! { <li>{ line }</li> }) }
                    </ul>
                </>
            }
        }
    }
}

/// Prediction card under a form; hidden until a request starts.
#[function_component(ResultCard)]
pub fn result_card(props: &Props) -> Html {
    let card_ref = use_node_ref();
    {
        let card_ref = card_ref.clone();
        let ready = matches!(props.state, ResultState::Ready(_));
        use_effect_with(ready, move |ready| {
            if *ready && let Some(card) = card_ref.cast::<web_sys::Element>() {
                let options = web_sys::ScrollIntoViewOptions::new();
                options.set_behavior(web_sys::ScrollBehavior::Smooth);
                card.scroll_into_view_with_scroll_into_view_options(&options);
            }
        });
    }

    let body = match &props.state {
        ResultState::Idle => Html::default(),
        ResultState::Pending => html! {
            <p class="result-pending" role="status">{ pending_message(props.kind) }</p>
        },
        ResultState::Ready(view) => render_prediction(view),
    };
    let visible = !matches!(props.state, ResultState::Idle);
    let class = if visible { "result-card show" } else { "result-card" };

    html! {
        <section id="result" ref={card_ref} {class} hidden={!visible} aria-live="polite">
            { body }
        </section>
    }
}
