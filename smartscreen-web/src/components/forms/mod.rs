//! Prediction forms: field markup, submission and the result card.

pub mod ad_fields;
pub mod maintenance_fields;
pub mod messages;

use crate::components::result_card::{ResultCard, ResultState};
use crate::dom;
use messages::{api_message, validation_message};
use smartscreen_core::{FormBinding, FormFields, FormKind, Lang, SubmitError, prepare};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub binding: FormBinding,
    pub lang: Lang,
}

/// Snapshot of the named controls of `form`.
#[cfg(target_arch = "wasm32")]
#[must_use]
pub fn collect_fields(form: &web_sys::HtmlFormElement) -> FormFields {
    let mut fields = FormFields::new();
    let Ok(data) = web_sys::FormData::new_with_form(form) else {
        return fields;
    };
    let Ok(Some(entries)) = js_sys::try_iter(&data) else {
        return fields;
    };
    for entry in entries.flatten() {
        let pair = js_sys::Array::from(&entry);
        if let (Some(name), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string()) {
            fields.insert(name, value);
        }
    }
    fields
}

fn submitted_fields(event: &SubmitEvent) -> FormFields {
    #[cfg(target_arch = "wasm32")]
    {
        event
            .target_dyn_into::<web_sys::HtmlFormElement>()
            .map(|form| collect_fields(&form))
            .unwrap_or_default()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = event;
        FormFields::new()
    }
}

/// Validate, send and settle one submission. At most one alert is shown.
pub fn submit(binding: FormBinding, lang: Lang, fields: &FormFields, result: UseStateHandle<ResultState>) {
    let kind = binding.kind;
    let prepared = match prepare(&binding, &crate::paths::api_config(), fields, lang) {
        Ok(prepared) => prepared,
        Err(SubmitError::Invalid(err)) => {
            log::info!("{} form rejected: {err}", kind.tag());
            dom::alert(&validation_message(kind, &err));
            return;
        }
        Err(SubmitError::Api(err)) => {
            log::error!("{} request could not be built: {err}", kind.tag());
            dom::alert(&api_message(kind, &err));
            return;
        }
    };
    result.set(ResultState::Pending);

    #[cfg(target_arch = "wasm32")]
    wasm_bindgen_futures::spawn_local(async move {
        let request = &prepared.request;
        let outcome = match dom::post_json(
            &request.url,
            &request.body,
            smartscreen_core::ApiRequest::CONTENT_TYPE,
        )
        .await
        {
            Ok((status, body)) => prepared.settle(status, &body),
            Err(err) => Err(smartscreen_core::ApiError::Transport(dom::js_error_message(&err))),
        };
        match outcome {
            Ok(view) => result.set(ResultState::Ready(view)),
            Err(err) => {
                log::error!("{} request failed: {err}", kind.tag());
                dom::alert(&api_message(kind, &err));
                result.set(ResultState::Idle);
            }
        }
    });
    #[cfg(not(target_arch = "wasm32"))]
    log::debug!("{} request to {} needs a browser", kind.tag(), prepared.request.url);
}

#[function_component(FormPanel)]
pub fn form_panel(props: &Props) -> Html {
    let result = use_state(ResultState::default);
    let kind = props.binding.kind;

    let onsubmit = {
        let binding = props.binding;
        let lang = props.lang;
        let result = result.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let fields = submitted_fields(&event);
            submit(binding, lang, &fields, result.clone());
        })
    };

    let fields = match kind {
        FormKind::Ad => html! { <ad_fields::AdFields /> },
        FormKind::Maintenance => html! { <maintenance_fields::MaintenanceFields /> },
    };
    let submit_label = crate::i18n::t(&format!("forms.{}.submit", kind.tag()));
    let busy = matches!(*result, ResultState::Pending);

    html! {
        <div class="form-panel">
            <form id={kind.element_id()} class="predict-form" novalidate={true} {onsubmit}>
                { fields }
                <button type="submit" class="submit-btn" aria-busy={busy.to_string()}>{ submit_label }</button>
            </form>
            <ResultCard {kind} state={(*result).clone()} />
        </div>
    }
}
