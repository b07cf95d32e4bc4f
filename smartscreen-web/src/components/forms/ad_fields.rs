use crate::i18n::t;
use smartscreen_core::forms::ALLOWED_AD;
use yew::prelude::*;

/// One select per ad-placement field, offering exactly the accepted values.
#[function_component(AdFields)]
pub fn ad_fields() -> Html {
    let choose = t("forms.choose");
    html! {
        <>
            { for ALLOWED_AD.iter().map(|(name, values)| html! {
                <label class="field" for={*name}>
                    <span class="field-label">{ t(&format!("forms.ad.fields.{name}")) }</span>
                    <select id={*name} name={*name} required=true>
                        <option value="" selected=true disabled=true>{ choose.clone() }</option>
                        { for values.iter().map(|value| html! {
                            <option value={*value}>{ t(&format!("forms.ad.options.{name}.{value}")) }</option>
                        }) }
                    </select>
                </label>
            }) }
        </>
    }
}
