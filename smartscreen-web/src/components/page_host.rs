//! Content region: renders a loaded fragment and mounts its form and the chat widget.

use crate::app::PageLoad;
use crate::components::chat_widget::ChatWidget;
use crate::components::forms::FormPanel;
use crate::i18n::t;
use smartscreen_core::nav::is_page_path;
use smartscreen_core::{FORMS, FormKind, Lang};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub page: AttrValue,
    pub lang: Lang,
    pub load: PageLoad,
    pub on_link: Callback<String>,
    pub on_back: Callback<()>,
}

/// Whether a content link stays inside the shell.
#[must_use]
pub fn is_shell_link(href: &str) -> bool {
    href.starts_with("/pages/") && is_page_path(href)
}

#[cfg(target_arch = "wasm32")]
fn clicked_href(event: &MouseEvent) -> Option<String> {
    use wasm_bindgen::JsCast;

    if event.ctrl_key() || event.meta_key() || event.shift_key() || event.button() != 0 {
        return None;
    }
    let target = event.target()?.dyn_into::<web_sys::Element>().ok()?;
    let anchor = target.closest("a").ok()??;
    anchor.get_attribute("href")
}

#[function_component(PageHost)]
pub fn page_host(props: &Props) -> Html {
    let form_kind: Option<FormKind> = match &props.load {
        PageLoad::Ready(fragment) => fragment.form,
        _ => None,
    };
    let binding = use_memo(form_kind, |kind| kind.and_then(|k| FORMS.resolve(k)));

    {
        let title = match &props.load {
            PageLoad::Ready(fragment) => Some(fragment.title.clone()),
            _ => None,
        };
        use_effect_with(title, |title| {
            if let Some(title) = title.as_ref().filter(|t| !t.is_empty())
                && let Some(doc) = crate::dom::document()
            {
                doc.set_title(title);
            }
        });
    }

    let on_content_click = {
        let on_link = props.on_link.clone();
        Callback::from(move |event: MouseEvent| {
            #[cfg(target_arch = "wasm32")]
            if let Some(href) = clicked_href(&event).filter(|href| is_shell_link(href)) {
                event.prevent_default();
                on_link.emit(href);
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = (&event, &on_link);
        })
    };

    match &props.load {
        PageLoad::Ready(fragment) => {
            let content = Html::from_html_unchecked(AttrValue::from(fragment.content.clone()));
            let form = (*binding).map(|binding| {
                html! { <FormPanel {binding} lang={fragment.lang} /> }
            });
            html! {
                <section id="content" class="page show" lang={fragment.lang.code()} dir={fragment.lang.dir()}>
                    <div class="page-content" onclick={on_content_click}>{ content }</div>
                    { for form }
                    <ChatWidget key={props.page.to_string()} lang={fragment.lang} />
                </section>
            }
        }
        PageLoad::Failed(message) => {
            let on_back = {
                let cb = props.on_back.clone();
                Callback::from(move |_: MouseEvent| cb.emit(()))
            };
            html! {
                <section id="content" class="page page-error show" role="alert">
                    <p class="error-message">{ message.clone() }</p>
                    <button type="button" class="back-btn" onclick={on_back}>{ t("shell.back_to_start") }</button>
                </section>
            }
        }
        PageLoad::Idle | PageLoad::Loading => html! {
            <section id="content" class="page" data-page={props.page.clone()} aria-busy="true" />
        },
    }
}
