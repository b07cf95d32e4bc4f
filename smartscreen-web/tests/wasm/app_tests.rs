#![cfg(target_arch = "wasm32")]

use smartscreen_core::{Lang, SessionContext};
use smartscreen_web::app::App;
use smartscreen_web::dom::{self, BrowserSessionStore};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlElement;
use yew::Renderer;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn ensure_app_root() -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id("root") {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create app root");
    root.set_id("root");
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append app root");
    root
}

async fn render_app() {
    smartscreen_web::i18n::set_lang(Lang::En);
    Renderer::<App>::with_root(ensure_app_root()).render();
    dom::sleep_ms(0).await.expect("yield to the renderer");
}

#[wasm_bindgen_test]
async fn splash_logo_shows_on_first_frame() {
    render_app().await;
    let doc = dom::document().expect("document");
    let logo = doc.get_element_by_id("logo").expect("logo exists");
    assert!(logo.class_list().contains("show"));
    let lang = doc.get_element_by_id("lang").expect("language buttons");
    assert!(!lang.class_list().contains("show"));
}

#[wasm_bindgen_test]
fn apply_lang_sets_direction() {
    dom::apply_lang(Lang::Ar);
    let doc = dom::document().expect("document");
    let html = doc.document_element().expect("html element");
    assert_eq!(html.get_attribute("dir").as_deref(), Some("rtl"));
    assert!(doc.body().expect("body").class_list().contains("rtl"));
    dom::apply_lang(Lang::En);
    assert_eq!(html.get_attribute("lang").as_deref(), Some("en"));
    assert!(doc.body().expect("body").class_list().contains("ltr"));
}

#[wasm_bindgen_test]
fn session_store_round_trips_intro_flags() {
    let session = SessionContext::new(BrowserSessionStore);
    session.reset();
    assert!(session.claim_intro(Lang::Ar));
    assert!(!session.claim_intro(Lang::Ar));
    smartscreen_web::reset_intro_sound();
    assert!(!session.intro_played(Lang::Ar));
}

#[wasm_bindgen_test]
async fn empty_ad_form_collects_no_fields() {
    use smartscreen_core::{FORMS, FormKind};
    use smartscreen_web::components::forms::{FormPanel, Props};

    let root = ensure_app_root();
    Renderer::<FormPanel>::with_root_and_props(
        root,
        Props {
            binding: FORMS.resolve(FormKind::Ad).expect("ad binding"),
            lang: Lang::En,
        },
    )
    .render();
    dom::sleep_ms(0).await.expect("yield to the renderer");

    let doc = dom::document().expect("document");
    let form = doc
        .get_element_by_id("ad-form")
        .expect("ad form")
        .dyn_into::<web_sys::HtmlFormElement>()
        .expect("form element");
    assert!(smartscreen_web::components::forms::collect_fields(&form).is_empty());

    let result = doc
        .get_element_by_id("result")
        .expect("result card")
        .dyn_into::<HtmlElement>()
        .expect("html element");
    assert!(result.hidden());
}
