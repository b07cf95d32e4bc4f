//! Floating FAQ assistant.

use crate::i18n::t;
use crate::paths::asset_path;
use once_cell::sync::Lazy;
use smartscreen_core::chat::ChatWidget as ChatState;
use smartscreen_core::{AVATAR_FRAME_MS, AvatarRotator, ChatRole, FaqBook, FeedEntry, Lang, TYPING_DELAY_MS};
use yew::prelude::*;

static FAQ: Lazy<FaqBook> = Lazy::new(|| {
    FaqBook::from_json(include_str!("../../static/assets/data/faq.json")).unwrap_or_else(|err| {
        log::error!("faq.json is malformed: {err}");
        FaqBook::default()
    })
});

#[must_use]
pub fn avatar_frames() -> Vec<String> {
    (1..=4)
        .map(|n| asset_path(&format!("static/img/robot{n}.png")))
        .collect()
}

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub lang: Lang,
}

#[function_component(ChatWidget)]
pub fn chat_widget(props: &Props) -> Html {
    let state = use_mut_ref(ChatState::new);
    let avatar = use_mut_ref(|| AvatarRotator::new(avatar_frames()));
    let rerender = use_force_update();
    let feed_ref = use_node_ref();

    {
        let avatar = avatar.clone();
        let rerender = rerender.clone();
        use_effect_with((), move |()| {
            #[cfg(target_arch = "wasm32")]
            let rotation = crate::dom::Interval::new(AVATAR_FRAME_MS, move || {
                avatar.borrow_mut().advance();
                rerender.force_update();
            })
            .map_err(|err| log::warn!("avatar rotation stopped: {}", crate::dom::js_error_message(&err)))
            .ok();
            #[cfg(not(target_arch = "wasm32"))]
            let rotation = {
                let _ = (avatar, rerender, AVATAR_FRAME_MS);
            };
            move || drop(rotation)
        });
    }
    {
        let feed_ref = feed_ref.clone();
        use_effect(move || {
            if let Some(feed) = feed_ref.cast::<web_sys::Element>() {
                feed.set_scroll_top(feed.scroll_height());
            }
        });
    }

    let Some(script) = FAQ.script(props.lang) else {
        return Html::default();
    };

    let on_toggle = {
        let state = state.clone();
        let rerender = rerender.clone();
        let greeting = script.greeting.clone();
        Callback::from(move |_: MouseEvent| {
            state.borrow_mut().toggle(&greeting);
            rerender.force_update();
        })
    };
    let on_close = {
        let state = state.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: MouseEvent| {
            state.borrow_mut().close();
            rerender.force_update();
        })
    };
    let chip = |question: &str, answer: &str| {
        let state = state.clone();
        let rerender = rerender.clone();
        let question = question.to_string();
        let answer = answer.to_string();
        Callback::from(move |_: MouseEvent| {
            let ticket = state.borrow_mut().ask(&question);
            rerender.force_update();
            let state = state.clone();
            let rerender = rerender.clone();
            let answer = answer.clone();
            #[cfg(target_arch = "wasm32")]
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = crate::dom::sleep_ms(TYPING_DELAY_MS).await {
                    log::warn!("typing delay failed: {}", crate::dom::js_error_message(&err));
                }
                state.borrow_mut().answer(ticket, &answer);
                rerender.force_update();
            });
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = TYPING_DELAY_MS;
                state.borrow_mut().answer(ticket, &answer);
                rerender.force_update();
            }
        })
    };

    let chat = state.borrow();
    let feed = chat.feed().iter().map(|entry| match entry {
        FeedEntry::Message(message) => {
            let class = match message.role {
                ChatRole::User => "imi-user",
                ChatRole::Bot => "imi-bot",
            };
            html! { <div {class}>{ message.text.clone() }</div> }
        }
        FeedEntry::Typing(_) => html! { <div class="imi-bot imi-typing">{ script.typing.clone() }</div> },
    });
    let chips = script.entries.iter().map(|entry| {
        html! {
            <button type="button" class="imi-chip" onclick={chip(&entry.question, &entry.answer)}>
                { entry.question.clone() }
            </button>
        }
    });
    let root_class = classes!("imi-chat", chat.is_open().then_some("open"));
    let avatar_src = avatar.borrow().current().unwrap_or_default().to_string();

    html! {
        <aside id="imi-chat" class={root_class} lang={props.lang.code()} dir={props.lang.dir()}>
            <button id="imi-toggle" type="button" aria-expanded={chat.is_open().to_string()}
                aria-controls="imi-panel" onclick={on_toggle}>
                <img id="imi-bot" src={avatar_src} alt={t("chat.avatar_alt")} />
                <span class="sr-only">{ t("chat.toggle") }</span>
            </button>
            <div id="imi-panel" role="dialog" aria-labelledby="imi-name" hidden={!chat.is_open()}>
                <header class="imi-head">
                    <div>
                        <strong id="imi-name">{ script.name.clone() }</strong>
                        <small id="imi-sub">{ script.subtitle.clone() }</small>
                    </div>
                    <button id="imi-close" type="button" aria-label={t("chat.close")} onclick={on_close}>{ "×" }</button>
                </header>
                <div id="imi-feed" ref={feed_ref} aria-live="polite">{ for feed }</div>
                <div id="imi-quick">{ for chips }</div>
            </div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_faq_has_both_languages() {
        for lang in Lang::ALL {
            let script = FAQ.script(lang).expect("script for every language");
            assert_eq!(script.entries.len(), 8);
        }
    }

    #[test]
    fn four_avatar_frames() {
        let frames = avatar_frames();
        assert_eq!(frames.len(), 4);
        assert_eq!(frames[0], "/static/img/robot1.png");
    }
}
