//! Intro clips played when a language is chosen.

use crate::paths::asset_path;
use smartscreen_core::{Lang, SessionContext, SessionStore};

#[must_use]
pub fn clip_path(lang: Lang) -> String {
    asset_path(&format!("static/audio/intro-{}.mp3", lang.code()))
}

/// One preloaded clip per language. Inert outside the browser.
#[derive(Default)]
pub struct IntroAudio {
    #[cfg(target_arch = "wasm32")]
    clips: Vec<(Lang, web_sys::HtmlAudioElement)>,
}

impl IntroAudio {
    #[must_use]
    pub fn load() -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            let clips = Lang::ALL
                .into_iter()
                .filter_map(|lang| {
                    let clip = web_sys::HtmlAudioElement::new_with_src(&clip_path(lang)).ok()?;
                    clip.set_preload("auto");
                    Some((lang, clip))
                })
                .collect();
            Self { clips }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::default()
        }
    }

    /// Play the intro for `lang`, whose session flag the caller has already
    /// claimed. If the browser refuses playback (autoplay policy) the claim is
    /// released so a later choice can try again.
    ///
    /// The claim is taken before `play()` starts, so a second click while the
    /// first playback is pending finds the flag set and starts no second clip.
    pub fn play_claimed<S>(&self, session: &SessionContext<S>, lang: Lang)
    where
        S: SessionStore + Clone + 'static,
    {
        #[cfg(target_arch = "wasm32")]
        {
            let Some((_, clip)) = self.clips.iter().find(|(l, _)| *l == lang) else {
                session.release_intro(lang);
                return;
            };
            clip.set_volume(1.0);
            clip.set_current_time(0.0);
            let started = match clip.play() {
                Ok(promise) => promise,
                Err(err) => {
                    log::warn!("intro play error: {}", crate::dom::js_error_message(&err));
                    session.release_intro(lang);
                    return;
                }
            };
            let session = session.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match wasm_bindgen_futures::JsFuture::from(started).await {
                    Ok(_) => log::info!("intro started for {lang}"),
                    Err(err) => {
                        log::warn!("intro rejected: {}", crate::dom::js_error_message(&err));
                        session.release_intro(lang);
                    }
                }
            });
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = session;
            log::debug!("no audio backend for the {lang} intro");
        }
    }

    /// Pause every clip and rewind it.
    pub fn stop_all(&self) {
        #[cfg(target_arch = "wasm32")]
        for (_, clip) in &self.clips {
            let _ = clip.pause();
            clip.set_current_time(0.0);
        }
    }

    /// Play and immediately pause every clip inside a user gesture so iOS
    /// allows later programmatic playback.
    pub fn unlock(&self) {
        #[cfg(target_arch = "wasm32")]
        for (_, clip) in &self.clips {
            // The pause below rejects this play promise; nothing to handle.
            let _ = clip.play();
            let _ = clip.pause();
            clip.set_current_time(0.0);
        }
        log::debug!("intro audio unlocked");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartscreen_core::MemorySessionStore;
    use std::rc::Rc;

    #[test]
    fn clip_paths_follow_language() {
        assert_eq!(clip_path(Lang::Ar), "/static/audio/intro-ar.mp3");
        assert_eq!(clip_path(Lang::En), "/static/audio/intro-en.mp3");
    }

    #[test]
    fn host_playback_keeps_the_claim() {
        let session = SessionContext::new(Rc::new(MemorySessionStore::new()));
        let audio = IntroAudio::load();
        assert!(session.switch_language(Lang::En).play_intro);
        audio.play_claimed(&session, Lang::En);
        assert!(session.intro_played(Lang::En));
        assert!(!session.intro_played(Lang::Ar));
        audio.stop_all();
        audio.unlock();
    }

    #[test]
    fn second_click_during_playback_does_not_replay() {
        let session = SessionContext::new(Rc::new(MemorySessionStore::new()));
        let audio = IntroAudio::load();
        let first = session.switch_language(Lang::Ar);
        assert!(first.play_intro);
        audio.play_claimed(&session, Lang::Ar);
        assert!(!session.switch_language(Lang::Ar).play_intro);
    }
}
