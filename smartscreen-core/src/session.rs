//! Session-scoped state behind an explicit store.
//!
//! The browser backs [`SessionStore`] with `sessionStorage`; tests and the
//! tester use [`MemorySessionStore`].

use crate::lang::Lang;
use std::cell::RefCell;
use std::collections::BTreeMap;

const FLAG_SET: &str = "1";
/// Holds the page whose fragment failed last and was sent for a full reload.
const FALLBACK_KEY: &str = "fragmentFallback";

pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.items.borrow_mut().remove(key);
    }
}

impl<S: SessionStore + ?Sized> SessionStore for std::rc::Rc<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) {
        (**self).remove(key);
    }
}

/// Storage key of the intro-played flag for `lang`.
#[must_use]
pub fn intro_key(lang: Lang) -> String {
    format!("introPlayed_{}", lang.code())
}

/// Owns every piece of state that must survive page swaps within one browser session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext<S> {
    store: S,
}

impl<S: SessionStore> SessionContext<S> {
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    pub const fn store(&self) -> &S {
        &self.store
    }

    #[must_use]
    pub fn intro_played(&self, lang: Lang) -> bool {
        self.store.get(&intro_key(lang)).as_deref() == Some(FLAG_SET)
    }

    /// Check-and-set the intro flag. Returns `true` exactly once per language
    /// per session, unless the claim is released again.
    pub fn claim_intro(&self, lang: Lang) -> bool {
        if self.intro_played(lang) {
            log::debug!("intro for {lang} already played this session");
            return false;
        }
        self.store.set(&intro_key(lang), FLAG_SET);
        true
    }

    /// Undo a claim whose playback the browser refused.
    pub fn release_intro(&self, lang: Lang) {
        self.store.remove(&intro_key(lang));
    }

    /// Whether a full reload to `page` may be attempted after a fragment
    /// failure. Only the failure directly following a reload of the same page
    /// is refused; a failure on any other page takes over the guard.
    pub fn allow_fallback(&self, page: &str) -> bool {
        if self.store.get(FALLBACK_KEY).as_deref() == Some(page) {
            return false;
        }
        self.store.set(FALLBACK_KEY, page);
        true
    }

    /// Forget the pending reload; called whenever any fragment renders.
    pub fn clear_fallback(&self) {
        self.store.remove(FALLBACK_KEY);
    }

    /// Forget both intro flags.
    pub fn reset(&self) {
        for lang in Lang::ALL {
            self.store.remove(&intro_key(lang));
        }
    }
}
