use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use smartscreen_core::{Lang, SessionStore};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, RequestCache, RequestInit, Response, Storage, Window};

/// Retrieve the global `window` object, if running in a browser.
///
/// Always `None` on non-wasm hosts, so every helper below degrades to a
/// no-op there instead of calling into JavaScript.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

fn require_window() -> Result<Window, JsValue> {
    window().ok_or_else(|| JsValue::from_str("`window` unavailable"))
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Show a blocking alert; falls back to the log when alerts are unavailable.
pub fn alert(message: &str) {
    let shown = window().is_some_and(|w| w.alert_with_message(message).is_ok());
    if !shown {
        log::info!("alert: {message}");
    }
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: u32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let timeout = i32::try_from(duration_ms).unwrap_or(i32::MAX);
    let _ = require_window()?.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        timeout,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}

#[allow(clippy::future_not_send)]
async fn send(url: &str, init: &RequestInit) -> Result<(u16, String), JsValue> {
    let resp_value = JsFuture::from(require_window()?.fetch_with_str_and_init(url, init)).await?;
    let response: Response = resp_value.dyn_into()?;
    let text = JsFuture::from(response.text()?).await?;
    Ok((response.status(), text.as_string().unwrap_or_default()))
}

/// GET `url` bypassing the HTTP cache and return `(status, body)`.
///
/// # Errors
/// Returns an error if the request never completes.
#[allow(clippy::future_not_send)]
pub async fn fetch_no_cache(url: &str) -> Result<(u16, String), JsValue> {
    let init = RequestInit::new();
    init.set_method("GET");
    init.set_cache(RequestCache::NoCache);
    send(url, &init).await
}

/// POST a JSON body and return `(status, body)`.
///
/// # Errors
/// Returns an error if the request never completes.
#[allow(clippy::future_not_send)]
pub async fn post_json(url: &str, body: &str, content_type: &str) -> Result<(u16, String), JsValue> {
    let headers = web_sys::Headers::new()?;
    headers.set("Content-Type", content_type)?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(&JsValue::from_str(body));
    send(url, &init).await
}

/// `window.BACKEND_BASE`, when the hosting page sets one.
#[must_use]
pub fn runtime_backend_base() -> Option<String> {
    let win = window()?;
    Reflect::get(&win, &JsValue::from_str("BACKEND_BASE"))
        .ok()
        .and_then(|v| v.as_string())
}

/// Set `<html lang dir>` and the body direction classes.
pub fn apply_lang(lang: Lang) {
    let Some(doc) = document() else {
        return;
    };
    if let Some(root) = doc.document_element() {
        let _ = root.set_attribute("lang", lang.code());
        let _ = root.set_attribute("dir", lang.dir());
    }
    if let Some(body) = doc.body() {
        let classes = body.class_list();
        let _ = classes.toggle_with_force("rtl", lang.is_rtl());
        let _ = classes.toggle_with_force("ltr", !lang.is_rtl());
    }
}

/// Current `location.pathname`.
#[must_use]
pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Current `history.state` as JSON text, if any.
#[must_use]
pub fn history_state_json() -> Option<String> {
    let state = window()?.history().ok()?.state().ok()?;
    if state.is_null() || state.is_undefined() {
        return None;
    }
    js_sys::JSON::stringify(&state).ok()?.as_string()
}

#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("history state is not serializable: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("history refused the entry: {0}")]
    Refused(String),
}

impl From<JsValue> for HistoryError {
    fn from(value: JsValue) -> Self {
        Self::Refused(js_error_message(&value))
    }
}

/// Push a history entry carrying `state` as its JSON state object.
///
/// # Errors
/// Returns [`HistoryError::Encode`] if `state` does not serialize, or
/// [`HistoryError::Refused`] if the browser rejects the push.
pub fn push_history<T: Serialize + ?Sized>(state: &T, url: &str) -> Result<(), HistoryError> {
    let json = serde_json::to_string(state)?;
    let win = window().ok_or_else(|| HistoryError::Refused("`window` unavailable".into()))?;
    let state = js_sys::JSON::parse(&json)?;
    win.history()?.push_state_with_url(&state, "", Some(url))?;
    Ok(())
}

/// Leave the single-page shell and let the browser load `url` itself.
pub fn full_navigation(url: &str) {
    if let Some(win) = window()
        && let Err(err) = win.location().set_href(url)
    {
        log::error!("full navigation to {url} failed: {}", js_error_message(&err));
    }
}

/// [`SessionStore`] backed by `window.sessionStorage`. Silently inert when
/// storage is unavailable (private mode, non-browser hosts).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserSessionStore;

fn storage_if_available() -> Option<Storage> {
    window()?.session_storage().ok().flatten()
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        storage_if_available()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = storage_if_available()
            && storage.set_item(key, value).is_err()
        {
            log::warn!("sessionStorage refused `{key}`");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = storage_if_available() {
            let _ = storage.remove_item(key);
        }
    }
}

/// Repeating timer, cleared when dropped.
pub struct Interval {
    handle: i32,
    _tick: Closure<dyn FnMut()>,
}

impl Interval {
    /// Schedule `tick` every `period_ms` milliseconds.
    ///
    /// # Errors
    /// Returns an error if no window is available or the timer is refused.
    pub fn new(period_ms: u32, tick: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let tick = Closure::<dyn FnMut()>::new(tick);
        let handle = require_window()?.set_interval_with_callback_and_timeout_and_arguments_0(
            tick.as_ref().unchecked_ref(),
            i32::try_from(period_ms).unwrap_or(i32::MAX),
        )?;
        Ok(Self {
            handle,
            _tick: tick,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_interval_with_handle(self.handle);
        }
    }
}

/// Window event listener, removed when dropped.
pub struct WindowListener {
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    /// # Errors
    /// Returns an error if no window is available or the listener is refused.
    pub fn new(
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        require_window()?
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { event, callback })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(win) = window() {
            let _ = win.remove_event_listener_with_callback(
                self.event,
                self.callback.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Run `handler` on the first occurrence of `event` on the window, then forget it.
///
/// # Errors
/// Returns an error if no window is available or the listener is refused.
pub fn once_on_window(event: &str, handler: impl FnOnce() + 'static) -> Result<(), JsValue> {
    let callback = Closure::once_into_js(handler);
    let options = web_sys::AddEventListenerOptions::new();
    options.set_once(true);
    options.set_passive(true);
    require_window()?.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &options,
    )
}
