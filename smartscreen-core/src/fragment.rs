//! Partial-render protocol for in-page navigation.
//!
//! Each page is served as a JSON document carrying its content markup and
//! metadata, so the shell never has to carve a `<body>` out of full HTML.

use crate::forms::FormKind;
use crate::lang::Lang;
use crate::session::{SessionContext, SessionStore};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fragment {
    pub lang: Lang,
    #[serde(default)]
    pub title: String,
    /// Form the page hosts, if any.
    #[serde(default)]
    pub form: Option<FormKind>,
    /// Content markup grafted into the shell's content region.
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FragmentError {
    #[error("`{0}` is not a page path")]
    NotAPage(String),
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("fragment request returned HTTP {0}")]
    Status(u16),
    #[error("malformed fragment: {0}")]
    Malformed(String),
}

/// Decode a fragment fetch outcome.
///
/// # Errors
///
/// Returns [`FragmentError::Status`] for non-2xx statuses and
/// [`FragmentError::Malformed`] when the body is not a fragment document.
pub fn decode_fragment(status: u16, body: &str) -> Result<Fragment, FragmentError> {
    if !(200..300).contains(&status) {
        return Err(FragmentError::Status(status));
    }
    serde_json::from_str(body).map_err(|e| FragmentError::Malformed(e.to_string()))
}

/// What the shell does after a fragment request settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentOutcome {
    Render(Fragment),
    /// Leave the single-page shell and let the browser load the page itself.
    FullReload(String),
    /// The fallback already failed once for this page in this session.
    GiveUp(FragmentError),
}

impl<S: SessionStore> SessionContext<S> {
    /// Turn a settled fragment request for `page` into the shell's next step.
    ///
    /// Any success clears the reload guard. A failure asks for one full
    /// reload; if that reload lands back here and the same page fails again,
    /// the shell gives up instead of looping.
    pub fn settle_fragment(
        &self,
        page: &str,
        result: Result<Fragment, FragmentError>,
    ) -> FragmentOutcome {
        match result {
            Ok(fragment) => {
                self.clear_fallback();
                FragmentOutcome::Render(fragment)
            }
            Err(err) if self.allow_fallback(page) => {
                log::warn!("fragment for {page} failed ({err}); reloading the full page");
                FragmentOutcome::FullReload(page.to_string())
            }
            Err(err) => {
                log::error!("fragment for {page} failed again after a full reload: {err}");
                FragmentOutcome::GiveUp(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;

    #[test]
    fn decodes_fragment_with_form_metadata() {
        let body = r#"{"lang":"ar","title":"صيانة","form":"pm","content":"<p>x</p>"}"#;
        let fragment = decode_fragment(200, body).unwrap();
        assert_eq!(fragment.lang, Lang::Ar);
        assert_eq!(fragment.form, Some(FormKind::Maintenance));
    }

    #[test]
    fn form_and_title_are_optional() {
        let fragment = decode_fragment(200, r#"{"lang":"en","content":""}"#).unwrap();
        assert_eq!(fragment.form, None);
        assert!(fragment.title.is_empty());
    }

    #[test]
    fn failures_are_classified() {
        assert_eq!(decode_fragment(404, "{}"), Err(FragmentError::Status(404)));
        assert!(matches!(
            decode_fragment(200, "<html><body>old page</body></html>"),
            Err(FragmentError::Malformed(_))
        ));
    }

    #[test]
    fn failure_reloads_once_then_gives_up() {
        let ctx = SessionContext::new(MemorySessionStore::new());
        let page = "/pages/ad-en.html";
        assert_eq!(
            ctx.settle_fragment(page, Err(FragmentError::Status(500))),
            FragmentOutcome::FullReload(page.to_string())
        );
        assert_eq!(
            ctx.settle_fragment(page, Err(FragmentError::Status(500))),
            FragmentOutcome::GiveUp(FragmentError::Status(500))
        );
    }

    #[test]
    fn another_page_rendering_rearms_the_reload() {
        let ctx = SessionContext::new(MemorySessionStore::new());
        let ad = "/pages/ad-en.html";
        let home = "/pages/home-en.html";
        assert_eq!(
            ctx.settle_fragment(ad, Err(FragmentError::Status(503))),
            FragmentOutcome::FullReload(ad.to_string())
        );
        let fragment = decode_fragment(200, r#"{"lang":"en","content":"<h1>home</h1>"}"#).unwrap();
        assert!(matches!(
            ctx.settle_fragment(home, Ok(fragment)),
            FragmentOutcome::Render(_)
        ));
        assert_eq!(
            ctx.settle_fragment(ad, Err(FragmentError::Status(404))),
            FragmentOutcome::FullReload(ad.to_string())
        );
    }

    #[test]
    fn failure_elsewhere_takes_over_the_guard() {
        let ctx = SessionContext::new(MemorySessionStore::new());
        let _ = ctx.settle_fragment("/pages/ad-ar.html", Err(FragmentError::Status(500)));
        assert!(matches!(
            ctx.settle_fragment("/pages/pm-ar.html", Err(FragmentError::Status(500))),
            FragmentOutcome::FullReload(_)
        ));
        assert!(matches!(
            ctx.settle_fragment("/pages/ad-ar.html", Err(FragmentError::Status(500))),
            FragmentOutcome::FullReload(_)
        ));
    }

    #[test]
    fn success_rearms_the_reload_guard() {
        let ctx = SessionContext::new(MemorySessionStore::new());
        let page = "/pages/home-ar.html";
        let _ = ctx.settle_fragment(page, Err(FragmentError::Fetch("offline".into())));
        let fragment = decode_fragment(200, r#"{"lang":"ar","content":"<h1>x</h1>"}"#).unwrap();
        assert!(matches!(
            ctx.settle_fragment(page, Ok(fragment)),
            FragmentOutcome::Render(_)
        ));
        assert!(matches!(
            ctx.settle_fragment(page, Err(FragmentError::Status(404))),
            FragmentOutcome::FullReload(_)
        ));
    }
}
