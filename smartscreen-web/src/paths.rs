//! URLs under the deployment base path.
//!
//! `PUBLIC_URL` is read at compile time (e.g. `/site` when the shell is served
//! from a subdirectory); without it every path is root-anchored.
use smartscreen_core::ApiConfig;

/// Normalized deployment prefix: no trailing slash, `None` at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct DeployBase<'a>(Option<&'a str>);

impl<'a> DeployBase<'a> {
    fn parse(raw: &'a str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        Self((!trimmed.is_empty()).then_some(trimmed))
    }

    fn compiled() -> Self {
        Self::parse(option_env!("PUBLIC_URL").unwrap_or(""))
    }

    fn join(self, relative: &str) -> String {
        let rel = relative.trim_start_matches('/');
        format!("{}/{rel}", self.0.unwrap_or(""))
    }

    /// Location path as the shell sees it, with the prefix removed.
    fn strip(self, path: &str) -> String {
        match self.0.and_then(|base| path.strip_prefix(base)) {
            Some("") => "/".to_string(),
            Some(rest) if rest.starts_with('/') => rest.to_string(),
            _ => path.to_string(),
        }
    }
}

/// Root-anchored URL of a shell asset, fragment or page.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    DeployBase::compiled().join(relative)
}

/// Base path the shell is served under, `None` at the root.
#[must_use]
pub fn router_base() -> Option<String> {
    DeployBase::compiled().0.map(str::to_string)
}

/// Location path with the deployment base removed, for route matching.
#[must_use]
pub fn strip_router_base(path: &str) -> String {
    DeployBase::compiled().strip(path)
}

/// Prediction API base: `window.BACKEND_BASE`, then `SMARTSCREEN_API_BASE`, then the default.
#[must_use]
pub fn api_config() -> ApiConfig {
    let runtime = crate::dom::runtime_backend_base();
    ApiConfig::resolve(runtime.as_deref(), option_env!("SMARTSCREEN_API_BASE"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_deployments_anchor_at_slash() {
        assert_eq!(
            asset_path("fragments/home-ar.json"),
            "/fragments/home-ar.json"
        );
        assert_eq!(asset_path("/static/img/logo.png"), "/static/img/logo.png");
        assert_eq!(router_base(), None);
    }

    #[test]
    fn subdirectory_deployments_prefix_every_path() {
        let base = DeployBase::parse("/site/");
        assert_eq!(base, DeployBase(Some("/site")));
        assert_eq!(
            base.join("static/audio/intro-en.mp3"),
            "/site/static/audio/intro-en.mp3"
        );
        assert_eq!(base.join("/fragments/pm-en.json"), "/site/fragments/pm-en.json");
        assert_eq!(DeployBase::parse("  "), DeployBase(None));
    }

    #[test]
    fn strips_deployment_base_from_locations() {
        let base = DeployBase::parse("/site");
        assert_eq!(base.strip("/site/pages/ad-en.html"), "/pages/ad-en.html");
        assert_eq!(base.strip("/site"), "/");
        assert_eq!(base.strip("/sitemap.xml"), "/sitemap.xml");
        assert_eq!(DeployBase(None).strip("/pages/a.html"), "/pages/a.html");
    }

    #[test]
    fn api_config_falls_back_outside_the_browser() {
        let cfg = api_config();
        assert!(cfg.url(smartscreen_core::Endpoint::BestPlace).ends_with("/api/btp"));
    }
}
