use std::time::Duration;
use thirtyfour::Capabilities;
use thirtyfour::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowserKind {
    Chrome,
    Edge,
    Firefox,
    Safari,
}

impl BrowserKind {
    #[must_use]
    pub fn label(self) -> String {
        format!("{self:?}").to_lowercase()
    }

    /// Port of the locally started driver for this browser.
    const fn local_driver_url(self) -> &'static str {
        match self {
            Self::Chrome => "http://localhost:9515",
            Self::Edge => "http://localhost:17556",
            Self::Firefox => "http://localhost:4444",
            Self::Safari => "http://localhost:4445",
        }
    }
}

pub fn parse_browser_kind(name: &str) -> Option<BrowserKind> {
    match name {
        "chrome" => Some(BrowserKind::Chrome),
        "edge" => Some(BrowserKind::Edge),
        "firefox" => Some(BrowserKind::Firefox),
        "safari" => Some(BrowserKind::Safari),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct BrowserConfig {
    pub headless: bool,
    pub implicit_wait_secs: u64,
    pub remote_hub: Option<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: true,
            implicit_wait_secs: 3,
            remote_hub: None,
        }
    }
}

fn capabilities(kind: BrowserKind, cfg: &BrowserConfig) -> WebDriverResult<Capabilities> {
    Ok(match kind {
        BrowserKind::Chrome => {
            let mut caps = DesiredCapabilities::chrome();
            if cfg.headless {
                caps.set_headless()?;
            }
            // Intro clips must be allowed to start without a prior gesture.
            caps.add_arg("--autoplay-policy=no-user-gesture-required")?;
            caps.into()
        }
        BrowserKind::Edge => {
            let mut caps = DesiredCapabilities::edge();
            if cfg.headless {
                caps.set_headless()?;
            }
            caps.into()
        }
        BrowserKind::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            if cfg.headless {
                caps.set_headless()?;
            }
            caps.into()
        }
        // safaridriver has no headless mode.
        BrowserKind::Safari => DesiredCapabilities::safari().into(),
    })
}

/// Start a WebDriver session on the hub if one is configured, else on the
/// browser's local driver.
pub async fn new_session(kind: BrowserKind, cfg: &BrowserConfig) -> WebDriverResult<WebDriver> {
    let url = cfg
        .remote_hub
        .as_deref()
        .unwrap_or_else(|| kind.local_driver_url());
    let driver = WebDriver::new(url, capabilities(kind, cfg)?).await?;
    driver
        .set_implicit_wait_timeout(Duration::from_secs(cfg.implicit_wait_secs))
        .await?;
    Ok(driver)
}
