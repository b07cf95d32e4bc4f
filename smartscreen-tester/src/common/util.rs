use anyhow::{Context, Result};
use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use std::{fs, path::Path};
use thirtyfour::prelude::*;

/// `<base>/<browser>/<scenario>/<UTC timestamp>`
pub fn artifacts_dir(base: &str, browser: &str, scenario: &str) -> String {
    let stamp = Utc::now().format("%Y%m%dT%H%M%SZ");
    format!("{base}/{browser}/{scenario}/{stamp}")
}

/// Shell state worth keeping next to a failure screenshot.
const SHELL_STATE_JS: &str = r"
    const root = document.documentElement;
    return {
        url: window.location.href,
        lang: root.getAttribute('lang'),
        dir: root.getAttribute('dir'),
        session: Object.assign({}, window.sessionStorage),
    };
";

/// What the browser looked like when a scenario failed.
#[derive(Debug, Default, Serialize)]
struct FailureSnapshot {
    #[serde(skip)]
    screenshot: Option<Vec<u8>>,
    #[serde(skip)]
    dom: Option<String>,
    shell: Option<Value>,
    error: String,
}

impl FailureSnapshot {
    fn write_to(&self, dir: &Path) -> Result<()> {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating artifacts dir {}", dir.display()))?;

        if let Some(png) = &self.screenshot {
            fs::write(dir.join("screenshot.png"), png).context("writing screenshot")?;
        }
        if let Some(dom) = &self.dom {
            fs::write(dir.join("dom.html"), dom).context("writing DOM")?;
        }
        let state = serde_json::to_vec_pretty(self).context("encoding shell state")?;
        fs::write(dir.join("state.json"), state).context("writing shell state")?;
        fs::write(dir.join("error.txt"), &self.error).context("writing error chain")?;
        Ok(())
    }
}

/// Save a screenshot, the DOM, the shell state and the error chain under `dir`.
/// Whatever the browser cannot provide is skipped.
pub async fn capture_artifacts(driver: &WebDriver, dir: &str, err: &anyhow::Error) -> Result<()> {
    let snapshot = FailureSnapshot {
        screenshot: driver.screenshot_as_png().await.ok(),
        dom: driver.source().await.ok(),
        shell: driver
            .execute(SHELL_STATE_JS, Vec::new())
            .await
            .ok()
            .map(|ret| ret.json().clone()),
        error: format!("{err:#}"),
    };
    snapshot.write_to(Path::new(dir))
}

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|x| !x.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn split_csv_drops_blank_entries() {
        assert_eq!(
            split_csv(" smoke, ,chat,  validation "),
            vec!["smoke", "chat", "validation"]
        );
        assert!(split_csv(" , ").is_empty());
    }

    #[test]
    fn artifacts_dir_nests_browser_then_scenario() {
        let dir = artifacts_dir("target/out", "firefox", "chat");
        assert!(dir.starts_with("target/out/firefox/chat/"));
        assert!(dir.ends_with('Z'));
    }

    #[test]
    fn snapshot_writes_only_what_was_captured() {
        let dir = std::env::temp_dir().join(format!(
            "smartscreen-artifacts-{}-{}",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));
        let snapshot = FailureSnapshot {
            screenshot: None,
            dom: Some("<main id=\"app\"></main>".into()),
            shell: Some(json!({ "lang": "ar", "session": { "introPlayed_ar": "1" } })),
            error: "timed out waiting for `#content.show`".into(),
        };
        snapshot.write_to(&dir).expect("write artifacts");

        assert!(!dir.join("screenshot.png").exists());
        assert!(dir.join("dom.html").exists());
        let state: Value =
            serde_json::from_slice(&fs::read(dir.join("state.json")).expect("state")).expect("json");
        assert_eq!(state["shell"]["session"]["introPlayed_ar"], "1");
        assert_eq!(
            fs::read_to_string(dir.join("error.txt")).expect("error"),
            "timed out waiting for `#content.show`"
        );
        let _ = fs::remove_dir_all(dir);
    }
}
