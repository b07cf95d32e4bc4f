use anyhow::{Context, Result};
use std::time::Duration;
use thirtyfour::prelude::*;

use crate::logic::LogicScenario;

pub mod chat;
pub mod session;
pub mod smoke;
pub mod status;
pub mod validation;

/// How long a browser step may take before the scenario fails.
pub const STEP_TIMEOUT: Duration = Duration::from_secs(10);
const POLL_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct ScenarioCtx {
    pub base_url: String,
    pub verbose: bool,
}

impl ScenarioCtx {
    pub fn note(&self, line: &str) {
        if self.verbose {
            println!("  {line}");
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()>;
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<LogicScenario>;

    /// `false` for logic-only scenarios; browser mode skips them.
    fn has_browser(&self) -> bool {
        true
    }
}

/// Wait until `css` matches an element, then return it.
pub async fn wait_for(driver: &WebDriver, css: &str) -> Result<WebElement> {
    driver
        .query(By::Css(css))
        .wait(STEP_TIMEOUT, POLL_INTERVAL)
        .first()
        .await
        .with_context(|| format!("timed out waiting for `{css}`"))
}

/// Open the shell and pick a language from the splash.
pub async fn enter_with_language(driver: &WebDriver, ctx: &ScenarioCtx, code: &str) -> Result<()> {
    driver.goto(&ctx.base_url).await?;
    wait_for(driver, "#lang.show").await?;
    ctx.note(&format!("🖱️  choosing `{code}` on the splash"));
    driver
        .find(By::Id(format!("btn-{code}")))
        .await?
        .click()
        .await?;
    wait_for(driver, "#content.show").await?;
    Ok(())
}

pub async fn document_lang(driver: &WebDriver) -> Result<Option<String>> {
    Ok(driver.find(By::Tag("html")).await?.attr("lang").await?)
}

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "validation" => Some(Box::new(validation::ValidationScenario)),
        "status" | "result-status" => Some(Box::new(status::StatusScenario)),
        "session" | "intro-session" => Some(Box::new(session::SessionScenario)),
        "chat" | "faq-chat" => Some(Box::new(chat::ChatScenario)),
        _ => None,
    }
}

pub const ALL_SCENARIOS: [&str; 5] = ["smoke", "validation", "status", "session", "chat"];

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Splash → language choice → home page renders"),
        (
            "validation",
            "Form validation gate: first failing field, no request on failure",
        ),
        (
            "status",
            "Prediction responses: status resolution, tips and error classes",
        ),
        (
            "session",
            "Intro flag per language and the fragment reload guard",
        ),
        ("chat", "FAQ chat: single greeting, question then answer"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_scenario_resolves_with_logic() {
        for (key, _) in list_scenarios() {
            let scenario = get_scenario(key).expect("listed scenario");
            let logic = scenario.as_logic_scenario().expect("logic cases");
            assert!(!logic.cases.is_empty(), "{key} has no cases");
        }
        assert_eq!(list_scenarios().len(), ALL_SCENARIOS.len());
    }

    #[test]
    fn logic_only_scenarios_opt_out_of_the_browser() {
        let browser: Vec<&str> = ALL_SCENARIOS
            .into_iter()
            .filter(|key| get_scenario(key).is_some_and(|s| s.has_browser()))
            .collect();
        assert_eq!(browser, vec!["smoke", "validation", "chat"]);
    }

    #[test]
    fn lookup_is_case_insensitive_and_rejects_unknown() {
        assert!(get_scenario("SMOKE").is_some());
        assert!(get_scenario("faq-chat").is_some());
        assert!(get_scenario("real-game").is_none());
    }
}
