use anyhow::{Result, bail, ensure};
use smartscreen_core::session::intro_key;
use smartscreen_core::{
    FragmentOutcome, Lang, MemorySessionStore, SessionContext, SessionStore, decode_fragment,
};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx};
use crate::logic::{LogicCase, LogicScenario};

pub struct SessionScenario;

#[async_trait::async_trait]
impl BrowserScenario for SessionScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx) -> Result<()> {
        bail!("Browser testing not implemented for the session scenario")
    }
}

impl CombinedScenario for SessionScenario {
    fn has_browser(&self) -> bool {
        false
    }

    fn as_logic_scenario(&self) -> Option<LogicScenario> {
        Some(LogicScenario {
            name: "Session Flags",
            cases: vec![
                LogicCase::new("intro plays once per language", intro_once_per_language),
                LogicCase::new("released claim can be retried", released_claim),
                LogicCase::new("reload guard stops a loop", reload_guard),
                LogicCase::new("any success resets the guard", success_resets_guard),
            ],
        })
    }
}

fn intro_once_per_language() -> Result<()> {
    let session = SessionContext::new(MemorySessionStore::new());
    ensure!(session.switch_language(Lang::Ar).play_intro, "first Arabic choice plays");
    ensure!(!session.switch_language(Lang::Ar).play_intro, "second Arabic choice is silent");
    ensure!(session.switch_language(Lang::En).play_intro, "English has its own flag");
    ensure!(
        session.store().get(&intro_key(Lang::En)).is_some(),
        "flag should be stored under {}",
        intro_key(Lang::En)
    );
    Ok(())
}

fn released_claim() -> Result<()> {
    let session = SessionContext::new(MemorySessionStore::new());
    ensure!(session.claim_intro(Lang::En), "fresh session claims");
    session.release_intro(Lang::En);
    ensure!(!session.intro_played(Lang::En), "release clears the flag");
    ensure!(session.claim_intro(Lang::En), "claim succeeds again after release");
    session.reset();
    ensure!(session.store().is_empty(), "reset forgets every intro flag");
    Ok(())
}

const PAGE: &str = "/pages/pm-ar.html";

fn reload_guard() -> Result<()> {
    let session = SessionContext::new(MemorySessionStore::new());
    let first = session.settle_fragment(PAGE, decode_fragment(404, ""));
    ensure!(
        first == FragmentOutcome::FullReload(PAGE.to_string()),
        "first failure reloads, got {first:?}"
    );
    let second = session.settle_fragment(PAGE, decode_fragment(404, ""));
    ensure!(
        matches!(second, FragmentOutcome::GiveUp(_)),
        "second failure gives up, got {second:?}"
    );
    Ok(())
}

fn success_resets_guard() -> Result<()> {
    let session = SessionContext::new(MemorySessionStore::new());
    let _ = session.settle_fragment(PAGE, decode_fragment(500, ""));
    let ok = session.settle_fragment(
        "/pages/home-ar.html",
        decode_fragment(200, r#"{"lang":"ar","content":"<p/>"}"#),
    );
    ensure!(matches!(ok, FragmentOutcome::Render(_)), "got {ok:?}");
    let again = session.settle_fragment(PAGE, decode_fragment(500, ""));
    ensure!(
        matches!(again, FragmentOutcome::FullReload(_)),
        "a success on any page must re-arm the reload, got {again:?}"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::LogicTester;

    #[test]
    fn session_logic_passes() {
        let scenario = SessionScenario.as_logic_scenario().expect("logic scenario");
        let result = LogicTester::new(true).run_scenario(&scenario);
        assert!(result.passed, "{:?}", result.failures);
        assert_eq!(result.cases_passed, 4);
    }
}
