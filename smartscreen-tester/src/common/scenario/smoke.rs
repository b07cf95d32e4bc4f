use anyhow::{Result, ensure};
use smartscreen_core::nav::{fragment_url, is_page_path};
use smartscreen_core::{
    Lang, MemorySessionStore, NavEntry, SessionContext, ShellView, resolve_location,
};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, document_lang, enter_with_language};
use crate::logic::{LogicCase, LogicScenario};

pub struct SmokeScenario;

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        enter_with_language(driver, ctx, "en").await?;

        let lang = document_lang(driver).await?;
        ensure!(
            lang.as_deref() == Some("en"),
            "html lang should be `en`, got {lang:?}"
        );

        let url = driver.current_url().await?;
        ensure!(
            url.path().ends_with("/pages/home-en.html"),
            "expected the English home page, got {url}"
        );
        ctx.note(&format!("📍 landed on {url}"));
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<LogicScenario> {
        Some(LogicScenario {
            name: "Smoke Test",
            cases: vec![
                LogicCase::new("language codes round-trip", language_codes_round_trip),
                LogicCase::new("language choice targets home", choice_targets_home),
                LogicCase::new("pages map to fragments", pages_map_to_fragments),
                LogicCase::new("locations resolve", locations_resolve),
            ],
        })
    }
}

fn language_codes_round_trip() -> Result<()> {
    for lang in Lang::ALL {
        let parsed: Lang = lang.code().parse()?;
        ensure!(parsed == lang, "{} parsed as {parsed}", lang.code());
    }
    ensure!(Lang::Ar.is_rtl() && Lang::Ar.dir() == "rtl", "Arabic must be RTL");
    ensure!(Lang::En.dir() == "ltr", "English must be LTR");
    Ok(())
}

fn choice_targets_home() -> Result<()> {
    let session = SessionContext::new(MemorySessionStore::new());
    let switch = session.switch_language(Lang::Ar);
    ensure!(
        switch.entry == NavEntry::home(Lang::Ar),
        "unexpected entry {:?}",
        switch.entry
    );
    ensure!(switch.entry.page == "/pages/home-ar.html", "wrong home page");
    Ok(())
}

fn pages_map_to_fragments() -> Result<()> {
    ensure!(
        fragment_url("/pages/pm-en.html").as_deref() == Some("/fragments/pm-en.json"),
        "pm page should map to its fragment"
    );
    ensure!(fragment_url("/about.html").is_none(), "non-page has no fragment");
    ensure!(is_page_path("pages/ad-ar.html"), "relative page path rejected");
    Ok(())
}

fn locations_resolve() -> Result<()> {
    ensure!(
        resolve_location("/", None) == ShellView::Splash,
        "root should show the splash"
    );
    let view = resolve_location("/pages/ad-ar.html", None);
    ensure!(
        matches!(&view, ShellView::Page(entry) if entry.lang == Lang::Ar),
        "direct entry should take the page suffix language, got {view:?}"
    );
    let state = NavEntry::home(Lang::En);
    ensure!(
        resolve_location("/pages/ad-ar.html", Some(&state)) == ShellView::Page(state.clone()),
        "history state should win over the path"
    );
    Ok(())
}
