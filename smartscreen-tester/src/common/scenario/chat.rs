use anyhow::{Context, Result, ensure};
use once_cell::sync::Lazy;
use smartscreen_core::{ChatRole, ChatWidget, FaqBook, FeedEntry, Lang};
use std::time::{Duration, Instant};
use thirtyfour::prelude::*;

use super::{
    BrowserScenario, CombinedScenario, STEP_TIMEOUT, ScenarioCtx, enter_with_language, wait_for,
};
use crate::logic::{LogicCase, LogicScenario};

static FAQ: Lazy<Result<FaqBook, String>> = Lazy::new(|| {
    FaqBook::from_json(include_str!(
        "../../../../smartscreen-web/static/assets/data/faq.json"
    ))
    .map_err(|e| e.to_string())
});

fn faq() -> Result<&'static FaqBook> {
    FAQ.as_ref()
        .map_err(|e| anyhow::anyhow!("faq.json is malformed: {e}"))
}

pub struct ChatScenario;

#[async_trait::async_trait]
impl BrowserScenario for ChatScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        enter_with_language(driver, ctx, "en").await?;

        let toggle = wait_for(driver, "#imi-toggle").await?;
        toggle.click().await?;
        wait_for(driver, "#imi-chat.open").await?;
        driver.find(By::Id("imi-close")).await?.click().await?;
        toggle.click().await?;
        wait_for(driver, "#imi-chat.open").await?;

        let greetings = driver
            .find_all(By::Css("#imi-feed .imi-bot:not(.imi-typing)"))
            .await?;
        ensure!(
            greetings.len() == 1,
            "reopening must not repeat the greeting, saw {}",
            greetings.len()
        );

        let entry = faq()?
            .script(Lang::En)
            .and_then(|script| script.entries.first())
            .context("no English questions")?;
        let chip = driver
            .find(By::Css("#imi-quick .imi-chip"))
            .await
            .context("no question chips rendered")?;
        chip.click().await?;
        ctx.note("💬 asked the first question");

        let deadline = Instant::now() + STEP_TIMEOUT;
        let feed = loop {
            let mut feed = Vec::new();
            for row in driver.find_all(By::Css("#imi-feed > div")).await? {
                let class = row.class_name().await?.unwrap_or_default();
                feed.push((class, row.text().await?));
            }
            if settled_roles(&feed).is_some_and(|roles| roles.len() >= 3) {
                break feed;
            }
            ensure!(
                Instant::now() < deadline,
                "answer never replaced the typing placeholder: {feed:?}"
            );
            tokio::time::sleep(Duration::from_millis(100)).await;
        };
        check_answered_feed(&feed, &entry.question, &entry.answer)
    }
}

/// Roles of the feed rows, or `None` while a typing placeholder is shown.
fn settled_roles(feed: &[(String, String)]) -> Option<Vec<ChatRole>> {
    feed.iter()
        .map(|(class, _)| {
            let classes: Vec<&str> = class.split_whitespace().collect();
            if classes.contains(&"imi-typing") {
                None
            } else if classes.contains(&"imi-user") {
                Some(ChatRole::User)
            } else {
                Some(ChatRole::Bot)
            }
        })
        .collect()
}

/// After one chip: greeting, the question, then its answer, nothing else.
fn check_answered_feed(feed: &[(String, String)], question: &str, answer: &str) -> Result<()> {
    let roles = settled_roles(feed).context("typing placeholder still in the feed")?;
    ensure!(
        roles == vec![ChatRole::Bot, ChatRole::User, ChatRole::Bot],
        "expected greeting, question, answer; got {roles:?}"
    );
    ensure!(
        feed[1].1.trim() == question.trim(),
        "question text was {:?}",
        feed[1].1
    );
    ensure!(
        feed[2].1.trim() == answer.trim(),
        "answer text was {:?}",
        feed[2].1
    );
    Ok(())
}

impl CombinedScenario for ChatScenario {
    fn as_logic_scenario(&self) -> Option<LogicScenario> {
        Some(LogicScenario {
            name: "FAQ Chat",
            cases: vec![
                LogicCase::new("faq covers both languages", faq_covers_both_languages),
                LogicCase::new("greeting posted once", greeting_once),
                LogicCase::new("answer replaces typing", answer_replaces_typing),
            ],
        })
    }
}

fn faq_covers_both_languages() -> Result<()> {
    let book = faq()?;
    let ar = book.script(Lang::Ar).context("no Arabic script")?;
    let en = book.script(Lang::En).context("no English script")?;
    ensure!(!ar.entries.is_empty(), "Arabic script has no questions");
    ensure!(
        ar.entries.len() == en.entries.len(),
        "scripts differ in length: {} vs {}",
        ar.entries.len(),
        en.entries.len()
    );
    Ok(())
}

fn greeting_once() -> Result<()> {
    let script = faq()?.script(Lang::En).context("no English script")?;
    let mut chat = ChatWidget::new();
    chat.toggle(&script.greeting);
    chat.toggle(&script.greeting);
    chat.toggle(&script.greeting);
    ensure!(chat.is_open(), "third toggle leaves the panel open");
    ensure!(chat.messages().count() == 1, "greeting must be posted once");
    Ok(())
}

fn answer_replaces_typing() -> Result<()> {
    let script = faq()?.script(Lang::Ar).context("no Arabic script")?;
    let entry = script.entries.first().context("empty script")?;
    let mut chat = ChatWidget::new();
    chat.open(&script.greeting);
    let ticket = chat.ask(&entry.question);
    ensure!(
        matches!(chat.feed().last(), Some(FeedEntry::Typing(_))),
        "typing placeholder should follow the question"
    );
    chat.answer(ticket, &entry.answer);
    let roles: Vec<ChatRole> = chat.messages().map(|m| m.role).collect();
    ensure!(
        roles == vec![ChatRole::Bot, ChatRole::User, ChatRole::Bot],
        "unexpected order {roles:?}"
    );
    ensure!(
        !chat.feed().iter().any(|e| matches!(e, FeedEntry::Typing(_))),
        "placeholder must be gone"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::LogicTester;

    fn row(class: &str, text: &str) -> (String, String) {
        (class.to_string(), text.to_string())
    }

    #[test]
    fn typing_placeholder_is_not_an_answer() {
        let feed = vec![
            row("imi-bot", "Hi!"),
            row("imi-user", "Sizes?"),
            row("imi-bot imi-typing", "typing…"),
        ];
        assert!(settled_roles(&feed).is_none());
        assert!(check_answered_feed(&feed, "Sizes?", "Any size.").is_err());
    }

    #[test]
    fn answered_feed_must_be_greeting_question_answer() {
        let feed = vec![
            row("imi-bot", "Hi!"),
            row("imi-user", "Sizes?"),
            row("imi-bot", "Any size."),
        ];
        check_answered_feed(&feed, "Sizes?", "Any size.").expect("well-formed feed");

        let repeated = vec![
            row("imi-bot", "Hi!"),
            row("imi-bot", "Hi!"),
            row("imi-user", "Sizes?"),
            row("imi-bot", "Any size."),
        ];
        assert!(check_answered_feed(&repeated, "Sizes?", "Any size.").is_err());
        assert!(check_answered_feed(&feed, "Sizes?", "Wrong answer").is_err());
    }

    #[test]
    fn chat_logic_passes() {
        let scenario = ChatScenario.as_logic_scenario().expect("logic scenario");
        let result = LogicTester::new(false).run_scenario(&scenario);
        assert!(result.passed, "{:?}", result.failures);
    }
}
