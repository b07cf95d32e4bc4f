use anyhow::{Result, bail, ensure};
use smartscreen_core::result::PLACE_PLACEHOLDER;
use smartscreen_core::{
    ApiError, FormKind, InputTip, MaintenanceView, PlacementView, Prediction, StatusCode, Tip,
    decode_response,
};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx};
use crate::logic::{LogicCase, LogicScenario};

pub struct StatusScenario;

#[async_trait::async_trait]
impl BrowserScenario for StatusScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx) -> Result<()> {
        // Needs a stub prediction service the browser can reach.
        bail!("Browser testing not implemented for result status scenarios")
    }
}

impl CombinedScenario for StatusScenario {
    fn has_browser(&self) -> bool {
        false
    }

    fn as_logic_scenario(&self) -> Option<LogicScenario> {
        Some(LogicScenario {
            name: "Result Status",
            cases: vec![
                LogicCase::new("raw prediction wins over status", raw_pred_wins),
                LogicCase::new("unknown status has no advice", unknown_status),
                LogicCase::new("input tips follow the advice", input_tips_follow_advice),
                LogicCase::new("missing place shows a placeholder", missing_place),
                LogicCase::new("errors are classified", errors_are_classified),
            ],
        })
    }
}

fn maintenance(body: &str, tips: &[InputTip]) -> Result<MaintenanceView> {
    match decode_response(FormKind::Maintenance, 200, body)? {
        Prediction::Maintenance(resp) => Ok(MaintenanceView::build(&resp, tips)),
        Prediction::Placement(_) => bail!("maintenance body decoded as a placement"),
    }
}

fn raw_pred_wins() -> Result<()> {
    let view = maintenance(
        r#"{"status":"OK","note":"n","debug":{"raw_pred":" fail "}}"#,
        &[],
    )?;
    ensure!(view.code == StatusCode::Fail, "got {:?}", view.code);
    ensure!(view.note.as_deref() == Some("n"), "server note should be kept");
    Ok(())
}

fn unknown_status() -> Result<()> {
    let view = maintenance(r#"{"status":"MAYBE","note":"ignored"}"#, &[])?;
    ensure!(view.code == StatusCode::Unknown, "got {:?}", view.code);
    ensure!(view.note.is_none(), "unknown status must not show the server note");
    ensure!(view.tips.is_empty(), "unknown status has no advice");
    Ok(())
}

fn input_tips_follow_advice() -> Result<()> {
    let view = maintenance(r#"{"status":"WARN"}"#, &[InputTip::HighHumidity])?;
    ensure!(
        view.tips
            == vec![
                Tip::Advice(StatusCode::Warn),
                Tip::Input(InputTip::HighHumidity)
            ],
        "unexpected tips {:?}",
        view.tips
    );
    Ok(())
}

fn missing_place() -> Result<()> {
    let Prediction::Placement(resp) = decode_response(FormKind::Ad, 200, r#"{"note":"x"}"#)? else {
        bail!("ad body decoded as maintenance");
    };
    let view = PlacementView::from(&resp);
    ensure!(view.place == PLACE_PLACEHOLDER, "got place {:?}", view.place);
    Ok(())
}

fn errors_are_classified() -> Result<()> {
    match decode_response(FormKind::Ad, 503, r#"{"error":"busy"}"#) {
        Err(ApiError::Status { status: 503, message }) => {
            ensure!(message.as_deref() == Some("busy"), "lost server message");
        }
        other => bail!("expected a status error, got {other:?}"),
    }
    ensure!(
        matches!(
            decode_response(FormKind::Maintenance, 200, "<html>"),
            Err(ApiError::Decode(_))
        ),
        "non-JSON success body must be a decode error"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::LogicTester;

    #[test]
    fn status_logic_passes() {
        let scenario = StatusScenario.as_logic_scenario().expect("logic scenario");
        let result = LogicTester::new(false).run_scenario(&scenario);
        assert!(result.passed, "{:?}", result.failures);
    }
}
