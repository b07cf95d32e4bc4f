use anyhow::{Result, bail, ensure};
use smartscreen_core::forms::ALLOWED_AD;
use smartscreen_core::{
    ApiConfig, FORMS, FormFields, FormKind, Lang, SubmitError, ValidationError, prepare,
};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, enter_with_language, wait_for};
use crate::logic::{LogicCase, LogicScenario};

const EMPTY_AD_ALERT: &str = "Please fill in all fields before submitting.";

pub struct ValidationScenario;

#[async_trait::async_trait]
impl BrowserScenario for ValidationScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx) -> Result<()> {
        enter_with_language(driver, ctx, "en").await?;

        driver
            .find(By::Css("#content a[href$='/pages/ad-en.html']"))
            .await?
            .click()
            .await?;
        let form = wait_for(driver, "#ad-form").await?;
        ctx.note("📝 submitting the empty ad form");
        form.find(By::Css("button[type='submit']"))
            .await?
            .click()
            .await?;

        let alert = driver.get_alert_text().await?;
        driver.accept_alert().await?;
        ensure!(
            alert == EMPTY_AD_ALERT,
            "unexpected validation alert: {alert:?}"
        );

        let result = driver.find(By::Id("result")).await?;
        ensure!(
            !result.is_displayed().await?,
            "result card must stay hidden after a rejected submission"
        );
        Ok(())
    }
}

impl CombinedScenario for ValidationScenario {
    fn as_logic_scenario(&self) -> Option<LogicScenario> {
        Some(LogicScenario {
            name: "Validation Gate",
            cases: vec![
                LogicCase::new("empty ad form stops at first field", empty_ad_form),
                LogicCase::new("ad values outside the table", ad_value_not_allowed),
                LogicCase::new("temperature is checked before sizes", temperature_first),
                LogicCase::new("screen sizes are bounded", screen_size_bounds),
                LogicCase::new("valid ad form builds a request", valid_ad_request),
            ],
        })
    }
}

fn full_ad_fields() -> FormFields {
    ALLOWED_AD
        .iter()
        .map(|(name, values)| ((*name).to_string(), values[0].to_string()))
        .collect()
}

fn pm_fields() -> FormFields {
    [
        ("model", "X1"),
        ("resolution", "1080p"),
        ("content_type", "video"),
        ("media_source", "usb"),
        ("ip_rating", "IP65"),
        ("install_type", "indoor"),
        ("install_month", "3"),
        ("daily_hours", "10"),
        ("humidity_pct", "30"),
        ("reboots_per_week", "1"),
        ("rated_power_w", "250"),
        ("height_m", "1.2"),
        ("width_m", "2"),
        ("install_year", "2022"),
        ("temperature", "28"),
    ]
    .iter()
    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
    .collect()
}

fn validate(kind: FormKind, fields: &FormFields) -> Result<ValidationError> {
    let Some(binding) = FORMS.resolve(kind) else {
        bail!("no binding registered for {kind:?}");
    };
    match prepare(&binding, &ApiConfig::default(), fields, Lang::En) {
        Err(SubmitError::Invalid(err)) => Ok(err),
        Err(other) => bail!("expected a validation error, got {other}"),
        Ok(prepared) => bail!("invalid input produced a request to {}", prepared.request.url),
    }
}

fn empty_ad_form() -> Result<()> {
    let err = validate(FormKind::Ad, &FormFields::new())?;
    ensure!(
        matches!(
            err,
            ValidationError::MissingField {
                form: FormKind::Ad,
                field: "business_type"
            }
        ),
        "unexpected error {err:?}"
    );
    Ok(())
}

fn ad_value_not_allowed() -> Result<()> {
    let mut fields = full_ad_fields();
    fields.insert("budget_level".into(), "unlimited".into());
    let err = validate(FormKind::Ad, &fields)?;
    ensure!(
        err == ValidationError::NotAllowed {
            field: "budget_level"
        },
        "unexpected error {err:?}"
    );
    Ok(())
}

fn temperature_first() -> Result<()> {
    let mut fields = pm_fields();
    fields.remove("temperature");
    fields.insert("height_m".into(), "99".into());
    let err = validate(FormKind::Maintenance, &fields)?;
    ensure!(
        err == ValidationError::MissingTemperature,
        "unexpected error {err:?}"
    );
    Ok(())
}

fn screen_size_bounds() -> Result<()> {
    let mut fields = pm_fields();
    fields.insert("width_m".into(), "0.1".into());
    let err = validate(FormKind::Maintenance, &fields)?;
    ensure!(
        matches!(err, ValidationError::OutOfRange { field: "width_m", .. }),
        "unexpected error {err:?}"
    );
    Ok(())
}

fn valid_ad_request() -> Result<()> {
    let Some(binding) = FORMS.resolve(FormKind::Ad) else {
        bail!("no ad binding");
    };
    let prepared = prepare(
        &binding,
        &ApiConfig::new("http://api.test"),
        &full_ad_fields(),
        Lang::Ar,
    )?;
    ensure!(
        prepared.request.url == "http://api.test/api/btp",
        "unexpected url {}",
        prepared.request.url
    );
    let body: serde_json::Value = serde_json::from_str(&prepared.request.body)?;
    ensure!(body["lang"] == "ar", "payload must carry the page language");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::LogicTester;

    #[test]
    fn validation_logic_passes() {
        let scenario = ValidationScenario.as_logic_scenario().expect("logic scenario");
        let result = LogicTester::new(false).run_scenario(&scenario);
        assert!(result.passed, "{:?}", result.failures);
    }
}
