//! Localized text for validation failures, API failures and results.

use crate::i18n::{t, tr};
use smartscreen_core::{
    ApiError, FormKind, InputTip, MaintenanceView, StatusCode, Tip, ValidationError,
};
use std::collections::BTreeMap;

fn field_label(kind: FormKind, field: &str) -> String {
    t(&format!("forms.{}.fields.{field}", kind.tag()))
}

fn naming_field(key: &str, field: &str) -> String {
    let vars = BTreeMap::from([("field", field)]);
    tr(key, Some(&vars))
}

/// Alert text for a failed validation gate.
#[must_use]
pub fn validation_message(kind: FormKind, err: &ValidationError) -> String {
    let tag = kind.tag();
    match err {
        ValidationError::MissingField { form, .. } => t(&format!("validation.{}.missing", form.tag())),
        ValidationError::NotAllowed { field } => {
            naming_field(&format!("validation.{tag}.not_allowed"), field)
        }
        ValidationError::MissingTemperature => t("validation.pm.temperature_missing"),
        ValidationError::NotANumber {
            field: "temperature",
        } => t("validation.pm.temperature_invalid"),
        ValidationError::NotANumber {
            field: "install_year",
        } => t("validation.pm.install_year"),
        ValidationError::OutOfRange { field: "height_m", .. } => t("validation.pm.height"),
        ValidationError::OutOfRange { field: "width_m", .. } => t("validation.pm.width"),
        ValidationError::NotANumber { field } | ValidationError::OutOfRange { field, .. } => {
            naming_field("validation.pm.not_a_number", &field_label(kind, field))
        }
    }
}

/// The single alert shown when a prediction request fails.
#[must_use]
pub fn api_message(kind: FormKind, err: &ApiError) -> String {
    let reason = if err.is_status() { "status" } else { "transport" };
    t(&format!("api.{}.{reason}", kind.tag()))
}

#[must_use]
pub fn pending_message(kind: FormKind) -> String {
    t(&format!("pending.{}", kind.tag()))
}

#[must_use]
pub fn status_label(code: StatusCode) -> String {
    t(&format!("result.pm.status.{}", code.key()))
}

fn advice(code: StatusCode) -> String {
    t(&format!("result.pm.advice.{}", code.key()))
}

fn input_tip(tip: InputTip) -> String {
    t(&format!("tips.{}", tip.key()))
}

/// Note under the status: the server's note, else the advice for a known
/// code, else the "check inputs" hint.
#[must_use]
pub fn maintenance_note(view: &MaintenanceView) -> String {
    match (&view.note, view.code.is_known()) {
        (Some(note), _) => note.clone(),
        (None, true) => advice(view.code),
        (None, false) => t("result.pm.unknown_note"),
    }
}

/// Tips list items: the advice line, then all input tips on one line.
#[must_use]
pub fn tip_lines(tips: &[Tip]) -> Vec<String> {
    let mut lines: Vec<String> = tips
        .iter()
        .filter_map(|tip| match tip {
            Tip::Advice(code) => Some(advice(*code)),
            Tip::Input(_) => None,
        })
        .collect();
    let inputs: Vec<String> = tips
        .iter()
        .filter_map(|tip| match tip {
            Tip::Input(input) => Some(input_tip(*input)),
            Tip::Advice(_) => None,
        })
        .collect();
    if !inputs.is_empty() {
        lines.push(inputs.join(" • "));
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::set_lang;
    use smartscreen_core::Lang;

    #[test]
    fn validation_messages_name_the_field() {
        set_lang(Lang::En);
        let msg = validation_message(
            FormKind::Ad,
            &ValidationError::NotAllowed {
                field: "budget_level",
            },
        );
        assert_eq!(msg, "Invalid value in field: budget_level");

        let msg = validation_message(
            FormKind::Maintenance,
            &ValidationError::NotANumber {
                field: "rated_power_w",
            },
        );
        assert_eq!(msg, "Please enter a valid number for: Rated power (W)");
    }

    #[test]
    fn maintenance_specific_messages() {
        set_lang(Lang::En);
        let kind = FormKind::Maintenance;
        assert_eq!(
            validation_message(kind, &ValidationError::MissingTemperature),
            "Please enter ambient temperature (°C)."
        );
        assert_eq!(
            validation_message(
                kind,
                &ValidationError::OutOfRange {
                    field: "width_m",
                    min: 0.5,
                    max: 3.0
                }
            ),
            "Please enter width (m) between 0.5 and 3."
        );
        assert_eq!(
            validation_message(
                kind,
                &ValidationError::MissingField {
                    form: kind,
                    field: "model"
                }
            ),
            "Please fill in all required fields."
        );
    }

    #[test]
    fn api_failures_pick_status_or_transport_copy() {
        set_lang(Lang::En);
        let status = ApiError::Status {
            status: 502,
            message: None,
        };
        assert_eq!(
            api_message(FormKind::Maintenance, &status),
            "Could not reach prediction server."
        );
        let transport = ApiError::Transport("offline".into());
        assert_eq!(
            api_message(FormKind::Maintenance, &transport),
            "Could not connect to server."
        );
    }

    #[test]
    fn unknown_status_uses_placeholder_copy() {
        set_lang(Lang::Ar);
        let view = MaintenanceView {
            code: StatusCode::Unknown,
            note: None,
            tips: vec![Tip::Input(InputTip::HighHumidity)],
        };
        assert_eq!(status_label(view.code), "غير معروف");
        assert_eq!(maintenance_note(&view), "تحقق من المدخلات.");
        assert_eq!(tip_lines(&view.tips), vec!["رطوبة مرتفعة.".to_string()]);
        set_lang(Lang::En);
    }

    #[test]
    fn advice_then_joined_input_tips() {
        set_lang(Lang::En);
        let lines = tip_lines(&[
            Tip::Advice(StatusCode::Warn),
            Tip::Input(InputTip::HighDailyHours),
            Tip::Input(InputTip::FrequentReboots),
        ]);
        assert_eq!(
            lines,
            vec![
                "💡 Schedule a check this week.".to_string(),
                "High daily hours. • Frequent reboots.".to_string()
            ]
        );
    }
}
