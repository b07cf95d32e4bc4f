use super::{FormFields, FormKind, ValidationError, field, first_missing, parse_finite};
use crate::lang::Lang;
use serde::{Deserialize, Serialize};

pub const REQUIRED_PM: &[&str] = &[
    "model",
    "resolution",
    "content_type",
    "media_source",
    "ip_rating",
    "install_type",
    "install_month",
    "daily_hours",
    "humidity_pct",
    "reboots_per_week",
    "rated_power_w",
    "height_m",
    "width_m",
    "install_year",
];

/// Accepted screen height and width, in meters, inclusive.
pub const SCREEN_SIZE_RANGE_M: (f64, f64) = (0.5, 3.0);

const HIGH_DAILY_HOURS: f64 = 16.0;
const FREQUENT_REBOOTS: f64 = 10.0;
const HIGH_HUMIDITY_PCT: f64 = 80.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaintenancePayload {
    pub daily_hours: f64,
    pub temperature: f64,
    pub reboots_per_week: f64,
    pub humidity_pct: f64,
    pub install_year: i32,
    pub height_m: f64,
    pub width_m: f64,
    pub rated_power_w: f64,
    pub model: String,
    pub resolution: String,
    pub content_type: String,
    pub media_source: String,
    pub ip_rating: String,
    pub install_type: String,
    pub install_month: String,
    pub lang: Lang,
}

/// Usage-derived hints shown next to the predicted status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTip {
    HighDailyHours,
    FrequentReboots,
    HighHumidity,
}

impl InputTip {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::HighDailyHours => "high_hours",
            Self::FrequentReboots => "frequent_reboots",
            Self::HighHumidity => "high_humidity",
        }
    }
}

impl MaintenancePayload {
    #[must_use]
    pub fn input_tips(&self) -> Vec<InputTip> {
        let mut tips = Vec::new();
        if self.daily_hours > HIGH_DAILY_HOURS {
            tips.push(InputTip::HighDailyHours);
        }
        if self.reboots_per_week > FREQUENT_REBOOTS {
            tips.push(InputTip::FrequentReboots);
        }
        if self.humidity_pct > HIGH_HUMIDITY_PCT {
            tips.push(InputTip::HighHumidity);
        }
        tips
    }
}

fn screen_dimension(fields: &FormFields, name: &'static str) -> Result<f64, ValidationError> {
    let (min, max) = SCREEN_SIZE_RANGE_M;
    let out_of_range = ValidationError::OutOfRange {
        field: name,
        min,
        max,
    };
    let value = parse_finite(fields, name).map_err(|_| out_of_range.clone())?;
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(out_of_range)
    }
}

/// Validate a predictive-maintenance submission.
///
/// # Errors
///
/// Returns the first [`ValidationError`] in this order: required fields,
/// temperature, height, width, installation year, remaining numeric fields.
pub fn validate_maintenance(
    fields: &FormFields,
    lang: Lang,
) -> Result<MaintenancePayload, ValidationError> {
    if let Some(missing) = first_missing(fields, REQUIRED_PM) {
        return Err(ValidationError::MissingField {
            form: FormKind::Maintenance,
            field: missing,
        });
    }

    if field(fields, "temperature").is_none() {
        return Err(ValidationError::MissingTemperature);
    }
    let temperature = parse_finite(fields, "temperature")?;

    let height_m = screen_dimension(fields, "height_m")?;
    let width_m = screen_dimension(fields, "width_m")?;

    let install_year = field(fields, "install_year")
        .and_then(|raw| raw.trim().parse::<i32>().ok())
        .ok_or(ValidationError::NotANumber {
            field: "install_year",
        })?;

    let daily_hours = parse_finite(fields, "daily_hours")?;
    let reboots_per_week = parse_finite(fields, "reboots_per_week")?;
    let humidity_pct = parse_finite(fields, "humidity_pct")?;
    let rated_power_w = parse_finite(fields, "rated_power_w")?;

    let take = |name: &str| field(fields, name).unwrap_or_default().to_string();
    Ok(MaintenancePayload {
        daily_hours,
        temperature,
        reboots_per_week,
        humidity_pct,
        install_year,
        height_m,
        width_m,
        rated_power_w,
        model: take("model"),
        resolution: take("resolution"),
        content_type: take("content_type"),
        media_source: take("media_source"),
        ip_rating: take("ip_rating"),
        install_type: take("install_type"),
        install_month: take("install_month"),
        lang,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::fields_from;

    fn complete() -> FormFields {
        fields_from(&[
            ("model", "P3"),
            ("resolution", "1920x1080"),
            ("content_type", "video"),
            ("media_source", "usb"),
            ("ip_rating", "IP65"),
            ("install_type", "wall"),
            ("install_month", "3"),
            ("daily_hours", "12"),
            ("humidity_pct", "40"),
            ("reboots_per_week", "2"),
            ("rated_power_w", "450"),
            ("height_m", "1.5"),
            ("width_m", "2"),
            ("install_year", "2022"),
            ("temperature", "31.5"),
        ])
    }

    #[test]
    fn complete_form_builds_numeric_payload() {
        let payload = validate_maintenance(&complete(), Lang::En).unwrap();
        assert!((payload.temperature - 31.5).abs() < f64::EPSILON);
        assert_eq!(payload.install_year, 2022);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["height_m"].is_number());
        assert_eq!(json["model"], "P3");
        assert_eq!(json["lang"], "en");
    }

    #[test]
    fn each_required_field_blocks_submission() {
        for name in REQUIRED_PM {
            let mut fields = complete();
            fields.remove(*name);
            assert_eq!(
                validate_maintenance(&fields, Lang::Ar),
                Err(ValidationError::MissingField {
                    form: FormKind::Maintenance,
                    field: *name,
                })
            );
        }
    }

    #[test]
    fn temperature_must_be_present_and_numeric() {
        let mut fields = complete();
        fields.insert("temperature".into(), String::new());
        assert_eq!(
            validate_maintenance(&fields, Lang::En),
            Err(ValidationError::MissingTemperature)
        );
        fields.insert("temperature".into(), "warm".into());
        assert_eq!(
            validate_maintenance(&fields, Lang::En),
            Err(ValidationError::NotANumber {
                field: "temperature"
            })
        );
    }

    #[test]
    fn screen_size_bounds_are_inclusive() {
        for (height, width) in [("0.5", "3"), ("3.0", "0.5"), ("1", "1")] {
            let mut fields = complete();
            fields.insert("height_m".into(), height.into());
            fields.insert("width_m".into(), width.into());
            assert!(validate_maintenance(&fields, Lang::En).is_ok());
        }
    }

    #[test]
    fn screen_size_outside_range_is_rejected() {
        for (name, value) in [
            ("height_m", "0.49"),
            ("height_m", "3.01"),
            ("width_m", "0"),
            ("width_m", "12"),
            ("width_m", "wide"),
        ] {
            let mut fields = complete();
            fields.insert(name.into(), value.into());
            let err = validate_maintenance(&fields, Lang::En).unwrap_err();
            assert!(
                matches!(err, ValidationError::OutOfRange { field, .. } if field == name),
                "{name}={value} gave {err:?}"
            );
        }
    }

    #[test]
    fn height_is_checked_before_width() {
        let mut fields = complete();
        fields.insert("height_m".into(), "9".into());
        fields.insert("width_m".into(), "9".into());
        assert!(matches!(
            validate_maintenance(&fields, Lang::En),
            Err(ValidationError::OutOfRange {
                field: "height_m",
                ..
            })
        ));
    }

    #[test]
    fn input_tips_follow_thresholds() {
        let mut fields = complete();
        fields.insert("daily_hours".into(), "18".into());
        fields.insert("reboots_per_week".into(), "11".into());
        fields.insert("humidity_pct".into(), "80".into());
        let payload = validate_maintenance(&fields, Lang::En).unwrap();
        assert_eq!(
            payload.input_tips(),
            vec![InputTip::HighDailyHours, InputTip::FrequentReboots]
        );
    }
}
