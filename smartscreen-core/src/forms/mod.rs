//! Client-side validation gates for the two prediction forms.
//!
//! Each validator takes the raw field map of one submission and either yields
//! a typed payload or the first failing check. Nothing here performs I/O.

pub mod ad;
pub mod maintenance;
pub mod registry;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use ad::{ALLOWED_AD, AdPayload, allowed_values, validate_ad};
pub use maintenance::{InputTip, MaintenancePayload, validate_maintenance};
pub use registry::{FormBinding, FormRegistry};

/// Field name → submitted string value, built fresh for every submit.
pub type FormFields = BTreeMap<String, String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormKind {
    #[serde(rename = "ad")]
    Ad,
    #[serde(rename = "pm")]
    Maintenance,
}

impl FormKind {
    /// DOM id of the form element.
    #[must_use]
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::Ad => "ad-form",
            Self::Maintenance => "pm-form",
        }
    }

    /// Short tag used for translation keys.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Ad => "ad",
            Self::Maintenance => "pm",
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("required field `{field}` is empty")]
    MissingField { form: FormKind, field: &'static str },
    #[error("value not allowed in field `{field}`")]
    NotAllowed { field: &'static str },
    #[error("ambient temperature is required")]
    MissingTemperature,
    #[error("field `{field}` is not a valid number")]
    NotANumber { field: &'static str },
    #[error("field `{field}` must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: f64,
        max: f64,
    },
}

pub(crate) fn field<'a>(fields: &'a FormFields, name: &str) -> Option<&'a str> {
    fields
        .get(name)
        .map(String::as_str)
        .filter(|v| !v.trim().is_empty())
}

/// First name in `required` whose value is absent or blank.
pub(crate) fn first_missing(fields: &FormFields, required: &[&'static str]) -> Option<&'static str> {
    required
        .iter()
        .copied()
        .find(|name| field(fields, name).is_none())
}

pub(crate) fn parse_finite(fields: &FormFields, name: &'static str) -> Result<f64, ValidationError> {
    field(fields, name)
        .and_then(|raw| raw.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .ok_or(ValidationError::NotANumber { field: name })
}

#[cfg(test)]
pub(crate) fn fields_from(pairs: &[(&str, &str)]) -> FormFields {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_count_as_missing() {
        let fields = fields_from(&[("a", "x"), ("b", "   ")]);
        assert_eq!(first_missing(&fields, &["a", "b", "c"]), Some("b"));
        assert_eq!(first_missing(&fields, &["a"]), None);
    }

    #[test]
    fn parse_finite_rejects_non_numbers() {
        let fields = fields_from(&[("h", " 1.5 "), ("bad", "abc"), ("inf", "inf")]);
        assert_eq!(parse_finite(&fields, "h"), Ok(1.5));
        assert!(parse_finite(&fields, "bad").is_err());
        assert!(parse_finite(&fields, "inf").is_err());
        assert!(parse_finite(&fields, "missing").is_err());
    }

    #[test]
    fn form_kind_serializes_short_tags() {
        assert_eq!(serde_json::to_string(&FormKind::Ad).unwrap(), "\"ad\"");
        assert_eq!(
            serde_json::from_str::<FormKind>("\"pm\"").unwrap(),
            FormKind::Maintenance
        );
        assert_eq!(FormKind::Maintenance.element_id(), "pm-form");
    }
}
