use super::{FormFields, FormKind, ValidationError, field, first_missing};
use crate::lang::Lang;
use serde::{Deserialize, Serialize};

/// Values the prediction service accepts for each ad-placement field.
/// The required set of the form is exactly this table's key set.
pub const ALLOWED_AD: &[(&str, &[&str])] = &[
    (
        "business_type",
        &[
            "restaurant_cafe",
            "retail_fashion",
            "pharmacy_health",
            "electronics",
            "supermarket",
            "services",
        ],
    ),
    (
        "campaign_goal",
        &["sales", "awareness", "new_customers", "footfall"],
    ),
    ("budget_level", &["low", "medium", "high"]),
    (
        "campaign_duration",
        &["1_week", "2_weeks", "1_month", "3_months"],
    ),
    ("area_type", &["residential", "commercial", "mixed"]),
    ("active_hours", &["morning", "noon", "evening"]),
    ("ad_style", &["text", "visual", "interactive", "video"]),
    (
        "interaction_goal",
        &["visit_store", "visit_website", "call_whatsapp", "scan_qr"],
    ),
    ("offer_type", &["none", "discount", "bundle", "new_launch"]),
    ("business_stage", &["new", "growing", "established"]),
];

#[must_use]
pub fn allowed_values(name: &str) -> Option<&'static [&'static str]> {
    ALLOWED_AD
        .iter()
        .find_map(|(key, values)| (*key == name).then_some(*values))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdPayload {
    pub business_type: String,
    pub campaign_goal: String,
    pub budget_level: String,
    pub campaign_duration: String,
    pub area_type: String,
    pub active_hours: String,
    pub ad_style: String,
    pub interaction_goal: String,
    pub offer_type: String,
    pub business_stage: String,
    pub lang: Lang,
}

/// Validate an ad-placement submission.
///
/// Checks run fail-fast: every table key must be filled, then every submitted
/// field that has a table entry must hold one of its listed values.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn validate_ad(fields: &FormFields, lang: Lang) -> Result<AdPayload, ValidationError> {
    let required: Vec<&'static str> = ALLOWED_AD.iter().map(|(key, _)| *key).collect();
    if let Some(missing) = first_missing(fields, &required) {
        return Err(ValidationError::MissingField {
            form: FormKind::Ad,
            field: missing,
        });
    }

    for (name, allowed) in ALLOWED_AD {
        if let Some(value) = fields.get(*name)
            && !allowed.contains(&value.as_str())
        {
            return Err(ValidationError::NotAllowed { field: *name });
        }
    }

    let take = |name: &str| field(fields, name).unwrap_or_default().to_string();
    Ok(AdPayload {
        business_type: take("business_type"),
        campaign_goal: take("campaign_goal"),
        budget_level: take("budget_level"),
        campaign_duration: take("campaign_duration"),
        area_type: take("area_type"),
        active_hours: take("active_hours"),
        ad_style: take("ad_style"),
        interaction_goal: take("interaction_goal"),
        offer_type: take("offer_type"),
        business_stage: take("business_stage"),
        lang,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::fields_from;

    fn complete() -> FormFields {
        fields_from(&[
            ("business_type", "electronics"),
            ("campaign_goal", "sales"),
            ("budget_level", "medium"),
            ("campaign_duration", "1_month"),
            ("area_type", "commercial"),
            ("active_hours", "evening"),
            ("ad_style", "video"),
            ("interaction_goal", "scan_qr"),
            ("offer_type", "discount"),
            ("business_stage", "growing"),
        ])
    }

    #[test]
    fn complete_form_builds_payload_with_lang() {
        let payload = validate_ad(&complete(), Lang::Ar).unwrap();
        assert_eq!(payload.business_type, "electronics");
        assert_eq!(payload.lang, Lang::Ar);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["lang"], "ar");
        assert_eq!(json.as_object().unwrap().len(), 11);
    }

    #[test]
    fn every_required_field_blocks_when_empty() {
        for (name, _) in ALLOWED_AD {
            let mut fields = complete();
            fields.insert((*name).to_string(), String::new());
            assert_eq!(
                validate_ad(&fields, Lang::En),
                Err(ValidationError::MissingField {
                    form: FormKind::Ad,
                    field: *name
                })
            );
        }
    }

    #[test]
    fn value_outside_allowed_set_names_the_field() {
        for (name, _) in ALLOWED_AD {
            let mut fields = complete();
            fields.insert((*name).to_string(), "bogus".to_string());
            assert_eq!(
                validate_ad(&fields, Lang::En),
                Err(ValidationError::NotAllowed { field: *name })
            );
        }
    }

    #[test]
    fn allowed_values_lookup() {
        assert_eq!(allowed_values("budget_level"), Some(&["low", "medium", "high"][..]));
        assert!(allowed_values("lang").is_none());
    }
}
