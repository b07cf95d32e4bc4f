//! Typed prediction responses and the view models rendered from them.

use crate::forms::InputTip;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const PLACE_PLACEHOLDER: &str = "—";

/// Scalars become text; `null`, arrays and objects are treated as absent.
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }))
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BestPlaceResponse {
    #[serde(default, deserialize_with = "lenient_text")]
    pub best_place: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub note: Option<String>,
    #[serde(default)]
    pub debug: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MaintenanceResponse {
    #[serde(default, deserialize_with = "lenient_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub note: Option<String>,
    #[serde(default)]
    pub debug: Option<Value>,
}

/// Error body returned with a non-success status.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "lenient_text")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Prediction {
    Placement(BestPlaceResponse),
    Maintenance(MaintenanceResponse),
}

impl Prediction {
    #[must_use]
    pub const fn debug(&self) -> Option<&Value> {
        match self {
            Self::Placement(resp) => resp.debug.as_ref(),
            Self::Maintenance(resp) => resp.debug.as_ref(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusCode {
    Ok,
    Warn,
    Fail,
    Unknown,
}

impl StatusCode {
    fn from_label(label: &str) -> Option<Self> {
        match label {
            "OK" => Some(Self::Ok),
            "WARN" => Some(Self::Warn),
            "FAIL" => Some(Self::Fail),
            _ => None,
        }
    }

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ok => "ok",
            Self::Warn => "warn",
            Self::Fail => "fail",
            Self::Unknown => "unknown",
        }
    }

    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl MaintenanceResponse {
    /// Raw model label from `debug.raw_pred`, if the service included one.
    #[must_use]
    pub fn raw_pred(&self) -> Option<String> {
        match self.debug.as_ref()?.get("raw_pred")? {
            Value::String(s) => Some(s.clone()),
            Value::Null => None,
            other => Some(other.to_string()),
        }
    }

    /// Resolve the status code, preferring the raw model label over the
    /// server's own `status` field.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        let from_raw = self.raw_pred().and_then(|raw| {
            let letters: String = raw
                .chars()
                .filter(char::is_ascii_alphabetic)
                .collect::<String>()
                .to_ascii_uppercase();
            StatusCode::from_label(&letters)
        });
        from_raw
            .or_else(|| {
                self.status
                    .as_deref()
                    .and_then(|s| StatusCode::from_label(&s.trim().to_ascii_uppercase()))
            })
            .unwrap_or(StatusCode::Unknown)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementView {
    pub place: String,
    pub note: String,
}

impl From<&BestPlaceResponse> for PlacementView {
    fn from(resp: &BestPlaceResponse) -> Self {
        Self {
            place: resp
                .best_place
                .clone()
                .filter(|p| !p.is_empty())
                .unwrap_or_else(|| PLACE_PLACEHOLDER.to_string()),
            note: resp.note.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tip {
    Advice(StatusCode),
    Input(InputTip),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceView {
    pub code: StatusCode,
    /// Server note; `None` means the renderer falls back to localized text.
    pub note: Option<String>,
    pub tips: Vec<Tip>,
}

impl MaintenanceView {
    #[must_use]
    pub fn build(resp: &MaintenanceResponse, input_tips: &[InputTip]) -> Self {
        let code = resp.status_code();
        let note = if code.is_known() {
            resp.note.clone().filter(|n| !n.is_empty())
        } else {
            None
        };
        let mut tips = Vec::with_capacity(input_tips.len() + 1);
        if code.is_known() {
            tips.push(Tip::Advice(code));
        }
        tips.extend(input_tips.iter().copied().map(Tip::Input));
        Self { code, note, tips }
    }
}
