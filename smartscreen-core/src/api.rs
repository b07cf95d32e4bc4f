//! Prediction API contract: endpoints, request bodies and response decoding.
//!
//! The transport lives in the platform crate; this module only builds
//! requests and interprets `(status, body)` pairs.

use crate::forms::{AdPayload, FormKind, MaintenancePayload};
use crate::lang::Lang;
use crate::result::{BestPlaceResponse, ErrorBody, MaintenanceResponse, Prediction};

pub const DEFAULT_API_BASE: &str = "https://smart-ads-system-1.onrender.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    BestPlace,
    PmPredict,
}

impl Endpoint {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::BestPlace => "/api/btp",
            Self::PmPredict => "/api/pm_predict",
        }
    }

    #[must_use]
    pub const fn for_form(kind: FormKind) -> Self {
        match kind {
            FormKind::Ad => Self::BestPlace,
            FormKind::Maintenance => Self::PmPredict,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE)
    }
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Pick the first non-blank base: runtime override, then build-time value, then default.
    #[must_use]
    pub fn resolve(runtime: Option<&str>, compile_time: Option<&str>) -> Self {
        [runtime, compile_time]
            .into_iter()
            .flatten()
            .find(|base| !base.trim().is_empty())
            .map_or_else(Self::default, Self::new)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }

    /// Build the POST request for a validated submission.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the payload cannot be serialized.
    pub fn request(&self, submission: &Submission) -> Result<ApiRequest, ApiError> {
        let body = match submission {
            Submission::Ad(payload) => serde_json::to_string(payload),
            Submission::Maintenance(payload) => serde_json::to_string(payload),
        }
        .map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(ApiRequest {
            url: self.url(submission.endpoint()),
            body,
        })
    }
}

/// A validated payload, ready to be posted.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Ad(AdPayload),
    Maintenance(MaintenancePayload),
}

impl Submission {
    #[must_use]
    pub const fn kind(&self) -> FormKind {
        match self {
            Self::Ad(_) => FormKind::Ad,
            Self::Maintenance(_) => FormKind::Maintenance,
        }
    }

    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        Endpoint::for_form(self.kind())
    }

    #[must_use]
    pub const fn lang(&self) -> Lang {
        match self {
            Self::Ad(p) => p.lang,
            Self::Maintenance(p) => p.lang,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
    pub body: String,
}

impl ApiRequest {
    pub const CONTENT_TYPE: &'static str = "application/json";
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("network error: {0}")]
    Transport(String),
    #[error("server returned HTTP {status}")]
    Status { status: u16, message: Option<String> },
    #[error("unreadable response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Non-success status as opposed to a request that never completed.
    #[must_use]
    pub const fn is_status(&self) -> bool {
        matches!(self, Self::Status { .. })
    }
}

/// Interpret the outcome of a prediction request.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx statuses and [`ApiError::Decode`]
/// when a success body is not the expected JSON document.
pub fn decode_response(kind: FormKind, status: u16, body: &str) -> Result<Prediction, ApiError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error);
        return Err(ApiError::Status { status, message });
    }

    let decoded = match kind {
        FormKind::Ad => serde_json::from_str::<BestPlaceResponse>(body).map(Prediction::Placement),
        FormKind::Maintenance => {
            serde_json::from_str::<MaintenanceResponse>(body).map(Prediction::Maintenance)
        }
    };
    decoded.map_err(|e| ApiError::Decode(e.to_string()))
}
