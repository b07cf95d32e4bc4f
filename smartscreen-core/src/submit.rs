//! One form submission from raw fields to a renderable prediction.

use crate::api::{ApiConfig, ApiError, ApiRequest, Submission, decode_response};
use crate::forms::{FormBinding, FormFields, FormKind, FormRegistry, InputTip, ValidationError};
use crate::lang::Lang;
use crate::result::{MaintenanceView, PlacementView, Prediction};
use once_cell::sync::Lazy;

/// Registry shared by every page that hosts a form.
pub static FORMS: Lazy<FormRegistry> = Lazy::new(FormRegistry::default);

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A request that passed validation, plus what the result card needs from the inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedRequest {
    pub kind: FormKind,
    pub lang: Lang,
    pub request: ApiRequest,
    pub input_tips: Vec<InputTip>,
}

/// Validate `fields` and build the request. Nothing is sent when this fails.
///
/// # Errors
///
/// Returns [`SubmitError::Invalid`] with the first failing check, or
/// [`SubmitError::Api`] if the payload cannot be encoded.
pub fn prepare(
    binding: &FormBinding,
    config: &ApiConfig,
    fields: &FormFields,
    lang: Lang,
) -> Result<PreparedRequest, SubmitError> {
    let submission = binding.validate(fields, lang)?;
    let input_tips = match &submission {
        Submission::Maintenance(payload) => payload.input_tips(),
        Submission::Ad(_) => Vec::new(),
    };
    let request = config.request(&submission)?;
    Ok(PreparedRequest {
        kind: binding.kind,
        lang,
        request,
        input_tips,
    })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionView {
    Placement(PlacementView),
    Maintenance(MaintenanceView),
}

impl PreparedRequest {
    /// Interpret the server's answer to this request.
    ///
    /// # Errors
    ///
    /// Propagates [`decode_response`] failures.
    pub fn settle(&self, status: u16, body: &str) -> Result<PredictionView, ApiError> {
        let prediction = decode_response(self.kind, status, body)?;
        if let Some(debug) = prediction.debug() {
            log::debug!("{} debug: {debug}", self.kind.tag());
        }
        Ok(match prediction {
            Prediction::Placement(resp) => PredictionView::Placement(PlacementView::from(&resp)),
            Prediction::Maintenance(resp) => {
                PredictionView::Maintenance(MaintenanceView::build(&resp, &self.input_tips))
            }
        })
    }
}
