use super::{FormFields, FormKind, ValidationError, validate_ad, validate_maintenance};
use crate::api::{Endpoint, Submission};
use crate::lang::Lang;

type Validator = fn(&FormFields, Lang) -> Result<Submission, ValidationError>;

/// Validator and endpoint for one form, resolved once when a page declares it.
#[derive(Clone, Copy)]
pub struct FormBinding {
    pub kind: FormKind,
    pub endpoint: Endpoint,
    validate: Validator,
}

impl FormBinding {
    /// Run the validation gate for one submission.
    ///
    /// # Errors
    ///
    /// Returns the first failing check; no request may be issued in that case.
    pub fn validate(&self, fields: &FormFields, lang: Lang) -> Result<Submission, ValidationError> {
        (self.validate)(fields, lang)
    }
}

impl PartialEq for FormBinding {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.endpoint == other.endpoint
    }
}

impl std::fmt::Debug for FormBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormBinding")
            .field("kind", &self.kind)
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

fn ad_submission(fields: &FormFields, lang: Lang) -> Result<Submission, ValidationError> {
    validate_ad(fields, lang).map(Submission::Ad)
}

fn maintenance_submission(fields: &FormFields, lang: Lang) -> Result<Submission, ValidationError> {
    validate_maintenance(fields, lang).map(Submission::Maintenance)
}

#[derive(Debug, Clone)]
pub struct FormRegistry {
    bindings: Vec<FormBinding>,
}

impl Default for FormRegistry {
    fn default() -> Self {
        Self {
            bindings: vec![
                FormBinding {
                    kind: FormKind::Ad,
                    endpoint: Endpoint::BestPlace,
                    validate: ad_submission,
                },
                FormBinding {
                    kind: FormKind::Maintenance,
                    endpoint: Endpoint::PmPredict,
                    validate: maintenance_submission,
                },
            ],
        }
    }
}

impl FormRegistry {
    #[must_use]
    pub fn resolve(&self, kind: FormKind) -> Option<FormBinding> {
        self.bindings.iter().find(|b| b.kind == kind).copied()
    }

    pub fn kinds(&self) -> impl Iterator<Item = FormKind> + '_ {
        self.bindings.iter().map(|b| b.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_form_kind_has_a_binding() {
        let registry = FormRegistry::default();
        for kind in [FormKind::Ad, FormKind::Maintenance] {
            let binding = registry.resolve(kind).expect("binding registered");
            assert_eq!(binding.endpoint, Endpoint::for_form(kind));
        }
        assert_eq!(registry.kinds().count(), 2);
    }

    #[test]
    fn binding_dispatches_to_its_validator() {
        let registry = FormRegistry::default();
        let binding = registry.resolve(FormKind::Maintenance).unwrap();
        let err = binding.validate(&FormFields::new(), Lang::En).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingField {
                form: FormKind::Maintenance,
                ..
            }
        ));
    }
}
