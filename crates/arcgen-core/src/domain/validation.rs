use crate::domain::{
    entities::{GenerationParams, RouteSetting},
    error::DomainError,
    value_objects::NATIVE_STYLE_TYPE,
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    /// Check the cross-field invariants of a params record before writing.
    pub fn validate_params(params: &GenerationParams) -> Result<(), DomainError> {
        if !params.variant().is_reactium() {
            return Err(DomainError::NotGeneratable {
                variant: params.variant().to_string(),
            });
        }

        if params.name().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "name" });
        }

        if params.route() == &RouteSetting::Prompt {
            return Err(DomainError::MissingRequiredField { field: "route" });
        }

        if !params.style() && (params.style_type().is_some() || params.class_name().is_some()) {
            return Err(DomainError::FeatureNotSelected("style"));
        }

        if params.is_reactium_native() {
            if !params.domain() {
                return Err(DomainError::MissingRequiredField { field: "domain" });
            }
            if params.style() && params.style_type() != Some(NATIVE_STYLE_TYPE) {
                return Err(DomainError::MissingRequiredField { field: "style_type" });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{Feature, ProjectVariant};

    #[test]
    fn pending_route_fails_validation() {
        let params = GenerationParams::builder(ProjectVariant::ReactiumWeb, "/ws/a", "/ws")
            .features([Feature::Route])
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(
            DomainValidator::validate_params(&params),
            Err(DomainError::MissingRequiredField { field: "route" })
        );
    }

    #[test]
    fn built_native_params_are_valid() {
        let params = GenerationParams::builder(ProjectVariant::ReactiumNative, "/ws/a", "/ws")
            .features([Feature::Style, Feature::Hooks])
            .unwrap()
            .build()
            .unwrap();
        assert!(DomainValidator::validate_params(&params).is_ok());
    }
}
