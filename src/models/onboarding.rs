// src/models/onboarding.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- ETAPAS DE ONBOARDING (uma sequência por papel) ---

// As etapas ficam como TEXT no banco; na API viajam em PascalCase.
// A etapa enviada na requisição de update é a etapa ALVO: ela só escolhe
// qual conjunto de regras se aplica (regressão não é rejeitada de propósito).

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum CustomerOnboardingStep {
    SignUpComplete,
    GettingStarted,
    PoolDetails,
    EditProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum DealerOnboardingStep {
    SignUpComplete,
    AboutBusiness,
    PublicCompanyProfile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum ExpertOnboardingStep {
    SignUpComplete,
    ExpertProfileCompletion,
}

impl CustomerOnboardingStep {
    // Etapa de regime permanente: o cliente está "totalmente onboardado"
    // e pode reentrar para edições.
    pub fn is_steady_state(&self) -> bool {
        matches!(self, Self::EditProfile)
    }
}

impl DealerOnboardingStep {
    pub fn is_steady_state(&self) -> bool {
        matches!(self, Self::PublicCompanyProfile)
    }
}

impl ExpertOnboardingStep {
    pub fn is_steady_state(&self) -> bool {
        matches!(self, Self::ExpertProfileCompletion)
    }
}

// --- ERROS DE VALIDAÇÃO (campo + código) ---

// Códigos de erro estáveis por categoria. O nome da variante É o código
// que vai no JSON (PascalCase), ex: {"field": "skills", "errorCode": "InvalidSkillCode"}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ValidationCode {
    FieldRequired,
    InvalidEmailFormat,
    InvalidPhoneFormat,
    InvalidZipCode,
    MaxLengthExceeded,
    InvalidWebsiteUrl,
    InvalidSanitationMethodCode,
    InvalidPoolTypeCode,
    InvalidPoolSizeCode,
    InvalidPoolMaterialCode,
    InvalidHotTubTypeCode,
    InvalidPoolSeasonCode,
    InvalidJobCategoryCode,
    InvalidLanguageCode,
    InvalidSkillCode,
    InvalidStartYear,
    ErrorSameCurrentAndNewPassword,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldError {
    #[schema(example = "poolMaterial")]
    pub field: String,
    pub error_code: ValidationCode,
}

impl FieldError {
    pub fn new(field: &str, error_code: ValidationCode) -> Self {
        Self {
            field: field.to_string(),
            error_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_serializes_as_pascal_case() {
        let json = serde_json::to_string(&CustomerOnboardingStep::PoolDetails).unwrap();
        assert_eq!(json, "\"PoolDetails\"");

        let back: CustomerOnboardingStep = serde_json::from_str("\"EditProfile\"").unwrap();
        assert_eq!(back, CustomerOnboardingStep::EditProfile);
    }

    #[test]
    fn test_field_error_wire_shape() {
        let err = FieldError::new("skills", ValidationCode::InvalidSkillCode);
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["field"], "skills");
        assert_eq!(json["errorCode"], "InvalidSkillCode");
    }

    #[test]
    fn test_steady_state_steps() {
        assert!(CustomerOnboardingStep::EditProfile.is_steady_state());
        assert!(!CustomerOnboardingStep::PoolDetails.is_steady_state());
        assert!(DealerOnboardingStep::PublicCompanyProfile.is_steady_state());
        assert!(ExpertOnboardingStep::ExpertProfileCompletion.is_steady_state());
        assert!(!ExpertOnboardingStep::SignUpComplete.is_steady_state());
    }
}
