// src/models/expert.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::onboarding::ExpertOnboardingStep;

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpertProfile {
    pub account_id: Uuid,

    pub zip_code: Option<String>,

    // Ano em que entrou no ramo (1999 = "Before 2000")
    pub start_year: Option<i32>,

    pub languages: Vec<String>,
    pub skills: Vec<String>,

    pub about: Option<String>,
    pub photo_url: Option<String>,

    #[serde(rename = "lastCompletedOnboardingStep")]
    pub last_completed_step: ExpertOnboardingStep,

    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateExpertProfilePayload {
    pub onboarding_step: ExpertOnboardingStep,

    #[schema(example = "33139")]
    pub zip_code: Option<String>,

    #[schema(example = "Before 2000")]
    pub start_year: Option<String>,

    #[schema(example = json!(["en", "pt"]))]
    pub languages: Option<Vec<String>>,
    #[schema(example = json!(["pump_repair", "free_assessment"]))]
    pub skills: Option<Vec<String>>,

    pub about: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExpertProfileResponse {
    #[serde(flatten)]
    pub profile: ExpertProfile,

    // Derivado de start_year (ex: "20" ou "27+"); nulo se nunca informado
    pub years_of_experience: Option<String>,
}
