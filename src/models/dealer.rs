// src/models/dealer.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::onboarding::DealerOnboardingStep;

// --- LOCAIS DE ATENDIMENTO ---

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusinessLocation {
    pub id: Uuid,
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub account_id: Uuid,
    pub name: Option<String>,
    pub line1: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocationPayload {
    #[schema(example = "Loja Centro")]
    pub name: Option<String>,
    pub line1: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

// --- PERFIL ---

// Linha de dealer_profiles. Coleções simples (brands, jobCategories,
// certifications) são TEXT[] no Postgres e Vec<String> aqui.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealerProfile {
    pub account_id: Uuid,

    pub business_name: Option<String>,
    pub about: Option<String>,
    pub website: Option<String>,
    pub business_phone: Option<String>,

    // 1999 é o sentinela de "Before 2000"
    pub start_year: Option<i32>,

    pub brands: Vec<String>,
    pub job_categories: Vec<String>,
    pub certifications: Vec<String>,

    pub terms_accepted: bool,

    #[serde(rename = "lastCompletedOnboardingStep")]
    pub last_completed_step: DealerOnboardingStep,

    pub updated_at: DateTime<Utc>,
}

// --- PAYLOAD DE UPDATE (parcial) ---

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDealerProfilePayload {
    pub onboarding_step: DealerOnboardingStep,

    #[schema(example = "Blue Lagoon Pools")]
    pub business_name: Option<String>,
    pub about: Option<String>,
    #[schema(example = "www.bluelagoonpools.com")]
    pub website: Option<String>,
    pub business_phone: Option<String>,

    // Ano de início como texto livre: "2006" ou "Before 2000"
    #[schema(example = "2006")]
    pub start_year: Option<String>,

    pub brands: Option<Vec<String>>,
    pub job_categories: Option<Vec<String>>,
    pub certifications: Option<Vec<String>>,

    pub terms_accepted: Option<bool>,

    pub locations: Option<Vec<LocationPayload>>,
}

// --- RESPOSTA ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DealerProfileResponse {
    #[serde(flatten)]
    pub profile: DealerProfile,
    pub locations: Vec<BusinessLocation>,

    // Derivado de start_year (ex: "20" ou "27+"); nulo se nunca informado
    pub years_in_business: Option<String>,
}
