// src/models/customer.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::onboarding::CustomerOnboardingStep;

// --- ENDEREÇOS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
pub enum AddressKind {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub id: Uuid,
    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub account_id: Uuid,
    pub kind: AddressKind,
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip: String,
}

// Endereço como chega na requisição de update (sem ids).
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddressPayload {
    pub kind: AddressKind,
    #[schema(example = "1200 Poolside Ave")]
    pub line1: String,
    pub line2: Option<String>,
    pub city: String,
    #[schema(example = "FL")]
    pub state: String,
    #[schema(example = "33139")]
    pub zip: String,
}

// --- PERFIL ---

// Linha de customer_profiles. Os atributos da piscina são códigos de
// referência do catálogo e ficam nulos até o cliente preencher.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfile {
    pub account_id: Uuid,

    pub sanitation_method: Option<String>,
    pub pool_type: Option<String>,
    pub pool_size: Option<String>,
    pub pool_material: Option<String>,
    pub hot_tub_type: Option<String>,
    pub pool_season: Option<String>,

    pub notify_email: bool,
    pub notify_sms: bool,

    #[serde(rename = "lastCompletedOnboardingStep")]
    pub last_completed_step: CustomerOnboardingStep,

    #[serde(skip_serializing)]
    #[schema(ignore)]
    pub deleted: bool,

    pub updated_at: DateTime<Utc>,
}

// --- PAYLOAD DE UPDATE (parcial) ---

// `onboardingStep` é a etapa ALVO e é obrigatória; o restante é opcional.
// Campo ausente (None) significa "não mexer", nunca "limpar".
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCustomerProfilePayload {
    pub onboarding_step: CustomerOnboardingStep,

    #[schema(example = "salt_water")]
    pub sanitation_method: Option<String>,
    #[schema(example = "lap_pool")]
    pub pool_type: Option<String>,
    pub pool_size: Option<String>,
    pub pool_material: Option<String>,
    pub hot_tub_type: Option<String>,
    pub pool_season: Option<String>,

    pub notify_email: Option<bool>,
    pub notify_sms: Option<bool>,

    pub addresses: Option<Vec<AddressPayload>>,
}

impl UpdateCustomerProfilePayload {
    // Endereço primário proposto na requisição, se houver.
    pub fn primary_address(&self) -> Option<&AddressPayload> {
        self.addresses
            .as_deref()
            .and_then(|list| list.iter().find(|a| a.kind == AddressKind::Primary))
    }
}

// --- RESPOSTA ---

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerProfileResponse {
    #[serde(flatten)]
    pub profile: CustomerProfile,
    pub addresses: Vec<Address>,
}
