// src/services/dealer_service.rs

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    common::start_year::{current_year, parse_start_year, years_since},
    db::{AccountRepository, DealerRepository},
    models::account::Account,
    models::dealer::{DealerProfile, DealerProfileResponse, UpdateDealerProfilePayload},
    services::catalog::{CatalogApi, snapshot_for_dealer},
    services::validation::{dealer_rules, run_rules},
};

#[derive(Clone)]
pub struct DealerService {
    dealer_repo: DealerRepository,
    account_repo: AccountRepository,
    catalog: Arc<dyn CatalogApi>,
    pool: PgPool,
}

impl DealerService {
    pub fn new(
        dealer_repo: DealerRepository,
        account_repo: AccountRepository,
        catalog: Arc<dyn CatalogApi>,
        pool: PgPool,
    ) -> Self {
        Self {
            dealer_repo,
            account_repo,
            catalog,
            pool,
        }
    }

    pub async fn get_profile(&self, account: &Account) -> Result<DealerProfileResponse, AppError> {
        let profile = self
            .dealer_repo
            .find_profile(account.id)
            .await?
            .ok_or(AppError::AccountNotFound)?;
        let locations = self.dealer_repo.list_locations(account.id).await?;

        Ok(build_response(profile, locations, current_year()))
    }

    pub async fn update_profile(
        &self,
        account: &Account,
        payload: UpdateDealerProfilePayload,
    ) -> Result<DealerProfileResponse, AppError> {
        // 1. Carrega o agregado atual
        let mut profile = self
            .dealer_repo
            .find_profile(account.id)
            .await?
            .ok_or(AppError::AccountNotFound)?;

        // 2. Snapshot do catálogo
        let lookups = snapshot_for_dealer(self.catalog.as_ref()).await;

        // 3. Regras da etapa alvo
        let errors = run_rules(&dealer_rules(), &payload, &lookups);
        if !errors.is_empty() {
            return Err(AppError::ProfileValidation(errors));
        }

        // 4. Ano de início: "2006"/"Before 2000" vira inteiro; ano futuro
        //    aborta com a faixa válida na mensagem (regra de negócio)
        let start_year = match payload.start_year.as_deref() {
            Some(raw) => Some(parse_start_year(raw, current_year())?),
            None => None,
        };

        // 5. Merge parcial
        apply_dealer_update(&mut profile, &payload, start_year);

        // 6. Persiste perfil + locais numa transação só
        let mut tx = self.pool.begin().await?;

        let updated = self.dealer_repo.update_profile(&mut *tx, &profile).await?;

        if let Some(locations) = &payload.locations {
            self.dealer_repo.delete_locations(&mut *tx, account.id).await?;
            for location in locations {
                self.dealer_repo
                    .insert_location(&mut *tx, account.id, location)
                    .await?;
            }
        }

        if payload.onboarding_step.is_steady_state() && !account.onboarding_complete {
            self.account_repo
                .set_onboarding_complete(&mut *tx, account.id, true)
                .await?;
        }

        tx.commit().await?;

        let locations = self.dealer_repo.list_locations(account.id).await?;
        Ok(build_response(updated, locations, current_year()))
    }
}

fn build_response(
    profile: DealerProfile,
    locations: Vec<crate::models::dealer::BusinessLocation>,
    current_year: i32,
) -> DealerProfileResponse {
    let years_in_business = years_since(profile.start_year, current_year);
    DealerProfileResponse {
        profile,
        locations,
        years_in_business,
    }
}

fn merge_text(target: &mut Option<String>, source: &Option<String>) {
    if source.is_some() {
        *target = source.clone();
    }
}

// Merge parcial: campos ausentes não mexem em nada; listas enviadas
// substituem o conjunto inteiro.
pub fn apply_dealer_update(
    profile: &mut DealerProfile,
    payload: &UpdateDealerProfilePayload,
    start_year: Option<i32>,
) {
    merge_text(&mut profile.business_name, &payload.business_name);
    merge_text(&mut profile.about, &payload.about);
    merge_text(&mut profile.website, &payload.website);
    merge_text(&mut profile.business_phone, &payload.business_phone);

    if start_year.is_some() {
        profile.start_year = start_year;
    }

    if let Some(brands) = &payload.brands {
        profile.brands = brands.clone();
    }
    if let Some(job_categories) = &payload.job_categories {
        profile.job_categories = job_categories.clone();
    }
    if let Some(certifications) = &payload.certifications {
        profile.certifications = certifications.clone();
    }

    if let Some(terms_accepted) = payload.terms_accepted {
        profile.terms_accepted = terms_accepted;
    }

    profile.last_completed_step = payload.onboarding_step;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::onboarding::DealerOnboardingStep;
    use chrono::Utc;
    use uuid::Uuid;

    fn existing_profile() -> DealerProfile {
        DealerProfile {
            account_id: Uuid::new_v4(),
            business_name: Some("Blue Lagoon Pools".into()),
            about: None,
            website: None,
            business_phone: Some("(305) 555-0101".into()),
            start_year: None,
            brands: vec!["pentair".into()],
            job_categories: vec![],
            certifications: vec![],
            terms_accepted: true,
            last_completed_step: DealerOnboardingStep::AboutBusiness,
            updated_at: Utc::now(),
        }
    }

    fn empty_payload(step: DealerOnboardingStep) -> UpdateDealerProfilePayload {
        UpdateDealerProfilePayload {
            onboarding_step: step,
            business_name: None,
            about: None,
            website: None,
            business_phone: None,
            start_year: None,
            brands: None,
            job_categories: None,
            certifications: None,
            terms_accepted: None,
            locations: None,
        }
    }

    #[test]
    fn test_merge_keeps_absent_fields_and_replaces_lists_wholesale() {
        let mut profile = existing_profile();
        let mut payload = empty_payload(DealerOnboardingStep::PublicCompanyProfile);
        payload.brands = Some(vec!["hayward".into(), "jandy".into()]);

        apply_dealer_update(&mut profile, &payload, None);

        // Lista enviada substitui tudo; campos ausentes ficam como estavam
        assert_eq!(profile.brands, vec!["hayward".to_string(), "jandy".to_string()]);
        assert_eq!(profile.business_name.as_deref(), Some("Blue Lagoon Pools"));
        assert_eq!(
            profile.last_completed_step,
            DealerOnboardingStep::PublicCompanyProfile
        );
    }

    #[test]
    fn test_parsed_start_year_lands_on_profile() {
        let mut profile = existing_profile();
        let payload = empty_payload(DealerOnboardingStep::PublicCompanyProfile);

        apply_dealer_update(&mut profile, &payload, Some(2006));
        assert_eq!(profile.start_year, Some(2006));

        // Update seguinte sem o campo não apaga o ano
        apply_dealer_update(&mut profile, &payload, None);
        assert_eq!(profile.start_year, Some(2006));
    }

    #[test]
    fn test_years_in_business_derivation() {
        let mut profile = existing_profile();
        profile.start_year = Some(2006);
        let response = build_response(profile, vec![], 2026);
        assert_eq!(response.years_in_business.as_deref(), Some("20"));

        let mut profile = existing_profile();
        profile.start_year = Some(1999);
        let response = build_response(profile, vec![], 2026);
        assert_eq!(response.years_in_business.as_deref(), Some("27+"));

        let response = build_response(existing_profile(), vec![], 2026);
        assert_eq!(response.years_in_business, None);
    }
}
