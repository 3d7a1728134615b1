// src/services/expert_service.rs

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    common::start_year::{current_year, parse_start_year, years_since},
    db::{AccountRepository, ExpertRepository},
    models::account::Account,
    models::expert::{ExpertProfile, ExpertProfileResponse, UpdateExpertProfilePayload},
    services::catalog::{CatalogApi, snapshot_for_expert},
    services::validation::{expert_rules, run_rules},
};

#[derive(Clone)]
pub struct ExpertService {
    expert_repo: ExpertRepository,
    account_repo: AccountRepository,
    catalog: Arc<dyn CatalogApi>,
    pool: PgPool,
}

impl ExpertService {
    pub fn new(
        expert_repo: ExpertRepository,
        account_repo: AccountRepository,
        catalog: Arc<dyn CatalogApi>,
        pool: PgPool,
    ) -> Self {
        Self {
            expert_repo,
            account_repo,
            catalog,
            pool,
        }
    }

    pub async fn get_profile(&self, account: &Account) -> Result<ExpertProfileResponse, AppError> {
        let profile = self
            .expert_repo
            .find_profile(account.id)
            .await?
            .ok_or(AppError::AccountNotFound)?;

        Ok(build_response(profile, current_year()))
    }

    pub async fn update_profile(
        &self,
        account: &Account,
        payload: UpdateExpertProfilePayload,
    ) -> Result<ExpertProfileResponse, AppError> {
        // 1. Carrega o perfil atual
        let mut profile = self
            .expert_repo
            .find_profile(account.id)
            .await?
            .ok_or(AppError::AccountNotFound)?;

        // 2. Snapshot do catálogo (languages + skills)
        let lookups = snapshot_for_expert(self.catalog.as_ref()).await;

        // 3. Regras da etapa alvo
        let errors = run_rules(&expert_rules(), &payload, &lookups);
        if !errors.is_empty() {
            return Err(AppError::ProfileValidation(errors));
        }

        // 4. Ano de entrada no ramo (mesma mecânica do dealer)
        let start_year = match payload.start_year.as_deref() {
            Some(raw) => Some(parse_start_year(raw, current_year())?),
            None => None,
        };

        // 5. Merge parcial
        apply_expert_update(&mut profile, &payload, start_year);

        // 6. Persiste
        let mut tx = self.pool.begin().await?;

        let updated = self.expert_repo.update_profile(&mut *tx, &profile).await?;

        if payload.onboarding_step.is_steady_state() && !account.onboarding_complete {
            self.account_repo
                .set_onboarding_complete(&mut *tx, account.id, true)
                .await?;
        }

        tx.commit().await?;

        Ok(build_response(updated, current_year()))
    }
}

fn build_response(profile: ExpertProfile, current_year: i32) -> ExpertProfileResponse {
    let years_of_experience = years_since(profile.start_year, current_year);
    ExpertProfileResponse {
        profile,
        years_of_experience,
    }
}

fn merge_text(target: &mut Option<String>, source: &Option<String>) {
    if source.is_some() {
        *target = source.clone();
    }
}

pub fn apply_expert_update(
    profile: &mut ExpertProfile,
    payload: &UpdateExpertProfilePayload,
    start_year: Option<i32>,
) {
    merge_text(&mut profile.zip_code, &payload.zip_code);
    merge_text(&mut profile.about, &payload.about);
    merge_text(&mut profile.photo_url, &payload.photo_url);

    if start_year.is_some() {
        profile.start_year = start_year;
    }

    if let Some(languages) = &payload.languages {
        profile.languages = languages.clone();
    }
    if let Some(skills) = &payload.skills {
        profile.skills = skills.clone();
    }

    profile.last_completed_step = payload.onboarding_step;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::onboarding::ExpertOnboardingStep;
    use chrono::Utc;
    use uuid::Uuid;

    fn existing_profile() -> ExpertProfile {
        ExpertProfile {
            account_id: Uuid::new_v4(),
            zip_code: Some("33139".into()),
            start_year: Some(1999),
            languages: vec!["en".into()],
            skills: vec!["motor".into()],
            about: None,
            photo_url: None,
            last_completed_step: ExpertOnboardingStep::SignUpComplete,
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_years_of_experience_uses_sentinel_suffix() {
        let response = build_response(existing_profile(), 2026);
        assert_eq!(response.years_of_experience.as_deref(), Some("27+"));

        let mut profile = existing_profile();
        profile.start_year = None;
        let response = build_response(profile, 2026);
        assert_eq!(response.years_of_experience, None);
    }

    #[test]
    fn test_merge_replaces_lists_and_advances_step() {
        let mut profile = existing_profile();
        let payload = UpdateExpertProfilePayload {
            onboarding_step: ExpertOnboardingStep::ExpertProfileCompletion,
            zip_code: None,
            start_year: None,
            languages: Some(vec!["en".into(), "pt".into()]),
            skills: None,
            about: Some("Vinte anos de manutenção de bombas.".into()),
            photo_url: None,
        };

        apply_expert_update(&mut profile, &payload, None);

        assert_eq!(profile.languages, vec!["en".to_string(), "pt".to_string()]);
        assert_eq!(profile.skills, vec!["motor".to_string()]);
        assert_eq!(profile.zip_code.as_deref(), Some("33139"));
        assert_eq!(
            profile.last_completed_step,
            ExpertOnboardingStep::ExpertProfileCompletion
        );
    }
}
