// src/services/customer_service.rs

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    db::{AccountRepository, CustomerRepository},
    models::account::Account,
    models::customer::{CustomerProfile, CustomerProfileResponse, UpdateCustomerProfilePayload},
    services::catalog::{CatalogApi, snapshot_for_customer},
    services::validation::{customer_rules, run_rules},
};

#[derive(Clone)]
pub struct CustomerService {
    customer_repo: CustomerRepository,
    account_repo: AccountRepository,
    catalog: Arc<dyn CatalogApi>,
    pool: PgPool,
}

impl CustomerService {
    pub fn new(
        customer_repo: CustomerRepository,
        account_repo: AccountRepository,
        catalog: Arc<dyn CatalogApi>,
        pool: PgPool,
    ) -> Self {
        Self {
            customer_repo,
            account_repo,
            catalog,
            pool,
        }
    }

    // Perfil soft-deletado se comporta como inexistente daqui pra frente.
    async fn load_profile(&self, account: &Account) -> Result<CustomerProfile, AppError> {
        let profile = self
            .customer_repo
            .find_profile(account.id)
            .await?
            .ok_or(AppError::AccountNotFound)?;

        if profile.deleted {
            return Err(AppError::AccountNotFound);
        }
        Ok(profile)
    }

    pub async fn get_profile(&self, account: &Account) -> Result<CustomerProfileResponse, AppError> {
        let profile = self.load_profile(account).await?;
        let addresses = self.customer_repo.list_addresses(account.id).await?;
        Ok(CustomerProfileResponse { profile, addresses })
    }

    pub async fn update_profile(
        &self,
        account: &Account,
        payload: UpdateCustomerProfilePayload,
    ) -> Result<CustomerProfileResponse, AppError> {
        // 1. Carrega o agregado atual
        let mut profile = self.load_profile(account).await?;

        // 2. Snapshot do catálogo (UMA busca por chamada de validação)
        let lookups = snapshot_for_customer(self.catalog.as_ref()).await;

        // 3. Regras da etapa alvo; falhou, rejeita tudo de uma vez
        let errors = run_rules(&customer_rules(), &payload, &lookups);
        if !errors.is_empty() {
            return Err(AppError::ProfileValidation(errors));
        }

        // 4. Merge parcial em memória (None = não mexer)
        apply_customer_update(&mut profile, &payload);

        // 5. Persiste perfil + endereços + flag da conta numa transação só
        let mut tx = self.pool.begin().await?;

        let updated = self.customer_repo.update_profile(&mut *tx, &profile).await?;

        if let Some(addresses) = &payload.addresses {
            // Endereços enviados substituem o conjunto inteiro
            self.customer_repo.delete_addresses(&mut *tx, account.id).await?;
            for address in addresses {
                self.customer_repo
                    .insert_address(&mut *tx, account.id, address)
                    .await?;
            }
        }

        if payload.onboarding_step.is_steady_state() && !account.onboarding_complete {
            self.account_repo
                .set_onboarding_complete(&mut *tx, account.id, true)
                .await?;
        }

        tx.commit().await?;

        let addresses = self.customer_repo.list_addresses(account.id).await?;
        Ok(CustomerProfileResponse {
            profile: updated,
            addresses,
        })
    }

    // Soft delete: preserva a trilha de auditoria, some das leituras.
    pub async fn soft_delete(&self, account: &Account) -> Result<(), AppError> {
        // Garante que ainda existe (e não foi deletado antes)
        self.load_profile(account).await?;

        self.customer_repo.soft_delete(&self.pool, account.id).await?;
        tracing::info!("🗑️ Perfil de cliente soft-deletado: {}", account.id);
        Ok(())
    }
}

fn merge_text(target: &mut Option<String>, source: &Option<String>) {
    if source.is_some() {
        *target = source.clone();
    }
}

// Merge parcial: só os campos presentes na requisição sobrescrevem.
// A etapa alvo sempre sobrescreve a persistida, inclusive para trás
// (comportamento permissivo preservado).
pub fn apply_customer_update(
    profile: &mut CustomerProfile,
    payload: &UpdateCustomerProfilePayload,
) {
    merge_text(&mut profile.sanitation_method, &payload.sanitation_method);
    merge_text(&mut profile.pool_type, &payload.pool_type);
    merge_text(&mut profile.pool_size, &payload.pool_size);
    merge_text(&mut profile.pool_material, &payload.pool_material);
    merge_text(&mut profile.hot_tub_type, &payload.hot_tub_type);
    merge_text(&mut profile.pool_season, &payload.pool_season);

    if let Some(notify_email) = payload.notify_email {
        profile.notify_email = notify_email;
    }
    if let Some(notify_sms) = payload.notify_sms {
        profile.notify_sms = notify_sms;
    }

    profile.last_completed_step = payload.onboarding_step;
}
