// src/db/customer_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::customer::{Address, AddressPayload, CustomerProfile},
};

const PROFILE_COLUMNS: &str = "account_id, sanitation_method, pool_type, pool_size, \
                               pool_material, hot_tub_type, pool_season, notify_email, \
                               notify_sms, last_completed_step, deleted, updated_at";

#[derive(Clone)]
pub struct CustomerRepository {
    pool: PgPool,
}

impl CustomerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_profile(
        &self,
        account_id: Uuid,
    ) -> Result<Option<CustomerProfile>, AppError> {
        let maybe_profile = sqlx::query_as::<_, CustomerProfile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM customer_profiles WHERE account_id = $1"
        ))
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_profile)
    }

    // Cria o perfil vazio junto com a conta (mesma transação do cadastro);
    // a etapa nasce em SignUpComplete via DEFAULT da tabela.
    pub async fn create_profile<'e, E>(
        &self,
        executor: E,
        account_id: Uuid,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("INSERT INTO customer_profiles (account_id) VALUES ($1)")
            .bind(account_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    // Grava o agregado já mesclado pelo serviço, etapa incluída.
    pub async fn update_profile<'e, E>(
        &self,
        executor: E,
        profile: &CustomerProfile,
    ) -> Result<CustomerProfile, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let updated = sqlx::query_as::<_, CustomerProfile>(&format!(
            "UPDATE customer_profiles SET \
                sanitation_method = $2, pool_type = $3, pool_size = $4, \
                pool_material = $5, hot_tub_type = $6, pool_season = $7, \
                notify_email = $8, notify_sms = $9, last_completed_step = $10, \
                updated_at = NOW() \
             WHERE account_id = $1 \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(profile.account_id)
        .bind(&profile.sanitation_method)
        .bind(&profile.pool_type)
        .bind(&profile.pool_size)
        .bind(&profile.pool_material)
        .bind(&profile.hot_tub_type)
        .bind(&profile.pool_season)
        .bind(profile.notify_email)
        .bind(profile.notify_sms)
        .bind(profile.last_completed_step)
        .fetch_one(executor)
        .await?;
        Ok(updated)
    }

    pub async fn soft_delete<'e, E>(&self, executor: E, account_id: Uuid) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            "UPDATE customer_profiles SET deleted = TRUE, updated_at = NOW() \
             WHERE account_id = $1",
        )
        .bind(account_id)
        .execute(executor)
        .await?;
        Ok(())
    }

    // --- ENDEREÇOS ---

    pub async fn list_addresses(&self, account_id: Uuid) -> Result<Vec<Address>, AppError> {
        let addresses = sqlx::query_as::<_, Address>(
            "SELECT id, account_id, kind, line1, line2, city, state, zip \
             FROM customer_addresses WHERE account_id = $1 ORDER BY kind",
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(addresses)
    }

    pub async fn delete_addresses<'e, E>(
        &self,
        executor: E,
        account_id: Uuid,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM customer_addresses WHERE account_id = $1")
            .bind(account_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn insert_address<'e, E>(
        &self,
        executor: E,
        account_id: Uuid,
        address: &AddressPayload,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            "INSERT INTO customer_addresses (account_id, kind, line1, line2, city, state, zip) \
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(account_id)
        .bind(address.kind)
        .bind(&address.line1)
        .bind(&address.line2)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.zip)
        .execute(executor)
        .await?;
        Ok(())
    }
}
