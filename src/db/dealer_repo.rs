// src/db/dealer_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::dealer::{BusinessLocation, DealerProfile, LocationPayload},
};

const PROFILE_COLUMNS: &str = "account_id, business_name, about, website, business_phone, \
                               start_year, brands, job_categories, certifications, \
                               terms_accepted, last_completed_step, updated_at";

#[derive(Clone)]
pub struct DealerRepository {
    pool: PgPool,
}

impl DealerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_profile(&self, account_id: Uuid) -> Result<Option<DealerProfile>, AppError> {
        let maybe_profile = sqlx::query_as::<_, DealerProfile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM dealer_profiles WHERE account_id = $1"
        ))
        .bind(account_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_profile)
    }

    pub async fn create_profile<'e, E>(
        &self,
        executor: E,
        account_id: Uuid,
        business_name: Option<&str>,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("INSERT INTO dealer_profiles (account_id, business_name) VALUES ($1, $2)")
            .bind(account_id)
            .bind(business_name)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn update_profile<'e, E>(
        &self,
        executor: E,
        profile: &DealerProfile,
    ) -> Result<DealerProfile, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let updated = sqlx::query_as::<_, DealerProfile>(&format!(
            "UPDATE dealer_profiles SET \
                business_name = $2, about = $3, website = $4, business_phone = $5, \
                start_year = $6, brands = $7, job_categories = $8, certifications = $9, \
                terms_accepted = $10, last_completed_step = $11, updated_at = NOW() \
             WHERE account_id = $1 \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(profile.account_id)
        .bind(&profile.business_name)
        .bind(&profile.about)
        .bind(&profile.website)
        .bind(&profile.business_phone)
        .bind(profile.start_year)
        .bind(&profile.brands)
        .bind(&profile.job_categories)
        .bind(&profile.certifications)
        .bind(profile.terms_accepted)
        .bind(profile.last_completed_step)
        .fetch_one(executor)
        .await?;
        Ok(updated)
    }

    // --- LOCAIS ---

    pub async fn list_locations(&self, account_id: Uuid) -> Result<Vec<BusinessLocation>, AppError> {
        let locations = sqlx::query_as::<_, BusinessLocation>(
            "SELECT id, account_id, name, line1, city, state, zip \
             FROM business_locations WHERE account_id = $1 ORDER BY line1",
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(locations)
    }

    pub async fn delete_locations<'e, E>(
        &self,
        executor: E,
        account_id: Uuid,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("DELETE FROM business_locations WHERE account_id = $1")
            .bind(account_id)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn insert_location<'e, E>(
        &self,
        executor: E,
        account_id: Uuid,
        location: &LocationPayload,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            "INSERT INTO business_locations (account_id, name, line1, city, state, zip) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(account_id)
        .bind(&location.name)
        .bind(&location.line1)
        .bind(&location.city)
        .bind(&location.state)
        .bind(&location.zip)
        .execute(executor)
        .await?;
        Ok(())
    }
}
