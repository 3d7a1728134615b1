// src/db/expert_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{common::error::AppError, models::expert::ExpertProfile};

const PROFILE_COLUMNS: &str = "account_id, zip_code, start_year, languages, skills, \
                               about, photo_url, last_completed_step, updated_at";

#[derive(Clone)]
pub struct ExpertRepository {
    pool: PgPool,
}

impl ExpertRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_profile(&self, account_id: Uuid) -> Result<Option<ExpertProfile>, AppError> {
        let maybe_profile = sqlx::query_as::<_, ExpertProfile>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM expert_profiles WHERE account_id = $1"
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
        zip_code: Option<&str>,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query("INSERT INTO expert_profiles (account_id, zip_code) VALUES ($1, $2)")
            .bind(account_id)
            .bind(zip_code)
            .execute(executor)
            .await?;
        Ok(())
    }

    pub async fn update_profile<'e, E>(
        &self,
        executor: E,
        profile: &ExpertProfile,
    ) -> Result<ExpertProfile, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let updated = sqlx::query_as::<_, ExpertProfile>(&format!(
            "UPDATE expert_profiles SET \
                zip_code = $2, start_year = $3, languages = $4, skills = $5, \
                about = $6, photo_url = $7, last_completed_step = $8, updated_at = NOW() \
             WHERE account_id = $1 \
             RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(profile.account_id)
        .bind(&profile.zip_code)
        .bind(profile.start_year)
        .bind(&profile.languages)
        .bind(&profile.skills)
        .bind(&profile.about)
        .bind(&profile.photo_url)
        .bind(profile.last_completed_step)
        .fetch_one(executor)
        .await?;
        Ok(updated)
    }
}
