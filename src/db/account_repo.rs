// src/db/account_repo.rs

use sqlx::{Executor, PgPool, Postgres};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::account::{Account, AccountRole},
};

const ACCOUNT_COLUMNS: &str = "id, email, password_hash, first_name, last_name, phone, \
                               role, onboarding_complete, created_at, updated_at";

// O repositório de contas, responsável pela tabela 'accounts'
#[derive(Clone)]
pub struct AccountRepository {
    pool: PgPool,
}

impl AccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca uma conta pelo e-mail (login)
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AppError> {
        let maybe_account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_account)
    }

    // Busca uma conta pelo ID (validação de token)
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AppError> {
        let maybe_account = sqlx::query_as::<_, Account>(&format!(
            "SELECT {ACCOUNT_COLUMNS} FROM accounts WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(maybe_account)
    }

    // Cria a conta dentro da transação do cadastro.
    // Com tratamento específico para e-mail duplicado.
    pub async fn create_account<'e, E>(
        &self,
        executor: E,
        email: &str,
        password_hash: &str,
        first_name: &str,
        last_name: &str,
        phone: Option<&str>,
        role: AccountRole,
    ) -> Result<Account, AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        let account = sqlx::query_as::<_, Account>(&format!(
            "INSERT INTO accounts (email, password_hash, first_name, last_name, phone, role) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {ACCOUNT_COLUMNS}"
        ))
        .bind(email)
        .bind(password_hash)
        .bind(first_name)
        .bind(last_name)
        .bind(phone)
        .bind(role)
        .fetch_one(executor)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.is_unique_violation() {
                    // O nome padrão que o Postgres cria para o UNIQUE do email
                    if db_err.constraint() == Some("accounts_email_key") {
                        return AppError::EmailAlreadyExists;
                    }
                }
            }
            e.into()
        })?;

        Ok(account)
    }

    pub async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<(), AppError> {
        sqlx::query(
            "UPDATE accounts SET password_hash = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(password_hash)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    // Liga a flag de onboarding completo junto com o update do perfil
    // (mesma transação).
    pub async fn set_onboarding_complete<'e, E>(
        &self,
        executor: E,
        id: Uuid,
        complete: bool,
    ) -> Result<(), AppError>
    where
        E: Executor<'e, Database = Postgres>,
    {
        sqlx::query(
            "UPDATE accounts SET onboarding_complete = $2, updated_at = NOW() WHERE id = $1",
        )
        .bind(id)
        .bind(complete)
        .execute(executor)
        .await?;
        Ok(())
    }
}
