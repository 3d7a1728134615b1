// src/services/auth.rs

use bcrypt::{hash, verify};
use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    db::{AccountRepository, CustomerRepository, DealerRepository, ExpertRepository},
    models::account::{Account, AccountRole, Claims, RegistrationRequest},
    services::validation::password_change_errors,
};

#[derive(Clone)]
pub struct AuthService {
    account_repo: AccountRepository,
    customer_repo: CustomerRepository,
    dealer_repo: DealerRepository,
    expert_repo: ExpertRepository,
    jwt_secret: String,
    pool: PgPool,
}

impl AuthService {
    pub fn new(
        account_repo: AccountRepository,
        customer_repo: CustomerRepository,
        dealer_repo: DealerRepository,
        expert_repo: ExpertRepository,
        jwt_secret: String,
        pool: PgPool,
    ) -> Self {
        Self {
            account_repo,
            customer_repo,
            dealer_repo,
            expert_repo,
            jwt_secret,
            pool,
        }
    }

    // Cadastro: conta + perfil do papel nascem JUNTOS, na mesma transação,
    // com a etapa em SignUpComplete (default da tabela).
    pub async fn register(&self, request: RegistrationRequest) -> Result<String, AppError> {
        let email = request.email().trim().to_lowercase();

        // 1. Hashing (fora da transação, não toca no banco)
        let password = match &request {
            RegistrationRequest::Customer(p) => p.password.clone(),
            RegistrationRequest::Dealer(p) => p.password.clone(),
            RegistrationRequest::Expert(p) => p.password.clone(),
        };
        let hashed_password =
            tokio::task::spawn_blocking(move || hash(&password, bcrypt::DEFAULT_COST))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        // 2. Transação: se criar o perfil falhar, a conta é desfeita junto
        let mut tx = self.pool.begin().await?;

        let account = match &request {
            RegistrationRequest::Customer(p) => {
                let account = self
                    .account_repo
                    .create_account(
                        &mut *tx,
                        &email,
                        &hashed_password,
                        &p.first_name,
                        &p.last_name,
                        p.phone.as_deref(),
                        AccountRole::Customer,
                    )
                    .await?;
                self.customer_repo.create_profile(&mut *tx, account.id).await?;
                account
            }
            RegistrationRequest::Dealer(p) => {
                let account = self
                    .account_repo
                    .create_account(
                        &mut *tx,
                        &email,
                        &hashed_password,
                        &p.first_name,
                        &p.last_name,
                        p.phone.as_deref(),
                        AccountRole::Dealer,
                    )
                    .await?;
                self.dealer_repo
                    .create_profile(&mut *tx, account.id, p.business_name.as_deref())
                    .await?;
                account
            }
            RegistrationRequest::Expert(p) => {
                let account = self
                    .account_repo
                    .create_account(
                        &mut *tx,
                        &email,
                        &hashed_password,
                        &p.first_name,
                        &p.last_name,
                        p.phone.as_deref(),
                        AccountRole::Expert,
                    )
                    .await?;
                self.expert_repo
                    .create_profile(&mut *tx, account.id, p.zip_code.as_deref())
                    .await?;
                account
            }
        };

        tx.commit().await?;

        tracing::info!("✅ Conta {:?} criada: {}", request.role(), account.id);

        // 3. Gera o token
        self.create_token(account.id)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<String, AppError> {
        let account = self
            .account_repo
            .find_by_email(&email.trim().to_lowercase())
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = account.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid =
            tokio::task::spawn_blocking(move || verify(&password_clone, &password_hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        self.create_token(account.id)
    }

    // Troca de senha: a regra "nova ≠ atual" roda ANTES de qualquer hash.
    pub async fn change_password(
        &self,
        account: &Account,
        current_password: &str,
        new_password: &str,
    ) -> Result<(), AppError> {
        let errors = password_change_errors(current_password, new_password);
        if !errors.is_empty() {
            return Err(AppError::ProfileValidation(errors));
        }

        let current_clone = current_password.to_owned();
        let hash_clone = account.password_hash.clone();
        let current_matches =
            tokio::task::spawn_blocking(move || verify(&current_clone, &hash_clone))
                .await
                .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !current_matches {
            return Err(AppError::InvalidCredentials);
        }

        let new_clone = new_password.to_owned();
        let new_hash = tokio::task::spawn_blocking(move || hash(&new_clone, bcrypt::DEFAULT_COST))
            .await
            .map_err(|e| anyhow::anyhow!("Falha na task de hashing: {}", e))??;

        self.account_repo.update_password(account.id, &new_hash).await
    }

    pub async fn validate_token(&self, token: &str) -> Result<Account, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        self.account_repo
            .find_by_id(token_data.claims.sub)
            .await?
            .ok_or(AppError::AccountNotFound)
    }

    fn create_token(&self, account_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: account_id,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        Ok(encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?)
    }
}
