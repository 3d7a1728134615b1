// src/config.rs

use std::{env, sync::Arc, time::Duration};

use sqlx::{PgPool, postgres::PgPoolOptions};

use crate::{
    db::{AccountRepository, CustomerRepository, DealerRepository, ExpertRepository},
    services::catalog::{CatalogApi, HttpCatalogClient},
    services::{AuthService, CustomerService, DealerService, ExpertService},
};

#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub auth_service: AuthService,
    pub customer_service: CustomerService,
    pub dealer_service: DealerService,
    pub expert_service: ExpertService,
}

impl AppState {
    // Tudo que pode impedir o servidor de funcionar falha AQUI, na
    // construção, nunca no meio de uma requisição.
    pub async fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL deve ser definida");
        let jwt_secret = env::var("JWT_SECRET").expect("JWT_SECRET deve ser definido");

        // Conecta ao banco de dados, usando '?' para propagar erros
        let db_pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(3))
            .connect(&database_url)
            .await?;

        tracing::info!("✅ Conexão com o banco de dados estabelecida com sucesso!");

        // Cliente do catálogo: sem base URL configurada, nem sobe
        let catalog_base_url = env::var("CATALOG_BASE_URL").unwrap_or_default();
        let catalog: Arc<dyn CatalogApi> = Arc::new(HttpCatalogClient::new(&catalog_base_url)?);

        // --- Monta o gráfico de dependências ---
        let account_repo = AccountRepository::new(db_pool.clone());
        let customer_repo = CustomerRepository::new(db_pool.clone());
        let dealer_repo = DealerRepository::new(db_pool.clone());
        let expert_repo = ExpertRepository::new(db_pool.clone());

        let auth_service = AuthService::new(
            account_repo.clone(),
            customer_repo.clone(),
            dealer_repo.clone(),
            expert_repo.clone(),
            jwt_secret,
            db_pool.clone(),
        );
        let customer_service = CustomerService::new(
            customer_repo,
            account_repo.clone(),
            catalog.clone(),
            db_pool.clone(),
        );
        let dealer_service = DealerService::new(
            dealer_repo,
            account_repo.clone(),
            catalog.clone(),
            db_pool.clone(),
        );
        let expert_service =
            ExpertService::new(expert_repo, account_repo, catalog, db_pool.clone());

        Ok(Self {
            db_pool,
            auth_service,
            customer_service,
            dealer_service,
            expert_service,
        })
    }
}
