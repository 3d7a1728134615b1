// src/services/catalog.rs

use std::collections::{HashMap, HashSet};

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::{
    common::error::AppError,
    models::catalog::{LookupCode, PoolDetailLookups},
    models::onboarding::ValidationCode,
};

// --- CONTRATO DO CATÁLOGO ---

// O catálogo é um colaborador externo: ele é o dono do universo de códigos
// de referência. Atrás de um trait para os testes usarem um fixture.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    async fn pool_detail_lookups(&self) -> Result<PoolDetailLookups, AppError>;
    async fn job_categories(&self) -> Result<Vec<LookupCode>, AppError>;
    async fn languages(&self) -> Result<Vec<LookupCode>, AppError>;
    async fn skills(&self) -> Result<Vec<LookupCode>, AppError>;
}

// --- CLIENTE HTTP ---

pub struct HttpCatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpCatalogClient {
    // Sem base URL configurada o cliente nem nasce: falha fatal na
    // construção, nunca por requisição.
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            anyhow::bail!("CATALOG_BASE_URL não configurada");
        }
        Ok(Self {
            base_url,
            client: reqwest::Client::new(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    // Uma viagem só: sem retry, sem backoff. Quem decide o que fazer com a
    // falha é a montagem do snapshot (fail-open).
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| AppError::CatalogUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::CatalogUnavailable(format!(
                "GET {path} retornou {}",
                response.status()
            )));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| AppError::CatalogUnavailable(e.to_string()))
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogClient {
    async fn pool_detail_lookups(&self) -> Result<PoolDetailLookups, AppError> {
        self.get_json("/lookups/pool-details").await
    }

    async fn job_categories(&self) -> Result<Vec<LookupCode>, AppError> {
        self.get_json("/lookups/job-categories").await
    }

    async fn languages(&self) -> Result<Vec<LookupCode>, AppError> {
        self.get_json("/lookups/languages").await
    }

    async fn skills(&self) -> Result<Vec<LookupCode>, AppError> {
        self.get_json("/lookups/skills").await
    }
}

// --- CATEGORIAS DE CÓDIGO ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LookupCategory {
    SanitationMethod,
    PoolType,
    PoolSize,
    PoolMaterial,
    HotTubType,
    PoolSeason,
    JobCategory,
    Language,
    Skill,
}

impl LookupCategory {
    // Cada categoria tem seu próprio código de erro de pertencimento.
    pub fn error_code(&self) -> ValidationCode {
        match self {
            Self::SanitationMethod => ValidationCode::InvalidSanitationMethodCode,
            Self::PoolType => ValidationCode::InvalidPoolTypeCode,
            Self::PoolSize => ValidationCode::InvalidPoolSizeCode,
            Self::PoolMaterial => ValidationCode::InvalidPoolMaterialCode,
            Self::HotTubType => ValidationCode::InvalidHotTubTypeCode,
            Self::PoolSeason => ValidationCode::InvalidPoolSeasonCode,
            Self::JobCategory => ValidationCode::InvalidJobCategoryCode,
            Self::Language => ValidationCode::InvalidLanguageCode,
            Self::Skill => ValidationCode::InvalidSkillCode,
        }
    }
}

// --- RESULTADO DE UMA CHECAGEM ---

// Inconclusive ≠ Valid: o chamador (e os testes) precisam distinguir
// "passou" de "pulado porque o catálogo caiu".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    Valid,
    Invalid(String),
    Inconclusive,
}

// --- SNAPSHOT ---

// Snapshot imutável dos códigos válidos, montado UMA vez por chamada de
// validação e passado como argumento explícito às regras. `None` numa
// categoria marca a busca que falhou (checagem inconclusiva).
#[derive(Debug, Default)]
pub struct LookupSnapshot {
    categories: HashMap<LookupCategory, Option<HashSet<String>>>,
}

impl LookupSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_codes<I>(&mut self, category: LookupCategory, codes: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.categories
            .insert(category, Some(codes.into_iter().collect()));
    }

    pub fn insert_failed(&mut self, category: LookupCategory) {
        self.categories.insert(category, None);
    }

    // Checa UM código. Ausência (string vazia) é sempre válida.
    pub fn check(&self, category: LookupCategory, code: &str) -> CheckOutcome {
        if code.trim().is_empty() {
            return CheckOutcome::Valid;
        }

        match self.categories.get(&category) {
            // Categoria nunca buscada ou busca falhou: não dá pra afirmar nada
            None | Some(None) => CheckOutcome::Inconclusive,
            Some(Some(codes)) => {
                if codes.contains(code) {
                    CheckOutcome::Valid
                } else {
                    CheckOutcome::Invalid(code.to_string())
                }
            }
        }
    }

    // Checa uma lista: TODOS os códigos precisam pertencer, senão o campo
    // inteiro falha (sem relatório parcial de qual código passou).
    pub fn check_all<'a, I>(&self, category: LookupCategory, codes: I) -> CheckOutcome
    where
        I: IntoIterator<Item = &'a str>,
    {
        for code in codes {
            match self.check(category, code) {
                CheckOutcome::Valid => continue,
                other => return other,
            }
        }
        CheckOutcome::Valid
    }
}

// --- MONTAGEM POR PAPEL ---

fn codes(list: Vec<LookupCode>) -> Vec<String> {
    list.into_iter().map(|l| l.code).collect()
}

// Cliente: só os atributos de piscina interessam (uma chamada cobre as seis
// categorias). Falhou? Loga e marca as seis como inconclusivas.
pub async fn snapshot_for_customer(catalog: &dyn CatalogApi) -> LookupSnapshot {
    let mut snapshot = LookupSnapshot::new();

    match catalog.pool_detail_lookups().await {
        Ok(lookups) => {
            snapshot.insert_codes(LookupCategory::SanitationMethod, codes(lookups.sanitation_methods));
            snapshot.insert_codes(LookupCategory::PoolType, codes(lookups.pool_types));
            snapshot.insert_codes(LookupCategory::PoolSize, codes(lookups.pool_sizes));
            snapshot.insert_codes(LookupCategory::PoolMaterial, codes(lookups.pool_materials));
            snapshot.insert_codes(LookupCategory::HotTubType, codes(lookups.hot_tub_types));
            snapshot.insert_codes(LookupCategory::PoolSeason, codes(lookups.pool_seasons));
        }
        Err(e) => {
            tracing::warn!("⚠️ Catálogo indisponível (pool details), checagens puladas: {e}");
            snapshot.insert_failed(LookupCategory::SanitationMethod);
            snapshot.insert_failed(LookupCategory::PoolType);
            snapshot.insert_failed(LookupCategory::PoolSize);
            snapshot.insert_failed(LookupCategory::PoolMaterial);
            snapshot.insert_failed(LookupCategory::HotTubType);
            snapshot.insert_failed(LookupCategory::PoolSeason);
        }
    }

    snapshot
}

pub async fn snapshot_for_dealer(catalog: &dyn CatalogApi) -> LookupSnapshot {
    let mut snapshot = LookupSnapshot::new();

    match catalog.job_categories().await {
        Ok(list) => snapshot.insert_codes(LookupCategory::JobCategory, codes(list)),
        Err(e) => {
            tracing::warn!("⚠️ Catálogo indisponível (job categories), checagem pulada: {e}");
            snapshot.insert_failed(LookupCategory::JobCategory);
        }
    }

    snapshot
}

// As buscas são sequenciais de propósito: são duas viagens baratas e as
// regras só rodam depois do snapshot completo.
pub async fn snapshot_for_expert(catalog: &dyn CatalogApi) -> LookupSnapshot {
    let mut snapshot = LookupSnapshot::new();

    match catalog.languages().await {
        Ok(list) => snapshot.insert_codes(LookupCategory::Language, codes(list)),
        Err(e) => {
            tracing::warn!("⚠️ Catálogo indisponível (languages), checagem pulada: {e}");
            snapshot.insert_failed(LookupCategory::Language);
        }
    }

    match catalog.skills().await {
        Ok(list) => snapshot.insert_codes(LookupCategory::Skill, codes(list)),
        Err(e) => {
            tracing::warn!("⚠️ Catálogo indisponível (skills), checagem pulada: {e}");
            snapshot.insert_failed(LookupCategory::Skill);
        }
    }

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_skills(codes: &[&str]) -> LookupSnapshot {
        let mut snapshot = LookupSnapshot::new();
        snapshot.insert_codes(LookupCategory::Skill, codes.iter().map(|c| c.to_string()));
        snapshot
    }

    #[test]
    fn test_member_code_is_valid() {
        let snapshot = snapshot_with_skills(&["motor", "pump_repair"]);
        assert_eq!(
            snapshot.check(LookupCategory::Skill, "motor"),
            CheckOutcome::Valid
        );
    }

    #[test]
    fn test_unknown_code_is_invalid_with_the_code() {
        let snapshot = snapshot_with_skills(&["motor"]);
        assert_eq!(
            snapshot.check(LookupCategory::Skill, "water chemistry"),
            CheckOutcome::Invalid("water chemistry".to_string())
        );
    }

    #[test]
    fn test_empty_code_is_always_valid() {
        // Ausência é válida mesmo com a categoria carregada...
        let snapshot = snapshot_with_skills(&["motor"]);
        assert_eq!(snapshot.check(LookupCategory::Skill, ""), CheckOutcome::Valid);

        // ...e mesmo com a categoria inconclusiva.
        let mut failed = LookupSnapshot::new();
        failed.insert_failed(LookupCategory::Skill);
        assert_eq!(failed.check(LookupCategory::Skill, ""), CheckOutcome::Valid);
    }

    #[test]
    fn test_failed_fetch_is_inconclusive_not_valid() {
        let mut snapshot = LookupSnapshot::new();
        snapshot.insert_failed(LookupCategory::Skill);
        assert_eq!(
            snapshot.check(LookupCategory::Skill, "qualquer"),
            CheckOutcome::Inconclusive
        );
    }

    #[test]
    fn test_unfetched_category_is_inconclusive() {
        let snapshot = LookupSnapshot::new();
        assert_eq!(
            snapshot.check(LookupCategory::Language, "en"),
            CheckOutcome::Inconclusive
        );
    }

    #[test]
    fn test_check_all_passes_only_when_every_code_is_member() {
        let snapshot = snapshot_with_skills(&["pump_repair", "free_assessment"]);

        assert_eq!(
            snapshot.check_all(LookupCategory::Skill, ["pump_repair", "free_assessment"]),
            CheckOutcome::Valid
        );

        // Um válido + um inválido: o campo inteiro falha
        assert_eq!(
            snapshot.check_all(LookupCategory::Skill, ["pump_repair", "heater_install"]),
            CheckOutcome::Invalid("heater_install".to_string())
        );
    }

    // Fixture que simula o catálogo fora do ar
    struct DownCatalog;

    #[async_trait]
    impl CatalogApi for DownCatalog {
        async fn pool_detail_lookups(&self) -> Result<PoolDetailLookups, AppError> {
            Err(AppError::CatalogUnavailable("connection refused".into()))
        }
        async fn job_categories(&self) -> Result<Vec<LookupCode>, AppError> {
            Err(AppError::CatalogUnavailable("connection refused".into()))
        }
        async fn languages(&self) -> Result<Vec<LookupCode>, AppError> {
            Err(AppError::CatalogUnavailable("connection refused".into()))
        }
        async fn skills(&self) -> Result<Vec<LookupCode>, AppError> {
            Err(AppError::CatalogUnavailable("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn test_snapshot_builders_fail_open() {
        let snapshot = snapshot_for_customer(&DownCatalog).await;
        assert_eq!(
            snapshot.check(LookupCategory::PoolMaterial, "fiberglass"),
            CheckOutcome::Inconclusive
        );

        let snapshot = snapshot_for_expert(&DownCatalog).await;
        assert_eq!(
            snapshot.check(LookupCategory::Skill, "motor"),
            CheckOutcome::Inconclusive
        );
    }

    #[test]
    fn test_empty_base_url_fails_at_construction() {
        assert!(HttpCatalogClient::new("").is_err());
        assert!(HttpCatalogClient::new("   ").is_err());
        assert!(HttpCatalogClient::new("http://catalog.internal").is_ok());
    }
}
