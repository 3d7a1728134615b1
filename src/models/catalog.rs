// src/models/catalog.rs

use serde::Deserialize;

// Formas de resposta do serviço de catálogo. Cada item carrega um `code`
// curto (ex: "lap_pool") e possivelmente outros campos que ignoramos.

#[derive(Debug, Clone, Deserialize)]
pub struct LookupCode {
    pub code: String,
}

// Resposta de GET /lookups/pool-details: todas as categorias de piscina
// vêm em uma chamada só.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolDetailLookups {
    pub sanitation_methods: Vec<LookupCode>,
    pub pool_types: Vec<LookupCode>,
    pub pool_sizes: Vec<LookupCode>,
    pub pool_materials: Vec<LookupCode>,
    pub hot_tub_types: Vec<LookupCode>,
    pub pool_seasons: Vec<LookupCode>,
}
