use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validar_uf;

/// Request para cadastrar uma nova cidade
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCidadeRequest {
    #[validate(length(min = 2, max = 150))]
    pub nome: String,

    #[validate(custom = "validar_uf")]
    pub uf: String,
}

/// Request para atualizar uma cidade existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCidadeRequest {
    #[validate(length(min = 2, max = 150))]
    pub nome: Option<String>,

    #[validate(custom = "validar_uf")]
    pub uf: Option<String>,
}

/// Filtros de listagem de cidades
#[derive(Debug, Deserialize)]
pub struct CidadeFiltros {
    pub uf: Option<String>,
    pub limit: Option<i64>,
}
