use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::models::veiculo::StatusVeiculo;
use crate::utils::validation::validar_placa;

/// Request para cadastrar um novo veículo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateVeiculoRequest {
    #[validate(custom = "validar_placa")]
    pub placa: String,

    #[validate(length(min = 2, max = 100))]
    pub marca: String,

    #[validate(length(min = 1, max = 100))]
    pub modelo: String,

    #[validate(range(min = 1950, max = 2030))]
    pub ano: i32,

    #[validate(length(min = 2, max = 50))]
    pub tipo: String,

    #[validate(range(min = 0))]
    pub km_atual: Option<i64>,

    pub capacidade_tanque: Option<Decimal>,
}

/// Request para atualizar um veículo existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateVeiculoRequest {
    #[validate(custom = "validar_placa")]
    pub placa: Option<String>,

    #[validate(length(min = 2, max = 100))]
    pub marca: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub modelo: Option<String>,

    #[validate(range(min = 1950, max = 2030))]
    pub ano: Option<i32>,

    #[validate(length(min = 2, max = 50))]
    pub tipo: Option<String>,

    #[validate(range(min = 0))]
    pub km_atual: Option<i64>,

    pub capacidade_tanque: Option<Decimal>,

    pub status: Option<StatusVeiculo>,
}

/// Filtros de listagem de veículos
#[derive(Debug, Deserialize)]
pub struct VeiculoFiltros {
    pub status: Option<StatusVeiculo>,
    pub tipo: Option<String>,
    pub limit: Option<i64>,
}
