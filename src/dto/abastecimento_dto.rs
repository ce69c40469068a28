use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::models::abastecimento::TipoCombustivel;

/// Request para registrar um abastecimento
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAbastecimentoRequest {
    pub id_veiculo: i32,

    pub data_abast: NaiveDate,

    pub tipo_combustivel: TipoCombustivel,

    pub litros: Decimal,

    pub valor_total: Decimal,

    /// Odômetro no momento do abastecimento; quando informado, precisa
    /// ser maior ou igual ao km_atual do veículo
    pub km_abastecimento: Option<i64>,
}

/// Filtros de listagem de abastecimentos
#[derive(Debug, Deserialize)]
pub struct AbastecimentoFiltros {
    pub id_veiculo: Option<i32>,
    pub limit: Option<i64>,
}
