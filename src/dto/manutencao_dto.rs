use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::models::manutencao::TipoManutencao;

/// Request para registrar uma manutenção
#[derive(Debug, Deserialize, Validate)]
pub struct CreateManutencaoRequest {
    pub id_veiculo: i32,

    pub data_man: NaiveDate,

    pub tipo: TipoManutencao,

    #[validate(length(min = 3, max = 500))]
    pub descricao: String,

    pub valor: Option<Decimal>,

    pub concluida: Option<bool>,

    pub km_manutencao: Option<i64>,

    #[validate(length(min = 2, max = 150))]
    pub fornecedor: Option<String>,
}

/// Request para atualizar uma manutenção (inclusive marcar como concluída)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateManutencaoRequest {
    pub data_man: Option<NaiveDate>,

    pub tipo: Option<TipoManutencao>,

    #[validate(length(min = 3, max = 500))]
    pub descricao: Option<String>,

    pub valor: Option<Decimal>,

    pub concluida: Option<bool>,

    pub km_manutencao: Option<i64>,

    #[validate(length(min = 2, max = 150))]
    pub fornecedor: Option<String>,
}

/// Filtros de listagem de manutenções
#[derive(Debug, Deserialize)]
pub struct ManutencaoFiltros {
    pub id_veiculo: Option<i32>,
    pub concluida: Option<bool>,
    pub limit: Option<i64>,
}
