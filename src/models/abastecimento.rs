//! Modelo de Abastecimento

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Tipo de combustível - mapeia o ENUM tipo_combustivel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "tipo_combustivel", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TipoCombustivel {
    Gasolina,
    Etanol,
    Diesel,
    Gnv,
    Flex,
}

/// Um evento de abastecimento vinculado a um veículo
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Abastecimento {
    pub id_abastecimento: i32,
    pub id_veiculo: i32,
    pub data_abast: NaiveDate,
    pub tipo_combustivel: TipoCombustivel,
    pub litros: Decimal,
    pub valor_total: Decimal,
    pub km_abastecimento: Option<i64>,
}
