//! Modelo de Manutenção
//!
//! Os totais financeiros de manutenção consideram somente
//! registros com `concluida = true`.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Tipo de manutenção - mapeia o ENUM tipo_manutencao
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "tipo_manutencao", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TipoManutencao {
    Preventiva,
    Corretiva,
    Preditiva,
    Revisao,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Manutencao {
    pub id_manutencao: i32,
    pub id_veiculo: i32,
    pub data_man: NaiveDate,
    pub tipo: TipoManutencao,
    pub descricao: String,
    pub valor: Option<Decimal>,
    pub concluida: bool,
    pub km_manutencao: Option<i64>,
    pub fornecedor: Option<String>,
}
