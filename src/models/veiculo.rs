//! Modelo de Veículo
//!
//! Mapeia a tabela `veiculo` e o ENUM `status_veiculo` do schema PostgreSQL.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Estado do veículo - mapeia o ENUM status_veiculo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "status_veiculo", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StatusVeiculo {
    Ativo,
    EmViagem,
    Manutencao,
    Inativo,
}

impl StatusVeiculo {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusVeiculo::Ativo => "ativo",
            StatusVeiculo::EmViagem => "em_viagem",
            StatusVeiculo::Manutencao => "manutencao",
            StatusVeiculo::Inativo => "inativo",
        }
    }
}

/// Veículo - mapeia exatamente a tabela veiculo
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Veiculo {
    pub id_veiculo: i32,
    pub placa: String,
    pub marca: String,
    pub modelo: String,
    pub ano: i32,
    pub tipo: String,
    pub km_atual: i64,
    pub capacidade_tanque: Option<Decimal>,
    pub status: StatusVeiculo,
    pub criado_em: DateTime<Utc>,
}
