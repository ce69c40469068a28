//! Modelo de Motorista
//!
//! Mapeia a tabela `motorista`, cuja chave primária é o CPF.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Estado do motorista - mapeia o ENUM status_motorista
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "status_motorista", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StatusMotorista {
    Ativo,
    EmViagem,
    Inativo,
}

impl StatusMotorista {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusMotorista::Ativo => "ativo",
            StatusMotorista::EmViagem => "em_viagem",
            StatusMotorista::Inativo => "inativo",
        }
    }

    pub fn disponivel_para_viagem(&self) -> bool {
        matches!(self, StatusMotorista::Ativo)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Motorista {
    pub cpf: String,
    pub nome: String,
    pub cnh: String,
    pub cat_cnh: Option<String>,
    pub validade_cnh: Option<NaiveDate>,
    pub status: StatusMotorista,
    pub criado_em: DateTime<Utc>,
}
