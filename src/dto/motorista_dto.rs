use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::models::motorista::StatusMotorista;
use crate::utils::validation::validar_cpf;

/// Request para cadastrar um novo motorista
#[derive(Debug, Deserialize, Validate)]
pub struct CreateMotoristaRequest {
    #[validate(custom = "validar_cpf")]
    pub cpf: String,

    #[validate(length(min = 2, max = 150))]
    pub nome: String,

    #[validate(length(min = 5, max = 20))]
    pub cnh: String,

    #[validate(length(min = 1, max = 5))]
    pub cat_cnh: Option<String>,

    pub validade_cnh: Option<NaiveDate>,
}

/// Request para atualizar um motorista existente
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMotoristaRequest {
    #[validate(length(min = 2, max = 150))]
    pub nome: Option<String>,

    #[validate(length(min = 5, max = 20))]
    pub cnh: Option<String>,

    #[validate(length(min = 1, max = 5))]
    pub cat_cnh: Option<String>,

    pub validade_cnh: Option<NaiveDate>,

    pub status: Option<StatusMotorista>,
}

/// Filtros de listagem de motoristas
#[derive(Debug, Deserialize)]
pub struct MotoristaFiltros {
    pub status: Option<StatusMotorista>,
    pub limit: Option<i64>,
}
