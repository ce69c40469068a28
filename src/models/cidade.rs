//! Modelo de Cidade

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Cidade de origem/destino das viagens. Não pode ser excluída
/// enquanto houver viagens que a referenciem.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Cidade {
    pub id_cidade: i32,
    pub nome: String,
    pub uf: String,
}
