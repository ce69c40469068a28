use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::viagem::StatusViagem;

/// Request para criar uma viagem com parâmetros explícitos.
/// Campos ausentes são sorteados pelo simulador.
#[derive(Debug, Default, Deserialize)]
pub struct CriarViagemRequest {
    pub id_veiculo: i32,
    pub cpf_motorista: Option<String>,
    pub cidade_origem: Option<i32>,
    pub cidade_destino: Option<i32>,
    pub observacoes: Option<String>,
}

/// Request para cancelar uma viagem em andamento
#[derive(Debug, Default, Deserialize)]
pub struct CancelarViagemRequest {
    pub motivo: Option<String>,
}

/// Request para atualizar as observações de uma viagem
#[derive(Debug, Deserialize)]
pub struct AtualizarViagemRequest {
    pub observacoes: Option<String>,
}

/// Filtros de listagem de viagens
#[derive(Debug, Default, Deserialize)]
pub struct ViagemFiltros {
    pub status: Option<StatusViagem>,
    pub id_veiculo: Option<i32>,
    pub cpf_motorista: Option<String>,
    pub limit: Option<i64>,
}

/// Projeção de viagem com os nomes de veículo, motorista e cidades
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ViagemDetalhada {
    pub id_viagem: i32,
    pub id_veiculo: i32,
    pub cpf_motorista: Option<String>,
    pub data_saida: DateTime<Utc>,
    pub data_chegada: Option<DateTime<Utc>>,
    pub km_inicial: i64,
    pub km_final: Option<i64>,
    pub status_viagem: StatusViagem,
    pub observacoes: Option<String>,
    pub motivo_cancelamento: Option<String>,
    pub placa: String,
    pub marca: String,
    pub modelo: String,
    pub motorista: Option<String>,
    pub origem: String,
    pub origem_uf: String,
    pub destino: String,
    pub destino_uf: String,
    pub km_rodados: Option<i64>,
}

/// Resultado da finalização de uma viagem
#[derive(Debug, Serialize)]
pub struct ResultadoFinalizacao {
    pub viagem: ViagemDetalhada,
    pub km_rodados: i64,
}

/// Linha do ranking de rotas mais utilizadas
#[derive(Debug, Serialize, FromRow)]
pub struct RotaPopular {
    pub origem: String,
    pub origem_uf: String,
    pub destino: String,
    pub destino_uf: String,
    pub total_viagens: i64,
}
