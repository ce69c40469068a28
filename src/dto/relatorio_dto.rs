//! Shapes de resposta dos relatórios
//!
//! Cada endpoint de relatório devolve um JSON próprio; os structs aqui
//! espelham exatamente esses shapes. Contagens e quilômetros são inteiros,
//! valores monetários e razões derivadas são f64 já calculados no serviço.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::motorista::StatusMotorista;
use crate::models::veiculo::StatusVeiculo;

/// Query comum dos relatórios: janela em meses
#[derive(Debug, Default, Deserialize)]
pub struct PeriodoQuery {
    pub meses: Option<i64>,
}

/// Query dos relatórios que também aceitam limite de linhas
#[derive(Debug, Default, Deserialize)]
pub struct PeriodoLimiteQuery {
    pub meses: Option<i64>,
    pub limit: Option<i64>,
}

// ---------------------------------------------------------------------------
// /relatorios/overview

#[derive(Debug, Serialize)]
pub struct ResumoFrota {
    pub total_veiculos: i64,
    pub veiculos_ativos: i64,
    pub veiculos_em_viagem: i64,
    pub veiculos_manutencao: i64,
}

#[derive(Debug, Serialize)]
pub struct ResumoMotoristas {
    pub total_motoristas: i64,
    pub motoristas_ativos: i64,
    pub motoristas_em_viagem: i64,
}

#[derive(Debug, Serialize)]
pub struct ResumoViagens {
    pub total_viagens: i64,
    pub viagens_em_andamento: i64,
    pub viagens_finalizadas: i64,
    pub viagens_canceladas: i64,
    pub km_total_percorrido: i64,
}

#[derive(Debug, Serialize)]
pub struct ResumoCidades {
    pub total_cidades: i64,
}

#[derive(Debug, Serialize)]
pub struct ResumoCustos {
    pub custo_total_combustivel: f64,
    pub custo_total_manutencao: f64,
    pub custo_operacional_total: f64,
}

#[derive(Debug, Serialize)]
pub struct RelatorioOverview {
    pub periodo_meses: u32,
    pub frota: ResumoFrota,
    pub motoristas: ResumoMotoristas,
    pub viagens: ResumoViagens,
    pub cidades: ResumoCidades,
    pub custos: ResumoCustos,
}

// ---------------------------------------------------------------------------
// /relatorios/frota-completo

#[derive(Debug, Serialize)]
pub struct VeiculoFrotaCompleto {
    pub id_veiculo: i32,
    pub placa: String,
    pub marca: String,
    pub modelo: String,
    pub ano: i32,
    pub tipo: String,
    pub km_atual: i64,
    pub status: StatusVeiculo,
    pub total_viagens: i64,
    pub total_abastecimentos: i64,
    pub total_litros: f64,
    pub km_rodados: i64,
    pub custo_combustivel: f64,
    pub custo_manutencao: f64,
    pub custo_total: f64,
    pub custo_por_km: f64,
    pub consumo_medio_km_l: f64,
    pub km_por_abastecimento: f64,
}

#[derive(Debug, Serialize)]
pub struct RelatorioFrota {
    pub periodo_meses: u32,
    pub veiculos: Vec<VeiculoFrotaCompleto>,
}

// ---------------------------------------------------------------------------
// /relatorios/motoristas-completo

#[derive(Debug, Serialize)]
pub struct MotoristaCompleto {
    pub cpf: String,
    pub nome: String,
    pub cnh: String,
    pub cat_cnh: Option<String>,
    pub validade_cnh: Option<NaiveDate>,
    pub status: StatusMotorista,
    pub total_viagens: i64,
    pub viagens_finalizadas: i64,
    pub viagens_canceladas: i64,
    pub km_rodados: i64,
    pub taxa_conclusao: f64,
    pub veiculos_diferentes: i64,
    pub rotas_diferentes: i64,
    pub cnh_vencida: bool,
    pub dias_para_vencer_cnh: i64,
}

#[derive(Debug, Serialize)]
pub struct RelatorioMotoristas {
    pub periodo_meses: u32,
    pub motoristas: Vec<MotoristaCompleto>,
}

// ---------------------------------------------------------------------------
// /relatorios/eficiencia-combustivel

#[derive(Debug, Serialize)]
pub struct EficienciaVeiculo {
    pub id_veiculo: i32,
    pub placa: String,
    pub modelo: String,
    pub total_abastecimentos: i64,
    pub total_litros: f64,
    pub custo_total: f64,
    pub km_rodados: i64,
    pub consumo_medio_km_l: f64,
    pub litros_por_100km: f64,
    pub classificacao: String,
    pub custo_por_km: f64,
}

#[derive(Debug, Serialize)]
pub struct RelatorioEficiencia {
    pub periodo_meses: u32,
    pub veiculos: Vec<EficienciaVeiculo>,
}

// ---------------------------------------------------------------------------
// /relatorios/manutencao-critica

#[derive(Debug, Serialize)]
pub struct ManutencaoVeiculo {
    pub id_veiculo: i32,
    pub placa: String,
    pub modelo: String,
    pub total_manutencoes: i64,
    pub manutencoes_preventivas: i64,
    pub manutencoes_corretivas: i64,
    pub manutencoes_concluidas: i64,
    pub custo_total: f64,
}

#[derive(Debug, Serialize)]
pub struct RelatorioManutencao {
    pub periodo_meses: u32,
    pub veiculos: Vec<ManutencaoVeiculo>,
}

// ---------------------------------------------------------------------------
// /relatorios/rotas-analise

#[derive(Debug, Serialize)]
pub struct RotaAnalise {
    pub rota: String,
    pub total_viagens: i64,
}

#[derive(Debug, Serialize)]
pub struct RelatorioRotas {
    pub periodo_meses: u32,
    pub rotas: Vec<RotaAnalise>,
}

// ---------------------------------------------------------------------------
// /relatorios/custo-beneficio

#[derive(Debug, Serialize)]
pub struct CustoBeneficioVeiculo {
    pub id_veiculo: i32,
    pub placa: String,
    pub modelo: String,
    pub custo_operacional: f64,
    pub km_rodados: i64,
    pub custo_por_km: f64,
    pub total_viagens: i64,
    pub taxa_utilizacao: f64,
    pub eficiencia_operacional: String,
}

#[derive(Debug, Serialize)]
pub struct RelatorioCustoBeneficio {
    pub periodo_meses: u32,
    pub veiculos: Vec<CustoBeneficioVeiculo>,
}

// ---------------------------------------------------------------------------
// /relatorios/comparativo-mensal

#[derive(Debug, Clone, Serialize)]
pub struct ComparativoMensal {
    pub mes: String,
    pub mes_nome: String,
    pub total_viagens: i64,
    pub km_rodados: i64,
    pub custo_combustivel: f64,
    pub custo_manutencao: f64,
    pub custo_total: f64,
    pub tendencia_viagens: String,
    pub tendencia_custos: String,
}

#[derive(Debug, Serialize)]
pub struct RelatorioComparativo {
    pub periodo_meses: u32,
    pub comparativo: Vec<ComparativoMensal>,
}

// ---------------------------------------------------------------------------
// /relatorios/timeline

#[derive(Debug, Clone, Serialize)]
pub struct EventoTimeline {
    pub tipo: String,
    pub data: DateTime<Utc>,
    pub descricao: String,
    pub veiculo_placa: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valor: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub km: Option<i64>,
}

#[derive(Debug, Serialize)]
pub struct RelatorioTimeline {
    pub periodo_meses: u32,
    pub total_eventos: usize,
    pub eventos: Vec<EventoTimeline>,
}

// ---------------------------------------------------------------------------
// /estatisticas/geral

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MesEstatistica {
    pub mes: String,
    pub mes_nome: String,
    pub combustivel: f64,
    pub manutencao: f64,
    pub km: i64,
    pub custo_total: f64,
}

#[derive(Debug, Serialize)]
pub struct ResumoOperacional {
    pub custo_total_combustivel: f64,
    pub custo_total_manutencao: f64,
    pub custo_total_operacional: f64,
    pub km_total: i64,
    pub custo_por_km: f64,
    pub total_viagens: i64,
    pub viagens_finalizadas: i64,
    pub total_abastecimentos: i64,
    pub total_manutencoes: i64,
}

#[derive(Debug, Serialize)]
pub struct EstatisticasGerais {
    pub periodo_meses: u32,
    pub resumo: ResumoOperacional,
    pub por_mes: Vec<MesEstatistica>,
}

// ---------------------------------------------------------------------------
// /viagens/estatisticas/geral

#[derive(Debug, Serialize)]
pub struct ResumoViagensPeriodo {
    pub total_viagens: i64,
    pub em_andamento: i64,
    pub finalizadas: i64,
    pub canceladas: i64,
    pub km_total: i64,
    pub km_media_por_viagem: Option<f64>,
}

#[derive(Debug, Serialize, FromRow)]
pub struct TopVeiculo {
    pub placa: String,
    pub modelo: String,
    pub total_viagens: i64,
    pub km_total: i64,
}

#[derive(Debug, Serialize, FromRow)]
pub struct TopMotorista {
    pub nome: String,
    pub total_viagens: i64,
    pub km_total: i64,
}

#[derive(Debug, Serialize)]
pub struct EstatisticasViagens {
    pub periodo_meses: u32,
    pub resumo: ResumoViagensPeriodo,
    pub top_veiculos: Vec<TopVeiculo>,
    pub top_motoristas: Vec<TopMotorista>,
}
