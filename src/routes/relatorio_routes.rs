use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::relatorio_dto::*;
use crate::services::relatorio_service::RelatorioService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_relatorio_router() -> Router<AppState> {
    Router::new()
        .route("/overview", get(overview))
        .route("/frota-completo", get(frota_completo))
        .route("/motoristas-completo", get(motoristas_completo))
        .route("/eficiencia-combustivel", get(eficiencia_combustivel))
        .route("/manutencao-critica", get(manutencao_critica))
        .route("/rotas-analise", get(rotas_analise))
        .route("/custo-beneficio", get(custo_beneficio))
        .route("/comparativo-mensal", get(comparativo_mensal))
        .route("/timeline", get(timeline))
}

async fn overview(
    State(state): State<AppState>,
    Query(query): Query<PeriodoQuery>,
) -> Result<Json<RelatorioOverview>, AppError> {
    let service = RelatorioService::new(state.pool.clone());
    Ok(Json(service.overview(query.meses).await?))
}

async fn frota_completo(
    State(state): State<AppState>,
    Query(query): Query<PeriodoQuery>,
) -> Result<Json<RelatorioFrota>, AppError> {
    let service = RelatorioService::new(state.pool.clone());
    Ok(Json(service.frota_completo(query.meses).await?))
}

async fn motoristas_completo(
    State(state): State<AppState>,
    Query(query): Query<PeriodoQuery>,
) -> Result<Json<RelatorioMotoristas>, AppError> {
    let service = RelatorioService::new(state.pool.clone());
    Ok(Json(service.motoristas_completo(query.meses).await?))
}

async fn eficiencia_combustivel(
    State(state): State<AppState>,
    Query(query): Query<PeriodoQuery>,
) -> Result<Json<RelatorioEficiencia>, AppError> {
    let service = RelatorioService::new(state.pool.clone());
    Ok(Json(service.eficiencia_combustivel(query.meses).await?))
}

async fn manutencao_critica(
    State(state): State<AppState>,
    Query(query): Query<PeriodoQuery>,
) -> Result<Json<RelatorioManutencao>, AppError> {
    let service = RelatorioService::new(state.pool.clone());
    Ok(Json(service.manutencao_critica(query.meses).await?))
}

async fn rotas_analise(
    State(state): State<AppState>,
    Query(query): Query<PeriodoLimiteQuery>,
) -> Result<Json<RelatorioRotas>, AppError> {
    let service = RelatorioService::new(state.pool.clone());
    Ok(Json(service.rotas_analise(query.meses, query.limit).await?))
}

async fn custo_beneficio(
    State(state): State<AppState>,
    Query(query): Query<PeriodoQuery>,
) -> Result<Json<RelatorioCustoBeneficio>, AppError> {
    let service = RelatorioService::new(state.pool.clone());
    Ok(Json(service.custo_beneficio(query.meses).await?))
}

async fn comparativo_mensal(
    State(state): State<AppState>,
    Query(query): Query<PeriodoQuery>,
) -> Result<Json<RelatorioComparativo>, AppError> {
    let service = RelatorioService::new(state.pool.clone());
    Ok(Json(service.comparativo_mensal(query.meses).await?))
}

async fn timeline(
    State(state): State<AppState>,
    Query(query): Query<PeriodoLimiteQuery>,
) -> Result<Json<RelatorioTimeline>, AppError> {
    let service = RelatorioService::new(state.pool.clone());
    Ok(Json(service.timeline(query.meses, query.limit).await?))
}
