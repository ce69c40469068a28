use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::dto::relatorio_dto::{EstatisticasGerais, PeriodoQuery};
use crate::services::relatorio_service::RelatorioService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_estatisticas_router() -> Router<AppState> {
    Router::new().route("/geral", get(estatisticas_gerais))
}

/// Estatísticas gerais cruzadas de combustível, manutenção e viagens
async fn estatisticas_gerais(
    State(state): State<AppState>,
    Query(query): Query<PeriodoQuery>,
) -> Result<Json<EstatisticasGerais>, AppError> {
    let service = RelatorioService::new(state.pool.clone());
    Ok(Json(service.estatisticas_gerais(query.meses).await?))
}
