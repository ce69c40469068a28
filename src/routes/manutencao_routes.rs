use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::manutencao_controller::ManutencaoController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::manutencao_dto::{CreateManutencaoRequest, ManutencaoFiltros, UpdateManutencaoRequest};
use crate::models::manutencao::Manutencao;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_manutencao_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_manutencoes).post(criar_manutencao))
        .route(
            "/:id",
            get(buscar_manutencao).put(atualizar_manutencao).delete(excluir_manutencao),
        )
}

async fn criar_manutencao(
    State(state): State<AppState>,
    Json(request): Json<CreateManutencaoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Manutencao>>), AppError> {
    let controller = ManutencaoController::new(state.pool.clone());
    let response = controller.criar(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn listar_manutencoes(
    State(state): State<AppState>,
    Query(filtros): Query<ManutencaoFiltros>,
) -> Result<Json<Vec<Manutencao>>, AppError> {
    let controller = ManutencaoController::new(state.pool.clone());
    let manutencoes = controller.listar(filtros).await?;
    Ok(Json(manutencoes))
}

async fn buscar_manutencao(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Manutencao>, AppError> {
    let controller = ManutencaoController::new(state.pool.clone());
    let manutencao = controller.buscar(id).await?;
    Ok(Json(manutencao))
}

async fn atualizar_manutencao(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateManutencaoRequest>,
) -> Result<Json<ApiResponse<Manutencao>>, AppError> {
    let controller = ManutencaoController::new(state.pool.clone());
    let response = controller.atualizar(id, request).await?;
    Ok(Json(response))
}

async fn excluir_manutencao(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ManutencaoController::new(state.pool.clone());
    controller.excluir(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Manutenção excluída com sucesso"
    })))
}
