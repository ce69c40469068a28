use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::cidade_controller::CidadeController;
use crate::dto::cidade_dto::{CidadeFiltros, CreateCidadeRequest, UpdateCidadeRequest};
use crate::dto::common_dto::ApiResponse;
use crate::models::cidade::Cidade;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cidade_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_cidades).post(criar_cidade))
        .route(
            "/:id",
            get(buscar_cidade).put(atualizar_cidade).delete(excluir_cidade),
        )
}

async fn criar_cidade(
    State(state): State<AppState>,
    Json(request): Json<CreateCidadeRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Cidade>>), AppError> {
    let controller = CidadeController::new(state.pool.clone());
    let response = controller.criar(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn listar_cidades(
    State(state): State<AppState>,
    Query(filtros): Query<CidadeFiltros>,
) -> Result<Json<Vec<Cidade>>, AppError> {
    let controller = CidadeController::new(state.pool.clone());
    let cidades = controller.listar(filtros).await?;
    Ok(Json(cidades))
}

async fn buscar_cidade(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Cidade>, AppError> {
    let controller = CidadeController::new(state.pool.clone());
    let cidade = controller.buscar(id).await?;
    Ok(Json(cidade))
}

async fn atualizar_cidade(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateCidadeRequest>,
) -> Result<Json<ApiResponse<Cidade>>, AppError> {
    let controller = CidadeController::new(state.pool.clone());
    let response = controller.atualizar(id, request).await?;
    Ok(Json(response))
}

async fn excluir_cidade(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CidadeController::new(state.pool.clone());
    controller.excluir(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Cidade excluída com sucesso"
    })))
}
