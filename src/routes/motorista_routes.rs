use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::motorista_controller::MotoristaController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::motorista_dto::{CreateMotoristaRequest, MotoristaFiltros, UpdateMotoristaRequest};
use crate::models::motorista::Motorista;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_motorista_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_motoristas).post(criar_motorista))
        .route(
            "/:cpf",
            get(buscar_motorista).put(atualizar_motorista).delete(excluir_motorista),
        )
}

async fn criar_motorista(
    State(state): State<AppState>,
    Json(request): Json<CreateMotoristaRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Motorista>>), AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let response = controller.criar(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn listar_motoristas(
    State(state): State<AppState>,
    Query(filtros): Query<MotoristaFiltros>,
) -> Result<Json<Vec<Motorista>>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let motoristas = controller.listar(filtros).await?;
    Ok(Json(motoristas))
}

async fn buscar_motorista(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<Json<Motorista>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let motorista = controller.buscar(&cpf).await?;
    Ok(Json(motorista))
}

async fn atualizar_motorista(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
    Json(request): Json<UpdateMotoristaRequest>,
) -> Result<Json<ApiResponse<Motorista>>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    let response = controller.atualizar(&cpf, request).await?;
    Ok(Json(response))
}

async fn excluir_motorista(
    State(state): State<AppState>,
    Path(cpf): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = MotoristaController::new(state.pool.clone());
    controller.excluir(&cpf).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Motorista excluído com sucesso"
    })))
}
