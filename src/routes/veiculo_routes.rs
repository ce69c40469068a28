use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use axum::http::StatusCode;

use crate::controllers::veiculo_controller::VeiculoController;
use crate::dto::common_dto::ApiResponse;
use crate::dto::veiculo_dto::{CreateVeiculoRequest, UpdateVeiculoRequest, VeiculoFiltros};
use crate::models::veiculo::Veiculo;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_veiculo_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_veiculos).post(criar_veiculo))
        .route(
            "/:id",
            get(buscar_veiculo).put(atualizar_veiculo).delete(excluir_veiculo),
        )
}

async fn criar_veiculo(
    State(state): State<AppState>,
    Json(request): Json<CreateVeiculoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Veiculo>>), AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    let response = controller.criar(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn listar_veiculos(
    State(state): State<AppState>,
    Query(filtros): Query<VeiculoFiltros>,
) -> Result<Json<Vec<Veiculo>>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    let veiculos = controller.listar(filtros).await?;
    Ok(Json(veiculos))
}

async fn buscar_veiculo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Veiculo>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    let veiculo = controller.buscar(id).await?;
    Ok(Json(veiculo))
}

async fn atualizar_veiculo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateVeiculoRequest>,
) -> Result<Json<ApiResponse<Veiculo>>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    let response = controller.atualizar(id, request).await?;
    Ok(Json(response))
}

async fn excluir_veiculo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VeiculoController::new(state.pool.clone());
    controller.excluir(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Veículo excluído com sucesso"
    })))
}
