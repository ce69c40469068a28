use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::abastecimento_controller::AbastecimentoController;
use crate::dto::abastecimento_dto::{AbastecimentoFiltros, CreateAbastecimentoRequest};
use crate::dto::common_dto::ApiResponse;
use crate::models::abastecimento::Abastecimento;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_abastecimento_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_abastecimentos).post(criar_abastecimento))
        .route("/:id", get(buscar_abastecimento).delete(excluir_abastecimento))
}

async fn criar_abastecimento(
    State(state): State<AppState>,
    Json(request): Json<CreateAbastecimentoRequest>,
) -> Result<(StatusCode, Json<ApiResponse<Abastecimento>>), AppError> {
    let controller = AbastecimentoController::new(state.pool.clone());
    let response = controller.criar(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn listar_abastecimentos(
    State(state): State<AppState>,
    Query(filtros): Query<AbastecimentoFiltros>,
) -> Result<Json<Vec<Abastecimento>>, AppError> {
    let controller = AbastecimentoController::new(state.pool.clone());
    let abastecimentos = controller.listar(filtros).await?;
    Ok(Json(abastecimentos))
}

async fn buscar_abastecimento(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Abastecimento>, AppError> {
    let controller = AbastecimentoController::new(state.pool.clone());
    let abastecimento = controller.buscar(id).await?;
    Ok(Json(abastecimento))
}

async fn excluir_abastecimento(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = AbastecimentoController::new(state.pool.clone());
    controller.excluir(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Abastecimento excluído com sucesso"
    })))
}
