use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use crate::dto::common_dto::ApiResponse;
use crate::dto::relatorio_dto::{EstatisticasViagens, PeriodoLimiteQuery, PeriodoQuery};
use crate::dto::viagem_dto::{
    AtualizarViagemRequest, CancelarViagemRequest, CriarViagemRequest, ResultadoFinalizacao,
    RotaPopular, ViagemDetalhada, ViagemFiltros,
};
use crate::models::viagem::Viagem;
use crate::services::viagem_service::ViagemService;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_viagem_router() -> Router<AppState> {
    Router::new()
        .route("/", get(listar_viagens))
        .route("/em-andamento", get(viagens_em_andamento))
        .route("/rotas/populares", get(rotas_populares))
        .route("/estatisticas/geral", get(estatisticas_viagens))
        .route("/simular/:id_veiculo", post(simular_viagem))
        .route("/criar", post(criar_viagem))
        .route("/finalizar/:id_viagem", post(finalizar_viagem))
        .route("/cancelar/:id_viagem", post(cancelar_viagem))
        .route("/:id", get(buscar_viagem).put(atualizar_viagem))
}

async fn listar_viagens(
    State(state): State<AppState>,
    Query(filtros): Query<ViagemFiltros>,
) -> Result<Json<Vec<ViagemDetalhada>>, AppError> {
    let service = ViagemService::new(state.pool.clone());
    let viagens = service.listar(&filtros).await?;
    Ok(Json(viagens))
}

async fn viagens_em_andamento(
    State(state): State<AppState>,
) -> Result<Json<Vec<ViagemDetalhada>>, AppError> {
    let service = ViagemService::new(state.pool.clone());
    let viagens = service.em_andamento().await?;
    Ok(Json(viagens))
}

async fn buscar_viagem(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ViagemDetalhada>, AppError> {
    let service = ViagemService::new(state.pool.clone());
    let viagem = service.detalhada(id).await?;
    Ok(Json(viagem))
}

/// Simula uma viagem aleatória para o veículo
async fn simular_viagem(
    State(state): State<AppState>,
    Path(id_veiculo): Path<i32>,
) -> Result<(StatusCode, Json<ApiResponse<ViagemDetalhada>>), AppError> {
    let service = ViagemService::new(state.pool.clone());
    let viagem = service
        .iniciar(id_veiculo, CriarViagemRequest::default())
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            viagem,
            "Viagem iniciada com sucesso".to_string(),
        )),
    ))
}

/// Cria uma viagem com parâmetros específicos
async fn criar_viagem(
    State(state): State<AppState>,
    Json(request): Json<CriarViagemRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ViagemDetalhada>>), AppError> {
    let service = ViagemService::new(state.pool.clone());
    let viagem = service.iniciar(request.id_veiculo, request).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            viagem,
            "Viagem criada com sucesso".to_string(),
        )),
    ))
}

async fn finalizar_viagem(
    State(state): State<AppState>,
    Path(id_viagem): Path<i32>,
) -> Result<Json<ApiResponse<ResultadoFinalizacao>>, AppError> {
    let service = ViagemService::new(state.pool.clone());
    let resultado = service.finalizar(id_viagem).await?;
    Ok(Json(ApiResponse::success_with_message(
        resultado,
        "Viagem finalizada com sucesso".to_string(),
    )))
}

async fn cancelar_viagem(
    State(state): State<AppState>,
    Path(id_viagem): Path<i32>,
    body: Option<Json<CancelarViagemRequest>>,
) -> Result<Json<ApiResponse<ViagemDetalhada>>, AppError> {
    let motivo = body.and_then(|Json(request)| request.motivo);
    let service = ViagemService::new(state.pool.clone());
    let viagem = service.cancelar(id_viagem, motivo).await?;
    Ok(Json(ApiResponse::success_with_message(
        viagem,
        "Viagem cancelada com sucesso".to_string(),
    )))
}

async fn atualizar_viagem(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<AtualizarViagemRequest>,
) -> Result<Json<Viagem>, AppError> {
    let service = ViagemService::new(state.pool.clone());
    let viagem = service.atualizar_observacoes(id, request).await?;
    Ok(Json(viagem))
}

async fn rotas_populares(
    State(state): State<AppState>,
    Query(query): Query<PeriodoLimiteQuery>,
) -> Result<Json<Vec<RotaPopular>>, AppError> {
    let service = ViagemService::new(state.pool.clone());
    let rotas = service.rotas_populares(query.limit).await?;
    Ok(Json(rotas))
}

async fn estatisticas_viagens(
    State(state): State<AppState>,
    Query(query): Query<PeriodoQuery>,
) -> Result<Json<EstatisticasViagens>, AppError> {
    let service = ViagemService::new(state.pool.clone());
    let estatisticas = service.estatisticas(query.meses).await?;
    Ok(Json(estatisticas))
}
