use rust_decimal::Decimal;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::manutencao_dto::{CreateManutencaoRequest, ManutencaoFiltros, UpdateManutencaoRequest};
use crate::models::manutencao::Manutencao;
use crate::repositories::manutencao_repository::ManutencaoRepository;
use crate::repositories::veiculo_repository::VeiculoRepository;
use crate::utils::errors::AppError;

pub struct ManutencaoController {
    repository: ManutencaoRepository,
    veiculos: VeiculoRepository,
}

impl ManutencaoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: ManutencaoRepository::new(pool.clone()),
            veiculos: VeiculoRepository::new(pool),
        }
    }

    pub async fn criar(&self, request: CreateManutencaoRequest) -> Result<ApiResponse<Manutencao>, AppError> {
        request.validate()?;

        if matches!(request.valor, Some(valor) if valor < Decimal::ZERO) {
            return Err(AppError::BadRequest("valor não pode ser negativo".to_string()));
        }

        self.veiculos
            .buscar_por_id(request.id_veiculo)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        let manutencao = self.repository.criar(&request).await?;

        Ok(ApiResponse::success_with_message(
            manutencao,
            "Manutenção registrada com sucesso".to_string(),
        ))
    }

    pub async fn buscar(&self, id: i32) -> Result<Manutencao, AppError> {
        self.repository
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Manutenção não encontrada".to_string()))
    }

    pub async fn listar(&self, filtros: ManutencaoFiltros) -> Result<Vec<Manutencao>, AppError> {
        self.repository.listar(&filtros).await
    }

    pub async fn atualizar(&self, id: i32, request: UpdateManutencaoRequest) -> Result<ApiResponse<Manutencao>, AppError> {
        request.validate()?;

        if matches!(request.valor, Some(valor) if valor < Decimal::ZERO) {
            return Err(AppError::BadRequest("valor não pode ser negativo".to_string()));
        }

        let manutencao = self.repository.atualizar(id, &request).await?;

        Ok(ApiResponse::success_with_message(
            manutencao,
            "Manutenção atualizada com sucesso".to_string(),
        ))
    }

    pub async fn excluir(&self, id: i32) -> Result<(), AppError> {
        self.repository.excluir(id).await
    }
}
