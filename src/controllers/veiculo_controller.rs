use sqlx::PgPool;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::veiculo_dto::{CreateVeiculoRequest, UpdateVeiculoRequest, VeiculoFiltros};
use crate::models::veiculo::Veiculo;
use crate::repositories::veiculo_repository::VeiculoRepository;
use crate::utils::errors::AppError;
use crate::utils::validation::normalizar_placa;

pub struct VeiculoController {
    repository: VeiculoRepository,
}

impl VeiculoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VeiculoRepository::new(pool),
        }
    }

    pub async fn criar(&self, request: CreateVeiculoRequest) -> Result<ApiResponse<Veiculo>, AppError> {
        request.validate()?;

        let placa = normalizar_placa(&request.placa);
        if self.repository.placa_existe(&placa).await? {
            return Err(AppError::Conflict(format!("Placa {} já cadastrada", placa)));
        }

        let veiculo = self.repository.criar(&placa, &request).await?;

        Ok(ApiResponse::success_with_message(
            veiculo,
            "Veículo cadastrado com sucesso".to_string(),
        ))
    }

    pub async fn buscar(&self, id: i32) -> Result<Veiculo, AppError> {
        self.repository
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))
    }

    pub async fn listar(&self, filtros: VeiculoFiltros) -> Result<Vec<Veiculo>, AppError> {
        self.repository.listar(&filtros).await
    }

    pub async fn atualizar(&self, id: i32, request: UpdateVeiculoRequest) -> Result<ApiResponse<Veiculo>, AppError> {
        request.validate()?;

        let veiculo = self.repository.atualizar(id, &request).await?;

        Ok(ApiResponse::success_with_message(
            veiculo,
            "Veículo atualizado com sucesso".to_string(),
        ))
    }

    pub async fn excluir(&self, id: i32) -> Result<(), AppError> {
        self.repository.excluir(id).await
    }
}
