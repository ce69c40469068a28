use sqlx::PgPool;
use validator::Validate;

use crate::dto::common_dto::ApiResponse;
use crate::dto::motorista_dto::{CreateMotoristaRequest, MotoristaFiltros, UpdateMotoristaRequest};
use crate::models::motorista::Motorista;
use crate::repositories::motorista_repository::MotoristaRepository;
use crate::utils::errors::AppError;

pub struct MotoristaController {
    repository: MotoristaRepository,
}

impl MotoristaController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MotoristaRepository::new(pool),
        }
    }

    pub async fn criar(&self, request: CreateMotoristaRequest) -> Result<ApiResponse<Motorista>, AppError> {
        request.validate()?;

        if self.repository.cpf_existe(&request.cpf).await? {
            return Err(AppError::Conflict(format!("CPF {} já cadastrado", request.cpf)));
        }

        let motorista = self.repository.criar(&request).await?;

        Ok(ApiResponse::success_with_message(
            motorista,
            "Motorista cadastrado com sucesso".to_string(),
        ))
    }

    pub async fn buscar(&self, cpf: &str) -> Result<Motorista, AppError> {
        self.repository
            .buscar_por_cpf(cpf)
            .await?
            .ok_or_else(|| AppError::NotFound("Motorista não encontrado".to_string()))
    }

    pub async fn listar(&self, filtros: MotoristaFiltros) -> Result<Vec<Motorista>, AppError> {
        self.repository.listar(&filtros).await
    }

    pub async fn atualizar(&self, cpf: &str, request: UpdateMotoristaRequest) -> Result<ApiResponse<Motorista>, AppError> {
        request.validate()?;

        let motorista = self.repository.atualizar(cpf, &request).await?;

        Ok(ApiResponse::success_with_message(
            motorista,
            "Motorista atualizado com sucesso".to_string(),
        ))
    }

    pub async fn excluir(&self, cpf: &str) -> Result<(), AppError> {
        self.repository.excluir(cpf).await
    }
}
