use sqlx::PgPool;
use validator::Validate;

use crate::dto::cidade_dto::{CidadeFiltros, CreateCidadeRequest, UpdateCidadeRequest};
use crate::dto::common_dto::ApiResponse;
use crate::models::cidade::Cidade;
use crate::repositories::cidade_repository::CidadeRepository;
use crate::utils::errors::AppError;

pub struct CidadeController {
    repository: CidadeRepository,
}

impl CidadeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CidadeRepository::new(pool),
        }
    }

    pub async fn criar(&self, request: CreateCidadeRequest) -> Result<ApiResponse<Cidade>, AppError> {
        request.validate()?;

        let cidade = self.repository.criar(&request).await?;

        Ok(ApiResponse::success_with_message(
            cidade,
            "Cidade cadastrada com sucesso".to_string(),
        ))
    }

    pub async fn buscar(&self, id: i32) -> Result<Cidade, AppError> {
        self.repository
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cidade não encontrada".to_string()))
    }

    pub async fn listar(&self, filtros: CidadeFiltros) -> Result<Vec<Cidade>, AppError> {
        self.repository.listar(&filtros).await
    }

    pub async fn atualizar(&self, id: i32, request: UpdateCidadeRequest) -> Result<ApiResponse<Cidade>, AppError> {
        request.validate()?;

        let cidade = self.repository.atualizar(id, &request).await?;

        Ok(ApiResponse::success_with_message(
            cidade,
            "Cidade atualizada com sucesso".to_string(),
        ))
    }

    /// A exclusão é rejeitada enquanto alguma viagem referenciar a cidade;
    /// a FK com RESTRICT garante o mesmo no banco.
    pub async fn excluir(&self, id: i32) -> Result<(), AppError> {
        if self.repository.referenciada_por_viagens(id).await? {
            return Err(AppError::Conflict(
                "Cidade possui viagens vinculadas e não pode ser excluída".to_string(),
            ));
        }

        self.repository.excluir(id).await
    }
}
