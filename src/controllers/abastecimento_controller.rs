use rust_decimal::Decimal;
use sqlx::PgPool;
use validator::Validate;

use crate::dto::abastecimento_dto::{AbastecimentoFiltros, CreateAbastecimentoRequest};
use crate::dto::common_dto::ApiResponse;
use crate::models::abastecimento::Abastecimento;
use crate::repositories::abastecimento_repository::AbastecimentoRepository;
use crate::repositories::veiculo_repository::VeiculoRepository;
use crate::utils::errors::AppError;

pub struct AbastecimentoController {
    repository: AbastecimentoRepository,
    veiculos: VeiculoRepository,
}

impl AbastecimentoController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AbastecimentoRepository::new(pool.clone()),
            veiculos: VeiculoRepository::new(pool),
        }
    }

    pub async fn criar(&self, request: CreateAbastecimentoRequest) -> Result<ApiResponse<Abastecimento>, AppError> {
        request.validate()?;

        if request.litros <= Decimal::ZERO {
            return Err(AppError::BadRequest("litros deve ser maior que zero".to_string()));
        }
        if request.valor_total < Decimal::ZERO {
            return Err(AppError::BadRequest("valor_total não pode ser negativo".to_string()));
        }

        let veiculo = self
            .veiculos
            .buscar_por_id(request.id_veiculo)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        // O odômetro do abastecimento não pode estar atrás do odômetro atual
        if let Some(km) = request.km_abastecimento {
            if km < veiculo.km_atual {
                return Err(AppError::BadRequest(format!(
                    "km_abastecimento ({}) é menor que o odômetro atual do veículo ({})",
                    km, veiculo.km_atual
                )));
            }
        }

        let abastecimento = self.repository.criar(&request).await?;

        Ok(ApiResponse::success_with_message(
            abastecimento,
            "Abastecimento registrado com sucesso".to_string(),
        ))
    }

    pub async fn buscar(&self, id: i32) -> Result<Abastecimento, AppError> {
        self.repository
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Abastecimento não encontrado".to_string()))
    }

    pub async fn listar(&self, filtros: AbastecimentoFiltros) -> Result<Vec<Abastecimento>, AppError> {
        self.repository.listar(&filtros).await
    }

    pub async fn excluir(&self, id: i32) -> Result<(), AppError> {
        self.repository.excluir(id).await
    }
}
