use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::dto::abastecimento_dto::{AbastecimentoFiltros, CreateAbastecimentoRequest};
use crate::models::abastecimento::Abastecimento;
use crate::utils::errors::AppError;

pub struct AbastecimentoRepository {
    pool: PgPool,
}

impl AbastecimentoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn criar(&self, request: &CreateAbastecimentoRequest) -> Result<Abastecimento, AppError> {
        let abastecimento = sqlx::query_as::<_, Abastecimento>(
            r#"
            INSERT INTO abastecimento
                (id_veiculo, data_abast, tipo_combustivel, litros, valor_total, km_abastecimento)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(request.id_veiculo)
        .bind(request.data_abast)
        .bind(request.tipo_combustivel)
        .bind(request.litros)
        .bind(request.valor_total)
        .bind(request.km_abastecimento)
        .fetch_one(&self.pool)
        .await?;

        Ok(abastecimento)
    }

    pub async fn buscar_por_id(&self, id: i32) -> Result<Option<Abastecimento>, AppError> {
        let abastecimento =
            sqlx::query_as::<_, Abastecimento>("SELECT * FROM abastecimento WHERE id_abastecimento = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(abastecimento)
    }

    pub async fn listar(&self, filtros: &AbastecimentoFiltros) -> Result<Vec<Abastecimento>, AppError> {
        let limit = filtros.limit.unwrap_or(50).clamp(1, 500);

        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM abastecimento WHERE 1=1");
        if let Some(id_veiculo) = filtros.id_veiculo {
            query.push(" AND id_veiculo = ").push_bind(id_veiculo);
        }
        query.push(" ORDER BY data_abast DESC, id_abastecimento DESC LIMIT ").push_bind(limit);

        let abastecimentos = query
            .build_query_as::<Abastecimento>()
            .fetch_all(&self.pool)
            .await?;

        Ok(abastecimentos)
    }

    pub async fn excluir(&self, id: i32) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM abastecimento WHERE id_abastecimento = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Abastecimento não encontrado".to_string()));
        }

        Ok(())
    }
}
