use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::dto::motorista_dto::{CreateMotoristaRequest, MotoristaFiltros, UpdateMotoristaRequest};
use crate::models::motorista::Motorista;
use crate::utils::errors::AppError;

pub struct MotoristaRepository {
    pool: PgPool,
}

impl MotoristaRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn criar(&self, request: &CreateMotoristaRequest) -> Result<Motorista, AppError> {
        let motorista = sqlx::query_as::<_, Motorista>(
            r#"
            INSERT INTO motorista (cpf, nome, cnh, cat_cnh, validade_cnh)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(&request.cpf)
        .bind(&request.nome)
        .bind(&request.cnh)
        .bind(&request.cat_cnh)
        .bind(request.validade_cnh)
        .fetch_one(&self.pool)
        .await?;

        Ok(motorista)
    }

    pub async fn buscar_por_cpf(&self, cpf: &str) -> Result<Option<Motorista>, AppError> {
        let motorista = sqlx::query_as::<_, Motorista>("SELECT * FROM motorista WHERE cpf = $1")
            .bind(cpf)
            .fetch_optional(&self.pool)
            .await?;

        Ok(motorista)
    }

    pub async fn listar(&self, filtros: &MotoristaFiltros) -> Result<Vec<Motorista>, AppError> {
        let limit = filtros.limit.unwrap_or(100).clamp(1, 500);

        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM motorista WHERE 1=1");
        if let Some(status) = filtros.status {
            query.push(" AND status = ").push_bind(status);
        }
        query.push(" ORDER BY nome LIMIT ").push_bind(limit);

        let motoristas = query
            .build_query_as::<Motorista>()
            .fetch_all(&self.pool)
            .await?;

        Ok(motoristas)
    }

    pub async fn cpf_existe(&self, cpf: &str) -> Result<bool, AppError> {
        let resultado: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM motorista WHERE cpf = $1)")
                .bind(cpf)
                .fetch_one(&self.pool)
                .await?;

        Ok(resultado.0)
    }

    pub async fn atualizar(&self, cpf: &str, request: &UpdateMotoristaRequest) -> Result<Motorista, AppError> {
        let atual = self
            .buscar_por_cpf(cpf)
            .await?
            .ok_or_else(|| AppError::NotFound("Motorista não encontrado".to_string()))?;

        let motorista = sqlx::query_as::<_, Motorista>(
            r#"
            UPDATE motorista
            SET nome = $2, cnh = $3, cat_cnh = $4, validade_cnh = $5, status = $6
            WHERE cpf = $1
            RETURNING *
            "#,
        )
        .bind(cpf)
        .bind(request.nome.clone().unwrap_or(atual.nome))
        .bind(request.cnh.clone().unwrap_or(atual.cnh))
        .bind(request.cat_cnh.clone().or(atual.cat_cnh))
        .bind(request.validade_cnh.or(atual.validade_cnh))
        .bind(request.status.unwrap_or(atual.status))
        .fetch_one(&self.pool)
        .await?;

        Ok(motorista)
    }

    pub async fn excluir(&self, cpf: &str) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM motorista WHERE cpf = $1")
            .bind(cpf)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Motorista não encontrado".to_string()));
        }

        Ok(())
    }
}
