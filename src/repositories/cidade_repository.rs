use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::dto::cidade_dto::{CidadeFiltros, CreateCidadeRequest, UpdateCidadeRequest};
use crate::models::cidade::Cidade;
use crate::utils::errors::AppError;

pub struct CidadeRepository {
    pool: PgPool,
}

impl CidadeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn criar(&self, request: &CreateCidadeRequest) -> Result<Cidade, AppError> {
        let cidade = sqlx::query_as::<_, Cidade>(
            "INSERT INTO cidade (nome, uf) VALUES ($1, $2) RETURNING *",
        )
        .bind(&request.nome)
        .bind(&request.uf)
        .fetch_one(&self.pool)
        .await?;

        Ok(cidade)
    }

    pub async fn buscar_por_id(&self, id: i32) -> Result<Option<Cidade>, AppError> {
        let cidade = sqlx::query_as::<_, Cidade>("SELECT * FROM cidade WHERE id_cidade = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cidade)
    }

    pub async fn listar(&self, filtros: &CidadeFiltros) -> Result<Vec<Cidade>, AppError> {
        let limit = filtros.limit.unwrap_or(100).clamp(1, 500);

        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM cidade WHERE 1=1");
        if let Some(uf) = &filtros.uf {
            query.push(" AND uf = ").push_bind(uf.clone());
        }
        query.push(" ORDER BY nome LIMIT ").push_bind(limit);

        let cidades = query
            .build_query_as::<Cidade>()
            .fetch_all(&self.pool)
            .await?;

        Ok(cidades)
    }

    /// Uma cidade referenciada por qualquer viagem não pode ser excluída
    pub async fn referenciada_por_viagens(&self, id: i32) -> Result<bool, AppError> {
        let resultado: (bool,) = sqlx::query_as(
            "SELECT EXISTS(SELECT 1 FROM viagem WHERE cidade_origem = $1 OR cidade_destino = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(resultado.0)
    }

    pub async fn atualizar(&self, id: i32, request: &UpdateCidadeRequest) -> Result<Cidade, AppError> {
        let atual = self
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Cidade não encontrada".to_string()))?;

        let cidade = sqlx::query_as::<_, Cidade>(
            "UPDATE cidade SET nome = $2, uf = $3 WHERE id_cidade = $1 RETURNING *",
        )
        .bind(id)
        .bind(request.nome.clone().unwrap_or(atual.nome))
        .bind(request.uf.clone().unwrap_or(atual.uf))
        .fetch_one(&self.pool)
        .await?;

        Ok(cidade)
    }

    pub async fn excluir(&self, id: i32) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM cidade WHERE id_cidade = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Cidade não encontrada".to_string()));
        }

        Ok(())
    }
}
