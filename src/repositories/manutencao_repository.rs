use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::dto::manutencao_dto::{CreateManutencaoRequest, ManutencaoFiltros, UpdateManutencaoRequest};
use crate::models::manutencao::Manutencao;
use crate::utils::errors::AppError;

pub struct ManutencaoRepository {
    pool: PgPool,
}

impl ManutencaoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn criar(&self, request: &CreateManutencaoRequest) -> Result<Manutencao, AppError> {
        let manutencao = sqlx::query_as::<_, Manutencao>(
            r#"
            INSERT INTO manutencao
                (id_veiculo, data_man, tipo, descricao, valor, concluida, km_manutencao, fornecedor)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(request.id_veiculo)
        .bind(request.data_man)
        .bind(request.tipo)
        .bind(&request.descricao)
        .bind(request.valor)
        .bind(request.concluida.unwrap_or(false))
        .bind(request.km_manutencao)
        .bind(&request.fornecedor)
        .fetch_one(&self.pool)
        .await?;

        Ok(manutencao)
    }

    pub async fn buscar_por_id(&self, id: i32) -> Result<Option<Manutencao>, AppError> {
        let manutencao =
            sqlx::query_as::<_, Manutencao>("SELECT * FROM manutencao WHERE id_manutencao = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(manutencao)
    }

    pub async fn listar(&self, filtros: &ManutencaoFiltros) -> Result<Vec<Manutencao>, AppError> {
        let limit = filtros.limit.unwrap_or(50).clamp(1, 500);

        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM manutencao WHERE 1=1");
        if let Some(id_veiculo) = filtros.id_veiculo {
            query.push(" AND id_veiculo = ").push_bind(id_veiculo);
        }
        if let Some(concluida) = filtros.concluida {
            query.push(" AND concluida = ").push_bind(concluida);
        }
        query.push(" ORDER BY data_man DESC, id_manutencao DESC LIMIT ").push_bind(limit);

        let manutencoes = query
            .build_query_as::<Manutencao>()
            .fetch_all(&self.pool)
            .await?;

        Ok(manutencoes)
    }

    pub async fn atualizar(&self, id: i32, request: &UpdateManutencaoRequest) -> Result<Manutencao, AppError> {
        let atual = self
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Manutenção não encontrada".to_string()))?;

        let manutencao = sqlx::query_as::<_, Manutencao>(
            r#"
            UPDATE manutencao
            SET data_man = $2, tipo = $3, descricao = $4, valor = $5,
                concluida = $6, km_manutencao = $7, fornecedor = $8
            WHERE id_manutencao = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.data_man.unwrap_or(atual.data_man))
        .bind(request.tipo.unwrap_or(atual.tipo))
        .bind(request.descricao.clone().unwrap_or(atual.descricao))
        .bind(request.valor.or(atual.valor))
        .bind(request.concluida.unwrap_or(atual.concluida))
        .bind(request.km_manutencao.or(atual.km_manutencao))
        .bind(request.fornecedor.clone().or(atual.fornecedor))
        .fetch_one(&self.pool)
        .await?;

        Ok(manutencao)
    }

    pub async fn excluir(&self, id: i32) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM manutencao WHERE id_manutencao = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Manutenção não encontrada".to_string()));
        }

        Ok(())
    }
}
