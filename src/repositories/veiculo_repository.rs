use sqlx::{PgPool, Postgres, QueryBuilder};

use crate::dto::veiculo_dto::{CreateVeiculoRequest, UpdateVeiculoRequest, VeiculoFiltros};
use crate::models::veiculo::Veiculo;
use crate::utils::errors::AppError;

pub struct VeiculoRepository {
    pool: PgPool,
}

impl VeiculoRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn criar(&self, placa: &str, request: &CreateVeiculoRequest) -> Result<Veiculo, AppError> {
        let veiculo = sqlx::query_as::<_, Veiculo>(
            r#"
            INSERT INTO veiculo (placa, marca, modelo, ano, tipo, km_atual, capacidade_tanque)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(placa)
        .bind(&request.marca)
        .bind(&request.modelo)
        .bind(request.ano)
        .bind(&request.tipo)
        .bind(request.km_atual.unwrap_or(0))
        .bind(request.capacidade_tanque)
        .fetch_one(&self.pool)
        .await?;

        Ok(veiculo)
    }

    pub async fn buscar_por_id(&self, id: i32) -> Result<Option<Veiculo>, AppError> {
        let veiculo = sqlx::query_as::<_, Veiculo>("SELECT * FROM veiculo WHERE id_veiculo = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(veiculo)
    }

    pub async fn listar(&self, filtros: &VeiculoFiltros) -> Result<Vec<Veiculo>, AppError> {
        let limit = filtros.limit.unwrap_or(100).clamp(1, 500);

        let mut query = QueryBuilder::<Postgres>::new("SELECT * FROM veiculo WHERE 1=1");
        if let Some(status) = filtros.status {
            query.push(" AND status = ").push_bind(status);
        }
        if let Some(tipo) = &filtros.tipo {
            query.push(" AND tipo = ").push_bind(tipo.clone());
        }
        query.push(" ORDER BY placa LIMIT ").push_bind(limit);

        let veiculos = query
            .build_query_as::<Veiculo>()
            .fetch_all(&self.pool)
            .await?;

        Ok(veiculos)
    }

    pub async fn placa_existe(&self, placa: &str) -> Result<bool, AppError> {
        let resultado: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM veiculo WHERE placa = $1)")
                .bind(placa)
                .fetch_one(&self.pool)
                .await?;

        Ok(resultado.0)
    }

    pub async fn atualizar(&self, id: i32, request: &UpdateVeiculoRequest) -> Result<Veiculo, AppError> {
        let atual = self
            .buscar_por_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;

        // O odômetro nunca anda para trás
        if let Some(km) = request.km_atual {
            if km < atual.km_atual {
                return Err(AppError::BadRequest(format!(
                    "km_atual não pode reduzir de {} para {}",
                    atual.km_atual, km
                )));
            }
        }

        let veiculo = sqlx::query_as::<_, Veiculo>(
            r#"
            UPDATE veiculo
            SET placa = $2, marca = $3, modelo = $4, ano = $5, tipo = $6,
                km_atual = $7, capacidade_tanque = $8, status = $9
            WHERE id_veiculo = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.placa.clone().unwrap_or(atual.placa))
        .bind(request.marca.clone().unwrap_or(atual.marca))
        .bind(request.modelo.clone().unwrap_or(atual.modelo))
        .bind(request.ano.unwrap_or(atual.ano))
        .bind(request.tipo.clone().unwrap_or(atual.tipo))
        .bind(request.km_atual.unwrap_or(atual.km_atual))
        .bind(request.capacidade_tanque.or(atual.capacidade_tanque))
        .bind(request.status.unwrap_or(atual.status))
        .fetch_one(&self.pool)
        .await?;

        Ok(veiculo)
    }

    pub async fn excluir(&self, id: i32) -> Result<(), AppError> {
        let resultado = sqlx::query("DELETE FROM veiculo WHERE id_veiculo = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if resultado.rows_affected() == 0 {
            return Err(AppError::NotFound("Veículo não encontrado".to_string()));
        }

        Ok(())
    }
}
