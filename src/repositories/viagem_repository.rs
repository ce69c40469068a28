//! Repositório de viagens
//!
//! Além das listagens, concentra as operações usadas pelo serviço de
//! ciclo de vida. As funções `*_tx` recebem a conexão da transação em
//! aberto: leitura com FOR UPDATE e escrita precisam acontecer na mesma
//! transação para serializar viagens concorrentes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};

use crate::dto::relatorio_dto::{TopMotorista, TopVeiculo};
use crate::dto::viagem_dto::{RotaPopular, ViagemDetalhada, ViagemFiltros};
use crate::models::cidade::Cidade;
use crate::models::motorista::{Motorista, StatusMotorista};
use crate::models::veiculo::{StatusVeiculo, Veiculo};
use crate::models::viagem::Viagem;
use crate::utils::errors::AppError;

const SELECT_DETALHADA: &str = r#"
    SELECT
        v.id_viagem, v.id_veiculo, v.cpf_motorista, v.data_saida, v.data_chegada,
        v.km_inicial, v.km_final, v.status_viagem, v.observacoes, v.motivo_cancelamento,
        ve.placa, ve.marca, ve.modelo,
        m.nome AS motorista,
        c1.nome AS origem, c1.uf AS origem_uf,
        c2.nome AS destino, c2.uf AS destino_uf,
        v.km_final - v.km_inicial AS km_rodados
    FROM viagem v
    JOIN veiculo ve ON ve.id_veiculo = v.id_veiculo
    LEFT JOIN motorista m ON m.cpf = v.cpf_motorista
    JOIN cidade c1 ON c1.id_cidade = v.cidade_origem
    JOIN cidade c2 ON c2.id_cidade = v.cidade_destino
"#;

/// Dados de inserção de uma viagem em andamento
#[derive(Debug)]
pub struct NovaViagem {
    pub id_veiculo: i32,
    pub cpf_motorista: Option<String>,
    pub cidade_origem: i32,
    pub cidade_destino: i32,
    pub data_saida: DateTime<Utc>,
    pub km_inicial: i64,
    pub observacoes: Option<String>,
}

/// Agregado de viagens do período, para /viagens/estatisticas/geral
#[derive(Debug, FromRow)]
pub struct ResumoViagensRow {
    pub total_viagens: i64,
    pub em_andamento: i64,
    pub finalizadas: i64,
    pub canceladas: i64,
    pub km_total: i64,
    pub km_media_por_viagem: Option<Decimal>,
}

pub struct ViagemRepository {
    pool: PgPool,
}

impl ViagemRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn listar(&self, filtros: &ViagemFiltros) -> Result<Vec<ViagemDetalhada>, AppError> {
        let limit = filtros.limit.unwrap_or(50).clamp(1, 500);

        let mut query = QueryBuilder::<Postgres>::new(SELECT_DETALHADA);
        query.push(" WHERE 1=1");
        if let Some(status) = filtros.status {
            query.push(" AND v.status_viagem = ").push_bind(status);
        }
        if let Some(id_veiculo) = filtros.id_veiculo {
            query.push(" AND v.id_veiculo = ").push_bind(id_veiculo);
        }
        if let Some(cpf) = &filtros.cpf_motorista {
            query.push(" AND v.cpf_motorista = ").push_bind(cpf.clone());
        }
        query.push(" ORDER BY v.id_viagem DESC LIMIT ").push_bind(limit);

        let viagens = query
            .build_query_as::<ViagemDetalhada>()
            .fetch_all(&self.pool)
            .await?;

        Ok(viagens)
    }

    pub async fn buscar_detalhada(&self, id: i32) -> Result<Option<ViagemDetalhada>, AppError> {
        let sql = format!("{} WHERE v.id_viagem = $1", SELECT_DETALHADA);
        let viagem = sqlx::query_as::<_, ViagemDetalhada>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(viagem)
    }

    pub async fn em_andamento(&self) -> Result<Vec<ViagemDetalhada>, AppError> {
        let sql = format!(
            "{} WHERE v.status_viagem = 'em_andamento' ORDER BY v.data_saida",
            SELECT_DETALHADA
        );
        let viagens = sqlx::query_as::<_, ViagemDetalhada>(&sql)
            .fetch_all(&self.pool)
            .await?;

        Ok(viagens)
    }

    pub async fn atualizar_observacoes(&self, id: i32, observacoes: Option<String>) -> Result<Viagem, AppError> {
        let viagem = sqlx::query_as::<_, Viagem>(
            "UPDATE viagem SET observacoes = $2 WHERE id_viagem = $1 RETURNING *",
        )
        .bind(id)
        .bind(observacoes)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound("Viagem não encontrada".to_string()))?;

        Ok(viagem)
    }

    pub async fn rotas_populares(&self, limit: i64) -> Result<Vec<RotaPopular>, AppError> {
        let rotas = sqlx::query_as::<_, RotaPopular>(
            r#"
            SELECT
                c1.nome AS origem, c1.uf AS origem_uf,
                c2.nome AS destino, c2.uf AS destino_uf,
                COUNT(*) AS total_viagens
            FROM viagem v
            JOIN cidade c1 ON c1.id_cidade = v.cidade_origem
            JOIN cidade c2 ON c2.id_cidade = v.cidade_destino
            GROUP BY c1.nome, c1.uf, c2.nome, c2.uf
            ORDER BY total_viagens DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rotas)
    }

    pub async fn resumo_periodo(&self, inicio: DateTime<Utc>) -> Result<ResumoViagensRow, AppError> {
        let resumo = sqlx::query_as::<_, ResumoViagensRow>(
            r#"
            SELECT
                COUNT(*) AS total_viagens,
                COUNT(*) FILTER (WHERE status_viagem = 'em_andamento') AS em_andamento,
                COUNT(*) FILTER (WHERE status_viagem = 'finalizada') AS finalizadas,
                COUNT(*) FILTER (WHERE status_viagem = 'cancelada') AS canceladas,
                COALESCE(SUM(CASE WHEN km_final IS NOT NULL THEN km_final - km_inicial ELSE 0 END), 0)::bigint AS km_total,
                AVG(CASE WHEN km_final IS NOT NULL THEN (km_final - km_inicial)::numeric END) AS km_media_por_viagem
            FROM viagem
            WHERE data_saida >= $1
            "#,
        )
        .bind(inicio)
        .fetch_one(&self.pool)
        .await?;

        Ok(resumo)
    }

    pub async fn top_veiculos(&self, inicio: DateTime<Utc>, limit: i64) -> Result<Vec<TopVeiculo>, AppError> {
        let top = sqlx::query_as::<_, TopVeiculo>(
            r#"
            SELECT
                ve.placa, ve.modelo,
                COUNT(*) AS total_viagens,
                COALESCE(SUM(CASE WHEN vg.km_final IS NOT NULL THEN vg.km_final - vg.km_inicial ELSE 0 END), 0)::bigint AS km_total
            FROM viagem vg
            JOIN veiculo ve ON ve.id_veiculo = vg.id_veiculo
            WHERE vg.data_saida >= $1
            GROUP BY ve.id_veiculo, ve.placa, ve.modelo
            ORDER BY total_viagens DESC
            LIMIT $2
            "#,
        )
        .bind(inicio)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(top)
    }

    pub async fn top_motoristas(&self, inicio: DateTime<Utc>, limit: i64) -> Result<Vec<TopMotorista>, AppError> {
        let top = sqlx::query_as::<_, TopMotorista>(
            r#"
            SELECT
                m.nome,
                COUNT(*) AS total_viagens,
                COALESCE(SUM(CASE WHEN vg.km_final IS NOT NULL THEN vg.km_final - vg.km_inicial ELSE 0 END), 0)::bigint AS km_total
            FROM viagem vg
            JOIN motorista m ON m.cpf = vg.cpf_motorista
            WHERE vg.data_saida >= $1
            GROUP BY m.cpf, m.nome
            ORDER BY total_viagens DESC
            LIMIT $2
            "#,
        )
        .bind(inicio)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(top)
    }

    // -----------------------------------------------------------------------
    // Operações dentro da transação do ciclo de vida

    pub async fn buscar_veiculo_para_atualizacao_tx(
        conn: &mut PgConnection,
        id_veiculo: i32,
    ) -> Result<Option<Veiculo>, AppError> {
        let veiculo =
            sqlx::query_as::<_, Veiculo>("SELECT * FROM veiculo WHERE id_veiculo = $1 FOR UPDATE")
                .bind(id_veiculo)
                .fetch_optional(conn)
                .await?;

        Ok(veiculo)
    }

    pub async fn buscar_motorista_para_atualizacao_tx(
        conn: &mut PgConnection,
        cpf: &str,
    ) -> Result<Option<Motorista>, AppError> {
        let motorista =
            sqlx::query_as::<_, Motorista>("SELECT * FROM motorista WHERE cpf = $1 FOR UPDATE")
                .bind(cpf)
                .fetch_optional(conn)
                .await?;

        Ok(motorista)
    }

    pub async fn buscar_viagem_para_atualizacao_tx(
        conn: &mut PgConnection,
        id_viagem: i32,
    ) -> Result<Option<Viagem>, AppError> {
        let viagem =
            sqlx::query_as::<_, Viagem>("SELECT * FROM viagem WHERE id_viagem = $1 FOR UPDATE")
                .bind(id_viagem)
                .fetch_optional(conn)
                .await?;

        Ok(viagem)
    }

    pub async fn sortear_cidades_tx(conn: &mut PgConnection, quantidade: i64) -> Result<Vec<Cidade>, AppError> {
        let cidades =
            sqlx::query_as::<_, Cidade>("SELECT * FROM cidade ORDER BY random() LIMIT $1")
                .bind(quantidade)
                .fetch_all(conn)
                .await?;

        Ok(cidades)
    }

    pub async fn sortear_motorista_disponivel_tx(conn: &mut PgConnection) -> Result<Option<Motorista>, AppError> {
        let motorista = sqlx::query_as::<_, Motorista>(
            "SELECT * FROM motorista WHERE status = 'ativo' ORDER BY random() LIMIT 1",
        )
        .fetch_optional(conn)
        .await?;

        Ok(motorista)
    }

    pub async fn inserir_tx(conn: &mut PgConnection, nova: &NovaViagem) -> Result<Viagem, AppError> {
        let viagem = sqlx::query_as::<_, Viagem>(
            r#"
            INSERT INTO viagem
                (id_veiculo, cpf_motorista, cidade_origem, cidade_destino,
                 data_saida, km_inicial, status_viagem, observacoes)
            VALUES ($1, $2, $3, $4, $5, $6, 'em_andamento', $7)
            RETURNING *
            "#,
        )
        .bind(nova.id_veiculo)
        .bind(&nova.cpf_motorista)
        .bind(nova.cidade_origem)
        .bind(nova.cidade_destino)
        .bind(nova.data_saida)
        .bind(nova.km_inicial)
        .bind(&nova.observacoes)
        .fetch_one(conn)
        .await?;

        Ok(viagem)
    }

    pub async fn finalizar_tx(
        conn: &mut PgConnection,
        id_viagem: i32,
        data_chegada: DateTime<Utc>,
        km_final: i64,
    ) -> Result<Viagem, AppError> {
        let viagem = sqlx::query_as::<_, Viagem>(
            r#"
            UPDATE viagem
            SET status_viagem = 'finalizada', data_chegada = $2, km_final = $3
            WHERE id_viagem = $1
            RETURNING *
            "#,
        )
        .bind(id_viagem)
        .bind(data_chegada)
        .bind(km_final)
        .fetch_one(conn)
        .await?;

        Ok(viagem)
    }

    pub async fn cancelar_tx(
        conn: &mut PgConnection,
        id_viagem: i32,
        motivo: Option<String>,
    ) -> Result<Viagem, AppError> {
        let viagem = sqlx::query_as::<_, Viagem>(
            r#"
            UPDATE viagem
            SET status_viagem = 'cancelada', motivo_cancelamento = $2
            WHERE id_viagem = $1
            RETURNING *
            "#,
        )
        .bind(id_viagem)
        .bind(motivo)
        .fetch_one(conn)
        .await?;

        Ok(viagem)
    }

    pub async fn atualizar_status_veiculo_tx(
        conn: &mut PgConnection,
        id_veiculo: i32,
        status: StatusVeiculo,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE veiculo SET status = $2 WHERE id_veiculo = $1")
            .bind(id_veiculo)
            .bind(status)
            .execute(conn)
            .await?;

        Ok(())
    }

    pub async fn atualizar_km_e_status_veiculo_tx(
        conn: &mut PgConnection,
        id_veiculo: i32,
        km_atual: i64,
        status: StatusVeiculo,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE veiculo SET km_atual = $2, status = $3 WHERE id_veiculo = $1")
            .bind(id_veiculo)
            .bind(km_atual)
            .bind(status)
            .execute(conn)
            .await?;

        Ok(())
    }

    pub async fn atualizar_status_motorista_tx(
        conn: &mut PgConnection,
        cpf: &str,
        status: StatusMotorista,
    ) -> Result<(), AppError> {
        sqlx::query("UPDATE motorista SET status = $2 WHERE cpf = $1")
            .bind(cpf)
            .bind(status)
            .execute(conn)
            .await?;

        Ok(())
    }
}
