//! Repositório de relatórios
//!
//! Consultas agregadas consolidadas: cada recorte por veículo, motorista
//! ou mês é um único GROUP BY, e o serviço junta os agregados em memória.
//! Os cortes de janela chegam prontos como parâmetro.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::{FromRow, PgPool};

use crate::models::motorista::Motorista;
use crate::models::veiculo::Veiculo;
use crate::utils::errors::AppError;

/// Contagens da frota por status
#[derive(Debug, FromRow)]
pub struct FrotaContagens {
    pub total_veiculos: i64,
    pub veiculos_ativos: i64,
    pub veiculos_em_viagem: i64,
    pub veiculos_manutencao: i64,
}

/// Contagens de motoristas por status
#[derive(Debug, FromRow)]
pub struct MotoristaContagens {
    pub total_motoristas: i64,
    pub motoristas_ativos: i64,
}

/// Contagens de viagens: em andamento é global, o restante respeita a janela
#[derive(Debug, FromRow)]
pub struct ViagensContagens {
    pub total_viagens: i64,
    pub em_andamento: i64,
    pub finalizadas: i64,
    pub canceladas: i64,
    pub km_total: i64,
}

#[derive(Debug, FromRow)]
pub struct TotalComQuantidade {
    pub total: Decimal,
    pub quantidade: i64,
}

#[derive(Debug, FromRow)]
pub struct AgregadoViagemVeiculo {
    pub id_veiculo: i32,
    pub total_viagens: i64,
    pub km_rodados: i64,
}

#[derive(Debug, FromRow)]
pub struct AgregadoAbastecimentoVeiculo {
    pub id_veiculo: i32,
    pub total_abastecimentos: i64,
    pub total_litros: Decimal,
    pub custo_total: Decimal,
}

#[derive(Debug, FromRow)]
pub struct AgregadoManutencaoVeiculo {
    pub id_veiculo: i32,
    pub total_manutencoes: i64,
    pub preventivas: i64,
    pub corretivas: i64,
    pub concluidas: i64,
    pub custo_concluido: Decimal,
}

#[derive(Debug, FromRow)]
pub struct AgregadoViagemMotorista {
    pub cpf: String,
    pub total_viagens: i64,
    pub finalizadas: i64,
    pub canceladas: i64,
    pub km_rodados: i64,
    pub veiculos_distintos: i64,
    pub rotas_distintas: i64,
}

#[derive(Debug, FromRow)]
pub struct RotaAgregada {
    pub origem: String,
    pub origem_uf: String,
    pub destino: String,
    pub destino_uf: String,
    pub total_viagens: i64,
}

#[derive(Debug, FromRow)]
pub struct ValorMensal {
    pub mes: String,
    pub valor: Decimal,
}

#[derive(Debug, FromRow)]
pub struct ViagensMensal {
    pub mes: String,
    pub total_viagens: i64,
    pub km: i64,
}

#[derive(Debug, FromRow)]
pub struct EventoViagemRow {
    pub data_saida: DateTime<Utc>,
    pub km_inicial: i64,
    pub km_final: Option<i64>,
    pub placa: String,
}

#[derive(Debug, FromRow)]
pub struct EventoAbastecimentoRow {
    pub data_abast: NaiveDate,
    pub litros: Decimal,
    pub valor_total: Decimal,
    pub placa: String,
}

#[derive(Debug, FromRow)]
pub struct EventoManutencaoRow {
    pub data_man: NaiveDate,
    pub valor: Option<Decimal>,
    pub descricao: String,
    pub placa: String,
}

pub struct RelatorioRepository {
    pool: PgPool,
}

impl RelatorioRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Frota inteira, na ordem usada pelos relatórios por veículo
    pub async fn veiculos(&self) -> Result<Vec<Veiculo>, AppError> {
        let veiculos = sqlx::query_as::<_, Veiculo>("SELECT * FROM veiculo ORDER BY placa")
            .fetch_all(&self.pool)
            .await?;

        Ok(veiculos)
    }

    pub async fn motoristas(&self) -> Result<Vec<Motorista>, AppError> {
        let motoristas = sqlx::query_as::<_, Motorista>("SELECT * FROM motorista ORDER BY nome")
            .fetch_all(&self.pool)
            .await?;

        Ok(motoristas)
    }

    pub async fn contagens_frota(&self) -> Result<FrotaContagens, AppError> {
        let contagens = sqlx::query_as::<_, FrotaContagens>(
            r#"
            SELECT
                COUNT(*) AS total_veiculos,
                COUNT(*) FILTER (WHERE status = 'ativo') AS veiculos_ativos,
                COUNT(*) FILTER (WHERE status = 'em_viagem') AS veiculos_em_viagem,
                COUNT(*) FILTER (WHERE status = 'manutencao') AS veiculos_manutencao
            FROM veiculo
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(contagens)
    }

    pub async fn contagens_motoristas(&self) -> Result<MotoristaContagens, AppError> {
        let contagens = sqlx::query_as::<_, MotoristaContagens>(
            r#"
            SELECT
                COUNT(*) AS total_motoristas,
                COUNT(*) FILTER (WHERE status = 'ativo') AS motoristas_ativos
            FROM motorista
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(contagens)
    }

    pub async fn motoristas_em_viagem(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(DISTINCT cpf_motorista)
            FROM viagem
            WHERE status_viagem = 'em_andamento' AND cpf_motorista IS NOT NULL
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    pub async fn total_cidades(&self) -> Result<i64, AppError> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cidade")
            .fetch_one(&self.pool)
            .await?;

        Ok(total)
    }

    pub async fn viagens_janela(&self, inicio: DateTime<Utc>) -> Result<ViagensContagens, AppError> {
        let contagens = sqlx::query_as::<_, ViagensContagens>(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE data_saida >= $1) AS total_viagens,
                COUNT(*) FILTER (WHERE status_viagem = 'em_andamento') AS em_andamento,
                COUNT(*) FILTER (WHERE status_viagem = 'finalizada' AND data_saida >= $1) AS finalizadas,
                COUNT(*) FILTER (WHERE status_viagem = 'cancelada' AND data_saida >= $1) AS canceladas,
                COALESCE(SUM(CASE WHEN km_final IS NOT NULL AND data_saida >= $1
                                  THEN km_final - km_inicial ELSE 0 END), 0)::bigint AS km_total
            FROM viagem
            "#,
        )
        .bind(inicio)
        .fetch_one(&self.pool)
        .await?;

        Ok(contagens)
    }

    pub async fn custo_combustivel(&self, inicio: NaiveDate) -> Result<TotalComQuantidade, AppError> {
        let total = sqlx::query_as::<_, TotalComQuantidade>(
            r#"
            SELECT COALESCE(SUM(valor_total), 0) AS total, COUNT(*) AS quantidade
            FROM abastecimento
            WHERE data_abast >= $1
            "#,
        )
        .bind(inicio)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    /// Soma apenas manutenções concluídas; a quantidade conta todas
    pub async fn custo_manutencao(&self, inicio: NaiveDate) -> Result<TotalComQuantidade, AppError> {
        let total = sqlx::query_as::<_, TotalComQuantidade>(
            r#"
            SELECT
                COALESCE(SUM(CASE WHEN concluida THEN COALESCE(valor, 0) ELSE 0 END), 0) AS total,
                COUNT(*) AS quantidade
            FROM manutencao
            WHERE data_man >= $1
            "#,
        )
        .bind(inicio)
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    pub async fn viagens_por_veiculo(&self, inicio: DateTime<Utc>) -> Result<Vec<AgregadoViagemVeiculo>, AppError> {
        let agregados = sqlx::query_as::<_, AgregadoViagemVeiculo>(
            r#"
            SELECT
                id_veiculo,
                COUNT(*) AS total_viagens,
                COALESCE(SUM(CASE WHEN km_final IS NOT NULL THEN km_final - km_inicial ELSE 0 END), 0)::bigint AS km_rodados
            FROM viagem
            WHERE data_saida >= $1
            GROUP BY id_veiculo
            "#,
        )
        .bind(inicio)
        .fetch_all(&self.pool)
        .await?;

        Ok(agregados)
    }

    pub async fn abastecimentos_por_veiculo(&self, inicio: NaiveDate) -> Result<Vec<AgregadoAbastecimentoVeiculo>, AppError> {
        let agregados = sqlx::query_as::<_, AgregadoAbastecimentoVeiculo>(
            r#"
            SELECT
                id_veiculo,
                COUNT(*) AS total_abastecimentos,
                COALESCE(SUM(litros), 0) AS total_litros,
                COALESCE(SUM(valor_total), 0) AS custo_total
            FROM abastecimento
            WHERE data_abast >= $1
            GROUP BY id_veiculo
            "#,
        )
        .bind(inicio)
        .fetch_all(&self.pool)
        .await?;

        Ok(agregados)
    }

    pub async fn manutencoes_por_veiculo(&self, inicio: NaiveDate) -> Result<Vec<AgregadoManutencaoVeiculo>, AppError> {
        let agregados = sqlx::query_as::<_, AgregadoManutencaoVeiculo>(
            r#"
            SELECT
                id_veiculo,
                COUNT(*) AS total_manutencoes,
                COUNT(*) FILTER (WHERE tipo = 'preventiva') AS preventivas,
                COUNT(*) FILTER (WHERE tipo = 'corretiva') AS corretivas,
                COUNT(*) FILTER (WHERE concluida) AS concluidas,
                COALESCE(SUM(CASE WHEN concluida THEN COALESCE(valor, 0) ELSE 0 END), 0) AS custo_concluido
            FROM manutencao
            WHERE data_man >= $1
            GROUP BY id_veiculo
            "#,
        )
        .bind(inicio)
        .fetch_all(&self.pool)
        .await?;

        Ok(agregados)
    }

    pub async fn viagens_por_motorista(&self, inicio: DateTime<Utc>) -> Result<Vec<AgregadoViagemMotorista>, AppError> {
        let agregados = sqlx::query_as::<_, AgregadoViagemMotorista>(
            r#"
            SELECT
                cpf_motorista AS cpf,
                COUNT(*) AS total_viagens,
                COUNT(*) FILTER (WHERE status_viagem = 'finalizada') AS finalizadas,
                COUNT(*) FILTER (WHERE status_viagem = 'cancelada') AS canceladas,
                COALESCE(SUM(CASE WHEN km_final IS NOT NULL THEN km_final - km_inicial ELSE 0 END), 0)::bigint AS km_rodados,
                COUNT(DISTINCT id_veiculo) AS veiculos_distintos,
                COUNT(DISTINCT (cidade_origem, cidade_destino)) AS rotas_distintas
            FROM viagem
            WHERE cpf_motorista IS NOT NULL AND data_saida >= $1
            GROUP BY cpf_motorista
            "#,
        )
        .bind(inicio)
        .fetch_all(&self.pool)
        .await?;

        Ok(agregados)
    }

    pub async fn rotas_agregadas(&self, inicio: DateTime<Utc>, limit: i64) -> Result<Vec<RotaAgregada>, AppError> {
        let rotas = sqlx::query_as::<_, RotaAgregada>(
            r#"
            SELECT
                c1.nome AS origem, c1.uf AS origem_uf,
                c2.nome AS destino, c2.uf AS destino_uf,
                COUNT(*) AS total_viagens
            FROM viagem v
            JOIN cidade c1 ON c1.id_cidade = v.cidade_origem
            JOIN cidade c2 ON c2.id_cidade = v.cidade_destino
            WHERE v.data_saida >= $1
            GROUP BY c1.nome, c1.uf, c2.nome, c2.uf
            ORDER BY total_viagens DESC
            LIMIT $2
            "#,
        )
        .bind(inicio)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rotas)
    }

    pub async fn combustivel_por_mes(&self, inicio: NaiveDate) -> Result<Vec<ValorMensal>, AppError> {
        let meses = sqlx::query_as::<_, ValorMensal>(
            r#"
            SELECT
                to_char(data_abast, 'YYYY-MM') AS mes,
                COALESCE(SUM(valor_total), 0) AS valor
            FROM abastecimento
            WHERE data_abast >= $1
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(inicio)
        .fetch_all(&self.pool)
        .await?;

        Ok(meses)
    }

    pub async fn manutencao_por_mes(&self, inicio: NaiveDate) -> Result<Vec<ValorMensal>, AppError> {
        let meses = sqlx::query_as::<_, ValorMensal>(
            r#"
            SELECT
                to_char(data_man, 'YYYY-MM') AS mes,
                COALESCE(SUM(CASE WHEN concluida THEN COALESCE(valor, 0) ELSE 0 END), 0) AS valor
            FROM manutencao
            WHERE data_man >= $1
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(inicio)
        .fetch_all(&self.pool)
        .await?;

        Ok(meses)
    }

    pub async fn viagens_por_mes(&self, inicio: DateTime<Utc>) -> Result<Vec<ViagensMensal>, AppError> {
        let meses = sqlx::query_as::<_, ViagensMensal>(
            r#"
            SELECT
                to_char(data_saida, 'YYYY-MM') AS mes,
                COUNT(*) AS total_viagens,
                COALESCE(SUM(CASE WHEN km_final IS NOT NULL THEN km_final - km_inicial ELSE 0 END), 0)::bigint AS km
            FROM viagem
            WHERE data_saida >= $1
            GROUP BY 1
            ORDER BY 1
            "#,
        )
        .bind(inicio)
        .fetch_all(&self.pool)
        .await?;

        Ok(meses)
    }

    pub async fn eventos_viagens(&self, inicio: DateTime<Utc>, limit: i64) -> Result<Vec<EventoViagemRow>, AppError> {
        let eventos = sqlx::query_as::<_, EventoViagemRow>(
            r#"
            SELECT v.data_saida, v.km_inicial, v.km_final, ve.placa
            FROM viagem v
            JOIN veiculo ve ON ve.id_veiculo = v.id_veiculo
            WHERE v.data_saida >= $1
            ORDER BY v.data_saida DESC
            LIMIT $2
            "#,
        )
        .bind(inicio)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(eventos)
    }

    pub async fn eventos_abastecimentos(&self, inicio: NaiveDate, limit: i64) -> Result<Vec<EventoAbastecimentoRow>, AppError> {
        let eventos = sqlx::query_as::<_, EventoAbastecimentoRow>(
            r#"
            SELECT a.data_abast, a.litros, a.valor_total, ve.placa
            FROM abastecimento a
            JOIN veiculo ve ON ve.id_veiculo = a.id_veiculo
            WHERE a.data_abast >= $1
            ORDER BY a.data_abast DESC
            LIMIT $2
            "#,
        )
        .bind(inicio)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(eventos)
    }

    pub async fn eventos_manutencoes(&self, inicio: NaiveDate, limit: i64) -> Result<Vec<EventoManutencaoRow>, AppError> {
        let eventos = sqlx::query_as::<_, EventoManutencaoRow>(
            r#"
            SELECT m.data_man, m.valor, m.descricao, ve.placa
            FROM manutencao m
            JOIN veiculo ve ON ve.id_veiculo = m.id_veiculo
            WHERE m.data_man >= $1
            ORDER BY m.data_man DESC
            LIMIT $2
            "#,
        )
        .bind(inicio)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(eventos)
    }
}
