//! Serviço de relatórios
//!
//! Orquestra as consultas agregadas do repositório e monta os shapes de
//! resposta: junta os agregados por chave em memória, calcula as razões
//! derivadas (sempre 0 quando o denominador é 0) e classifica consumo,
//! eficiência e tendência mês a mês.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::dto::relatorio_dto::*;
use crate::utils::errors::AppError;
use crate::utils::periodo::{
    inicio_janela, inicio_serie, normalizar_meses, ultimos_meses, MesReferencia,
};
use crate::repositories::relatorio_repository::RelatorioRepository;

pub struct RelatorioService {
    repo: RelatorioRepository,
}

impl RelatorioService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: RelatorioRepository::new(pool),
        }
    }

    /// Visão geral do sistema: frota, motoristas, viagens, cidades e custos
    pub async fn overview(&self, meses_param: Option<i64>) -> Result<RelatorioOverview, AppError> {
        let meses = normalizar_meses(meses_param);
        let (inicio_data, inicio_ts) = cortes_janela(meses);

        let frota = self.repo.contagens_frota().await?;
        let motoristas = self.repo.contagens_motoristas().await?;
        let motoristas_em_viagem = self.repo.motoristas_em_viagem().await?;
        let total_cidades = self.repo.total_cidades().await?;
        let viagens = self.repo.viagens_janela(inicio_ts).await?;
        let combustivel = self.repo.custo_combustivel(inicio_data).await?;
        let manutencao = self.repo.custo_manutencao(inicio_data).await?;

        let custo_combustivel = decimal_para_f64(combustivel.total);
        let custo_manutencao = decimal_para_f64(manutencao.total);

        Ok(RelatorioOverview {
            periodo_meses: meses,
            frota: ResumoFrota {
                total_veiculos: frota.total_veiculos,
                veiculos_ativos: frota.veiculos_ativos,
                veiculos_em_viagem: frota.veiculos_em_viagem,
                veiculos_manutencao: frota.veiculos_manutencao,
            },
            motoristas: ResumoMotoristas {
                total_motoristas: motoristas.total_motoristas,
                motoristas_ativos: motoristas.motoristas_ativos,
                motoristas_em_viagem,
            },
            viagens: ResumoViagens {
                total_viagens: viagens.total_viagens,
                viagens_em_andamento: viagens.em_andamento,
                viagens_finalizadas: viagens.finalizadas,
                viagens_canceladas: viagens.canceladas,
                km_total_percorrido: viagens.km_total,
            },
            cidades: ResumoCidades { total_cidades },
            custos: ResumoCustos {
                custo_total_combustivel: custo_combustivel,
                custo_total_manutencao: custo_manutencao,
                custo_operacional_total: custo_combustivel + custo_manutencao,
            },
        })
    }

    /// Relatório por veículo: viagens, abastecimentos e manutenções do
    /// período juntados em memória por id_veiculo
    pub async fn frota_completo(&self, meses_param: Option<i64>) -> Result<RelatorioFrota, AppError> {
        let meses = normalizar_meses(meses_param);
        let (inicio_data, inicio_ts) = cortes_janela(meses);

        let veiculos = self.repo.veiculos().await?;
        let viagens: HashMap<i32, _> = self
            .repo
            .viagens_por_veiculo(inicio_ts)
            .await?
            .into_iter()
            .map(|agregado| (agregado.id_veiculo, agregado))
            .collect();
        let abastecimentos: HashMap<i32, _> = self
            .repo
            .abastecimentos_por_veiculo(inicio_data)
            .await?
            .into_iter()
            .map(|agregado| (agregado.id_veiculo, agregado))
            .collect();
        let manutencoes: HashMap<i32, _> = self
            .repo
            .manutencoes_por_veiculo(inicio_data)
            .await?
            .into_iter()
            .map(|agregado| (agregado.id_veiculo, agregado))
            .collect();

        let resultado = veiculos
            .into_iter()
            .map(|veiculo| {
                let viagem = viagens.get(&veiculo.id_veiculo);
                let abastecimento = abastecimentos.get(&veiculo.id_veiculo);
                let manutencao = manutencoes.get(&veiculo.id_veiculo);

                let total_viagens = viagem.map(|a| a.total_viagens).unwrap_or(0);
                let km_rodados = viagem.map(|a| a.km_rodados).unwrap_or(0);
                let total_abastecimentos = abastecimento.map(|a| a.total_abastecimentos).unwrap_or(0);
                let total_litros = abastecimento
                    .map(|a| decimal_para_f64(a.total_litros))
                    .unwrap_or(0.0);
                let custo_combustivel = abastecimento
                    .map(|a| decimal_para_f64(a.custo_total))
                    .unwrap_or(0.0);
                let custo_manutencao = manutencao
                    .map(|a| decimal_para_f64(a.custo_concluido))
                    .unwrap_or(0.0);
                let custo_total = custo_combustivel + custo_manutencao;

                VeiculoFrotaCompleto {
                    id_veiculo: veiculo.id_veiculo,
                    placa: veiculo.placa,
                    marca: veiculo.marca,
                    modelo: veiculo.modelo,
                    ano: veiculo.ano,
                    tipo: veiculo.tipo,
                    km_atual: veiculo.km_atual,
                    status: veiculo.status,
                    total_viagens,
                    total_abastecimentos,
                    total_litros,
                    km_rodados,
                    custo_combustivel,
                    custo_manutencao,
                    custo_total,
                    custo_por_km: razao(custo_total, km_rodados as f64),
                    consumo_medio_km_l: razao(km_rodados as f64, total_litros),
                    km_por_abastecimento: razao(km_rodados as f64, total_abastecimentos as f64),
                }
            })
            .collect();

        Ok(RelatorioFrota {
            periodo_meses: meses,
            veiculos: resultado,
        })
    }

    /// Relatório por motorista, com taxa de conclusão e situação da CNH
    pub async fn motoristas_completo(&self, meses_param: Option<i64>) -> Result<RelatorioMotoristas, AppError> {
        let meses = normalizar_meses(meses_param);
        let (_, inicio_ts) = cortes_janela(meses);
        let hoje = Utc::now().date_naive();

        let motoristas = self.repo.motoristas().await?;
        let viagens: HashMap<String, _> = self
            .repo
            .viagens_por_motorista(inicio_ts)
            .await?
            .into_iter()
            .map(|agregado| (agregado.cpf.clone(), agregado))
            .collect();

        let resultado = motoristas
            .into_iter()
            .map(|motorista| {
                let viagem = viagens.get(&motorista.cpf);
                let total_viagens = viagem.map(|a| a.total_viagens).unwrap_or(0);
                let finalizadas = viagem.map(|a| a.finalizadas).unwrap_or(0);
                let dias = dias_para_vencer_cnh(motorista.validade_cnh, hoje);

                MotoristaCompleto {
                    cpf: motorista.cpf,
                    nome: motorista.nome,
                    cnh: motorista.cnh,
                    cat_cnh: motorista.cat_cnh,
                    validade_cnh: motorista.validade_cnh,
                    status: motorista.status,
                    total_viagens,
                    viagens_finalizadas: finalizadas,
                    viagens_canceladas: viagem.map(|a| a.canceladas).unwrap_or(0),
                    km_rodados: viagem.map(|a| a.km_rodados).unwrap_or(0),
                    taxa_conclusao: taxa_conclusao(finalizadas, total_viagens),
                    veiculos_diferentes: viagem.map(|a| a.veiculos_distintos).unwrap_or(0),
                    rotas_diferentes: viagem.map(|a| a.rotas_distintas).unwrap_or(0),
                    cnh_vencida: dias < 0,
                    dias_para_vencer_cnh: dias,
                }
            })
            .collect();

        Ok(RelatorioMotoristas {
            periodo_meses: meses,
            motoristas: resultado,
        })
    }

    /// Consumo de combustível por veículo; só entram veículos que
    /// abasteceram no período
    pub async fn eficiencia_combustivel(&self, meses_param: Option<i64>) -> Result<RelatorioEficiencia, AppError> {
        let meses = normalizar_meses(meses_param);
        let (inicio_data, inicio_ts) = cortes_janela(meses);

        let veiculos = self.repo.veiculos().await?;
        let abastecimentos: HashMap<i32, _> = self
            .repo
            .abastecimentos_por_veiculo(inicio_data)
            .await?
            .into_iter()
            .map(|agregado| (agregado.id_veiculo, agregado))
            .collect();
        let viagens: HashMap<i32, _> = self
            .repo
            .viagens_por_veiculo(inicio_ts)
            .await?
            .into_iter()
            .map(|agregado| (agregado.id_veiculo, agregado))
            .collect();

        let resultado = veiculos
            .into_iter()
            .filter_map(|veiculo| {
                let abastecimento = abastecimentos.get(&veiculo.id_veiculo)?;
                let total_litros = decimal_para_f64(abastecimento.total_litros);
                if total_litros <= 0.0 {
                    return None;
                }

                let km_rodados = viagens
                    .get(&veiculo.id_veiculo)
                    .map(|a| a.km_rodados)
                    .unwrap_or(0);
                let custo_total = decimal_para_f64(abastecimento.custo_total);
                let consumo = razao(km_rodados as f64, total_litros);

                Some(EficienciaVeiculo {
                    id_veiculo: veiculo.id_veiculo,
                    placa: veiculo.placa,
                    modelo: veiculo.modelo,
                    total_abastecimentos: abastecimento.total_abastecimentos,
                    total_litros,
                    custo_total,
                    km_rodados,
                    consumo_medio_km_l: consumo,
                    litros_por_100km: razao(total_litros, km_rodados as f64) * 100.0,
                    classificacao: classificar_consumo(consumo).to_string(),
                    custo_por_km: razao(custo_total, km_rodados as f64),
                })
            })
            .collect();

        Ok(RelatorioEficiencia {
            periodo_meses: meses,
            veiculos: resultado,
        })
    }

    /// Manutenções por veículo no período
    pub async fn manutencao_critica(&self, meses_param: Option<i64>) -> Result<RelatorioManutencao, AppError> {
        let meses = normalizar_meses(meses_param);
        let (inicio_data, _) = cortes_janela(meses);

        let veiculos = self.repo.veiculos().await?;
        let manutencoes: HashMap<i32, _> = self
            .repo
            .manutencoes_por_veiculo(inicio_data)
            .await?
            .into_iter()
            .map(|agregado| (agregado.id_veiculo, agregado))
            .collect();

        let resultado = veiculos
            .into_iter()
            .map(|veiculo| {
                let manutencao = manutencoes.get(&veiculo.id_veiculo);
                ManutencaoVeiculo {
                    id_veiculo: veiculo.id_veiculo,
                    placa: veiculo.placa,
                    modelo: veiculo.modelo,
                    total_manutencoes: manutencao.map(|a| a.total_manutencoes).unwrap_or(0),
                    manutencoes_preventivas: manutencao.map(|a| a.preventivas).unwrap_or(0),
                    manutencoes_corretivas: manutencao.map(|a| a.corretivas).unwrap_or(0),
                    manutencoes_concluidas: manutencao.map(|a| a.concluidas).unwrap_or(0),
                    custo_total: manutencao
                        .map(|a| decimal_para_f64(a.custo_concluido))
                        .unwrap_or(0.0),
                }
            })
            .collect();

        Ok(RelatorioManutencao {
            periodo_meses: meses,
            veiculos: resultado,
        })
    }

    /// Rotas mais utilizadas no período
    pub async fn rotas_analise(
        &self,
        meses_param: Option<i64>,
        limit: Option<i64>,
    ) -> Result<RelatorioRotas, AppError> {
        let meses = normalizar_meses(meses_param);
        let (_, inicio_ts) = cortes_janela(meses);
        let limit = limit.unwrap_or(20).clamp(1, 100);

        let rotas = self
            .repo
            .rotas_agregadas(inicio_ts, limit)
            .await?
            .into_iter()
            .map(|rota| RotaAnalise {
                rota: format!(
                    "{} ({}) → {} ({})",
                    rota.origem, rota.origem_uf, rota.destino, rota.destino_uf
                ),
                total_viagens: rota.total_viagens,
            })
            .collect();

        Ok(RelatorioRotas {
            periodo_meses: meses,
            rotas,
        })
    }

    /// Custo-benefício por veículo
    pub async fn custo_beneficio(&self, meses_param: Option<i64>) -> Result<RelatorioCustoBeneficio, AppError> {
        let meses = normalizar_meses(meses_param);
        let (inicio_data, inicio_ts) = cortes_janela(meses);

        let veiculos = self.repo.veiculos().await?;
        let viagens: HashMap<i32, _> = self
            .repo
            .viagens_por_veiculo(inicio_ts)
            .await?
            .into_iter()
            .map(|agregado| (agregado.id_veiculo, agregado))
            .collect();
        let abastecimentos: HashMap<i32, _> = self
            .repo
            .abastecimentos_por_veiculo(inicio_data)
            .await?
            .into_iter()
            .map(|agregado| (agregado.id_veiculo, agregado))
            .collect();
        let manutencoes: HashMap<i32, _> = self
            .repo
            .manutencoes_por_veiculo(inicio_data)
            .await?
            .into_iter()
            .map(|agregado| (agregado.id_veiculo, agregado))
            .collect();

        let resultado = veiculos
            .into_iter()
            .map(|veiculo| {
                let custo_combustivel = abastecimentos
                    .get(&veiculo.id_veiculo)
                    .map(|a| decimal_para_f64(a.custo_total))
                    .unwrap_or(0.0);
                let custo_manutencao = manutencoes
                    .get(&veiculo.id_veiculo)
                    .map(|a| decimal_para_f64(a.custo_concluido))
                    .unwrap_or(0.0);
                let custo_operacional = custo_combustivel + custo_manutencao;
                let viagem = viagens.get(&veiculo.id_veiculo);
                let km_rodados = viagem.map(|a| a.km_rodados).unwrap_or(0);
                let total_viagens = viagem.map(|a| a.total_viagens).unwrap_or(0);
                let custo_por_km = razao(custo_operacional, km_rodados as f64);

                CustoBeneficioVeiculo {
                    id_veiculo: veiculo.id_veiculo,
                    placa: veiculo.placa,
                    modelo: veiculo.modelo,
                    custo_operacional,
                    km_rodados,
                    custo_por_km,
                    total_viagens,
                    taxa_utilizacao: razao(total_viagens as f64, (meses * 30) as f64) * 100.0,
                    eficiencia_operacional: classificar_eficiencia_operacional(custo_por_km)
                        .to_string(),
                }
            })
            .collect();

        Ok(RelatorioCustoBeneficio {
            periodo_meses: meses,
            veiculos: resultado,
        })
    }

    /// Série mensal de viagens e custos com rótulo de tendência
    pub async fn comparativo_mensal(&self, meses_param: Option<i64>) -> Result<RelatorioComparativo, AppError> {
        let meses = normalizar_meses(meses_param);
        let (inicio_data, inicio_ts) = cortes_serie(meses);
        let hoje = Utc::now().date_naive();

        let viagens: HashMap<String, (i64, i64)> = self
            .repo
            .viagens_por_mes(inicio_ts)
            .await?
            .into_iter()
            .map(|mensal| (mensal.mes, (mensal.total_viagens, mensal.km)))
            .collect();
        let combustivel: HashMap<String, f64> = self
            .repo
            .combustivel_por_mes(inicio_data)
            .await?
            .into_iter()
            .map(|mensal| (mensal.mes, decimal_para_f64(mensal.valor)))
            .collect();
        let manutencao: HashMap<String, f64> = self
            .repo
            .manutencao_por_mes(inicio_data)
            .await?
            .into_iter()
            .map(|mensal| (mensal.mes, decimal_para_f64(mensal.valor)))
            .collect();

        let base = ultimos_meses(hoje, meses)
            .into_iter()
            .map(|mes| {
                let (total_viagens, km_rodados) = viagens.get(&mes.chave).copied().unwrap_or((0, 0));
                let custo_combustivel = combustivel.get(&mes.chave).copied().unwrap_or(0.0);
                let custo_manutencao = manutencao.get(&mes.chave).copied().unwrap_or(0.0);
                ComparativoMensal {
                    mes: mes.chave.clone(),
                    mes_nome: mes.nome_completo(),
                    total_viagens,
                    km_rodados,
                    custo_combustivel,
                    custo_manutencao,
                    custo_total: custo_combustivel + custo_manutencao,
                    tendencia_viagens: String::new(),
                    tendencia_custos: String::new(),
                }
            })
            .collect();

        Ok(RelatorioComparativo {
            periodo_meses: meses,
            comparativo: aplicar_tendencias(base),
        })
    }

    /// Linha do tempo de eventos da frota, do mais recente para o mais antigo
    pub async fn timeline(
        &self,
        meses_param: Option<i64>,
        limit: Option<i64>,
    ) -> Result<RelatorioTimeline, AppError> {
        let meses = normalizar_meses(meses_param);
        let (inicio_data, inicio_ts) = cortes_janela(meses);
        let limit = limit.unwrap_or(100).clamp(1, 500);

        let mut eventos: Vec<EventoTimeline> = Vec::new();

        for viagem in self.repo.eventos_viagens(inicio_ts, limit).await? {
            let km = viagem
                .km_final
                .map(|km_final| km_final - viagem.km_inicial)
                .unwrap_or(0);
            eventos.push(EventoTimeline {
                tipo: "viagem".to_string(),
                data: viagem.data_saida,
                descricao: if km > 0 {
                    format!("Viagem - {} km", km)
                } else {
                    "Viagem iniciada".to_string()
                },
                veiculo_placa: viagem.placa,
                valor: None,
                km: Some(km),
            });
        }

        for abastecimento in self.repo.eventos_abastecimentos(inicio_data, limit).await? {
            eventos.push(EventoTimeline {
                tipo: "abastecimento".to_string(),
                data: inicio_do_dia(abastecimento.data_abast),
                descricao: format!("Abastecimento - {:.1}L", decimal_para_f64(abastecimento.litros)),
                veiculo_placa: abastecimento.placa,
                valor: Some(decimal_para_f64(abastecimento.valor_total)),
                km: None,
            });
        }

        for manutencao in self.repo.eventos_manutencoes(inicio_data, limit).await? {
            eventos.push(EventoTimeline {
                tipo: "manutencao".to_string(),
                data: inicio_do_dia(manutencao.data_man),
                descricao: format!("Manutenção - {}", manutencao.descricao),
                veiculo_placa: manutencao.placa,
                valor: manutencao.valor.map(decimal_para_f64),
                km: None,
            });
        }

        eventos.sort_by(|a, b| b.data.cmp(&a.data));
        eventos.truncate(limit as usize);

        Ok(RelatorioTimeline {
            periodo_meses: meses,
            total_eventos: eventos.len(),
            eventos,
        })
    }

    /// Estatísticas gerais cruzadas (combustível, manutenção, viagens).
    /// Resumo e série usam o mesmo corte mensal, então a soma da série
    /// fecha com os totais do período.
    pub async fn estatisticas_gerais(&self, meses_param: Option<i64>) -> Result<EstatisticasGerais, AppError> {
        let meses = normalizar_meses(meses_param);
        let (inicio_data, inicio_ts) = cortes_serie(meses);
        let hoje = Utc::now().date_naive();

        let combustivel_total = self.repo.custo_combustivel(inicio_data).await?;
        let manutencao_total = self.repo.custo_manutencao(inicio_data).await?;
        let viagens = self.repo.viagens_janela(inicio_ts).await?;

        let combustivel_mes: HashMap<String, f64> = self
            .repo
            .combustivel_por_mes(inicio_data)
            .await?
            .into_iter()
            .map(|mensal| (mensal.mes, decimal_para_f64(mensal.valor)))
            .collect();
        let manutencao_mes: HashMap<String, f64> = self
            .repo
            .manutencao_por_mes(inicio_data)
            .await?
            .into_iter()
            .map(|mensal| (mensal.mes, decimal_para_f64(mensal.valor)))
            .collect();
        let km_mes: HashMap<String, i64> = self
            .repo
            .viagens_por_mes(inicio_ts)
            .await?
            .into_iter()
            .map(|mensal| (mensal.mes, mensal.km))
            .collect();

        let por_mes = montar_serie_mensal(
            &ultimos_meses(hoje, meses),
            &combustivel_mes,
            &manutencao_mes,
            &km_mes,
        );

        let custo_combustivel = decimal_para_f64(combustivel_total.total);
        let custo_manutencao = decimal_para_f64(manutencao_total.total);
        let custo_total = custo_combustivel + custo_manutencao;

        Ok(EstatisticasGerais {
            periodo_meses: meses,
            resumo: ResumoOperacional {
                custo_total_combustivel: custo_combustivel,
                custo_total_manutencao: custo_manutencao,
                custo_total_operacional: custo_total,
                km_total: viagens.km_total,
                custo_por_km: razao(custo_total, viagens.km_total as f64),
                total_viagens: viagens.total_viagens,
                viagens_finalizadas: viagens.finalizadas,
                total_abastecimentos: combustivel_total.quantidade,
                total_manutencoes: manutencao_total.quantidade,
            },
            por_mes,
        })
    }
}

// ---------------------------------------------------------------------------
// Funções puras de derivação

/// Cortes da janela móvel: data (para tabelas com DATE) e timestamp
/// (para data_saida)
fn cortes_janela(meses: u32) -> (NaiveDate, DateTime<Utc>) {
    let inicio = inicio_janela(Utc::now().date_naive(), meses);
    (inicio, inicio_do_dia(inicio))
}

/// Cortes alinhados ao primeiro dia do mês mais antigo da série
fn cortes_serie(meses: u32) -> (NaiveDate, DateTime<Utc>) {
    let inicio = inicio_serie(Utc::now().date_naive(), meses);
    (inicio, inicio_do_dia(inicio))
}

fn inicio_do_dia(data: NaiveDate) -> DateTime<Utc> {
    data.and_time(NaiveTime::MIN).and_utc()
}

fn decimal_para_f64(valor: Decimal) -> f64 {
    valor.to_f64().unwrap_or(0.0)
}

/// Razão com denominador possivelmente zero; nunca produz NaN/inf
fn razao(numerador: f64, denominador: f64) -> f64 {
    if denominador > 0.0 {
        numerador / denominador
    } else {
        0.0
    }
}

fn taxa_conclusao(finalizadas: i64, total: i64) -> f64 {
    razao(finalizadas as f64, total as f64) * 100.0
}

/// Faixas de consumo em km/L
fn classificar_consumo(km_por_litro: f64) -> &'static str {
    if km_por_litro >= 10.0 {
        "Excelente"
    } else if km_por_litro >= 8.0 {
        "Bom"
    } else if km_por_litro >= 6.0 {
        "Regular"
    } else {
        "Ruim"
    }
}

/// Faixas de custo operacional por km
fn classificar_eficiencia_operacional(custo_por_km: f64) -> &'static str {
    if custo_por_km > 0.0 && custo_por_km < 2.0 {
        "Alta"
    } else if (2.0..4.0).contains(&custo_por_km) {
        "Média"
    } else {
        "Baixa"
    }
}

/// Comparação estrita com o mês anterior; valores iguais são estáveis
fn rotular_tendencia<T: PartialOrd>(atual: T, anterior: T) -> &'static str {
    if atual > anterior {
        "Crescimento"
    } else if atual < anterior {
        "Queda"
    } else {
        "Estável"
    }
}

fn aplicar_tendencias(mut comparativo: Vec<ComparativoMensal>) -> Vec<ComparativoMensal> {
    for indice in 0..comparativo.len() {
        let (tendencia_viagens, tendencia_custos) = if indice == 0 {
            ("Estável", "Estável")
        } else {
            let anterior = &comparativo[indice - 1];
            let atual = &comparativo[indice];
            (
                rotular_tendencia(atual.total_viagens, anterior.total_viagens),
                rotular_tendencia(atual.custo_total, anterior.custo_total),
            )
        };
        comparativo[indice].tendencia_viagens = tendencia_viagens.to_string();
        comparativo[indice].tendencia_custos = tendencia_custos.to_string();
    }
    comparativo
}

/// Monta a série mensal da mais antiga para a mais recente; meses sem
/// movimento entram zerados
fn montar_serie_mensal(
    meses: &[MesReferencia],
    combustivel: &HashMap<String, f64>,
    manutencao: &HashMap<String, f64>,
    km: &HashMap<String, i64>,
) -> Vec<MesEstatistica> {
    meses
        .iter()
        .map(|mes| {
            let valor_combustivel = combustivel.get(&mes.chave).copied().unwrap_or(0.0);
            let valor_manutencao = manutencao.get(&mes.chave).copied().unwrap_or(0.0);
            MesEstatistica {
                mes: mes.chave.clone(),
                mes_nome: mes.nome.clone(),
                combustivel: valor_combustivel,
                manutencao: valor_manutencao,
                km: km.get(&mes.chave).copied().unwrap_or(0),
                custo_total: valor_combustivel + valor_manutencao,
            }
        })
        .collect()
}

/// Dias até o vencimento da CNH (negativo quando vencida, 0 sem validade)
fn dias_para_vencer_cnh(validade: Option<NaiveDate>, hoje: NaiveDate) -> i64 {
    validade
        .map(|data| (data - hoje).num_days())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dia(ano: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
    }

    #[test]
    fn razao_com_denominador_zero_e_zero() {
        assert_eq!(razao(100.0, 0.0), 0.0);
        assert_eq!(razao(0.0, 0.0), 0.0);
        assert_eq!(razao(150.0, 50.0), 3.0);
    }

    #[test]
    fn taxa_conclusao_sem_viagens_e_zero() {
        assert_eq!(taxa_conclusao(0, 0), 0.0);
        assert_eq!(taxa_conclusao(3, 4), 75.0);
        assert_eq!(taxa_conclusao(4, 4), 100.0);
    }

    #[test]
    fn faixas_de_consumo() {
        assert_eq!(classificar_consumo(12.0), "Excelente");
        assert_eq!(classificar_consumo(10.0), "Excelente");
        assert_eq!(classificar_consumo(9.9), "Bom");
        assert_eq!(classificar_consumo(8.0), "Bom");
        assert_eq!(classificar_consumo(6.0), "Regular");
        assert_eq!(classificar_consumo(5.9), "Ruim");
        assert_eq!(classificar_consumo(0.0), "Ruim");
    }

    #[test]
    fn faixas_de_eficiencia_operacional() {
        assert_eq!(classificar_eficiencia_operacional(1.5), "Alta");
        assert_eq!(classificar_eficiencia_operacional(2.0), "Média");
        assert_eq!(classificar_eficiencia_operacional(3.99), "Média");
        assert_eq!(classificar_eficiencia_operacional(4.0), "Baixa");
        // Sem km rodado o custo por km é 0 e a eficiência fica baixa
        assert_eq!(classificar_eficiencia_operacional(0.0), "Baixa");
    }

    #[test]
    fn tendencia_usa_comparacao_estrita() {
        assert_eq!(rotular_tendencia(10, 10), "Estável");
        assert_eq!(rotular_tendencia(15, 10), "Crescimento");
        assert_eq!(rotular_tendencia(10, 15), "Queda");
        assert_eq!(rotular_tendencia(10.0, 10.0), "Estável");
    }

    #[test]
    fn primeiro_mes_do_comparativo_e_estavel() {
        let base = vec![
            mes_comparativo("2026-06", 10, 100.0),
            mes_comparativo("2026-07", 10, 150.0),
            mes_comparativo("2026-08", 7, 150.0),
        ];
        let resultado = aplicar_tendencias(base);

        assert_eq!(resultado[0].tendencia_viagens, "Estável");
        assert_eq!(resultado[0].tendencia_custos, "Estável");
        assert_eq!(resultado[1].tendencia_viagens, "Estável");
        assert_eq!(resultado[1].tendencia_custos, "Crescimento");
        assert_eq!(resultado[2].tendencia_viagens, "Queda");
        assert_eq!(resultado[2].tendencia_custos, "Estável");
    }

    #[test]
    fn serie_mensal_preenche_meses_sem_movimento_com_zero() {
        let meses = crate::utils::periodo::ultimos_meses(dia(2026, 8, 6), 3);
        let combustivel = HashMap::from([("2026-06".to_string(), 300.0), ("2026-08".to_string(), 200.0)]);
        let manutencao = HashMap::from([("2026-08".to_string(), 50.0)]);
        let km = HashMap::from([("2026-06".to_string(), 1200_i64)]);

        let serie = montar_serie_mensal(&meses, &combustivel, &manutencao, &km);

        assert_eq!(serie.len(), 3);
        assert_eq!(serie[0].mes, "2026-06");
        assert_eq!(serie[0].combustivel, 300.0);
        assert_eq!(serie[0].custo_total, 300.0);
        assert_eq!(serie[1].mes, "2026-07");
        assert_eq!(serie[1].combustivel, 0.0);
        assert_eq!(serie[1].manutencao, 0.0);
        assert_eq!(serie[1].km, 0);
        assert_eq!(serie[2].mes, "2026-08");
        assert_eq!(serie[2].custo_total, 250.0);
    }

    #[test]
    fn soma_da_serie_fecha_com_o_total_do_periodo() {
        // Todos os agregados mensais caem dentro da janela, então a soma
        // da série precisa bater com o total agregado das mesmas chaves
        let meses = crate::utils::periodo::ultimos_meses(dia(2026, 8, 6), 6);
        let combustivel = HashMap::from([
            ("2026-03".to_string(), 120.0),
            ("2026-05".to_string(), 80.0),
            ("2026-08".to_string(), 200.0),
        ]);
        let manutencao = HashMap::from([
            ("2026-04".to_string(), 90.0),
            ("2026-08".to_string(), 10.0),
        ]);
        let km = HashMap::from([("2026-03".to_string(), 500_i64), ("2026-07".to_string(), 700_i64)]);

        let serie = montar_serie_mensal(&meses, &combustivel, &manutencao, &km);

        let soma_combustivel: f64 = serie.iter().map(|m| m.combustivel).sum();
        let soma_manutencao: f64 = serie.iter().map(|m| m.manutencao).sum();
        let soma_km: i64 = serie.iter().map(|m| m.km).sum();

        assert_eq!(soma_combustivel, combustivel.values().sum::<f64>());
        assert_eq!(soma_manutencao, manutencao.values().sum::<f64>());
        assert_eq!(soma_km, km.values().sum::<i64>());
    }

    #[test]
    fn dias_para_vencer_cnh_cobre_vencida_e_sem_validade() {
        let hoje = dia(2026, 8, 6);
        assert_eq!(dias_para_vencer_cnh(Some(dia(2026, 8, 16)), hoje), 10);
        assert_eq!(dias_para_vencer_cnh(Some(dia(2026, 8, 1)), hoje), -5);
        assert_eq!(dias_para_vencer_cnh(Some(hoje), hoje), 0);
        assert_eq!(dias_para_vencer_cnh(None, hoje), 0);
    }

    fn mes_comparativo(mes: &str, viagens: i64, custo: f64) -> ComparativoMensal {
        ComparativoMensal {
            mes: mes.to_string(),
            mes_nome: mes.to_string(),
            total_viagens: viagens,
            km_rodados: 0,
            custo_combustivel: custo,
            custo_manutencao: 0.0,
            custo_total: custo,
            tendencia_viagens: String::new(),
            tendencia_custos: String::new(),
        }
    }
}
