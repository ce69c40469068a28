//! Serviço de ciclo de vida de viagens
//!
//! Única máquina de estados do sistema: uma viagem nasce em andamento e
//! termina finalizada ou cancelada. As mutações de status do veículo e do
//! motorista acontecem na mesma transação da viagem; o índice parcial
//! único em viagem(id_veiculo) é o backstop contra duas viagens
//! simultâneas do mesmo veículo.

use chrono::{TimeZone, Utc};
use num_traits::ToPrimitive;
use rand::Rng;
use sqlx::{PgConnection, PgPool};
use tracing::info;

use crate::dto::relatorio_dto::EstatisticasViagens;
use crate::dto::relatorio_dto::ResumoViagensPeriodo;
use crate::dto::viagem_dto::{
    AtualizarViagemRequest, CriarViagemRequest, ResultadoFinalizacao, RotaPopular, ViagemDetalhada,
    ViagemFiltros,
};
use crate::models::motorista::{Motorista, StatusMotorista};
use crate::models::veiculo::{StatusVeiculo, Veiculo};
use crate::models::viagem::Viagem;
use crate::repositories::viagem_repository::{NovaViagem, ViagemRepository};
use crate::utils::errors::AppError;
use crate::utils::periodo::{inicio_janela, normalizar_meses};

// Faixa de distância sorteada na finalização, em km
const DISTANCIA_MIN_KM: i64 = 60;
const DISTANCIA_MAX_KM: i64 = 1200;

pub struct ViagemService {
    pool: PgPool,
    repo: ViagemRepository,
}

impl ViagemService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: ViagemRepository::new(pool.clone()),
            pool,
        }
    }

    /// Inicia uma viagem para o veículo. Campos ausentes nas opções são
    /// sorteados: motorista entre os ativos, origem e destino entre as
    /// cidades cadastradas.
    pub async fn iniciar(
        &self,
        id_veiculo: i32,
        opcoes: CriarViagemRequest,
    ) -> Result<ViagemDetalhada, AppError> {
        let mut tx = self.pool.begin().await?;

        // 1. Veículo precisa existir e estar disponível
        let veiculo = ViagemRepository::buscar_veiculo_para_atualizacao_tx(&mut tx, id_veiculo)
            .await?
            .ok_or_else(|| AppError::NotFound("Veículo não encontrado".to_string()))?;
        validar_veiculo_disponivel(&veiculo)?;

        // 2. Motorista explícito ou sorteado entre os ativos
        let motorista = match &opcoes.cpf_motorista {
            Some(cpf) => {
                let motorista =
                    ViagemRepository::buscar_motorista_para_atualizacao_tx(&mut tx, cpf)
                        .await?
                        .ok_or_else(|| AppError::NotFound("Motorista não encontrado".to_string()))?;
                validar_motorista_disponivel(&motorista)?;
                Some(motorista)
            }
            None => ViagemRepository::sortear_motorista_disponivel_tx(&mut tx).await?,
        };

        // 3. Origem e destino, sempre distintos
        let (cidade_origem, cidade_destino) = resolver_cidades(&mut tx, &opcoes).await?;
        validar_cidades_distintas(cidade_origem, cidade_destino)?;

        // 4. Cria a viagem e marca veículo/motorista como em viagem
        let nova = NovaViagem {
            id_veiculo,
            cpf_motorista: motorista.as_ref().map(|m| m.cpf.clone()),
            cidade_origem,
            cidade_destino,
            data_saida: Utc::now(),
            km_inicial: veiculo.km_atual,
            observacoes: opcoes.observacoes,
        };
        let viagem = ViagemRepository::inserir_tx(&mut tx, &nova).await?;

        ViagemRepository::atualizar_status_veiculo_tx(&mut tx, id_veiculo, StatusVeiculo::EmViagem)
            .await?;
        if let Some(motorista) = &motorista {
            ViagemRepository::atualizar_status_motorista_tx(
                &mut tx,
                &motorista.cpf,
                StatusMotorista::EmViagem,
            )
            .await?;
        }

        tx.commit().await?;

        info!(
            "Viagem {} iniciada: veículo {} ({} -> {})",
            viagem.id_viagem, veiculo.placa, cidade_origem, cidade_destino
        );

        self.detalhada(viagem.id_viagem).await
    }

    /// Finaliza uma viagem em andamento: sorteia a distância percorrida,
    /// grava chegada e odômetro final e devolve veículo e motorista ao
    /// status ativo. O odômetro do veículo avança para o km final.
    pub async fn finalizar(&self, id_viagem: i32) -> Result<ResultadoFinalizacao, AppError> {
        let mut tx = self.pool.begin().await?;

        let viagem = ViagemRepository::buscar_viagem_para_atualizacao_tx(&mut tx, id_viagem)
            .await?
            .ok_or_else(|| AppError::NotFound("Viagem não encontrada".to_string()))?;
        validar_viagem_em_andamento(&viagem)?;

        let distancia = sortear_distancia();
        let km_final = viagem.km_inicial + distancia;

        let finalizada =
            ViagemRepository::finalizar_tx(&mut tx, id_viagem, Utc::now(), km_final).await?;
        ViagemRepository::atualizar_km_e_status_veiculo_tx(
            &mut tx,
            viagem.id_veiculo,
            km_final,
            StatusVeiculo::Ativo,
        )
        .await?;
        if let Some(cpf) = &viagem.cpf_motorista {
            ViagemRepository::atualizar_status_motorista_tx(&mut tx, cpf, StatusMotorista::Ativo)
                .await?;
        }

        tx.commit().await?;

        let km_rodados = finalizada.km_rodados().unwrap_or(distancia);
        info!("Viagem {} finalizada com {} km", id_viagem, km_rodados);

        let viagem = self.detalhada(id_viagem).await?;
        Ok(ResultadoFinalizacao { km_rodados, viagem })
    }

    /// Cancela uma viagem em andamento sem tocar nos odômetros
    pub async fn cancelar(
        &self,
        id_viagem: i32,
        motivo: Option<String>,
    ) -> Result<ViagemDetalhada, AppError> {
        let mut tx = self.pool.begin().await?;

        let viagem = ViagemRepository::buscar_viagem_para_atualizacao_tx(&mut tx, id_viagem)
            .await?
            .ok_or_else(|| AppError::NotFound("Viagem não encontrada".to_string()))?;
        validar_viagem_em_andamento(&viagem)?;

        ViagemRepository::cancelar_tx(&mut tx, id_viagem, motivo).await?;
        ViagemRepository::atualizar_status_veiculo_tx(
            &mut tx,
            viagem.id_veiculo,
            StatusVeiculo::Ativo,
        )
        .await?;
        if let Some(cpf) = &viagem.cpf_motorista {
            ViagemRepository::atualizar_status_motorista_tx(&mut tx, cpf, StatusMotorista::Ativo)
                .await?;
        }

        tx.commit().await?;

        info!("Viagem {} cancelada", id_viagem);

        self.detalhada(id_viagem).await
    }

    pub async fn listar(&self, filtros: &ViagemFiltros) -> Result<Vec<ViagemDetalhada>, AppError> {
        self.repo.listar(filtros).await
    }

    pub async fn em_andamento(&self) -> Result<Vec<ViagemDetalhada>, AppError> {
        self.repo.em_andamento().await
    }

    pub async fn detalhada(&self, id_viagem: i32) -> Result<ViagemDetalhada, AppError> {
        self.repo
            .buscar_detalhada(id_viagem)
            .await?
            .ok_or_else(|| AppError::NotFound("Viagem não encontrada".to_string()))
    }

    pub async fn atualizar_observacoes(
        &self,
        id_viagem: i32,
        request: AtualizarViagemRequest,
    ) -> Result<Viagem, AppError> {
        self.repo
            .atualizar_observacoes(id_viagem, request.observacoes)
            .await
    }

    pub async fn rotas_populares(&self, limit: Option<i64>) -> Result<Vec<RotaPopular>, AppError> {
        let limit = limit.unwrap_or(10).clamp(1, 100);
        self.repo.rotas_populares(limit).await
    }

    /// Estatísticas de viagens do período, com ranking de veículos e motoristas
    pub async fn estatisticas(&self, meses: Option<i64>) -> Result<EstatisticasViagens, AppError> {
        let meses = normalizar_meses(meses);
        let hoje = Utc::now().date_naive();
        let inicio = Utc.from_utc_datetime(
            &inicio_janela(hoje, meses)
                .and_hms_opt(0, 0, 0)
                .unwrap_or_default(),
        );

        let resumo = self.repo.resumo_periodo(inicio).await?;
        let top_veiculos = self.repo.top_veiculos(inicio, 10).await?;
        let top_motoristas = self.repo.top_motoristas(inicio, 10).await?;

        Ok(EstatisticasViagens {
            periodo_meses: meses,
            resumo: ResumoViagensPeriodo {
                total_viagens: resumo.total_viagens,
                em_andamento: resumo.em_andamento,
                finalizadas: resumo.finalizadas,
                canceladas: resumo.canceladas,
                km_total: resumo.km_total,
                km_media_por_viagem: resumo
                    .km_media_por_viagem
                    .map(|media| media.to_f64().unwrap_or(0.0)),
            },
            top_veiculos,
            top_motoristas,
        })
    }
}

async fn resolver_cidades(
    conn: &mut PgConnection,
    opcoes: &CriarViagemRequest,
) -> Result<(i32, i32), AppError> {
    if let (Some(origem), Some(destino)) = (opcoes.cidade_origem, opcoes.cidade_destino) {
        return Ok((origem, destino));
    }

    let sorteadas = ViagemRepository::sortear_cidades_tx(conn, 2).await?;
    let origem = match opcoes.cidade_origem {
        Some(origem) => origem,
        None => {
            sorteadas
                .first()
                .ok_or_else(|| {
                    AppError::Conflict(
                        "É preciso ter cidades cadastradas para simular uma viagem".to_string(),
                    )
                })?
                .id_cidade
        }
    };
    let destino = match opcoes.cidade_destino {
        Some(destino) => destino,
        None => sorteadas
            .iter()
            .map(|cidade| cidade.id_cidade)
            .find(|&id| id != origem)
            .ok_or_else(|| {
                AppError::Conflict(
                    "É preciso ter ao menos duas cidades cadastradas para simular uma viagem"
                        .to_string(),
                )
            })?,
    };

    Ok((origem, destino))
}

fn validar_veiculo_disponivel(veiculo: &Veiculo) -> Result<(), AppError> {
    match veiculo.status {
        StatusVeiculo::Ativo => Ok(()),
        StatusVeiculo::EmViagem => Err(AppError::Conflict(format!(
            "Veículo {} já está em viagem",
            veiculo.placa
        ))),
        StatusVeiculo::Manutencao | StatusVeiculo::Inativo => Err(AppError::Conflict(format!(
            "Veículo {} não está disponível (status: {})",
            veiculo.placa,
            veiculo.status.as_str()
        ))),
    }
}

fn validar_motorista_disponivel(motorista: &Motorista) -> Result<(), AppError> {
    if motorista.status.disponivel_para_viagem() {
        Ok(())
    } else {
        Err(AppError::Conflict(format!(
            "Motorista {} não está disponível (status: {})",
            motorista.nome,
            motorista.status.as_str()
        )))
    }
}

fn validar_cidades_distintas(origem: i32, destino: i32) -> Result<(), AppError> {
    if origem == destino {
        Err(AppError::BadRequest(
            "Cidade de origem e destino devem ser diferentes".to_string(),
        ))
    } else {
        Ok(())
    }
}

fn validar_viagem_em_andamento(viagem: &Viagem) -> Result<(), AppError> {
    if viagem.status_viagem.pode_encerrar() {
        Ok(())
    } else {
        Err(AppError::EstadoInvalido(format!(
            "Viagem {} não está em andamento (status atual: {})",
            viagem.id_viagem,
            viagem.status_viagem.as_str()
        )))
    }
}

fn sortear_distancia() -> i64 {
    rand::thread_rng().gen_range(DISTANCIA_MIN_KM..=DISTANCIA_MAX_KM)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::viagem::StatusViagem;
    use chrono::Utc;

    fn veiculo(status: StatusVeiculo) -> Veiculo {
        Veiculo {
            id_veiculo: 1,
            placa: "ABC1D23".to_string(),
            marca: "Volvo".to_string(),
            modelo: "FH 540".to_string(),
            ano: 2022,
            tipo: "caminhao".to_string(),
            km_atual: 50_000,
            capacidade_tanque: None,
            status,
            criado_em: Utc::now(),
        }
    }

    fn viagem(status: StatusViagem) -> Viagem {
        Viagem {
            id_viagem: 7,
            id_veiculo: 1,
            cpf_motorista: None,
            cidade_origem: 1,
            cidade_destino: 2,
            data_saida: Utc::now(),
            data_chegada: None,
            km_inicial: 50_000,
            km_final: None,
            status_viagem: status,
            observacoes: None,
            motivo_cancelamento: None,
        }
    }

    #[test]
    fn veiculo_em_viagem_gera_conflito() {
        let erro = validar_veiculo_disponivel(&veiculo(StatusVeiculo::EmViagem)).unwrap_err();
        assert!(matches!(erro, AppError::Conflict(_)));
    }

    #[test]
    fn veiculo_em_manutencao_ou_inativo_gera_conflito() {
        assert!(matches!(
            validar_veiculo_disponivel(&veiculo(StatusVeiculo::Manutencao)),
            Err(AppError::Conflict(_))
        ));
        assert!(matches!(
            validar_veiculo_disponivel(&veiculo(StatusVeiculo::Inativo)),
            Err(AppError::Conflict(_))
        ));
    }

    #[test]
    fn veiculo_ativo_pode_iniciar_viagem() {
        assert!(validar_veiculo_disponivel(&veiculo(StatusVeiculo::Ativo)).is_ok());
    }

    #[test]
    fn encerrar_viagem_fora_de_andamento_e_estado_invalido() {
        for status in [
            StatusViagem::Planejada,
            StatusViagem::Finalizada,
            StatusViagem::Cancelada,
        ] {
            let erro = validar_viagem_em_andamento(&viagem(status)).unwrap_err();
            assert!(matches!(erro, AppError::EstadoInvalido(_)));
        }
        assert!(validar_viagem_em_andamento(&viagem(StatusViagem::EmAndamento)).is_ok());
    }

    #[test]
    fn origem_e_destino_iguais_sao_rejeitados() {
        assert!(matches!(
            validar_cidades_distintas(3, 3),
            Err(AppError::BadRequest(_))
        ));
        assert!(validar_cidades_distintas(3, 4).is_ok());
    }

    #[test]
    fn distancia_sorteada_fica_na_faixa() {
        for _ in 0..100 {
            let distancia = sortear_distancia();
            assert!((DISTANCIA_MIN_KM..=DISTANCIA_MAX_KM).contains(&distancia));
        }
    }

    #[test]
    fn finalizacao_avanca_o_odometro() {
        // Cenário de referência: veículo com 50000 km finaliza com 120 km rodados
        let km_inicial = 50_000;
        let distancia = 120;
        let km_final = km_inicial + distancia;
        assert_eq!(km_final, 50_120);

        let mut v = viagem(StatusViagem::Finalizada);
        v.km_final = Some(km_final);
        assert_eq!(v.km_rodados(), Some(distancia));
    }
}
