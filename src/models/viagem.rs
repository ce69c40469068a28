//! Modelo de Viagem
//!
//! A viagem é a única máquina de estados do sistema:
//! em_andamento -> finalizada | cancelada (estados terminais).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

/// Estado da viagem - mapeia o ENUM status_viagem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "status_viagem", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum StatusViagem {
    Planejada,
    EmAndamento,
    Finalizada,
    Cancelada,
}

impl StatusViagem {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusViagem::Planejada => "planejada",
            StatusViagem::EmAndamento => "em_andamento",
            StatusViagem::Finalizada => "finalizada",
            StatusViagem::Cancelada => "cancelada",
        }
    }

    /// Finalizar e cancelar exigem uma viagem em andamento
    pub fn pode_encerrar(&self) -> bool {
        matches!(self, StatusViagem::EmAndamento)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Viagem {
    pub id_viagem: i32,
    pub id_veiculo: i32,
    pub cpf_motorista: Option<String>,
    pub cidade_origem: i32,
    pub cidade_destino: i32,
    pub data_saida: DateTime<Utc>,
    pub data_chegada: Option<DateTime<Utc>>,
    pub km_inicial: i64,
    pub km_final: Option<i64>,
    pub status_viagem: StatusViagem,
    pub observacoes: Option<String>,
    pub motivo_cancelamento: Option<String>,
}

impl Viagem {
    /// Distância percorrida, disponível apenas após a finalização
    pub fn km_rodados(&self) -> Option<i64> {
        self.km_final.map(|km_final| km_final - self.km_inicial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viagem(status: StatusViagem, km_inicial: i64, km_final: Option<i64>) -> Viagem {
        Viagem {
            id_viagem: 1,
            id_veiculo: 1,
            cpf_motorista: Some("12345678901".to_string()),
            cidade_origem: 1,
            cidade_destino: 2,
            data_saida: Utc::now(),
            data_chegada: None,
            km_inicial,
            km_final,
            status_viagem: status,
            observacoes: None,
            motivo_cancelamento: None,
        }
    }

    #[test]
    fn km_rodados_e_a_diferenca_dos_odometros() {
        let v = viagem(StatusViagem::Finalizada, 50_000, Some(50_120));
        assert_eq!(v.km_rodados(), Some(120));
    }

    #[test]
    fn km_rodados_indefinido_sem_km_final() {
        let v = viagem(StatusViagem::EmAndamento, 50_000, None);
        assert_eq!(v.km_rodados(), None);
    }

    #[test]
    fn apenas_viagem_em_andamento_pode_encerrar() {
        assert!(StatusViagem::EmAndamento.pode_encerrar());
        assert!(!StatusViagem::Planejada.pode_encerrar());
        assert!(!StatusViagem::Finalizada.pode_encerrar());
        assert!(!StatusViagem::Cancelada.pode_encerrar());
    }
}
