//! Janela de relatório e calendário mensal
//!
//! Todos os relatórios agregam sobre uma janela móvel de `meses` meses.
//! O contrato é único para toda a API: ausente vale 6, fora de [1, 12]
//! é limitado ao intervalo. As datas de corte são calculadas aqui e
//! enviadas como parâmetro para o banco.

use chrono::{Datelike, NaiveDate};

pub const MESES_PADRAO: i64 = 6;
pub const MESES_MINIMO: i64 = 1;
pub const MESES_MAXIMO: i64 = 12;

pub const MESES_NOMES: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

/// Referência a um mês-calendário dentro da janela
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MesReferencia {
    pub ano: i32,
    pub mes: u32,
    /// Chave no formato "YYYY-MM", igual à produzida por to_char no SQL
    pub chave: String,
    /// Nome curto, ex. "Jan"
    pub nome: String,
}

impl MesReferencia {
    fn novo(ano: i32, mes: u32) -> Self {
        Self {
            ano,
            mes,
            chave: format!("{:04}-{:02}", ano, mes),
            nome: MESES_NOMES[(mes - 1) as usize].to_string(),
        }
    }

    /// Nome com o ano, ex. "Jan 2026"
    pub fn nome_completo(&self) -> String {
        format!("{} {}", self.nome, self.ano)
    }
}

/// Aplica o contrato único do parâmetro `meses`
pub fn normalizar_meses(meses: Option<i64>) -> u32 {
    meses.unwrap_or(MESES_PADRAO).clamp(MESES_MINIMO, MESES_MAXIMO) as u32
}

fn dias_no_mes(ano: i32, mes: u32) -> u32 {
    let (ano_seguinte, mes_seguinte) = if mes == 12 { (ano + 1, 1) } else { (ano, mes + 1) };
    NaiveDate::from_ymd_opt(ano_seguinte, mes_seguinte, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(28)
}

/// Data `n` meses antes, preservando o dia quando possível
pub fn subtrair_meses(data: NaiveDate, n: u32) -> NaiveDate {
    let total = data.year() * 12 + data.month0() as i32 - n as i32;
    let ano = total.div_euclid(12);
    let mes = total.rem_euclid(12) as u32 + 1;
    let dia = data.day().min(dias_no_mes(ano, mes));
    NaiveDate::from_ymd_opt(ano, mes, dia).unwrap_or(data)
}

/// Início da janela móvel: hoje menos `meses` meses
pub fn inicio_janela(hoje: NaiveDate, meses: u32) -> NaiveDate {
    subtrair_meses(hoje, meses)
}

/// Início da série mensal: primeiro dia do mês mais antigo da janela.
/// Usado também como corte dos totais que acompanham uma série, para
/// que a soma da série feche com o total do período.
pub fn inicio_serie(hoje: NaiveDate, meses: u32) -> NaiveDate {
    let base = subtrair_meses(hoje, meses - 1);
    NaiveDate::from_ymd_opt(base.year(), base.month(), 1).unwrap_or(base)
}

/// Os últimos `n` meses-calendário, do mais antigo para o mais recente
pub fn ultimos_meses(hoje: NaiveDate, n: u32) -> Vec<MesReferencia> {
    (0..n)
        .rev()
        .map(|i| {
            let data = subtrair_meses(hoje, i);
            MesReferencia::novo(data.year(), data.month())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dia(ano: i32, mes: u32, dia: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, dia).unwrap()
    }

    #[test]
    fn meses_ausente_vale_seis() {
        assert_eq!(normalizar_meses(None), 6);
    }

    #[test]
    fn meses_fora_do_intervalo_e_limitado() {
        assert_eq!(normalizar_meses(Some(0)), 1);
        assert_eq!(normalizar_meses(Some(-3)), 1);
        assert_eq!(normalizar_meses(Some(24)), 12);
        assert_eq!(normalizar_meses(Some(8)), 8);
    }

    #[test]
    fn subtrair_meses_cruza_o_ano() {
        assert_eq!(subtrair_meses(dia(2026, 2, 15), 3), dia(2025, 11, 15));
        assert_eq!(subtrair_meses(dia(2026, 1, 1), 12), dia(2025, 1, 1));
    }

    #[test]
    fn subtrair_meses_ajusta_fim_do_mes() {
        // 31 de março menos um mês cai no último dia de fevereiro
        assert_eq!(subtrair_meses(dia(2026, 3, 31), 1), dia(2026, 2, 28));
        assert_eq!(subtrair_meses(dia(2024, 3, 31), 1), dia(2024, 2, 29));
    }

    #[test]
    fn inicio_serie_e_o_primeiro_dia_do_mes_mais_antigo() {
        assert_eq!(inicio_serie(dia(2026, 8, 6), 6), dia(2026, 3, 1));
        assert_eq!(inicio_serie(dia(2026, 8, 6), 1), dia(2026, 8, 1));
    }

    #[test]
    fn ultimos_meses_vao_do_mais_antigo_ao_mais_recente() {
        let meses = ultimos_meses(dia(2026, 2, 10), 3);
        let chaves: Vec<&str> = meses.iter().map(|m| m.chave.as_str()).collect();
        assert_eq!(chaves, vec!["2025-12", "2026-01", "2026-02"]);
        assert_eq!(meses[0].nome, "Dez");
        assert_eq!(meses[0].nome_completo(), "Dez 2025");
    }

    #[test]
    fn serie_cobre_exatamente_a_janela() {
        // A chave mais antiga da série corresponde ao mês de inicio_serie
        let hoje = dia(2026, 8, 6);
        let meses = ultimos_meses(hoje, 12);
        assert_eq!(meses.len(), 12);
        let inicio = inicio_serie(hoje, 12);
        assert_eq!(meses[0].chave, format!("{:04}-{:02}", inicio.year(), inicio.month()));
    }
}
