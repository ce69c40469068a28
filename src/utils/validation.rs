//! Utilidades de validação
//!
//! Este módulo contém funções helper para validação de dados
//! específicos do domínio de frota.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    // Placas nos formatos antigo (ABC-1234 / ABC1234) e Mercosul (ABC1D23)
    static ref PLACA_RE: Regex =
        Regex::new(r"^[A-Z]{3}-?\d{4}$|^[A-Z]{3}\d[A-Z]\d{2}$").expect("regex de placa válida");
    static ref UF_RE: Regex = Regex::new(r"^[A-Z]{2}$").expect("regex de UF válida");
}

/// Validar formato de placa de veículo
pub fn validar_placa(valor: &str) -> Result<(), ValidationError> {
    let placa = valor.trim().to_uppercase();
    if PLACA_RE.is_match(&placa) {
        Ok(())
    } else {
        let mut error = ValidationError::new("placa");
        error.add_param("value".into(), &valor.to_string());
        Err(error)
    }
}

/// Validar CPF: exatamente 11 dígitos numéricos
pub fn validar_cpf(valor: &str) -> Result<(), ValidationError> {
    if valor.len() == 11 && valor.chars().all(|c| c.is_ascii_digit()) {
        Ok(())
    } else {
        let mut error = ValidationError::new("cpf");
        error.add_param("value".into(), &valor.to_string());
        Err(error)
    }
}

/// Validar código de UF: duas letras maiúsculas
pub fn validar_uf(valor: &str) -> Result<(), ValidationError> {
    if UF_RE.is_match(valor) {
        Ok(())
    } else {
        let mut error = ValidationError::new("uf");
        error.add_param("value".into(), &valor.to_string());
        Err(error)
    }
}

/// Normalizar placa para armazenamento (maiúsculas, sem espaços)
pub fn normalizar_placa(valor: &str) -> String {
    valor.trim().to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aceita_placas_validas() {
        assert!(validar_placa("ABC-1234").is_ok());
        assert!(validar_placa("ABC1234").is_ok());
        assert!(validar_placa("ABC1D23").is_ok());
        assert!(validar_placa("abc1d23").is_ok());
    }

    #[test]
    fn rejeita_placas_invalidas() {
        assert!(validar_placa("AB-1234").is_err());
        assert!(validar_placa("ABCD123").is_err());
        assert!(validar_placa("").is_err());
    }

    #[test]
    fn cpf_exige_onze_digitos() {
        assert!(validar_cpf("12345678901").is_ok());
        assert!(validar_cpf("1234567890").is_err());
        assert!(validar_cpf("12345678901x").is_err());
        assert!(validar_cpf("123.456.789-01").is_err());
    }

    #[test]
    fn uf_exige_duas_letras() {
        assert!(validar_uf("SP").is_ok());
        assert!(validar_uf("sp").is_err());
        assert!(validar_uf("SAO").is_err());
    }
}
