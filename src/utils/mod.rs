//! Utilidades do sistema
//!
//! Este módulo contém utilidades para tratamento de erros, validação
//! e cálculo de janelas de relatório.

pub mod errors;
pub mod periodo;
pub mod validation;
