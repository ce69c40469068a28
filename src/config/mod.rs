//! Configuração do projeto
//!
//! Este módulo contém a configuração de banco de dados, variáveis de
//! ambiente e demais configurações do sistema.

pub mod database;
pub mod environment;

pub use environment::*;
