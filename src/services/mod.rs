//! Services module
//!
//! Este módulo contém a lógica de negócio da aplicação: o ciclo de vida
//! das viagens e a agregação dos relatórios.

pub mod relatorio_service;
pub mod viagem_service;

pub use relatorio_service::RelatorioService;
pub use viagem_service::ViagemService;
