//! Modelos do sistema
//!
//! Este módulo contém os modelos de dados que mapeiam exatamente
//! o schema PostgreSQL da frota.

pub mod abastecimento;
pub mod cidade;
pub mod manutencao;
pub mod motorista;
pub mod veiculo;
pub mod viagem;

pub use abastecimento::{Abastecimento, TipoCombustivel};
pub use cidade::Cidade;
pub use manutencao::{Manutencao, TipoManutencao};
pub use motorista::{Motorista, StatusMotorista};
pub use veiculo::{StatusVeiculo, Veiculo};
pub use viagem::{StatusViagem, Viagem};
