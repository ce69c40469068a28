//! Repositórios de acesso a dados
//!
//! Todo o SQL do sistema vive aqui, um repositório por agregado.

pub mod abastecimento_repository;
pub mod cidade_repository;
pub mod manutencao_repository;
pub mod motorista_repository;
pub mod relatorio_repository;
pub mod veiculo_repository;
pub mod viagem_repository;
