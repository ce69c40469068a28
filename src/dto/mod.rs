//! DTOs de request e response da API

pub mod abastecimento_dto;
pub mod cidade_dto;
pub mod common_dto;
pub mod manutencao_dto;
pub mod motorista_dto;
pub mod relatorio_dto;
pub mod veiculo_dto;
pub mod viagem_dto;
