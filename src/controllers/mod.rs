//! Controllers de CRUD das entidades
//!
//! Orquestram validação, checagens de unicidade e chamadas ao
//! repositório. O ciclo de vida de viagens e os relatórios ficam nos
//! serviços.

pub mod abastecimento_controller;
pub mod cidade_controller;
pub mod manutencao_controller;
pub mod motorista_controller;
pub mod veiculo_controller;
