pub mod abastecimento_routes;
pub mod cidade_routes;
pub mod estatisticas_routes;
pub mod manutencao_routes;
pub mod motorista_routes;
pub mod relatorio_routes;
pub mod veiculo_routes;
pub mod viagem_routes;
