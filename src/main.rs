mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Carregar variáveis de ambiente
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚛 Gestão de Frota - API");
    info!("========================");

    let config = EnvironmentConfig::default();

    // Inicializar banco de dados
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Erro conectando ao banco de dados: {}", e);
            return Err(anyhow::anyhow!("Erro de banco de dados: {}", e));
        }
    };

    db_connection.run_migrations().await?;
    info!("✅ Migrações aplicadas");

    let pool = db_connection.pool().clone();
    let app_state = AppState::new(pool, config.clone());

    // CORS: permissivo em desenvolvimento, restrito às origens configuradas
    let cors = if config.is_development() || config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(&config.cors_origins)
    };

    let app = Router::new()
        .route("/health", get(health))
        .nest("/veiculos", routes::veiculo_routes::create_veiculo_router())
        .nest("/motoristas", routes::motorista_routes::create_motorista_router())
        .nest("/cidades", routes::cidade_routes::create_cidade_router())
        .nest("/viagens", routes::viagem_routes::create_viagem_router())
        .nest("/abastecimentos", routes::abastecimento_routes::create_abastecimento_router())
        .nest("/manutencoes", routes::manutencao_routes::create_manutencao_router())
        .nest("/relatorios", routes::relatorio_routes::create_relatorio_router())
        .nest("/estatisticas", routes::estatisticas_routes::create_estatisticas_router())
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = config.server_addr().parse()?;

    info!("🌐 Servidor iniciando em http://{}", addr);
    info!("🔍 Endpoints disponíveis:");
    info!("   GET  /health - Health check");
    info!("🚗 Frota:");
    info!("   CRUD /veiculos, /motoristas, /cidades, /abastecimentos, /manutencoes");
    info!("🧭 Viagens:");
    info!("   GET  /viagens, /viagens/em-andamento, /viagens/:id");
    info!("   POST /viagens/simular/:id_veiculo, /viagens/criar");
    info!("   POST /viagens/finalizar/:id_viagem, /viagens/cancelar/:id_viagem");
    info!("📊 Relatórios:");
    info!("   GET  /estatisticas/geral, /relatorios/overview, /relatorios/frota-completo");
    info!("   GET  /relatorios/motoristas-completo, /relatorios/eficiencia-combustivel");
    info!("   GET  /relatorios/manutencao-critica, /relatorios/rotas-analise");
    info!("   GET  /relatorios/custo-beneficio, /relatorios/comparativo-mensal, /relatorios/timeline");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("👋 Servidor encerrado");
    Ok(())
}

/// Health check simples
async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "gestao-frota",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Sinal de desligamento gracioso
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Ctrl+C recebido, desligando servidor...");
        },
        _ = terminate => {
            info!("🛑 Sinal de término recebido, desligando servidor...");
        },
    }
}
