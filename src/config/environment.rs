//! Configuração de variáveis de ambiente

use std::env;

/// Configuração do ambiente de execução
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("PORT deve ser um número válido"),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|valor| {
                    valor
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

impl EnvironmentConfig {
    /// Verificar se estamos em modo de desenvolvimento
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Endereço de escuta do servidor
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
